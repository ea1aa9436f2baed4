// src/handlers/reports.rs

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{common::error::AppError, config::AppState, models::ReportData};

// GET /api/reports/{category}/config
pub async fn get_chart_config(
    State(app_state): State<AppState>,
    Path(category): Path<String>,
) -> impl IntoResponse {
    let config = app_state.report_service.chart_config(&category);
    (StatusCode::OK, Json(config))
}

// GET /api/reports/{category}/colors
pub async fn get_color_scheme(
    State(app_state): State<AppState>,
    Path(category): Path<String>,
) -> impl IntoResponse {
    let colors = app_state.report_service.color_scheme(&category);
    (StatusCode::OK, Json(colors))
}

// POST /api/reports/{category}/bar
pub async fn bar_chart(
    State(app_state): State<AppState>,
    Path(category): Path<String>,
    Json(payload): Json<ReportData>,
) -> Result<impl IntoResponse, AppError> {
    let series = app_state.report_service.bar_chart(&category, &payload)?;
    Ok((StatusCode::OK, Json(series)))
}

// POST /api/reports/{category}/pie
pub async fn pie_chart(
    State(app_state): State<AppState>,
    Path(category): Path<String>,
    Json(payload): Json<ReportData>,
) -> Result<impl IntoResponse, AppError> {
    let slices = app_state.report_service.pie_chart(&category, &payload)?;
    Ok((StatusCode::OK, Json(slices)))
}

// POST /api/reports/{category}/line
pub async fn line_chart(
    State(app_state): State<AppState>,
    Path(category): Path<String>,
    Json(payload): Json<ReportData>,
) -> Result<impl IntoResponse, AppError> {
    let series = app_state.report_service.line_chart(&category, &payload)?;
    Ok((StatusCode::OK, Json(series)))
}

// POST /api/reports/{category}/summary
pub async fn summary(
    State(app_state): State<AppState>,
    Path(category): Path<String>,
    Json(payload): Json<ReportData>,
) -> Result<impl IntoResponse, AppError> {
    let summary = app_state.report_service.summary(&category, &payload)?;
    Ok((StatusCode::OK, Json(summary)))
}

// POST /api/reports/{category}/charts
pub async fn charts(
    State(app_state): State<AppState>,
    Path(category): Path<String>,
    Json(payload): Json<ReportData>,
) -> Result<impl IntoResponse, AppError> {
    let charts = app_state.report_service.charts(&category, &payload)?;
    Ok((StatusCode::OK, Json(charts)))
}
