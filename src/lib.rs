//src/lib.rs

use axum::{
    routing::{get, post},
    Router,
};

pub mod common;
pub mod config;
pub mod handlers;
pub mod models;
pub mod pipeline;
pub mod services;

pub use crate::config::{AppState, Settings};

/// Monta o router completo. Separado do `main` para os testes usarem direto.
pub fn build_router(app_state: AppState) -> Router {
    let report_routes = Router::new()
        .route("/{category}/config", get(handlers::reports::get_chart_config))
        .route("/{category}/colors", get(handlers::reports::get_color_scheme))
        .route("/{category}/bar", post(handlers::reports::bar_chart))
        .route("/{category}/pie", post(handlers::reports::pie_chart))
        .route("/{category}/line", post(handlers::reports::line_chart))
        .route("/{category}/summary", post(handlers::reports::summary))
        .route("/{category}/charts", post(handlers::reports::charts));

    Router::new()
        .route("/api/health", get(|| async { "OK" }))
        .nest("/api/reports", report_routes)
        .with_state(app_state)
}
