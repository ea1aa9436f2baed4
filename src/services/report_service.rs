// src/services/report_service.rs

use crate::{
    common::error::AppError,
    models::{
        ChartConfig, ChartSeries, ColorScheme, PieSlice, ReportCategory, ReportCharts, ReportData,
        ReportSummary,
    },
    pipeline,
};

#[derive(Clone)]
pub struct ReportService {
    max_rows: usize,
}

impl ReportService {
    pub fn new(max_rows: usize) -> Self {
        Self { max_rows }
    }

    pub fn max_rows(&self) -> usize {
        self.max_rows
    }

    // Resolve a tag. Categoria desconhecida não é erro, só fica registrada.
    fn resolve(&self, tag: &str) -> ReportCategory {
        let category = ReportCategory::from_tag(tag);
        if category == ReportCategory::Unknown {
            tracing::warn!("Categoria de relatório desconhecida '{}', usando padrão", tag);
        }
        category
    }

    fn check_rows(&self, report: &ReportData) -> Result<(), AppError> {
        let received = report.rows().len();
        if received > self.max_rows {
            return Err(AppError::TooManyRows {
                max: self.max_rows,
                received,
            });
        }
        Ok(())
    }

    pub fn color_scheme(&self, tag: &str) -> ColorScheme {
        pipeline::get_color_scheme(self.resolve(tag))
    }

    pub fn chart_config(&self, tag: &str) -> ChartConfig {
        pipeline::get_chart_config(self.resolve(tag))
    }

    pub fn bar_chart(&self, tag: &str, report: &ReportData) -> Result<ChartSeries, AppError> {
        self.check_rows(report)?;
        let category = self.resolve(tag);
        tracing::debug!(category = category.as_str(), rows = report.rows().len(), "gráfico de barras");
        Ok(pipeline::prepare_bar_chart_data(category, report.rows()))
    }

    pub fn pie_chart(&self, tag: &str, report: &ReportData) -> Result<Vec<PieSlice>, AppError> {
        self.check_rows(report)?;
        let category = self.resolve(tag);
        tracing::debug!(category = category.as_str(), rows = report.rows().len(), "gráfico de pizza");
        Ok(pipeline::prepare_pie_chart_data(category, report.rows()))
    }

    pub fn line_chart(&self, tag: &str, report: &ReportData) -> Result<ChartSeries, AppError> {
        self.check_rows(report)?;
        let category = self.resolve(tag);
        tracing::debug!(category = category.as_str(), rows = report.rows().len(), "gráfico de linha");
        Ok(pipeline::prepare_line_chart_data(category, report))
    }

    pub fn summary(&self, tag: &str, report: &ReportData) -> Result<ReportSummary, AppError> {
        self.check_rows(report)?;
        let category = self.resolve(tag);
        tracing::debug!(category = category.as_str(), rows = report.rows().len(), "resumo");
        Ok(pipeline::prepare_summary(category, report.rows()))
    }

    /// Painel completo: config, cores e as três projeções numa resposta só.
    pub fn charts(&self, tag: &str, report: &ReportData) -> Result<ReportCharts, AppError> {
        self.check_rows(report)?;
        let category = self.resolve(tag);
        let rows = report.rows();

        tracing::info!(category = category.as_str(), rows = rows.len(), "Montando painel do relatório");

        Ok(ReportCharts {
            category,
            config: pipeline::get_chart_config(category),
            colors: pipeline::get_color_scheme(category),
            bar: pipeline::prepare_bar_chart_data(category, rows),
            pie: pipeline::prepare_pie_chart_data(category, rows),
            line: pipeline::prepare_line_chart_data(category, report),
            summary: pipeline::prepare_summary(category, rows),
        })
    }
}
