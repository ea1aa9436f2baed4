// src/models/chart.rs

use serde::Serialize;

use super::report::ReportCategory;
use crate::common::coerce::finite_or_zero;

// 1. Série de barras / linhas
// labels e values sempre com o mesmo tamanho, na ordem de exibição.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartSeries {
    pub labels: Vec<String>,
    pub values: Vec<f64>,
    pub is_currency: bool,
    pub title: String,
}

impl ChartSeries {
    pub fn from_points<I>(points: I, is_currency: bool, title: &str) -> Self
    where
        I: IntoIterator<Item = (String, f64)>,
    {
        let (labels, values): (Vec<String>, Vec<f64>) = points
            .into_iter()
            .map(|(label, value)| (label, finite_or_zero(value)))
            .unzip();
        Self {
            labels,
            values,
            is_currency,
            title: title.to_string(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

// 2. Fatia de pizza
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PieSlice {
    pub label: String,
    pub value: f64,
    pub percentage: f64, // 0..=100
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Bar,
    Pie,
    Line,
}

// 3. Configuração do painel
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartConfig {
    pub show_bar_chart: bool,
    pub show_pie_chart: bool,
    pub show_line_chart: bool,
    pub show_tables: bool,
    pub show_summary: bool,
    pub dashboard_charts: Vec<ChartKind>,
    pub bar_chart_title: String,
    pub pie_chart_title: String,
    pub line_chart_title: String,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            show_bar_chart: true,
            show_pie_chart: true,
            show_line_chart: true,
            show_tables: true,
            show_summary: true,
            dashboard_charts: vec![ChartKind::Bar, ChartKind::Pie, ChartKind::Line],
            bar_chart_title: String::new(),
            pie_chart_title: String::new(),
            line_chart_title: String::new(),
        }
    }
}

// 4. Paleta de cores
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorScheme {
    pub primary: String,
    pub secondary: String,
    pub palette: Vec<String>,
}

// 5. Cards de resumo
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryMetric {
    pub key: String,
    pub label: String,
    pub value: f64,
    pub is_currency: bool,
}

impl SummaryMetric {
    pub fn new(key: &str, label: &str, value: f64, is_currency: bool) -> Self {
        Self {
            key: key.to_string(),
            label: label.to_string(),
            value: finite_or_zero(value),
            is_currency,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportSummary {
    pub metrics: Vec<SummaryMetric>,
}

impl ReportSummary {
    pub fn metric(&self, key: &str) -> Option<&SummaryMetric> {
        self.metrics.iter().find(|m| m.key == key)
    }
}

// Tudo o que um painel precisa numa chamada só
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportCharts {
    pub category: ReportCategory,
    pub config: ChartConfig,
    pub colors: ColorScheme,
    pub bar: ChartSeries,
    pub pie: Vec<PieSlice>,
    pub line: ChartSeries,
    pub summary: ReportSummary,
}
