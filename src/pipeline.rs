// src/pipeline.rs
//
// Transforma (categoria, linhas) em dados prontos para os gráficos do painel.
// Funções puras: sem I/O, sem estado, mesma entrada -> mesma saída.

pub mod orders;
pub mod palette;
pub mod performance;
pub mod products;

use std::collections::HashMap;

use serde_json::Value;

use crate::common::coerce::finite_or_zero;
use crate::models::{
    ChartConfig, ChartSeries, ColorScheme, PieSlice, ReportCategory, ReportData, ReportSummary,
};

/// Quantos itens os rankings de barras mostram.
pub const TOP_N: usize = 7;

pub struct ChartTitles {
    pub bar: &'static str,
    pub pie: &'static str,
    pub line: &'static str,
}

impl ChartTitles {
    pub fn config(&self) -> ChartConfig {
        ChartConfig {
            bar_chart_title: self.bar.to_string(),
            pie_chart_title: self.pie.to_string(),
            line_chart_title: self.line.to_string(),
            ..ChartConfig::default()
        }
    }
}

/// Regras de uma categoria de relatório. Os métodos padrão são o comportamento
/// de categoria desconhecida, então cada categoria sobrescreve só o que define.
/// As linhas chegam aqui já garantidamente não vazias.
pub trait ReportStrategy: Send + Sync {
    fn color_scheme(&self) -> ColorScheme {
        palette::ORDERS.scheme()
    }

    fn chart_config(&self) -> ChartConfig {
        ChartConfig::default()
    }

    fn bar(&self, _rows: &[Value]) -> ChartSeries {
        ChartSeries::default()
    }

    fn pie(&self, _rows: &[Value]) -> Vec<PieSlice> {
        Vec::new()
    }

    fn line(&self, _rows: &[Value]) -> ChartSeries {
        ChartSeries::default()
    }

    fn summary(&self, _rows: &[Value]) -> ReportSummary {
        ReportSummary::default()
    }
}

struct FallbackReport;

impl ReportStrategy for FallbackReport {}

static ORDERS_REPORT: orders::OrdersReport = orders::OrdersReport;
static PRODUCTS_REPORT: products::ProductsReport = products::ProductsReport;
static PERFORMANCE_REPORT: performance::PerformanceReport = performance::PerformanceReport;
static FALLBACK_REPORT: FallbackReport = FallbackReport;

pub fn strategy_for(category: ReportCategory) -> &'static dyn ReportStrategy {
    match category {
        ReportCategory::Orders => &ORDERS_REPORT,
        ReportCategory::Products => &PRODUCTS_REPORT,
        ReportCategory::Performance => &PERFORMANCE_REPORT,
        ReportCategory::Unknown => &FALLBACK_REPORT,
    }
}

pub fn get_color_scheme(category: impl Into<ReportCategory>) -> ColorScheme {
    strategy_for(category.into()).color_scheme()
}

pub fn get_chart_config(category: impl Into<ReportCategory>) -> ChartConfig {
    strategy_for(category.into()).chart_config()
}

pub fn prepare_bar_chart_data(category: impl Into<ReportCategory>, rows: &[Value]) -> ChartSeries {
    if rows.is_empty() {
        return ChartSeries::default();
    }
    strategy_for(category.into()).bar(rows)
}

pub fn prepare_pie_chart_data(category: impl Into<ReportCategory>, rows: &[Value]) -> Vec<PieSlice> {
    if rows.is_empty() {
        return Vec::new();
    }
    strategy_for(category.into()).pie(rows)
}

pub fn prepare_line_chart_data(category: impl Into<ReportCategory>, report: &ReportData) -> ChartSeries {
    let rows = report.rows();
    if rows.is_empty() {
        return ChartSeries::default();
    }
    strategy_for(category.into()).line(rows)
}

pub fn prepare_summary(category: impl Into<ReportCategory>, rows: &[Value]) -> ReportSummary {
    if rows.is_empty() {
        return ReportSummary::default();
    }
    strategy_for(category.into()).summary(rows)
}

// --- Helpers compartilhados pelas categorias ---

/// Soma por rótulo preservando a ordem em que cada rótulo apareceu primeiro.
pub(crate) fn sum_by_label<I>(items: I) -> Vec<(String, f64)>
where
    I: IntoIterator<Item = (String, f64)>,
{
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut groups: Vec<(String, f64)> = Vec::new();

    for (label, amount) in items {
        match index.get(&label) {
            Some(&pos) => groups[pos].1 += amount,
            None => {
                index.insert(label.clone(), groups.len());
                groups.push((label, amount));
            }
        }
    }

    // Soma estourada vira 0 antes de ordenar
    for group in &mut groups {
        group.1 = finite_or_zero(group.1);
    }

    groups
}

/// Ordenação estável, maior primeiro; empates mantêm a ordem de chegada.
pub(crate) fn top_by_value(mut points: Vec<(String, f64)>, limit: usize) -> Vec<(String, f64)> {
    points.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
    points.truncate(limit);
    points
}

/// Fatias com percentual relativo a `total`. Com total zero nada é emitido.
pub(crate) fn share_slices(points: Vec<(String, f64)>, total: f64) -> Vec<PieSlice> {
    if total <= 0.0 {
        return Vec::new();
    }

    points
        .into_iter()
        .map(|(label, value)| PieSlice {
            label,
            value: finite_or_zero(value),
            percentage: finite_or_zero(value * 100.0 / total),
        })
        .collect()
}
