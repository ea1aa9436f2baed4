// src/pipeline/performance.rs

use serde_json::Value;

use super::{palette, share_slices, ChartTitles, ReportStrategy};
use crate::{
    common::{
        coerce::{coerce_f64, coerce_i64, coerce_label},
        dates::PeriodKey,
    },
    models::{ChartConfig, ChartSeries, ColorScheme, PerformanceRow, PieSlice, ReportSummary, SummaryMetric},
};

const UNKNOWN_PERIOD: &str = "Unknown";

pub const TITLES: ChartTitles = ChartTitles {
    bar: "Completed Orders by Period",
    pie: "Delivery Timeliness",
    line: "Average Rating by Period",
};

pub struct PerformanceReport;

/// Linhas em ordem cronológica de `period`, com o rótulo de cada uma.
/// Sem corte de top-N: todos os períodos aparecem.
fn rows_by_period(rows: &[Value]) -> Vec<(String, PerformanceRow)> {
    let mut keyed: Vec<(PeriodKey, String, PerformanceRow)> = rows
        .iter()
        .map(|value| {
            let row = PerformanceRow::from_value(value);
            let label = coerce_label(&row.period).unwrap_or_else(|| UNKNOWN_PERIOD.to_string());
            (PeriodKey::from_text(&label), label, row)
        })
        .collect();

    keyed.sort_by(|a, b| a.0.cmp(&b.0));
    keyed.into_iter().map(|(_, label, row)| (label, row)).collect()
}

#[derive(Debug, Default, Clone, Copy, PartialEq)]
struct Timeliness {
    on_time: i64,
    late: i64,
    early: i64,
}

impl Timeliness {
    // Contagens negativas não fazem sentido numa pizza: viram 0
    fn from_rows(rows: &[PerformanceRow]) -> Self {
        rows.iter().fold(Self::default(), |acc, row| Self {
            on_time: acc.on_time.saturating_add(coerce_i64(&row.on_time).max(0)),
            late: acc.late.saturating_add(coerce_i64(&row.late).max(0)),
            early: acc.early.saturating_add(coerce_i64(&row.early).max(0)),
        })
    }

    fn total(&self) -> i64 {
        self.on_time.saturating_add(self.late).saturating_add(self.early)
    }
}

fn parse_rows(rows: &[Value]) -> Vec<PerformanceRow> {
    rows.iter().map(PerformanceRow::from_value).collect()
}

impl ReportStrategy for PerformanceReport {
    fn color_scheme(&self) -> ColorScheme {
        palette::PERFORMANCE.scheme()
    }

    fn chart_config(&self) -> ChartConfig {
        TITLES.config()
    }

    fn bar(&self, rows: &[Value]) -> ChartSeries {
        ChartSeries::from_points(
            rows_by_period(rows)
                .into_iter()
                .map(|(label, row)| (label, coerce_f64(&row.completed_orders))),
            false,
            TITLES.bar,
        )
    }

    fn pie(&self, rows: &[Value]) -> Vec<PieSlice> {
        let t = Timeliness::from_rows(&parse_rows(rows));
        let total = t.total();
        if total == 0 {
            return Vec::new();
        }

        share_slices(
            vec![
                ("On Time".to_string(), t.on_time as f64),
                ("Late".to_string(), t.late as f64),
                ("Early".to_string(), t.early as f64),
            ],
            total as f64,
        )
    }

    fn line(&self, rows: &[Value]) -> ChartSeries {
        ChartSeries::from_points(
            rows_by_period(rows)
                .into_iter()
                .map(|(label, row)| (label, coerce_f64(&row.rating))),
            false,
            TITLES.line,
        )
    }

    fn summary(&self, rows: &[Value]) -> ReportSummary {
        let parsed = parse_rows(rows);

        let completed: f64 = parsed.iter().map(|r| coerce_f64(&r.completed_orders)).sum();
        let rating_sum: f64 = parsed.iter().map(|r| coerce_f64(&r.rating)).sum();
        let average_rating = rating_sum / parsed.len() as f64;

        let t = Timeliness::from_rows(&parsed);
        let on_time_rate = match t.total() {
            0 => 0.0,
            total => t.on_time as f64 * 100.0 / total as f64,
        };

        ReportSummary {
            metrics: vec![
                SummaryMetric::new("completed_orders", "Completed Orders", completed, false),
                SummaryMetric::new("average_rating", "Average Rating", average_rating, false),
                SummaryMetric::new("on_time_rate", "On-Time Rate", on_time_rate, false),
            ],
        }
    }
}
