// src/pipeline/orders.rs

use std::collections::BTreeMap;

use serde_json::Value;

use super::{palette, share_slices, sum_by_label, top_by_value, ChartTitles, ReportStrategy, TOP_N};
use crate::{
    common::{
        coerce::{coerce_f64, coerce_label},
        dates::DayKey,
    },
    models::{ChartConfig, ChartSeries, ColorScheme, OrderRow, PieSlice, ReportSummary, SummaryMetric},
};

const UNKNOWN_PRODUCT: &str = "Unknown Product";
const UNKNOWN_STATUS: &str = "Unknown";

pub const TITLES: ChartTitles = ChartTitles {
    bar: "Top Products by Sales Value",
    pie: "Orders by Status",
    line: "Sales Over Time",
};

pub struct OrdersReport;

fn parse_rows(rows: &[Value]) -> Vec<OrderRow> {
    rows.iter().map(OrderRow::from_value).collect()
}

impl ReportStrategy for OrdersReport {
    fn color_scheme(&self) -> ColorScheme {
        palette::ORDERS.scheme()
    }

    fn chart_config(&self) -> ChartConfig {
        TITLES.config()
    }

    // Top produtos por valor vendido
    fn bar(&self, rows: &[Value]) -> ChartSeries {
        let totals = sum_by_label(parse_rows(rows).into_iter().map(|row| {
            let label = coerce_label(&row.product_name).unwrap_or_else(|| UNKNOWN_PRODUCT.to_string());
            (label, coerce_f64(&row.total_amount))
        }));

        ChartSeries::from_points(top_by_value(totals, TOP_N), true, TITLES.bar)
    }

    // Quantidade de pedidos por status
    fn pie(&self, rows: &[Value]) -> Vec<PieSlice> {
        let counts = sum_by_label(parse_rows(rows).into_iter().map(|row| {
            let label = coerce_label(&row.status).unwrap_or_else(|| UNKNOWN_STATUS.to_string());
            (label, 1.0)
        }));

        share_slices(counts, rows.len() as f64)
    }

    // Vendas por dia. Linhas sem data não entram no gráfico.
    fn line(&self, rows: &[Value]) -> ChartSeries {
        let mut buckets: BTreeMap<DayKey, f64> = BTreeMap::new();

        for row in parse_rows(rows) {
            let Some(date) = coerce_label(&row.date) else {
                continue;
            };
            *buckets.entry(DayKey::from_text(&date)).or_insert(0.0) += coerce_f64(&row.total_amount);
        }

        ChartSeries::from_points(
            buckets.into_iter().map(|(day, total)| (day.label(), total)),
            true,
            TITLES.line,
        )
    }

    fn summary(&self, rows: &[Value]) -> ReportSummary {
        let total_orders = rows.len() as f64;
        let total_sales: f64 = parse_rows(rows).iter().map(|row| coerce_f64(&row.total_amount)).sum();

        ReportSummary {
            metrics: vec![
                SummaryMetric::new("total_orders", "Total Orders", total_orders, false),
                SummaryMetric::new("total_sales", "Total Sales", total_sales, true),
                SummaryMetric::new(
                    "average_order_value",
                    "Average Order Value",
                    total_sales / total_orders,
                    true,
                ),
            ],
        }
    }
}
