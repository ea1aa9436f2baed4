// src/pipeline/products.rs

use std::collections::BTreeMap;

use serde_json::Value;

use super::{palette, share_slices, sum_by_label, top_by_value, ChartTitles, ReportStrategy, TOP_N};
use crate::{
    common::{
        coerce::{coerce_f64, coerce_label},
        dates::DayKey,
    },
    models::{ChartConfig, ChartSeries, ColorScheme, PieSlice, ProductRow, ReportSummary, SummaryMetric},
};

const UNCATEGORIZED: &str = "Uncategorized";
const UNKNOWN_PRODUCT: &str = "Unknown Product";

/// Estoque igual ou abaixo disso conta como "baixo" no resumo.
pub const LOW_STOCK_THRESHOLD: f64 = 5.0;

pub const TITLES: ChartTitles = ChartTitles {
    bar: "Stock Levels by Product",
    pie: "Products by Category",
    line: "Product Sales Over Time",
};

pub struct ProductsReport;

fn parse_rows(rows: &[Value]) -> Vec<ProductRow> {
    rows.iter().map(ProductRow::from_value).collect()
}

impl ReportStrategy for ProductsReport {
    fn color_scheme(&self) -> ColorScheme {
        palette::PRODUCTS.scheme()
    }

    fn chart_config(&self) -> ChartConfig {
        TITLES.config()
    }

    // Cada linha já é um produto: só ordena por estoque, sem agrupar
    fn bar(&self, rows: &[Value]) -> ChartSeries {
        let points = parse_rows(rows)
            .into_iter()
            .map(|row| {
                let label = coerce_label(&row.product_name).unwrap_or_else(|| UNKNOWN_PRODUCT.to_string());
                (label, coerce_f64(&row.stock_level))
            })
            .collect();

        ChartSeries::from_points(top_by_value(points, TOP_N), false, TITLES.bar)
    }

    fn pie(&self, rows: &[Value]) -> Vec<PieSlice> {
        let counts = sum_by_label(parse_rows(rows).into_iter().map(|row| {
            let label = coerce_label(&row.category).unwrap_or_else(|| UNCATEGORIZED.to_string());
            (label, 1.0)
        }));

        share_slices(counts, rows.len() as f64)
    }

    // Junta o `sales_data` de todos os produtos num acumulador por dia
    fn line(&self, rows: &[Value]) -> ChartSeries {
        let mut buckets: BTreeMap<DayKey, f64> = BTreeMap::new();

        for row in parse_rows(rows) {
            for (date, amount) in row.sales_entries() {
                *buckets.entry(DayKey::from_text(date)).or_insert(0.0) += amount;
            }
        }

        ChartSeries::from_points(
            buckets.into_iter().map(|(day, total)| (day.label(), total)),
            true,
            TITLES.line,
        )
    }

    fn summary(&self, rows: &[Value]) -> ReportSummary {
        let products = parse_rows(rows);

        let stock: Vec<f64> = products.iter().map(|p| coerce_f64(&p.stock_level)).collect();
        let total_stock: f64 = stock.iter().sum();
        let low_stock = stock.iter().filter(|&&level| level <= LOW_STOCK_THRESHOLD).count();
        let total_sales: f64 = products
            .iter()
            .flat_map(|p| p.sales_entries().map(|(_, amount)| amount))
            .sum();

        ReportSummary {
            metrics: vec![
                SummaryMetric::new("total_products", "Total Products", products.len() as f64, false),
                SummaryMetric::new("total_stock", "Total Stock", total_stock, false),
                SummaryMetric::new("low_stock_products", "Low Stock Products", low_stock as f64, false),
                SummaryMetric::new("total_sales", "Total Sales", total_sales, true),
            ],
        }
    }
}
