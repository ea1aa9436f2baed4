// src/models/report.rs

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::common::coerce::coerce_f64;

// --- Categoria do relatório ---
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportCategory {
    Orders,
    Products,
    Performance,
    Unknown, // Qualquer outra tag: cai no comportamento padrão
}

impl ReportCategory {
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "orders" => ReportCategory::Orders,
            "products" => ReportCategory::Products,
            "performance" => ReportCategory::Performance,
            _ => ReportCategory::Unknown,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ReportCategory::Orders => "orders",
            ReportCategory::Products => "products",
            ReportCategory::Performance => "performance",
            ReportCategory::Unknown => "unknown",
        }
    }
}

impl From<&str> for ReportCategory {
    fn from(tag: &str) -> Self {
        Self::from_tag(tag)
    }
}

// --- Envelope vindo do front-end ---
// `data` ausente e `data: []` têm o mesmo efeito: resultado vazio.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReportData {
    #[serde(default)]
    pub data: Option<Vec<Value>>,
}

impl ReportData {
    pub fn new(rows: Vec<Value>) -> Self {
        Self { data: Some(rows) }
    }

    pub fn rows(&self) -> &[Value] {
        self.data.as_deref().unwrap_or_default()
    }
}

// --- Linhas por categoria ---
// Todos os campos são opcionais e "soltos" (string, número ou null). Uma linha
// que nem sequer é objeto vira o registro vazio.

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct OrderRow {
    pub product_name: Value,
    pub total_amount: Value,
    pub status: Value,
    pub date: Value,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ProductRow {
    pub product_name: Value,
    pub stock_level: Value,
    pub category: Value,
    pub sales_data: Value, // Mapa data -> valor
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PerformanceRow {
    pub period: Value,
    pub completed_orders: Value,
    pub on_time: Value,
    pub late: Value,
    pub early: Value,
    pub rating: Value,
}

impl OrderRow {
    pub fn from_value(value: &Value) -> Self {
        Self::deserialize(value).unwrap_or_default()
    }
}

impl ProductRow {
    pub fn from_value(value: &Value) -> Self {
        Self::deserialize(value).unwrap_or_default()
    }

    /// Pares (data, valor) do `sales_data`. Qualquer coisa que não seja objeto
    /// não contribui.
    pub fn sales_entries(&self) -> impl Iterator<Item = (&str, f64)> {
        self.sales_data
            .as_object()
            .into_iter()
            .flat_map(|map| map.iter())
            .map(|(date, amount)| (date.as_str(), coerce_f64(amount)))
    }
}

impl PerformanceRow {
    pub fn from_value(value: &Value) -> Self {
        Self::deserialize(value).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn category_tags_are_case_sensitive() {
        assert_eq!(ReportCategory::from_tag("orders"), ReportCategory::Orders);
        assert_eq!(ReportCategory::from("performance"), ReportCategory::Performance);
        assert_eq!(ReportCategory::from_tag("Orders"), ReportCategory::Unknown);
        assert_eq!(ReportCategory::from_tag(""), ReportCategory::Unknown);
    }

    #[test]
    fn malformed_rows_become_empty_records() {
        let row = OrderRow::from_value(&json!("not an object"));
        assert!(row.product_name.is_null());
        assert!(row.total_amount.is_null());

        let row = ProductRow::from_value(&json!({ "product_name": "Bowl", "extra": true }));
        assert_eq!(row.product_name, json!("Bowl"));
        assert!(row.category.is_null());
    }

    #[test]
    fn sales_entries_skip_non_object_maps() {
        let row = ProductRow::from_value(&json!({ "sales_data": [1, 2, 3] }));
        assert_eq!(row.sales_entries().count(), 0);

        let row = ProductRow::from_value(&json!({ "sales_data": { "2024-01-01": "4.5" } }));
        let entries: Vec<(&str, f64)> = row.sales_entries().collect();
        assert_eq!(entries, vec![("2024-01-01", 4.5)]);
    }

    #[test]
    fn report_data_without_rows_is_empty() {
        let parsed: ReportData = serde_json::from_value(json!({})).unwrap();
        assert!(parsed.rows().is_empty());
        let parsed: ReportData = serde_json::from_value(json!({ "data": null })).unwrap();
        assert!(parsed.rows().is_empty());
    }
}
