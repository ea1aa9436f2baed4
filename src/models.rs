pub mod chart;
pub mod report;

pub use chart::{
    ChartConfig, ChartKind, ChartSeries, ColorScheme, PieSlice, ReportCharts, ReportSummary,
    SummaryMetric,
};
pub use report::{OrderRow, PerformanceRow, ProductRow, ReportCategory, ReportData};
