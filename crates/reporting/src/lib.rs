//! Campaign reports: CSV and PDF exports of a daily series, and parsing of
//! uploaded comparison files.

pub mod comparison;
pub mod csv_export;
pub mod pdf;

pub use comparison::{parse_comparison_csv, ComparisonReport, RoasBar};
pub use csv_export::export_series_csv;
pub use pdf::render_clicks_report;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Pdf,
}

impl ExportFormat {
    pub fn mime_type(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "text/csv; charset=utf-8",
            ExportFormat::Pdf => "application/pdf",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Pdf => "pdf",
        }
    }
}
