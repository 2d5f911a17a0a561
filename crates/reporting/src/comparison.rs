//! Campaign comparison upload: an arbitrary CSV with at least a `Campanha`
//! and a `ROAS` column, shown as a table and a ROAS bar chart.

use dashboard_core::error::{DashboardError, DashboardResult};
use serde::{Deserialize, Serialize};
use tracing::debug;
use utoipa::ToSchema;

pub const CAMPAIGN_COLUMN: &str = "Campanha";
pub const ROAS_COLUMN: &str = "ROAS";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RoasBar {
    pub campaign: String,
    pub roas: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ComparisonReport {
    /// Every column of the upload, in file order.
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
    /// One bar per row with a ROAS value, coloured by campaign on the client.
    pub bars: Vec<RoasBar>,
}

/// Parse uploaded comparison CSV text.
pub fn parse_comparison_csv(text: &str) -> DashboardResult<ComparisonReport> {
    let text = text.trim_start_matches('\u{FEFF}');

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(text.as_bytes());

    let headers: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();
    let campaign_idx = column_index(&headers, CAMPAIGN_COLUMN)?;
    let roas_idx = column_index(&headers, ROAS_COLUMN)?;

    let mut rows = Vec::new();
    let mut bars = Vec::new();
    for (i, record) in reader.records().enumerate() {
        let record = record?;
        let campaign = record.get(campaign_idx).unwrap_or_default().to_string();
        let raw_roas = record.get(roas_idx).unwrap_or_default();
        rows.push(record.iter().map(str::to_string).collect());

        // A blank cell is a missing value: the row stays in the table but gets no bar.
        if raw_roas.is_empty() {
            continue;
        }
        let roas = raw_roas.parse::<f64>().map_err(|_| {
            DashboardError::Upload(format!(
                "row {}: {ROAS_COLUMN} value '{raw_roas}' is not a number",
                i + 1
            ))
        })?;
        bars.push(RoasBar { campaign, roas });
    }

    debug!(
        columns = headers.len(),
        rows = rows.len(),
        "Comparison file parsed"
    );

    Ok(ComparisonReport {
        headers,
        rows,
        bars,
    })
}

fn column_index(headers: &[String], name: &str) -> DashboardResult<usize> {
    headers
        .iter()
        .position(|h| h.eq_ignore_ascii_case(name))
        .ok_or_else(|| DashboardError::Upload(format!("missing required column '{name}'")))
}
