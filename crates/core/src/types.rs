use crate::error::{DashboardError, DashboardResult};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Raw numbers for one campaign, as typed into the dashboard sidebar.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CampaignInput {
    /// Unique people reached. Displayed only, never used in a ratio.
    #[serde(default)]
    pub reach: u64,
    #[serde(default)]
    pub impressions: u64,
    #[serde(default)]
    pub clicks: u64,
    /// Amount invested in the campaign.
    #[serde(default)]
    pub spend: f64,
    /// Amount billed back from the campaign.
    #[serde(default)]
    pub revenue: f64,
}

impl CampaignInput {
    /// Counts are unsigned by type; the money fields must be finite and >= 0.
    pub fn validate(&self) -> DashboardResult<()> {
        check_amount("spend", self.spend)?;
        check_amount("revenue", self.revenue)?;
        Ok(())
    }
}

/// Derived campaign metrics. Every ratio is zero when its denominator is zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CampaignMetrics {
    /// CPC, spend per click.
    pub cost_per_click: f64,
    /// CTR as a percentage (0-100).
    pub click_through_rate: f64,
    /// ROAS, revenue per unit of spend.
    pub return_on_ad_spend: f64,
}

/// One period of a daily series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TimeSeriesPoint {
    /// Display label, e.g. `Dia 1` or `2024-03-01`.
    pub day: String,
    pub clicks: u64,
    /// Absent for simulated points.
    #[serde(default)]
    pub impressions: Option<u64>,
    pub investment: f64,
}

/// Points ordered by day ascending.
pub type DailySeries = Vec<TimeSeriesPoint>;

/// Date range picked in the dashboard. Echoed back, never used in a calculation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

/// Validate a series supplied by a caller for export.
pub fn validate_series(series: &[TimeSeriesPoint]) -> DashboardResult<()> {
    for point in series {
        if point.day.trim().is_empty() {
            return Err(DashboardError::Validation(
                "series day label must not be empty".into(),
            ));
        }
        check_amount("investment", point.investment)?;
    }
    Ok(())
}

pub(crate) fn check_amount(field: &str, value: f64) -> DashboardResult<()> {
    if !value.is_finite() {
        return Err(DashboardError::Validation(format!("{field} must be finite")));
    }
    if value < 0.0 {
        return Err(DashboardError::Validation(format!(
            "{field} must be non-negative"
        )));
    }
    Ok(())
}
