//! Display formatting for the metric cards.

use dashboard_core::types::CampaignMetrics;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Metric values as the dashboard shows them, two decimals each.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct FormattedMetrics {
    pub cost_per_click: String,
    pub click_through_rate: String,
    pub return_on_ad_spend: String,
}

#[derive(Debug, Clone)]
pub struct MetricFormatter {
    currency_symbol: String,
}

impl MetricFormatter {
    pub fn new(currency_symbol: impl Into<String>) -> Self {
        Self {
            currency_symbol: currency_symbol.into(),
        }
    }

    pub fn currency(&self, value: f64) -> String {
        format!("{} {:.2}", self.currency_symbol, value)
    }

    pub fn percentage(&self, value: f64) -> String {
        format!("{value:.2}%")
    }

    pub fn ratio(&self, value: f64) -> String {
        format!("{value:.2}")
    }

    pub fn format(&self, metrics: &CampaignMetrics) -> FormattedMetrics {
        FormattedMetrics {
            cost_per_click: self.currency(metrics.cost_per_click),
            click_through_rate: self.percentage(metrics.click_through_rate),
            return_on_ad_spend: self.ratio(metrics.return_on_ad_spend),
        }
    }
}

impl Default for MetricFormatter {
    fn default() -> Self {
        Self::new("R$")
    }
}
