//! Dashboard REST endpoints: metric cards, scenario simulation and the
//! sample series behind the evolution chart.

use crate::rest::{api_error, ApiError, AppState, ErrorResponse};
use axum::extract::State;
use axum::Json;
use chrono::Utc;
use dashboard_analytics::simulator::{ScenarioRequest, SCENARIO_HORIZON_DAYS};
use dashboard_analytics::{compute_metrics, sample_series, FormattedMetrics};
use dashboard_core::types::{CampaignInput, CampaignMetrics, DateRange, TimeSeriesPoint};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct MetricsRequest {
    #[serde(flatten)]
    pub input: CampaignInput,
    /// Reporting period picked in the sidebar. Not used in any calculation.
    #[serde(default)]
    pub date_range: Option<DateRange>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct MetricsResponse {
    pub input: CampaignInput,
    pub metrics: CampaignMetrics,
    pub formatted: FormattedMetrics,
    pub date_range: Option<DateRange>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ScenarioResponse {
    pub horizon_days: usize,
    pub max_investment: f64,
    pub series: Vec<TimeSeriesPoint>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct SeriesResponse {
    pub series: Vec<TimeSeriesPoint>,
}

/// POST /v1/metrics: Compute CPC, CTR and ROAS for the entered numbers.
#[utoipa::path(
    post,
    path = "/v1/metrics",
    tag = "Dashboard",
    request_body = MetricsRequest,
    responses(
        (status = 200, description = "Derived campaign metrics", body = MetricsResponse),
        (status = 400, description = "Negative or non-finite amount", body = ErrorResponse),
    )
)]
pub async fn handle_metrics(
    State(state): State<AppState>,
    Json(request): Json<MetricsRequest>,
) -> Result<Json<MetricsResponse>, ApiError> {
    request.input.validate().map_err(api_error)?;

    let metrics = compute_metrics(&request.input);
    let formatted = state.formatter.format(&metrics);
    metrics::counter!("dashboard.metrics_computed").increment(1);
    debug!(
        impressions = request.input.impressions,
        clicks = request.input.clicks,
        cpc = metrics.cost_per_click,
        ctr = metrics.click_through_rate,
        roas = metrics.return_on_ad_spend,
        "Metrics computed"
    );

    Ok(Json(MetricsResponse {
        input: request.input,
        metrics,
        formatted,
        date_range: request.date_range,
    }))
}

/// POST /v1/scenario: Simulate five days at a fixed investment.
#[utoipa::path(
    post,
    path = "/v1/scenario",
    tag = "Dashboard",
    request_body = ScenarioRequest,
    responses(
        (status = 200, description = "Simulated daily series", body = ScenarioResponse),
        (status = 400, description = "Investment outside the slider range", body = ErrorResponse),
    )
)]
pub async fn handle_scenario(
    State(state): State<AppState>,
    Json(request): Json<ScenarioRequest>,
) -> Result<Json<ScenarioResponse>, ApiError> {
    let today = Utc::now().date_naive();
    let series = state
        .simulator
        .run(&request, state.config.simulator.seed, today)
        .map_err(api_error)?;

    metrics::counter!("dashboard.scenarios_simulated").increment(1);
    info!(
        historical_clicks = request.historical_clicks,
        investment = request.simulated_investment,
        seeded = request.seed.or(state.config.simulator.seed).is_some(),
        "Scenario simulated"
    );

    Ok(Json(ScenarioResponse {
        horizon_days: SCENARIO_HORIZON_DAYS,
        max_investment: state.simulator.max_investment(),
        series,
    }))
}

/// GET /v1/series/sample: The built-in five-day sample series.
#[utoipa::path(
    get,
    path = "/v1/series/sample",
    tag = "Dashboard",
    responses((status = 200, description = "Sample series", body = SeriesResponse))
)]
pub async fn handle_sample_series() -> Json<SeriesResponse> {
    Json(SeriesResponse {
        series: sample_series(),
    })
}
