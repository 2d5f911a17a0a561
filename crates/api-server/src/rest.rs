//! Shared REST state, error mapping and operational endpoints.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use dashboard_analytics::{MetricFormatter, ScenarioSimulator};
use dashboard_core::config::AppConfig;
use dashboard_core::error::DashboardError;
use serde::Serialize;
use std::sync::Arc;
use std::time::Instant;
use tracing::{error, warn};
use utoipa::ToSchema;

/// Shared application state for REST handlers. Read-only after startup.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub simulator: ScenarioSimulator,
    pub formatter: MetricFormatter,
    pub start_time: Instant,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        Self {
            simulator: ScenarioSimulator::new(config.simulator.max_investment),
            formatter: MetricFormatter::new(config.report.currency_symbol.clone()),
            config: Arc::new(config),
            start_time: Instant::now(),
        }
    }
}

pub type ApiError = (StatusCode, Json<ErrorResponse>);

/// Map a dashboard error onto an HTTP error. Caller mistakes become 400
/// with the underlying message; everything else is a 500.
pub fn api_error(err: DashboardError) -> ApiError {
    let (status, code) = match &err {
        DashboardError::Validation(_) => (StatusCode::BAD_REQUEST, "invalid_input"),
        DashboardError::Upload(_) | DashboardError::Csv(_) => {
            (StatusCode::BAD_REQUEST, "invalid_upload")
        }
        _ => (StatusCode::INTERNAL_SERVER_ERROR, "internal_error"),
    };

    if err.is_client_error() {
        warn!(error = %err, code, "Request rejected");
        metrics::counter!("api.validation_errors", "code" => code).increment(1);
        (
            status,
            Json(ErrorResponse {
                error: code.to_string(),
                message: err.to_string(),
            }),
        )
    } else {
        error!(error = %err, "Request failed");
        metrics::counter!("api.errors").increment(1);
        (
            status,
            Json(ErrorResponse {
                error: code.to_string(),
                message: "Internal processing error".to_string(),
            }),
        )
    }
}

/// GET /health: Health check endpoint.
#[utoipa::path(
    get,
    path = "/health",
    tag = "Operations",
    responses((status = 200, description = "Service is healthy", body = HealthResponse))
)]
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        node_id: state.config.node_id.clone(),
        uptime_secs: state.start_time.elapsed().as_secs(),
    })
}

/// GET /ready: Readiness probe. The service holds no connections, so it is
/// ready as soon as it is serving.
#[utoipa::path(
    get,
    path = "/ready",
    tag = "Operations",
    responses((status = 200, description = "Ready to accept traffic"))
)]
pub async fn readiness() -> StatusCode {
    StatusCode::OK
}

/// GET /live: Liveness probe.
#[utoipa::path(
    get,
    path = "/live",
    tag = "Operations",
    responses((status = 200, description = "Process is alive"))
)]
pub async fn liveness() -> StatusCode {
    StatusCode::OK
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub node_id: String,
    pub uptime_secs: u64,
}
