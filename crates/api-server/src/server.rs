//! API server: builds the router and serves it over HTTP.

use crate::rest::{self, AppState};
use crate::swagger::ApiDoc;
use crate::{dashboard_rest, report_rest};
use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::Router;
use dashboard_core::config::AppConfig;
use std::net::SocketAddr;
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Main API server for the dashboard REST endpoints.
pub struct ApiServer {
    config: AppConfig,
}

impl ApiServer {
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Build the application router.
    pub fn router(&self) -> Router {
        let state = AppState::new(self.config.clone());

        Router::new()
            // Dashboard
            .route("/v1/metrics", post(dashboard_rest::handle_metrics))
            .route("/v1/scenario", post(dashboard_rest::handle_scenario))
            .route("/v1/series/sample", get(dashboard_rest::handle_sample_series))
            // Reports
            .route(
                "/v1/reports/csv",
                get(report_rest::handle_sample_csv).post(report_rest::handle_series_csv),
            )
            .route(
                "/v1/reports/pdf",
                get(report_rest::handle_sample_pdf).post(report_rest::handle_series_pdf),
            )
            .route("/v1/comparison", post(report_rest::handle_comparison))
            // Operational endpoints
            .route("/health", get(rest::health_check))
            .route("/ready", get(rest::readiness))
            .route("/live", get(rest::liveness))
            .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
            // Middleware
            .layer(DefaultBodyLimit::max(self.config.api.max_upload_bytes))
            .layer(CompressionLayer::new())
            .layer(CorsLayer::permissive())
            .layer(TraceLayer::new_for_http())
            .with_state(state)
    }

    /// Start the HTTP REST server.
    pub async fn start_http(&self) -> anyhow::Result<()> {
        let app = self.router();

        let addr = SocketAddr::new(self.config.api.host.parse()?, self.config.api.http_port);

        info!(addr = %addr, "Starting HTTP server");

        let listener = tokio::net::TcpListener::bind(addr).await?;
        axum::serve(listener, app).await?;

        Ok(())
    }

    /// Start the metrics server on a separate port.
    pub async fn start_metrics(&self) -> anyhow::Result<()> {
        if !self.config.metrics.enabled {
            info!("Metrics exporter disabled");
            return Ok(());
        }

        metrics_exporter_prometheus::PrometheusBuilder::new()
            .with_http_listener(SocketAddr::new(
                self.config.api.host.parse()?,
                self.config.metrics.port,
            ))
            .install()?;

        info!(port = self.config.metrics.port, "Metrics exporter started");
        Ok(())
    }
}
