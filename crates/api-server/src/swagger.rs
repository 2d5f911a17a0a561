//! OpenAPI specification and Swagger UI configuration.

use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Campaign Dashboard API",
        version = "0.1.0",
        description = "Advertising-campaign metrics dashboard.\n\nComputes CPC, CTR and ROAS, simulates investment scenarios, and exports CSV/PDF reports.",
        license(name = "MIT"),
    ),
    tags(
        (name = "Dashboard", description = "Campaign metrics, scenario simulation and sample series"),
        (name = "Reports", description = "CSV/PDF exports and campaign comparison uploads"),
        (name = "Operations", description = "Health, readiness, and liveness probes"),
    ),
    paths(
        // Dashboard
        crate::dashboard_rest::handle_metrics,
        crate::dashboard_rest::handle_scenario,
        crate::dashboard_rest::handle_sample_series,
        // Reports
        crate::report_rest::handle_sample_csv,
        crate::report_rest::handle_series_csv,
        crate::report_rest::handle_sample_pdf,
        crate::report_rest::handle_series_pdf,
        crate::report_rest::handle_comparison,
        // Operations
        crate::rest::health_check,
        crate::rest::readiness,
        crate::rest::liveness,
    ),
    components(schemas(
        // Core types
        dashboard_core::types::CampaignInput,
        dashboard_core::types::CampaignMetrics,
        dashboard_core::types::TimeSeriesPoint,
        dashboard_core::types::DateRange,
        dashboard_analytics::FormattedMetrics,
        dashboard_analytics::ScenarioRequest,
        dashboard_reporting::ComparisonReport,
        dashboard_reporting::RoasBar,
        // REST types
        crate::dashboard_rest::MetricsRequest,
        crate::dashboard_rest::MetricsResponse,
        crate::dashboard_rest::ScenarioResponse,
        crate::dashboard_rest::SeriesResponse,
        crate::report_rest::SeriesExportRequest,
        crate::rest::ErrorResponse,
        crate::rest::HealthResponse,
    ))
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_lists_dashboard_paths() {
        let doc = ApiDoc::openapi();
        for path in [
            "/v1/metrics",
            "/v1/scenario",
            "/v1/series/sample",
            "/v1/reports/csv",
            "/v1/reports/pdf",
            "/v1/comparison",
            "/health",
        ] {
            assert!(doc.paths.paths.contains_key(path), "missing {path}");
        }
    }
}
