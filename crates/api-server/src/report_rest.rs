//! Report REST endpoints: CSV/PDF downloads and comparison file upload.

use crate::rest::{api_error, ApiError, AppState, ErrorResponse};
use axum::extract::State;
use axum::http::header;
use axum::response::{IntoResponse, Response};
use axum::Json;
use dashboard_analytics::sample_series;
use dashboard_core::types::{validate_series, TimeSeriesPoint};
use dashboard_reporting::{
    export_series_csv, parse_comparison_csv, render_clicks_report, ComparisonReport, ExportFormat,
};
use serde::Deserialize;
use tracing::info;
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct SeriesExportRequest {
    pub series: Vec<TimeSeriesPoint>,
}

/// GET /v1/reports/csv: Download the sample series as CSV.
#[utoipa::path(
    get,
    path = "/v1/reports/csv",
    tag = "Reports",
    responses((status = 200, description = "CSV attachment of the sample series"))
)]
pub async fn handle_sample_csv(State(state): State<AppState>) -> Result<Response, ApiError> {
    export(&state, ExportFormat::Csv, &sample_series())
}

/// POST /v1/reports/csv: Download a caller-supplied series as CSV.
#[utoipa::path(
    post,
    path = "/v1/reports/csv",
    tag = "Reports",
    request_body = SeriesExportRequest,
    responses(
        (status = 200, description = "CSV attachment"),
        (status = 400, description = "Invalid series", body = ErrorResponse),
    )
)]
pub async fn handle_series_csv(
    State(state): State<AppState>,
    Json(request): Json<SeriesExportRequest>,
) -> Result<Response, ApiError> {
    validate_series(&request.series).map_err(api_error)?;
    export(&state, ExportFormat::Csv, &request.series)
}

/// GET /v1/reports/pdf: Download the clicks-per-day chart of the sample series.
#[utoipa::path(
    get,
    path = "/v1/reports/pdf",
    tag = "Reports",
    responses((status = 200, description = "PDF attachment of the sample series"))
)]
pub async fn handle_sample_pdf(State(state): State<AppState>) -> Result<Response, ApiError> {
    export(&state, ExportFormat::Pdf, &sample_series())
}

/// POST /v1/reports/pdf: Download the clicks-per-day chart of a caller-supplied series.
#[utoipa::path(
    post,
    path = "/v1/reports/pdf",
    tag = "Reports",
    request_body = SeriesExportRequest,
    responses(
        (status = 200, description = "PDF attachment"),
        (status = 400, description = "Invalid series", body = ErrorResponse),
    )
)]
pub async fn handle_series_pdf(
    State(state): State<AppState>,
    Json(request): Json<SeriesExportRequest>,
) -> Result<Response, ApiError> {
    validate_series(&request.series).map_err(api_error)?;
    export(&state, ExportFormat::Pdf, &request.series)
}

/// POST /v1/comparison: Parse an uploaded comparison CSV.
#[utoipa::path(
    post,
    path = "/v1/comparison",
    tag = "Reports",
    request_body(content = String, content_type = "text/csv"),
    responses(
        (status = 200, description = "Parsed table and ROAS bars", body = ComparisonReport),
        (status = 400, description = "Malformed CSV or missing column", body = ErrorResponse),
    )
)]
pub async fn handle_comparison(body: String) -> Result<Json<ComparisonReport>, ApiError> {
    let report = parse_comparison_csv(&body).map_err(api_error)?;
    info!(
        rows = report.rows.len(),
        columns = report.headers.len(),
        "Comparison file loaded"
    );
    Ok(Json(report))
}

fn export(
    state: &AppState,
    format: ExportFormat,
    series: &[TimeSeriesPoint],
) -> Result<Response, ApiError> {
    let (bytes, file_name) = match format {
        ExportFormat::Csv => (
            export_series_csv(series).map_err(api_error)?,
            &state.config.report.csv_file_name,
        ),
        ExportFormat::Pdf => (
            render_clicks_report(series).map_err(api_error)?,
            &state.config.report.pdf_file_name,
        ),
    };

    metrics::counter!("dashboard.reports_exported", "format" => format.label()).increment(1);
    info!(
        format = format.label(),
        points = series.len(),
        bytes = bytes.len(),
        "Report exported"
    );

    Ok((
        [
            (header::CONTENT_TYPE, format.mime_type().to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{file_name}\""),
            ),
        ],
        bytes,
    )
        .into_response())
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use axum::http::StatusCode;
    use dashboard_core::config::AppConfig;
    use metrics::{
        Counter, Gauge, Histogram, Key, KeyName, Metadata, Recorder, SharedString, Unit,
    };
    use std::sync::Mutex;

    fn state() -> AppState {
        AppState::new(AppConfig::default())
    }

    async fn body_bytes(response: Response) -> Vec<u8> {
        axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap()
            .to_vec()
    }

    #[tokio::test]
    async fn test_sample_csv_download() {
        let response = handle_sample_csv(State(state())).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "text/csv; charset=utf-8"
        );
        assert_eq!(
            response.headers()[header::CONTENT_DISPOSITION],
            "attachment; filename=\"relatorio_campanha.csv\""
        );

        let text = String::from_utf8(body_bytes(response).await).unwrap();
        assert!(text.starts_with("Dia,Cliques,Impressões,Investimento (R$)\n"));
        assert_eq!(text.lines().count(), 6);
    }

    #[tokio::test]
    async fn test_sample_pdf_download() {
        let response = handle_sample_pdf(State(state())).await.unwrap();
        assert_eq!(response.headers()[header::CONTENT_TYPE], "application/pdf");
        let bytes = body_bytes(response).await;
        assert!(bytes.starts_with(b"%PDF-1.4"));
    }

    #[tokio::test]
    async fn test_series_csv_rejects_negative_investment() {
        let request = SeriesExportRequest {
            series: vec![TimeSeriesPoint {
                day: "Dia 1".into(),
                clicks: 1,
                impressions: None,
                investment: -10.0,
            }],
        };
        let (status, _) = handle_series_csv(State(state()), Json(request))
            .await
            .unwrap_err();
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_series_pdf_uses_configured_file_name() {
        let mut config = AppConfig::default();
        config.report.pdf_file_name = "clicks.pdf".into();
        let request = SeriesExportRequest {
            series: sample_series(),
        };
        let response = handle_series_pdf(State(AppState::new(config)), Json(request))
            .await
            .unwrap();
        assert_eq!(
            response.headers()[header::CONTENT_DISPOSITION],
            "attachment; filename=\"clicks.pdf\""
        );
    }

    #[tokio::test]
    async fn test_comparison_upload() {
        let Json(report) = handle_comparison("Campanha,ROAS\nA,2.5\nB,4\n".to_string())
            .await
            .unwrap();
        assert_eq!(report.bars.len(), 2);
        assert_eq!(report.bars[1].roas, 4.0);
    }

    #[tokio::test]
    async fn test_comparison_upload_missing_column() {
        let (status, Json(body)) = handle_comparison("Nome,Valor\nA,1\n".to_string())
            .await
            .unwrap_err();
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.error, "invalid_upload");
        assert!(body.message.contains("Campanha"));
    }

    #[derive(Default)]
    struct CounterNames(Mutex<Vec<String>>);

    impl Recorder for CounterNames {
        fn describe_counter(&self, _: KeyName, _: Option<Unit>, _: SharedString) {}
        fn describe_gauge(&self, _: KeyName, _: Option<Unit>, _: SharedString) {}
        fn describe_histogram(&self, _: KeyName, _: Option<Unit>, _: SharedString) {}

        fn register_counter(&self, key: &Key, _: &Metadata<'_>) -> Counter {
            self.0.lock().unwrap().push(key.name().to_string());
            Counter::noop()
        }

        fn register_gauge(&self, _: &Key, _: &Metadata<'_>) -> Gauge {
            Gauge::noop()
        }

        fn register_histogram(&self, _: &Key, _: &Metadata<'_>) -> Histogram {
            Histogram::noop()
        }
    }

    #[test]
    fn test_failed_upload_is_counted_once() {
        let recorder = CounterNames::default();
        let runtime = tokio::runtime::Builder::new_current_thread()
            .build()
            .unwrap();

        metrics::with_local_recorder(&recorder, || {
            runtime
                .block_on(handle_comparison("Campanha,ROAS\nA,alto\n".to_string()))
                .unwrap_err();
        });

        assert_eq!(*recorder.0.lock().unwrap(), vec!["api.validation_errors"]);
    }
}
