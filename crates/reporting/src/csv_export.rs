//! CSV export of a daily series: header row, one row per day, no index column.

use dashboard_core::error::{DashboardError, DashboardResult};
use dashboard_core::types::TimeSeriesPoint;

pub const CSV_HEADERS: [&str; 4] = ["Dia", "Cliques", "Impressões", "Investimento (R$)"];

/// Serialize `series` as UTF-8 CSV bytes.
pub fn export_series_csv(series: &[TimeSeriesPoint]) -> DashboardResult<Vec<u8>> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(CSV_HEADERS)?;

    for point in series {
        let impressions = point
            .impressions
            .map(|i| i.to_string())
            .unwrap_or_default();
        writer.write_record([
            point.day.clone(),
            point.clicks.to_string(),
            impressions,
            point.investment.to_string(),
        ])?;
    }

    writer
        .into_inner()
        .map_err(|e| DashboardError::Report(format!("failed to flush CSV: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use dashboard_analytics::sample_series;

    #[test]
    fn test_sample_series_csv() {
        let bytes = export_series_csv(&sample_series()).unwrap();
        let text = String::from_utf8(bytes).unwrap();
        let lines: Vec<_> = text.lines().collect();

        assert_eq!(lines.len(), 6);
        assert_eq!(lines[0], "Dia,Cliques,Impressões,Investimento (R$)");
        assert_eq!(lines[1], "Dia 1,50,500,100");
        assert_eq!(lines[5], "Dia 5,150,900,300");
    }

    #[test]
    fn test_missing_impressions_leave_empty_cell() {
        let series = vec![TimeSeriesPoint {
            day: "2024-03-01".into(),
            clicks: 12,
            impressions: None,
            investment: 2_500.5,
        }];
        let text = String::from_utf8(export_series_csv(&series).unwrap()).unwrap();
        assert_eq!(text.lines().nth(1), Some("2024-03-01,12,,2500.5"));
    }

    #[test]
    fn test_labels_with_commas_are_quoted() {
        let series = vec![TimeSeriesPoint {
            day: "Dia 1, manhã".into(),
            clicks: 1,
            impressions: Some(2),
            investment: 3.0,
        }];
        let text = String::from_utf8(export_series_csv(&series).unwrap()).unwrap();
        assert_eq!(text.lines().nth(1), Some("\"Dia 1, manhã\",1,2,3"));
    }

    #[test]
    fn test_empty_series_is_header_only() {
        let text = String::from_utf8(export_series_csv(&[]).unwrap()).unwrap();
        assert_eq!(text, "Dia,Cliques,Impressões,Investimento (R$)\n");
    }
}
