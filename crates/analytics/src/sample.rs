//! Built-in five-day sample series behind the "evolution over time" chart.

use dashboard_core::types::{DailySeries, TimeSeriesPoint};

const SAMPLE_DAYS: [(u64, u64, f64); 5] = [
    (50, 500, 100.0),
    (75, 600, 150.0),
    (100, 700, 200.0),
    (125, 800, 250.0),
    (150, 900, 300.0),
];

pub fn sample_series() -> DailySeries {
    SAMPLE_DAYS
        .iter()
        .enumerate()
        .map(|(i, &(clicks, impressions, investment))| TimeSeriesPoint {
            day: format!("Dia {}", i + 1),
            clicks,
            impressions: Some(impressions),
            investment,
        })
        .collect()
}
