//! Campaign analytics: derived metrics (CPC, CTR, ROAS), display
//! formatting, the built-in sample series and the investment scenario
//! simulator.

pub mod calculator;
pub mod format;
pub mod sample;
pub mod simulator;

pub use calculator::compute_metrics;
pub use format::{FormattedMetrics, MetricFormatter};
pub use sample::sample_series;
pub use simulator::{ScenarioRequest, ScenarioSimulator, SCENARIO_HORIZON_DAYS};
