//! Investment scenario simulator.
//!
//! Projects a short daily series at a fixed simulated investment, drawing
//! each day's clicks from a Poisson distribution centred on the historical
//! click count. The random source is passed in so callers can seed it.

use chrono::NaiveDate;
use dashboard_core::error::{DashboardError, DashboardResult};
use dashboard_core::types::{DailySeries, TimeSeriesPoint};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Poisson};
use serde::{Deserialize, Serialize};
use tracing::debug;
use utoipa::ToSchema;

/// Number of periods every scenario covers.
pub const SCENARIO_HORIZON_DAYS: usize = 5;

const DAY_LABEL_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ScenarioRequest {
    /// First simulated day. Defaults to today.
    #[serde(default)]
    pub start_day: Option<NaiveDate>,
    /// Mean of the daily click draw.
    pub historical_clicks: u64,
    /// Slider value, constant across the horizon.
    pub simulated_investment: f64,
    /// Fixes the draw for reproducible output.
    #[serde(default)]
    pub seed: Option<u64>,
}

#[derive(Debug, Clone)]
pub struct ScenarioSimulator {
    max_investment: f64,
}

impl ScenarioSimulator {
    pub fn new(max_investment: f64) -> Self {
        Self { max_investment }
    }

    pub fn max_investment(&self) -> f64 {
        self.max_investment
    }

    pub fn validate(&self, request: &ScenarioRequest) -> DashboardResult<()> {
        let investment = request.simulated_investment;
        if !investment.is_finite() {
            return Err(DashboardError::Validation(
                "simulated_investment must be finite".into(),
            ));
        }
        if investment < 0.0 || investment > self.max_investment {
            return Err(DashboardError::Validation(format!(
                "simulated_investment must be between 0 and {}",
                self.max_investment
            )));
        }
        Ok(())
    }

    /// Validate the request and simulate it. The request seed wins over
    /// `fallback_seed`; with neither, the generator is seeded from entropy.
    pub fn run(
        &self,
        request: &ScenarioRequest,
        fallback_seed: Option<u64>,
        today: NaiveDate,
    ) -> DashboardResult<DailySeries> {
        self.validate(request)?;

        let start = request.start_day.unwrap_or(today);
        let mut rng = match request.seed.or(fallback_seed) {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let series = self.simulate(
            start,
            request.historical_clicks,
            request.simulated_investment,
            &mut rng,
        );
        if series.len() < SCENARIO_HORIZON_DAYS {
            return Err(DashboardError::Validation(format!(
                "start_day {start} leaves no room for a {SCENARIO_HORIZON_DAYS}-day horizon"
            )));
        }
        Ok(series)
    }

    /// Build the series for `SCENARIO_HORIZON_DAYS` consecutive days.
    pub fn simulate<R: Rng + ?Sized>(
        &self,
        start: NaiveDate,
        historical_clicks: u64,
        investment: f64,
        rng: &mut R,
    ) -> DailySeries {
        let lambda = historical_clicks as f64;
        let series: DailySeries = start
            .iter_days()
            .take(SCENARIO_HORIZON_DAYS)
            .map(|day| TimeSeriesPoint {
                day: day.format(DAY_LABEL_FORMAT).to_string(),
                clicks: sample_poisson(rng, lambda),
                impressions: None,
                investment,
            })
            .collect();

        debug!(
            start = %start,
            lambda,
            investment,
            points = series.len(),
            "Scenario simulated"
        );
        series
    }
}

impl Default for ScenarioSimulator {
    fn default() -> Self {
        Self::new(10_000.0)
    }
}

/// Draw one Poisson variate. A non-positive mean always yields zero.
pub fn sample_poisson<R: Rng + ?Sized>(rng: &mut R, lambda: f64) -> u64 {
    match Poisson::new(lambda) {
        Ok(poisson) => poisson.sample(rng) as u64,
        Err(_) => 0,
    }
}
