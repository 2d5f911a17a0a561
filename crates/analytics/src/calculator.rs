//! Metrics calculator: CPC, CTR and ROAS from raw campaign numbers.

use dashboard_core::types::{CampaignInput, CampaignMetrics};

/// Derive campaign metrics.
///
/// Zero impressions zero out every metric, including ROAS, even when spend
/// and revenue are known. Within that gate each ratio still guards its own
/// denominator.
pub fn compute_metrics(input: &CampaignInput) -> CampaignMetrics {
    if input.impressions == 0 {
        return CampaignMetrics::default();
    }

    let cost_per_click = if input.clicks > 0 {
        input.spend / input.clicks as f64
    } else {
        0.0
    };
    let click_through_rate = input.clicks as f64 / input.impressions as f64 * 100.0;
    let return_on_ad_spend = if input.spend > 0.0 {
        input.revenue / input.spend
    } else {
        0.0
    };

    CampaignMetrics {
        cost_per_click,
        click_through_rate,
        return_on_ad_spend,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(impressions: u64, clicks: u64, spend: f64, revenue: f64) -> CampaignInput {
        CampaignInput {
            reach: 0,
            impressions,
            clicks,
            spend,
            revenue,
        }
    }

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_reference_campaign() {
        let m = compute_metrics(&input(500, 50, 100.0, 300.0));
        assert!(approx(m.cost_per_click, 2.0));
        assert!(approx(m.click_through_rate, 10.0));
        assert!(approx(m.return_on_ad_spend, 3.0));
    }

    #[test]
    fn test_zero_impressions_zeroes_everything() {
        let m = compute_metrics(&input(0, 10, 50.0, 10.0));
        assert_eq!(m, CampaignMetrics::default());

        let m = compute_metrics(&input(0, 0, 1_000.0, 9_000.0));
        assert_eq!(m.return_on_ad_spend, 0.0);
    }

    #[test]
    fn test_zero_clicks() {
        let m = compute_metrics(&input(1_000, 0, 80.0, 160.0));
        assert_eq!(m.cost_per_click, 0.0);
        assert_eq!(m.click_through_rate, 0.0);
        assert!(approx(m.return_on_ad_spend, 2.0));
    }

    #[test]
    fn test_zero_spend() {
        let m = compute_metrics(&input(1_000, 25, 0.0, 500.0));
        assert_eq!(m.return_on_ad_spend, 0.0);
        assert_eq!(m.cost_per_click, 0.0);
        assert!(approx(m.click_through_rate, 2.5));
    }

    #[test]
    fn test_reach_does_not_affect_metrics() {
        let base = input(400, 20, 60.0, 90.0);
        let wide = CampaignInput {
            reach: 1_000_000,
            ..base
        };
        assert_eq!(compute_metrics(&base), compute_metrics(&wide));
    }

    #[test]
    fn test_idempotent() {
        let i = input(12_345, 678, 910.11, 1_213.14);
        assert_eq!(compute_metrics(&i), compute_metrics(&i));
    }

    #[test]
    fn test_never_nan() {
        for impressions in [0, 1, 100] {
            for clicks in [0, 1, 50] {
                for spend in [0.0, 0.01, 100.0] {
                    let m = compute_metrics(&input(impressions, clicks, spend, 10.0));
                    assert!(m.cost_per_click.is_finite());
                    assert!(m.click_through_rate.is_finite());
                    assert!(m.return_on_ad_spend.is_finite());
                }
            }
        }
    }
}
