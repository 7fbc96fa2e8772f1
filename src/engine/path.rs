//! Price and network-hashrate trajectories.

use serde::{Deserialize, Serialize};

use crate::config::MONTHS_PER_YEAR;
use crate::models::MarketScenario;

/// Linear interpolation between `start` and `end`.
pub fn interpolate(start: f64, end: f64, progress: f64) -> f64 {
    start + (end - start) * progress
}

/// Grow `start` by `rate_pct` percent over one year.
pub fn apply_annual_rate(start: f64, rate_pct: f64) -> f64 {
    start * (1.0 + rate_pct / 100.0)
}

/// Progress through the year for a 0-based month index.
///
/// Month 0 sits on the start value and month 11 on the end value.
pub fn month_progress(month_index: usize) -> f64 {
    month_index as f64 / (MONTHS_PER_YEAR - 1) as f64
}

/// Growth factor `end / start`, or 1 when `start` cannot be divided by.
fn growth_ratio(start: f64, end: f64) -> f64 {
    if start > 0.0 {
        end / start
    } else {
        1.0
    }
}

// ---------------------------------------------------------------------------
// YearPath
// ---------------------------------------------------------------------------

/// Start and end values for one simulated year.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YearPath {
    pub price_start: f64,
    pub price_end: f64,
    /// EH/s
    pub hashrate_start: f64,
    /// EH/s
    pub hashrate_end: f64,
}

impl YearPath {
    /// The first year as described by the scenario.
    pub fn first_year(scenario: &MarketScenario) -> Self {
        Self {
            price_start: scenario.btc_price_start,
            price_end: scenario.resolved_price_end(),
            hashrate_start: scenario.network_hashrate_start,
            hashrate_end: scenario.resolved_hashrate_end(),
        }
    }

    /// The year following this one.
    ///
    /// Starts where this year ends. With annual rates the rates are applied
    /// again; otherwise the growth ratio observed over this year repeats.
    pub fn next_year(&self, scenario: &MarketScenario) -> Self {
        let (price_end, hashrate_end) = if scenario.use_annual_rates {
            (
                apply_annual_rate(self.price_end, scenario.btc_rate_pct()),
                apply_annual_rate(self.hashrate_end, scenario.difficulty_rate_pct()),
            )
        } else {
            (
                self.price_end * growth_ratio(self.price_start, self.price_end),
                self.hashrate_end * growth_ratio(self.hashrate_start, self.hashrate_end),
            )
        };

        Self {
            price_start: self.price_end,
            price_end,
            hashrate_start: self.hashrate_end,
            hashrate_end,
        }
    }

    /// `(btc_price, network_hashrate)` for a 0-based month index.
    pub fn at_month(&self, month_index: usize) -> (f64, f64) {
        let progress = month_progress(month_index);
        (
            interpolate(self.price_start, self.price_end, progress),
            interpolate(self.hashrate_start, self.hashrate_end, progress),
        )
    }
}
