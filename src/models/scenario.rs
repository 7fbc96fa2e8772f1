use serde::{Deserialize, Serialize};

use crate::engine::path::apply_annual_rate;

// ---------------------------------------------------------------------------
// MarketScenario — BTC price and network hashrate environment for a year
// ---------------------------------------------------------------------------

/// Market environment for the first simulated year.
///
/// When `use_annual_rates` is set, the end values are derived from the start
/// values and the annual percentages and the explicit `*_end` fields are
/// ignored. Use [`resolved_price_end`](Self::resolved_price_end) and
/// [`resolved_hashrate_end`](Self::resolved_hashrate_end) rather than reading
/// the end fields directly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketScenario {
    pub btc_price_start: f64,
    pub btc_price_end: f64,
    /// EH/s
    pub network_hashrate_start: f64,
    /// EH/s
    pub network_hashrate_end: f64,
    pub pool_fee_pct: f64,
    #[serde(default)]
    pub use_annual_rates: bool,
    #[serde(default)]
    pub annual_btc_increase_pct: Option<f64>,
    #[serde(default)]
    pub annual_difficulty_increase_pct: Option<f64>,
}

impl MarketScenario {
    /// Scenario with explicit start and end values.
    pub fn explicit(
        btc_price_start: f64,
        btc_price_end: f64,
        network_hashrate_start: f64,
        network_hashrate_end: f64,
        pool_fee_pct: f64,
    ) -> Self {
        Self {
            btc_price_start,
            btc_price_end,
            network_hashrate_start,
            network_hashrate_end,
            pool_fee_pct,
            use_annual_rates: false,
            annual_btc_increase_pct: None,
            annual_difficulty_increase_pct: None,
        }
    }

    /// Scenario whose end values follow from annual growth percentages.
    pub fn with_annual_rates(
        btc_price_start: f64,
        network_hashrate_start: f64,
        pool_fee_pct: f64,
        annual_btc_increase_pct: f64,
        annual_difficulty_increase_pct: f64,
    ) -> Self {
        let mut scenario = Self {
            btc_price_start,
            btc_price_end: btc_price_start,
            network_hashrate_start,
            network_hashrate_end: network_hashrate_start,
            pool_fee_pct,
            use_annual_rates: true,
            annual_btc_increase_pct: Some(annual_btc_increase_pct),
            annual_difficulty_increase_pct: Some(annual_difficulty_increase_pct),
        };
        scenario.btc_price_end = scenario.resolved_price_end();
        scenario.network_hashrate_end = scenario.resolved_hashrate_end();
        scenario
    }

    pub fn btc_rate_pct(&self) -> f64 {
        self.annual_btc_increase_pct.unwrap_or(0.0)
    }

    pub fn difficulty_rate_pct(&self) -> f64 {
        self.annual_difficulty_increase_pct.unwrap_or(0.0)
    }

    /// The authoritative year-end BTC price.
    pub fn resolved_price_end(&self) -> f64 {
        if self.use_annual_rates {
            apply_annual_rate(self.btc_price_start, self.btc_rate_pct())
        } else {
            self.btc_price_end
        }
    }

    /// The authoritative year-end network hashrate (EH/s).
    pub fn resolved_hashrate_end(&self) -> f64 {
        if self.use_annual_rates {
            apply_annual_rate(self.network_hashrate_start, self.difficulty_rate_pct())
        } else {
            self.network_hashrate_end
        }
    }
}
