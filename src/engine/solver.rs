//! Inverse of the one-year forward model: the most that can be paid for
//! hardware while still reaching a target after-tax net profit.
//!
//! Under bonus depreciation the hardware price is fully deductible in year 1,
//! so `target = (op - price) * (1 - t)` inverts exactly. Under MACRS only the
//! year-1 rate (20%) is credited as a tax shield:
//! `price = (op - target) / (1 + (1 - 0.20) * t)`. The MACRS result is an
//! approximation and does not round-trip through the forward model.

use log::debug;

use crate::config::{EngineConfig, MACRS_FIRST_YEAR_RATE};
use crate::engine::path::YearPath;
use crate::engine::simulator::simulate_year;
use crate::models::{AcquisitionSolveResult, HardwareSpec, MarketScenario, TaxPolicy};

/// Maximum acquisition price for `hardware` at `electricity_rate` ($/kWh),
/// using the default network constants.
pub fn compute_max_acquisition_price(
    hardware: &HardwareSpec,
    electricity_rate: f64,
    scenario: &MarketScenario,
    tax: &TaxPolicy,
    target_profit: f64,
) -> AcquisitionSolveResult {
    compute_max_acquisition_price_with(
        &EngineConfig::default(),
        hardware,
        electricity_rate,
        scenario,
        tax,
        target_profit,
    )
}

/// Like [`compute_max_acquisition_price`] with explicit network constants.
pub fn compute_max_acquisition_price_with(
    config: &EngineConfig,
    hardware: &HardwareSpec,
    electricity_rate: f64,
    scenario: &MarketScenario,
    tax: &TaxPolicy,
    target_profit: f64,
) -> AcquisitionSolveResult {
    let path = YearPath::first_year(scenario);
    let sim = simulate_year(config, hardware, electricity_rate, &path, scenario.pool_fee_pct);
    let operational_profit = sim.operational_profit();

    let raw_price = solve_price(operational_profit, target_profit, tax);
    let max_acquisition_price = if raw_price.is_finite() {
        raw_price.max(0.0)
    } else {
        0.0
    };
    if max_acquisition_price != raw_price {
        debug!(
            "acquisition price {} clamped to {} (operational profit {}, target {})",
            raw_price, max_acquisition_price, operational_profit, target_profit
        );
    }

    let dollar_per_th = if hardware.hashrate_ths > 0.0 {
        max_acquisition_price / hardware.hashrate_ths
    } else {
        0.0
    };
    let implied_roi = if max_acquisition_price > 0.0 {
        target_profit / max_acquisition_price * 100.0
    } else {
        0.0
    };

    AcquisitionSolveResult {
        max_acquisition_price,
        dollar_per_th,
        implied_roi,
        operational_profit,
    }
}

/// Unclamped price solving the tax identity for `target_profit`.
fn solve_price(operational_profit: f64, target_profit: f64, tax: &TaxPolicy) -> f64 {
    let total_rate = tax.total_rate();
    if tax.use_bonus_depreciation {
        let keep = 1.0 - total_rate;
        if keep <= 0.0 {
            // Nothing survives tax; no price reaches the target.
            return 0.0;
        }
        operational_profit - target_profit / keep
    } else {
        let shield = 1.0 + (1.0 - MACRS_FIRST_YEAR_RATE) * total_rate;
        if shield <= 0.0 {
            return 0.0;
        }
        (operational_profit - target_profit) / shield
    }
}
