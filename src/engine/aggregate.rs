//! One- and two-year profitability summaries.

use crate::config::EngineConfig;
use crate::engine::path::YearPath;
use crate::engine::simulator::simulate_year;
use crate::engine::tax::tax_for_year;
use crate::models::{
    Horizon, MarketScenario, MinerSpec, ProfitabilityReport, TaxPolicy, TwoYearSummary,
    YearlySummary,
};

/// Return on `price` in percent, 0 for free hardware.
fn roi_pct(net_profit: f64, price: f64) -> f64 {
    if price > 0.0 {
        net_profit / price * 100.0
    } else {
        0.0
    }
}

/// Simulate and tax one year of ownership.
///
/// `hardware_charge` is the part of the purchase price booked against this
/// year's net profit: the full price in the year of purchase, 0 afterwards.
/// Depreciation and ROI are always based on the full `miner.price`.
#[allow(clippy::too_many_arguments)]
pub fn summarize_year(
    config: &EngineConfig,
    miner: &MinerSpec,
    electricity_rate: f64,
    path: &YearPath,
    scenario: &MarketScenario,
    tax: &TaxPolicy,
    year: u32,
    hardware_charge: f64,
) -> YearlySummary {
    let sim = simulate_year(
        config,
        &miner.hardware,
        electricity_rate,
        path,
        scenario.pool_fee_pct,
    );
    let operational_profit = sim.operational_profit();
    let breakdown = tax_for_year(operational_profit, miner.price, year, tax);
    let net_profit = breakdown.after_tax_profit - hardware_charge;

    YearlySummary {
        year,
        start_price: path.price_start,
        end_price: path.price_end,
        start_hashrate: path.hashrate_start,
        end_hashrate: path.hashrate_end,
        total_btc_mined: sim.total_btc_mined,
        total_revenue: sim.total_revenue,
        total_pool_fees: sim.total_pool_fees,
        total_electricity: sim.total_electricity,
        operational_profit,
        break_even_rate: sim.break_even_rate(),
        depreciation: breakdown.depreciation,
        taxable_income: breakdown.taxable_income,
        federal_tax: breakdown.federal_tax,
        state_tax: breakdown.state_tax,
        tax: breakdown.total_tax,
        after_tax_profit: breakdown.after_tax_profit,
        net_profit,
        roi: roi_pct(net_profit, miner.price),
        months: sim.months,
    }
}

/// First year of ownership, hardware paid up front.
pub fn one_year(
    config: &EngineConfig,
    miner: &MinerSpec,
    electricity_rate: f64,
    scenario: &MarketScenario,
    tax: &TaxPolicy,
) -> YearlySummary {
    let path = YearPath::first_year(scenario);
    summarize_year(
        config,
        miner,
        electricity_rate,
        &path,
        scenario,
        tax,
        1,
        miner.price,
    )
}

/// Two chained years with the hardware paid once at the start.
pub fn two_years(
    config: &EngineConfig,
    miner: &MinerSpec,
    electricity_rate: f64,
    scenario: &MarketScenario,
    tax: &TaxPolicy,
) -> TwoYearSummary {
    let first = YearPath::first_year(scenario);
    let second = first.next_year(scenario);

    let year1 = summarize_year(
        config,
        miner,
        electricity_rate,
        &first,
        scenario,
        tax,
        1,
        miner.price,
    );
    let year2 = summarize_year(config, miner, electricity_rate, &second, scenario, tax, 2, 0.0);

    let after_tax_profit = year1.after_tax_profit + year2.after_tax_profit;
    let net_profit = after_tax_profit - miner.price;
    let roi = roi_pct(net_profit, miner.price);

    TwoYearSummary {
        total_btc_mined: year1.total_btc_mined + year2.total_btc_mined,
        operational_profit: year1.operational_profit + year2.operational_profit,
        after_tax_profit,
        net_profit,
        roi,
        annualized_roi: roi / 2.0,
        year1,
        year2,
    }
}

/// Profitability of `miner` at `electricity_rate` ($/kWh) over `horizon`,
/// using the default network constants.
pub fn compute_profitability(
    miner: &MinerSpec,
    electricity_rate: f64,
    scenario: &MarketScenario,
    tax: &TaxPolicy,
    horizon: Horizon,
) -> ProfitabilityReport {
    compute_profitability_with(
        &EngineConfig::default(),
        miner,
        electricity_rate,
        scenario,
        tax,
        horizon,
    )
}

/// Like [`compute_profitability`] with explicit network constants.
pub fn compute_profitability_with(
    config: &EngineConfig,
    miner: &MinerSpec,
    electricity_rate: f64,
    scenario: &MarketScenario,
    tax: &TaxPolicy,
    horizon: Horizon,
) -> ProfitabilityReport {
    match horizon {
        Horizon::OneYear => {
            ProfitabilityReport::OneYear(one_year(config, miner, electricity_rate, scenario, tax))
        }
        Horizon::TwoYears => {
            ProfitabilityReport::TwoYears(two_years(config, miner, electricity_rate, scenario, tax))
        }
    }
}
