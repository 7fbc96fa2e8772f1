//! Month-by-month mining simulation.
//!
//! Revenue follows the miner's share of network hashrate applied to the
//! network's monthly block subsidy. Electricity is billed on nameplate power
//! around the clock.

use crate::config::{EngineConfig, MONTHS_PER_YEAR, TH_PER_EH};
use crate::engine::path::YearPath;
use crate::models::{HardwareSpec, MonthlySimulationPoint};

/// The twelve simulated months of one year and their totals.
#[derive(Debug, Clone, PartialEq)]
pub struct YearSimulation {
    pub path: YearPath,
    pub months: Vec<MonthlySimulationPoint>,
    /// Net of pool fees.
    pub total_btc_mined: f64,
    /// Net of pool fees.
    pub total_revenue: f64,
    pub total_pool_fees: f64,
    pub total_electricity: f64,
    /// kWh drawn over the months that actually mined.
    pub total_energy_kwh: f64,
}

impl YearSimulation {
    pub fn operational_profit(&self) -> f64 {
        self.total_revenue - self.total_electricity
    }

    /// Electricity rate ($/kWh) at which the year breaks even before tax.
    pub fn break_even_rate(&self) -> f64 {
        if self.total_energy_kwh > 0.0 {
            self.total_revenue / self.total_energy_kwh
        } else {
            0.0
        }
    }
}

/// Simulate a single month at a 0-based index into `path`.
///
/// A month with no miner hashrate, no network hashrate or no BTC price
/// produces zeros rather than dividing by zero.
pub fn simulate_month(
    config: &EngineConfig,
    hardware: &HardwareSpec,
    electricity_rate: f64,
    path: &YearPath,
    pool_fee_pct: f64,
    month_index: usize,
) -> MonthlySimulationPoint {
    let (btc_price, network_hashrate) = path.at_month(month_index);
    let month = month_index as u32 + 1;

    if !(hardware.hashrate_ths > 0.0 && network_hashrate > 0.0 && btc_price > 0.0) {
        return MonthlySimulationPoint::idle(month, btc_price, network_hashrate);
    }

    let share_of_network = hardware.hashrate_ths / (network_hashrate * TH_PER_EH);
    let btc_mined_gross = share_of_network * config.network_btc_per_month();
    let fee_fraction = pool_fee_pct / 100.0;
    let btc_mined_net = btc_mined_gross * (1.0 - fee_fraction);

    let gross_revenue = btc_mined_gross * btc_price;
    let pool_fee = gross_revenue * fee_fraction;
    let net_revenue = gross_revenue - pool_fee;

    let electricity_cost = energy_kwh(config, hardware) * electricity_rate;

    MonthlySimulationPoint {
        month,
        btc_price,
        network_hashrate,
        btc_mined_gross,
        btc_mined_net,
        gross_revenue,
        pool_fee,
        net_revenue,
        electricity_cost,
        operational_profit: net_revenue - electricity_cost,
    }
}

/// Simulate all twelve months of `path` and accumulate the totals.
pub fn simulate_year(
    config: &EngineConfig,
    hardware: &HardwareSpec,
    electricity_rate: f64,
    path: &YearPath,
    pool_fee_pct: f64,
) -> YearSimulation {
    let months: Vec<MonthlySimulationPoint> = (0..MONTHS_PER_YEAR)
        .map(|m| simulate_month(config, hardware, electricity_rate, path, pool_fee_pct, m))
        .collect();

    let monthly_kwh = energy_kwh(config, hardware);
    let mut sim = YearSimulation {
        path: *path,
        months: Vec::new(),
        total_btc_mined: 0.0,
        total_revenue: 0.0,
        total_pool_fees: 0.0,
        total_electricity: 0.0,
        total_energy_kwh: 0.0,
    };

    for point in &months {
        sim.total_btc_mined += point.btc_mined_net;
        sim.total_revenue += point.net_revenue;
        sim.total_pool_fees += point.pool_fee;
        sim.total_electricity += point.electricity_cost;
        if point.btc_mined_gross > 0.0 {
            sim.total_energy_kwh += monthly_kwh;
        }
    }
    sim.months = months;
    sim
}

/// kWh drawn in one month at nameplate power.
fn energy_kwh(config: &EngineConfig, hardware: &HardwareSpec) -> f64 {
    (hardware.power_watts / 1000.0) * config.hours_per_month()
}
