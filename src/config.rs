use std::collections::HashMap;

use crate::error::{MiningError, Result};
use crate::models::HardwareSpec;

pub const BLOCKS_PER_DAY: f64 = 144.0;
pub const BLOCK_REWARD_BTC: f64 = 3.125;
pub const DAYS_PER_MONTH: f64 = 30.42;
pub const HOURS_PER_DAY: f64 = 24.0;
pub const MONTHS_PER_YEAR: usize = 12;

/// Network hashrate is quoted in EH/s, miner hashrate in TH/s.
pub const TH_PER_EH: f64 = 1_000_000.0;

/// MACRS 5-year property schedule (half-year convention), percent per year of ownership.
pub const MACRS_SCHEDULE: [f64; 6] = [20.0, 32.0, 19.2, 11.52, 11.52, 5.76];

/// Year-1 MACRS fraction used by the acquisition solver's depreciation shield.
pub const MACRS_FIRST_YEAR_RATE: f64 = 0.20;

/// Network constants used by the monthly simulator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EngineConfig {
    pub blocks_per_day: f64,
    pub block_reward: f64,
    pub days_per_month: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            blocks_per_day: BLOCKS_PER_DAY,
            block_reward: BLOCK_REWARD_BTC,
            days_per_month: DAYS_PER_MONTH,
        }
    }
}

impl EngineConfig {
    /// BTC issued to the whole network in one simulated month.
    pub fn network_btc_per_month(&self) -> f64 {
        self.blocks_per_day * self.block_reward * self.days_per_month
    }

    pub fn hours_per_month(&self) -> f64 {
        HOURS_PER_DAY * self.days_per_month
    }

    pub(crate) fn validate(&self) -> Result<()> {
        let fields = [
            ("blocks_per_day", self.blocks_per_day),
            ("block_reward", self.block_reward),
            ("days_per_month", self.days_per_month),
        ];
        for (name, value) in fields {
            if !(value.is_finite() && value > 0.0) {
                return Err(MiningError::InvalidArgument(format!(
                    "{} must be a positive number, got {}",
                    name, value
                )));
            }
        }
        Ok(())
    }
}

pub fn miner_presets() -> HashMap<&'static str, HardwareSpec> {
    HashMap::from([
        ("antminer-s21", HardwareSpec::new(200.0, 3500.0)),
        ("antminer-s21-pro", HardwareSpec::new(234.0, 3510.0)),
        ("antminer-s21-xp", HardwareSpec::new(270.0, 3645.0)),
        ("antminer-s19-xp", HardwareSpec::new(141.0, 3010.0)),
        ("antminer-s19j-pro", HardwareSpec::new(104.0, 3068.0)),
        ("whatsminer-m60s", HardwareSpec::new(186.0, 3441.0)),
        ("whatsminer-m50s", HardwareSpec::new(126.0, 3276.0)),
    ])
}

/// Look up a preset by name (case-insensitive).
pub fn preset(name: &str) -> Result<HardwareSpec> {
    let key = name.to_lowercase();
    miner_presets()
        .get(key.as_str())
        .copied()
        .ok_or_else(|| MiningError::NotFound(format!("Unknown miner preset: {}", name)))
}
