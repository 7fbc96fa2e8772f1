//! Shared fixtures for the mining economics integration tests.
//!
//! The reference setup is a 200 TH/s, 3500 W miner bought for $4,830, mining
//! on a network going from 900 to 1100 EH/s while BTC goes from $110k to
//! $150k, with a 2% pool fee, $0.07/kWh power and a 35% federal rate.

#![allow(dead_code)]

use mining_econ::{HardwareSpec, MarketScenario, MinerSpec, TaxPolicy};

pub const REFERENCE_RATE: f64 = 0.07;
pub const REFERENCE_PRICE: f64 = 4830.0;

pub fn reference_hardware() -> HardwareSpec {
    HardwareSpec::new(200.0, 3500.0)
}

pub fn reference_miner() -> MinerSpec {
    reference_hardware().with_price(REFERENCE_PRICE)
}

pub fn reference_scenario() -> MarketScenario {
    MarketScenario::explicit(110_000.0, 150_000.0, 900.0, 1100.0, 2.0)
}

pub fn annual_rate_scenario() -> MarketScenario {
    MarketScenario::with_annual_rates(100_000.0, 800.0, 2.0, 25.0, 40.0)
}

pub fn bonus_policy() -> TaxPolicy {
    TaxPolicy::new(35.0, 0.0, true)
}

pub fn macrs_policy() -> TaxPolicy {
    TaxPolicy::new(35.0, 5.0, false)
}

/// Route `log` output through the test harness; `RUST_LOG=debug` shows cache activity.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Relative closeness with an absolute floor for values near zero.
pub fn approx_eq(a: f64, b: f64, rel: f64) -> bool {
    let scale = a.abs().max(b.abs()).max(1.0);
    (a - b).abs() <= rel * scale
}

/// Assert that no numeric field of a serialized value is NaN or infinite.
///
/// `serde_json` writes non-finite floats as `null`, so any `null` where a
/// number belongs shows up here.
pub fn assert_all_finite(value: &serde_json::Value, path: &str) {
    match value {
        serde_json::Value::Null => panic!("non-finite or missing value at {}", path),
        serde_json::Value::Number(n) => {
            let f = n.as_f64().unwrap();
            assert!(f.is_finite(), "non-finite value at {}", path);
        }
        serde_json::Value::Array(items) => {
            for (i, item) in items.iter().enumerate() {
                assert_all_finite(item, &format!("{}[{}]", path, i));
            }
        }
        serde_json::Value::Object(map) => {
            for (k, v) in map {
                assert_all_finite(v, &format!("{}.{}", path, k));
            }
        }
        _ => {}
    }
}
