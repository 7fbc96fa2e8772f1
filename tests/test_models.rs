//! Data model, preset and serialization tests.

mod common;

use mining_econ::config::{miner_presets, preset};
use mining_econ::{
    compute_profitability, HardwareSpec, Horizon, MarketScenario, MinerSpec, MiningError,
    ProfitabilityReport,
};

// ---------------------------------------------------------------------------
// Efficiency
// ---------------------------------------------------------------------------

#[test]
fn efficiency_is_power_over_hashrate() {
    let miner = MinerSpec::new(200.0, 3500.0, 4830.0);
    assert_eq!(miner.efficiency(), 17.5);
}

#[test]
fn efficiency_tracks_input_changes() {
    let mut miner = MinerSpec::new(200.0, 3500.0, 4830.0);
    miner.hardware.hashrate_ths = 250.0;
    assert_eq!(miner.efficiency(), 14.0);
    miner.hardware.power_watts = 3000.0;
    assert_eq!(miner.efficiency(), 12.0);
}

#[test]
fn efficiency_of_zero_hashrate_is_zero() {
    assert_eq!(HardwareSpec::new(0.0, 3500.0).efficiency(), 0.0);
}

// ---------------------------------------------------------------------------
// Scenario end values
// ---------------------------------------------------------------------------

#[test]
fn explicit_scenario_resolves_to_its_end_values() {
    let s = common::reference_scenario();
    assert_eq!(s.resolved_price_end(), 150_000.0);
    assert_eq!(s.resolved_hashrate_end(), 1100.0);
}

#[test]
fn annual_rate_constructor_keeps_end_fields_in_sync() {
    let s = MarketScenario::with_annual_rates(100_000.0, 800.0, 2.0, 25.0, 40.0);
    assert_eq!(s.btc_price_end, s.resolved_price_end());
    assert_eq!(s.network_hashrate_end, s.resolved_hashrate_end());
}

// ---------------------------------------------------------------------------
// Presets
// ---------------------------------------------------------------------------

#[test]
fn presets_are_case_insensitive() {
    let s21 = preset("Antminer-S21").unwrap();
    assert_eq!(s21, HardwareSpec::new(200.0, 3500.0));
}

#[test]
fn unknown_preset_is_not_found() {
    assert!(matches!(preset("nope"), Err(MiningError::NotFound(_))));
}

#[test]
fn presets_have_sane_efficiency() {
    for (name, hw) in miner_presets() {
        let eff = hw.efficiency();
        assert!(eff > 10.0 && eff < 35.0, "{} has efficiency {}", name, eff);
    }
}

// ---------------------------------------------------------------------------
// Serialization
// ---------------------------------------------------------------------------

#[test]
fn miner_serializes_flat_camel_case() {
    let json = serde_json::to_value(common::reference_miner()).unwrap();
    assert_eq!(
        json,
        serde_json::json!({ "hashrateThs": 200.0, "powerWatts": 3500.0, "price": 4830.0 })
    );
}

#[test]
fn scenario_deserializes_without_optional_fields() {
    let s: MarketScenario = serde_json::from_value(serde_json::json!({
        "btcPriceStart": 110000.0,
        "btcPriceEnd": 150000.0,
        "networkHashrateStart": 900.0,
        "networkHashrateEnd": 1100.0,
        "poolFeePct": 2.0
    }))
    .unwrap();
    assert_eq!(s, common::reference_scenario());
}

#[test]
fn report_round_trips_through_json() {
    let report = compute_profitability(
        &common::reference_miner(),
        common::REFERENCE_RATE,
        &common::reference_scenario(),
        &common::bonus_policy(),
        Horizon::TwoYears,
    );
    let json = serde_json::to_string(&report).unwrap();
    assert!(json.contains("\"horizon\":\"twoYears\""));
    assert!(json.contains("\"annualizedRoi\""));

    let back: ProfitabilityReport = serde_json::from_str(&json).unwrap();
    assert_eq!(back.horizon(), Horizon::TwoYears);
    assert!(common::approx_eq(back.net_profit(), report.net_profit(), 1e-12));
    assert_eq!(back.as_two_year().unwrap().year2.months.len(), 12);
}
