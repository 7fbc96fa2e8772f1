//! Calculator facade and result cache tests.

mod common;

use mining_econ::cache::fingerprint;
use mining_econ::{
    compute_profitability, Horizon, MatrixMode, MatrixRequest, MiningCalculator, MiningError,
    ResultCache,
};

fn request() -> MatrixRequest {
    MatrixRequest::new(
        vec![common::reference_miner()],
        vec![0.05, 0.07],
        common::reference_scenario(),
        common::bonus_policy(),
        MatrixMode::Profitability {
            horizon: Horizon::OneYear,
        },
    )
}

// ---------------------------------------------------------------------------
// Builder
// ---------------------------------------------------------------------------

#[test]
fn default_build_uses_network_constants() {
    let calc = MiningCalculator::builder().build().unwrap();
    assert_eq!(calc.config().blocks_per_day, 144.0);
    assert_eq!(calc.config().block_reward, 3.125);
    assert_eq!(calc.config().days_per_month, 30.42);
    assert!(calc.is_parallel());
}

#[test]
fn builder_rejects_non_positive_constants() {
    let err = MiningCalculator::builder().block_reward(0.0).build();
    assert!(matches!(err, Err(MiningError::InvalidArgument(_))));

    let err = MiningCalculator::builder().days_per_month(f64::NAN).build();
    assert!(matches!(err, Err(MiningError::InvalidArgument(_))));
}

#[test]
fn facade_matches_free_functions_with_default_config() {
    let calc = MiningCalculator::builder().build().unwrap();
    let miner = common::reference_miner();
    let scenario = common::reference_scenario();
    let tax = common::bonus_policy();

    assert_eq!(
        calc.profitability(&miner, 0.07, &scenario, &tax, Horizon::TwoYears),
        compute_profitability(&miner, 0.07, &scenario, &tax, Horizon::TwoYears)
    );
}

#[test]
fn halving_config_halves_btc_mined() {
    let base = MiningCalculator::builder().build().unwrap();
    let halved = MiningCalculator::builder().block_reward(1.5625).build().unwrap();
    let miner = common::reference_miner();
    let scenario = common::reference_scenario();
    let tax = common::bonus_policy();

    let a = base.profitability(&miner, 0.07, &scenario, &tax, Horizon::OneYear);
    let b = halved.profitability(&miner, 0.07, &scenario, &tax, Horizon::OneYear);
    assert!(common::approx_eq(b.total_btc_mined() * 2.0, a.total_btc_mined(), 1e-12));
}

#[test]
fn display_mentions_config() {
    let calc = MiningCalculator::builder().parallel(false).build().unwrap();
    let text = calc.to_string();
    assert!(text.contains("block_reward=3.125"));
    assert!(text.contains("parallel=false"));
}

// ---------------------------------------------------------------------------
// Matrix cache
// ---------------------------------------------------------------------------

#[test]
fn matrix_is_reused_while_inputs_are_unchanged() {
    common::init_logging();
    let calc = MiningCalculator::builder().build().unwrap();
    let req = request();

    assert!(calc.is_stale(&req));
    let first = calc.matrix(&req);
    assert!(!calc.is_stale(&req));
    let second = calc.matrix(&req);

    assert_eq!(first, second);
    assert_eq!(calc.cache_stats(), (1, 1));
}

#[test]
fn any_input_change_invalidates() {
    common::init_logging();
    let calc = MiningCalculator::builder().build().unwrap();
    let req = request();
    calc.matrix(&req);

    let mut changed = req.clone();
    changed.rates[1] = 0.0700001;
    assert!(calc.is_stale(&changed));

    let mut changed = req.clone();
    changed.miners[0].price += 1.0;
    assert!(calc.is_stale(&changed));

    let mut changed = req.clone();
    changed.scenario.pool_fee_pct = 2.5;
    assert!(calc.is_stale(&changed));

    let mut changed = req.clone();
    changed.tax.use_bonus_depreciation = false;
    assert!(calc.is_stale(&changed));

    let mut changed = req.clone();
    changed.mode = MatrixMode::Profitability {
        horizon: Horizon::TwoYears,
    };
    assert!(calc.is_stale(&changed));
}

#[test]
fn new_inputs_replace_the_cached_grid() {
    let calc = MiningCalculator::builder().build().unwrap();
    let req = request();
    calc.matrix(&req);

    let mut changed = req.clone();
    changed.scenario.btc_price_end = 90_000.0;
    let grid = calc.matrix(&changed);

    assert!(calc.is_stale(&req));
    assert!(!calc.is_stale(&changed));
    let direct = compute_profitability(
        &changed.miners[0],
        changed.rates[0],
        &changed.scenario,
        &changed.tax,
        Horizon::OneYear,
    );
    assert_eq!(grid.get(0, 0).unwrap().report(), Some(&direct));
}

#[test]
fn invalidate_clears_the_cache() {
    let calc = MiningCalculator::builder().build().unwrap();
    let req = request();
    calc.matrix(&req);
    calc.invalidate();
    assert!(calc.is_stale(&req));
}

#[test]
fn fingerprint_is_deterministic() {
    assert_eq!(fingerprint(&request()), fingerprint(&request()));

    let mut other = request();
    other.rates.reverse();
    assert_ne!(fingerprint(&request()), fingerprint(&other));
}

#[test]
fn result_cache_store_and_get() {
    let mut cache = ResultCache::new();
    let req = request();
    assert!(cache.get(&req).is_none());
    assert_eq!(cache.current_fingerprint(), None);

    let calc = MiningCalculator::builder().parallel(false).build().unwrap();
    cache.store(&req, calc.matrix(&req));
    assert!(cache.get(&req).is_some());
    assert_eq!(cache.current_fingerprint(), Some(fingerprint(&req)));
    assert_eq!((cache.hits(), cache.misses()), (1, 1));

    cache.clear();
    assert!(cache.is_stale(&req));
}
