//! Input-fingerprinted result cache.
//!
//! Holds the most recently computed matrix together with a fingerprint of
//! the request that produced it. Any change to any input (a miner, a rate,
//! the scenario, the tax policy or the mode) changes the fingerprint, and the
//! cached matrix is then stale as a whole. Nothing is ever patched cell by
//! cell.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use log::debug;

use crate::matrix::{MatrixMode, MatrixRequest, ProfitabilityMatrix};
use crate::models::{MarketScenario, MinerSpec, TaxPolicy};

/// 64-bit fingerprint of every input that affects a matrix.
///
/// Floats are hashed by bit pattern, so `0.0` and `-0.0` differ and any
/// change in the last bit counts as a change.
pub fn fingerprint(request: &MatrixRequest) -> u64 {
    let mut hasher = DefaultHasher::new();
    hash_request(request, &mut hasher);
    hasher.finish()
}

fn hash_f64<H: Hasher>(value: f64, state: &mut H) {
    value.to_bits().hash(state);
}

fn hash_miner<H: Hasher>(miner: &MinerSpec, state: &mut H) {
    hash_f64(miner.hardware.hashrate_ths, state);
    hash_f64(miner.hardware.power_watts, state);
    hash_f64(miner.price, state);
}

fn hash_scenario<H: Hasher>(scenario: &MarketScenario, state: &mut H) {
    hash_f64(scenario.btc_price_start, state);
    hash_f64(scenario.btc_price_end, state);
    hash_f64(scenario.network_hashrate_start, state);
    hash_f64(scenario.network_hashrate_end, state);
    hash_f64(scenario.pool_fee_pct, state);
    scenario.use_annual_rates.hash(state);
    scenario.annual_btc_increase_pct.map(f64::to_bits).hash(state);
    scenario.annual_difficulty_increase_pct.map(f64::to_bits).hash(state);
}

fn hash_tax<H: Hasher>(tax: &TaxPolicy, state: &mut H) {
    hash_f64(tax.federal_rate_pct, state);
    hash_f64(tax.state_rate_pct, state);
    tax.use_bonus_depreciation.hash(state);
}

fn hash_mode<H: Hasher>(mode: &MatrixMode, state: &mut H) {
    match mode {
        MatrixMode::Profitability { horizon } => {
            0u8.hash(state);
            horizon.hash(state);
        }
        MatrixMode::Acquisition { target_profit } => {
            1u8.hash(state);
            hash_f64(*target_profit, state);
        }
    }
}

fn hash_request<H: Hasher>(request: &MatrixRequest, state: &mut H) {
    request.miners.len().hash(state);
    for miner in &request.miners {
        hash_miner(miner, state);
    }
    request.rates.len().hash(state);
    for rate in &request.rates {
        hash_f64(*rate, state);
    }
    hash_scenario(&request.scenario, state);
    hash_tax(&request.tax, state);
    hash_mode(&request.mode, state);
}

// ---------------------------------------------------------------------------
// ResultCache
// ---------------------------------------------------------------------------

/// Last computed matrix, keyed by the fingerprint of its request.
#[derive(Debug, Default)]
pub struct ResultCache {
    entry: Option<(u64, ProfitabilityMatrix)>,
    hits: u64,
    misses: u64,
}

impl ResultCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fingerprint of the cached matrix, if any.
    pub fn current_fingerprint(&self) -> Option<u64> {
        self.entry.as_ref().map(|(fp, _)| *fp)
    }

    /// `true` if nothing is cached or the cached matrix came from different inputs.
    pub fn is_stale(&self, request: &MatrixRequest) -> bool {
        self.current_fingerprint() != Some(fingerprint(request))
    }

    /// Return the cached matrix if it was computed from exactly `request`.
    pub fn get(&mut self, request: &MatrixRequest) -> Option<&ProfitabilityMatrix> {
        let fp = fingerprint(request);
        match &self.entry {
            Some((cached, matrix)) if *cached == fp => {
                self.hits += 1;
                debug!("matrix cache hit ({:016x})", fp);
                Some(matrix)
            }
            _ => {
                self.misses += 1;
                debug!("matrix cache miss ({:016x})", fp);
                None
            }
        }
    }

    /// Replace whatever is cached with `matrix` computed from `request`.
    pub fn store(&mut self, request: &MatrixRequest, matrix: ProfitabilityMatrix) {
        self.entry = Some((fingerprint(request), matrix));
    }

    /// Drop the cached matrix.
    pub fn clear(&mut self) {
        self.entry = None;
    }

    pub fn hits(&self) -> u64 {
        self.hits
    }

    pub fn misses(&self) -> u64 {
        self.misses
    }
}
