//! Mining hardware economics for Rust.
//!
//! Simulates a miner month by month under a moving BTC price and network
//! hashrate, applies depreciation (bonus or MACRS) and income tax, and rolls
//! the result up into one- or two-year summaries. The forward model can be
//! inverted to find the most one can pay for hardware and still reach a
//! target after-tax profit.
//!
//! All computation is pure: identical inputs give identical outputs and no
//! I/O happens anywhere in the crate.
//!
//! # Quick start
//!
//! ```
//! use mining_econ::{Horizon, MarketScenario, MinerSpec, MiningCalculator, TaxPolicy};
//!
//! let calc = MiningCalculator::builder().build().unwrap();
//!
//! let miner = MinerSpec::new(200.0, 3500.0, 4830.0);
//! let scenario = MarketScenario::explicit(110_000.0, 150_000.0, 900.0, 1100.0, 2.0);
//! let tax = TaxPolicy::new(35.0, 0.0, true);
//!
//! let report = calc.profitability(&miner, 0.07, &scenario, &tax, Horizon::OneYear);
//! println!("net profit: {:.2}", report.net_profit());
//!
//! let solve = calc.max_acquisition_price(&miner.hardware, 0.07, &scenario, &tax, 1000.0);
//! println!("pay at most: {:.2}", solve.max_acquisition_price);
//! ```

#[cfg(feature = "async")]
pub mod async_client;
pub mod cache;
pub mod config;
pub mod engine;
pub mod error;
pub mod matrix;
pub mod models;

#[cfg(feature = "async")]
pub use async_client::AsyncMiningCalculator;
pub use cache::ResultCache;
pub use config::EngineConfig;
pub use engine::{compute_max_acquisition_price, compute_profitability};
pub use error::{MiningError, Result};
pub use matrix::{MatrixMode, MatrixRequest, ProfitabilityMatrix};
pub use models::*;

use std::cell::RefCell;
use std::fmt;

// ---------------------------------------------------------------------------
// MiningCalculatorBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing a [`MiningCalculator`].
///
/// Use [`MiningCalculator::builder()`] to obtain a builder, chain configuration
/// methods, and call [`build()`](MiningCalculatorBuilder::build).
pub struct MiningCalculatorBuilder {
    config: EngineConfig,
    parallel: bool,
}

impl Default for MiningCalculatorBuilder {
    fn default() -> Self {
        Self {
            config: EngineConfig::default(),
            parallel: true,
        }
    }
}

impl MiningCalculatorBuilder {
    /// BTC subsidy per block. Defaults to 3.125.
    pub fn block_reward(mut self, btc: f64) -> Self {
        self.config.block_reward = btc;
        self
    }

    /// Blocks found per day. Defaults to 144.
    pub fn blocks_per_day(mut self, blocks: f64) -> Self {
        self.config.blocks_per_day = blocks;
        self
    }

    /// Days in a simulated month. Defaults to 30.42.
    pub fn days_per_month(mut self, days: f64) -> Self {
        self.config.days_per_month = days;
        self
    }

    /// Replace all network constants at once.
    pub fn config(mut self, config: EngineConfig) -> Self {
        self.config = config;
        self
    }

    /// Compute matrix cells on the rayon thread pool. Defaults to `true`.
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Build the calculator.
    ///
    /// Fails with [`MiningError::InvalidArgument`] if any network constant is
    /// not a positive finite number.
    pub fn build(self) -> Result<MiningCalculator> {
        self.config.validate()?;
        Ok(MiningCalculator {
            config: self.config,
            parallel: self.parallel,
            cache: RefCell::new(ResultCache::new()),
        })
    }
}

// ---------------------------------------------------------------------------
// MiningCalculator
// ---------------------------------------------------------------------------

/// Entry point bundling the network constants with a matrix result cache.
///
/// Single-cell calls are computed fresh every time. [`matrix()`](Self::matrix)
/// reuses the previous grid only while its inputs are unchanged.
pub struct MiningCalculator {
    config: EngineConfig,
    parallel: bool,
    cache: RefCell<ResultCache>,
}

impl MiningCalculator {
    /// Create a new builder for configuring the calculator.
    pub fn builder() -> MiningCalculatorBuilder {
        MiningCalculatorBuilder::default()
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn is_parallel(&self) -> bool {
        self.parallel
    }

    /// Profitability of `miner` at `electricity_rate` ($/kWh) over `horizon`.
    pub fn profitability(
        &self,
        miner: &MinerSpec,
        electricity_rate: f64,
        scenario: &MarketScenario,
        tax: &TaxPolicy,
        horizon: Horizon,
    ) -> ProfitabilityReport {
        engine::compute_profitability_with(
            &self.config,
            miner,
            electricity_rate,
            scenario,
            tax,
            horizon,
        )
    }

    /// Maximum hardware price that still yields `target_profit` after tax in year 1.
    pub fn max_acquisition_price(
        &self,
        hardware: &HardwareSpec,
        electricity_rate: f64,
        scenario: &MarketScenario,
        tax: &TaxPolicy,
        target_profit: f64,
    ) -> AcquisitionSolveResult {
        engine::compute_max_acquisition_price_with(
            &self.config,
            hardware,
            electricity_rate,
            scenario,
            tax,
            target_profit,
        )
    }

    /// Compute (or reuse) the full grid for `request`.
    ///
    /// The cached grid is returned only when every input matches the one it
    /// was computed from; otherwise the whole grid is recomputed and replaces
    /// the cache entry.
    pub fn matrix(&self, request: &MatrixRequest) -> ProfitabilityMatrix {
        if let Some(hit) = self.cache.borrow_mut().get(request) {
            return hit.clone();
        }
        let grid = matrix::compute_matrix(&self.config, request, self.parallel);
        self.cache.borrow_mut().store(request, grid.clone());
        grid
    }

    /// `true` if [`matrix()`](Self::matrix) would recompute for `request`.
    pub fn is_stale(&self, request: &MatrixRequest) -> bool {
        self.cache.borrow().is_stale(request)
    }

    /// Drop any cached grid.
    pub fn invalidate(&self) {
        self.cache.borrow_mut().clear();
    }

    /// Store a grid computed elsewhere for `request`.
    #[cfg(feature = "async")]
    pub(crate) fn commit(&self, request: &MatrixRequest, grid: ProfitabilityMatrix) {
        self.cache.borrow_mut().store(request, grid);
    }

    /// `(hits, misses)` of the matrix cache so far.
    pub fn cache_stats(&self) -> (u64, u64) {
        let cache = self.cache.borrow();
        (cache.hits(), cache.misses())
    }
}

// ---------------------------------------------------------------------------
// Display
// ---------------------------------------------------------------------------

impl fmt::Display for MiningCalculator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (hits, misses) = self.cache_stats();
        write!(
            f,
            "MiningCalculator(block_reward={}, blocks_per_day={}, days_per_month={}, parallel={}, cache_hits={}, cache_misses={})",
            self.config.block_reward,
            self.config.blocks_per_day,
            self.config.days_per_month,
            self.parallel,
            hits,
            misses
        )
    }
}
