//! The forward profitability model and its inverse.
//!
//! Pipeline per (miner, rate) pair: [`path`] yields the monthly price and
//! hashrate trajectory, [`simulator`] turns it into mined BTC, revenue and
//! costs, [`tax`] applies depreciation and income tax, and [`aggregate`]
//! rolls it up into one- or two-year summaries. [`solver`] runs the same
//! simulation without a hardware price and inverts the tax arithmetic.

pub mod aggregate;
pub mod path;
pub mod simulator;
pub mod solver;
pub mod tax;

pub use aggregate::{compute_profitability, compute_profitability_with};
pub use path::YearPath;
pub use simulator::{simulate_year, YearSimulation};
pub use solver::{compute_max_acquisition_price, compute_max_acquisition_price_with};
