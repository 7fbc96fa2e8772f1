//! (miner × electricity rate) grids.
//!
//! Every cell runs the forward model or the acquisition solver on its own
//! inputs, so cells can be computed in any order or in parallel.

use log::debug;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::config::EngineConfig;
use crate::engine::{compute_max_acquisition_price_with, compute_profitability_with};
use crate::models::{
    CellOutcome, Horizon, MarketScenario, MinerSpec, ProfitabilityCell, TaxPolicy,
};

// ---------------------------------------------------------------------------
// MatrixRequest
// ---------------------------------------------------------------------------

/// What every cell of a matrix computes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", tag = "mode")]
pub enum MatrixMode {
    /// Forward model over the given horizon, using each miner's price.
    Profitability { horizon: Horizon },
    /// Maximum acquisition price for a one-year after-tax target; miner prices are ignored.
    #[serde(rename_all = "camelCase")]
    Acquisition { target_profit: f64 },
}

/// Full input set for one matrix computation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatrixRequest {
    pub miners: Vec<MinerSpec>,
    /// $/kWh
    pub rates: Vec<f64>,
    pub scenario: MarketScenario,
    pub tax: TaxPolicy,
    pub mode: MatrixMode,
}

impl MatrixRequest {
    pub fn new(
        miners: Vec<MinerSpec>,
        rates: Vec<f64>,
        scenario: MarketScenario,
        tax: TaxPolicy,
        mode: MatrixMode,
    ) -> Self {
        Self {
            miners,
            rates,
            scenario,
            tax,
            mode,
        }
    }

    pub fn cell_count(&self) -> usize {
        self.miners.len() * self.rates.len()
    }
}

// ---------------------------------------------------------------------------
// ProfitabilityMatrix
// ---------------------------------------------------------------------------

/// Cells laid out one row per miner, one column per rate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfitabilityMatrix {
    pub rows: Vec<Vec<ProfitabilityCell>>,
}

impl ProfitabilityMatrix {
    pub fn get(&self, miner_index: usize, rate_index: usize) -> Option<&ProfitabilityCell> {
        self.rows.get(miner_index).and_then(|row| row.get(rate_index))
    }

    pub fn cells(&self) -> impl Iterator<Item = &ProfitabilityCell> {
        self.rows.iter().flatten()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.iter().all(|row| row.is_empty())
    }
}

/// Compute a single cell.
pub fn compute_cell(
    config: &EngineConfig,
    request: &MatrixRequest,
    miner_index: usize,
    rate_index: usize,
) -> ProfitabilityCell {
    let miner = &request.miners[miner_index];
    let rate = request.rates[rate_index];

    let outcome = match request.mode {
        MatrixMode::Profitability { horizon } => CellOutcome::Profitability(
            compute_profitability_with(config, miner, rate, &request.scenario, &request.tax, horizon),
        ),
        MatrixMode::Acquisition { target_profit } => {
            CellOutcome::Acquisition(compute_max_acquisition_price_with(
                config,
                &miner.hardware,
                rate,
                &request.scenario,
                &request.tax,
                target_profit,
            ))
        }
    };

    ProfitabilityCell {
        miner_index,
        rate_index,
        electricity_rate: rate,
        outcome,
    }
}

/// Compute every (miner, rate) cell of `request`.
///
/// With `parallel` the cells are spread over the rayon thread pool; the
/// result layout is the same either way.
pub fn compute_matrix(
    config: &EngineConfig,
    request: &MatrixRequest,
    parallel: bool,
) -> ProfitabilityMatrix {
    let rate_count = request.rates.len();
    let coords: Vec<(usize, usize)> = (0..request.miners.len())
        .flat_map(|m| (0..rate_count).map(move |r| (m, r)))
        .collect();

    debug!(
        "computing {} cells ({} miners x {} rates, parallel={})",
        coords.len(),
        request.miners.len(),
        rate_count,
        parallel
    );

    let cells: Vec<ProfitabilityCell> = if parallel {
        coords
            .par_iter()
            .map(|&(m, r)| compute_cell(config, request, m, r))
            .collect()
    } else {
        coords
            .iter()
            .map(|&(m, r)| compute_cell(config, request, m, r))
            .collect()
    };

    let mut rows: Vec<Vec<ProfitabilityCell>> = (0..request.miners.len())
        .map(|_| Vec::with_capacity(rate_count))
        .collect();
    for cell in cells {
        rows[cell.miner_index].push(cell);
    }
    for row in &mut rows {
        row.sort_by_key(|c| c.rate_index);
    }

    ProfitabilityMatrix { rows }
}
