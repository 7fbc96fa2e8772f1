use serde::{Deserialize, Serialize};

use crate::error::MiningError;

// ---------------------------------------------------------------------------
// MonthlySimulationPoint — One simulated month
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlySimulationPoint {
    /// 1-based month within the simulated year.
    pub month: u32,
    pub btc_price: f64,
    /// EH/s
    pub network_hashrate: f64,
    pub btc_mined_gross: f64,
    pub btc_mined_net: f64,
    pub gross_revenue: f64,
    pub pool_fee: f64,
    pub net_revenue: f64,
    pub electricity_cost: f64,
    pub operational_profit: f64,
}

impl MonthlySimulationPoint {
    /// A month that produced nothing and cost nothing.
    pub fn idle(month: u32, btc_price: f64, network_hashrate: f64) -> Self {
        Self {
            month,
            btc_price,
            network_hashrate,
            btc_mined_gross: 0.0,
            btc_mined_net: 0.0,
            gross_revenue: 0.0,
            pool_fee: 0.0,
            net_revenue: 0.0,
            electricity_cost: 0.0,
            operational_profit: 0.0,
        }
    }
}

// ---------------------------------------------------------------------------
// YearlySummary — Twelve months plus depreciation, tax and returns
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YearlySummary {
    /// 1-based year of ownership.
    pub year: u32,
    pub start_price: f64,
    pub end_price: f64,
    pub start_hashrate: f64,
    pub end_hashrate: f64,
    pub months: Vec<MonthlySimulationPoint>,

    pub total_btc_mined: f64,
    pub total_revenue: f64,
    pub total_pool_fees: f64,
    pub total_electricity: f64,
    pub operational_profit: f64,
    /// Electricity rate ($/kWh) at which `operational_profit` would be zero.
    pub break_even_rate: f64,

    pub depreciation: f64,
    pub taxable_income: f64,
    pub federal_tax: f64,
    pub state_tax: f64,
    pub tax: f64,
    pub after_tax_profit: f64,
    pub net_profit: f64,
    pub roi: f64,
}

// ---------------------------------------------------------------------------
// TwoYearSummary — Two chained years, hardware paid once
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TwoYearSummary {
    pub year1: YearlySummary,
    pub year2: YearlySummary,
    pub total_btc_mined: f64,
    pub operational_profit: f64,
    pub after_tax_profit: f64,
    pub net_profit: f64,
    /// Cumulative two-year ROI, percent.
    pub roi: f64,
    /// `roi / 2`, a simple (not compounded) average.
    pub annualized_roi: f64,
}

// ---------------------------------------------------------------------------
// Horizon / ProfitabilityReport
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Horizon {
    OneYear,
    TwoYears,
}

impl Horizon {
    pub fn years(&self) -> u32 {
        match self {
            Horizon::OneYear => 1,
            Horizon::TwoYears => 2,
        }
    }
}

impl TryFrom<u8> for Horizon {
    type Error = MiningError;

    fn try_from(years: u8) -> Result<Self, Self::Error> {
        match years {
            1 => Ok(Horizon::OneYear),
            2 => Ok(Horizon::TwoYears),
            other => Err(MiningError::InvalidArgument(format!(
                "horizon must be 1 or 2 years, got {}",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", tag = "horizon")]
pub enum ProfitabilityReport {
    OneYear(YearlySummary),
    TwoYears(TwoYearSummary),
}

impl ProfitabilityReport {
    pub fn horizon(&self) -> Horizon {
        match self {
            ProfitabilityReport::OneYear(_) => Horizon::OneYear,
            ProfitabilityReport::TwoYears(_) => Horizon::TwoYears,
        }
    }

    pub fn total_btc_mined(&self) -> f64 {
        match self {
            ProfitabilityReport::OneYear(y) => y.total_btc_mined,
            ProfitabilityReport::TwoYears(t) => t.total_btc_mined,
        }
    }

    pub fn operational_profit(&self) -> f64 {
        match self {
            ProfitabilityReport::OneYear(y) => y.operational_profit,
            ProfitabilityReport::TwoYears(t) => t.operational_profit,
        }
    }

    pub fn after_tax_profit(&self) -> f64 {
        match self {
            ProfitabilityReport::OneYear(y) => y.after_tax_profit,
            ProfitabilityReport::TwoYears(t) => t.after_tax_profit,
        }
    }

    pub fn net_profit(&self) -> f64 {
        match self {
            ProfitabilityReport::OneYear(y) => y.net_profit,
            ProfitabilityReport::TwoYears(t) => t.net_profit,
        }
    }

    pub fn roi(&self) -> f64 {
        match self {
            ProfitabilityReport::OneYear(y) => y.roi,
            ProfitabilityReport::TwoYears(t) => t.roi,
        }
    }

    pub fn as_one_year(&self) -> Option<&YearlySummary> {
        match self {
            ProfitabilityReport::OneYear(y) => Some(y),
            ProfitabilityReport::TwoYears(_) => None,
        }
    }

    pub fn as_two_year(&self) -> Option<&TwoYearSummary> {
        match self {
            ProfitabilityReport::OneYear(_) => None,
            ProfitabilityReport::TwoYears(t) => Some(t),
        }
    }
}

// ---------------------------------------------------------------------------
// AcquisitionSolveResult — Inverse solve for the maximum hardware price
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AcquisitionSolveResult {
    pub max_acquisition_price: f64,
    pub dollar_per_th: f64,
    pub implied_roi: f64,
    /// One-year operational profit before any hardware cost.
    pub operational_profit: f64,
}

// ---------------------------------------------------------------------------
// ProfitabilityCell — One (miner, electricity rate) entry of a matrix
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", tag = "mode", content = "result")]
pub enum CellOutcome {
    Profitability(ProfitabilityReport),
    Acquisition(AcquisitionSolveResult),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfitabilityCell {
    pub miner_index: usize,
    pub rate_index: usize,
    /// $/kWh
    pub electricity_rate: f64,
    pub outcome: CellOutcome,
}

impl ProfitabilityCell {
    pub fn report(&self) -> Option<&ProfitabilityReport> {
        match &self.outcome {
            CellOutcome::Profitability(r) => Some(r),
            CellOutcome::Acquisition(_) => None,
        }
    }

    pub fn acquisition(&self) -> Option<&AcquisitionSolveResult> {
        match &self.outcome {
            CellOutcome::Profitability(_) => None,
            CellOutcome::Acquisition(a) => Some(a),
        }
    }
}
