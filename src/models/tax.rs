use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// TaxPolicy — Income tax rates and depreciation election
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaxPolicy {
    pub federal_rate_pct: f64,
    pub state_rate_pct: f64,
    /// Expense 100% of the hardware cost in year 1 instead of following MACRS.
    pub use_bonus_depreciation: bool,
}

impl TaxPolicy {
    pub fn new(federal_rate_pct: f64, state_rate_pct: f64, use_bonus_depreciation: bool) -> Self {
        Self {
            federal_rate_pct,
            state_rate_pct,
            use_bonus_depreciation,
        }
    }

    /// Combined federal and state rate as a fraction.
    pub fn total_rate(&self) -> f64 {
        (self.federal_rate_pct + self.state_rate_pct) / 100.0
    }
}

// ---------------------------------------------------------------------------
// TaxBreakdown — One year's depreciation and tax liability
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaxBreakdown {
    pub depreciation: f64,
    pub taxable_income: f64,
    pub federal_tax: f64,
    pub state_tax: f64,
    pub total_tax: f64,
    pub after_tax_profit: f64,
}
