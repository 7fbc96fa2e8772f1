//! Depreciation schedules and income tax.

use crate::config::MACRS_SCHEDULE;
use crate::models::{TaxBreakdown, TaxPolicy};

/// Depreciation deductible in `year` (1-based) of owning hardware bought for `price`.
///
/// Bonus depreciation expenses the full price in year 1. Otherwise the
/// MACRS schedule applies for years 1 through 6 and nothing afterwards.
pub fn depreciation(price: f64, year: u32, use_bonus_depreciation: bool) -> f64 {
    if year == 0 {
        return 0.0;
    }
    if use_bonus_depreciation {
        return if year == 1 { price } else { 0.0 };
    }
    MACRS_SCHEDULE
        .get(year as usize - 1)
        .map(|pct| price * pct / 100.0)
        .unwrap_or(0.0)
}

impl TaxBreakdown {
    /// Tax owed on one year's operational profit after deducting `depreciation`.
    ///
    /// Taxable income never goes below zero, so a loss year owes nothing.
    pub fn compute(operational_profit: f64, depreciation: f64, policy: &TaxPolicy) -> Self {
        let taxable_income = (operational_profit - depreciation).max(0.0);
        let federal_tax = taxable_income * policy.federal_rate_pct / 100.0;
        let state_tax = taxable_income * policy.state_rate_pct / 100.0;
        let total_tax = federal_tax + state_tax;

        Self {
            depreciation,
            taxable_income,
            federal_tax,
            state_tax,
            total_tax,
            after_tax_profit: operational_profit - total_tax,
        }
    }
}

/// Depreciation and tax for `year` of owning hardware bought for `price`.
pub fn tax_for_year(
    operational_profit: f64,
    price: f64,
    year: u32,
    policy: &TaxPolicy,
) -> TaxBreakdown {
    let dep = depreciation(price, year, policy.use_bonus_depreciation);
    TaxBreakdown::compute(operational_profit, dep, policy)
}
