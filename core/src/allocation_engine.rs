//! Risk score → five-bucket asset allocation.
//!
//! Each bucket is its own clamped affine formula, rounded half away from
//! zero. The buckets are NOT normalized: totals drift away from 100 and
//! callers must not rescale them.

use crate::types::RiskScore;
use serde::{Deserialize, Serialize};

pub const US_STOCKS_CAP: f64 = 65.0;
pub const INTL_STOCKS_CAP: f64 = 40.0;
pub const BONDS_FLOOR: f64 = 5.0;
pub const ALTERNATIVES_CAP: f64 = 15.0;
pub const CASH_FLOOR: f64 = 2.0;

/// Integer percentages per bucket. Signed so that extrapolated scores
/// below the valid range surface as-is instead of saturating.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct AllocationResult {
    pub us_stocks:    i32,
    pub intl_stocks:  i32,
    pub bonds:        i32,
    pub alternatives: i32,
    pub cash:         i32,
}

impl AllocationResult {
    /// US + international equities + alternatives.
    pub fn growth_assets(&self) -> i32 {
        self.us_stocks + self.intl_stocks + self.alternatives
    }

    /// Bonds + cash.
    pub fn defensive_assets(&self) -> i32 {
        self.bonds + self.cash
    }

    pub fn total(&self) -> i32 {
        self.growth_assets() + self.defensive_assets()
    }

    /// Buckets as (label, percent) in display order.
    pub fn slices(&self) -> [(&'static str, i32); 5] {
        [
            ("US Stocks",    self.us_stocks),
            ("Int'l Stocks", self.intl_stocks),
            ("Bonds",        self.bonds),
            ("Alternatives", self.alternatives),
            ("Cash",         self.cash),
        ]
    }
}

pub fn allocate(score: RiskScore) -> AllocationResult {
    AllocationResult {
        us_stocks:    percent(US_STOCKS_CAP.min(10.0 + score * 6.0)),
        intl_stocks:  percent(INTL_STOCKS_CAP.min(5.0 + score * 3.0)),
        bonds:        percent(BONDS_FLOOR.max(70.0 - score * 6.0)),
        alternatives: percent(ALTERNATIVES_CAP.min(((score - 3.0) * 2.0).max(0.0))),
        cash:         percent(CASH_FLOOR.max(15.0 - score)),
    }
}

fn percent(raw: f64) -> i32 {
    raw.round() as i32
}
