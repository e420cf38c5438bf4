//! Risk-panel indicators and return projections for a client.

use crate::types::RiskScore;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Level {
    VeryLow,
    Low,
    Moderate,
    High,
    VeryHigh,
}

impl Level {
    pub fn label(self) -> &'static str {
        match self {
            Level::VeryLow  => "Very Low",
            Level::Low      => "Low",
            Level::Moderate => "Moderate",
            Level::High     => "High",
            Level::VeryHigh => "Very High",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct RiskAnalysis {
    pub volatility_tolerance: Level,
    pub income_needs:         Level,
    pub loss_capacity:        Level,
}

impl RiskAnalysis {
    pub fn for_score(score: RiskScore) -> Self {
        let volatility_tolerance = if score > 8.0 {
            Level::VeryHigh
        } else if score > 6.0 {
            Level::High
        } else if score > 4.0 {
            Level::Moderate
        } else if score > 2.0 {
            Level::Low
        } else {
            Level::VeryLow
        };

        let income_needs = if score < 4.0 { Level::High } else { Level::Low };

        let loss_capacity = if score > 7.0 {
            Level::High
        } else if score > 4.0 {
            Level::Moderate
        } else {
            Level::Low
        };

        Self { volatility_tolerance, income_needs, loss_capacity }
    }
}

/// Expected returns in percent. Illustrative only, never rounded.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct ReturnProjection {
    pub one_year:          f64,
    pub five_year_annual:  f64,
    pub ten_year_annual:   f64,
}

impl ReturnProjection {
    pub fn for_score(score: RiskScore) -> Self {
        Self {
            one_year:         5.0 + score * 0.5,
            five_year_annual: 6.0 + score * 0.6,
            ten_year_annual:  7.0 + score * 0.7,
        }
    }
}
