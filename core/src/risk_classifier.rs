//! Risk score → risk category.
//!
//! Thresholds are inclusive upper bounds checked in ascending order.
//! Scores outside [1, 10] fall through the same table.

use crate::types::RiskScore;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum RiskCategory {
    Conservative,
    ModeratelyConservative,
    Moderate,
    ModeratelyAggressive,
    Aggressive,
}

impl RiskCategory {
    pub fn label(self) -> &'static str {
        match self {
            RiskCategory::Conservative           => "Conservative",
            RiskCategory::ModeratelyConservative => "Moderately Conservative",
            RiskCategory::Moderate               => "Moderate",
            RiskCategory::ModeratelyAggressive   => "Moderately Aggressive",
            RiskCategory::Aggressive             => "Aggressive",
        }
    }
}

impl fmt::Display for RiskCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

pub fn classify(score: RiskScore) -> RiskCategory {
    if score <= 2.0 {
        RiskCategory::Conservative
    } else if score <= 4.0 {
        RiskCategory::ModeratelyConservative
    } else if score <= 6.0 {
        RiskCategory::Moderate
    } else if score <= 8.0 {
        RiskCategory::ModeratelyAggressive
    } else {
        RiskCategory::Aggressive
    }
}
