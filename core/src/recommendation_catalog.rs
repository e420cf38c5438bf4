//! Fixed ticker tables, selected by risk band.
//!
//! Band edges: score > 7 is aggressive, 4 < score <= 7 is moderate,
//! everything else (including exactly 4) is conservative. These are not
//! the classifier's edges and must stay as written.

use crate::types::RiskScore;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct RecommendationEntry {
    pub ticker:     &'static str,
    pub name:       &'static str,
    pub category:   &'static str,
    pub allocation: u32,
}

const fn entry(
    ticker: &'static str,
    name: &'static str,
    category: &'static str,
    allocation: u32,
) -> RecommendationEntry {
    RecommendationEntry { ticker, name, category, allocation }
}

const VTI: &str = "Vanguard Total Stock Market ETF";
const VXUS: &str = "Vanguard Total International Stock ETF";
const BND: &str = "Vanguard Total Bond Market ETF";
const VNQ: &str = "Vanguard Real Estate ETF";
const VMFXX: &str = "Vanguard Federal Money Market Fund";

const AGGRESSIVE: [RecommendationEntry; 7] = [
    entry("VTI",   VTI,                     "US Stocks",    40),
    entry("AAPL",  "Apple Inc.",            "US Stocks",    10),
    entry("MSFT",  "Microsoft Corporation", "US Stocks",    10),
    entry("VXUS",  VXUS,                    "Int'l Stocks", 20),
    entry("BND",   BND,                     "Bonds",        10),
    entry("VNQ",   VNQ,                     "Alternatives", 7),
    entry("VMFXX", VMFXX,                   "Cash",         3),
];

const MODERATE: [RecommendationEntry; 5] = [
    entry("VTI",   VTI,   "US Stocks",    35),
    entry("VXUS",  VXUS,  "Int'l Stocks", 15),
    entry("BND",   BND,   "Bonds",        40),
    entry("VNQ",   VNQ,   "Alternatives", 5),
    entry("VMFXX", VMFXX, "Cash",         5),
];

const CONSERVATIVE: [RecommendationEntry; 5] = [
    entry("VTI",   VTI,                 "US Stocks",    20),
    entry("VXUS",  VXUS,                "Int'l Stocks", 10),
    entry("BND",   BND,                 "Bonds",        50),
    entry("VTIP",  "Vanguard TIPS ETF", "Bonds",        10),
    entry("VMFXX", VMFXX,               "Cash",         10),
];

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationBand {
    Aggressive,
    Moderate,
    Conservative,
}

impl RecommendationBand {
    pub fn for_score(score: RiskScore) -> Self {
        if score > 7.0 {
            RecommendationBand::Aggressive
        } else if score > 4.0 {
            RecommendationBand::Moderate
        } else {
            RecommendationBand::Conservative
        }
    }

    pub fn entries(self) -> &'static [RecommendationEntry] {
        match self {
            RecommendationBand::Aggressive   => &AGGRESSIVE,
            RecommendationBand::Moderate     => &MODERATE,
            RecommendationBand::Conservative => &CONSERVATIVE,
        }
    }

    pub fn all() -> [RecommendationBand; 3] {
        [
            RecommendationBand::Aggressive,
            RecommendationBand::Moderate,
            RecommendationBand::Conservative,
        ]
    }
}

pub fn recommendations_for(score: RiskScore) -> &'static [RecommendationEntry] {
    RecommendationBand::for_score(score).entries()
}
