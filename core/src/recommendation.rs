//! The combined recommendation delivered for a client.

use crate::{
    allocation_engine::{allocate, AllocationResult},
    recommendation_catalog::{RecommendationBand, RecommendationEntry},
    risk_classifier::{classify, RiskCategory},
    types::RiskScore,
};
use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct RiskProfile {
    pub score:    RiskScore,
    pub category: RiskCategory,
}

/// Recomputed on every selection; never cached or stored.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Recommendation {
    pub risk_profile:    RiskProfile,
    pub allocation:      AllocationResult,
    pub band:            RecommendationBand,
    pub recommendations: Vec<RecommendationEntry>,
}

impl Recommendation {
    pub fn for_score(score: RiskScore) -> Self {
        let band = RecommendationBand::for_score(score);
        Self {
            risk_profile: RiskProfile { score, category: classify(score) },
            allocation: allocate(score),
            band,
            recommendations: band.entries().to_vec(),
        }
    }

    /// Portfolio strategy blurb shown above the allocation.
    pub fn summary(&self) -> String {
        format!(
            "Based on your client's {} risk profile (score: {:.1}/10), \
             we recommend a diversified portfolio that balances growth and stability.",
            self.risk_profile.category.label().to_lowercase(),
            self.risk_profile.score,
        )
    }
}
