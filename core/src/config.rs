use crate::types::{Money, RiskScore};
use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const CONFIG_FILE: &str = "advisor.json";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AdvisorConfig {
    /// Simulated latency between a selection and its recommendation.
    pub recommendation_delay_ms: u64,
    /// Goal progress assigned to freshly onboarded clients.
    pub new_client_goal_progress: u32,
    /// Investment total used when the onboarding net worth is blank or zero.
    pub default_investment_total: Money,
    /// Pre-filled onboarding form values.
    pub default_risk_tolerance: RiskScore,
    pub default_time_horizon: u32,
    /// Seed the sample clients when the desk is built.
    pub seed_sample_clients: bool,
}

impl Default for AdvisorConfig {
    fn default() -> Self {
        Self {
            recommendation_delay_ms: 1_500,
            new_client_goal_progress: 15,
            default_investment_total: 100_000,
            default_risk_tolerance: 5.0,
            default_time_horizon: 10,
            seed_sample_clients: true,
        }
    }
}

impl AdvisorConfig {
    /// Load from `{data_dir}/advisor.json`. Missing keys keep their defaults.
    /// In tests, use AdvisorConfig::default().
    pub fn load(data_dir: &str) -> anyhow::Result<Self> {
        let path = format!("{data_dir}/{CONFIG_FILE}");
        let content = std::fs::read_to_string(&path)
            .map_err(|e| anyhow::anyhow!("Cannot read {path}: {e}"))?;
        let config: AdvisorConfig = serde_json::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Cannot parse {path}: {e}"))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        if self.new_client_goal_progress > 100 {
            anyhow::bail!(
                "new_client_goal_progress must be within 0..=100, got {}",
                self.new_client_goal_progress
            );
        }
        if !(1.0..=10.0).contains(&self.default_risk_tolerance) {
            anyhow::bail!(
                "default_risk_tolerance must be within 1..=10, got {}",
                self.default_risk_tolerance
            );
        }
        if !(1..=50).contains(&self.default_time_horizon) {
            anyhow::bail!(
                "default_time_horizon must be within 1..=50, got {}",
                self.default_time_horizon
            );
        }
        Ok(())
    }

    pub fn recommendation_delay(&self) -> Duration {
        Duration::from_millis(self.recommendation_delay_ms)
    }
}
