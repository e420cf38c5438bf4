//! Client onboarding: raw form input → a validated new client.
//!
//! The calculation core assumes clean numbers. This is the only place
//! free-form text gets parsed.

use crate::{
    client_store::{ClientProfile, NewClient},
    config::AdvisorConfig,
    types::{Money, MAX_RISK_SCORE, MIN_RISK_SCORE},
};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

pub const MIN_AGE: u32 = 18;
pub const MAX_AGE: u32 = 120;
pub const MIN_TIME_HORIZON: u32 = 1;
pub const MAX_TIME_HORIZON: u32 = 50;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum OnboardingError {
    #[error("name is required")]
    MissingName,

    #[error("age must be a whole number between 18 and 120, got '{value}'")]
    InvalidAge { value: String },

    #[error("income must be a non-negative number, got '{value}'")]
    InvalidIncome { value: String },

    #[error("net worth must not be negative, got '{value}'")]
    InvalidNetWorth { value: String },

    #[error("risk tolerance must be a number between 1 and 10, got '{value}'")]
    InvalidRiskTolerance { value: String },

    #[error("time horizon must be a whole number of years between 1 and 50, got '{value}'")]
    InvalidTimeHorizon { value: String },
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum InvestmentGoal {
    Retirement,
    CollegeFund,
    HomePurchase,
    WealthBuilding,
    TaxOptimization,
    IncomeGeneration,
}

impl InvestmentGoal {
    pub const ALL: [InvestmentGoal; 6] = [
        InvestmentGoal::Retirement,
        InvestmentGoal::CollegeFund,
        InvestmentGoal::HomePurchase,
        InvestmentGoal::WealthBuilding,
        InvestmentGoal::TaxOptimization,
        InvestmentGoal::IncomeGeneration,
    ];

    pub fn label(self) -> &'static str {
        match self {
            InvestmentGoal::Retirement       => "Retirement",
            InvestmentGoal::CollegeFund      => "College Fund",
            InvestmentGoal::HomePurchase     => "Home Purchase",
            InvestmentGoal::WealthBuilding   => "Wealth Building",
            InvestmentGoal::TaxOptimization  => "Tax Optimization",
            InvestmentGoal::IncomeGeneration => "Income Generation",
        }
    }
}

impl fmt::Display for InvestmentGoal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Form fields exactly as typed. Nothing here is trusted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct OnboardingForm {
    pub name:             String,
    pub age:              String,
    pub income:           String,
    pub net_worth:        String,
    pub risk_tolerance:   String,
    pub investment_goals: Vec<InvestmentGoal>,
    pub time_horizon:     String,
}

impl Default for OnboardingForm {
    fn default() -> Self {
        Self::new(&AdvisorConfig::default())
    }
}

/// A validated onboarding: the record to insert plus the extra form data.
#[derive(Debug, Clone, PartialEq)]
pub struct Onboarding {
    pub client:  NewClient,
    pub profile: ClientProfile,
}

impl OnboardingForm {
    /// Blank form with the configured pre-filled values.
    pub fn new(config: &AdvisorConfig) -> Self {
        Self {
            name:             String::new(),
            age:              String::new(),
            income:           String::new(),
            net_worth:        String::new(),
            risk_tolerance:   format!("{}", config.default_risk_tolerance),
            investment_goals: Vec::new(),
            time_horizon:     config.default_time_horizon.to_string(),
        }
    }

    /// Apply the fields present in `raw` on top of this form. Fields the
    /// caller left out keep their current (pre-filled) values.
    pub fn overlay(self, raw: serde_json::Value) -> serde_json::Result<Self> {
        let serde_json::Value::Object(fields) = raw else {
            return Err(serde::de::Error::custom("onboarding form must be a JSON object"));
        };
        let mut merged = serde_json::to_value(self)?;
        if let serde_json::Value::Object(base) = &mut merged {
            base.extend(fields);
        }
        serde_json::from_value(merged)
    }

    /// Add the goal if absent, remove it if present. Selection order is kept.
    pub fn toggle_goal(&mut self, goal: InvestmentGoal) {
        if let Some(pos) = self.investment_goals.iter().position(|g| *g == goal) {
            self.investment_goals.remove(pos);
        } else {
            self.investment_goals.push(goal);
        }
    }

    pub fn validate(&self, config: &AdvisorConfig) -> Result<Onboarding, OnboardingError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(OnboardingError::MissingName);
        }

        let age = self
            .age
            .trim()
            .parse::<u32>()
            .ok()
            .filter(|a| (MIN_AGE..=MAX_AGE).contains(a))
            .ok_or_else(|| OnboardingError::InvalidAge { value: self.age.clone() })?;

        let income = parse_number(&self.income)
            .filter(|v| *v >= 0.0)
            .ok_or_else(|| OnboardingError::InvalidIncome { value: self.income.clone() })?;

        let risk_score = parse_number(&self.risk_tolerance)
            .filter(|v| (MIN_RISK_SCORE..=MAX_RISK_SCORE).contains(v))
            .ok_or_else(|| OnboardingError::InvalidRiskTolerance {
                value: self.risk_tolerance.clone(),
            })?;

        let time_horizon_years = self
            .time_horizon
            .trim()
            .parse::<u32>()
            .ok()
            .filter(|y| (MIN_TIME_HORIZON..=MAX_TIME_HORIZON).contains(y))
            .ok_or_else(|| OnboardingError::InvalidTimeHorizon {
                value: self.time_horizon.clone(),
            })?;

        let net_worth = self.net_worth_or_default(config)?;

        Ok(Onboarding {
            client: NewClient {
                name: name.to_string(),
                age,
                risk_score,
                investment_total: net_worth,
                goal_progress: config.new_client_goal_progress,
            },
            profile: ClientProfile {
                income,
                net_worth,
                investment_goals: self.investment_goals.clone(),
                time_horizon_years,
            },
        })
    }

    /// Blank, unparsable or zero net worth falls back to the configured
    /// default investment total. Fractions are truncated.
    fn net_worth_or_default(&self, config: &AdvisorConfig) -> Result<Money, OnboardingError> {
        match parse_number(&self.net_worth) {
            Some(v) if v < 0.0 => Err(OnboardingError::InvalidNetWorth {
                value: self.net_worth.clone(),
            }),
            Some(v) if v.trunc() >= 1.0 => Ok(v.trunc() as Money),
            _ => {
                log::debug!(
                    "onboarding: net worth '{}' not usable, defaulting to {}",
                    self.net_worth,
                    config.default_investment_total
                );
                Ok(config.default_investment_total)
            }
        }
    }
}

fn parse_number(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}
