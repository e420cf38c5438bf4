//! Advisor Desk: client records and deterministic portfolio recommendations.
//!
//! The calculation core (`risk_classifier`, `allocation_engine`,
//! `recommendation_catalog`) is pure and total. Everything stateful lives
//! behind `desk::AdvisorDesk`, and only `store` talks to the database.

pub mod allocation_engine;
pub mod client_store;
pub mod config;
pub mod desk;
pub mod error;
pub mod event;
pub mod onboarding;
pub mod projection;
pub mod recommendation;
pub mod recommendation_catalog;
pub mod risk_classifier;
pub mod sample_data;
pub mod scheduler;
pub mod store;
pub mod types;
