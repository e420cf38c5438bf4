//! Shared primitive types used across the desk.

/// Client identifier. Assigned as `count + 1` on insert, never reused.
pub type ClientId = u32;

/// The canonical session identifier.
pub type SessionId = String;

/// A risk tolerance score. Valid client records keep it within [1, 10].
pub type RiskScore = f64;

/// Whole currency units.
pub type Money = u64;

pub const MIN_RISK_SCORE: RiskScore = 1.0;
pub const MAX_RISK_SCORE: RiskScore = 10.0;
