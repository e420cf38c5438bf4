//! Desk events. Every state change the desk makes is appended to the
//! session's event log as one of these.

use crate::{
    recommendation_catalog::RecommendationBand,
    risk_classifier::RiskCategory,
    types::{ClientId, RiskScore, SessionId},
};
use serde::{Deserialize, Serialize};

/// Variants are append-only; never removed or reordered.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DeskEvent {
    SessionStarted {
        session_id: SessionId,
    },
    ClientSeeded {
        client_id: ClientId,
        name: String,
    },
    ClientOnboarded {
        client_id: ClientId,
        name: String,
        risk_score: RiskScore,
    },
    ClientSelected {
        client_id: ClientId,
    },
    SelectionCleared,
    RecommendationScheduled {
        client_id: ClientId,
        risk_score: RiskScore,
        delay_ms: u64,
    },
    RecommendationDelivered {
        client_id: ClientId,
        category: RiskCategory,
        band: RecommendationBand,
    },
}

impl DeskEvent {
    /// Stable name for the event_type column.
    pub fn type_name(&self) -> &'static str {
        match self {
            DeskEvent::SessionStarted { .. }          => "session_started",
            DeskEvent::ClientSeeded { .. }            => "client_seeded",
            DeskEvent::ClientOnboarded { .. }         => "client_onboarded",
            DeskEvent::ClientSelected { .. }          => "client_selected",
            DeskEvent::SelectionCleared               => "selection_cleared",
            DeskEvent::RecommendationScheduled { .. } => "recommendation_scheduled",
            DeskEvent::RecommendationDelivered { .. } => "recommendation_delivered",
        }
    }
}

/// A row of the persisted event log.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventLogEntry {
    pub id:         Option<i64>,
    pub session_id: SessionId,
    pub event_type: String,
    pub payload:    String, // JSON-serialized DeskEvent
    pub created_at: String,
}

impl EventLogEntry {
    pub fn decode(&self) -> serde_json::Result<DeskEvent> {
        serde_json::from_str(&self.payload)
    }
}
