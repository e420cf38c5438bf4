//! Append-only client list for one session.
//!
//! Ids are `count + 1` at insert time. There is no update or removal,
//! so ids are strictly increasing and never reused.

use crate::{
    error::AdvisorResult,
    onboarding::{InvestmentGoal, Onboarding},
    store::AdvisorStore,
    types::{ClientId, Money, RiskScore, SessionId},
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ClientRecord {
    pub id:               ClientId,
    pub name:             String,
    pub age:              u32,
    pub risk_score:       RiskScore,
    pub investment_total: Money,
    pub goal_progress:    u32,
}

/// A client that has not been assigned an id yet.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewClient {
    pub name:             String,
    pub age:              u32,
    pub risk_score:       RiskScore,
    pub investment_total: Money,
    pub goal_progress:    u32,
}

impl NewClient {
    fn with_id(self, id: ClientId) -> ClientRecord {
        ClientRecord {
            id,
            name: self.name,
            age: self.age,
            risk_score: self.risk_score,
            investment_total: self.investment_total,
            goal_progress: self.goal_progress,
        }
    }
}

/// Onboarding answers that are not part of the client record itself.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ClientProfile {
    pub income:             f64,
    pub net_worth:          Money,
    pub investment_goals:   Vec<InvestmentGoal>,
    pub time_horizon_years: u32,
}

pub struct ClientStore {
    session_id: SessionId,
    store: AdvisorStore,
}

impl ClientStore {
    /// Wrap a migrated store whose session row already exists.
    pub fn new(session_id: SessionId, store: AdvisorStore) -> Self {
        Self { session_id, store }
    }

    /// The underlying store, for the event log.
    pub fn store(&self) -> &AdvisorStore {
        &self.store
    }

    /// All clients, seeded ones first, in insertion order.
    pub fn list(&self) -> AdvisorResult<Vec<ClientRecord>> {
        self.store.clients(&self.session_id)
    }

    pub fn count(&self) -> AdvisorResult<u32> {
        self.store.client_count(&self.session_id)
    }

    /// Append a client, assigning `id = count + 1`.
    pub fn add(&self, client: NewClient) -> AdvisorResult<ClientRecord> {
        let id = self.count()? + 1;
        let record = client.with_id(id);
        self.store.insert_client(&self.session_id, &record)?;
        log::debug!("client {id} added: {}", record.name);
        Ok(record)
    }

    /// Append an onboarded client together with its profile. If either
    /// row fails, neither is stored.
    pub fn add_onboarded(&self, onboarding: Onboarding) -> AdvisorResult<ClientRecord> {
        let id = self.count()? + 1;
        let record = onboarding.client.with_id(id);
        self.store
            .insert_onboarded_client(&self.session_id, &record, &onboarding.profile)?;
        log::debug!("client {id} onboarded: {}", record.name);
        Ok(record)
    }

    pub fn get(&self, id: ClientId) -> AdvisorResult<Option<ClientRecord>> {
        self.store.get_client(&self.session_id, id)
    }

    /// Onboarding profile; seeded clients have none.
    pub fn profile(&self, id: ClientId) -> AdvisorResult<Option<ClientProfile>> {
        self.store.get_client_profile(&self.session_id, id)
    }
}
