//! The advisor desk: one session's clients, selection and recommendations.
//!
//! FLOW:
//!   1. select_client() / onboard() picks a client and schedules a
//!      deferred recommendation with the client's risk score captured.
//!   2. poll(now) delivers every job whose delay has elapsed. The last
//!      delivered recommendation is the visible one.
//!
//! RULES:
//!   - Time only enters through the `now` arguments.
//!   - Derived values are recomputed per delivery, never cached.
//!   - Every state change is recorded in the event log.

use crate::{
    client_store::{ClientProfile, ClientRecord, ClientStore},
    config::AdvisorConfig,
    error::{AdvisorError, AdvisorResult},
    event::{DeskEvent, EventLogEntry},
    onboarding::OnboardingForm,
    projection::{ReturnProjection, RiskAnalysis},
    recommendation::Recommendation,
    risk_classifier::{classify, RiskCategory},
    sample_data::{self, PerformancePoint, PortfolioSlice, RecentRecommendation},
    scheduler::RecommendationScheduler,
    store::AdvisorStore,
    types::{ClientId, SessionId},
};
use serde::Serialize;
use std::time::Instant;

/// Everything the landing dashboard shows.
#[derive(Debug, Clone, Serialize)]
pub struct Dashboard {
    pub clients:                Vec<ClientRecord>,
    pub performance:            &'static [PerformancePoint],
    pub model_portfolio:        &'static [PortfolioSlice],
    pub recent_recommendations: Vec<RecentRecommendation>,
}

/// The selected client with its risk panel, available before the
/// recommendation arrives.
#[derive(Debug, Clone, Serialize)]
pub struct ClientDetail {
    pub client:     ClientRecord,
    pub category:   RiskCategory,
    pub analysis:   RiskAnalysis,
    pub projection: ReturnProjection,
    pub profile:    Option<ClientProfile>,
}

pub struct AdvisorDesk {
    pub session_id: SessionId,
    pub clients:    ClientStore,
    config:         AdvisorConfig,
    scheduler:      RecommendationScheduler,
    selected:       Option<ClientRecord>,
    generating:     bool,
    recommendation: Option<Recommendation>,
}

/// A fresh random session id.
pub fn new_session_id() -> SessionId {
    format!("session-{}", uuid::Uuid::new_v4())
}

impl AdvisorDesk {
    /// Build a ready desk on a fresh store: migrate, open the session and
    /// seed the sample clients (unless disabled in config).
    pub fn build(
        session_id: SessionId,
        config: AdvisorConfig,
        store: AdvisorStore,
    ) -> AdvisorResult<Self> {
        store.migrate()?;
        store.insert_session(&session_id, env!("CARGO_PKG_VERSION"))?;

        let desk = Self {
            clients: ClientStore::new(session_id.clone(), store),
            session_id: session_id.clone(),
            config,
            scheduler: RecommendationScheduler::new(),
            selected: None,
            generating: false,
            recommendation: None,
        };
        desk.record(DeskEvent::SessionStarted { session_id })?;

        if desk.config.seed_sample_clients {
            let mut seeded = 0usize;
            for client in sample_data::sample_clients() {
                let record = desk.clients.add(client)?;
                desk.record(DeskEvent::ClientSeeded {
                    client_id: record.id,
                    name: record.name,
                })?;
                seeded += 1;
            }
            log::info!("session {}: seeded {seeded} sample clients", desk.session_id);
        }
        Ok(desk)
    }

    /// In-memory desk with default config, for tests.
    pub fn build_test(session_id: SessionId) -> AdvisorResult<Self> {
        Self::build(session_id, AdvisorConfig::default(), AdvisorStore::in_memory()?)
    }

    pub fn config(&self) -> &AdvisorConfig {
        &self.config
    }

    /// Decode a form sent over the wire. Omitted fields take this desk's
    /// pre-filled defaults, not the built-in ones.
    pub fn decode_form(&self, raw: serde_json::Value) -> AdvisorResult<OnboardingForm> {
        Ok(self.onboarding_form().overlay(raw)?)
    }

    pub fn dashboard(&self) -> AdvisorResult<Dashboard> {
        Ok(Dashboard {
            clients: self.clients.list()?,
            performance: &sample_data::PERFORMANCE,
            model_portfolio: &sample_data::MODEL_PORTFOLIO,
            recent_recommendations: sample_data::recent_recommendations(),
        })
    }

    /// Blank onboarding form with this desk's pre-filled defaults.
    pub fn onboarding_form(&self) -> OnboardingForm {
        OnboardingForm::new(&self.config)
    }

    /// Select an existing client and schedule its recommendation.
    pub fn select_client(&mut self, id: ClientId, now: Instant) -> AdvisorResult<ClientRecord> {
        let client = self
            .clients
            .get(id)?
            .ok_or(AdvisorError::ClientNotFound { id })?;
        self.record(DeskEvent::ClientSelected { client_id: id })?;
        self.begin_recommendation(&client, now)?;
        self.selected = Some(client.clone());
        Ok(client)
    }

    /// Validate the form, add the client, select it and schedule its
    /// recommendation. Nothing is stored if validation fails.
    pub fn onboard(&mut self, form: &OnboardingForm, now: Instant) -> AdvisorResult<ClientRecord> {
        let onboarding = form.validate(&self.config)?;
        let client = self.clients.add_onboarded(onboarding)?;
        log::info!(
            "session {}: onboarded client {} ({}, risk {:.1})",
            self.session_id,
            client.id,
            client.name,
            client.risk_score
        );
        self.record(DeskEvent::ClientOnboarded {
            client_id: client.id,
            name: client.name.clone(),
            risk_score: client.risk_score,
        })?;
        self.begin_recommendation(&client, now)?;
        self.selected = Some(client.clone());
        Ok(client)
    }

    fn begin_recommendation(&mut self, client: &ClientRecord, now: Instant) -> AdvisorResult<()> {
        let delay = self.config.recommendation_delay();
        self.scheduler.schedule(client.id, client.risk_score, now, delay);
        self.generating = true;
        self.record(DeskEvent::RecommendationScheduled {
            client_id: client.id,
            risk_score: client.risk_score,
            delay_ms: self.config.recommendation_delay_ms,
        })
    }

    /// Deliver every recommendation due at `now`, oldest deadline first.
    /// Returns what was delivered by this call. If recording a delivery
    /// fails, that job and the ones after it go back to the scheduler.
    pub fn poll(&mut self, now: Instant) -> AdvisorResult<Vec<Recommendation>> {
        let mut delivered = Vec::new();
        let mut due = self.scheduler.take_due(now).into_iter();
        while let Some(job) = due.next() {
            let rec = Recommendation::for_score(job.risk_score);
            let recorded = self.record(DeskEvent::RecommendationDelivered {
                client_id: job.client_id,
                category: rec.risk_profile.category,
                band: rec.band,
            });
            if let Err(e) = recorded {
                self.scheduler.requeue(std::iter::once(job).chain(due));
                return Err(e);
            }
            log::debug!(
                "session {}: recommendation for client {} delivered ({})",
                self.session_id,
                job.client_id,
                rec.risk_profile.category
            );
            self.generating = false;
            self.recommendation = Some(rec.clone());
            delivered.push(rec);
        }
        Ok(delivered)
    }

    /// Back to the dashboard. Outstanding jobs still fire.
    pub fn clear_selection(&mut self) -> AdvisorResult<()> {
        if self.selected.take().is_some() {
            self.record(DeskEvent::SelectionCleared)?;
        }
        Ok(())
    }

    pub fn selected(&self) -> Option<&ClientRecord> {
        self.selected.as_ref()
    }

    pub fn selected_detail(&self) -> AdvisorResult<Option<ClientDetail>> {
        let Some(client) = self.selected.clone() else {
            return Ok(None);
        };
        let profile = self.clients.profile(client.id)?;
        Ok(Some(ClientDetail {
            category: classify(client.risk_score),
            analysis: RiskAnalysis::for_score(client.risk_score),
            projection: ReturnProjection::for_score(client.risk_score),
            profile,
            client,
        }))
    }

    pub fn is_generating(&self) -> bool {
        self.generating
    }

    pub fn recommendation(&self) -> Option<&Recommendation> {
        self.recommendation.as_ref()
    }

    /// When the next outstanding recommendation becomes due.
    pub fn next_ready_at(&self) -> Option<Instant> {
        self.scheduler.next_ready_at()
    }

    pub fn events(&self) -> AdvisorResult<Vec<EventLogEntry>> {
        self.clients.store().events_for_session(&self.session_id)
    }

    fn record(&self, event: DeskEvent) -> AdvisorResult<()> {
        let entry = EventLogEntry {
            id:         None,
            session_id: self.session_id.clone(),
            event_type: event.type_name().to_string(),
            payload:    serde_json::to_string(&event)?,
            created_at: chrono::Utc::now().to_rfc3339(),
        };
        self.clients.store().append_event(&entry)
    }
}
