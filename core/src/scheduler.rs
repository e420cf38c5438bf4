//! Deferred recommendation delivery.
//!
//! Each selection schedules exactly one job holding the risk score
//! captured at schedule time. A job fires once, on the first poll at or
//! after its ready instant. No cancellation, no retry: if several jobs are
//! outstanding they all fire, in ready order (ties in schedule order).

use crate::types::{ClientId, RiskScore};
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DeferredRecommendation {
    pub client_id:  ClientId,
    pub risk_score: RiskScore,
    pub ready_at:   Instant,
}

#[derive(Debug, Default)]
pub struct RecommendationScheduler {
    pending: Vec<DeferredRecommendation>,
}

impl RecommendationScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule(
        &mut self,
        client_id: ClientId,
        risk_score: RiskScore,
        now: Instant,
        delay: Duration,
    ) -> DeferredRecommendation {
        let job = DeferredRecommendation { client_id, risk_score, ready_at: now + delay };
        self.pending.push(job);
        job
    }

    /// Remove and return every job due at `now`, in firing order.
    pub fn take_due(&mut self, now: Instant) -> Vec<DeferredRecommendation> {
        let (mut due, waiting): (Vec<_>, Vec<_>) =
            self.pending.drain(..).partition(|job| job.ready_at <= now);
        self.pending = waiting;
        // Stable sort keeps schedule order among equal deadlines.
        due.sort_by_key(|job| job.ready_at);
        due
    }

    /// Put jobs taken by `take_due` back ahead of everything else, so the
    /// next poll fires them first and in the same order.
    pub fn requeue(&mut self, jobs: impl IntoIterator<Item = DeferredRecommendation>) {
        self.pending.splice(0..0, jobs);
    }

    /// Earliest outstanding deadline, if any.
    pub fn next_ready_at(&self) -> Option<Instant> {
        self.pending.iter().map(|job| job.ready_at).min()
    }
}
