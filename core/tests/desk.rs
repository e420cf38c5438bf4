//! Selection, deferred delivery and the session event log.

use advisor_core::{
    config::AdvisorConfig,
    desk::AdvisorDesk,
    error::AdvisorError,
    event::DeskEvent,
    projection::Level,
    recommendation_catalog::RecommendationBand,
    risk_classifier::RiskCategory,
    store::AdvisorStore,
};
use std::time::{Duration, Instant};

const DELAY: Duration = Duration::from_millis(1_500);

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn selection_waits_for_the_delay() {
    init_logging();
    let mut desk = AdvisorDesk::build_test("delay-test".into()).unwrap();
    let t0 = Instant::now();

    let sarah = desk.select_client(1, t0).unwrap();
    assert_eq!(sarah.name, "Sarah Johnson");
    assert!(desk.is_generating());
    assert!(desk.recommendation().is_none());

    let early = desk.poll(t0 + DELAY - Duration::from_millis(1)).unwrap();
    assert!(early.is_empty(), "nothing should fire before the delay");
    assert!(desk.is_generating());

    let delivered = desk.poll(t0 + DELAY).unwrap();
    assert_eq!(delivered.len(), 1);
    assert!(!desk.is_generating());

    let rec = desk.recommendation().expect("recommendation delivered");
    assert_eq!(rec.risk_profile.score, 7.2);
    assert_eq!(rec.risk_profile.category, RiskCategory::ModeratelyAggressive);
    assert_eq!(rec.allocation.total(), 123);
    assert_eq!(rec.band, RecommendationBand::Aggressive);
}

#[test]
fn each_job_fires_exactly_once() {
    let mut desk = AdvisorDesk::build_test("fire-once-test".into()).unwrap();
    let t0 = Instant::now();
    desk.select_client(4, t0).unwrap();

    assert_eq!(desk.poll(t0 + DELAY).unwrap().len(), 1);
    assert!(desk.poll(t0 + DELAY * 2).unwrap().is_empty());
    assert!(desk.poll(t0 + DELAY * 10).unwrap().is_empty());
}

#[test]
fn rapid_reselection_delivers_both_and_last_wins() {
    let mut desk = AdvisorDesk::build_test("reselect-test".into()).unwrap();
    let t0 = Instant::now();

    desk.select_client(1, t0).unwrap(); // 7.2, aggressive table
    desk.select_client(4, t0 + Duration::from_millis(200)).unwrap(); // 3.2, conservative

    let delivered = desk.poll(t0 + DELAY * 2).unwrap();
    let scores: Vec<_> = delivered.iter().map(|r| r.risk_profile.score).collect();
    assert_eq!(scores, vec![7.2, 3.2], "jobs fire in ready order");

    let visible = desk.recommendation().unwrap();
    assert_eq!(visible.band, RecommendationBand::Conservative);
    assert_eq!(desk.selected().map(|c| c.id), Some(4));
}

#[test]
fn first_job_clears_generating_while_second_is_pending() {
    let mut desk = AdvisorDesk::build_test("generating-flag-test".into()).unwrap();
    let t0 = Instant::now();

    desk.select_client(2, t0).unwrap();
    desk.select_client(3, t0 + Duration::from_secs(1)).unwrap();

    desk.poll(t0 + DELAY).unwrap();
    assert!(!desk.is_generating());
    assert_eq!(desk.recommendation().unwrap().risk_profile.score, 4.3);
    assert_eq!(desk.next_ready_at(), Some(t0 + Duration::from_secs(1) + DELAY));

    desk.poll(t0 + Duration::from_secs(1) + DELAY).unwrap();
    assert_eq!(desk.recommendation().unwrap().risk_profile.score, 8.1);
}

#[test]
fn unknown_client_is_an_error_and_changes_nothing() {
    let mut desk = AdvisorDesk::build_test("unknown-client-test".into()).unwrap();
    let err = desk.select_client(42, Instant::now()).unwrap_err();

    assert!(matches!(err, AdvisorError::ClientNotFound { id: 42 }));
    assert!(desk.selected().is_none());
    assert!(!desk.is_generating());
    assert_eq!(desk.next_ready_at(), None);
}

#[test]
fn selected_detail_is_available_before_delivery() {
    let mut desk = AdvisorDesk::build_test("detail-test".into()).unwrap();
    assert!(desk.selected_detail().unwrap().is_none());

    desk.select_client(5, Instant::now()).unwrap();
    let detail = desk.selected_detail().unwrap().expect("detail");

    assert_eq!(detail.client.name, "Aisha Patel");
    assert_eq!(detail.category, RiskCategory::Aggressive);
    assert_eq!(detail.analysis.volatility_tolerance, Level::VeryHigh);
    assert!((detail.projection.one_year - 9.5).abs() < 1e-9);
    assert!(detail.profile.is_none());
}

#[test]
fn clear_selection_keeps_pending_jobs() {
    let mut desk = AdvisorDesk::build_test("clear-test".into()).unwrap();
    let t0 = Instant::now();

    desk.select_client(1, t0).unwrap();
    desk.clear_selection().unwrap();
    assert!(desk.selected().is_none());

    assert_eq!(desk.poll(t0 + DELAY).unwrap().len(), 1);
    assert!(desk.recommendation().is_some());
}

#[test]
fn configured_delay_is_honoured() {
    let config = AdvisorConfig { recommendation_delay_ms: 0, ..AdvisorConfig::default() };
    let mut desk = AdvisorDesk::build(
        "zero-delay-test".into(),
        config,
        AdvisorStore::in_memory().unwrap(),
    )
    .unwrap();
    let t0 = Instant::now();

    desk.select_client(3, t0).unwrap();
    assert_eq!(desk.poll(t0).unwrap().len(), 1);
}

#[test]
fn seeding_can_be_disabled() {
    let config = AdvisorConfig { seed_sample_clients: false, ..AdvisorConfig::default() };
    let desk =
        AdvisorDesk::build("no-seed-test".into(), config, AdvisorStore::in_memory().unwrap())
            .unwrap();
    assert!(desk.clients.list().unwrap().is_empty());
}

#[test]
fn dashboard_carries_clients_and_sample_data() {
    let desk = AdvisorDesk::build_test("dashboard-test".into()).unwrap();
    let dash = desk.dashboard().unwrap();

    assert_eq!(dash.clients.len(), 5);
    assert_eq!(dash.performance.len(), 6);
    assert_eq!(dash.performance[2].month, "Mar");
    assert_eq!(dash.performance[2].portfolio, -1.2);
    assert_eq!(dash.model_portfolio.len(), 5);
    assert_eq!(dash.recent_recommendations[0].client, "Sarah Johnson");
}

#[test]
fn event_log_records_the_session_in_order() {
    init_logging();
    let mut desk = AdvisorDesk::build_test("event-log-test".into()).unwrap();
    let t0 = Instant::now();
    desk.select_client(2, t0).unwrap();
    desk.poll(t0 + DELAY).unwrap();

    let events: Vec<DeskEvent> = desk
        .events()
        .unwrap()
        .iter()
        .map(|e| e.decode().expect("payload decodes"))
        .collect();

    assert_eq!(
        events[0],
        DeskEvent::SessionStarted { session_id: "event-log-test".into() }
    );
    let seeded = events
        .iter()
        .filter(|e| matches!(e, DeskEvent::ClientSeeded { .. }))
        .count();
    assert_eq!(seeded, 5);

    let tail = &events[events.len() - 3..];
    assert_eq!(tail[0], DeskEvent::ClientSelected { client_id: 2 });
    assert_eq!(
        tail[1],
        DeskEvent::RecommendationScheduled { client_id: 2, risk_score: 4.3, delay_ms: 1_500 }
    );
    assert_eq!(
        tail[2],
        DeskEvent::RecommendationDelivered {
            client_id: 2,
            category: RiskCategory::Moderate,
            band: RecommendationBand::Moderate,
        }
    );
}

#[test]
fn event_types_match_payloads() {
    let mut desk = AdvisorDesk::build_test("event-type-test".into()).unwrap();
    desk.select_client(1, Instant::now()).unwrap();

    for entry in desk.events().unwrap() {
        let event = entry.decode().unwrap();
        assert_eq!(entry.event_type, event.type_name());
    }
    assert_eq!(
        desk.clients
            .store()
            .event_count("event-type-test", "client_seeded")
            .unwrap(),
        5
    );
}
