//! Seeding, id assignment and ordering of the client list.

use advisor_core::{
    client_store::{ClientProfile, ClientStore, NewClient},
    desk::AdvisorDesk,
    onboarding::{InvestmentGoal, Onboarding},
    store::AdvisorStore,
};

fn new_client(name: &str, risk_score: f64) -> NewClient {
    NewClient {
        name: name.into(),
        age: 40,
        risk_score,
        investment_total: 50_000,
        goal_progress: 10,
    }
}

fn empty_store(session_id: &str) -> ClientStore {
    let store = AdvisorStore::in_memory().expect("in-memory store");
    store.migrate().expect("migration");
    store.insert_session(session_id, "0.1.0-test").expect("insert session");
    ClientStore::new(session_id.into(), store)
}

#[test]
fn seeded_clients_come_first_in_order() {
    let desk = AdvisorDesk::build_test("seed-order-test".into()).unwrap();
    let clients = desk.clients.list().unwrap();

    let names: Vec<_> = clients.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(
        names,
        vec!["Sarah Johnson", "Robert Chen", "Maria Garcia", "James Wilson", "Aisha Patel"]
    );
    let ids: Vec<_> = clients.iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    assert_eq!(clients[3].investment_total, 1_250_000);
    assert_eq!(clients[4].risk_score, 9.0);
}

#[test]
fn add_assigns_count_plus_one() {
    let desk = AdvisorDesk::build_test("add-id-test".into()).unwrap();

    let first = desk.clients.add(new_client("Lena Ortiz", 5.5)).unwrap();
    let second = desk.clients.add(new_client("Tom Becker", 2.0)).unwrap();

    assert_eq!(first.id, 6);
    assert_eq!(second.id, 7);

    let listed = desk.clients.list().unwrap();
    assert_eq!(listed.len(), 7);
    assert_eq!(listed[5], first, "new clients are appended after the seeds");
    assert_eq!(listed[6], second);
}

#[test]
fn ids_start_at_one_on_an_empty_store() {
    let clients = empty_store("empty-store-test");
    assert!(clients.list().unwrap().is_empty());

    let ids: Vec<_> = (0..4)
        .map(|i| clients.add(new_client(&format!("Client {i}"), 5.0)).unwrap().id)
        .collect();
    assert_eq!(ids, vec![1, 2, 3, 4]);
    assert!(ids.windows(2).all(|w| w[0] < w[1]), "ids must be strictly increasing");
}

#[test]
fn get_returns_record_or_none() {
    let desk = AdvisorDesk::build_test("get-test".into()).unwrap();

    let robert = desk.clients.get(2).unwrap().expect("seeded client 2");
    assert_eq!(robert.name, "Robert Chen");
    assert_eq!(robert.age, 58);
    assert_eq!(robert.risk_score, 4.3);

    assert!(desk.clients.get(99).unwrap().is_none());
    assert!(desk.clients.get(0).unwrap().is_none());
}

#[test]
fn sessions_do_not_see_each_other() {
    let a = empty_store("session-a");
    let b = empty_store("session-b");
    a.add(new_client("Only In A", 3.0)).unwrap();

    assert_eq!(a.count().unwrap(), 1);
    assert_eq!(b.count().unwrap(), 0);
}

#[test]
fn seeded_clients_have_no_profile() {
    let desk = AdvisorDesk::build_test("profile-none-test".into()).unwrap();
    assert!(desk.clients.profile(1).unwrap().is_none());
}

fn onboarding(name: &str, income: f64) -> Onboarding {
    Onboarding {
        client: new_client(name, 6.0),
        profile: ClientProfile {
            income,
            net_worth: 80_000,
            investment_goals: vec![InvestmentGoal::Retirement],
            time_horizon_years: 20,
        },
    }
}

#[test]
fn onboarded_client_is_stored_with_its_profile() {
    let clients = empty_store("onboarded-profile-test");
    let record = clients.add_onboarded(onboarding("Ines Duarte", 72_000.0)).unwrap();

    assert_eq!(record.id, 1);
    let profile = clients.profile(record.id).unwrap().expect("profile row");
    assert_eq!(profile.income, 72_000.0);
    assert_eq!(profile.investment_goals, vec![InvestmentGoal::Retirement]);
}

#[test]
fn failed_profile_insert_leaves_no_client_behind() {
    let clients = empty_store("onboarded-rollback-test");
    clients.add(new_client("Already Here", 4.0)).unwrap();

    // SQLite stores NaN as NULL, which the profile's NOT NULL income rejects.
    assert!(clients.add_onboarded(onboarding("Half Written", f64::NAN)).is_err());

    assert_eq!(clients.count().unwrap(), 1);
    assert!(clients.get(2).unwrap().is_none());

    let next = clients.add_onboarded(onboarding("Next In Line", 50_000.0)).unwrap();
    assert_eq!(next.id, 2, "the rolled-back id is handed out again");
}
