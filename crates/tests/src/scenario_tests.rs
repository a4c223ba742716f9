use crate::common;
use pretty_assertions::assert_eq;
use shared_types::clients::{filter_clients, ClientStatus};
use shared_types::{module_title, DataProvider, FixtureProvider, ModuleId, Role};

#[tokio::test]
async fn test_admin_opens_client_management() {
    let (store, identity) = common::signed_in("admin@security.sg").await;
    let role = store.session().role().unwrap();
    assert_eq!(role, Role::Admin);

    let view = common::gate().navigate(role, Some("clients"));
    assert_eq!(view.resolved, ModuleId::Clients);
    assert_eq!(module_title(view.resolved.as_str()), "Client Management");
    assert_eq!(identity.display_name, "Admin User");

    let clients = FixtureProvider.clients();
    let active = filter_clients(&clients, "", ClientStatus::parse_filter("active"));
    assert_eq!(active.len(), 2);
}

#[tokio::test]
async fn test_guard_cannot_reach_clients() {
    let (store, _) = common::signed_in("guard@security.sg").await;
    let role = store.session().role().unwrap();

    let view = common::gate().navigate(role, Some("clients"));
    assert_eq!(view.resolved, ModuleId::Dashboard);
    assert!(!view.contains(ModuleId::Clients));
}

#[tokio::test]
async fn test_selection_does_not_outlive_sign_out() {
    let (store, _) = common::signed_in("admin@security.sg").await;
    let gate = common::gate();
    let mut selected = Some("settings".to_string());
    assert_eq!(
        gate.resolve(store.session().role().unwrap(), selected.as_deref()),
        ModuleId::Settings
    );

    store.sign_out().await;
    selected = None;

    store
        .sign_in("guard@security.sg", common::DEMO_PASSWORD)
        .await
        .unwrap();
    let role = store.session().role().unwrap();
    assert_eq!(gate.resolve(role, selected.as_deref()), ModuleId::Dashboard);
}

#[tokio::test]
async fn test_guard_dashboard_lists_patrol_tasks() {
    let (store, _) = common::signed_in("guard@security.sg").await;
    let gate = common::gate();
    let patrol = gate.allows(store.session().role().unwrap(), shared_types::Capability::PatrolTasks);
    assert!(patrol);

    let guard_tasks = FixtureProvider.upcoming_tasks(patrol);
    let office_tasks = FixtureProvider.upcoming_tasks(false);
    assert_ne!(guard_tasks, office_tasks);
}
