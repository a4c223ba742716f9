use crate::common;
use pretty_assertions::assert_eq;
use shared_types::{Capability, ModuleId, Role, CAPABILITIES, NAVIGATION};

#[test]
fn test_every_role_sees_dashboard_first() {
    for role in Role::ALL {
        let menu = common::menu_ids(role);
        assert_eq!(menu.first().copied(), Some("dashboard"), "{role}");
    }
}

#[test]
fn test_menus_per_role() {
    assert_eq!(
        common::menu_ids(Role::Guard),
        vec!["dashboard", "attendance", "leave", "incidents", "guardtour", "eob"]
    );
    assert_eq!(common::menu_ids(Role::Client), vec!["dashboard"]);
    assert_eq!(common::menu_ids(Role::Management).len(), NAVIGATION.len());
    assert_eq!(common::menu_ids(Role::Admin).len(), NAVIGATION.len());
}

#[test]
fn test_resolved_module_is_always_in_the_menu() {
    let gate = common::gate();
    let requests = [
        None,
        Some(""),
        Some("dashboard"),
        Some("clients"),
        Some("payroll"),
        Some("settings"),
        Some("no-such-module"),
        Some("DASHBOARD"),
    ];
    for role in Role::ALL {
        for requested in requests {
            let view = gate.navigate(role, requested);
            assert!(
                view.contains(view.resolved),
                "{role} -> {requested:?} resolved to hidden {}",
                view.resolved.as_str()
            );
        }
    }
}

#[test]
fn test_forbidden_and_unknown_requests_fall_back() {
    let gate = common::gate();
    assert_eq!(gate.resolve(Role::Guard, Some("settings")), ModuleId::Dashboard);
    assert_eq!(gate.resolve(Role::Hr, Some("guardtour")), ModuleId::Dashboard);
    assert_eq!(gate.resolve(Role::Admin, Some("bogus")), ModuleId::Dashboard);
    assert_eq!(gate.resolve(Role::Hr, Some("compliance")), ModuleId::Compliance);
}

#[test]
fn test_capabilities_only_granted_to_roles_that_see_the_module() {
    let gate = common::gate();
    let home = |capability: Capability| match capability {
        Capability::ClockInOut | Capability::ViewLiveAttendance => ModuleId::Attendance,
        Capability::ApproveLeave => ModuleId::Leave,
        Capability::ManageTourRoutes => ModuleId::GuardTour,
        Capability::ReviewOccurrences => ModuleId::OccurrenceBook,
        Capability::ProcessPayroll => ModuleId::Payroll,
        Capability::PatrolTasks => ModuleId::Dashboard,
    };

    for grant in CAPABILITIES {
        for role in Role::ALL {
            if gate.allows(role, grant.capability) {
                assert!(
                    gate.can_access(role, home(grant.capability)),
                    "{role} holds {:?} without its module",
                    grant.capability
                );
            }
        }
    }
}
