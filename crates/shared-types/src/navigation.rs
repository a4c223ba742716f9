//! Role-gated navigation.
//!
//! The navigation table is the single place that decides which modules a
//! role may see; the capability table beside it decides which in-module
//! actions a role may take. Views ask [`NavigationGate`] instead of
//! comparing role strings.

use crate::models::{Role, RoleSet};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;

/// A dashboard module, independently rendered.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum ModuleId {
    Dashboard,
    Attendance,
    Leave,
    Incidents,
    GuardTour,
    Payroll,
    OccurrenceBook,
    Checklist,
    Compliance,
    Clients,
    Reports,
    Settings,
}

/// Header title for an unrecognised module id.
pub const FALLBACK_TITLE: &str = "Security Management System";

impl ModuleId {
    /// Identifier used by the navigation surface.
    pub fn as_str(&self) -> &'static str {
        match self {
            ModuleId::Dashboard => "dashboard",
            ModuleId::Attendance => "attendance",
            ModuleId::Leave => "leave",
            ModuleId::Incidents => "incidents",
            ModuleId::GuardTour => "guardtour",
            ModuleId::Payroll => "payroll",
            ModuleId::OccurrenceBook => "eob",
            ModuleId::Checklist => "checklist",
            ModuleId::Compliance => "compliance",
            ModuleId::Clients => "clients",
            ModuleId::Reports => "reports",
            ModuleId::Settings => "settings",
        }
    }

    /// Parse a module identifier. Exact match only.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "dashboard" => Some(ModuleId::Dashboard),
            "attendance" => Some(ModuleId::Attendance),
            "leave" => Some(ModuleId::Leave),
            "incidents" => Some(ModuleId::Incidents),
            "guardtour" => Some(ModuleId::GuardTour),
            "payroll" => Some(ModuleId::Payroll),
            "eob" => Some(ModuleId::OccurrenceBook),
            "checklist" => Some(ModuleId::Checklist),
            "compliance" => Some(ModuleId::Compliance),
            "clients" => Some(ModuleId::Clients),
            "reports" => Some(ModuleId::Reports),
            "settings" => Some(ModuleId::Settings),
            _ => None,
        }
    }

    /// Page title shown in the header.
    pub fn title(&self) -> &'static str {
        match self {
            ModuleId::Dashboard => "Dashboard",
            ModuleId::Attendance => "Employee Attendance",
            ModuleId::Leave => "Leave Management",
            ModuleId::Incidents => "Incident Reporting",
            ModuleId::GuardTour => "Guard Tour System",
            ModuleId::Payroll => "Payroll Management",
            ModuleId::OccurrenceBook => "E-Occurrence Book",
            ModuleId::Checklist => "Supervisory Checklist",
            ModuleId::Compliance => "MOM Compliance",
            ModuleId::Clients => "Client Management",
            ModuleId::Reports => "Reports & Analytics",
            ModuleId::Settings => "System Settings",
        }
    }
}

/// Header title for a raw module identifier.
pub fn module_title(id: &str) -> &'static str {
    ModuleId::parse(id).map(|m| m.title()).unwrap_or(FALLBACK_TITLE)
}

/// A statically configured menu entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationItem {
    pub id: ModuleId,
    pub label: &'static str,
    pub allowed_roles: RoleSet,
}

impl NavigationItem {
    /// Label shortened to its first word, for narrow layouts.
    pub fn short_label(&self) -> &'static str {
        self.label.split(' ').next().unwrap_or(self.label)
    }
}

const ALL_STAFF: RoleSet = RoleSet::of(&[
    Role::Guard,
    Role::Supervisor,
    Role::Hr,
    Role::Admin,
    Role::Management,
]);
const FIELD_STAFF: RoleSet = RoleSet::of(&[
    Role::Guard,
    Role::Supervisor,
    Role::Admin,
    Role::Management,
]);
const OFFICE_STAFF: RoleSet = RoleSet::of(&[Role::Hr, Role::Admin, Role::Management]);
const OVERSIGHT: RoleSet = RoleSet::of(&[Role::Supervisor, Role::Admin, Role::Management]);
const LEADERSHIP: RoleSet = RoleSet::of(&[Role::Admin, Role::Management]);

/// Module shown at startup and whenever a selection is not permitted.
pub const DEFAULT_MODULE: ModuleId = ModuleId::Dashboard;

/// The navigation table, in on-screen order.
pub static NAVIGATION: &[NavigationItem] = &[
    NavigationItem { id: ModuleId::Dashboard, label: "Dashboard", allowed_roles: RoleSet::ALL },
    NavigationItem { id: ModuleId::Attendance, label: "Attendance", allowed_roles: ALL_STAFF },
    NavigationItem { id: ModuleId::Leave, label: "Leave Management", allowed_roles: ALL_STAFF },
    NavigationItem { id: ModuleId::Incidents, label: "Incident Reports", allowed_roles: FIELD_STAFF },
    NavigationItem { id: ModuleId::GuardTour, label: "Guard Tours", allowed_roles: FIELD_STAFF },
    NavigationItem { id: ModuleId::Payroll, label: "Payroll", allowed_roles: OFFICE_STAFF },
    NavigationItem { id: ModuleId::OccurrenceBook, label: "E-Occurrence Book", allowed_roles: FIELD_STAFF },
    NavigationItem { id: ModuleId::Checklist, label: "Supervisory Checklist", allowed_roles: OVERSIGHT },
    NavigationItem { id: ModuleId::Compliance, label: "MOM Compliance", allowed_roles: OFFICE_STAFF },
    NavigationItem { id: ModuleId::Clients, label: "Client Management", allowed_roles: LEADERSHIP },
    NavigationItem { id: ModuleId::Reports, label: "Reports & Analytics", allowed_roles: OVERSIGHT },
    NavigationItem { id: ModuleId::Settings, label: "Settings", allowed_roles: LEADERSHIP },
];

/// An action inside a module that only some roles may take.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Capability {
    /// Clock in and out of a shift.
    ClockInOut,
    /// See the live attendance board across sites.
    ViewLiveAttendance,
    ApproveLeave,
    ManageTourRoutes,
    /// Approve pending occurrence-book entries.
    ReviewOccurrences,
    ProcessPayroll,
    /// Patrol-oriented task list on the dashboard.
    PatrolTasks,
}

/// A capability and the roles granted it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CapabilityGrant {
    pub capability: Capability,
    pub allowed_roles: RoleSet,
}

const SUPERVISION: RoleSet = RoleSet::of(&[Role::Supervisor, Role::Admin]);
const GUARD_ONLY: RoleSet = RoleSet::of(&[Role::Guard]);

pub static CAPABILITIES: &[CapabilityGrant] = &[
    CapabilityGrant { capability: Capability::ClockInOut, allowed_roles: GUARD_ONLY },
    CapabilityGrant { capability: Capability::ViewLiveAttendance, allowed_roles: OVERSIGHT },
    CapabilityGrant { capability: Capability::ApproveLeave, allowed_roles: SUPERVISION },
    CapabilityGrant { capability: Capability::ManageTourRoutes, allowed_roles: SUPERVISION },
    CapabilityGrant { capability: Capability::ReviewOccurrences, allowed_roles: SUPERVISION },
    CapabilityGrant {
        capability: Capability::ProcessPayroll,
        allowed_roles: RoleSet::of(&[Role::Hr, Role::Admin]),
    },
    CapabilityGrant { capability: Capability::PatrolTasks, allowed_roles: GUARD_ONLY },
];

/// Violations of the navigation table's configuration invariants.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum NavigationConfigError {
    #[error("navigation item `{0}` allows no roles")]
    NoAllowedRoles(&'static str),
    #[error("navigation item `{0}` is listed more than once")]
    DuplicateItem(&'static str),
    #[error("default module `{0}` is not in the navigation table")]
    MissingDefault(&'static str),
    #[error("default module `{module}` is hidden from role `{role}`")]
    DefaultNotUniversal { module: &'static str, role: Role },
}

/// The menu for a role together with the module to render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationView {
    pub menu: Vec<&'static NavigationItem>,
    pub resolved: ModuleId,
}

impl NavigationView {
    pub fn contains(&self, module: ModuleId) -> bool {
        self.menu.iter().any(|item| item.id == module)
    }
}

/// Stateless decision point for menu visibility, module resolution and
/// in-module capabilities.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationGate {
    items: &'static [NavigationItem],
    capabilities: &'static [CapabilityGrant],
    default_module: ModuleId,
}

impl Default for NavigationGate {
    fn default() -> Self {
        Self::standard()
    }
}

impl NavigationGate {
    pub const fn new(
        items: &'static [NavigationItem],
        capabilities: &'static [CapabilityGrant],
        default_module: ModuleId,
    ) -> Self {
        Self {
            items,
            capabilities,
            default_module,
        }
    }

    /// The agency's navigation and capability tables.
    pub fn standard() -> Self {
        Self::new(NAVIGATION, CAPABILITIES, DEFAULT_MODULE)
    }

    /// Check the table invariants: every item allows at least one role,
    /// ids are unique, and the default module is visible to every role.
    pub fn validate(&self) -> Result<(), NavigationConfigError> {
        let mut seen = HashSet::new();
        for item in self.items {
            if item.allowed_roles.is_empty() {
                return Err(NavigationConfigError::NoAllowedRoles(item.id.as_str()));
            }
            if !seen.insert(item.id) {
                return Err(NavigationConfigError::DuplicateItem(item.id.as_str()));
            }
        }
        let default = self.default_module;
        let item = self
            .find(default)
            .ok_or(NavigationConfigError::MissingDefault(default.as_str()))?;
        if let Some(role) = Role::ALL
            .into_iter()
            .find(|r| !item.allowed_roles.contains(*r))
        {
            return Err(NavigationConfigError::DefaultNotUniversal {
                module: default.as_str(),
                role,
            });
        }
        Ok(())
    }

    fn find(&self, module: ModuleId) -> Option<&'static NavigationItem> {
        self.items.iter().find(|item| item.id == module)
    }

    /// Menu entries visible to `role`, in configured order.
    pub fn visible_menu(&self, role: Role) -> Vec<&'static NavigationItem> {
        self.items
            .iter()
            .filter(|item| item.allowed_roles.contains(role))
            .collect()
    }

    pub fn can_access(&self, role: Role, module: ModuleId) -> bool {
        self.find(module)
            .map(|item| item.allowed_roles.contains(role))
            .unwrap_or(false)
    }

    /// Module to render for a requested id. Absent, unknown and forbidden
    /// requests all resolve to the default module.
    pub fn resolve(&self, role: Role, requested: Option<&str>) -> ModuleId {
        requested
            .and_then(ModuleId::parse)
            .filter(|module| self.can_access(role, *module))
            .unwrap_or(self.default_module)
    }

    /// Menu and resolved module in one call.
    pub fn navigate(&self, role: Role, requested: Option<&str>) -> NavigationView {
        NavigationView {
            menu: self.visible_menu(role),
            resolved: self.resolve(role, requested),
        }
    }

    /// Whether `role` may take an in-module action. Unlisted capabilities
    /// are denied.
    pub fn allows(&self, role: Role, capability: Capability) -> bool {
        self.capabilities
            .iter()
            .find(|grant| grant.capability == capability)
            .map(|grant| grant.allowed_roles.contains(role))
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn menu_ids(role: Role) -> Vec<&'static str> {
        NavigationGate::standard()
            .visible_menu(role)
            .iter()
            .map(|item| item.id.as_str())
            .collect()
    }

    #[test]
    fn standard_table_is_valid() {
        assert_eq!(NavigationGate::standard().validate(), Ok(()));
    }

    #[test]
    fn module_id_roundtrip() {
        for item in NAVIGATION {
            assert_eq!(ModuleId::parse(item.id.as_str()), Some(item.id));
        }
        assert_eq!(ModuleId::parse("Dashboard"), None);
        assert_eq!(ModuleId::parse("guard-tour"), None);
    }

    #[test]
    fn guard_menu() {
        assert_eq!(
            menu_ids(Role::Guard),
            vec!["dashboard", "attendance", "leave", "incidents", "guardtour", "eob"]
        );
    }

    #[test]
    fn client_sees_only_dashboard() {
        assert_eq!(menu_ids(Role::Client), vec!["dashboard"]);
    }

    #[test]
    fn hr_menu() {
        assert_eq!(
            menu_ids(Role::Hr),
            vec!["dashboard", "attendance", "leave", "payroll", "compliance"]
        );
    }

    #[test]
    fn management_sees_everything() {
        assert_eq!(menu_ids(Role::Management).len(), NAVIGATION.len());
        assert_eq!(menu_ids(Role::Admin).len(), NAVIGATION.len());
    }

    #[test]
    fn resolve_absent_is_default() {
        let gate = NavigationGate::standard();
        for role in Role::ALL {
            assert_eq!(gate.resolve(role, None), ModuleId::Dashboard);
        }
    }

    #[test]
    fn resolve_permitted_module() {
        let gate = NavigationGate::standard();
        assert_eq!(gate.resolve(Role::Admin, Some("clients")), ModuleId::Clients);
        assert_eq!(gate.resolve(Role::Hr, Some("payroll")), ModuleId::Payroll);
    }

    #[test]
    fn resolve_forbidden_module_falls_back() {
        let gate = NavigationGate::standard();
        assert_eq!(gate.resolve(Role::Guard, Some("clients")), ModuleId::Dashboard);
        assert_eq!(gate.resolve(Role::Client, Some("payroll")), ModuleId::Dashboard);
    }

    #[test]
    fn resolve_unknown_module_falls_back() {
        let gate = NavigationGate::standard();
        assert_eq!(gate.resolve(Role::Admin, Some("nope")), ModuleId::Dashboard);
        assert_eq!(gate.resolve(Role::Admin, Some("")), ModuleId::Dashboard);
    }

    #[test]
    fn navigate_pairs_menu_and_resolution() {
        let view = NavigationGate::standard().navigate(Role::Guard, Some("clients"));
        assert_eq!(view.resolved, ModuleId::Dashboard);
        assert!(!view.contains(ModuleId::Clients));
        assert!(view.contains(ModuleId::GuardTour));
    }

    #[test]
    fn capabilities_match_role_table() {
        let gate = NavigationGate::standard();
        assert!(gate.allows(Role::Guard, Capability::ClockInOut));
        assert!(!gate.allows(Role::Supervisor, Capability::ClockInOut));
        assert!(gate.allows(Role::Supervisor, Capability::ApproveLeave));
        assert!(!gate.allows(Role::Management, Capability::ApproveLeave));
        assert!(gate.allows(Role::Management, Capability::ViewLiveAttendance));
        assert!(gate.allows(Role::Hr, Capability::ProcessPayroll));
        assert!(!gate.allows(Role::Management, Capability::ProcessPayroll));
        assert!(!gate.allows(Role::Client, Capability::PatrolTasks));
    }

    #[test]
    fn unlisted_capability_is_denied() {
        let gate = NavigationGate::new(NAVIGATION, &[], DEFAULT_MODULE);
        assert!(!gate.allows(Role::Admin, Capability::ProcessPayroll));
    }

    #[test]
    fn validate_rejects_empty_roles() {
        static ITEMS: &[NavigationItem] = &[
            NavigationItem { id: ModuleId::Dashboard, label: "Dashboard", allowed_roles: RoleSet::ALL },
            NavigationItem { id: ModuleId::Reports, label: "Reports", allowed_roles: RoleSet::EMPTY },
        ];
        let gate = NavigationGate::new(ITEMS, CAPABILITIES, ModuleId::Dashboard);
        assert_eq!(gate.validate(), Err(NavigationConfigError::NoAllowedRoles("reports")));
    }

    #[test]
    fn validate_rejects_duplicates() {
        static ITEMS: &[NavigationItem] = &[
            NavigationItem { id: ModuleId::Dashboard, label: "Dashboard", allowed_roles: RoleSet::ALL },
            NavigationItem { id: ModuleId::Dashboard, label: "Home", allowed_roles: RoleSet::ALL },
        ];
        let gate = NavigationGate::new(ITEMS, CAPABILITIES, ModuleId::Dashboard);
        assert_eq!(gate.validate(), Err(NavigationConfigError::DuplicateItem("dashboard")));
    }

    #[test]
    fn validate_rejects_restricted_default() {
        let gate = NavigationGate::new(NAVIGATION, CAPABILITIES, ModuleId::Payroll);
        assert_eq!(
            gate.validate(),
            Err(NavigationConfigError::DefaultNotUniversal {
                module: "payroll",
                role: Role::Guard,
            })
        );
    }

    #[test]
    fn validate_rejects_missing_default() {
        static ITEMS: &[NavigationItem] = &[NavigationItem {
            id: ModuleId::Reports,
            label: "Reports",
            allowed_roles: RoleSet::ALL,
        }];
        let gate = NavigationGate::new(ITEMS, CAPABILITIES, ModuleId::Dashboard);
        assert_eq!(gate.validate(), Err(NavigationConfigError::MissingDefault("dashboard")));
    }

    #[test]
    fn titles_and_short_labels() {
        assert_eq!(module_title("guardtour"), "Guard Tour System");
        assert_eq!(module_title("unknown"), FALLBACK_TITLE);
        assert_eq!(NAVIGATION[2].short_label(), "Leave");
        assert_eq!(NAVIGATION[0].short_label(), "Dashboard");
    }
}
