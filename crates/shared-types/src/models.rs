use serde::{Deserialize, Serialize};
use std::fmt;

/// Agency user role controlling which modules and actions are available.
///
/// - `Guard`: clocks in, patrols, writes occurrence entries.
/// - `Supervisor`: oversees guards, approves leave and occurrence entries.
/// - `Client`: customer contact; dashboard only.
/// - `Hr`: payroll, leave and licensing.
/// - `Admin`: agency administrator.
/// - `Management`: agency leadership, read access to everything.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Guard,
    Supervisor,
    Client,
    Hr,
    Admin,
    Management,
}

impl Role {
    /// Every role, in a fixed order.
    pub const ALL: [Role; 6] = [
        Role::Guard,
        Role::Supervisor,
        Role::Client,
        Role::Hr,
        Role::Admin,
        Role::Management,
    ];

    /// Lowercase key used in storage and identifiers.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Guard => "guard",
            Role::Supervisor => "supervisor",
            Role::Client => "client",
            Role::Hr => "hr",
            Role::Admin => "admin",
            Role::Management => "management",
        }
    }

    /// Human-readable name for badges and menus.
    pub fn display_name(&self) -> &'static str {
        match self {
            Role::Guard => "Security Guard",
            Role::Supervisor => "Supervisor",
            Role::Client => "Client",
            Role::Hr => "HR",
            Role::Admin => "Admin",
            Role::Management => "Management",
        }
    }

    const fn bit(self) -> u8 {
        1 << (self as u8)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A set of roles, usable in `const` tables.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct RoleSet(u8);

impl RoleSet {
    pub const EMPTY: RoleSet = RoleSet(0);
    pub const ALL: RoleSet = RoleSet::of(&Role::ALL);

    /// Build a set from a slice of roles.
    pub const fn of(roles: &[Role]) -> Self {
        let mut bits = 0u8;
        let mut i = 0;
        while i < roles.len() {
            bits |= roles[i].bit();
            i += 1;
        }
        RoleSet(bits)
    }

    pub const fn contains(&self, role: Role) -> bool {
        self.0 & role.bit() != 0
    }

    pub const fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    /// Members of the set in `Role::ALL` order.
    pub fn iter(&self) -> impl Iterator<Item = Role> + '_ {
        Role::ALL.into_iter().filter(|r| self.contains(*r))
    }
}

impl fmt::Debug for RoleSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

/// The authenticated subject of a session.
///
/// Immutable once created: a session either holds one of these in full or
/// holds nothing. The serialized keys match what older builds stored, so a
/// persisted identity survives upgrades.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Identity {
    pub id: String,
    #[serde(rename = "name")]
    pub display_name: String,
    pub email: String,
    pub role: Role,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub employee_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub site: Option<String>,
}

impl Identity {
    /// Up to two uppercase initials from the display name.
    pub fn initials(&self) -> String {
        self.display_name
            .split_whitespace()
            .filter_map(|w| w.chars().next())
            .take(2)
            .collect::<String>()
            .to_uppercase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Identity {
        Identity {
            id: "1".into(),
            display_name: "Site Supervisor".into(),
            email: "supervisor@security.sg".into(),
            role: Role::Supervisor,
            employee_id: Some("EMP001".into()),
            department: Some("Security Operations".into()),
            site: None,
        }
    }

    #[test]
    fn role_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Role::Management).unwrap(), r#""management""#);
        let parsed: Role = serde_json::from_str(r#""hr""#).unwrap();
        assert_eq!(parsed, Role::Hr);
    }

    #[test]
    fn role_set_membership() {
        let set = RoleSet::of(&[Role::Guard, Role::Admin]);
        assert!(set.contains(Role::Guard));
        assert!(set.contains(Role::Admin));
        assert!(!set.contains(Role::Client));
        assert_eq!(set.len(), 2);
        assert_eq!(set.iter().collect::<Vec<_>>(), vec![Role::Guard, Role::Admin]);
    }

    #[test]
    fn role_set_all_and_empty() {
        assert_eq!(RoleSet::ALL.len(), 6);
        assert!(RoleSet::EMPTY.is_empty());
        assert!(!RoleSet::ALL.is_empty());
        for role in Role::ALL {
            assert!(RoleSet::ALL.contains(role));
            assert!(!RoleSet::EMPTY.contains(role));
        }
    }

    #[test]
    fn identity_uses_stored_key_names() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["name"], "Site Supervisor");
        assert_eq!(json["employeeId"], "EMP001");
        assert_eq!(json["role"], "supervisor");
        assert!(json.get("site").is_none());
    }

    #[test]
    fn identity_deserializes_without_optional_fields() {
        let json = r#"{"id":"7","name":"Demo User","email":"x@y.sg","role":"guard"}"#;
        let identity: Identity = serde_json::from_str(json).unwrap();
        assert_eq!(identity.role, Role::Guard);
        assert_eq!(identity.employee_id, None);
    }

    #[test]
    fn identity_initials() {
        assert_eq!(sample().initials(), "SS");
    }
}
