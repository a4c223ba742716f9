use crate::status::{Status, StatusTone};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ClientStatus {
    Active,
    Inactive,
    Pending,
}

impl ClientStatus {
    pub const ALL: [ClientStatus; 3] = [
        ClientStatus::Active,
        ClientStatus::Inactive,
        ClientStatus::Pending,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ClientStatus::Active => "active",
            ClientStatus::Inactive => "inactive",
            ClientStatus::Pending => "pending",
        }
    }

    /// Parse a filter value. `"all"` and unknown values mean no filter.
    pub fn parse_filter(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|status| status.as_str() == s)
    }
}

impl Status for ClientStatus {
    fn label(&self) -> &'static str {
        self.as_str()
    }

    fn tone(&self) -> StatusTone {
        match self {
            ClientStatus::Active => StatusTone::Positive,
            ClientStatus::Inactive => StatusTone::Critical,
            ClientStatus::Pending => StatusTone::Neutral,
        }
    }
}

/// A contracted customer of the agency.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Client {
    pub id: String,
    /// Primary contact person.
    pub name: String,
    pub company: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub status: ClientStatus,
    pub contract_start: NaiveDate,
    pub contract_end: NaiveDate,
    pub sites: u32,
    pub guards: u32,
    pub monthly_value: u32,
    pub last_contact: NaiveDate,
}

impl Client {
    fn matches(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle) || self.company.to_lowercase().contains(needle)
    }
}

/// Clients whose contact name or company contains `term` (case-insensitive)
/// and, when given, whose status equals `status`.
pub fn filter_clients<'a>(
    clients: &'a [Client],
    term: &str,
    status: Option<ClientStatus>,
) -> Vec<&'a Client> {
    let needle = term.to_lowercase();
    clients
        .iter()
        .filter(|c| c.matches(&needle))
        .filter(|c| status.map_or(true, |s| c.status == s))
        .collect()
}

/// Portfolio totals shown above the client list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClientSummary {
    pub total: usize,
    pub active: usize,
    pub guards: u32,
    pub monthly_revenue: u32,
}

impl ClientSummary {
    pub fn from_clients(clients: &[Client]) -> Self {
        clients.iter().fold(Self::default(), |mut acc, c| {
            acc.total += 1;
            if c.status == ClientStatus::Active {
                acc.active += 1;
                acc.monthly_revenue += c.monthly_value;
            }
            acc.guards += c.guards;
            acc
        })
    }
}
