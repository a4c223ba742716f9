use crate::status::{Progress, Status, StatusTone};
use serde::{Deserialize, Serialize};

// ─── Incidents ─────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
    Critical,
}

impl Status for Severity {
    fn label(&self) -> &'static str {
        match self {
            Severity::Low => "low",
            Severity::Medium => "medium",
            Severity::High => "high",
            Severity::Critical => "critical",
        }
    }

    fn tone(&self) -> StatusTone {
        match self {
            Severity::Critical | Severity::High => StatusTone::Critical,
            Severity::Medium => StatusTone::Neutral,
            Severity::Low => StatusTone::Muted,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum IncidentStatus {
    Pending,
    Investigating,
    Resolved,
}

impl Status for IncidentStatus {
    fn label(&self) -> &'static str {
        match self {
            IncidentStatus::Pending => "pending",
            IncidentStatus::Investigating => "investigating",
            IncidentStatus::Resolved => "resolved",
        }
    }

    fn tone(&self) -> StatusTone {
        match self {
            IncidentStatus::Resolved => StatusTone::Positive,
            IncidentStatus::Investigating => StatusTone::Neutral,
            IncidentStatus::Pending => StatusTone::Muted,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Incident {
    pub id: String,
    pub title: String,
    pub category: String,
    pub severity: Severity,
    pub location: String,
    pub reported_by: String,
    pub reported_at: String,
    pub status: IncidentStatus,
    pub description: String,
}

/// Incidents that still need someone's attention.
pub fn open_incidents(incidents: &[Incident]) -> usize {
    incidents
        .iter()
        .filter(|i| i.status != IncidentStatus::Resolved)
        .count()
}

// ─── Guard tours ───────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TourStatus {
    Active,
    Overdue,
    Completed,
}

impl Status for TourStatus {
    fn label(&self) -> &'static str {
        match self {
            TourStatus::Active => "active",
            TourStatus::Overdue => "overdue",
            TourStatus::Completed => "completed",
        }
    }

    fn tone(&self) -> StatusTone {
        match self {
            TourStatus::Completed => StatusTone::Positive,
            TourStatus::Active => StatusTone::Neutral,
            TourStatus::Overdue => StatusTone::Critical,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TourRoute {
    pub id: String,
    pub name: String,
    pub site: String,
    pub checkpoints: u32,
    pub duration: String,
    pub frequency: String,
    pub status: TourStatus,
    pub last_completed: String,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum CheckpointStatus {
    Completed,
    Missed,
    Pending,
}

impl Status for CheckpointStatus {
    fn label(&self) -> &'static str {
        match self {
            CheckpointStatus::Completed => "completed",
            CheckpointStatus::Missed => "missed",
            CheckpointStatus::Pending => "pending",
        }
    }

    fn tone(&self) -> StatusTone {
        match self {
            CheckpointStatus::Completed => StatusTone::Positive,
            CheckpointStatus::Missed => StatusTone::Critical,
            CheckpointStatus::Pending => StatusTone::Muted,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Checkpoint {
    pub id: String,
    pub name: String,
    pub qr_code: String,
    pub status: CheckpointStatus,
    /// Scan time as `HH:MM`, absent until scanned.
    pub scanned_at: Option<String>,
}

/// Scanned checkpoints out of the route total. Missed ones do not count.
pub fn tour_progress(checkpoints: &[Checkpoint]) -> Progress {
    let done = checkpoints
        .iter()
        .filter(|c| c.status == CheckpointStatus::Completed)
        .count();
    Progress::new(done as u32, checkpoints.len() as u32)
}

// ─── Electronic occurrence book ────────────────────────────────

pub use crate::workforce::ApprovalStatus as OccurrenceStatus;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OccurrenceEntry {
    pub id: String,
    pub timestamp: String,
    pub author: String,
    pub site: String,
    pub shift: String,
    pub entry: String,
    pub status: OccurrenceStatus,
    pub has_media: bool,
}

impl OccurrenceEntry {
    fn matches(&self, needle: &str) -> bool {
        [&self.entry, &self.author, &self.site]
            .iter()
            .any(|field| field.to_lowercase().contains(needle))
    }
}

/// Case-insensitive substring search over entry text, author and site.
/// An empty term returns every entry; the term is not trimmed.
pub fn search_occurrences<'a>(entries: &'a [OccurrenceEntry], term: &str) -> Vec<&'a OccurrenceEntry> {
    let needle = term.to_lowercase();
    entries.iter().filter(|e| e.matches(&needle)).collect()
}

// ─── Checklists & inspections ──────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChecklistTemplate {
    pub id: String,
    pub name: String,
    pub category: String,
    pub items: u32,
    pub last_used: String,
    pub frequency: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InspectionItem {
    pub id: u32,
    pub item: String,
    /// `None` until the inspector has looked at the item.
    pub compliant: Option<bool>,
    pub notes: String,
}

impl InspectionItem {
    pub fn is_checked(&self) -> bool {
        self.compliant.is_some()
    }
}

/// Checked items out of all items on the sheet.
pub fn inspection_progress(items: &[InspectionItem]) -> Progress {
    let done = items.iter().filter(|i| i.is_checked()).count();
    Progress::new(done as u32, items.len() as u32)
}

/// Items checked and found non-compliant.
pub fn inspection_issues(items: &[InspectionItem]) -> usize {
    items.iter().filter(|i| i.compliant == Some(false)).count()
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum InspectionStatus {
    InProgress,
    Completed,
    FollowUp,
}

impl Status for InspectionStatus {
    fn label(&self) -> &'static str {
        match self {
            InspectionStatus::InProgress => "in-progress",
            InspectionStatus::Completed => "completed",
            InspectionStatus::FollowUp => "follow-up",
        }
    }

    fn tone(&self) -> StatusTone {
        match self {
            InspectionStatus::Completed => StatusTone::Positive,
            InspectionStatus::InProgress => StatusTone::Neutral,
            InspectionStatus::FollowUp => StatusTone::Critical,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Inspection {
    pub id: String,
    pub template: String,
    pub inspector: String,
    pub guard: String,
    pub site: String,
    pub date: String,
    pub score: u8,
    pub status: InspectionStatus,
    pub issues: u32,
}

// ─── Dashboard ─────────────────────────────────────────────────

/// Headline figure on the dashboard overview.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DashboardStat {
    pub title: String,
    pub value: String,
    pub description: String,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ActivityKind {
    Attendance,
    Incident,
    Tour,
    Leave,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Activity {
    pub time: String,
    pub activity: String,
    pub kind: ActivityKind,
    pub high_priority: bool,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TaskStatus {
    Pending,
    Overdue,
    Scheduled,
}

impl Status for TaskStatus {
    fn label(&self) -> &'static str {
        match self {
            TaskStatus::Pending => "pending",
            TaskStatus::Overdue => "overdue",
            TaskStatus::Scheduled => "scheduled",
        }
    }

    fn tone(&self) -> StatusTone {
        match self {
            TaskStatus::Overdue => StatusTone::Critical,
            TaskStatus::Pending => StatusTone::Neutral,
            TaskStatus::Scheduled => StatusTone::Muted,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Task {
    pub task: String,
    pub time: String,
    pub status: TaskStatus,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{DataProvider, FixtureProvider};

    #[test]
    fn severity_tones_follow_urgency() {
        assert_eq!(Severity::Critical.tone(), StatusTone::Critical);
        assert_eq!(Severity::High.tone(), StatusTone::Critical);
        assert_eq!(Severity::Medium.tone(), StatusTone::Neutral);
        assert_eq!(Severity::Low.tone(), StatusTone::Muted);
        assert!(Severity::Critical > Severity::High);
    }

    #[test]
    fn open_incidents_skip_resolved() {
        let incidents = FixtureProvider.incidents();
        assert_eq!(incidents.len(), 3);
        assert_eq!(open_incidents(&incidents), 2);
    }

    #[test]
    fn tour_progress_counts_only_scans() {
        let checkpoints = FixtureProvider.checkpoints();
        let progress = tour_progress(&checkpoints);
        assert_eq!(progress, Progress::new(3, 6));
        assert_eq!(progress.percent(), 50);
        assert_eq!(tour_progress(&[]).percent(), 0);
    }

    #[test]
    fn occurrence_search_matches_any_field() {
        let entries = FixtureProvider.occurrence_entries();

        let by_author = search_occurrences(&entries, "sarah");
        assert_eq!(by_author.len(), 1);
        assert_eq!(by_author[0].id, "EOB-002");

        let by_site = search_occurrences(&entries, "MARINA");
        assert_eq!(by_site.len(), 1);
        assert_eq!(by_site[0].id, "EOB-003");

        let by_text = search_occurrences(&entries, "child");
        assert_eq!(by_text.len(), 1);
        assert_eq!(by_text[0].author, "Jennifer Wong");

        assert_eq!(search_occurrences(&entries, "").len(), entries.len());
        assert!(search_occurrences(&entries, "helicopter").is_empty());
    }

    #[test]
    fn occurrence_search_keeps_surrounding_spaces() {
        let entries = FixtureProvider.occurrence_entries();
        assert_eq!(search_occurrences(&entries, "fire drill")[0].id, "EOB-003");
        assert_eq!(search_occurrences(&entries, "rahman").len(), 1);
        assert!(search_occurrences(&entries, "rahman ").is_empty());
    }

    #[test]
    fn inspection_progress_and_issues() {
        let items = FixtureProvider.inspection_items();
        assert_eq!(inspection_progress(&items), Progress::new(4, 8));
        assert_eq!(inspection_issues(&items), 1);
    }

    #[test]
    fn inspection_status_wire_names() {
        assert_eq!(
            serde_json::to_string(&InspectionStatus::FollowUp).unwrap(),
            r#""follow-up""#
        );
        assert_eq!(InspectionStatus::FollowUp.tone(), StatusTone::Critical);
    }
}
