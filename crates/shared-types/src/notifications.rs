use chrono::{NaiveDateTime, TimeDelta};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Attendance,
    Incident,
    Tour,
    Leave,
    System,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: String,
    pub kind: NotificationKind,
    pub title: String,
    pub message: String,
    pub timestamp: NaiveDateTime,
    pub read: bool,
    pub priority: Priority,
    #[serde(default)]
    pub action_required: bool,
}

/// In-memory notification list backing the header bell.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NotificationCenter {
    items: Vec<Notification>,
}

impl NotificationCenter {
    pub fn new(items: Vec<Notification>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[Notification] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn unread_count(&self) -> usize {
        self.items.iter().filter(|n| !n.read).count()
    }

    /// Returns false when no notification has this id.
    pub fn mark_read(&mut self, id: &str) -> bool {
        match self.items.iter_mut().find(|n| n.id == id) {
            Some(n) => {
                n.read = true;
                true
            }
            None => false,
        }
    }

    pub fn mark_all_read(&mut self) {
        self.items.iter_mut().for_each(|n| n.read = true);
    }

    /// Returns false when no notification has this id.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|n| n.id != id);
        self.items.len() != before
    }
}

/// "Just now" under an hour, "Nh ago" under a day, otherwise the date.
pub fn relative_time(timestamp: NaiveDateTime, now: NaiveDateTime) -> String {
    let elapsed = now - timestamp;
    if elapsed < TimeDelta::hours(1) {
        "Just now".to_string()
    } else if elapsed < TimeDelta::hours(24) {
        format!("{}h ago", elapsed.num_hours())
    } else {
        timestamp.format("%-d/%-m/%Y").to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{DataProvider, FixtureProvider};
    use chrono::NaiveDate;

    fn at(h: u32, m: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, 10)
            .unwrap()
            .and_hms_opt(h, m, 0)
            .unwrap()
    }

    #[test]
    fn unread_count_tracks_mark_read() {
        let mut center = NotificationCenter::new(FixtureProvider.notifications());
        assert_eq!(center.unread_count(), 3);

        assert!(center.mark_read("1"));
        assert_eq!(center.unread_count(), 2);

        // Already read; count unchanged.
        assert!(center.mark_read("3"));
        assert_eq!(center.unread_count(), 2);

        assert!(!center.mark_read("missing"));
    }

    #[test]
    fn remove_drops_the_notification() {
        let mut center = NotificationCenter::new(FixtureProvider.notifications());
        assert!(center.remove("2"));
        assert!(!center.remove("2"));
        assert_eq!(center.items().len(), 4);
        assert_eq!(center.unread_count(), 2);
    }

    #[test]
    fn mark_all_read_clears_badge() {
        let mut center = NotificationCenter::new(FixtureProvider.notifications());
        center.mark_all_read();
        assert_eq!(center.unread_count(), 0);
        assert!(!center.is_empty());
    }

    #[test]
    fn relative_time_buckets() {
        assert_eq!(relative_time(at(9, 30), at(9, 59)), "Just now");
        assert_eq!(relative_time(at(8, 15), at(9, 30)), "1h ago");
        assert_eq!(relative_time(at(0, 0), at(23, 59)), "23h ago");

        let yesterday = NaiveDate::from_ymd_opt(2024, 1, 9)
            .unwrap()
            .and_hms_opt(9, 0, 0)
            .unwrap();
        assert_eq!(relative_time(yesterday, at(9, 30)), "9/1/2024");
    }
}
