//! Shared formatting utilities for the UI layer.

use chrono::NaiveDate;
use shared_types::StatusTone;
use shared_ui::BadgeVariant;

/// Badge style for a status tone.
pub fn tone_variant(tone: StatusTone) -> BadgeVariant {
    match tone {
        StatusTone::Positive => BadgeVariant::Primary,
        StatusTone::Neutral => BadgeVariant::Secondary,
        StatusTone::Critical => BadgeVariant::Destructive,
        StatusTone::Muted => BadgeVariant::Outline,
    }
}

/// Format a date as `15/1/2024`, the way the agency's paperwork writes it.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%-d/%-m/%Y").to_string()
}

/// Format a range as `15/1/2024 - 17/1/2024`, or a single date when both
/// ends are equal.
pub fn format_date_range(start: NaiveDate, end: NaiveDate) -> String {
    if start == end {
        format_date(start)
    } else {
        format!("{} - {}", format_date(start), format_date(end))
    }
}

/// Uppercase first letter, for wire-format labels shown as titles.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
