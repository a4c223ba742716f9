//! Regulatory compliance records: agency requirements, guard licences
//! and training certificates.

use crate::status::{percentage, Status, StatusTone};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Licences within this many days of expiry are flagged for renewal.
pub const EXPIRY_WARNING_DAYS: i64 = 60;

// ─── Requirements ──────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum ComplianceStatus {
    Compliant,
    ActionRequired,
}

impl Status for ComplianceStatus {
    fn label(&self) -> &'static str {
        match self {
            ComplianceStatus::Compliant => "compliant",
            ComplianceStatus::ActionRequired => "action-required",
        }
    }

    fn tone(&self) -> StatusTone {
        match self {
            ComplianceStatus::Compliant => StatusTone::Positive,
            ComplianceStatus::ActionRequired => StatusTone::Critical,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ComplianceRequirement {
    pub requirement: String,
    pub status: ComplianceStatus,
    pub last_checked: NaiveDate,
    pub next_review: NaiveDate,
    pub description: String,
}

/// Share of requirements currently met, rounded to a whole percent.
pub fn compliance_percentage(requirements: &[ComplianceRequirement]) -> u8 {
    let compliant = requirements
        .iter()
        .filter(|r| r.status == ComplianceStatus::Compliant)
        .count();
    percentage(compliant as u32, requirements.len() as u32)
}

// ─── Licences ──────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LicenseStatus {
    Active,
    Expiring,
    Expired,
}

impl LicenseStatus {
    pub fn from_days_left(days_left: i64) -> Self {
        if days_left < 0 {
            LicenseStatus::Expired
        } else if days_left <= EXPIRY_WARNING_DAYS {
            LicenseStatus::Expiring
        } else {
            LicenseStatus::Active
        }
    }
}

impl Status for LicenseStatus {
    fn label(&self) -> &'static str {
        match self {
            LicenseStatus::Active => "active",
            LicenseStatus::Expiring => "expiring",
            LicenseStatus::Expired => "expired",
        }
    }

    fn tone(&self) -> StatusTone {
        match self {
            LicenseStatus::Active => StatusTone::Positive,
            LicenseStatus::Expiring | LicenseStatus::Expired => StatusTone::Critical,
        }
    }
}

/// The agency's own operating licence.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AgencyLicense {
    pub license_number: String,
    pub expiry: NaiveDate,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GuardLicense {
    pub employee: String,
    pub license_no: String,
    pub expiry: NaiveDate,
}

impl GuardLicense {
    pub fn days_left(&self, today: NaiveDate) -> i64 {
        (self.expiry - today).num_days()
    }

    pub fn status(&self, today: NaiveDate) -> LicenseStatus {
        LicenseStatus::from_days_left(self.days_left(today))
    }

    pub fn needs_renewal(&self, today: NaiveDate) -> bool {
        self.status(today) != LicenseStatus::Active
    }
}

impl AgencyLicense {
    pub fn days_left(&self, today: NaiveDate) -> i64 {
        (self.expiry - today).num_days()
    }

    pub fn status(&self, today: NaiveDate) -> LicenseStatus {
        LicenseStatus::from_days_left(self.days_left(today))
    }
}

/// Licences in `status` as of `today`.
pub fn count_licenses(licenses: &[GuardLicense], today: NaiveDate, status: LicenseStatus) -> usize {
    licenses.iter().filter(|l| l.status(today) == status).count()
}

// ─── Training ──────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TrainingRecord {
    pub employee: String,
    pub course: String,
    pub completed: NaiveDate,
    pub expiry: NaiveDate,
}

impl TrainingRecord {
    pub fn is_valid(&self, today: NaiveDate) -> bool {
        self.expiry >= today
    }
}
