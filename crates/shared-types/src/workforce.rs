use crate::status::{percentage, Status, StatusTone};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ─── Attendance ────────────────────────────────────────────────

/// Live duty status of a guard.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum DutyStatus {
    OnDuty,
    Late,
    OffDuty,
}

impl Status for DutyStatus {
    fn label(&self) -> &'static str {
        match self {
            DutyStatus::OnDuty => "On Duty",
            DutyStatus::Late => "Late",
            DutyStatus::OffDuty => "Off Duty",
        }
    }

    fn tone(&self) -> StatusTone {
        match self {
            DutyStatus::OnDuty => StatusTone::Positive,
            DutyStatus::Late => StatusTone::Critical,
            DutyStatus::OffDuty => StatusTone::Neutral,
        }
    }
}

/// One guard's attendance for today.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AttendanceRecord {
    pub id: u32,
    pub name: String,
    pub site: String,
    /// Clock-in time as `HH:MM`.
    pub clock_in: String,
    pub shift: String,
    pub status: DutyStatus,
}

/// Month-to-date attendance totals for one employee.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct MonthlyAttendance {
    pub total_days: u32,
    pub present: u32,
    pub absent: u32,
    pub late: u32,
    pub overtime_hours: u32,
}

impl MonthlyAttendance {
    /// Present days as a rounded percentage of working days.
    pub fn attendance_rate(&self) -> u8 {
        percentage(self.present, self.total_days)
    }
}

// ─── Leave ─────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum LeaveType {
    Annual,
    Medical,
    Urgent,
}

impl LeaveType {
    pub fn label(&self) -> &'static str {
        match self {
            LeaveType::Annual => "Annual Leave",
            LeaveType::Medical => "Medical Leave",
            LeaveType::Urgent => "Urgent Leave",
        }
    }
}

/// Review state shared by leave requests and occurrence-book entries.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ApprovalStatus {
    Pending,
    Approved,
    Rejected,
}

impl Status for ApprovalStatus {
    fn label(&self) -> &'static str {
        match self {
            ApprovalStatus::Pending => "Pending",
            ApprovalStatus::Approved => "Approved",
            ApprovalStatus::Rejected => "Rejected",
        }
    }

    fn tone(&self) -> StatusTone {
        match self {
            ApprovalStatus::Approved => StatusTone::Positive,
            ApprovalStatus::Pending => StatusTone::Neutral,
            ApprovalStatus::Rejected => StatusTone::Critical,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LeaveRequest {
    pub id: u32,
    pub employee: String,
    pub leave_type: LeaveType,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub days: u32,
    pub status: ApprovalStatus,
    pub reason: String,
}

impl LeaveRequest {
    /// Only pending requests can be approved or rejected.
    pub fn is_reviewable(&self) -> bool {
        self.status == ApprovalStatus::Pending
    }
}

/// Entitlement and usage for one leave type.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct LeaveBalance {
    pub leave_type: LeaveType,
    pub used: u32,
    pub total: u32,
}

impl LeaveBalance {
    pub fn remaining(&self) -> u32 {
        self.total.saturating_sub(self.used)
    }

    pub fn usage_percent(&self) -> u8 {
        percentage(self.used, self.total)
    }
}

// ─── Payroll ───────────────────────────────────────────────────

/// Current-month pay breakdown, in whole dollars.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct PayrollSummary {
    pub basic_salary: u32,
    pub overtime: u32,
    pub allowances: u32,
    pub cpf_employee: u32,
    pub cpf_employer: u32,
    pub working_days: u32,
    pub overtime_hours: u32,
}

impl PayrollSummary {
    pub fn gross_pay(&self) -> u32 {
        self.basic_salary + self.overtime + self.allowances
    }

    /// Gross less the employee CPF contribution.
    pub fn net_pay(&self) -> u32 {
        self.gross_pay().saturating_sub(self.cpf_employee)
    }

    pub fn cpf_total(&self) -> u32 {
        self.cpf_employee + self.cpf_employer
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PayStatus {
    Paid,
    Processed,
    Pending,
}

impl Status for PayStatus {
    fn label(&self) -> &'static str {
        match self {
            PayStatus::Paid => "Paid",
            PayStatus::Processed => "Processed",
            PayStatus::Pending => "Pending",
        }
    }

    fn tone(&self) -> StatusTone {
        match self {
            PayStatus::Paid | PayStatus::Processed => StatusTone::Positive,
            PayStatus::Pending => StatusTone::Neutral,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Payslip {
    pub month: String,
    pub gross_pay: u32,
    pub net_pay: u32,
    pub cpf_total: u32,
    pub status: PayStatus,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EmployeePay {
    pub id: String,
    pub name: String,
    pub basic_salary: u32,
    pub overtime: u32,
    pub gross_pay: u32,
    pub status: PayStatus,
}

/// Format whole dollars as `$4,120`.
pub fn format_currency(amount: u32) -> String {
    let digits = amount.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    out.push('$');
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attendance_rate_rounds() {
        let stats = MonthlyAttendance {
            total_days: 22,
            present: 20,
            absent: 1,
            late: 1,
            overtime_hours: 8,
        };
        assert_eq!(stats.attendance_rate(), 91);
    }

    #[test]
    fn duty_status_tones() {
        assert_eq!(DutyStatus::OnDuty.tone(), StatusTone::Positive);
        assert_eq!(DutyStatus::Late.tone(), StatusTone::Critical);
        assert_eq!(DutyStatus::OffDuty.label(), "Off Duty");
    }

    #[test]
    fn duty_status_serializes_kebab_case() {
        assert_eq!(serde_json::to_string(&DutyStatus::OnDuty).unwrap(), r#""on-duty""#);
    }

    #[test]
    fn leave_balance_math() {
        let balance = LeaveBalance {
            leave_type: LeaveType::Annual,
            used: 8,
            total: 14,
        };
        assert_eq!(balance.remaining(), 6);
        assert_eq!(balance.usage_percent(), 57);

        let overdrawn = LeaveBalance {
            leave_type: LeaveType::Urgent,
            used: 4,
            total: 3,
        };
        assert_eq!(overdrawn.remaining(), 0);
    }

    #[test]
    fn only_pending_leave_is_reviewable() {
        let mut request = LeaveRequest {
            id: 1,
            employee: "John Tan".into(),
            leave_type: LeaveType::Annual,
            start_date: NaiveDate::from_ymd_opt(2024, 12, 15).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2024, 12, 17).unwrap(),
            days: 3,
            status: ApprovalStatus::Pending,
            reason: "Family vacation".into(),
        };
        assert!(request.is_reviewable());
        request.status = ApprovalStatus::Approved;
        assert!(!request.is_reviewable());
    }

    #[test]
    fn payroll_derivations() {
        let summary = PayrollSummary {
            basic_salary: 3500,
            overtime: 420,
            allowances: 200,
            cpf_employee: 700,
            cpf_employer: 595,
            working_days: 22,
            overtime_hours: 15,
        };
        assert_eq!(summary.gross_pay(), 4120);
        assert_eq!(summary.net_pay(), 3420);
        assert_eq!(summary.cpf_total(), 1295);
    }

    #[test]
    fn currency_formatting() {
        assert_eq!(format_currency(0), "$0");
        assert_eq!(format_currency(420), "$420");
        assert_eq!(format_currency(4120), "$4,120");
        assert_eq!(format_currency(1234567), "$1,234,567");
    }
}
