//! Read-only placeholder data behind every module view.
//!
//! Views read records through [`DataProvider`] so a real backend can be
//! slotted in later without touching the components.

use crate::clients::{Client, ClientStatus};
use crate::compliance::{
    AgencyLicense, ComplianceRequirement, ComplianceStatus, GuardLicense, TrainingRecord,
};
use crate::notifications::{Notification, NotificationKind, Priority};
use crate::operations::{
    Activity, ActivityKind, Checkpoint, CheckpointStatus, ChecklistTemplate, DashboardStat,
    Incident, IncidentStatus, Inspection, InspectionItem, InspectionStatus, OccurrenceEntry,
    Severity, Task, TaskStatus, TourRoute, TourStatus,
};
use crate::workforce::{
    ApprovalStatus, AttendanceRecord, DutyStatus, EmployeePay, LeaveBalance, LeaveRequest,
    LeaveType, MonthlyAttendance, PayStatus, PayrollSummary, Payslip,
};
use chrono::{NaiveDate, NaiveDateTime};

/// "Today" for the placeholder data set.
pub fn reference_date() -> NaiveDate {
    date(2024, 12, 10)
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

fn datetime(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
    date(y, m, d).and_hms_opt(h, min, 0).unwrap_or_default()
}

/// Source of the records each module displays.
pub trait DataProvider {
    fn dashboard_stats(&self) -> Vec<DashboardStat>;
    fn recent_activities(&self) -> Vec<Activity>;
    /// Patrol duties for guards, review duties for everyone else.
    fn upcoming_tasks(&self, patrol: bool) -> Vec<Task>;

    fn today_attendance(&self) -> Vec<AttendanceRecord>;
    fn monthly_attendance(&self) -> MonthlyAttendance;

    fn leave_requests(&self) -> Vec<LeaveRequest>;
    fn leave_balances(&self) -> Vec<LeaveBalance>;

    fn incidents(&self) -> Vec<Incident>;

    fn tour_routes(&self) -> Vec<TourRoute>;
    fn checkpoints(&self) -> Vec<Checkpoint>;

    fn payroll_summary(&self) -> PayrollSummary;
    fn payslips(&self) -> Vec<Payslip>;
    fn employee_pay(&self) -> Vec<EmployeePay>;

    fn occurrence_entries(&self) -> Vec<OccurrenceEntry>;

    fn checklist_templates(&self) -> Vec<ChecklistTemplate>;
    fn inspection_items(&self) -> Vec<InspectionItem>;
    fn recent_inspections(&self) -> Vec<Inspection>;

    fn agency_license(&self) -> AgencyLicense;
    fn compliance_requirements(&self) -> Vec<ComplianceRequirement>;
    fn guard_licenses(&self) -> Vec<GuardLicense>;
    fn training_records(&self) -> Vec<TrainingRecord>;

    fn clients(&self) -> Vec<Client>;

    fn notifications(&self) -> Vec<Notification>;
}

/// Static demo data set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FixtureProvider;

fn stat(title: &str, value: &str, description: &str) -> DashboardStat {
    DashboardStat {
        title: title.into(),
        value: value.into(),
        description: description.into(),
    }
}

fn task(task: &str, time: &str, status: TaskStatus) -> Task {
    Task {
        task: task.into(),
        time: time.into(),
        status,
    }
}

fn checkpoint(id: &str, name: &str, status: CheckpointStatus, at: Option<&str>) -> Checkpoint {
    Checkpoint {
        id: id.into(),
        name: name.into(),
        qr_code: id.replace("CP-", "QR"),
        status,
        scanned_at: at.map(str::to_string),
    }
}

fn inspection_item(id: u32, item: &str, compliant: Option<bool>, notes: &str) -> InspectionItem {
    InspectionItem {
        id,
        item: item.into(),
        compliant,
        notes: notes.into(),
    }
}

impl DataProvider for FixtureProvider {
    fn dashboard_stats(&self) -> Vec<DashboardStat> {
        vec![
            stat("Total Guards On Duty", "24", "Currently active across 8 sites"),
            stat("Pending Incidents", "3", "2 high priority, 1 medium"),
            stat("Completed Tours", "18", "Out of 20 scheduled today"),
            stat("Leave Requests", "5", "Awaiting approval"),
        ]
    }

    fn recent_activities(&self) -> Vec<Activity> {
        let a = |time: &str, activity: &str, kind, high_priority| Activity {
            time: time.into(),
            activity: activity.into(),
            kind,
            high_priority,
        };
        vec![
            a("09:30 AM", "Guard John Tan checked in at Orchard Mall", ActivityKind::Attendance, false),
            a("09:15 AM", "Incident reported: Suspicious person at Block 123", ActivityKind::Incident, true),
            a("08:45 AM", "Tour completed: Marina Bay Financial Centre", ActivityKind::Tour, false),
            a("08:30 AM", "Leave request approved for Sarah Lim", ActivityKind::Leave, false),
        ]
    }

    fn upcoming_tasks(&self, patrol: bool) -> Vec<Task> {
        if patrol {
            vec![
                task("Complete patrol route A", "10:00 AM", TaskStatus::Pending),
                task("Submit daily occurrence report", "6:00 PM", TaskStatus::Pending),
                task("Checkpoint scan due", "11:00 AM", TaskStatus::Overdue),
            ]
        } else {
            vec![
                task("Review incident reports", "10:30 AM", TaskStatus::Pending),
                task("Approve leave requests", "2:00 PM", TaskStatus::Pending),
                task("Site inspection: CBD Office", "3:00 PM", TaskStatus::Scheduled),
            ]
        }
    }

    fn today_attendance(&self) -> Vec<AttendanceRecord> {
        let r = |id, name: &str, site: &str, clock_in: &str, status, shift: &str| AttendanceRecord {
            id,
            name: name.into(),
            site: site.into(),
            clock_in: clock_in.into(),
            shift: shift.into(),
            status,
        };
        vec![
            r(1, "John Tan", "Orchard Mall", "08:00", DutyStatus::OnDuty, "Day Shift"),
            r(2, "Sarah Lim", "CBD Office", "07:45", DutyStatus::OnDuty, "Day Shift"),
            r(3, "Ahmad Rahman", "Marina Bay", "20:00", DutyStatus::OnDuty, "Night Shift"),
            r(4, "Jennifer Wong", "Shopping Centre", "09:15", DutyStatus::Late, "Day Shift"),
        ]
    }

    fn monthly_attendance(&self) -> MonthlyAttendance {
        MonthlyAttendance {
            total_days: 22,
            present: 20,
            absent: 1,
            late: 1,
            overtime_hours: 8,
        }
    }

    fn leave_requests(&self) -> Vec<LeaveRequest> {
        vec![
            LeaveRequest {
                id: 1,
                employee: "John Tan".into(),
                leave_type: LeaveType::Annual,
                start_date: date(2024, 12, 15),
                end_date: date(2024, 12, 17),
                days: 3,
                status: ApprovalStatus::Pending,
                reason: "Family vacation".into(),
            },
            LeaveRequest {
                id: 2,
                employee: "Sarah Lim".into(),
                leave_type: LeaveType::Medical,
                start_date: date(2024, 12, 10),
                end_date: date(2024, 12, 12),
                days: 3,
                status: ApprovalStatus::Approved,
                reason: "Doctor appointment".into(),
            },
            LeaveRequest {
                id: 3,
                employee: "Ahmad Rahman".into(),
                leave_type: LeaveType::Urgent,
                start_date: date(2024, 12, 8),
                end_date: date(2024, 12, 8),
                days: 1,
                status: ApprovalStatus::Rejected,
                reason: "Personal emergency".into(),
            },
        ]
    }

    fn leave_balances(&self) -> Vec<LeaveBalance> {
        vec![
            LeaveBalance { leave_type: LeaveType::Annual, used: 8, total: 14 },
            LeaveBalance { leave_type: LeaveType::Medical, used: 3, total: 14 },
            LeaveBalance { leave_type: LeaveType::Urgent, used: 1, total: 3 },
        ]
    }

    fn incidents(&self) -> Vec<Incident> {
        let i = |id: &str, title: &str, category: &str, severity, location: &str, by: &str, at: &str, status, description: &str| Incident {
            id: id.into(),
            title: title.into(),
            category: category.into(),
            severity,
            location: location.into(),
            reported_by: by.into(),
            reported_at: at.into(),
            status,
            description: description.into(),
        };
        vec![
            i(
                "INC-001",
                "Suspicious Activity",
                "Security Breach",
                Severity::High,
                "Main Entrance",
                "John Tan",
                "2024-12-10 14:30",
                IncidentStatus::Investigating,
                "Unidentified person attempting to access restricted area",
            ),
            i(
                "INC-002",
                "Fire Alarm Activation",
                "Fire Safety",
                Severity::Critical,
                "Level 3 Office",
                "Sarah Lim",
                "2024-12-09 09:15",
                IncidentStatus::Resolved,
                "False alarm triggered by cooking smoke",
            ),
            i(
                "INC-003",
                "Theft Report",
                "Theft",
                Severity::Medium,
                "Parking Lot B",
                "Ahmad Rahman",
                "2024-12-08 18:45",
                IncidentStatus::Pending,
                "Bicycle theft reported by tenant",
            ),
        ]
    }

    fn tour_routes(&self) -> Vec<TourRoute> {
        let r = |id: &str, name: &str, site: &str, checkpoints, duration: &str, frequency: &str, status, last: &str| TourRoute {
            id: id.into(),
            name: name.into(),
            site: site.into(),
            checkpoints,
            duration: duration.into(),
            frequency: frequency.into(),
            status,
            last_completed: last.into(),
        };
        vec![
            r("ROUTE-001", "Main Building Patrol", "Orchard Mall", 8, "45 min", "Every 2 hours", TourStatus::Active, "2024-12-10 14:30"),
            r("ROUTE-002", "Perimeter Check", "CBD Office", 12, "60 min", "Every 4 hours", TourStatus::Overdue, "2024-12-10 08:15"),
            r("ROUTE-003", "Fire Safety Inspection", "Marina Bay", 6, "30 min", "Daily", TourStatus::Completed, "2024-12-10 16:00"),
        ]
    }

    fn checkpoints(&self) -> Vec<Checkpoint> {
        vec![
            checkpoint("CP-001", "Main Entrance", CheckpointStatus::Completed, Some("14:30")),
            checkpoint("CP-002", "Reception Area", CheckpointStatus::Completed, Some("14:35")),
            checkpoint("CP-003", "Emergency Exit A", CheckpointStatus::Completed, Some("14:40")),
            checkpoint("CP-004", "Parking Entrance", CheckpointStatus::Missed, None),
            checkpoint("CP-005", "Fire Panel", CheckpointStatus::Pending, None),
            checkpoint("CP-006", "Roof Access", CheckpointStatus::Pending, None),
        ]
    }

    fn payroll_summary(&self) -> PayrollSummary {
        PayrollSummary {
            basic_salary: 3500,
            overtime: 420,
            allowances: 200,
            cpf_employee: 700,
            cpf_employer: 595,
            working_days: 22,
            overtime_hours: 15,
        }
    }

    fn payslips(&self) -> Vec<Payslip> {
        let p = |month: &str, gross_pay, net_pay, cpf_total| Payslip {
            month: month.into(),
            gross_pay,
            net_pay,
            cpf_total,
            status: PayStatus::Paid,
        };
        vec![
            p("November 2024", 4120, 3420, 1295),
            p("October 2024", 3850, 3200, 1200),
            p("September 2024", 4200, 3500, 1300),
        ]
    }

    fn employee_pay(&self) -> Vec<EmployeePay> {
        let e = |id: &str, name: &str, basic_salary, overtime, gross_pay, status| EmployeePay {
            id: id.into(),
            name: name.into(),
            basic_salary,
            overtime,
            gross_pay,
            status,
        };
        vec![
            e("EMP001", "John Tan", 3500, 420, 4120, PayStatus::Processed),
            e("EMP002", "Sarah Lim", 3200, 320, 3720, PayStatus::Pending),
            e("EMP003", "Ahmad Rahman", 3800, 190, 4180, PayStatus::Processed),
        ]
    }

    fn occurrence_entries(&self) -> Vec<OccurrenceEntry> {
        let o = |id: &str, timestamp: &str, author: &str, site: &str, entry: &str, status, has_media| OccurrenceEntry {
            id: id.into(),
            timestamp: timestamp.into(),
            author: author.into(),
            site: site.into(),
            shift: "Day Shift".into(),
            entry: entry.into(),
            status,
            has_media,
        };
        vec![
            o(
                "EOB-001",
                "2024-12-10 14:30",
                "John Tan",
                "Orchard Mall",
                "Routine patrol completed. All areas checked and secured. No incidents reported.",
                ApprovalStatus::Approved,
                false,
            ),
            o(
                "EOB-002",
                "2024-12-10 13:15",
                "Sarah Lim",
                "CBD Office",
                "Visitor logged for meeting at Level 15. ID checked and escort provided to reception.",
                ApprovalStatus::Pending,
                true,
            ),
            o(
                "EOB-003",
                "2024-12-10 12:00",
                "Ahmad Rahman",
                "Marina Bay",
                "Fire drill conducted at 12:00 PM. All occupants evacuated successfully in 3 minutes. Reset systems at 12:15 PM.",
                ApprovalStatus::Approved,
                false,
            ),
            o(
                "EOB-004",
                "2024-12-10 11:45",
                "Jennifer Wong",
                "Shopping Centre",
                "Lost child reported at Customer Service. Child reunited with parents after 10 minutes. Incident logged.",
                ApprovalStatus::Approved,
                true,
            ),
        ]
    }

    fn checklist_templates(&self) -> Vec<ChecklistTemplate> {
        let t = |id: &str, name: &str, category: &str, items, last_used: &str, frequency: &str| ChecklistTemplate {
            id: id.into(),
            name: name.into(),
            category: category.into(),
            items,
            last_used: last_used.into(),
            frequency: frequency.into(),
        };
        vec![
            t("TPL-001", "Daily Guard Uniform Inspection", "Uniform & Appearance", 8, "2024-12-10", "Daily"),
            t("TPL-002", "SOP Compliance Check", "Procedures", 12, "2024-12-09", "Weekly"),
            t("TPL-003", "Site Cleanliness Audit", "Maintenance", 15, "2024-12-08", "Daily"),
        ]
    }

    fn inspection_items(&self) -> Vec<InspectionItem> {
        vec![
            inspection_item(1, "Uniform is clean and properly pressed", Some(true), ""),
            inspection_item(2, "Security badge is visible and properly worn", Some(true), ""),
            inspection_item(3, "Footwear is appropriate and polished", Some(false), "Shoes need polishing"),
            inspection_item(4, "Communication device is functional", Some(true), ""),
            inspection_item(5, "Post is clean and organized", None, ""),
            inspection_item(6, "Visitor log is up to date", None, ""),
            inspection_item(7, "Emergency procedures are accessible", None, ""),
            inspection_item(8, "Incident reports are properly filed", None, ""),
        ]
    }

    fn recent_inspections(&self) -> Vec<Inspection> {
        let i = |id: &str, template: &str, inspector: &str, guard: &str, site: &str, date: &str, score, status, issues| Inspection {
            id: id.into(),
            template: template.into(),
            inspector: inspector.into(),
            guard: guard.into(),
            site: site.into(),
            date: date.into(),
            score,
            status,
            issues,
        };
        vec![
            i("INS-001", "Daily Guard Uniform Inspection", "Supervisor Chen", "John Tan", "Orchard Mall", "2024-12-10 09:00", 87, InspectionStatus::Completed, 1),
            i("INS-002", "SOP Compliance Check", "Supervisor Lee", "Sarah Lim", "CBD Office", "2024-12-09 14:30", 95, InspectionStatus::Completed, 0),
            i("INS-003", "Site Cleanliness Audit", "Supervisor Wong", "Ahmad Rahman", "Marina Bay", "2024-12-08 16:00", 78, InspectionStatus::FollowUp, 3),
        ]
    }

    fn agency_license(&self) -> AgencyLicense {
        AgencyLicense {
            license_number: "SL-2024-001234".into(),
            expiry: date(2025, 6, 15),
        }
    }

    fn compliance_requirements(&self) -> Vec<ComplianceRequirement> {
        let r = |requirement: &str, status, last_checked, next_review, description: &str| ComplianceRequirement {
            requirement: requirement.into(),
            status,
            last_checked,
            next_review,
            description: description.into(),
        };
        vec![
            r(
                "Security Agency License",
                ComplianceStatus::Compliant,
                date(2024, 12, 1),
                date(2025, 6, 1),
                "Valid security agency license from MOM",
            ),
            r(
                "Guard Licensing",
                ComplianceStatus::ActionRequired,
                date(2024, 12, 10),
                date(2024, 12, 20),
                "1 guard license expired, 1 expiring soon",
            ),
            r(
                "Training Records",
                ComplianceStatus::Compliant,
                date(2024, 11, 15),
                date(2025, 5, 15),
                "All guards have completed mandatory training",
            ),
            r(
                "Work Pass Compliance",
                ComplianceStatus::Compliant,
                date(2024, 12, 5),
                date(2025, 1, 5),
                "Foreign worker passes are valid and up to date",
            ),
            r(
                "Insurance Coverage",
                ComplianceStatus::Compliant,
                date(2024, 11, 30),
                date(2025, 11, 30),
                "Professional indemnity and public liability insurance active",
            ),
            r(
                "CPF Contributions",
                ComplianceStatus::Compliant,
                date(2024, 12, 1),
                date(2025, 1, 1),
                "All CPF contributions are up to date",
            ),
        ]
    }

    fn guard_licenses(&self) -> Vec<GuardLicense> {
        let l = |employee: &str, license_no: &str, expiry| GuardLicense {
            employee: employee.into(),
            license_no: license_no.into(),
            expiry,
        };
        vec![
            l("John Tan", "GL-001", date(2025, 3, 20)),
            l("Sarah Lim", "GL-002", date(2025, 4, 15)),
            l("Ahmad Rahman", "GL-003", date(2025, 1, 30)),
            l("Jennifer Wong", "GL-004", date(2024, 11, 30)),
        ]
    }

    fn training_records(&self) -> Vec<TrainingRecord> {
        let t = |employee: &str, course: &str, completed, expiry| TrainingRecord {
            employee: employee.into(),
            course: course.into(),
            completed,
            expiry,
        };
        vec![
            t("John Tan", "Basic Security Training", date(2024, 6, 15), date(2026, 6, 15)),
            t("Sarah Lim", "First Aid Certification", date(2024, 8, 20), date(2026, 8, 20)),
            t("Ahmad Rahman", "Fire Safety Training", date(2024, 9, 10), date(2025, 9, 10)),
            t("Jennifer Wong", "Customer Service Training", date(2024, 7, 5), date(2025, 7, 5)),
        ]
    }

    fn clients(&self) -> Vec<Client> {
        vec![
            Client {
                id: "1".into(),
                name: "John Tan".into(),
                company: "Marina Bay Towers".into(),
                email: "john.tan@marinabay.sg".into(),
                phone: "+65 9123 4567".into(),
                address: "10 Marina Boulevard, Singapore 018983".into(),
                status: ClientStatus::Active,
                contract_start: date(2024, 1, 1),
                contract_end: date(2024, 12, 31),
                sites: 3,
                guards: 12,
                monthly_value: 45_000,
                last_contact: date(2024, 1, 8),
            },
            Client {
                id: "2".into(),
                name: "Sarah Wong".into(),
                company: "Orchard Shopping Centre".into(),
                email: "sarah@orchardmall.com.sg".into(),
                phone: "+65 9876 5432".into(),
                address: "238 Orchard Road, Singapore 238851".into(),
                status: ClientStatus::Active,
                contract_start: date(2023, 6, 1),
                contract_end: date(2025, 5, 31),
                sites: 1,
                guards: 8,
                monthly_value: 28_000,
                last_contact: date(2024, 1, 7),
            },
            Client {
                id: "3".into(),
                name: "David Lim".into(),
                company: "Tanjong Pagar Complex".into(),
                email: "david.lim@tpcomplex.sg".into(),
                phone: "+65 8765 4321".into(),
                address: "120 Tanjong Pagar Road, Singapore 088540".into(),
                status: ClientStatus::Pending,
                contract_start: date(2024, 2, 1),
                contract_end: date(2025, 1, 31),
                sites: 2,
                guards: 6,
                monthly_value: 22_000,
                last_contact: date(2024, 1, 5),
            },
        ]
    }

    fn notifications(&self) -> Vec<Notification> {
        let n = |id: &str, kind, title: &str, message: &str, timestamp, read, priority, action_required| Notification {
            id: id.into(),
            kind,
            title: title.into(),
            message: message.into(),
            timestamp,
            read,
            priority,
            action_required,
        };
        vec![
            n(
                "1",
                NotificationKind::Attendance,
                "Late Clock-in Alert",
                "Guard Ahmad Rahman clocked in 30 minutes late at Marina Bay Site",
                datetime(2024, 1, 10, 9, 30),
                false,
                Priority::Medium,
                true,
            ),
            n(
                "2",
                NotificationKind::Incident,
                "Security Incident Reported",
                "Suspicious person reported at Orchard Plaza - Level 3",
                datetime(2024, 1, 10, 8, 15),
                false,
                Priority::High,
                true,
            ),
            n(
                "3",
                NotificationKind::Tour,
                "Missed Checkpoint",
                "Checkpoint B2 missed during 2 AM patrol at Tanjong Pagar",
                datetime(2024, 1, 10, 2, 0),
                true,
                Priority::Medium,
                false,
            ),
            n(
                "4",
                NotificationKind::Leave,
                "Leave Request Pending",
                "Sarah Lee has submitted urgent leave request for tomorrow",
                datetime(2024, 1, 9, 16, 45),
                false,
                Priority::Low,
                true,
            ),
            n(
                "5",
                NotificationKind::System,
                "System Maintenance",
                "Scheduled maintenance will occur tonight from 11 PM to 1 AM",
                datetime(2024, 1, 9, 14, 0),
                true,
                Priority::Low,
                false,
            ),
        ]
    }
}
