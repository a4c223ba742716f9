use crate::components::status_badge;
use crate::format_helpers::format_date;
use crate::use_data;
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdBookOpen, LdFileText, LdShield};
use dioxus_free_icons::Icon;
use shared_types::compliance::{
    compliance_percentage, AgencyLicense, ComplianceRequirement, ComplianceStatus, GuardLicense,
    TrainingRecord,
};
use shared_types::fixtures::reference_date;
use shared_ui::{
    use_toast, Badge, BadgeVariant, Button, ButtonSize, ButtonVariant, Card, CardContent,
    CardDescription, CardHeader, CardTitle, Progress, TabContent, TabList, TabTrigger, Tabs,
    ToastOptions,
};

const REPORTS: [(&str, &str); 4] = [
    ("Monthly Compliance Report", "Comprehensive compliance status"),
    ("License Renewal Schedule", "Upcoming renewals and deadlines"),
    ("Training Compliance Report", "Training status for all staff"),
    ("Audit Preparation Report", "Ready for MOM inspection"),
];

#[component]
pub fn Compliance() -> Element {
    let data = use_data();

    rsx! {
        div { class: "module-page",
            Tabs { default_value: "overview", horizontal: true,
                TabList {
                    TabTrigger { value: "overview", index: 0usize, "Overview" }
                    TabTrigger { value: "licenses", index: 1usize, "Licenses" }
                    TabTrigger { value: "training", index: 2usize, "Training" }
                    TabTrigger { value: "reports", index: 3usize, "Reports" }
                }
                TabContent { value: "overview", index: 0usize,
                    ComplianceOverview {
                        requirements: data.compliance_requirements(),
                        licenses: data.guard_licenses(),
                    }
                }
                TabContent { value: "licenses", index: 1usize,
                    Licenses { agency: data.agency_license(), licenses: data.guard_licenses() }
                }
                TabContent { value: "training", index: 2usize,
                    Training { records: data.training_records() }
                }
                TabContent { value: "reports", index: 3usize,
                    ComplianceReports {}
                }
            }
        }
    }
}

#[component]
fn ComplianceOverview(requirements: Vec<ComplianceRequirement>, licenses: Vec<GuardLicense>) -> Element {
    let today = reference_date();
    let score = compliance_percentage(&requirements);
    let compliant = requirements
        .iter()
        .filter(|r| r.status == ComplianceStatus::Compliant)
        .count();
    let action_required = requirements.len() - compliant;
    let expiring = licenses.iter().filter(|l| l.needs_renewal(today)).count();

    rsx! {
        Card {
            CardHeader {
                CardTitle {
                    Icon::<LdShield> { icon: LdShield, width: 18, height: 18 }
                    "MOM Compliance Dashboard"
                }
                CardDescription { "Monitor compliance with Ministry of Manpower requirements" }
            }
            CardContent {
                div { class: "metric-row",
                    span { class: "metric-label", "Overall Compliance Score" }
                    span { class: "metric-value", "{score}%" }
                }
                Progress { value: score }
                div { class: "tally-grid",
                    div { class: "tally green",
                        span { class: "tally-value", "{compliant}" }
                        span { class: "tally-label", "Compliant Items" }
                    }
                    div { class: "tally red",
                        span { class: "tally-value", "{action_required}" }
                        span { class: "tally-label", "Action Required" }
                    }
                    div { class: "tally blue",
                        span { class: "tally-value", "{expiring}" }
                        span { class: "tally-label", "Expiring Soon" }
                    }
                }
            }
        }

        Card {
            CardHeader {
                CardTitle { "MOM Compliance Requirements" }
                CardDescription { "Track all mandatory compliance requirements" }
            }
            CardContent {
                div { class: "record-list",
                    for requirement in requirements {
                        div { key: "{requirement.requirement}", class: "record record-stacked",
                            div { class: "record-head",
                                div {
                                    p { class: "strong", "{requirement.requirement}" }
                                    p { class: "muted", "{requirement.description}" }
                                }
                                {status_badge(&requirement.status)}
                            }
                            dl { class: "field-grid",
                                div {
                                    dt { "Last Checked" }
                                    dd { "{format_date(requirement.last_checked)}" }
                                }
                                div {
                                    dt { "Next Review" }
                                    dd { "{format_date(requirement.next_review)}" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn Licenses(agency: AgencyLicense, licenses: Vec<GuardLicense>) -> Element {
    let today = reference_date();
    let agency_status = agency.status(today);
    let agency_days = agency.days_left(today);

    rsx! {
        Card {
            CardHeader {
                CardTitle { "Security Agency License" }
                CardDescription { "Main business license status" }
            }
            CardContent {
                div { class: "record record-stacked",
                    div { class: "record-head",
                        div {
                            p { class: "strong", "Security Agency License" }
                            p { class: "muted", "{agency.license_number}" }
                        }
                        {status_badge(&agency_status)}
                    }
                    dl { class: "field-grid",
                        div {
                            dt { "Expiry Date" }
                            dd { "{format_date(agency.expiry)}" }
                        }
                        div {
                            dt { "Days to Expiry" }
                            dd { "{agency_days}" }
                        }
                    }
                }
            }
        }

        Card {
            CardHeader {
                CardTitle { "Individual Guard Licenses" }
                CardDescription { "Track security guard license status for all employees" }
            }
            CardContent {
                div { class: "record-list",
                    for license in licenses {
                        LicenseRow { key: "{license.license_no}", license: license.clone() }
                    }
                }
            }
        }
    }
}

#[component]
fn LicenseRow(license: GuardLicense) -> Element {
    let toast = use_toast();
    let today = reference_date();
    let status = license.status(today);
    let days = days_left_label(license.days_left(today));
    let license_no = license.license_no.clone();

    rsx! {
        div { class: "record record-stacked",
            div { class: "record-head",
                div {
                    p { class: "strong", "{license.employee}" }
                    p { class: "muted", "{license.license_no}" }
                }
                div { class: "record-actions",
                    {status_badge(&status)}
                    if license.needs_renewal(today) {
                        Button {
                            size: ButtonSize::Small,
                            variant: ButtonVariant::Outline,
                            onclick: move |_| {
                                toast.info(
                                    format!("Renewal process started for license {license_no}"),
                                    ToastOptions::new(),
                                );
                            },
                            "Renew"
                        }
                    }
                }
            }
            dl { class: "field-grid",
                div {
                    dt { "Expiry Date" }
                    dd { "{format_date(license.expiry)}" }
                }
                div {
                    dt { "Days Left" }
                    dd { "data-status": status.label(), "{days}" }
                }
            }
        }
    }
}

/// "N days", or "Expired N days ago" once past the expiry date.
fn days_left_label(days_left: i64) -> String {
    if days_left < 0 {
        format!("Expired {} days ago", days_left.unsigned_abs())
    } else {
        format!("{days_left} days")
    }
}

#[component]
fn Training(records: Vec<TrainingRecord>) -> Element {
    let today = reference_date();

    rsx! {
        Card {
            CardHeader {
                CardTitle {
                    Icon::<LdBookOpen> { icon: LdBookOpen, width: 18, height: 18 }
                    "Training & Certification Records"
                }
                CardDescription { "Track mandatory training completion and certifications" }
            }
            CardContent {
                div { class: "table-scroll",
                    table { class: "data-table",
                        thead {
                            tr {
                                th { "Employee" }
                                th { "Course" }
                                th { "Completed" }
                                th { "Expiry" }
                                th { "Status" }
                            }
                        }
                        tbody {
                            for record in records {
                                tr { key: "{record.employee}-{record.course}",
                                    td { class: "strong", "{record.employee}" }
                                    td { "{record.course}" }
                                    td { "{format_date(record.completed)}" }
                                    td { "{format_date(record.expiry)}" }
                                    td {
                                        if record.is_valid(today) {
                                            Badge { variant: BadgeVariant::Primary, "valid" }
                                        } else {
                                            Badge { variant: BadgeVariant::Destructive, "expired" }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn ComplianceReports() -> Element {
    let toast = use_toast();

    rsx! {
        Card {
            CardHeader {
                CardTitle { "Compliance Reports" }
                CardDescription { "Generate compliance reports for MOM submissions" }
            }
            CardContent {
                div { class: "report-grid",
                    for (title, caption) in REPORTS {
                        Button {
                            key: "{title}",
                            variant: ButtonVariant::Outline,
                            class: "report-button",
                            onclick: move |_| {
                                toast.info(format!("{title} is being generated"), ToastOptions::new());
                            },
                            Icon::<LdFileText> { icon: LdFileText, width: 18, height: 18 }
                            span { class: "report-button-text",
                                span { class: "strong", "{title}" }
                                span { class: "muted", "{caption}" }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn days_left_wording() {
        assert_eq!(days_left_label(100), "100 days");
        assert_eq!(days_left_label(0), "0 days");
        assert_eq!(days_left_label(-12), "Expired 12 days ago");
    }
}
