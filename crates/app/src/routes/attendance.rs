use crate::auth::{use_capability, use_identity};
use crate::components::status_badge;
use crate::use_data;
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdCalendar, LdClock, LdMapPin, LdUsers};
use dioxus_free_icons::Icon;
use shared_types::workforce::{AttendanceRecord, MonthlyAttendance};
use shared_types::Capability;
use shared_ui::{
    use_toast, Badge, BadgeVariant, Button, ButtonVariant, Card, CardContent, CardDescription,
    CardHeader, CardTitle, ToastOptions,
};

#[component]
pub fn Attendance() -> Element {
    let data = use_data();
    let can_clock = use_capability(Capability::ClockInOut);
    let can_view_live = use_capability(Capability::ViewLiveAttendance);

    let monthly = data.monthly_attendance();
    let today = data.today_attendance();

    rsx! {
        div { class: "module-page",
            if can_clock {
                ClockPanel {}
            }

            MonthlySummary { stats: monthly }

            if can_view_live {
                LiveBoard { records: today }
            }

            Card { class: "notice-card",
                CardContent {
                    div { class: "notice",
                        Icon::<LdMapPin> { icon: LdMapPin, width: 22, height: 22 }
                        div {
                            h3 { "Advanced Attendance Features" }
                            p {
                                "Supports biometric scanners, facial recognition and GPS-based attendance. "
                                "Location verification ensures guards are on site when clocking in or out."
                            }
                            div { class: "notice-badges",
                                Badge { variant: BadgeVariant::Outline, "GPS Verified" }
                                Badge { variant: BadgeVariant::Outline, "PDPA Compliant" }
                                Badge { variant: BadgeVariant::Outline, "Real-time Sync" }
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Clock in/out for the signed-in guard. State is local to the page.
#[component]
fn ClockPanel() -> Element {
    let identity = use_identity();
    let toast = use_toast();
    let mut on_duty = use_signal(|| false);

    let site = identity
        .and_then(|i| i.site)
        .unwrap_or_else(|| "Not assigned".to_string());
    let now = chrono::Local::now().format("%H:%M:%S").to_string();

    let toggle = move |_| {
        let at = chrono::Local::now().format("%H:%M:%S");
        if on_duty() {
            on_duty.set(false);
            toast.success(format!("Clocked out at {at}"), ToastOptions::new());
        } else {
            on_duty.set(true);
            toast.success(format!("Clocked in at {at}"), ToastOptions::new());
        }
    };

    rsx! {
        Card {
            CardHeader {
                CardTitle {
                    Icon::<LdClock> { icon: LdClock, width: 18, height: 18 }
                    "Attendance Actions"
                }
                CardDescription { "Clock in/out with GPS verification" }
            }
            CardContent {
                div { class: "clock-panel",
                    dl { class: "detail-rows",
                        div {
                            dt { "Current Status:" }
                            dd {
                                Badge {
                                    variant: if on_duty() { BadgeVariant::Primary } else { BadgeVariant::Secondary },
                                    if on_duty() { "On Duty" } else { "Off Duty" }
                                }
                            }
                        }
                        div {
                            dt { "Current Time:" }
                            dd { "{now}" }
                        }
                        div {
                            dt { "Assigned Site:" }
                            dd { "{site}" }
                        }
                    }
                    div { class: "clock-actions",
                        Button {
                            variant: if on_duty() { ButtonVariant::Destructive } else { ButtonVariant::Primary },
                            onclick: toggle,
                            if on_duty() { "Clock Out" } else { "Clock In" }
                        }
                        p { class: "hint", "GPS location will be recorded for verification" }
                    }
                }
            }
        }
    }
}

#[component]
fn MonthlySummary(stats: MonthlyAttendance) -> Element {
    let rate = stats.attendance_rate();
    rsx! {
        Card {
            CardHeader {
                CardTitle {
                    Icon::<LdCalendar> { icon: LdCalendar, width: 18, height: 18 }
                    "Monthly Attendance Summary"
                }
                CardDescription { "December 2024 attendance statistics · {rate}% attendance" }
            }
            CardContent {
                div { class: "tally-grid",
                    div { class: "tally green",
                        span { class: "tally-value", "{stats.present}" }
                        span { class: "tally-label", "Present" }
                    }
                    div { class: "tally red",
                        span { class: "tally-value", "{stats.absent}" }
                        span { class: "tally-label", "Absent" }
                    }
                    div { class: "tally yellow",
                        span { class: "tally-value", "{stats.late}" }
                        span { class: "tally-label", "Late" }
                    }
                    div { class: "tally blue",
                        span { class: "tally-value", "{stats.overtime_hours}" }
                        span { class: "tally-label", "OT Hours" }
                    }
                    div { class: "tally",
                        span { class: "tally-value", "{stats.total_days}" }
                        span { class: "tally-label", "Total Days" }
                    }
                }
            }
        }
    }
}

#[component]
fn LiveBoard(records: Vec<AttendanceRecord>) -> Element {
    rsx! {
        Card {
            CardHeader {
                CardTitle {
                    Icon::<LdUsers> { icon: LdUsers, width: 18, height: 18 }
                    "Live Attendance Dashboard"
                }
                CardDescription { "Real-time attendance status across all sites" }
            }
            CardContent {
                div { class: "table-scroll",
                    table { class: "data-table",
                        thead {
                            tr {
                                th { "Employee" }
                                th { "Site" }
                                th { "Clock In" }
                                th { "Shift" }
                                th { "Status" }
                            }
                        }
                        tbody {
                            for record in records {
                                tr { key: "{record.id}",
                                    td { class: "strong", "{record.name}" }
                                    td { class: "muted", "{record.site}" }
                                    td { "{record.clock_in}" }
                                    td { "{record.shift}" }
                                    td { {status_badge(&record.status)} }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
