use crate::auth::use_capability;
use crate::components::status_badge;
use crate::format_helpers::format_date_range;
use crate::use_data;
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdCalendar, LdPlus};
use dioxus_free_icons::Icon;
use shared_types::workforce::{ApprovalStatus, LeaveBalance, LeaveRequest};
use shared_types::Capability;
use shared_ui::{
    use_toast, Button, ButtonSize, ButtonVariant, Card, CardContent, CardDescription, CardHeader,
    CardTitle, Progress, ToastOptions,
};

#[component]
pub fn Leave() -> Element {
    let data = use_data();
    let toast = use_toast();
    let balances = data.leave_balances();
    let requests = use_signal(|| data.leave_requests());

    rsx! {
        div { class: "module-page",
            Card {
                CardHeader {
                    CardTitle {
                        Icon::<LdCalendar> { icon: LdCalendar, width: 18, height: 18 }
                        "Leave Balance"
                    }
                    CardDescription { "Your current leave entitlements (based on MOM policies)" }
                }
                CardContent {
                    div { class: "balance-grid",
                        for balance in balances {
                            BalanceTile { key: "{balance.leave_type.label()}", balance: balance }
                        }
                    }
                }
            }

            Card {
                CardHeader {
                    CardTitle { "Apply for Leave" }
                    CardDescription { "Submit new leave applications" }
                }
                CardContent {
                    Button {
                        onclick: move |_| {
                            toast.success(
                                "Leave request submitted for approval".to_string(),
                                ToastOptions::new(),
                            );
                        },
                        Icon::<LdPlus> { icon: LdPlus, width: 16, height: 16 }
                        "New Leave Request"
                    }
                }
            }

            RequestList { requests: requests }
        }
    }
}

#[component]
fn BalanceTile(balance: LeaveBalance) -> Element {
    rsx! {
        div { class: "balance-tile",
            span { class: "tally-value", "{balance.remaining()}" }
            span { class: "tally-label", "{balance.leave_type.label()} Remaining" }
            span { class: "hint", "Used: {balance.used}/{balance.total} days" }
            Progress { value: balance.usage_percent() }
        }
    }
}

#[component]
fn RequestList(requests: Signal<Vec<LeaveRequest>>) -> Element {
    let toast = use_toast();
    let can_review = use_capability(Capability::ApproveLeave);

    let review = move |id: u32, decision: ApprovalStatus| {
        let mut requests = requests;
        if let Some(request) = requests.write().iter_mut().find(|r| r.id == id) {
            request.status = decision;
        }
        let verb = match decision {
            ApprovalStatus::Approved => "approved",
            _ => "rejected",
        };
        toast.success(format!("Leave request #{id} has been {verb}"), ToastOptions::new());
    };

    rsx! {
        Card {
            CardHeader {
                CardTitle { "Leave Requests" }
                CardDescription { "Manage leave applications and approvals" }
            }
            CardContent {
                div { class: "record-list",
                    for request in requests() {
                        div { key: "{request.id}", class: "record",
                            div { class: "record-body",
                                p { class: "strong", "{request.employee}" }
                                p { class: "muted", "{request.leave_type.label()}" }
                                p { class: "muted",
                                    "{format_date_range(request.start_date, request.end_date)} ({request.days} days)"
                                }
                                p { "{request.reason}" }
                            }
                            div { class: "record-actions",
                                {status_badge(&request.status)}
                                if can_review && request.is_reviewable() {
                                    Button {
                                        size: ButtonSize::Small,
                                        onclick: move |_| review(request.id, ApprovalStatus::Approved),
                                        "Approve"
                                    }
                                    Button {
                                        size: ButtonSize::Small,
                                        variant: ButtonVariant::Destructive,
                                        onclick: move |_| review(request.id, ApprovalStatus::Rejected),
                                        "Reject"
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
