use crate::components::{status_badge, PageHeader};
use crate::use_data;
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdClock, LdFileText, LdMapPin, LdPlus, LdShieldAlert};
use dioxus_free_icons::Icon;
use shared_types::operations::{open_incidents, Incident, IncidentStatus};
use shared_ui::{
    use_toast, Button, ButtonSize, ButtonVariant, Card, CardContent, CardDescription, CardHeader,
    CardTitle, StatAccent, StatCard, StatGrid, ToastOptions,
};
use std::collections::HashSet;

#[component]
pub fn Incidents() -> Element {
    let data = use_data();
    let toast = use_toast();
    let incidents = data.incidents();

    let open = open_incidents(&incidents);
    let pending = incidents
        .iter()
        .filter(|i| i.status == IncidentStatus::Pending)
        .count();
    let sites = incidents
        .iter()
        .map(|i| i.location.as_str())
        .collect::<HashSet<_>>()
        .len();

    rsx! {
        div { class: "module-page",
            PageHeader {
                title: "Incident Reports",
                subtitle: "Document security incidents with photos and details",
                actions: rsx! {
                    Button {
                        onclick: move |_| {
                            toast.success(
                                "Incident report submitted and authorities notified".to_string(),
                                ToastOptions::new(),
                            );
                        },
                        Icon::<LdPlus> { icon: LdPlus, width: 16, height: 16 }
                        "Report Incident"
                    }
                },
            }

            StatGrid {
                StatCard { value: "{open}", label: "Open Incidents", accent: StatAccent::Red,
                    Icon::<LdShieldAlert> { icon: LdShieldAlert, width: 20, height: 20 }
                }
                StatCard { value: "{pending}", label: "Pending Review", accent: StatAccent::Yellow,
                    Icon::<LdClock> { icon: LdClock, width: 20, height: 20 }
                }
                StatCard { value: "{incidents.len()}", label: "This Month", accent: StatAccent::Blue,
                    Icon::<LdFileText> { icon: LdFileText, width: 20, height: 20 }
                }
                StatCard { value: "{sites}", label: "Sites Covered", accent: StatAccent::Green,
                    Icon::<LdMapPin> { icon: LdMapPin, width: 20, height: 20 }
                }
            }

            Card {
                CardHeader {
                    CardTitle { "Recent Incidents" }
                    CardDescription { "Track and manage incident reports" }
                }
                CardContent {
                    div { class: "record-list",
                        for incident in incidents {
                            IncidentCard { key: "{incident.id}", incident: incident.clone() }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn IncidentCard(incident: Incident) -> Element {
    rsx! {
        div { class: "record record-stacked",
            div { class: "record-head",
                div {
                    p { class: "strong", "{incident.title}" }
                    p { class: "muted", "ID: {incident.id}" }
                }
                div { class: "record-actions",
                    {status_badge(&incident.severity)}
                    {status_badge(&incident.status)}
                }
            }
            dl { class: "field-grid",
                div {
                    dt { "Category" }
                    dd { "{incident.category}" }
                }
                div {
                    dt { "Location" }
                    dd { "{incident.location}" }
                }
                div {
                    dt { "Reported By" }
                    dd { "{incident.reported_by}" }
                }
                div {
                    dt { "Reported At" }
                    dd { "{incident.reported_at}" }
                }
            }
            div { class: "record-description",
                p { class: "muted", "Description" }
                p { "{incident.description}" }
            }
            div { class: "record-buttons",
                Button { size: ButtonSize::Small, variant: ButtonVariant::Outline, "View Details" }
                Button { size: ButtonSize::Small, variant: ButtonVariant::Outline, "Update Status" }
                Button { size: ButtonSize::Small, variant: ButtonVariant::Outline, "Add Comment" }
            }
        }
    }
}
