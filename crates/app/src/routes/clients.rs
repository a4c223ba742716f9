use crate::components::{status_badge, PageHeader};
use crate::format_helpers::{capitalize, format_date, format_date_range};
use crate::use_data;
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdDollarSign, LdMapPin, LdPlus, LdShield, LdUsers};
use dioxus_free_icons::Icon;
use shared_types::clients::{filter_clients, Client, ClientStatus, ClientSummary};
use shared_types::workforce::format_currency;
use shared_ui::{
    use_toast, Button, ButtonSize, ButtonVariant, Card, CardContent, SearchBar, StatAccent,
    StatCard, StatGrid, ToastOptions,
};

#[component]
pub fn Clients() -> Element {
    let data = use_data();
    let toast = use_toast();

    let clients = data.clients();
    let mut term = use_signal(String::new);
    let mut status_filter = use_signal(|| "all".to_string());

    let summary = ClientSummary::from_clients(&clients);
    let revenue = format_currency(summary.monthly_revenue);
    let status = ClientStatus::parse_filter(&status_filter());
    let visible: Vec<Client> = filter_clients(&clients, &term(), status)
        .into_iter()
        .cloned()
        .collect();

    rsx! {
        div { class: "module-page",
            PageHeader {
                title: "Client Management",
                subtitle: "Manage client relationships and contracts",
                actions: rsx! {
                    Button {
                        onclick: move |_| {
                            toast.success(
                                "New client has been added successfully.".to_string(),
                                ToastOptions::new(),
                            );
                        },
                        Icon::<LdPlus> { icon: LdPlus, width: 16, height: 16 }
                        "Add Client"
                    }
                },
            }

            StatGrid {
                StatCard { value: "{summary.total}", label: "Total Clients", accent: StatAccent::Blue,
                    Icon::<LdUsers> { icon: LdUsers, width: 20, height: 20 }
                }
                StatCard { value: "{summary.active}", label: "Active", accent: StatAccent::Green,
                    Icon::<LdShield> { icon: LdShield, width: 20, height: 20 }
                }
                StatCard { value: "{summary.guards}", label: "Guards Deployed", accent: StatAccent::Purple,
                    Icon::<LdMapPin> { icon: LdMapPin, width: 20, height: 20 }
                }
                StatCard { value: "S{revenue}", label: "Monthly Revenue", accent: StatAccent::Yellow,
                    Icon::<LdDollarSign> { icon: LdDollarSign, width: 20, height: 20 }
                }
            }

            SearchBar {
                value: term(),
                on_search: move |value: String| term.set(value),
                placeholder: "Search clients...",
                select {
                    class: "status-filter",
                    value: status_filter(),
                    onchange: move |evt: FormEvent| status_filter.set(evt.value()),
                    option { value: "all", "All Status" }
                    for choice in ClientStatus::ALL {
                        option { key: "{choice.as_str()}", value: choice.as_str(), "{capitalize(choice.as_str())}" }
                    }
                }
            }

            if visible.is_empty() {
                p { class: "muted empty-state", "No clients match your search." }
            }

            div { class: "record-list",
                for client in visible {
                    ClientCard { key: "{client.id}", client: client.clone() }
                }
            }
        }
    }
}

#[component]
fn ClientCard(client: Client) -> Element {
    let contract = format_date_range(client.contract_start, client.contract_end);
    let last_contact = format_date(client.last_contact);
    let value = format_currency(client.monthly_value);

    rsx! {
        Card {
            CardContent {
                div { class: "record record-stacked",
                    div { class: "record-head",
                        div {
                            p { class: "strong", "{client.company}" }
                            p { class: "muted", "{client.name} · {client.id}" }
                        }
                        {status_badge(&client.status)}
                    }
                    dl { class: "field-grid",
                        div {
                            dt { "Email" }
                            dd { "{client.email}" }
                        }
                        div {
                            dt { "Phone" }
                            dd { "{client.phone}" }
                        }
                        div {
                            dt { "Sites" }
                            dd { "{client.sites}" }
                        }
                        div {
                            dt { "Guards" }
                            dd { "{client.guards}" }
                        }
                        div {
                            dt { "Contract" }
                            dd { "{contract}" }
                        }
                        div {
                            dt { "Monthly Value" }
                            dd { "S{value}" }
                        }
                        div {
                            dt { "Last Contact" }
                            dd { "{last_contact}" }
                        }
                    }
                    p { class: "muted", "{client.address}" }
                    div { class: "record-buttons",
                        Button { size: ButtonSize::Small, variant: ButtonVariant::Outline, "View Details" }
                        Button { size: ButtonSize::Small, variant: ButtonVariant::Outline, "Contract" }
                        Button { size: ButtonSize::Small, variant: ButtonVariant::Outline, "Reports" }
                    }
                }
            }
        }
    }
}
