use crate::auth::{use_capability, use_identity};
use crate::components::{status_badge, PageHeader};
use crate::use_data;
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdBookOpen, LdCheck, LdClock, LdFileText, LdPlus, LdUsers};
use dioxus_free_icons::Icon;
use shared_types::operations::{search_occurrences, OccurrenceEntry, OccurrenceStatus};
use shared_types::Capability;
use shared_ui::{
    use_toast, Button, ButtonSize, ButtonVariant, Card, CardContent, SearchBar, StatAccent,
    StatCard, StatGrid, ToastOptions,
};
use std::collections::HashSet;

#[component]
pub fn OccurrenceBook() -> Element {
    let data = use_data();
    let toast = use_toast();
    let site = use_identity().and_then(|i| i.site);

    let entries = use_signal(|| data.occurrence_entries());
    let mut term = use_signal(String::new);

    let (total, pending, approved, contributors) = {
        let list = entries.read();
        let count = |status: OccurrenceStatus| list.iter().filter(|e| e.status == status).count();
        let authors: HashSet<&str> = list.iter().map(|e| e.author.as_str()).collect();
        (
            list.len(),
            count(OccurrenceStatus::Pending),
            count(OccurrenceStatus::Approved),
            authors.len(),
        )
    };

    let visible: Vec<OccurrenceEntry> = search_occurrences(&entries.read(), &term())
        .into_iter()
        .cloned()
        .collect();

    let add_entry = move |_| {
        let message = match &site {
            Some(site) => format!("Entry for {site} submitted for review."),
            None => "Your occurrence book entry has been submitted for review.".to_string(),
        };
        toast.success(message, ToastOptions::new());
    };

    rsx! {
        div { class: "module-page",
            StatGrid {
                StatCard { value: "{total}", label: "Total Entries", accent: StatAccent::Blue,
                    Icon::<LdBookOpen> { icon: LdBookOpen, width: 20, height: 20 }
                }
                StatCard { value: "{pending}", label: "Pending Review", accent: StatAccent::Yellow,
                    Icon::<LdClock> { icon: LdClock, width: 20, height: 20 }
                }
                StatCard { value: "{approved}", label: "Approved", accent: StatAccent::Green,
                    Icon::<LdCheck> { icon: LdCheck, width: 20, height: 20 }
                }
                StatCard { value: "{contributors}", label: "Contributors", accent: StatAccent::Purple,
                    Icon::<LdUsers> { icon: LdUsers, width: 20, height: 20 }
                }
            }

            PageHeader {
                title: "Digital Occurrence Book",
                subtitle: "Record daily events, incidents, and observations",
                actions: rsx! {
                    Button { onclick: add_entry,
                        Icon::<LdPlus> { icon: LdPlus, width: 16, height: 16 }
                        "New Entry"
                    }
                },
            }

            SearchBar {
                value: term(),
                on_search: move |value: String| term.set(value),
                placeholder: "Search entries by content, author, or site...",
            }

            div { class: "record-list",
                for entry in visible {
                    EntryCard { key: "{entry.id}", entry: entry.clone(), entries: entries }
                }
            }
        }
    }
}

#[component]
fn EntryCard(entry: OccurrenceEntry, entries: Signal<Vec<OccurrenceEntry>>) -> Element {
    let toast = use_toast();
    let can_review = use_capability(Capability::ReviewOccurrences);
    let mut entries = entries;
    let id = entry.id.clone();

    let approve = move |_| {
        if let Some(target) = entries.write().iter_mut().find(|e| e.id == id) {
            target.status = OccurrenceStatus::Approved;
        }
        toast.success(
            format!("EOB entry {id} has been approved by supervisor."),
            ToastOptions::new(),
        );
    };

    rsx! {
        Card {
            CardContent {
                div { class: "record record-stacked",
                    div { class: "record-head",
                        div {
                            p { class: "strong", "{entry.id}" }
                            p { class: "muted", "{entry.author} · {entry.site} · {entry.shift}" }
                            p { class: "muted", "{entry.timestamp}" }
                        }
                        div { class: "record-actions",
                            if entry.has_media {
                                span { class: "media-flag", title: "Has attachments",
                                    Icon::<LdFileText> { icon: LdFileText, width: 16, height: 16 }
                                }
                            }
                            {status_badge(&entry.status)}
                            if can_review && entry.status == OccurrenceStatus::Pending {
                                Button {
                                    size: ButtonSize::Small,
                                    variant: ButtonVariant::Outline,
                                    onclick: approve,
                                    "Approve"
                                }
                            }
                        }
                    }
                    p { class: "record-body", "{entry.entry}" }
                }
            }
        }
    }
}
