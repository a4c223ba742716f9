use crate::use_data;
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdBell, LdCheck, LdTrash2};
use dioxus_free_icons::Icon;
use shared_types::notifications::{relative_time, Notification, NotificationCenter, Priority};
use shared_ui::{
    Badge, BadgeVariant, Button, ButtonSize, ButtonVariant, Card, CardContent, Sheet, SheetBody,
    SheetDescription, SheetHeader, SheetTitle,
};

fn priority_variant(priority: Priority) -> BadgeVariant {
    match priority {
        Priority::High => BadgeVariant::Destructive,
        Priority::Medium => BadgeVariant::Secondary,
        Priority::Low => BadgeVariant::Outline,
    }
}

/// Header bell with the unread count; opens the notification sheet.
#[component]
pub fn NotificationBell() -> Element {
    let data = use_data();
    let mut center = use_signal(|| NotificationCenter::new(data.notifications()));
    let mut open = use_signal(|| false);

    let unread = center.read().unread_count();

    rsx! {
        div { class: "notification-bell",
            Button {
                variant: ButtonVariant::Ghost,
                size: ButtonSize::Icon,
                title: "Notifications",
                onclick: move |_| open.set(true),
                Icon::<LdBell> { icon: LdBell, width: 18, height: 18 }
            }
            if unread > 0 {
                Badge { variant: BadgeVariant::Counter, "{unread}" }
            }
        }

        Sheet { open: open(), on_close: move |_| open.set(false),
            SheetHeader { on_close: move |_| open.set(false),
                SheetTitle { "Notifications" }
                SheetDescription {
                    if unread > 0 {
                        "{unread} unread notifications"
                    } else {
                        "All caught up"
                    }
                }
            }
            SheetBody {
                if unread > 0 {
                    Button {
                        variant: ButtonVariant::Outline,
                        size: ButtonSize::Small,
                        onclick: move |_| center.write().mark_all_read(),
                        "Mark all read"
                    }
                }
                NotificationList { center: center }
            }
        }
    }
}

#[component]
fn NotificationList(center: Signal<NotificationCenter>) -> Element {
    let items = center.read().items().to_vec();
    let now = chrono::Local::now().naive_local();

    if items.is_empty() {
        return rsx! {
            div { class: "notification-empty",
                Icon::<LdBell> { icon: LdBell, width: 32, height: 32 }
                p { "No notifications" }
            }
        };
    }

    rsx! {
        div { class: "notification-list",
            for item in items {
                NotificationRow {
                    key: "{item.id}",
                    when: relative_time(item.timestamp, now),
                    item: item.clone(),
                    center: center,
                }
            }
        }
    }
}

#[component]
fn NotificationRow(item: Notification, when: String, center: Signal<NotificationCenter>) -> Element {
    let mut center = center;
    let read_id = item.id.clone();
    let remove_id = item.id.clone();

    rsx! {
        Card {
            compact: true,
            class: if item.read { "notification-card" } else { "notification-card unread" },
            CardContent {
                div { class: "notification-row",
                    div { class: "notification-text",
                        div { class: "notification-title-row",
                            h4 { class: "notification-title", "{item.title}" }
                            Badge { variant: priority_variant(item.priority), "{item.priority.as_str()}" }
                        }
                        p { class: "notification-message", "{item.message}" }
                        div { class: "notification-meta",
                            span { "{when}" }
                            if item.action_required {
                                Badge { variant: BadgeVariant::Outline, "Action Required" }
                            }
                        }
                    }
                    div { class: "notification-actions",
                        if !item.read {
                            Button {
                                variant: ButtonVariant::Ghost,
                                size: ButtonSize::Icon,
                                title: "Mark as read",
                                onclick: move |_| {
                                    center.write().mark_read(&read_id);
                                },
                                Icon::<LdCheck> { icon: LdCheck, width: 14, height: 14 }
                            }
                        }
                        Button {
                            variant: ButtonVariant::Ghost,
                            size: ButtonSize::Icon,
                            title: "Delete",
                            onclick: move |_| {
                                center.write().remove(&remove_id);
                            },
                            Icon::<LdTrash2> { icon: LdTrash2, width: 14, height: 14 }
                        }
                    }
                }
            }
        }
    }
}
