use crate::auth::use_capability;
use crate::components::status_badge;
use crate::use_data;
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{
    LdCalendar, LdClock, LdMapPin, LdShieldAlert, LdTrendingUp, LdUsers,
};
use dioxus_free_icons::Icon;
use shared_types::operations::{Activity, Task};
use shared_types::Capability;
use shared_ui::{
    Badge, BadgeVariant, Card, CardContent, CardDescription, CardHeader, CardTitle, Progress,
    StatAccent, StatCard, StatGrid,
};

/// Month-to-date headline rates on the performance card.
const PERFORMANCE: &[(&str, u8)] = &[
    ("Attendance Rate", 95),
    ("Tour Completion", 88),
    ("Incident Response", 92),
];

const STAT_ACCENTS: [StatAccent; 4] = [
    StatAccent::Blue,
    StatAccent::Red,
    StatAccent::Green,
    StatAccent::Yellow,
];

fn stat_icon(index: usize) -> Element {
    match index {
        0 => rsx! { Icon::<LdUsers> { icon: LdUsers, width: 22, height: 22 } },
        1 => rsx! { Icon::<LdShieldAlert> { icon: LdShieldAlert, width: 22, height: 22 } },
        2 => rsx! { Icon::<LdMapPin> { icon: LdMapPin, width: 22, height: 22 } },
        _ => rsx! { Icon::<LdCalendar> { icon: LdCalendar, width: 22, height: 22 } },
    }
}

/// Overview shown to every role: headline stats, recent activity, today's
/// tasks and monthly performance.
#[component]
pub fn Dashboard() -> Element {
    let data = use_data();
    let patrol = use_capability(Capability::PatrolTasks);

    let stats = data.dashboard_stats();
    let activities = data.recent_activities();
    let tasks = data.upcoming_tasks(patrol);

    rsx! {
        div { class: "module-page",
            StatGrid {
                for (index, stat) in stats.into_iter().enumerate() {
                    StatCard {
                        key: "{index}",
                        value: stat.value,
                        label: stat.title,
                        description: stat.description,
                        accent: STAT_ACCENTS[index % STAT_ACCENTS.len()],
                        {stat_icon(index)}
                    }
                }
            }

            div { class: "module-columns",
                RecentActivity { activities }
                UpcomingTasks { tasks }
            }

            Card {
                CardHeader {
                    CardTitle {
                        Icon::<LdTrendingUp> { icon: LdTrendingUp, width: 18, height: 18 }
                        "Performance Overview"
                    }
                    CardDescription { "Key metrics for this month" }
                }
                CardContent {
                    div { class: "metric-grid",
                        for (label, value) in PERFORMANCE.iter().copied() {
                            div { key: "{label}", class: "metric",
                                div { class: "metric-row",
                                    span { class: "metric-label", "{label}" }
                                    span { class: "metric-value", "{value}%" }
                                }
                                Progress { value: value }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn RecentActivity(activities: Vec<Activity>) -> Element {
    rsx! {
        Card {
            CardHeader {
                CardTitle {
                    Icon::<LdClock> { icon: LdClock, width: 18, height: 18 }
                    "Recent Activities"
                }
                CardDescription { "Latest system updates and events" }
            }
            CardContent {
                ul { class: "activity-list",
                    for activity in activities {
                        li { key: "{activity.time}", class: "activity-item",
                            span {
                                class: if activity.high_priority { "activity-dot urgent" } else { "activity-dot" },
                            }
                            div { class: "activity-body",
                                p { class: "activity-text", "{activity.activity}" }
                                p { class: "activity-time", "{activity.time}" }
                            }
                            if activity.high_priority {
                                Badge { variant: BadgeVariant::Destructive, "High Priority" }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn UpcomingTasks(tasks: Vec<Task>) -> Element {
    rsx! {
        Card {
            CardHeader {
                CardTitle {
                    Icon::<LdCalendar> { icon: LdCalendar, width: 18, height: 18 }
                    "Upcoming Tasks"
                }
                CardDescription { "Your scheduled activities for today" }
            }
            CardContent {
                ul { class: "task-list",
                    for task in tasks {
                        li { key: "{task.task}", class: "task-item",
                            div {
                                p { class: "task-name", "{task.task}" }
                                p { class: "task-time", "{task.time}" }
                            }
                            {status_badge(&task.status)}
                        }
                    }
                }
            }
        }
    }
}
