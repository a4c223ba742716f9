use crate::auth::use_capability;
use crate::components::status_badge;
use crate::use_data;
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdCheck, LdClock, LdMapPin, LdPlus, LdScanLine, LdX};
use dioxus_free_icons::Icon;
use shared_types::operations::{tour_progress, Checkpoint, CheckpointStatus, TourRoute, TourStatus};
use shared_types::{Capability, Status};
use shared_ui::{
    use_toast, Button, ButtonSize, ButtonVariant, Card, CardContent, CardDescription, CardHeader,
    CardTitle, Progress, StatAccent, StatCard, StatGrid, ToastOptions,
};

#[component]
pub fn GuardTour() -> Element {
    let data = use_data();
    let toast = use_toast();
    let can_manage = use_capability(Capability::ManageTourRoutes);

    let routes = data.tour_routes();
    let checkpoints = use_signal(|| data.checkpoints());
    let mut current_tour = use_signal(|| Option::<TourRoute>::None);

    let count = |status: TourStatus| routes.iter().filter(|r| r.status == status).count();
    let active = count(TourStatus::Active);
    let completed = count(TourStatus::Completed);
    let overdue = count(TourStatus::Overdue);
    let missed = checkpoints
        .read()
        .iter()
        .filter(|c| c.status == CheckpointStatus::Missed)
        .count();

    rsx! {
        div { class: "module-page",
            StatGrid {
                StatCard { value: "{active}", label: "Active Routes", accent: StatAccent::Blue,
                    Icon::<LdMapPin> { icon: LdMapPin, width: 20, height: 20 }
                }
                StatCard { value: "{completed}", label: "Tours Completed", accent: StatAccent::Green,
                    Icon::<LdCheck> { icon: LdCheck, width: 20, height: 20 }
                }
                StatCard { value: "{missed}", label: "Missed Checkpoints", accent: StatAccent::Yellow,
                    Icon::<LdX> { icon: LdX, width: 20, height: 20 }
                }
                StatCard { value: "{overdue}", label: "Overdue Tours", accent: StatAccent::Red,
                    Icon::<LdClock> { icon: LdClock, width: 20, height: 20 }
                }
            }

            if let Some(route) = current_tour() {
                ActiveTour {
                    route: route,
                    checkpoints: checkpoints,
                    on_complete: move |_| current_tour.set(None),
                }
            }

            Card {
                CardHeader {
                    CardTitle { "Guard Tour Routes" }
                    CardDescription { "Manage patrol routes and checkpoint schedules" }
                }
                CardContent {
                    div { class: "record-list",
                        for route in routes.clone() {
                            RouteCard { key: "{route.id}", route: route.clone(), current_tour: current_tour }
                        }
                    }
                }
            }

            if can_manage {
                Card {
                    CardHeader {
                        CardTitle { "Route Management" }
                        CardDescription { "Create and manage guard tour routes" }
                    }
                    CardContent {
                        Button {
                            onclick: move |_| {
                                toast.success("Route created".to_string(), ToastOptions::new());
                            },
                            Icon::<LdPlus> { icon: LdPlus, width: 16, height: 16 }
                            "Create New Route"
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn RouteCard(route: TourRoute, current_tour: Signal<Option<TourRoute>>) -> Element {
    let toast = use_toast();
    let mut current_tour = current_tour;
    let selected = route.clone();

    rsx! {
        div { class: "record record-stacked",
            div { class: "record-head",
                div {
                    p { class: "strong", "{route.name}" }
                    p { class: "muted", "Route ID: {route.id}" }
                    p { class: "muted", "{route.site}" }
                }
                {status_badge(&route.status)}
            }
            dl { class: "field-grid",
                div {
                    dt { "Checkpoints" }
                    dd { "{route.checkpoints}" }
                }
                div {
                    dt { "Duration" }
                    dd { "{route.duration}" }
                }
                div {
                    dt { "Frequency" }
                    dd { "{route.frequency}" }
                }
                div {
                    dt { "Last Completed" }
                    dd { "{route.last_completed}" }
                }
            }
            div { class: "record-buttons",
                if current_tour.read().is_none() {
                    Button {
                        size: ButtonSize::Small,
                        onclick: move |_| {
                            current_tour.set(Some(selected.clone()));
                            toast.info(
                                "Tour started. Please scan checkpoints.".to_string(),
                                ToastOptions::new(),
                            );
                        },
                        "Start Tour"
                    }
                }
                Button { size: ButtonSize::Small, variant: ButtonVariant::Outline, "View Route" }
                Button { size: ButtonSize::Small, variant: ButtonVariant::Outline, "View History" }
            }
        }
    }
}

/// Checkpoint grid for the tour in progress. Scanning marks the next
/// pending checkpoint as completed.
#[component]
fn ActiveTour(
    route: TourRoute,
    checkpoints: Signal<Vec<Checkpoint>>,
    on_complete: EventHandler<()>,
) -> Element {
    let toast = use_toast();
    let mut checkpoints = checkpoints;
    let progress = tour_progress(&checkpoints.read());

    let scan_next = move |_| {
        let scanned_at = chrono::Local::now().format("%H:%M").to_string();
        let mut list = checkpoints.write();
        match list.iter_mut().find(|c| c.status == CheckpointStatus::Pending) {
            Some(checkpoint) => {
                checkpoint.status = CheckpointStatus::Completed;
                checkpoint.scanned_at = Some(scanned_at);
                toast.success(format!("{} scanned", checkpoint.name), ToastOptions::new());
            }
            None => {
                toast.info("No checkpoints left to scan".to_string(), ToastOptions::new());
            }
        }
    };

    rsx! {
        Card { class: "active-tour",
            CardHeader {
                CardTitle {
                    Icon::<LdScanLine> { icon: LdScanLine, width: 18, height: 18 }
                    "Active Tour - {route.name}"
                }
                CardDescription { "Scan QR codes at each checkpoint to complete the tour" }
            }
            CardContent {
                div { class: "metric-row",
                    span { class: "metric-label", "{progress.done} of {progress.total} checkpoints" }
                    span { class: "metric-value", "{progress.percent()}%" }
                }
                Progress { value: progress.percent() }

                div { class: "checkpoint-grid",
                    for checkpoint in checkpoints() {
                        div {
                            key: "{checkpoint.id}",
                            class: "checkpoint",
                            "data-status": checkpoint.status.label(),
                            div {
                                p { class: "strong", "{checkpoint.name}" }
                                p { class: "muted", "{checkpoint.qr_code}" }
                                if let Some(at) = &checkpoint.scanned_at {
                                    p { class: "muted", "{at}" }
                                }
                            }
                            {status_badge(&checkpoint.status)}
                        }
                    }
                }

                div { class: "record-buttons",
                    Button { onclick: scan_next,
                        Icon::<LdScanLine> { icon: LdScanLine, width: 16, height: 16 }
                        "Scan Next Checkpoint"
                    }
                    Button {
                        variant: ButtonVariant::Outline,
                        onclick: move |_| {
                            toast.success("Tour completed. Report submitted.".to_string(), ToastOptions::new());
                            on_complete.call(());
                        },
                        "Complete Tour"
                    }
                }
            }
        }
    }
}
