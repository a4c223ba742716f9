use crate::components::{status_badge, PageHeader};
use crate::use_data;
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{
    LdCalendar, LdClipboardCheck, LdFileText, LdPlus, LdShieldAlert, LdTrendingUp,
};
use dioxus_free_icons::Icon;
use shared_types::fixtures::reference_date;
use shared_types::operations::{
    inspection_issues, inspection_progress, ChecklistTemplate, Inspection, InspectionItem,
    InspectionStatus,
};
use shared_ui::{
    use_toast, Button, ButtonSize, ButtonVariant, Card, CardContent, CardDescription, CardHeader,
    CardTitle, Progress, StatAccent, StatCard, StatGrid, ToastOptions,
};

#[component]
pub fn Checklist() -> Element {
    let data = use_data();
    let toast = use_toast();

    let templates = data.checklist_templates();
    let inspections = data.recent_inspections();
    let items = use_signal(|| data.inspection_items());
    let active = use_signal(|| Option::<ChecklistTemplate>::None);

    let today = reference_date().format("%Y-%m-%d").to_string();
    let inspected_today = inspections.iter().filter(|i| i.date.starts_with(&today)).count();
    let follow_ups = inspections
        .iter()
        .filter(|i| i.status == InspectionStatus::FollowUp)
        .count();
    let average_score = average_score(&inspections);
    let template_count = templates.len();

    rsx! {
        div { class: "module-page",
            StatGrid {
                StatCard { value: "{inspected_today}", label: "Inspections Today", accent: StatAccent::Blue,
                    Icon::<LdClipboardCheck> { icon: LdClipboardCheck, width: 20, height: 20 }
                }
                StatCard { value: "{template_count}", label: "Active Templates", accent: StatAccent::Green,
                    Icon::<LdFileText> { icon: LdFileText, width: 20, height: 20 }
                }
                StatCard { value: "{average_score}%", label: "Avg Compliance", accent: StatAccent::Purple,
                    Icon::<LdTrendingUp> { icon: LdTrendingUp, width: 20, height: 20 }
                }
                StatCard { value: "{follow_ups}", label: "Follow-ups", accent: StatAccent::Yellow,
                    Icon::<LdShieldAlert> { icon: LdShieldAlert, width: 20, height: 20 }
                }
            }

            if let Some(template) = active() {
                ActiveInspection { template: template, items: items, active: active }
            }

            PageHeader {
                title: "Inspection Templates",
                subtitle: "Manage checklist templates for different inspection types",
                actions: rsx! {
                    Button {
                        onclick: move |_| {
                            toast.success("Template created".to_string(), ToastOptions::new());
                        },
                        Icon::<LdPlus> { icon: LdPlus, width: 16, height: 16 }
                        "New Template"
                    }
                },
            }

            div { class: "record-list",
                for template in templates.clone() {
                    TemplateCard { key: "{template.id}", template: template.clone(), active: active }
                }
            }

            Card {
                CardHeader {
                    CardTitle { "Recent Inspections" }
                    CardDescription { "Track completed inspections and follow-ups" }
                }
                CardContent {
                    div { class: "record-list",
                        for inspection in inspections {
                            InspectionRow { key: "{inspection.id}", inspection: inspection.clone() }
                        }
                    }
                }
            }
        }
    }
}

/// Mean inspection score, rounded. Zero when nothing has been inspected.
fn average_score(inspections: &[Inspection]) -> u8 {
    if inspections.is_empty() {
        return 0;
    }
    let sum: u32 = inspections.iter().map(|i| u32::from(i.score)).sum();
    (f64::from(sum) / inspections.len() as f64).round() as u8
}

#[component]
fn TemplateCard(template: ChecklistTemplate, active: Signal<Option<ChecklistTemplate>>) -> Element {
    let toast = use_toast();
    let mut active = active;
    let selected = template.clone();

    rsx! {
        div { class: "record record-stacked",
            div { class: "record-head",
                div {
                    p { class: "strong", "{template.name}" }
                    p { class: "muted", "{template.id} · {template.category}" }
                }
            }
            dl { class: "field-grid",
                div {
                    dt { "Items" }
                    dd { "{template.items}" }
                }
                div {
                    dt { "Frequency" }
                    dd { "{template.frequency}" }
                }
                div {
                    dt { "Last Used" }
                    dd { "{template.last_used}" }
                }
            }
            div { class: "record-buttons",
                if active.read().is_none() {
                    Button {
                        size: ButtonSize::Small,
                        onclick: move |_| {
                            active.set(Some(selected.clone()));
                            toast.info(
                                "Checklist inspection has been initiated.".to_string(),
                                ToastOptions::new(),
                            );
                        },
                        "Start Inspection"
                    }
                }
                Button { size: ButtonSize::Small, variant: ButtonVariant::Outline, "Edit Template" }
                Button { size: ButtonSize::Small, variant: ButtonVariant::Outline, "View History" }
            }
        }
    }
}

#[component]
fn ActiveInspection(
    template: ChecklistTemplate,
    items: Signal<Vec<InspectionItem>>,
    active: Signal<Option<ChecklistTemplate>>,
) -> Element {
    let toast = use_toast();
    let mut active = active;
    let progress = inspection_progress(&items.read());
    let issues = inspection_issues(&items.read());

    rsx! {
        Card { class: "active-inspection",
            CardHeader {
                CardTitle {
                    Icon::<LdClipboardCheck> { icon: LdClipboardCheck, width: 18, height: 18 }
                    "Active Inspection - {template.name}"
                }
                CardDescription { "Complete all items to finish the inspection" }
            }
            CardContent {
                div { class: "metric-row",
                    span { class: "metric-label", "{progress.done} of {progress.total} items checked" }
                    span { class: "metric-value", "{issues} non-compliant" }
                }
                Progress { value: progress.percent() }

                ul { class: "inspection-items",
                    for item in items() {
                        InspectionItemRow { key: "{item.id}", item: item.clone(), items: items }
                    }
                }

                div { class: "record-buttons",
                    Button {
                        onclick: move |_| {
                            active.set(None);
                            toast.success(
                                "Checklist has been completed and submitted for review.".to_string(),
                                ToastOptions::new(),
                            );
                        },
                        "Complete Inspection"
                    }
                    Button {
                        variant: ButtonVariant::Outline,
                        onclick: move |_| active.set(None),
                        "Save Draft"
                    }
                }
            }
        }
    }
}

#[component]
fn InspectionItemRow(item: InspectionItem, items: Signal<Vec<InspectionItem>>) -> Element {
    let id = item.id;
    let state = match item.compliant {
        Some(true) => "compliant",
        Some(false) => "non-compliant",
        None => "unchecked",
    };

    rsx! {
        li { class: "inspection-item", "data-state": state,
            div {
                p { "{item.item}" }
                if !item.notes.is_empty() {
                    p { class: "muted", "{item.notes}" }
                }
            }
            div { class: "record-buttons",
                Button {
                    size: ButtonSize::Small,
                    variant: if item.compliant == Some(true) { ButtonVariant::Primary } else { ButtonVariant::Outline },
                    onclick: move |_| mark_item(items, id, true),
                    "Compliant"
                }
                Button {
                    size: ButtonSize::Small,
                    variant: if item.compliant == Some(false) { ButtonVariant::Destructive } else { ButtonVariant::Outline },
                    onclick: move |_| mark_item(items, id, false),
                    "Non-Compliant"
                }
            }
        }
    }
}

fn mark_item(mut items: Signal<Vec<InspectionItem>>, id: u32, compliant: bool) {
    if let Some(target) = items.write().iter_mut().find(|i| i.id == id) {
        target.compliant = Some(compliant);
    }
}

#[component]
fn InspectionRow(inspection: Inspection) -> Element {
    let plural = if inspection.issues == 1 { "" } else { "s" };

    rsx! {
        div { class: "record record-stacked",
            div { class: "record-head",
                div {
                    p { class: "strong", "{inspection.template}" }
                    p { class: "muted", "{inspection.id} · Inspector: {inspection.inspector}" }
                    p { class: "muted", "Guard: {inspection.guard} · {inspection.site}" }
                }
                {status_badge(&inspection.status)}
            }
            div { class: "metric-row",
                span { class: "metric-label",
                    Icon::<LdCalendar> { icon: LdCalendar, width: 14, height: 14 }
                    " {inspection.date}"
                }
                span { class: "metric-value", "Score {inspection.score}% · {inspection.issues} issue{plural}" }
            }
            div { class: "record-buttons",
                Button { size: ButtonSize::Small, variant: ButtonVariant::Outline, "View Report" }
                Button { size: ButtonSize::Small, variant: ButtonVariant::Outline, "Digital Signature" }
                if inspection.status == InspectionStatus::FollowUp {
                    Button { size: ButtonSize::Small, variant: ButtonVariant::Outline, "Create Follow-up" }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared_types::{DataProvider, FixtureProvider};

    #[test]
    fn average_score_rounds_fixture_scores() {
        // (87 + 95 + 78) / 3 = 86.67
        assert_eq!(average_score(&FixtureProvider.recent_inspections()), 87);
        assert_eq!(average_score(&[]), 0);
    }
}
