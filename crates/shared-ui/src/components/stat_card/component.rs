use crate::components::card::{Card, CardContent};
use dioxus::prelude::*;

/// Accent colour of the icon bubble on a stat tile.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum StatAccent {
    #[default]
    Blue,
    Green,
    Yellow,
    Red,
    Purple,
}

impl StatAccent {
    fn class(&self) -> &'static str {
        match self {
            StatAccent::Blue => "blue",
            StatAccent::Green => "green",
            StatAccent::Yellow => "yellow",
            StatAccent::Red => "red",
            StatAccent::Purple => "purple",
        }
    }
}

/// Headline number with a caption, used in the summary rows at the top of
/// each module. Children render inside the icon bubble.
#[component]
pub fn StatCard(
    value: String,
    label: String,
    #[props(default)] description: Option<String>,
    #[props(default)] accent: StatAccent,
    children: Element,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        Card { compact: true, class: "stat-card",
            CardContent {
                div { class: "stat-card-body",
                    div { class: "stat-card-icon", "data-accent": accent.class(),
                        {children}
                    }
                    div { class: "stat-card-text",
                        div { class: "stat-card-value", "{value}" }
                        div { class: "stat-card-label", "{label}" }
                        if let Some(description) = description {
                            div { class: "stat-card-description", "{description}" }
                        }
                    }
                }
            }
        }
    }
}

/// Responsive grid for a row of stat tiles.
#[component]
pub fn StatGrid(children: Element) -> Element {
    rsx! {
        div { class: "stat-grid", {children} }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(app: fn() -> Element) -> String {
        let mut dom = VirtualDom::new(app);
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    #[test]
    fn renders_value_label_and_accent() {
        let html = render(|| {
            rsx! {
                StatCard { value: "24", label: "Total Guards On Duty", accent: StatAccent::Green, span { "icon" } }
            }
        });
        assert!(html.contains(">24</div>"), "{html}");
        assert!(html.contains("Total Guards On Duty"), "{html}");
        assert!(html.contains(r#"data-accent="green""#), "{html}");
        assert!(!html.contains("stat-card-description"), "{html}");
    }

    #[test]
    fn description_is_optional() {
        let html = render(|| {
            rsx! {
                StatGrid {
                    StatCard {
                        value: "3",
                        label: "Pending Incidents",
                        description: "2 high priority, 1 medium",
                        span {}
                    }
                }
            }
        });
        assert!(html.contains("stat-grid"), "{html}");
        assert!(html.contains("2 high priority, 1 medium"), "{html}");
    }
}
