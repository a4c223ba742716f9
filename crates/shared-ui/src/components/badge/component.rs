use dioxus::prelude::*;

/// Visual variant for badges.
///
/// The first four mirror the status tones used across the dashboard;
/// `Counter` is the round unread-count bubble.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum BadgeVariant {
    #[default]
    Primary,
    Secondary,
    Destructive,
    Outline,
    Counter,
}

impl BadgeVariant {
    fn class(&self) -> &'static str {
        match self {
            BadgeVariant::Primary => "primary",
            BadgeVariant::Secondary => "secondary",
            BadgeVariant::Destructive => "destructive",
            BadgeVariant::Outline => "outline",
            BadgeVariant::Counter => "counter",
        }
    }
}

/// Inline label for statuses, roles and counts.
#[component]
pub fn Badge(
    #[props(default)] variant: BadgeVariant,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![
        Attribute::new("class", "badge", None, false),
        Attribute::new("data-style", variant.class(), None, false),
    ];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        span {
            ..merged,
            {children}
        }
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
    fn default_variant_is_primary() {
        let html = render(|| rsx! { Badge { "active" } });
        assert!(html.contains(r#"data-style="primary""#), "{html}");
        assert!(html.contains(">active</span>"), "{html}");
    }

    #[test]
    fn counter_variant_and_extra_class() {
        let html = render(|| rsx! { Badge { variant: BadgeVariant::Counter, class: "bell-count", "3" } });
        assert!(html.contains(r#"data-style="counter""#), "{html}");
        assert!(html.contains("bell-count"), "{html}");
    }
}
