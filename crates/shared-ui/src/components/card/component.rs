use dioxus::prelude::*;

/// Bordered panel that groups one block of dashboard content.
///
/// `compact` tightens the padding for stat tiles and list rows.
#[component]
pub fn Card(
    #[props(default = false)] compact: bool,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![
        Attribute::new("class", "card", None, false),
        Attribute::new(
            "data-density",
            if compact { "compact" } else { "regular" },
            None,
            false,
        ),
    ];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            ..merged,
            {children}
        }
    }
}

#[component]
pub fn CardHeader(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![Attribute::new("class", "card-header", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        div {
            ..merged,
            {children}
        }
    }
}

/// Heading inside a CardHeader. May hold an icon before the text.
#[component]
pub fn CardTitle(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![Attribute::new("class", "card-title", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        h3 {
            ..merged,
            {children}
        }
    }
}

#[component]
pub fn CardDescription(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![Attribute::new("class", "card-description", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        p {
            ..merged,
            {children}
        }
    }
}

#[component]
pub fn CardContent(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![Attribute::new("class", "card-content", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        div {
            ..merged,
            {children}
        }
    }
}

#[component]
pub fn CardFooter(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![Attribute::new("class", "card-footer", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        div {
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
    fn card_sections_nest_in_order() {
        let html = render(|| {
            rsx! {
                Card {
                    CardHeader {
                        CardTitle { "Today's Attendance" }
                        CardDescription { "Live status of all guards" }
                    }
                    CardContent { "rows" }
                    CardFooter { "footer" }
                }
            }
        });
        let title = html.find("card-title").unwrap_or(usize::MAX);
        let content = html.find("card-content").unwrap_or(usize::MAX);
        let footer = html.find("card-footer").unwrap_or(usize::MAX);
        assert!(title < content && content < footer, "{html}");
        assert!(html.contains("<h3"), "{html}");
        assert!(html.contains(r#"data-density="regular""#), "{html}");
    }

    #[test]
    fn compact_card_merges_classes() {
        let html = render(|| rsx! { Card { compact: true, class: "auth-card", "x" } });
        assert!(html.contains(r#"data-density="compact""#), "{html}");
        assert!(html.contains("auth-card"), "{html}");
    }
}
