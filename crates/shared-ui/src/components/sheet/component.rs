use dioxus::prelude::*;

/// Edge the drawer slides in from.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum SheetSide {
    #[default]
    Right,
    Left,
}

impl SheetSide {
    fn class(&self) -> &'static str {
        match self {
            SheetSide::Right => "right",
            SheetSide::Left => "left",
        }
    }
}

/// Side drawer over a dimmed backdrop. Clicking the backdrop calls
/// `on_close`; clicks inside the panel do not.
#[component]
pub fn Sheet(
    open: bool,
    on_close: EventHandler<()>,
    #[props(default)] side: SheetSide,
    children: Element,
) -> Element {
    if !open {
        return rsx! {};
    }

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            class: "sheet-overlay",
            onclick: move |_| on_close.call(()),
            div {
                class: "sheet-panel",
                role: "dialog",
                "aria-modal": "true",
                "data-side": side.class(),
                onclick: move |evt| evt.stop_propagation(),
                {children}
            }
        }
    }
}

/// Title row of a Sheet with a close button on the right.
#[component]
pub fn SheetHeader(on_close: EventHandler<()>, children: Element) -> Element {
    rsx! {
        div { class: "sheet-header",
            div { class: "sheet-heading", {children} }
            button {
                class: "sheet-close",
                r#type: "button",
                "aria-label": "Close",
                onclick: move |_| on_close.call(()),
                "\u{2715}"
            }
        }
    }
}

#[component]
pub fn SheetTitle(children: Element) -> Element {
    rsx! {
        h2 { class: "sheet-title", {children} }
    }
}

#[component]
pub fn SheetDescription(children: Element) -> Element {
    rsx! {
        p { class: "sheet-description", {children} }
    }
}

/// Scrollable body of a Sheet.
#[component]
pub fn SheetBody(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![Attribute::new("class", "sheet-body", None, false)];
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
    fn closed_sheet_renders_nothing() {
        let html = render(|| rsx! { Sheet { open: false, on_close: |_| {}, "hidden" } });
        assert!(!html.contains("hidden"), "{html}");
        assert!(!html.contains("sheet-panel"), "{html}");
    }

    #[test]
    fn open_sheet_shows_header_and_body() {
        let html = render(|| {
            rsx! {
                Sheet { open: true, on_close: |_| {},
                    SheetHeader { on_close: |_| {},
                        SheetTitle { "Notifications" }
                        SheetDescription { "Stay updated with system alerts and activities" }
                    }
                    SheetBody { "list" }
                }
            }
        });
        assert!(html.contains(r#"data-side="right""#), "{html}");
        assert!(html.contains("Notifications"), "{html}");
        assert!(html.contains("sheet-close"), "{html}");
        assert!(html.contains("sheet-body"), "{html}");
    }
}
