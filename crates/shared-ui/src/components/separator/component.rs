use dioxus::prelude::*;

/// Thin rule between blocks. Horizontal unless `vertical` is set.
#[component]
pub fn Separator(
    #[props(default = false)] vertical: bool,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    let orientation = if vertical { "vertical" } else { "horizontal" };
    let base = vec![
        Attribute::new("class", "separator", None, false),
        Attribute::new("data-orientation", orientation, None, false),
    ];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            role: "separator",
            "aria-orientation": orientation,
            ..merged,
        }
    }
}
