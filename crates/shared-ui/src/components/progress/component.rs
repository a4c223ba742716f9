use dioxus::prelude::*;

/// Horizontal bar filled to `value` percent. Values above 100 are clamped.
#[component]
pub fn Progress(
    value: u8,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    let value = value.min(100);
    let base = vec![Attribute::new("class", "progress", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            role: "progressbar",
            "aria-valuemin": "0",
            "aria-valuemax": "100",
            "aria-valuenow": "{value}",
            ..merged,
            div {
                class: "progress-indicator",
                style: "width: {value}%",
            }
        }
    }
}
