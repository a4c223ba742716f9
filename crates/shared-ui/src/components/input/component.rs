use dioxus::prelude::*;

/// Single-line text field.
///
/// Controlled: the caller owns `value` and updates it from `on_input`.
#[component]
pub fn Input(
    #[props(default)] value: String,
    #[props(default)] on_input: EventHandler<FormEvent>,
    #[props(default)] placeholder: String,
    #[props(default = "text".to_string())] input_type: String,
    #[props(default)] autocomplete: Option<String>,
    #[props(default = false)] required: bool,
    #[props(default = false)] disabled: bool,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    let base = vec![Attribute::new("class", "input", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        input {
            r#type: "{input_type}",
            value: value,
            placeholder: placeholder,
            autocomplete: autocomplete,
            required: required,
            disabled: disabled,
            oninput: move |evt| on_input.call(evt),
            ..merged,
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
    fn password_field_renders_type_and_value() {
        let html = render(|| {
            rsx! {
                Input {
                    id: "password",
                    input_type: "password",
                    value: "demo123",
                    placeholder: "Enter your password",
                    required: true,
                }
            }
        });
        assert!(html.contains(r#"type="password""#), "{html}");
        assert!(html.contains(r#"value="demo123""#), "{html}");
        assert!(html.contains(r#"id="password""#), "{html}");
        assert!(html.contains("required"), "{html}");
    }

    #[test]
    fn defaults_to_text() {
        let html = render(|| rsx! { Input { placeholder: "Search entries..." } });
        assert!(html.contains(r#"type="text""#), "{html}");
        assert!(!html.contains("autocomplete"), "{html}");
    }
}
