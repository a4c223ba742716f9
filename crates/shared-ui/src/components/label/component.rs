use dioxus::prelude::*;

/// Form field caption, bound to an input through `html_for`.
#[component]
pub fn Label(
    html_for: String,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![Attribute::new("class", "label", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        label {
            r#for: html_for,
            ..merged,
            {children}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_points_at_its_field() {
        let mut dom = VirtualDom::new(|| rsx! { Label { html_for: "email", "Email" } });
        dom.rebuild_in_place();
        let html = dioxus_ssr::render(&dom);
        assert!(html.contains(r#"for="email""#), "{html}");
        assert!(html.contains(">Email</label>"), "{html}");
    }
}
