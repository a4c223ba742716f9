use dioxus::prelude::*;

/// Module heading with a subtitle and optional actions on the right.
#[component]
pub fn PageHeader(title: String, subtitle: String, actions: Option<Element>) -> Element {
    rsx! {
        div { class: "page-header",
            div {
                h2 { class: "page-title", "{title}" }
                p { class: "page-subtitle", "{subtitle}" }
            }
            if let Some(actions) = actions {
                div { class: "page-actions", {actions} }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn actions_are_optional() {
        let mut dom = VirtualDom::new(|| {
            rsx! { PageHeader { title: "Payroll Management", subtitle: "Salary and CPF" } }
        });
        dom.rebuild_in_place();
        let html = dioxus_ssr::render(&dom);
        assert!(html.contains("Payroll Management"), "{html}");
        assert!(!html.contains("page-actions"), "{html}");
    }
}
