use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaMagnifyingGlass;
use dioxus_free_icons::Icon;

/// Search field with a leading magnifier, followed by optional filter
/// controls passed as children.
#[component]
pub fn SearchBar(
    value: String,
    on_search: EventHandler<String>,
    #[props(default = "Search...".to_string())] placeholder: String,
    children: Element,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "search-bar",
            div { class: "search-bar-field",
                span { class: "search-bar-icon",
                    Icon::<FaMagnifyingGlass> { icon: FaMagnifyingGlass, width: 14, height: 14 }
                }
                input {
                    class: "search-bar-input",
                    r#type: "search",
                    value: value,
                    placeholder: placeholder,
                    oninput: move |evt: FormEvent| on_search.call(evt.value()),
                }
            }
            {children}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_term_and_filters() {
        let mut dom = VirtualDom::new(|| {
            rsx! {
                SearchBar {
                    value: "marina",
                    on_search: |_| {},
                    placeholder: "Search clients...",
                    select { class: "status-filter", option { "all" } }
                }
            }
        });
        dom.rebuild_in_place();
        let html = dioxus_ssr::render(&dom);
        assert!(html.contains(r#"value="marina""#), "{html}");
        assert!(html.contains("Search clients..."), "{html}");
        assert!(html.contains("status-filter"), "{html}");
    }
}
