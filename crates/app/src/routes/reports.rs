use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::LdTrendingUp;
use dioxus_free_icons::Icon;
use shared_ui::{Card, CardContent};

#[component]
pub fn Reports() -> Element {
    rsx! {
        div { class: "module-page",
            Card {
                CardContent {
                    div { class: "coming-soon",
                        Icon::<LdTrendingUp> { icon: LdTrendingUp, width: 32, height: 32 }
                        p { "Reports & Analytics - Coming Soon" }
                    }
                }
            }
        }
    }
}
