use crate::format_helpers::tone_variant;
use dioxus::prelude::*;
use shared_types::Status;
use shared_ui::Badge;

/// Badge for any record status, styled by its tone.
pub fn status_badge(status: &impl Status) -> Element {
    let label = status.label();
    rsx! {
        Badge { variant: tone_variant(status.tone()), "{label}" }
    }
}
