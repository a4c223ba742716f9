//! Dioxus component kit for the SecureOps dashboard.
//!
//! Every component links its own stylesheet; colours come from the CSS
//! custom properties defined by the app's base theme.

pub mod components;

pub use components::*;
