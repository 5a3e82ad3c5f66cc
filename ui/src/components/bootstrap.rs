//! Bootstrap 5 stylesheet and JS bundle.
//!
//! The navbar's collapse toggle relies on the bundle's collapse plugin, so
//! every platform shell mounts this once at the root.

use dioxus::prelude::*;

pub const BOOTSTRAP_CSS: &str =
    "https://cdn.jsdelivr.net/npm/bootstrap@5.3.3/dist/css/bootstrap.min.css";
pub const BOOTSTRAP_JS: &str =
    "https://cdn.jsdelivr.net/npm/bootstrap@5.3.3/dist/js/bootstrap.bundle.min.js";

#[component]
pub fn Bootstrap() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: BOOTSTRAP_CSS }
        document::Script { src: BOOTSTRAP_JS }
    }
}
