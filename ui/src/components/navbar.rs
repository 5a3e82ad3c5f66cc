use crate::i18n;
use crate::t;
use dioxus::logger::tracing;
use dioxus::prelude::*;
use once_cell::sync::OnceCell;

const NAVBAR_CSS: Asset = asset!("/assets/styling/navbar.css");
const NAVBAR_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/styling/navbar.css"
));

/// Brand text shown at the left of the bar. Never localized.
pub const BRAND_LABEL: &str = "FullStack Application";
/// Route the single navigation control points at.
pub const ADD_USER_TARGET: &str = "add-user";
/// Id of the collapsible region the toggle button controls.
pub const COLLAPSE_REGION_ID: &str = "navbarNav";
/// Bootstrap classes applied to the navigation control.
pub const LINK_CLASS: &str = "btn btn-outline-light";
/// Route of the user list.
pub const HOME_TARGET: &str = "/";
/// Bootstrap classes for the in-page "back to users" link.
pub const BACK_LINK_CLASS: &str = "btn btn-outline-secondary";

/// Platforms register a `NavBuilder` so the navigation control is a real router
/// `Link` (client-side navigation) without `ui` knowing the platform's `Route`
/// enum.
///
/// Each closure receives the localized label and must return a link to its
/// target containing exactly that label:
/// ```ignore
/// register_nav(NavBuilder {
///     add_user: |label| rsx!( Link { class: LINK_CLASS, to: Route::AddUser {}, "{label}" } ),
///     home: |label| rsx!( Link { class: BACK_LINK_CLASS, to: Route::Home {}, "{label}" } ),
/// });
/// ```
///
/// Without a registered builder plain anchors with the same targets are
/// emitted, which is what server-side rendering and tests see.
pub struct NavBuilder {
    /// The navbar's single navigation control (`ADD_USER_TARGET`).
    pub add_user: fn(label: &str) -> Element,
    /// Way back to the user list (`HOME_TARGET`), used by views.
    pub home: fn(label: &str) -> Element,
}

static NAV_BUILDER: OnceCell<NavBuilder> = OnceCell::new();

/// Install the platform link builder. Only the first registration wins.
pub fn register_nav(builder: NavBuilder) {
    if NAV_BUILDER.set(builder).is_err() {
        tracing::debug!("navigation builder already registered; keeping the first one");
    }
}

/// Link back to the user list, built by the platform router when registered.
pub fn home_link(label: &str) -> Element {
    match NAV_BUILDER.get() {
        Some(builder) => (builder.home)(label),
        None => rsx! {
            a { class: BACK_LINK_CLASS, href: HOME_TARGET, "{label}" }
        },
    }
}

/// Fixed header: brand, collapse toggle and the "add user" link.
///
/// The toggle only carries Bootstrap's collapse data attributes; open/closed
/// state lives in the collapse plugin, not here.
#[component]
pub fn Navbar() -> Element {
    i18n::init();

    let link_label = t!("nav-add-user");
    let toggle_label = t!("nav-toggle-label");

    let link = match NAV_BUILDER.get() {
        Some(builder) => (builder.add_user)(&link_label),
        None => rsx! {
            a { class: LINK_CLASS, href: ADD_USER_TARGET, "{link_label}" }
        },
    };

    rsx! {
        document::Link { rel: "stylesheet", href: NAVBAR_CSS }
        if cfg!(all(not(debug_assertions), not(target_arch = "wasm32"))) {
            document::Style { "{NAVBAR_CSS_INLINE}" }
        }

        nav { class: "navbar navbar-expand-lg navbar-dark bg-primary bg-body-blue",
            div { class: "container-fluid",
                span { class: "navbar-brand text-dark border-light", "{BRAND_LABEL}" }
                button {
                    class: "navbar-toggler",
                    r#type: "button",
                    "data-bs-toggle": "collapse",
                    "data-bs-target": "#{COLLAPSE_REGION_ID}",
                    aria_controls: COLLAPSE_REGION_ID,
                    aria_expanded: "false",
                    aria_label: "{toggle_label}",
                    onclick: move |_| {
                        tracing::debug!(region = COLLAPSE_REGION_ID, "collapse toggle requested");
                    },
                    span { class: "navbar-toggler-icon" }
                }
                div { class: "collapse navbar-collapse", id: COLLAPSE_REGION_ID,
                    {link}
                }
            }
        }
    }
}
