use dioxus::logger::tracing;
use dioxus::prelude::*;

use ui::components::navbar::{BACK_LINK_CLASS, LINK_CLASS};
use ui::components::{register_nav, Bootstrap, NavBuilder, Navbar};
use ui::views::{AddUser, Home};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(WebNavbar)]
    #[route("/")]
    Home {},
    #[route("/add-user")]
    AddUser {},
}

const MAIN_CSS: Asset = asset!("/assets/main.css");
const THEME_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

fn nav_add_user(label: &str) -> Element {
    rsx!(Link {
        class: LINK_CLASS,
        to: Route::AddUser {},
        "{label}"
    })
}

fn nav_home(label: &str) -> Element {
    rsx!(Link {
        class: BACK_LINK_CLASS,
        to: Route::Home {},
        "{label}"
    })
}

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    ui::i18n::init();
    register_nav(NavBuilder {
        add_user: nav_add_user,
        home: nav_home,
    });
    use_hook(|| tracing::info!(version = env!("CARGO_PKG_VERSION"), "web shell mounted"));

    rsx! {
        Bootstrap {}
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Style { "{THEME_CSS_INLINE}" }

        Router::<Route> {}
    }
}

/// Web layout: the shared `Navbar` above the routed view.
#[component]
fn WebNavbar() -> Element {
    rsx! {
        Navbar {}
        Outlet::<Route> {}
    }
}
