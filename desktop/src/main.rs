#![cfg_attr(all(windows, not(debug_assertions)), windows_subsystem = "windows")]

#[cfg(feature = "desktop")]
use std::path::PathBuf;

#[cfg(feature = "desktop")]
use dioxus::desktop::{tao::window::WindowBuilder, Config};
use dioxus::logger::tracing;
use dioxus::prelude::*;

#[cfg(feature = "desktop")]
use ui::components::navbar::BRAND_LABEL;
use ui::components::navbar::{BACK_LINK_CLASS, LINK_CLASS};
use ui::components::{register_nav, Bootstrap, NavBuilder, Navbar};
use ui::views::{AddUser, Home};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(DesktopNavbar)]
    #[route("/")]
    Home {},
    #[route("/add-user")]
    AddUser {},
}

/// Overrides where the desktop shell sends server-function calls.
#[cfg(feature = "desktop")]
const SERVER_URL_VAR: &str = "FULLSTACK_SERVER_URL";
#[cfg(feature = "desktop")]
const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:8080";

const MAIN_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

#[cfg(feature = "desktop")]
fn main() {
    let server_url = std::env::var(SERVER_URL_VAR).unwrap_or_else(|_| DEFAULT_SERVER_URL.to_string());
    dioxus::fullstack::prelude::server_fn::client::set_server_url(server_url.leak());

    LaunchBuilder::desktop()
        .with_cfg(
            Config::new()
                .with_window(
                    WindowBuilder::new()
                        .with_title(format!("{BRAND_LABEL} – v{}", env!("CARGO_PKG_VERSION"))),
                )
                .with_resource_directory(resolve_resource_dir()),
        )
        .launch(App);
}

#[cfg(all(feature = "server", not(feature = "desktop")))]
fn main() {
    LaunchBuilder::server().launch(App);
}

fn nav_add_user(label: &str) -> Element {
    rsx!(Link { class: LINK_CLASS, to: Route::AddUser {}, "{label}" })
}

fn nav_home(label: &str) -> Element {
    rsx!(Link { class: BACK_LINK_CLASS, to: Route::Home {}, "{label}" })
}

#[component]
fn App() -> Element {
    ui::i18n::init();
    register_nav(NavBuilder {
        add_user: nav_add_user,
        home: nav_home,
    });
    use_hook(|| tracing::info!(version = env!("CARGO_PKG_VERSION"), "desktop shell mounted"));

    rsx! {
        // Theme is always inlined; packaged builds carry no external CSS file.
        document::Style { "{MAIN_CSS_INLINE}" }
        Bootstrap {}

        Router::<Route> {}
    }
}

#[cfg(feature = "desktop")]
fn resolve_resource_dir() -> PathBuf {
    #[cfg(debug_assertions)]
    {
        PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/assets"))
    }

    #[cfg(not(debug_assertions))]
    {
        std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(|dir| dir.join("assets")))
            .unwrap_or_else(|| PathBuf::from("assets"))
    }
}

/// Desktop layout: the shared `Navbar` above the routed view.
#[component]
fn DesktopNavbar() -> Element {
    rsx! {
        Navbar {}

        Outlet::<Route> {}
    }
}
