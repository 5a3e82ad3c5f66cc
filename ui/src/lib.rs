//! Shared UI crate for the FullStack application: the navigation bar, the user
//! views and localization. Platform crates only add routing and launch.

pub mod i18n;
pub mod views;

pub mod components {
    // Bootstrap CSS/JS collaborator (components/bootstrap.rs)
    pub mod bootstrap;
    pub use bootstrap::Bootstrap;

    // Branded header with collapse toggle and "add user" link (components/navbar.rs)
    pub mod navbar;
    pub use navbar::register_nav;
    pub use navbar::NavBuilder;
    pub use navbar::Navbar;
}
