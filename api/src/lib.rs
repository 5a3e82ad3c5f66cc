//! Server-side user directory for the FullStack application.
//!
//! The model and directory are plain Rust and usable from every platform; the
//! server functions below only execute their bodies when the `server` feature
//! is enabled and are called as RPC stubs everywhere else.

use dioxus::prelude::*;

mod directory;
mod error;
mod model;

pub use directory::UserDirectory;
pub use error::UserError;
pub use model::{NewUser, User};

#[cfg(feature = "server")]
static DIRECTORY: once_cell::sync::Lazy<UserDirectory> =
    once_cell::sync::Lazy::new(UserDirectory::new);

/// Register a new user and return it with its generated id.
#[server]
pub async fn add_user(draft: NewUser) -> Result<User, ServerFnError> {
    let user = DIRECTORY.add(draft).map_err(ServerFnError::new)?;
    dioxus::logger::tracing::info!(id = user.id, username = %user.username, "user added");
    Ok(user)
}

/// Look a user up by id.
#[server]
pub async fn get_user(id: u64) -> Result<User, ServerFnError> {
    DIRECTORY.get(id).map_err(ServerFnError::new)
}

/// Every registered user, ordered by id.
#[server]
pub async fn list_users() -> Result<Vec<User>, ServerFnError> {
    Ok(DIRECTORY.list())
}
