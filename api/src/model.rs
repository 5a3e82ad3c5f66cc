use serde::{Deserialize, Serialize};

use crate::UserError;

/// A registered user. `id` is assigned by the directory and never reused.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: u64,
    pub username: String,
    pub name: String,
    pub email: String,
}

/// Form payload for creating a user (no id yet).
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewUser {
    pub username: String,
    pub name: String,
    pub email: String,
}

impl NewUser {
    pub fn new<T: Into<String>>(username: T, name: T, email: T) -> Self {
        Self {
            username: username.into(),
            name: name.into(),
            email: email.into(),
        }
    }

    /// Trim every field and check it is usable.
    pub fn validate(self) -> Result<Self, UserError> {
        let username = self.username.trim().to_string();
        let name = self.name.trim().to_string();
        let email = self.email.trim().to_string();

        if username.is_empty() {
            return Err(UserError::Invalid {
                field: "username",
                reason: "must not be empty",
            });
        }
        if name.is_empty() {
            return Err(UserError::Invalid {
                field: "name",
                reason: "must not be empty",
            });
        }
        if !is_plausible_email(&email) {
            return Err(UserError::Invalid {
                field: "email",
                reason: "must contain a single '@'",
            });
        }

        Ok(Self {
            username,
            name,
            email,
        })
    }

    pub(crate) fn into_user(self, id: u64) -> User {
        User {
            id,
            username: self.username,
            name: self.name,
            email: self.email,
        }
    }
}

fn is_plausible_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => !local.is_empty() && !domain.is_empty() && !domain.contains('@'),
        None => false,
    }
}
