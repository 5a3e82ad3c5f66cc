//! In-memory user store with generated ids.

use std::collections::BTreeMap;
use std::sync::{Mutex, PoisonError};

use crate::{NewUser, User, UserError};

#[derive(Debug, Default)]
struct Inner {
    next_id: u64,
    users: BTreeMap<u64, User>,
}

/// Thread-safe user store. Ids start at 1 and increase monotonically.
#[derive(Debug, Default)]
pub struct UserDirectory {
    inner: Mutex<Inner>,
}

impl UserDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&self, draft: NewUser) -> Result<User, UserError> {
        let draft = draft.validate()?;
        let mut inner = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        inner.next_id += 1;
        let user = draft.into_user(inner.next_id);
        inner.users.insert(user.id, user.clone());
        Ok(user)
    }

    pub fn get(&self, id: u64) -> Result<User, UserError> {
        let inner = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        inner
            .users
            .get(&id)
            .cloned()
            .ok_or(UserError::NotFound { id })
    }

    pub fn list(&self) -> Vec<User> {
        let inner = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        inner.users.values().cloned().collect()
    }
}
