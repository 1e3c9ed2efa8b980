use dashmap::DashMap;
use dashmap::mapref::entry::Entry;

use super::models::UserAccount;
use crate::errors::{Result, TinylinkError};

/// In-memory account registry keyed by username
#[derive(Default)]
pub struct UserStore {
    users: DashMap<String, UserAccount>,
}

impl UserStore {
    pub fn new() -> Self {
        Self {
            users: DashMap::new(),
        }
    }

    /// Register an account; an existing username is never replaced.
    pub fn insert(&self, account: UserAccount) -> Result<()> {
        match self.users.entry(account.username.clone()) {
            Entry::Occupied(_) => Err(TinylinkError::conflict(format!(
                "Username '{}' is already taken",
                account.username
            ))),
            Entry::Vacant(slot) => {
                slot.insert(account);
                Ok(())
            }
        }
    }

    pub fn get(&self, username: &str) -> Option<UserAccount> {
        self.users.get(username).map(|entry| entry.value().clone())
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}
