//! In-memory credential store
//!
//! Process-local adapter for single-tenant use and tests. Nothing
//! survives a restart, and passwords are held verbatim; a production
//! host would put a hashing store behind the same port.

use std::collections::HashMap;
use tracing::info;

use crate::account::UserAccount;
use crate::error::PartyError;
use crate::ports::CredentialStore;

struct StoredUser {
    account: UserAccount,
    password: String,
}

/// HashMap-backed implementation of [`CredentialStore`]
#[derive(Default)]
pub struct InMemoryCredentialStore {
    users: HashMap<String, StoredUser>,
}

impl InMemoryCredentialStore {
    /// Creates an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of registered users
    pub fn len(&self) -> usize {
        self.users.len()
    }

    /// Returns true if no users are registered
    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

impl CredentialStore for InMemoryCredentialStore {
    fn register(&mut self, username: &str, password: &str) -> Result<UserAccount, PartyError> {
        if self.users.contains_key(username) {
            return Err(PartyError::DuplicateUsername(username.to_string()));
        }

        let account = UserAccount::new(username);
        self.users.insert(
            username.to_string(),
            StoredUser {
                account: account.clone(),
                password: password.to_string(),
            },
        );
        info!(user_id = %account.id(), username, "user registered");
        Ok(account)
    }

    fn authenticate(&self, username: &str, password: &str) -> Result<UserAccount, PartyError> {
        match self.users.get(username) {
            Some(stored) if stored.password == password => Ok(stored.account.clone()),
            _ => Err(PartyError::AuthenticationFailed),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_then_authenticate() {
        let mut store = InMemoryCredentialStore::new();
        let registered = store.register("taylor", "hunter2").unwrap();
        let resolved = store.authenticate("taylor", "hunter2").unwrap();

        assert_eq!(registered, resolved);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_duplicate_username_is_rejected() {
        let mut store = InMemoryCredentialStore::new();
        store.register("taylor", "first").unwrap();

        let err = store.register("taylor", "second").unwrap_err();
        assert_eq!(err, PartyError::DuplicateUsername("taylor".to_string()));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_bad_credentials_fail_uniformly() {
        let mut store = InMemoryCredentialStore::new();
        store.register("taylor", "hunter2").unwrap();

        assert_eq!(
            store.authenticate("taylor", "wrong").unwrap_err(),
            PartyError::AuthenticationFailed
        );
        assert_eq!(
            store.authenticate("nobody", "hunter2").unwrap_err(),
            PartyError::AuthenticationFailed
        );
    }
}
