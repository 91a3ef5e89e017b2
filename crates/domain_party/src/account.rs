//! User account entity

use chrono::{DateTime, Utc};
use core_kernel::UserId;
use serde::{Deserialize, Serialize};

/// A registered user of the system
///
/// The username is an opaque identity key to the rest of the core;
/// nothing downstream parses or validates it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserAccount {
    id: UserId,
    username: String,
    created_at: DateTime<Utc>,
}

impl UserAccount {
    /// Creates a new account with a fresh identifier
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            id: UserId::new_v7(),
            username: username.into(),
            created_at: Utc::now(),
        }
    }

    /// Returns the account ID
    pub fn id(&self) -> UserId {
        self.id
    }

    /// Returns the username
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Returns the registration timestamp
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
