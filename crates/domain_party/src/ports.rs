//! Party Domain Ports
//!
//! The `CredentialStore` trait is the identity boundary of the core.
//! Credential handling (hashing, persistence, lockout policy) belongs to
//! the adapter behind it; the core only consumes the resolve/register
//! contract.
//!
//! # Usage
//!
//! ```rust,ignore
//! use domain_party::{CredentialStore, InMemoryCredentialStore};
//!
//! // The composition root receives the port, not a concrete store
//! let store: Box<dyn CredentialStore> = Box::new(InMemoryCredentialStore::new());
//! let admin = PolicyAdministration::new(store);
//! ```

use crate::account::UserAccount;
use crate::error::PartyError;

/// Port for registering and authenticating users
///
/// Implementations own credential storage entirely. The execution model
/// is single-threaded and synchronous; a concurrent host must serialize
/// access itself.
pub trait CredentialStore: Send {
    /// Registers a new user
    ///
    /// # Errors
    ///
    /// Returns [`PartyError::DuplicateUsername`] if the username is
    /// already registered.
    fn register(&mut self, username: &str, password: &str) -> Result<UserAccount, PartyError>;

    /// Resolves credentials to the registered account
    ///
    /// # Errors
    ///
    /// Returns [`PartyError::AuthenticationFailed`] when the username is
    /// unknown or the password does not match.
    fn authenticate(&self, username: &str, password: &str) -> Result<UserAccount, PartyError>;
}
