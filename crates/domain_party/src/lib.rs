//! Party Domain
//!
//! User accounts and the identity boundary for the policy administration
//! core. The core never stores or hashes credentials itself; it talks to
//! a [`CredentialStore`] port, and hosts inject whichever adapter suits
//! them. An in-memory adapter ships here for single-process use and
//! tests.

pub mod account;
pub mod adapters;
pub mod error;
pub mod ports;

pub use account::UserAccount;
pub use adapters::InMemoryCredentialStore;
pub use error::PartyError;
pub use ports::CredentialStore;
