//! Party domain errors

use thiserror::Error;

/// Errors that can occur at the identity boundary
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PartyError {
    /// Registration collided with an existing username
    #[error("Username already taken: {0}")]
    DuplicateUsername(String),

    /// Credentials did not match a registered account
    ///
    /// Deliberately carries no detail about which part failed.
    #[error("Authentication failed")]
    AuthenticationFailed,
}
