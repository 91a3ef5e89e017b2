//! Application service errors

use core_kernel::UserId;
use domain_party::PartyError;
use domain_policy::PolicyError;
use thiserror::Error;

/// Errors surfaced by the application service
///
/// Every error is terminal for the requested operation; nothing here is
/// transient or retryable.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ServiceError {
    /// Identity boundary failure (duplicate username, bad credentials)
    #[error(transparent)]
    Party(#[from] PartyError),

    /// Policy domain failure (bad index selection)
    #[error(transparent)]
    Policy(#[from] PolicyError),

    /// The user ID does not map to a provisioned policy book
    #[error("Unknown user: {0}")]
    UnknownUser(UserId),
}
