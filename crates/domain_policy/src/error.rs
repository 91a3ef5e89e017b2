//! Policy domain errors

use thiserror::Error;

/// Errors that can occur in the policy domain
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PolicyError {
    /// Position-based lookup fell outside the policy book
    #[error("Policy index {index} is out of range for a book of {len}")]
    IndexOutOfRange { index: usize, len: usize },
}
