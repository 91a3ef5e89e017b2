//! Test Utilities Crate
//!
//! Provides shared builders and fixtures for the policy administration
//! test suite.
//!
//! # Modules
//!
//! - `builders`: Builder patterns for risk-profile test data

pub mod builders;

pub use builders::*;
