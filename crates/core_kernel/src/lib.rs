//! Core Kernel - Foundational types for the policy administration core
//!
//! This crate provides the building blocks shared by the domain modules:
//! - Money types with precise decimal arithmetic
//! - The annual policy term
//! - Strongly-typed identifiers

pub mod identifiers;
pub mod money;
pub mod temporal;

pub use identifiers::{PolicyId, UserId};
pub use money::{Currency, Money, MoneyError, Rate};
pub use temporal::PolicyTerm;
