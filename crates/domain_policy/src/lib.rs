//! Policy Administration Domain
//!
//! This crate implements the core policy administration logic for the
//! personal-lines book: risk profiles, premium rating, the policy
//! lifecycle, and the per-user policy collection.
//!
//! # Architecture
//!
//! The domain layer is infrastructure-agnostic, containing only business
//! logic:
//! - **Value Objects**: `Vehicle`, `AutoRisk`, `HomeRisk`, `PolicyRisk`
//! - **Aggregate**: `Policy`, a small state machine over an annual term
//! - **Domain Services**: the pure rating engine in [`rating`]
//! - **Collection**: `PolicyBook`, the ordered per-user policy holding
//! - **Domain Events**: `PolicyEvent`
//!
//! # Policy Lifecycle
//!
//! ```text
//! Active -> Canceled
//! ```
//!
//! `Canceled` is terminal; renewal resets the term dates in any state but
//! never reactivates a canceled policy.
//!
//! # Example
//!
//! ```rust,ignore
//! use domain_policy::{Policy, PolicyRisk, rating};
//!
//! let mut policy = Policy::new(PolicyRisk::Auto(auto_risk));
//! let quote = rating::rate(policy.risk(), &book.cross_policy_context());
//! policy.record_premium(quote.total);
//! book.add(policy);
//! ```

pub mod book;
pub mod error;
pub mod events;
pub mod policy;
pub mod rating;
pub mod risk;

pub use book::PolicyBook;
pub use error::PolicyError;
pub use events::PolicyEvent;
pub use policy::{Policy, PolicyStatus};
pub use rating::{CrossPolicyContext, PremiumQuote};
pub use risk::{AutoRisk, HeatingType, HomeRisk, Location, PolicyKind, PolicyRisk, Vehicle};
