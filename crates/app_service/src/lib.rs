//! Application Service Layer
//!
//! The composition root of the policy administration core. It wires the
//! injected credential store to the per-user policy books and exposes
//! the operations a host (CLI, API, test harness) drives: registration,
//! login, quoting, policy creation, renewal, cancellation, listing, and
//! removal.
//!
//! The input boundary hands this layer already-parsed attribute records
//! ([`domain_policy::PolicyRisk`]); raw text handling lives with the
//! host.

pub mod administration;
pub mod error;

pub use administration::PolicyAdministration;
pub use error::ServiceError;
