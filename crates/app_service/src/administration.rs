//! Policy administration service
//!
//! Owns the per-user policy books and orchestrates every lifecycle
//! operation against them. Policies are addressed by their position in
//! the owner's book, matching the order [`list_policies`] reports.
//!
//! Everything is in-memory and single-threaded: no operation blocks,
//! suspends, or runs concurrently with another. A concurrent host must
//! serialize access to a given user's book.
//!
//! [`list_policies`]: PolicyAdministration::list_policies

use std::collections::HashMap;
use tracing::info;

use core_kernel::UserId;
use domain_party::{CredentialStore, UserAccount};
use domain_policy::rating::{self, CrossPolicyContext};
use domain_policy::{Policy, PolicyBook, PolicyError, PolicyRisk, PremiumQuote};

use crate::error::ServiceError;

/// Composition root for the policy administration core
///
/// Constructed with an injected credential store; there is no
/// process-wide registry. Dropping the service drops all state.
pub struct PolicyAdministration {
    credentials: Box<dyn CredentialStore>,
    books: HashMap<UserId, PolicyBook>,
}

impl PolicyAdministration {
    /// Creates the service around the given credential store
    pub fn new(credentials: Box<dyn CredentialStore>) -> Self {
        Self {
            credentials,
            books: HashMap::new(),
        }
    }

    /// Registers a new user and provisions an empty policy book
    ///
    /// # Errors
    ///
    /// Surfaces [`domain_party::PartyError::DuplicateUsername`] from the
    /// store.
    pub fn register(
        &mut self,
        username: &str,
        password: &str,
    ) -> Result<UserAccount, ServiceError> {
        let account = self.credentials.register(username, password)?;
        self.books.insert(account.id(), PolicyBook::new());
        Ok(account)
    }

    /// Resolves credentials to a registered account
    ///
    /// # Errors
    ///
    /// Surfaces [`domain_party::PartyError::AuthenticationFailed`] from
    /// the store.
    pub fn login(&mut self, username: &str, password: &str) -> Result<UserAccount, ServiceError> {
        let account = self.credentials.authenticate(username, password)?;
        // The store may have been seeded outside register(); make sure a
        // book exists for anyone who can log in.
        self.books.entry(account.id()).or_default();
        Ok(account)
    }

    /// Produces a stateless quote for the given risk profile
    ///
    /// No owner context is attached, so cross-policy discounts never
    /// apply, and nothing is persisted.
    pub fn quote(&self, risk: &PolicyRisk) -> PremiumQuote {
        rating::rate(risk, &CrossPolicyContext::none())
    }

    /// Starts a new policy for the user and rates it immediately
    ///
    /// The discount context is the owner's book at creation time. The
    /// context only inspects the complementary line, so rating before
    /// the append is identical to rating against the full book after it:
    /// the new policy can never discount against itself.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::UnknownUser`] for an unprovisioned user.
    pub fn start_policy(
        &mut self,
        user: UserId,
        risk: PolicyRisk,
    ) -> Result<Policy, ServiceError> {
        let book = self
            .books
            .get_mut(&user)
            .ok_or(ServiceError::UnknownUser(user))?;

        let ctx = book.cross_policy_context();
        let mut policy = Policy::new(risk);
        let quote = rating::rate(policy.risk(), &ctx);
        policy.record_premium(quote.total);

        info!(
            user_id = %user,
            policy_id = %policy.id(),
            kind = %policy.kind(),
            total = %quote.total,
            "policy started"
        );

        Ok(book.add(policy).clone())
    }

    /// Returns the user's policies in insertion order
    pub fn list_policies(&self, user: UserId) -> Result<&[Policy], ServiceError> {
        self.books
            .get(&user)
            .map(PolicyBook::policies)
            .ok_or(ServiceError::UnknownUser(user))
    }

    /// Renews the policy at the given position for another year
    ///
    /// Renewal resets the term dates only; it never recomputes the
    /// premium and never reactivates a canceled policy.
    pub fn renew_policy(&mut self, user: UserId, index: usize) -> Result<(), ServiceError> {
        let policy = self.policy_mut(user, index)?;
        policy.renew();
        info!(user_id = %user, policy_id = %policy.id(), "policy renewed");
        Ok(())
    }

    /// Cancels the policy at the given position; idempotent
    ///
    /// The policy stays in the book until explicitly removed.
    pub fn cancel_policy(&mut self, user: UserId, index: usize) -> Result<(), ServiceError> {
        let policy = self.policy_mut(user, index)?;
        policy.cancel();
        info!(user_id = %user, policy_id = %policy.id(), "policy canceled");
        Ok(())
    }

    /// Cancels the policy at the given position and removes it from the
    /// book, returning the removed policy
    pub fn cancel_and_remove(
        &mut self,
        user: UserId,
        index: usize,
    ) -> Result<Policy, ServiceError> {
        let book = self
            .books
            .get_mut(&user)
            .ok_or(ServiceError::UnknownUser(user))?;
        if let Some(policy) = book.get_mut(index) {
            policy.cancel();
        }
        let removed = book.remove_at(index)?;
        info!(user_id = %user, policy_id = %removed.id(), "policy removed");
        Ok(removed)
    }

    fn policy_mut(&mut self, user: UserId, index: usize) -> Result<&mut Policy, ServiceError> {
        let book = self
            .books
            .get_mut(&user)
            .ok_or(ServiceError::UnknownUser(user))?;
        let len = book.len();
        book.get_mut(index)
            .ok_or_else(|| PolicyError::IndexOutOfRange { index, len }.into())
    }
}
