//! The per-user policy book
//!
//! A [`PolicyBook`] owns the ordered collection of one user's policies.
//! Insertion order is preserved and is display order only. There is no
//! dedup and no limit on the count or mix of lines.
//!
//! # Invariant
//!
//! The cross-policy discount context for a new policy is evaluated
//! against the owner's book as it exists when the policy is created. The
//! context only inspects the complementary line, so a policy can never
//! discount against itself.

use serde::{Deserialize, Serialize};

use crate::error::PolicyError;
use crate::policy::Policy;
use crate::rating::CrossPolicyContext;
use crate::risk::PolicyKind;

/// Ordered collection of one user's policies
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PolicyBook {
    policies: Vec<Policy>,
}

impl PolicyBook {
    /// Creates an empty book
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a policy and returns a reference to the stored entry
    pub fn add(&mut self, policy: Policy) -> &Policy {
        self.policies.push(policy);
        &self.policies[self.policies.len() - 1]
    }

    /// Returns the policies in insertion order
    pub fn policies(&self) -> &[Policy] {
        &self.policies
    }

    /// Returns the number of policies, active or not
    pub fn len(&self) -> usize {
        self.policies.len()
    }

    /// Returns true if the book holds no policies
    pub fn is_empty(&self) -> bool {
        self.policies.is_empty()
    }

    /// Returns the policy at the given position
    pub fn get(&self, index: usize) -> Option<&Policy> {
        self.policies.get(index)
    }

    /// Returns the policy at the given position, mutably
    pub fn get_mut(&mut self, index: usize) -> Option<&mut Policy> {
        self.policies.get_mut(index)
    }

    /// Returns true if any policy of the given line is active
    pub fn has_active(&self, kind: PolicyKind) -> bool {
        self.policies
            .iter()
            .any(|p| p.kind() == kind && p.is_active())
    }

    /// Counts the active policies of the given line
    pub fn count_active(&self, kind: PolicyKind) -> usize {
        self.policies
            .iter()
            .filter(|p| p.kind() == kind && p.is_active())
            .count()
    }

    /// Snapshots the active-line booleans the rating engine discounts on
    pub fn cross_policy_context(&self) -> CrossPolicyContext {
        CrossPolicyContext {
            has_active_auto: self.has_active(PolicyKind::Auto),
            has_active_home: self.has_active(PolicyKind::Home),
        }
    }

    /// Removes and returns the policy at the given position
    ///
    /// # Errors
    ///
    /// Returns [`PolicyError::IndexOutOfRange`] when `index` falls
    /// outside `[0, len)`; the book is left unmodified.
    pub fn remove_at(&mut self, index: usize) -> Result<Policy, PolicyError> {
        if index >= self.policies.len() {
            return Err(PolicyError::IndexOutOfRange {
                index,
                len: self.policies.len(),
            });
        }
        Ok(self.policies.remove(index))
    }
}
