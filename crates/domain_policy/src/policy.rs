//! The Policy aggregate
//!
//! A policy wraps one risk profile together with its annual term, its
//! lifecycle status, and the premium the rating engine produced for it.
//!
//! # Invariants
//!
//! - The total premium is absent until the first rating and unchanged by
//!   renewal or cancellation
//! - The term end is always exactly one year after the term start
//! - `Canceled` is terminal: no operation flips a policy back to active
//!
//! Renewal intentionally resets the term dates without touching the
//! status. Renewing a canceled policy therefore moves its dates but does
//! NOT reactivate it; callers must not infer coverage from the term
//! alone.

use chrono::{DateTime, Utc};
use core_kernel::{Money, PolicyId, PolicyTerm};
use serde::{Deserialize, Serialize};

use crate::events::PolicyEvent;
use crate::risk::{PolicyKind, PolicyRisk};

/// Policy lifecycle states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PolicyStatus {
    /// Coverage is in force
    Active,
    /// Coverage was canceled; terminal
    Canceled,
}

/// An insurance policy over a single risk profile
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Policy {
    id: PolicyId,
    risk: PolicyRisk,
    base_premium: Money,
    total_premium: Option<Money>,
    term: PolicyTerm,
    status: PolicyStatus,
    #[serde(skip)]
    events: Vec<PolicyEvent>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Policy {
    /// Opens a new active policy over the given risk
    ///
    /// The term runs one year from today. The premium stays unrated until
    /// [`record_premium`](Self::record_premium) is called.
    pub fn new(risk: PolicyRisk) -> Self {
        let now = Utc::now();
        let id = PolicyId::new_v7();
        let term = PolicyTerm::starting_today();
        let base_premium = risk.kind().base_premium();

        Self {
            id,
            base_premium,
            total_premium: None,
            term,
            status: PolicyStatus::Active,
            events: vec![PolicyEvent::Created {
                policy_id: id,
                kind: risk.kind(),
                term,
                timestamp: now,
            }],
            risk,
            created_at: now,
            updated_at: now,
        }
    }

    /// Returns the policy ID
    pub fn id(&self) -> PolicyId {
        self.id
    }

    /// Returns the line of business
    pub fn kind(&self) -> PolicyKind {
        self.risk.kind()
    }

    /// Returns the risk profile
    pub fn risk(&self) -> &PolicyRisk {
        &self.risk
    }

    /// Returns the fixed base premium for this line
    pub fn base_premium(&self) -> Money {
        self.base_premium
    }

    /// Returns the rated total premium, if rating has run
    pub fn total_premium(&self) -> Option<Money> {
        self.total_premium
    }

    /// Returns the current annual term
    pub fn term(&self) -> PolicyTerm {
        self.term
    }

    /// Returns the lifecycle status
    pub fn status(&self) -> PolicyStatus {
        self.status
    }

    /// Returns true if coverage is in force
    pub fn is_active(&self) -> bool {
        matches!(self.status, PolicyStatus::Active)
    }

    /// Stores the rated total premium
    ///
    /// Rating never changes the lifecycle state; a canceled policy keeps
    /// whatever premium was last recorded against it.
    pub fn record_premium(&mut self, total: Money) {
        let now = Utc::now();
        self.total_premium = Some(total);
        self.updated_at = now;
        self.events.push(PolicyEvent::PremiumRated {
            policy_id: self.id,
            total,
            timestamp: now,
        });
    }

    /// Renews the policy for another year from today
    ///
    /// Valid in any state: the term resets, the status and premium do
    /// not. This does not reactivate a canceled policy.
    pub fn renew(&mut self) {
        let now = Utc::now();
        self.term = PolicyTerm::starting_today();
        self.updated_at = now;
        self.events.push(PolicyEvent::Renewed {
            policy_id: self.id,
            term: self.term,
            timestamp: now,
        });
    }

    /// Cancels the policy; idempotent
    ///
    /// Cancellation does not remove the policy from its owner's book;
    /// removal is a separate orchestration step.
    pub fn cancel(&mut self) {
        if matches!(self.status, PolicyStatus::Canceled) {
            return;
        }
        let now = Utc::now();
        self.status = PolicyStatus::Canceled;
        self.updated_at = now;
        self.events.push(PolicyEvent::Canceled {
            policy_id: self.id,
            timestamp: now,
        });
    }

    /// Returns accumulated domain events and clears them
    pub fn take_events(&mut self) -> Vec<PolicyEvent> {
        std::mem::take(&mut self.events)
    }

    /// Returns the creation timestamp
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the last-update timestamp
    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::risk::{AutoRisk, Vehicle};
    use core_kernel::Currency;
    use rust_decimal_macros::dec;

    fn auto_policy() -> Policy {
        Policy::new(PolicyRisk::Auto(AutoRisk::new(
            30,
            0,
            Vehicle::new("Toyota", "Corolla", 2022),
        )))
    }

    #[test]
    fn test_new_policy_is_active_and_unrated() {
        let policy = auto_policy();
        assert!(policy.is_active());
        assert_eq!(policy.total_premium(), None);
        assert_eq!(policy.base_premium().amount(), dec!(750));
    }

    #[test]
    fn test_record_premium_keeps_state() {
        let mut policy = auto_policy();
        policy.record_premium(Money::new(dec!(862.50), Currency::USD));

        assert!(policy.is_active());
        assert_eq!(policy.total_premium().unwrap().amount(), dec!(862.50));
    }

    #[test]
    fn test_cancel_is_idempotent() {
        let mut policy = auto_policy();
        policy.cancel();
        policy.cancel();

        assert!(!policy.is_active());
        assert_eq!(policy.status(), PolicyStatus::Canceled);
    }

    #[test]
    fn test_renew_does_not_reactivate() {
        let mut policy = auto_policy();
        policy.cancel();
        policy.renew();

        assert!(!policy.is_active());
        assert_eq!(
            policy.term().end(),
            PolicyTerm::annual(policy.term().start()).end()
        );
    }

    #[test]
    fn test_event_sequence() {
        let mut policy = auto_policy();
        policy.record_premium(Money::new(dec!(862.50), Currency::USD));
        policy.renew();
        policy.cancel();
        policy.cancel(); // second cancel emits nothing

        let events = policy.take_events();
        assert_eq!(events.len(), 4);
        assert!(matches!(events[0], PolicyEvent::Created { .. }));
        assert!(matches!(events[1], PolicyEvent::PremiumRated { .. }));
        assert!(matches!(events[2], PolicyEvent::Renewed { .. }));
        assert!(matches!(events[3], PolicyEvent::Canceled { .. }));
        assert!(events.iter().all(|e| e.policy_id() == policy.id()));
        assert!(policy.take_events().is_empty());
    }
}
