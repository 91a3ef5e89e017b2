//! Policy domain events
//!
//! Events record what happened to a policy so the host application can
//! publish or audit them. The aggregate accumulates events internally;
//! callers drain them with [`crate::Policy::take_events`].

use chrono::{DateTime, Utc};
use core_kernel::{Money, PolicyId, PolicyTerm};
use serde::{Deserialize, Serialize};

use crate::risk::PolicyKind;

/// Domain events emitted by the policy aggregate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PolicyEvent {
    /// A new policy was opened
    Created {
        policy_id: PolicyId,
        kind: PolicyKind,
        term: PolicyTerm,
        timestamp: DateTime<Utc>,
    },

    /// The rating engine produced a premium for the policy
    PremiumRated {
        policy_id: PolicyId,
        total: Money,
        timestamp: DateTime<Utc>,
    },

    /// The policy term was reset for another year
    Renewed {
        policy_id: PolicyId,
        term: PolicyTerm,
        timestamp: DateTime<Utc>,
    },

    /// The policy was canceled
    Canceled {
        policy_id: PolicyId,
        timestamp: DateTime<Utc>,
    },
}

impl PolicyEvent {
    /// Returns the policy the event belongs to
    pub fn policy_id(&self) -> PolicyId {
        match self {
            PolicyEvent::Created { policy_id, .. }
            | PolicyEvent::PremiumRated { policy_id, .. }
            | PolicyEvent::Renewed { policy_id, .. }
            | PolicyEvent::Canceled { policy_id, .. } => *policy_id,
        }
    }
}
