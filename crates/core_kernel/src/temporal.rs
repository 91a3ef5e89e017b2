//! Policy term handling
//!
//! Every policy in this book of business runs for exactly one calendar
//! year. [`PolicyTerm`] owns that invariant: it can only be constructed
//! as an annual span, so `end` is always `start` plus one year.

use chrono::{Months, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// An annual policy term
///
/// The end date is derived from the start date at construction and on
/// renewal; it is never set independently. Feb 29 starts clamp to Feb 28
/// in the following (non-leap) year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicyTerm {
    start: NaiveDate,
    end: NaiveDate,
}

impl PolicyTerm {
    /// Creates a one-year term beginning on the given date
    pub fn annual(start: NaiveDate) -> Self {
        let end = start
            .checked_add_months(Months::new(12))
            .unwrap_or(start + chrono::Duration::days(365));
        Self { start, end }
    }

    /// Creates a one-year term beginning today
    pub fn starting_today() -> Self {
        Self::annual(Utc::now().date_naive())
    }

    /// Returns the start of the term (inclusive)
    pub fn start(&self) -> NaiveDate {
        self.start
    }

    /// Returns the end of the term (exclusive)
    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// Returns true if the given date falls within the term
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date < self.end
    }

    /// Returns true if the term has ended as of the given date
    ///
    /// Expiry is a reporting concern only; nothing in the core retires a
    /// policy when its term runs out.
    pub fn is_expired(&self, as_of: NaiveDate) -> bool {
        as_of >= self.end
    }
}

impl fmt::Display for PolicyTerm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} to {}", self.start, self.end)
    }
}
