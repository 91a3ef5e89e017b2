//! Risk profile value objects
//!
//! These immutable value objects describe the insured asset behind a
//! policy. They carry raw risk attributes only; how those attributes map
//! to premium dollars lives in [`crate::rating`].
//!
//! Attribute validation is deliberately absent. The input boundary is
//! responsible for collecting sane values; out-of-domain numbers (a
//! negative driver age, say) flow through the rating arithmetic and
//! produce well-defined output.

use chrono::{Datelike, Utc};
use core_kernel::{Currency, Money};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The line of business a policy belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PolicyKind {
    Auto,
    Home,
}

impl PolicyKind {
    /// Returns the fixed base premium for this line
    ///
    /// Auto starts at 750, Home at 500, before any rating factor.
    pub fn base_premium(&self) -> Money {
        match self {
            PolicyKind::Auto => Money::new(dec!(750), Currency::USD),
            PolicyKind::Home => Money::new(dec!(500), Currency::USD),
        }
    }
}

impl fmt::Display for PolicyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PolicyKind::Auto => write!(f, "Auto"),
            PolicyKind::Home => write!(f, "Home"),
        }
    }
}

/// An insured vehicle
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vehicle {
    make: String,
    model: String,
    year: i32,
}

impl Vehicle {
    /// Creates a vehicle from make, model, and manufacture year
    pub fn new(make: impl Into<String>, model: impl Into<String>, year: i32) -> Self {
        Self {
            make: make.into(),
            model: model.into(),
            year,
        }
    }

    /// Returns the make (brand)
    pub fn make(&self) -> &str {
        &self.make
    }

    /// Returns the model
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Returns the manufacture year
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Returns the age in years, measured against the current calendar year
    ///
    /// Recomputed on every access rather than stored, so the same vehicle
    /// rates older as calendar years roll over.
    pub fn age(&self) -> i32 {
        Utc::now().year() - self.year
    }
}

impl fmt::Display for Vehicle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} ({})", self.make, self.model, self.year)
    }
}

/// Heating classification for a dwelling
///
/// Parsed case-insensitively from free-text input; anything that is not
/// oil or wood rates in the `Other` band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HeatingType {
    Oil,
    Wood,
    Other,
}

impl HeatingType {
    /// Classifies a raw heating description
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        if raw.eq_ignore_ascii_case("oil") {
            HeatingType::Oil
        } else if raw.eq_ignore_ascii_case("wood") {
            HeatingType::Wood
        } else {
            HeatingType::Other
        }
    }
}

impl fmt::Display for HeatingType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeatingType::Oil => write!(f, "oil"),
            HeatingType::Wood => write!(f, "wood"),
            HeatingType::Other => write!(f, "other"),
        }
    }
}

/// Location classification for a dwelling
///
/// Parsed case-insensitively; only "rural" carries a surcharge, so any
/// unrecognized value rates as urban.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Location {
    Urban,
    Rural,
}

impl Location {
    /// Classifies a raw location description
    pub fn parse(raw: &str) -> Self {
        if raw.trim().eq_ignore_ascii_case("rural") {
            Location::Rural
        } else {
            Location::Urban
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Location::Urban => write!(f, "urban"),
            Location::Rural => write!(f, "rural"),
        }
    }
}

/// Risk attributes for an auto policy
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AutoRisk {
    /// Age of the primary driver
    pub driver_age: i32,
    /// Accidents in the last five years
    pub accident_count: i32,
    /// The insured vehicle
    pub vehicle: Vehicle,
}

impl AutoRisk {
    pub fn new(driver_age: i32, accident_count: i32, vehicle: Vehicle) -> Self {
        Self {
            driver_age,
            accident_count,
            vehicle,
        }
    }
}

/// Risk attributes for a home policy
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HomeRisk {
    /// Age of the dwelling in years
    pub home_age: i32,
    /// Dwelling description (townhouse, apartment, ...); not priced
    pub dwelling_type: String,
    /// Heating classification
    pub heating: HeatingType,
    /// Location classification
    pub location: Location,
    /// Estimated value of the home
    pub home_value: Decimal,
    /// Liability coverage limit; 2,000,000 carries a loading, everything
    /// else rates flat
    pub liability_limit: Decimal,
}

/// The risk profile behind a policy, tagged by line of business
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum PolicyRisk {
    Auto(AutoRisk),
    Home(HomeRisk),
}

impl PolicyRisk {
    /// Returns the line of business this risk belongs to
    pub fn kind(&self) -> PolicyKind {
        match self {
            PolicyRisk::Auto(_) => PolicyKind::Auto,
            PolicyRisk::Home(_) => PolicyKind::Home,
        }
    }
}
