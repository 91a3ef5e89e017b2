//! Premium rating engine
//!
//! Pure, side-effect-free computation from risk attributes plus the
//! owner's cross-policy context to a taxed premium. The engine raises no
//! errors: out-of-domain inputs rate to mathematically consistent (if
//! nonsensical) output, and rejecting them is the input boundary's job.
//!
//! # Factor ordering
//!
//! Factors compose by sequential multiplication of the running premium.
//! The home value surcharge is additive and applied before any
//! multiplier; the 15% tax is always the final step, after the
//! cross-policy discount.

use core_kernel::{Money, Rate};
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::risk::{AutoRisk, HeatingType, HomeRisk, Location, PolicyKind, PolicyRisk};

/// Which complementary lines the policy owner currently holds active
///
/// Snapshot of the owner's policy book at rating time. A quote with no
/// owner uses [`CrossPolicyContext::none`], so cross-policy discounts
/// never apply to it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrossPolicyContext {
    pub has_active_auto: bool,
    pub has_active_home: bool,
}

impl CrossPolicyContext {
    /// Context for an ownerless quote; no discounts apply
    pub fn none() -> Self {
        Self::default()
    }
}

/// The rated premium with its component breakdown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PremiumQuote {
    /// Line of business the quote was rated for
    pub kind: PolicyKind,
    /// Fixed base premium for the line
    pub base: Money,
    /// Premium after all surcharges, factors, and discounts, before tax
    pub subtotal: Money,
    /// Tax portion (15% of the subtotal)
    pub tax: Money,
    /// Final taxed premium
    pub total: Money,
}

/// Premium tax rate, applied last
fn tax_rate() -> Rate {
    Rate::from_percentage(dec!(15))
}

/// Multi-line discount factor for holding the complementary line
fn cross_policy_factor() -> rust_decimal::Decimal {
    dec!(0.9)
}

/// Rates a risk profile into a taxed premium
pub fn rate(risk: &PolicyRisk, ctx: &CrossPolicyContext) -> PremiumQuote {
    let kind = risk.kind();
    let base = kind.base_premium();
    let subtotal = match risk {
        PolicyRisk::Auto(auto) => auto_subtotal(auto, ctx),
        PolicyRisk::Home(home) => home_subtotal(home, ctx),
    };
    // Tax is the final multiplicative step; the tax line is derived from
    // the totals so the breakdown always sums exactly.
    let total = subtotal.multiply(dec!(1) + tax_rate().as_decimal());
    let tax = total - subtotal;

    debug!(
        %kind,
        base = %base,
        subtotal = %subtotal,
        total = %total,
        "rated premium"
    );

    PremiumQuote {
        kind,
        base,
        subtotal,
        tax,
        total,
    }
}

/// Pre-tax auto premium
fn auto_subtotal(risk: &AutoRisk, ctx: &CrossPolicyContext) -> Money {
    let mut premium = PolicyKind::Auto.base_premium();

    // Drivers under 25 rate double
    if risk.driver_age < 25 {
        premium = premium.multiply(dec!(2.0));
    }

    // Accident history over the last five years. Exactly two accidents
    // rates flat: the schedule only defines the one-accident and
    // more-than-two bands.
    let accident_factor = match risk.accident_count {
        count if count > 2 => dec!(2.5),
        1 => dec!(1.25),
        _ => dec!(1.0),
    };
    premium = premium.multiply(accident_factor);

    let vehicle_age = risk.vehicle.age();
    let vehicle_factor = if vehicle_age > 10 {
        dec!(2.0)
    } else if vehicle_age > 5 {
        dec!(1.5)
    } else {
        dec!(1.0)
    };
    premium = premium.multiply(vehicle_factor);

    if ctx.has_active_home {
        premium = premium.multiply(cross_policy_factor());
    }

    premium
}

/// Pre-tax home premium
fn home_subtotal(risk: &HomeRisk, ctx: &CrossPolicyContext) -> Money {
    let mut premium = PolicyKind::Home.base_premium();

    // Value surcharge: 0.2% of the value above 250,000, added before any
    // multiplicative factor
    if risk.home_value > dec!(250000) {
        let surcharge = (risk.home_value - dec!(250000)) * dec!(0.002);
        premium = premium + Money::new(surcharge, premium.currency());
    }

    // Only the 2M limit carries a loading; anything else rates flat
    if risk.liability_limit == dec!(2000000) {
        premium = premium.multiply(dec!(1.25));
    }

    let age_factor = if risk.home_age > 50 {
        dec!(1.5)
    } else if risk.home_age > 25 {
        dec!(1.25)
    } else {
        dec!(1.0)
    };
    premium = premium.multiply(age_factor);

    let heating_factor = match risk.heating {
        HeatingType::Oil => dec!(2.0),
        HeatingType::Wood => dec!(1.25),
        HeatingType::Other => dec!(1.0),
    };
    premium = premium.multiply(heating_factor);

    if risk.location == Location::Rural {
        premium = premium.multiply(dec!(1.15));
    }

    if ctx.has_active_auto {
        premium = premium.multiply(cross_policy_factor());
    }

    premium
}
