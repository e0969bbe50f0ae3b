//! Rate-adjustment policy seam.
//!
//! Credit score range and loan program are collected on the form but do not
//! move the payment today. Rather than silently ignoring them, the worksheet
//! routes them through a [`RateAdjustmentPolicy`], so a future policy can
//! price credit tiers or apply program-specific margins without touching the
//! amortization math. The default [`FlatRatePolicy`] returns zero for every
//! profile, which pins the current behavior: identical inputs produce
//! identical payments regardless of credit tier or loan type.

use rust_decimal::Decimal;

use crate::models::{CreditTier, LoanType};

/// Maps a borrower profile to an adjustment of the nominal annual rate.
pub trait RateAdjustmentPolicy: std::fmt::Debug {
    /// Percentage points added to the nominal annual rate for the given
    /// profile. May be negative for a discount.
    fn rate_adjustment(
        &self,
        credit: CreditTier,
        loan_type: LoanType,
    ) -> Decimal;
}

/// Policy that never adjusts the rate.
#[derive(Debug, Clone, Copy, Default)]
pub struct FlatRatePolicy;

impl RateAdjustmentPolicy for FlatRatePolicy {
    fn rate_adjustment(
        &self,
        _credit: CreditTier,
        _loan_type: LoanType,
    ) -> Decimal {
        Decimal::ZERO
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn flat_policy_returns_zero_for_every_profile() {
        for credit in CreditTier::all() {
            for loan_type in LoanType::all() {
                assert_eq!(
                    FlatRatePolicy.rate_adjustment(*credit, *loan_type),
                    Decimal::ZERO
                );
            }
        }
    }
}
