//! Monthly payment worksheet for a fixed-rate, fixed-term mortgage.
//!
//! This module computes the estimated total monthly payment on a 30-year
//! fixed-rate loan and the annual income needed to afford it under a fixed
//! 36% back-end debt-to-income assumption.
//!
//! # Worksheet Structure
//!
//! | Line | Description |
//! |------|-------------|
//! | 1    | Loan amount: home price × (1 − down payment % / 100) |
//! | 2    | Effective annual rate: nominal rate + policy adjustment |
//! | 3    | Monthly rate: Line 2 / 100 / 12 |
//! | 4    | Principal and interest via the level-payment amortization formula |
//! | 5    | Monthly property taxes: annual taxes / 12 |
//! | 6    | Monthly HOA fee |
//! | 7    | PMI: loan × 0.8% / 12 when down payment is below 20%, else 0 |
//! | 8    | Total monthly payment: Line 4 + Line 5 + Line 6 + Line 7 |
//! | 9    | Annual income needed: Line 8 / 0.36, to a whole currency unit |
//!
//! The amortization formula `P = L·r·(1+r)^n / ((1+r)^n − 1)` is undefined at
//! `r = 0`; the worksheet special-cases a zero rate to `P = L / n` so a 0%
//! input produces an exact straight-line payment instead of a division error.
//!
//! The PMI line is a fixed approximation, not an underwriting rule, and is
//! applied regardless of loan program.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use mortgage_core::calculations::{PaymentWorksheet, PaymentWorksheetConfig};
//! use mortgage_core::{CreditTier, LoanType, MortgageInputs};
//!
//! let input = MortgageInputs {
//!     home_price: dec!(800000.00),
//!     down_payment_percent: dec!(5.00),
//!     annual_rate_percent: dec!(7.00),
//!     annual_taxes: dec!(4800.00),
//!     monthly_hoa: dec!(0.00),
//!     credit: CreditTier::Excellent,
//!     loan_type: LoanType::Conventional,
//! };
//!
//! let worksheet = PaymentWorksheet::new(PaymentWorksheetConfig::default());
//! let estimate = worksheet.calculate(&input).unwrap();
//!
//! assert_eq!(estimate.loan_amount, dec!(760000.00));
//! assert_eq!(estimate.principal_and_interest, dec!(5056.30));
//! assert_eq!(estimate.private_mortgage_insurance, dec!(506.67));
//! assert_eq!(estimate.total_monthly_payment, dec!(5962.97));
//! assert_eq!(estimate.annual_income_needed, dec!(16564));
//! ```

use rust_decimal::{Decimal, MathematicalOps};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::calculations::common::{round_half_up, round_to_whole};
use crate::calculations::rate_policy::{FlatRatePolicy, RateAdjustmentPolicy};
use crate::models::MortgageInputs;

/// Errors raised when an input or configuration value violates its domain
/// constraint.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InvalidInputError {
    /// The home price must be positive.
    #[error("home price must be positive, got {0}")]
    NonPositiveHomePrice(Decimal),

    /// The down payment percent must be at least 0 and below 100.
    #[error("down payment percent must be in [0, 100), got {0}")]
    DownPaymentOutOfRange(Decimal),

    /// The nominal annual interest rate must be non-negative.
    #[error("annual interest rate must be non-negative, got {0}")]
    NegativeInterestRate(Decimal),

    /// The annual property taxes must be non-negative.
    #[error("annual property taxes must be non-negative, got {0}")]
    NegativeTaxes(Decimal),

    /// The monthly HOA fee must be non-negative.
    #[error("monthly HOA fee must be non-negative, got {0}")]
    NegativeHoa(Decimal),

    /// The loan term must cover at least one year.
    #[error("loan term must be at least one year")]
    ZeroLoanTerm,

    /// The back-end DTI ratio must be in (0, 1].
    #[error("back-end DTI ratio must be in (0, 1], got {0}")]
    DtiOutOfRange(Decimal),

    /// The PMI annual rate must be non-negative.
    #[error("PMI annual rate must be non-negative, got {0}")]
    NegativePmiRate(Decimal),

    /// The effective rate is too large to exponentiate over the term.
    #[error("monthly rate {0} is too large to amortize over {1} payments")]
    RateTooLarge(Decimal, u32),
}

/// Configuration parameters for the payment worksheet.
///
/// The defaults pin the calculator's fixed behavior: a 30-year term, a 0.8%
/// annual PMI approximation below 20% down, and a 36% back-end DTI ratio for
/// the income estimate. None of these are user-configurable on the form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentWorksheetConfig {
    /// Loan term in years (Line 4 uses term × 12 payments).
    pub loan_term_years: u32,

    /// Annual PMI rate applied to the loan amount (Line 7).
    pub pmi_annual_rate: Decimal,

    /// Down payment percent at and above which PMI is waived.
    pub pmi_down_payment_cutoff: Decimal,

    /// Back-end debt-to-income ratio for the income estimate (Line 9).
    pub back_end_dti: Decimal,
}

impl Default for PaymentWorksheetConfig {
    fn default() -> Self {
        Self {
            loan_term_years: 30,
            pmi_annual_rate: Decimal::new(8, 3),
            pmi_down_payment_cutoff: Decimal::from(20),
            back_end_dti: Decimal::new(36, 2),
        }
    }
}

/// Result of the payment worksheet.
///
/// Carries each worksheet line so the form can render the breakdown, not just
/// the two headline values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentEstimate {
    /// Amount borrowed after the down payment (Line 1).
    pub loan_amount: Decimal,

    /// Annual rate actually amortized, after the policy adjustment (Line 2).
    pub effective_annual_rate: Decimal,

    /// Level principal-and-interest payment (Line 4).
    pub principal_and_interest: Decimal,

    /// Monthly share of annual property taxes (Line 5).
    pub monthly_taxes: Decimal,

    /// Monthly HOA fee as entered (Line 6).
    pub monthly_hoa: Decimal,

    /// Monthly PMI, zero at or above the down payment cutoff (Line 7).
    pub private_mortgage_insurance: Decimal,

    /// Total estimated monthly payment (Line 8).
    pub total_monthly_payment: Decimal,

    /// Annual income needed under the DTI assumption (Line 9).
    pub annual_income_needed: Decimal,
}

/// Calculator for the monthly payment worksheet.
///
/// Holds the fixed configuration and the rate-adjustment policy. The default
/// policy is [`FlatRatePolicy`], under which credit tier and loan type have
/// no effect on the output.
#[derive(Debug, Clone)]
pub struct PaymentWorksheet<'a> {
    config: PaymentWorksheetConfig,
    rate_policy: &'a dyn RateAdjustmentPolicy,
}

impl PaymentWorksheet<'static> {
    /// Creates a worksheet with the flat (no-adjustment) rate policy.
    pub fn new(config: PaymentWorksheetConfig) -> Self {
        Self {
            config,
            rate_policy: &FlatRatePolicy,
        }
    }
}

impl<'a> PaymentWorksheet<'a> {
    /// Creates a worksheet whose nominal rate is adjusted per borrower
    /// profile by `rate_policy`.
    pub fn with_rate_policy(
        config: PaymentWorksheetConfig,
        rate_policy: &'a dyn RateAdjustmentPolicy,
    ) -> Self {
        Self {
            config,
            rate_policy,
        }
    }

    /// Calculates the complete payment worksheet.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidInputError`] if a configuration value or an input
    /// field violates its domain constraint, or if the effective rate is too
    /// large to exponentiate over the term.
    pub fn calculate(
        &self,
        input: &MortgageInputs,
    ) -> Result<PaymentEstimate, InvalidInputError> {
        self.validate_config()?;
        Self::validate_inputs(input)?;

        let loan_amount = self.loan_amount(input.home_price, input.down_payment_percent);
        let effective_annual_rate = input.annual_rate_percent
            + self
                .rate_policy
                .rate_adjustment(input.credit, input.loan_type);
        let monthly_rate = self.monthly_rate(effective_annual_rate);

        let principal_and_interest = self.principal_and_interest(loan_amount, monthly_rate)?;
        let monthly_taxes = self.monthly_taxes(input.annual_taxes);
        let monthly_hoa = round_half_up(input.monthly_hoa);
        let private_mortgage_insurance =
            self.private_mortgage_insurance(loan_amount, input.down_payment_percent);

        let total_monthly_payment = round_half_up(
            principal_and_interest + monthly_taxes + monthly_hoa + private_mortgage_insurance,
        );
        let annual_income_needed = self.income_needed(total_monthly_payment)?;

        debug!(
            %loan_amount,
            %principal_and_interest,
            %total_monthly_payment,
            %annual_income_needed,
            "payment worksheet complete"
        );

        Ok(PaymentEstimate {
            loan_amount,
            effective_annual_rate,
            principal_and_interest,
            monthly_taxes,
            monthly_hoa,
            private_mortgage_insurance,
            total_monthly_payment,
            annual_income_needed,
        })
    }

    /// Annual income needed to afford `monthly_payment` under the configured
    /// back-end DTI ratio, rounded to a whole currency unit.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidInputError::DtiOutOfRange`] if the configured ratio
    /// is outside (0, 1].
    pub fn income_needed(
        &self,
        monthly_payment: Decimal,
    ) -> Result<Decimal, InvalidInputError> {
        let dti = self.config.back_end_dti;
        if dti <= Decimal::ZERO || dti > Decimal::ONE {
            return Err(InvalidInputError::DtiOutOfRange(dti));
        }
        Ok(round_to_whole(monthly_payment / dti))
    }

    fn validate_config(&self) -> Result<(), InvalidInputError> {
        if self.config.loan_term_years == 0 {
            return Err(InvalidInputError::ZeroLoanTerm);
        }
        let dti = self.config.back_end_dti;
        if dti <= Decimal::ZERO || dti > Decimal::ONE {
            return Err(InvalidInputError::DtiOutOfRange(dti));
        }
        if self.config.pmi_annual_rate < Decimal::ZERO {
            return Err(InvalidInputError::NegativePmiRate(
                self.config.pmi_annual_rate,
            ));
        }
        Ok(())
    }

    fn validate_inputs(input: &MortgageInputs) -> Result<(), InvalidInputError> {
        if input.home_price <= Decimal::ZERO {
            return Err(InvalidInputError::NonPositiveHomePrice(input.home_price));
        }
        if input.down_payment_percent < Decimal::ZERO
            || input.down_payment_percent >= Decimal::ONE_HUNDRED
        {
            return Err(InvalidInputError::DownPaymentOutOfRange(
                input.down_payment_percent,
            ));
        }
        if input.annual_rate_percent < Decimal::ZERO {
            return Err(InvalidInputError::NegativeInterestRate(
                input.annual_rate_percent,
            ));
        }
        if input.annual_taxes < Decimal::ZERO {
            return Err(InvalidInputError::NegativeTaxes(input.annual_taxes));
        }
        if input.monthly_hoa < Decimal::ZERO {
            return Err(InvalidInputError::NegativeHoa(input.monthly_hoa));
        }
        Ok(())
    }

    /// Calculates the amount borrowed after the down payment (Line 1).
    fn loan_amount(
        &self,
        home_price: Decimal,
        down_payment_percent: Decimal,
    ) -> Decimal {
        round_half_up(home_price * (Decimal::ONE - down_payment_percent / Decimal::ONE_HUNDRED))
    }

    /// Converts an annual percentage rate to a monthly fractional rate
    /// (Line 3). Deliberately unrounded; rounding here would distort the
    /// exponentiation.
    fn monthly_rate(
        &self,
        annual_rate_percent: Decimal,
    ) -> Decimal {
        annual_rate_percent / Decimal::ONE_HUNDRED / Decimal::from(12)
    }

    fn number_of_payments(&self) -> u32 {
        self.config.loan_term_years * 12
    }

    /// Calculates the level principal-and-interest payment (Line 4).
    ///
    /// Uses `P = L·r·(1+r)^n / ((1+r)^n − 1)`. A zero monthly rate (or one so
    /// small it vanishes at decimal precision) falls back to `L / n`.
    fn principal_and_interest(
        &self,
        loan_amount: Decimal,
        monthly_rate: Decimal,
    ) -> Result<Decimal, InvalidInputError> {
        let n = self.number_of_payments();

        if monthly_rate.is_zero() {
            return Ok(round_half_up(loan_amount / Decimal::from(n)));
        }

        let growth = (Decimal::ONE + monthly_rate)
            .checked_powi(i64::from(n))
            .ok_or(InvalidInputError::RateTooLarge(monthly_rate, n))?;
        if growth == Decimal::ONE {
            // Rate underflowed to nothing; same as the zero-rate branch.
            return Ok(round_half_up(loan_amount / Decimal::from(n)));
        }

        // growth / (growth − 1) first keeps the intermediate product bounded.
        let annuity_factor = monthly_rate * growth / (growth - Decimal::ONE);
        Ok(round_half_up(loan_amount * annuity_factor))
    }

    /// Calculates the monthly share of annual property taxes (Line 5).
    fn monthly_taxes(
        &self,
        annual_taxes: Decimal,
    ) -> Decimal {
        round_half_up(annual_taxes / Decimal::from(12))
    }

    /// Calculates monthly PMI (Line 7): applied below the down payment
    /// cutoff, zero at or above it.
    fn private_mortgage_insurance(
        &self,
        loan_amount: Decimal,
        down_payment_percent: Decimal,
    ) -> Decimal {
        if down_payment_percent < self.config.pmi_down_payment_cutoff {
            round_half_up(loan_amount * self.config.pmi_annual_rate / Decimal::from(12))
        } else {
            Decimal::ZERO
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use crate::models::{CreditTier, LoanType};

    use super::*;

    fn test_input() -> MortgageInputs {
        MortgageInputs {
            home_price: dec!(800000.00),
            down_payment_percent: dec!(5.00),
            annual_rate_percent: dec!(7.00),
            annual_taxes: dec!(4800.00),
            monthly_hoa: dec!(0.00),
            credit: CreditTier::Excellent,
            loan_type: LoanType::Conventional,
        }
    }

    fn default_worksheet() -> PaymentWorksheet<'static> {
        PaymentWorksheet::new(PaymentWorksheetConfig::default())
    }

    // =========================================================================
    // loan_amount tests
    // =========================================================================

    #[test]
    fn loan_amount_subtracts_down_payment() {
        let worksheet = default_worksheet();

        let result = worksheet.loan_amount(dec!(800000.00), dec!(5.00));

        assert_eq!(result, dec!(760000.00));
    }

    #[test]
    fn loan_amount_full_price_at_zero_down() {
        let worksheet = default_worksheet();

        let result = worksheet.loan_amount(dec!(500000.00), dec!(0.00));

        assert_eq!(result, dec!(500000.00));
    }

    // =========================================================================
    // monthly_rate tests
    // =========================================================================

    #[test]
    fn monthly_rate_divides_by_1200() {
        let worksheet = default_worksheet();

        let result = worksheet.monthly_rate(dec!(12.00));

        assert_eq!(result, dec!(0.01));
    }

    #[test]
    fn monthly_rate_zero_for_zero_annual() {
        let worksheet = default_worksheet();

        assert!(worksheet.monthly_rate(dec!(0.00)).is_zero());
    }

    // =========================================================================
    // principal_and_interest tests
    // =========================================================================

    #[test]
    fn principal_and_interest_standard_case() {
        let worksheet = default_worksheet();
        let rate = worksheet.monthly_rate(dec!(7.00));

        let result = worksheet.principal_and_interest(dec!(760000.00), rate);

        assert_eq!(result, Ok(dec!(5056.30)));
    }

    #[test]
    fn principal_and_interest_zero_rate_is_straight_line() {
        let worksheet = default_worksheet();

        let result = worksheet.principal_and_interest(dec!(360000.00), Decimal::ZERO);

        // 360000 / 360 payments, exactly.
        assert_eq!(result, Ok(dec!(1000.00)));
    }

    #[test]
    fn principal_and_interest_vanishing_rate_is_straight_line() {
        let worksheet = default_worksheet();

        // Smallest representable positive rate; indistinguishable from 0%.
        let result = worksheet.principal_and_interest(dec!(360000.00), Decimal::new(1, 28));

        assert_eq!(result, Ok(dec!(1000.00)));
    }

    // =========================================================================
    // monthly_taxes tests
    // =========================================================================

    #[test]
    fn monthly_taxes_divides_annual_by_twelve() {
        let worksheet = default_worksheet();

        assert_eq!(worksheet.monthly_taxes(dec!(4800.00)), dec!(400.00));
    }

    #[test]
    fn monthly_taxes_rounds_half_up() {
        let worksheet = default_worksheet();

        // 100 / 12 = 8.3333...
        assert_eq!(worksheet.monthly_taxes(dec!(100.00)), dec!(8.33));
    }

    // =========================================================================
    // private_mortgage_insurance tests
    // =========================================================================

    #[test]
    fn pmi_applies_below_cutoff() {
        let worksheet = default_worksheet();

        let result = worksheet.private_mortgage_insurance(dec!(760000.00), dec!(5.00));

        // 760000 * 0.008 / 12
        assert_eq!(result, dec!(506.67));
    }

    #[test]
    fn pmi_applies_just_below_cutoff() {
        let worksheet = default_worksheet();

        let result = worksheet.private_mortgage_insurance(dec!(640080.00), dec!(19.99));

        assert_eq!(result, dec!(426.72));
    }

    #[test]
    fn pmi_waived_at_cutoff() {
        let worksheet = default_worksheet();

        let result = worksheet.private_mortgage_insurance(dec!(640000.00), dec!(20.00));

        assert_eq!(result, dec!(0.00));
    }

    #[test]
    fn pmi_waived_above_cutoff() {
        let worksheet = default_worksheet();

        let result = worksheet.private_mortgage_insurance(dec!(600000.00), dec!(25.00));

        assert_eq!(result, dec!(0.00));
    }

    // =========================================================================
    // income_needed tests
    // =========================================================================

    #[test]
    fn income_needed_applies_dti_and_rounds_to_whole() {
        let worksheet = default_worksheet();

        // 5962.97 / 0.36 = 16563.805...
        assert_eq!(worksheet.income_needed(dec!(5962.97)), Ok(dec!(16564)));
    }

    #[test]
    fn income_needed_rejects_zero_dti() {
        let mut config = PaymentWorksheetConfig::default();
        config.back_end_dti = Decimal::ZERO;
        let worksheet = PaymentWorksheet::new(config);

        assert_eq!(
            worksheet.income_needed(dec!(1000.00)),
            Err(InvalidInputError::DtiOutOfRange(Decimal::ZERO))
        );
    }

    // =========================================================================
    // validation tests
    // =========================================================================

    #[test]
    fn calculate_rejects_non_positive_home_price() {
        let worksheet = default_worksheet();
        let mut input = test_input();
        input.home_price = dec!(0.00);

        assert_eq!(
            worksheet.calculate(&input),
            Err(InvalidInputError::NonPositiveHomePrice(dec!(0.00)))
        );
    }

    #[test]
    fn calculate_rejects_negative_home_price() {
        let worksheet = default_worksheet();
        let mut input = test_input();
        input.home_price = dec!(-100000.00);

        assert_eq!(
            worksheet.calculate(&input),
            Err(InvalidInputError::NonPositiveHomePrice(dec!(-100000.00)))
        );
    }

    #[test]
    fn calculate_rejects_down_payment_of_100_percent() {
        let worksheet = default_worksheet();
        let mut input = test_input();
        input.down_payment_percent = dec!(100.00);

        assert_eq!(
            worksheet.calculate(&input),
            Err(InvalidInputError::DownPaymentOutOfRange(dec!(100.00)))
        );
    }

    #[test]
    fn calculate_rejects_negative_down_payment() {
        let worksheet = default_worksheet();
        let mut input = test_input();
        input.down_payment_percent = dec!(-1.00);

        assert_eq!(
            worksheet.calculate(&input),
            Err(InvalidInputError::DownPaymentOutOfRange(dec!(-1.00)))
        );
    }

    #[test]
    fn calculate_rejects_negative_rate() {
        let worksheet = default_worksheet();
        let mut input = test_input();
        input.annual_rate_percent = dec!(-0.25);

        assert_eq!(
            worksheet.calculate(&input),
            Err(InvalidInputError::NegativeInterestRate(dec!(-0.25)))
        );
    }

    #[test]
    fn calculate_rejects_negative_taxes() {
        let worksheet = default_worksheet();
        let mut input = test_input();
        input.annual_taxes = dec!(-1.00);

        assert_eq!(
            worksheet.calculate(&input),
            Err(InvalidInputError::NegativeTaxes(dec!(-1.00)))
        );
    }

    #[test]
    fn calculate_rejects_negative_hoa() {
        let worksheet = default_worksheet();
        let mut input = test_input();
        input.monthly_hoa = dec!(-50.00);

        assert_eq!(
            worksheet.calculate(&input),
            Err(InvalidInputError::NegativeHoa(dec!(-50.00)))
        );
    }

    #[test]
    fn calculate_rejects_zero_loan_term() {
        let mut config = PaymentWorksheetConfig::default();
        config.loan_term_years = 0;
        let worksheet = PaymentWorksheet::new(config);

        assert_eq!(
            worksheet.calculate(&test_input()),
            Err(InvalidInputError::ZeroLoanTerm)
        );
    }

    #[test]
    fn calculate_rejects_huge_rate() {
        let worksheet = default_worksheet();
        let mut input = test_input();
        // 1.0e6 percent annually; (1+r)^360 overflows the decimal range.
        input.annual_rate_percent = dec!(1000000.00);

        assert!(matches!(
            worksheet.calculate(&input),
            Err(InvalidInputError::RateTooLarge(_, 360))
        ));
    }

    // =========================================================================
    // calculate (integration) tests
    // =========================================================================

    #[test]
    fn calculate_golden_case() {
        let worksheet = default_worksheet();

        let estimate = worksheet.calculate(&test_input()).unwrap();

        assert_eq!(estimate.loan_amount, dec!(760000.00));
        assert_eq!(estimate.effective_annual_rate, dec!(7.00));
        assert_eq!(estimate.principal_and_interest, dec!(5056.30));
        assert_eq!(estimate.monthly_taxes, dec!(400.00));
        assert_eq!(estimate.monthly_hoa, dec!(0.00));
        assert_eq!(estimate.private_mortgage_insurance, dec!(506.67));
        assert_eq!(estimate.total_monthly_payment, dec!(5962.97));
        assert_eq!(estimate.annual_income_needed, dec!(16564));
    }

    #[test]
    fn calculate_waives_pmi_at_20_percent_down() {
        let worksheet = default_worksheet();
        let mut input = test_input();
        input.down_payment_percent = dec!(20.00);

        let estimate = worksheet.calculate(&input).unwrap();

        assert_eq!(estimate.loan_amount, dec!(640000.00));
        assert_eq!(estimate.private_mortgage_insurance, dec!(0.00));
        assert_eq!(estimate.total_monthly_payment, dec!(4657.94));
    }

    #[test]
    fn calculate_charges_pmi_just_below_20_percent_down() {
        let worksheet = default_worksheet();
        let mut input = test_input();
        input.down_payment_percent = dec!(19.99);

        let estimate = worksheet.calculate(&input).unwrap();

        assert_eq!(estimate.private_mortgage_insurance, dec!(426.72));
        assert_eq!(estimate.total_monthly_payment, dec!(5085.19));
    }

    #[test]
    fn calculate_zero_rate_is_straight_line() {
        let worksheet = default_worksheet();
        let mut input = test_input();
        input.home_price = dec!(360000.00);
        input.down_payment_percent = dec!(0.00);
        input.annual_rate_percent = dec!(0.00);
        input.annual_taxes = dec!(0.00);

        let estimate = worksheet.calculate(&input).unwrap();

        // Loan / 360 exactly, plus PMI at 0% down.
        assert_eq!(estimate.principal_and_interest, dec!(1000.00));
        assert_eq!(estimate.private_mortgage_insurance, dec!(240.00));
        assert_eq!(estimate.total_monthly_payment, dec!(1240.00));
    }

    #[test]
    fn calculate_includes_hoa_in_total() {
        let worksheet = default_worksheet();
        let mut input = test_input();
        input.monthly_hoa = dec!(250.00);

        let estimate = worksheet.calculate(&input).unwrap();

        assert_eq!(estimate.total_monthly_payment, dec!(6212.97));
        assert_eq!(estimate.annual_income_needed, dec!(17258));
    }

    #[test]
    fn calculate_income_needed_matches_payment_over_dti() {
        let worksheet = default_worksheet();

        let estimate = worksheet.calculate(&test_input()).unwrap();
        let expected = worksheet
            .income_needed(estimate.total_monthly_payment)
            .unwrap();

        assert_eq!(estimate.annual_income_needed, expected);
    }

    // =========================================================================
    // monotonicity tests
    // =========================================================================

    #[test]
    fn payment_increases_with_home_price() {
        let worksheet = default_worksheet();
        let mut cheaper = test_input();
        cheaper.home_price = dec!(700000.00);

        let low = worksheet.calculate(&cheaper).unwrap();
        let high = worksheet.calculate(&test_input()).unwrap();

        assert_eq!(low.total_monthly_payment, dec!(5267.59));
        assert!(low.total_monthly_payment < high.total_monthly_payment);
    }

    #[test]
    fn payment_increases_with_rate() {
        let worksheet = default_worksheet();
        let mut pricier = test_input();
        pricier.annual_rate_percent = dec!(7.50);

        let low = worksheet.calculate(&test_input()).unwrap();
        let high = worksheet.calculate(&pricier).unwrap();

        assert_eq!(high.total_monthly_payment, dec!(6220.70));
        assert!(high.total_monthly_payment > low.total_monthly_payment);
    }

    #[test]
    fn payment_decreases_with_down_payment() {
        let worksheet = default_worksheet();
        let mut larger_down = test_input();
        larger_down.down_payment_percent = dec!(10.00);

        let smaller = worksheet.calculate(&larger_down).unwrap();
        let bigger = worksheet.calculate(&test_input()).unwrap();

        assert_eq!(smaller.total_monthly_payment, dec!(5670.18));
        assert!(smaller.total_monthly_payment < bigger.total_monthly_payment);
    }

    // =========================================================================
    // borrower profile tests
    // =========================================================================

    #[test]
    fn credit_and_loan_type_are_inert_under_default_policy() {
        let worksheet = default_worksheet();
        let baseline = worksheet.calculate(&test_input()).unwrap();

        for credit in CreditTier::all() {
            for loan_type in LoanType::all() {
                let mut input = test_input();
                input.credit = *credit;
                input.loan_type = *loan_type;

                assert_eq!(worksheet.calculate(&input).unwrap(), baseline);
            }
        }
    }

    #[test]
    fn custom_rate_policy_moves_the_rate() {
        #[derive(Debug)]
        struct FairPenalty;

        impl RateAdjustmentPolicy for FairPenalty {
            fn rate_adjustment(
                &self,
                credit: CreditTier,
                _loan_type: LoanType,
            ) -> Decimal {
                if credit == CreditTier::Fair {
                    dec!(0.50)
                } else {
                    Decimal::ZERO
                }
            }
        }

        let policy = FairPenalty;
        let worksheet =
            PaymentWorksheet::with_rate_policy(PaymentWorksheetConfig::default(), &policy);

        let mut input = test_input();
        input.credit = CreditTier::Fair;
        let adjusted = worksheet.calculate(&input).unwrap();

        // Same numbers as a nominal 7.50% rate.
        assert_eq!(adjusted.effective_annual_rate, dec!(7.50));
        assert_eq!(adjusted.total_monthly_payment, dec!(6220.70));

        input.credit = CreditTier::Excellent;
        let unadjusted = worksheet.calculate(&input).unwrap();
        assert_eq!(unadjusted.effective_annual_rate, dec!(7.00));
        assert_eq!(unadjusted.total_monthly_payment, dec!(5962.97));
    }
}
