use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{CreditTier, LoanType};

/// One calculation's worth of user-provided values.
///
/// The struct is a plain snapshot: it is rebuilt from the form on every input
/// change and discarded after the worksheet runs. The loan term is fixed at
/// 30 years and lives in [`PaymentWorksheetConfig`], not here.
///
/// [`PaymentWorksheetConfig`]: crate::calculations::PaymentWorksheetConfig
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MortgageInputs {
    /// Purchase price of the home. Must be positive.
    pub home_price: Decimal,

    /// Down payment as a percentage of the home price, in `[0, 100)`.
    pub down_payment_percent: Decimal,

    /// Nominal annual interest rate as a percentage. Must be non-negative.
    pub annual_rate_percent: Decimal,

    /// Annual property taxes. Must be non-negative.
    pub annual_taxes: Decimal,

    /// Monthly HOA fee. Must be non-negative.
    pub monthly_hoa: Decimal,

    /// Borrower credit score range. Inert under the default rate policy.
    pub credit: CreditTier,

    /// Loan program. Inert under the default rate policy.
    pub loan_type: LoanType,
}
