//! Mortgage payment calculation modules.
//!
//! The worksheet in [`worksheets::payment`] carries the fixed-rate
//! amortization math; [`rate_policy`] is the seam through which borrower
//! profile (credit tier, loan program) can adjust the nominal rate.

pub mod common;
pub mod rate_policy;
pub mod worksheets;

pub use rate_policy::{FlatRatePolicy, RateAdjustmentPolicy};
pub use worksheets::payment::{
    InvalidInputError, PaymentEstimate, PaymentWorksheet, PaymentWorksheetConfig,
};
