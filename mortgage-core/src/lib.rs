pub mod calculations;
pub mod models;

pub use calculations::{
    FlatRatePolicy, InvalidInputError, PaymentEstimate, PaymentWorksheet, PaymentWorksheetConfig,
    RateAdjustmentPolicy,
};
pub use models::*;
