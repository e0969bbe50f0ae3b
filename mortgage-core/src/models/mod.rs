mod credit_tier;
mod loan_type;
mod mortgage_inputs;

pub use credit_tier::CreditTier;
pub use loan_type::LoanType;
pub use mortgage_inputs::MortgageInputs;
