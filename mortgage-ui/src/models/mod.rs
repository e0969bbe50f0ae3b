pub mod mortgage_form_model;

pub use mortgage_form_model::MortgageFormModel;
