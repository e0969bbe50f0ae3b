use std::fmt;

use mortgage_core::{CreditTier, LoanType, MortgageInputs};
use rust_decimal::Decimal;

/// Represents the collected values from the calculator form.
#[derive(Clone, Debug, Default)]
pub struct MortgageFormModel {
    pub home_price: Decimal,
    pub down_payment_percent: Decimal,
    pub annual_rate_percent: Decimal,
    pub annual_taxes: Decimal,
    pub monthly_hoa: Decimal,
    pub credit: CreditTier,
    pub loan_type: LoanType,
}

impl MortgageFormModel {
    /// Converts the form snapshot into the worksheet's input record.
    pub fn to_inputs(&self) -> MortgageInputs {
        MortgageInputs {
            home_price: self.home_price,
            down_payment_percent: self.down_payment_percent,
            annual_rate_percent: self.annual_rate_percent,
            annual_taxes: self.annual_taxes,
            monthly_hoa: self.monthly_hoa,
            credit: self.credit,
            loan_type: self.loan_type,
        }
    }
}

impl fmt::Display for MortgageFormModel {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        writeln!(f, "Home price:      {}", self.home_price)?;
        writeln!(f, "Down payment:    {}%", self.down_payment_percent)?;
        writeln!(f, "Interest rate:   {}%", self.annual_rate_percent)?;
        writeln!(f, "Annual taxes:    {}", self.annual_taxes)?;
        writeln!(f, "Monthly HOA:     {}", self.monthly_hoa)?;
        writeln!(f, "Credit:          {}", self.credit.as_str())?;
        write!(f, "Loan type:       {}", self.loan_type.as_str())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn to_inputs_carries_every_field() {
        let model = MortgageFormModel {
            home_price: dec!(800000.00),
            down_payment_percent: dec!(5.00),
            annual_rate_percent: dec!(7.00),
            annual_taxes: dec!(4800.00),
            monthly_hoa: dec!(50.00),
            credit: CreditTier::Good,
            loan_type: LoanType::Fha,
        };

        let inputs = model.to_inputs();

        assert_eq!(inputs.home_price, dec!(800000.00));
        assert_eq!(inputs.down_payment_percent, dec!(5.00));
        assert_eq!(inputs.annual_rate_percent, dec!(7.00));
        assert_eq!(inputs.annual_taxes, dec!(4800.00));
        assert_eq!(inputs.monthly_hoa, dec!(50.00));
        assert_eq!(inputs.credit, CreditTier::Good);
        assert_eq!(inputs.loan_type, LoanType::Fha);
    }
}
