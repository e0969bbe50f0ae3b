use serde::{Deserialize, Serialize};

/// Loan program collected on the form.
///
/// Currently has no effect on the computed payment: one flat PMI rule is
/// applied regardless of program. FHA/VA-specific mortgage insurance rules
/// are intentionally not implemented; see the rate-adjustment policy seam.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum LoanType {
    #[default]
    Conventional,
    Fha,
    Va,
}

impl LoanType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Conventional => "conventional",
            Self::Fha => "fha",
            Self::Va => "va",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "conventional" => Some(Self::Conventional),
            "fha" => Some(Self::Fha),
            "va" => Some(Self::Va),
            _ => None,
        }
    }

    pub fn all() -> &'static [LoanType] {
        &[Self::Conventional, Self::Fha, Self::Va]
    }
}
