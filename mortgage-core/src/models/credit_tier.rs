use serde::{Deserialize, Serialize};

/// Borrower credit score range collected on the form.
///
/// Currently has no effect on the computed payment; it feeds the
/// rate-adjustment policy seam so a future policy can price credit risk.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CreditTier {
    #[default]
    Excellent,
    Good,
    Fair,
}

impl CreditTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Excellent => "excellent",
            Self::Good => "good",
            Self::Fair => "fair",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "excellent" => Some(Self::Excellent),
            "good" => Some(Self::Good),
            "fair" => Some(Self::Fair),
            _ => None,
        }
    }

    pub fn all() -> &'static [CreditTier] {
        &[Self::Excellent, Self::Good, Self::Fair]
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn parse_round_trips_every_tier() {
        for tier in CreditTier::all() {
            assert_eq!(CreditTier::parse(tier.as_str()), Some(*tier));
        }
    }

    #[test]
    fn parse_rejects_unknown_value() {
        assert_eq!(CreditTier::parse("poor"), None);
        assert_eq!(CreditTier::parse(""), None);
    }
}
