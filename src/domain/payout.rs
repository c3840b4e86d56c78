use crate::error::CommissionError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How a consignor wants to be paid out after a sale.
///
/// The canonical spellings are `cash` and `store_credit`. Upstream systems
/// historically also sent `storecredit` and `store-credit`, so those are
/// accepted on input and normalized here. Anything else is rejected.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PayoutMethod {
    #[default]
    Cash,
    #[serde(alias = "storecredit", alias = "store-credit")]
    StoreCredit,
}

impl PayoutMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Cash => "cash",
            Self::StoreCredit => "store_credit",
        }
    }
}

impl fmt::Display for PayoutMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PayoutMethod {
    type Err = CommissionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "cash" => Ok(Self::Cash),
            "store_credit" | "storecredit" | "store-credit" => Ok(Self::StoreCredit),
            other => Err(CommissionError::UnknownPayoutType(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_canonical_spellings() {
        assert_eq!("cash".parse::<PayoutMethod>().unwrap(), PayoutMethod::Cash);
        assert_eq!(
            "store_credit".parse::<PayoutMethod>().unwrap(),
            PayoutMethod::StoreCredit
        );
    }

    #[test]
    fn test_parse_legacy_spellings() {
        assert_eq!(
            "storecredit".parse::<PayoutMethod>().unwrap(),
            PayoutMethod::StoreCredit
        );
        assert_eq!(
            "store-credit".parse::<PayoutMethod>().unwrap(),
            PayoutMethod::StoreCredit
        );
    }

    #[test]
    fn test_parse_rejects_unknown() {
        assert!(matches!(
            "bogus".parse::<PayoutMethod>(),
            Err(CommissionError::UnknownPayoutType(_))
        ));
    }

    #[test]
    fn test_display_matches_canonical_spelling() {
        assert_eq!(PayoutMethod::Cash.to_string(), "cash");
        assert_eq!(PayoutMethod::StoreCredit.to_string(), "store_credit");
    }

    #[test]
    fn test_default_is_cash() {
        assert_eq!(PayoutMethod::default(), PayoutMethod::Cash);
    }
}
