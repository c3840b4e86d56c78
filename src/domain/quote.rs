use crate::domain::payout::PayoutMethod;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single request for a commission quote, as submitted by callers or read
/// from a CSV row.
#[derive(Debug, Deserialize, PartialEq, Clone)]
pub struct QuoteRequest {
    pub price: Decimal,
    #[serde(default)]
    pub payout_type: Option<PayoutMethod>,
}

impl QuoteRequest {
    /// The requested payout method, falling back to `fallback` when the
    /// request left it blank.
    pub fn payout_or(&self, fallback: PayoutMethod) -> PayoutMethod {
        self.payout_type.unwrap_or(fallback)
    }
}

/// Result of a standalone eligibility check.
///
/// `message` and `reason` are populated only when the price is below the
/// consignment minimum. They are display text, not machine-readable codes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EligibilityCheck {
    pub eligible: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl EligibilityCheck {
    pub fn passed() -> Self {
        Self {
            eligible: true,
            message: None,
            reason: None,
        }
    }

    pub fn below_minimum(minimum: Decimal) -> Self {
        Self {
            eligible: false,
            message: Some(floor_message(minimum)),
            reason: Some(format!(
                "price is below the {minimum:.2} consignment minimum"
            )),
        }
    }
}

/// Commission and payout amounts for an eligible sale.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CommissionBreakdown {
    /// Commission rate as a percentage, rounded to one decimal place.
    pub commission_rate: Decimal,
    pub commission_amount: Decimal,
    pub payout_amount: Decimal,
    pub payout_type: PayoutMethod,
}

/// Outcome of a commission calculation.
///
/// A price under the consignment minimum is an expected business outcome, not
/// an error, so it is a variant here rather than a `CommissionError`.
#[derive(Debug, Clone, PartialEq)]
pub enum CommissionOutcome {
    Quoted(CommissionBreakdown),
    BelowMinimum { message: String },
}

impl CommissionOutcome {
    pub fn below_minimum(minimum: Decimal) -> Self {
        Self::BelowMinimum {
            message: floor_message(minimum),
        }
    }

    pub fn is_eligible(&self) -> bool {
        matches!(self, Self::Quoted(_))
    }

    pub fn breakdown(&self) -> Option<&CommissionBreakdown> {
        match self {
            Self::Quoted(breakdown) => Some(breakdown),
            Self::BelowMinimum { .. } => None,
        }
    }
}

fn floor_message(minimum: Decimal) -> String {
    format!("Items priced under {minimum:.2} are not accepted for consignment")
}
