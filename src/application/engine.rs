use crate::domain::payout::PayoutMethod;
use crate::domain::quote::{CommissionBreakdown, CommissionOutcome, EligibilityCheck};
use crate::domain::schedule::TierSchedule;
use crate::error::{CommissionError, Result};
use rust_decimal::{Decimal, RoundingStrategy};

/// The commission calculation engine.
///
/// `CommissionEngine` holds a validated tier schedule and nothing else: every
/// calculation is a pure function of its inputs, so a single engine can serve
/// any number of callers concurrently.
pub struct CommissionEngine {
    schedule: TierSchedule,
}

impl CommissionEngine {
    /// Creates an engine over `schedule`, rejecting malformed tables.
    pub fn new(schedule: TierSchedule) -> Result<Self> {
        schedule.validate()?;
        Ok(Self { schedule })
    }

    pub fn schedule(&self) -> &TierSchedule {
        &self.schedule
    }

    /// Checks whether `price` clears the consignment minimum.
    ///
    /// Negative prices are rejected as `InvalidPrice`; a price below the
    /// minimum is a normal ineligible result, not an error.
    pub fn check_eligibility(&self, price: Decimal) -> Result<EligibilityCheck> {
        Self::validate_price(price)?;
        if self.schedule.is_eligible(price) {
            Ok(EligibilityCheck::passed())
        } else {
            Ok(EligibilityCheck::below_minimum(self.schedule.minimum_price))
        }
    }

    /// Quotes commission and payout for a sale.
    ///
    /// The rate comes from the sliding scale, the commission is rounded to
    /// minor-unit precision, and the payout takes the remainder, so
    /// commission plus net payout always reconciles to the price. The
    /// store-credit bonus multiplies the net payout, not the gross price.
    pub fn calculate_commission(
        &self,
        price: Decimal,
        payout_type: PayoutMethod,
    ) -> Result<CommissionOutcome> {
        Self::validate_price(price)?;
        if !self.schedule.is_eligible(price) {
            return Ok(CommissionOutcome::below_minimum(self.schedule.minimum_price));
        }

        let rate = self.schedule.rate_for(price).ok_or_else(|| {
            CommissionError::InvalidSchedule(format!("no rate band covers price {price}"))
        })?;

        let commission_amount = round_amount(price * rate.value());
        let net_payout = price - commission_amount;
        let payout_amount = match payout_type {
            PayoutMethod::Cash => net_payout,
            PayoutMethod::StoreCredit => {
                round_amount(net_payout * (Decimal::ONE + self.schedule.store_credit_bonus))
            }
        };

        Ok(CommissionOutcome::Quoted(CommissionBreakdown {
            commission_rate: round_rate_percent(rate.as_percent()),
            commission_amount,
            payout_amount,
            payout_type,
        }))
    }

    fn validate_price(price: Decimal) -> Result<()> {
        if price < Decimal::ZERO {
            return Err(CommissionError::InvalidPrice(price));
        }
        Ok(())
    }
}

impl Default for CommissionEngine {
    fn default() -> Self {
        Self {
            schedule: TierSchedule::default(),
        }
    }
}

fn round_amount(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

fn round_rate_percent(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero)
}
