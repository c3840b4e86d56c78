use crate::error::{CommissionError, Result};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// A commission rate expressed as a fraction of the sale price.
///
/// This is a wrapper around `rust_decimal::Decimal` to enforce that rates
/// stay within `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "Decimal")]
pub struct Rate(Decimal);

impl Rate {
    pub fn new(value: Decimal) -> Result<Self> {
        if value >= Decimal::ZERO && value <= Decimal::ONE {
            Ok(Self(value))
        } else {
            Err(CommissionError::InvalidSchedule(format!(
                "rate {value} is outside [0, 1]"
            )))
        }
    }

    pub fn value(&self) -> Decimal {
        self.0
    }

    /// The rate in percentage form (0-100).
    pub fn as_percent(&self) -> Decimal {
        self.0 * Decimal::ONE_HUNDRED
    }
}

impl TryFrom<Decimal> for Rate {
    type Error = CommissionError;

    fn try_from(value: Decimal) -> Result<Self> {
        Self::new(value)
    }
}

/// One band of the sliding commission scale.
///
/// The rate falls linearly from `floor_rate` at the band floor to
/// `ceiling_rate` at the band ceiling. A band without a ceiling is flat and
/// always charges `floor_rate`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RateBand {
    pub floor: Decimal,
    #[serde(default)]
    pub ceiling: Option<Decimal>,
    pub floor_rate: Rate,
    pub ceiling_rate: Rate,
}

impl RateBand {
    /// Whether the band's ceiling admits the given price.
    pub fn admits(&self, price: Decimal) -> bool {
        match self.ceiling {
            Some(ceiling) => price <= ceiling,
            None => true,
        }
    }

    /// The interpolated rate at `price`.
    ///
    /// The fractional position within the band is clamped into `[0, 1]`, so
    /// prices that fall just outside the band bounds take the nearest
    /// boundary rate.
    pub fn rate_at(&self, price: Decimal) -> Rate {
        let Some(ceiling) = self.ceiling else {
            return self.floor_rate;
        };
        if self.floor_rate == self.ceiling_rate {
            return self.floor_rate;
        }
        let position =
            ((price - self.floor) / (ceiling - self.floor)).clamp(Decimal::ZERO, Decimal::ONE);
        let drop = (self.floor_rate.value() - self.ceiling_rate.value()) * position;
        Rate(self.floor_rate.value() - drop)
    }
}

/// The complete sliding-scale commission table.
///
/// Admin tooling owns these settings and supplies adjusted tables through a
/// `ScheduleSource`; the engine only consumes a validated copy. `Default` is
/// the production table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TierSchedule {
    /// Lowest price accepted for consignment.
    pub minimum_price: Decimal,
    /// Rate bands ordered by floor, lowest first. The final band has no
    /// ceiling.
    pub bands: Vec<RateBand>,
    /// Fraction added to the net payout when paid as store credit.
    pub store_credit_bonus: Decimal,
}

impl Default for TierSchedule {
    fn default() -> Self {
        Self {
            minimum_price: dec!(50),
            bands: vec![
                RateBand {
                    floor: dec!(50),
                    ceiling: Some(dec!(99.99)),
                    floor_rate: Rate(dec!(0.50)),
                    ceiling_rate: Rate(dec!(0.40)),
                },
                RateBand {
                    floor: dec!(100),
                    ceiling: Some(dec!(199.99)),
                    floor_rate: Rate(dec!(0.40)),
                    ceiling_rate: Rate(dec!(0.30)),
                },
                RateBand {
                    floor: dec!(200),
                    ceiling: Some(dec!(499.99)),
                    floor_rate: Rate(dec!(0.30)),
                    ceiling_rate: Rate(dec!(0.20)),
                },
                RateBand {
                    floor: dec!(500),
                    ceiling: None,
                    floor_rate: Rate(dec!(0.20)),
                    ceiling_rate: Rate(dec!(0.20)),
                },
            ],
            store_credit_bonus: dec!(0.10),
        }
    }
}

impl TierSchedule {
    /// Builds a schedule and rejects malformed tables.
    pub fn new(
        minimum_price: Decimal,
        bands: Vec<RateBand>,
        store_credit_bonus: Decimal,
    ) -> Result<Self> {
        let schedule = Self {
            minimum_price,
            bands,
            store_credit_bonus,
        };
        schedule.validate()?;
        Ok(schedule)
    }

    /// Checks the structural invariants of the table: bands are ordered and
    /// non-overlapping, only the last band is unbounded, rates never increase
    /// with price, and the bonus is non-negative.
    pub fn validate(&self) -> Result<()> {
        if self.bands.is_empty() {
            return Err(CommissionError::InvalidSchedule(
                "schedule has no rate bands".to_string(),
            ));
        }
        if self.minimum_price < Decimal::ZERO {
            return Err(CommissionError::InvalidSchedule(format!(
                "minimum price {} is negative",
                self.minimum_price
            )));
        }
        if self.store_credit_bonus < Decimal::ZERO {
            return Err(CommissionError::InvalidSchedule(format!(
                "store credit bonus {} is negative",
                self.store_credit_bonus
            )));
        }
        if let Some(first) = self.bands.first()
            && first.floor > self.minimum_price
        {
            return Err(CommissionError::InvalidSchedule(format!(
                "first band starts at {} but the minimum price is {}",
                first.floor, self.minimum_price
            )));
        }
        for band in &self.bands {
            if let Some(ceiling) = band.ceiling
                && ceiling <= band.floor
            {
                return Err(CommissionError::InvalidSchedule(format!(
                    "band ceiling {} does not exceed its floor {}",
                    ceiling, band.floor
                )));
            }
            if band.ceiling_rate > band.floor_rate {
                return Err(CommissionError::InvalidSchedule(format!(
                    "rate increases within the band starting at {}",
                    band.floor
                )));
            }
        }
        for pair in self.bands.windows(2) {
            let (lower, upper) = (&pair[0], &pair[1]);
            let Some(ceiling) = lower.ceiling else {
                return Err(CommissionError::InvalidSchedule(
                    "only the last band may be unbounded".to_string(),
                ));
            };
            if upper.floor < ceiling {
                return Err(CommissionError::InvalidSchedule(format!(
                    "band starting at {} overlaps the band below it",
                    upper.floor
                )));
            }
            if upper.floor_rate > lower.ceiling_rate {
                return Err(CommissionError::InvalidSchedule(format!(
                    "rate increases across the seam at {}",
                    upper.floor
                )));
            }
        }
        if let Some(last) = self.bands.last()
            && last.ceiling.is_some()
        {
            return Err(CommissionError::InvalidSchedule(
                "the last band must be unbounded".to_string(),
            ));
        }
        Ok(())
    }

    pub fn is_eligible(&self, price: Decimal) -> bool {
        price >= self.minimum_price
    }

    /// The rate for an eligible price: the first band in listed order whose
    /// ceiling admits it. The unbounded final band admits everything, so on a
    /// validated schedule this only returns `None` for prices no band covers.
    pub fn rate_for(&self, price: Decimal) -> Option<Rate> {
        self.bands
            .iter()
            .find(|band| band.admits(price))
            .map(|band| band.rate_at(price))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rate_bounds() {
        assert!(Rate::new(dec!(0)).is_ok());
        assert!(Rate::new(dec!(1)).is_ok());
        assert!(matches!(
            Rate::new(dec!(1.01)),
            Err(CommissionError::InvalidSchedule(_))
        ));
        assert!(matches!(
            Rate::new(dec!(-0.1)),
            Err(CommissionError::InvalidSchedule(_))
        ));
    }

    #[test]
    fn test_rate_as_percent() {
        assert_eq!(Rate::new(dec!(0.45)).unwrap().as_percent(), dec!(45));
    }

    #[test]
    fn test_default_schedule_is_valid() {
        assert!(TierSchedule::default().validate().is_ok());
    }

    #[test]
    fn test_band_interpolates_downward() {
        let band = RateBand {
            floor: dec!(100),
            ceiling: Some(dec!(200)),
            floor_rate: Rate(dec!(0.40)),
            ceiling_rate: Rate(dec!(0.30)),
        };
        assert_eq!(band.rate_at(dec!(100)).value(), dec!(0.40));
        assert_eq!(band.rate_at(dec!(150)).value(), dec!(0.35));
        assert_eq!(band.rate_at(dec!(200)).value(), dec!(0.30));
    }

    #[test]
    fn test_band_clamps_out_of_range_prices() {
        let band = RateBand {
            floor: dec!(100),
            ceiling: Some(dec!(200)),
            floor_rate: Rate(dec!(0.40)),
            ceiling_rate: Rate(dec!(0.30)),
        };
        assert_eq!(band.rate_at(dec!(50)).value(), dec!(0.40));
        assert_eq!(band.rate_at(dec!(500)).value(), dec!(0.30));
    }

    #[test]
    fn test_unbounded_band_is_flat() {
        let band = RateBand {
            floor: dec!(500),
            ceiling: None,
            floor_rate: Rate(dec!(0.20)),
            ceiling_rate: Rate(dec!(0.20)),
        };
        assert_eq!(band.rate_at(dec!(500)).value(), dec!(0.20));
        assert_eq!(band.rate_at(dec!(1000000)).value(), dec!(0.20));
    }

    #[test]
    fn test_rate_for_picks_first_admitting_band() {
        let schedule = TierSchedule::default();
        assert_eq!(schedule.rate_for(dec!(50)).unwrap().value(), dec!(0.50));
        assert_eq!(schedule.rate_for(dec!(99.99)).unwrap().value(), dec!(0.40));
        assert_eq!(schedule.rate_for(dec!(100)).unwrap().value(), dec!(0.40));
        assert_eq!(schedule.rate_for(dec!(750)).unwrap().value(), dec!(0.20));
    }

    #[test]
    fn test_rate_for_seam_gap_takes_next_band_floor_rate() {
        // 99.995 sits between band 1's ceiling and band 2's floor; the scan
        // admits it into band 2 and the clamp pins it to that band's floor.
        let schedule = TierSchedule::default();
        assert_eq!(schedule.rate_for(dec!(99.995)).unwrap().value(), dec!(0.40));
    }

    #[test]
    fn test_validate_rejects_overlapping_bands() {
        let schedule = TierSchedule {
            minimum_price: dec!(50),
            bands: vec![
                RateBand {
                    floor: dec!(50),
                    ceiling: Some(dec!(150)),
                    floor_rate: Rate(dec!(0.50)),
                    ceiling_rate: Rate(dec!(0.40)),
                },
                RateBand {
                    floor: dec!(100),
                    ceiling: None,
                    floor_rate: Rate(dec!(0.40)),
                    ceiling_rate: Rate(dec!(0.40)),
                },
            ],
            store_credit_bonus: dec!(0.10),
        };
        assert!(matches!(
            schedule.validate(),
            Err(CommissionError::InvalidSchedule(_))
        ));
    }

    #[test]
    fn test_validate_rejects_bounded_last_band() {
        let schedule = TierSchedule {
            minimum_price: dec!(50),
            bands: vec![RateBand {
                floor: dec!(50),
                ceiling: Some(dec!(100)),
                floor_rate: Rate(dec!(0.50)),
                ceiling_rate: Rate(dec!(0.40)),
            }],
            store_credit_bonus: dec!(0.10),
        };
        assert!(matches!(
            schedule.validate(),
            Err(CommissionError::InvalidSchedule(_))
        ));
    }

    #[test]
    fn test_validate_rejects_increasing_rates() {
        let schedule = TierSchedule {
            minimum_price: dec!(50),
            bands: vec![
                RateBand {
                    floor: dec!(50),
                    ceiling: Some(dec!(100)),
                    floor_rate: Rate(dec!(0.30)),
                    ceiling_rate: Rate(dec!(0.30)),
                },
                RateBand {
                    floor: dec!(100),
                    ceiling: None,
                    floor_rate: Rate(dec!(0.40)),
                    ceiling_rate: Rate(dec!(0.40)),
                },
            ],
            store_credit_bonus: dec!(0.10),
        };
        assert!(matches!(
            schedule.validate(),
            Err(CommissionError::InvalidSchedule(_))
        ));
    }

    #[test]
    fn test_validate_rejects_negative_bonus() {
        let mut schedule = TierSchedule::default();
        schedule.store_credit_bonus = dec!(-0.10);
        assert!(matches!(
            schedule.validate(),
            Err(CommissionError::InvalidSchedule(_))
        ));
    }

    #[test]
    fn test_new_validates() {
        assert!(TierSchedule::new(dec!(50), vec![], dec!(0.10)).is_err());
    }
}
