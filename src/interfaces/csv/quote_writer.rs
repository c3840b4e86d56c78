use crate::domain::payout::PayoutMethod;
use crate::domain::quote::CommissionOutcome;
use crate::error::Result;
use rust_decimal::Decimal;
use serde::Serialize;
use std::io::Write;

/// One flat output row of a batch quoting run.
///
/// Ineligible rows keep the amount columns empty and carry the floor
/// explanation in `note`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuoteRecord {
    pub price: Decimal,
    pub payout_type: PayoutMethod,
    pub eligible: bool,
    pub commission_rate: Option<Decimal>,
    pub commission_amount: Option<Decimal>,
    pub payout_amount: Option<Decimal>,
    pub note: Option<String>,
}

impl QuoteRecord {
    pub fn new(price: Decimal, payout_type: PayoutMethod, outcome: &CommissionOutcome) -> Self {
        match outcome {
            CommissionOutcome::Quoted(breakdown) => Self {
                price,
                payout_type: breakdown.payout_type,
                eligible: true,
                commission_rate: Some(breakdown.commission_rate),
                commission_amount: Some(breakdown.commission_amount),
                payout_amount: Some(breakdown.payout_amount),
                note: None,
            },
            CommissionOutcome::BelowMinimum { message } => Self {
                price,
                payout_type,
                eligible: false,
                commission_rate: None,
                commission_amount: None,
                payout_amount: None,
                note: Some(message.clone()),
            },
        }
    }
}

/// Writes quote records to a CSV sink.
pub struct QuoteWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> QuoteWriter<W> {
    /// Creates a new `QuoteWriter` over any `Write` sink (e.g., Stdout).
    pub fn new(sink: W) -> Self {
        Self {
            writer: csv::Writer::from_writer(sink),
        }
    }

    pub fn write_record(&mut self, record: &QuoteRecord) -> Result<()> {
        self.writer.serialize(record)?;
        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
