use rust_decimal::Decimal;
use thiserror::Error;

pub type Result<T, E = CommissionError> = std::result::Result<T, E>;

#[derive(Error, Debug)]
pub enum CommissionError {
    #[error("invalid price {0}: prices must be non-negative amounts")]
    InvalidPrice(Decimal),
    #[error("unrecognized payout type `{0}`: expected `cash` or `store_credit`")]
    UnknownPayoutType(String),
    #[error("invalid tier schedule: {0}")]
    InvalidSchedule(String),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("schedule file error: {0}")]
    ScheduleFile(#[from] serde_json::Error),
}
