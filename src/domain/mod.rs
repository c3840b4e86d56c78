pub mod payout;
pub mod ports;
pub mod quote;
pub mod schedule;
