use crate::domain::quote::QuoteRequest;
use crate::error::{CommissionError, Result};
use std::io::Read;

/// Reads quote requests from a CSV source.
///
/// This reader wraps `csv::Reader` and provides an iterator over
/// `Result<QuoteRequest>`. It handles whitespace trimming and flexible record
/// lengths automatically, so rows may omit the `payout_type` column.
pub struct QuoteReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> QuoteReader<R> {
    /// Creates a new `QuoteReader` from any `Read` source (e.g., File, Stdin).
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    /// Returns an iterator that lazily reads and deserializes quote requests.
    ///
    /// This allows processing large batches in a streaming fashion without
    /// loading the entire file into memory.
    pub fn quotes(self) -> impl Iterator<Item = Result<QuoteRequest>> {
        self.reader
            .into_deserialize()
            .map(|result| result.map_err(CommissionError::from))
    }
}
