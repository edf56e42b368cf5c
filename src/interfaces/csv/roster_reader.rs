use crate::error::{Result, StrategyError};
use crate::interfaces::roster::{ChannelEntry, PaymentEntry};
use serde::de::DeserializeOwned;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Reads strategy rosters from a CSV source.
///
/// Headers are required. Whitespace around fields is trimmed and short rows are
/// accepted so optional trailing columns can be left out.
pub struct RosterReader<R: Read> {
    reader: csv::Reader<R>,
}

impl RosterReader<File> {
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path)?;
        Ok(Self::new(file))
    }
}

impl<R: Read> RosterReader<R> {
    /// Wraps `source`; the first row must be the column header.
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    /// Lazily deserializes payment method rows (`kind,id,balance`).
    pub fn payment_entries(self) -> impl Iterator<Item = Result<PaymentEntry>> {
        self.entries()
    }

    /// Lazily deserializes notification channel rows (`kind,sender,priority`).
    pub fn channel_entries(self) -> impl Iterator<Item = Result<ChannelEntry>> {
        self.entries()
    }

    fn entries<T: DeserializeOwned>(self) -> impl Iterator<Item = Result<T>> {
        self.reader
            .into_deserialize()
            .map(|result| result.map_err(StrategyError::from))
    }
}
