use crate::domain::rental::RentalTransaction;
use crate::error::Result;
use std::io::Write;

const HEADER: [&str; 6] = [
    "customer_id",
    "customer_name",
    "vehicle_id",
    "vehicle_model",
    "days",
    "cost",
];

/// Writes rental transactions as CSV, one row per transaction.
pub struct TransactionWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> TransactionWriter<W> {
    pub fn new(sink: W) -> Self {
        let writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(sink);
        Self { writer }
    }

    /// Writes the header followed by every transaction, then flushes.
    ///
    /// The header is written even when there are no transactions.
    pub fn write_transactions(&mut self, transactions: &[RentalTransaction]) -> Result<()> {
        self.writer.write_record(HEADER)?;
        for tx in transactions {
            self.writer.serialize(tx)?;
        }
        self.writer.flush()?;
        Ok(())
    }
}
