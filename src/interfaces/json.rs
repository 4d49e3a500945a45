use crate::domain::rental::RentalTransaction;
use crate::error::Result;
use std::io::Write;

/// Writes transactions as a pretty-printed JSON array followed by a newline.
pub fn write_transactions<W: Write>(mut sink: W, transactions: &[RentalTransaction]) -> Result<()> {
    serde_json::to_writer_pretty(&mut sink, transactions)?;
    writeln!(sink)?;
    Ok(())
}
