use crate::domain::rental::RentalTransaction;
use rust_decimal::Decimal;
use std::fmt;

pub const REPORT_HEADER: &str = "Rental Transactions Report:";

/// A snapshot of the transaction log, in the order rentals were approved.
///
/// `lines` renders entries lazily and can be called any number of times.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Report {
    transactions: Vec<RentalTransaction>,
}

impl Report {
    pub fn new(transactions: Vec<RentalTransaction>) -> Self {
        Self { transactions }
    }

    pub fn lines(&self) -> impl Iterator<Item = String> + '_ {
        self.transactions.iter().map(ToString::to_string)
    }

    pub fn transactions(&self) -> &[RentalTransaction] {
        &self.transactions
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    /// Sum of the costs recorded on every transaction.
    pub fn total_revenue(&self) -> Decimal {
        self.transactions
            .iter()
            .map(RentalTransaction::cost)
            .sum::<Decimal>()
            .normalize()
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{REPORT_HEADER}")?;
        for line in self.lines() {
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}
