use crate::error::{RentalError, Result};
use serde::Deserialize;
use std::io::Read;

#[derive(Debug, Deserialize, PartialEq, Clone, Copy)]
#[serde(rename_all = "lowercase")]
pub enum RequestAction {
    Rent,
    Return,
}

/// A rent or return request: `action, customer, name, vehicle, days`.
///
/// `customer` and `name` are only read for rentals; returns may leave them empty.
#[derive(Debug, Deserialize, PartialEq, Clone)]
pub struct RentalRequest {
    pub action: RequestAction,
    #[serde(default)]
    pub customer: String,
    #[serde(default)]
    pub name: String,
    pub vehicle: String,
    pub days: Option<i64>,
}

impl RentalRequest {
    pub fn rent(
        customer: impl Into<String>,
        name: impl Into<String>,
        vehicle: impl Into<String>,
        days: i64,
    ) -> Self {
        Self {
            action: RequestAction::Rent,
            customer: customer.into(),
            name: name.into(),
            vehicle: vehicle.into(),
            days: Some(days),
        }
    }

    pub fn return_vehicle(vehicle: impl Into<String>) -> Self {
        Self {
            action: RequestAction::Return,
            customer: String::new(),
            name: String::new(),
            vehicle: vehicle.into(),
            days: None,
        }
    }
}

/// Reads rental requests from a CSV source.
pub struct RequestReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> RequestReader<R> {
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    /// Returns an iterator that lazily reads and deserializes requests.
    pub fn requests(self) -> impl Iterator<Item = Result<RentalRequest>> {
        self.reader
            .into_deserialize()
            .map(|result| result.map_err(RentalError::from))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reader_valid_stream() {
        let data = "action, customer, name, vehicle, days\n\
                    rent, C001, Alice, V001, 3\n\
                    return, , , V001,";
        let reader = RequestReader::new(data.as_bytes());
        let results: Vec<Result<RentalRequest>> = reader.requests().collect();

        assert_eq!(results.len(), 2);
        assert_eq!(
            results[0].as_ref().unwrap(),
            &RentalRequest::rent("C001", "Alice", "V001", 3)
        );
        assert_eq!(
            results[1].as_ref().unwrap(),
            &RentalRequest::return_vehicle("V001")
        );
    }

    #[test]
    fn test_reader_keeps_negative_days() {
        let data = "action, customer, name, vehicle, days\nrent, C001, Alice, V001, -2";
        let reader = RequestReader::new(data.as_bytes());
        let request = reader.requests().next().unwrap().unwrap();

        assert_eq!(request.days, Some(-2));
    }

    #[test]
    fn test_reader_malformed_line() {
        let data = "action, customer, name, vehicle, days\nborrow, C001, Alice, V001, 3";
        let reader = RequestReader::new(data.as_bytes());
        let results: Vec<Result<RentalRequest>> = reader.requests().collect();

        assert!(results[0].is_err());
    }
}
