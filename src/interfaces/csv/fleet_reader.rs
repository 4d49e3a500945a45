use crate::domain::vehicle::{Vehicle, VehicleKind};
use crate::error::{RentalError, Result};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::io::Read;

#[derive(Debug, Deserialize, PartialEq, Clone, Copy)]
#[serde(rename_all = "lowercase")]
pub enum VehicleCategory {
    Car,
    Motorcycle,
    Truck,
}

/// One row of a fleet file: `kind, id, model, rate, navigation, cargo_capacity`.
#[derive(Debug, Deserialize, PartialEq, Clone)]
pub struct FleetRecord {
    pub kind: VehicleCategory,
    pub id: String,
    pub model: String,
    pub rate: Decimal,
    pub navigation: Option<bool>,
    pub cargo_capacity: Option<Decimal>,
}

impl TryFrom<FleetRecord> for Vehicle {
    type Error = RentalError;

    fn try_from(record: FleetRecord) -> Result<Self> {
        let kind = match record.kind {
            VehicleCategory::Car => VehicleKind::Car {
                has_navigation: record.navigation.unwrap_or(false),
            },
            VehicleCategory::Motorcycle => VehicleKind::Motorcycle,
            VehicleCategory::Truck => VehicleKind::Truck {
                cargo_capacity: record.cargo_capacity.ok_or_else(|| {
                    RentalError::ValidationError(format!(
                        "Truck {} is missing its cargo capacity",
                        record.id
                    ))
                })?,
            },
        };
        Ok(Vehicle::new(record.id, record.model, record.rate, kind))
    }
}

/// Reads fleet vehicles from a CSV source.
///
/// Whitespace is trimmed and trailing optional columns may be omitted.
pub struct FleetReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> FleetReader<R> {
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    /// Lazily reads and converts each row into a `Vehicle`.
    pub fn vehicles(self) -> impl Iterator<Item = Result<Vehicle>> {
        self.reader
            .into_deserialize::<FleetRecord>()
            .map(|result| Vehicle::try_from(result?))
    }
}
