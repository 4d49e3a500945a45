#![allow(dead_code)]

use rental_agency::application::agency::RentalAgency;
use rental_agency::domain::ports::{FleetStoreBox, TransactionLogBox};
use rental_agency::infrastructure::in_memory::{InMemoryFleetStore, InMemoryTransactionLog};
use rental_agency::interfaces::demo;
use std::io::Write;
use tempfile::NamedTempFile;

pub async fn sample_agency() -> RentalAgency {
    let fleet: FleetStoreBox = Box::new(InMemoryFleetStore::new());
    let transactions: TransactionLogBox = Box::new(InMemoryTransactionLog::new());
    let agency = RentalAgency::new(fleet, transactions);
    for vehicle in demo::sample_fleet() {
        agency.add_vehicle_to_fleet(vehicle).await.unwrap();
    }
    agency
}

pub fn csv_file(header: &str, rows: &[&str]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "{header}").unwrap();
    for row in rows {
        writeln!(file, "{row}").unwrap();
    }
    file.flush().unwrap();
    file
}

pub const FLEET_HEADER: &str = "kind, id, model, rate, navigation, cargo_capacity";
pub const RENTALS_HEADER: &str = "action, customer, name, vehicle, days";
