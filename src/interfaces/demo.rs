use super::csv::request_reader::RentalRequest;
use crate::domain::vehicle::Vehicle;
use rust_decimal_macros::dec;

/// The fleet used when no fleet file is given: one vehicle of each kind.
pub fn sample_fleet() -> Vec<Vehicle> {
    vec![
        Vehicle::car("V001", "Toyota Camry", dec!(50), true),
        Vehicle::motorcycle("V002", "Honda CBR", dec!(30)),
        Vehicle::truck("V003", "Ford F-150", dec!(70), dec!(1000)),
    ]
}

/// Alice rents the car for three days and the motorcycle for two.
pub fn sample_requests() -> Vec<RentalRequest> {
    vec![
        RentalRequest::rent("C001", "Alice", "V001", 3),
        RentalRequest::rent("C001", "Alice", "V002", 2),
    ]
}
