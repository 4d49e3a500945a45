use thiserror::Error;

#[derive(Error, Debug)]
pub enum RentalError {
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("Vehicle {0} not found")]
    VehicleNotFound(String),
    #[error("Vehicle {0} is already rented")]
    VehicleAlreadyRented(String),
    #[error("Vehicle {0} is not currently rented")]
    VehicleNotRented(String),
    #[error("Invalid rental duration: {0} days")]
    InvalidDuration(i64),
    #[error("Vehicle {0} is already in the fleet")]
    DuplicateVehicle(String),
    #[error("Rental cost of vehicle {0} overflows")]
    CostOverflow(String),
    #[error("Validation error: {0}")]
    ValidationError(String),
}

pub type Result<T> = std::result::Result<T, RentalError>;
