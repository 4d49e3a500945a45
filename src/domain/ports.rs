use super::rental::RentalTransaction;
use super::vehicle::Vehicle;
use crate::error::Result;
use async_trait::async_trait;

/// Storage for the vehicles of one agency, kept in insertion order.
#[async_trait]
pub trait FleetStore: Send + Sync {
    /// Adds a vehicle. Fails with `DuplicateVehicle` if the id is already taken.
    async fn insert(&self, vehicle: Vehicle) -> Result<()>;
    async fn get(&self, vehicle_id: &str) -> Result<Option<Vehicle>>;
    async fn all(&self) -> Result<Vec<Vehicle>>;
    /// Looks up the vehicle and marks it rented as one atomic step.
    async fn check_out(&self, vehicle_id: &str) -> Result<Vehicle>;
    /// Looks up the vehicle and marks it available as one atomic step.
    async fn check_in(&self, vehicle_id: &str) -> Result<Vehicle>;
}

/// Append-only log of approved rentals.
#[async_trait]
pub trait TransactionLog: Send + Sync {
    async fn append(&self, tx: RentalTransaction) -> Result<()>;
    async fn all(&self) -> Result<Vec<RentalTransaction>>;
    async fn len(&self) -> Result<usize>;
}

pub type FleetStoreBox = Box<dyn FleetStore>;
pub type TransactionLogBox = Box<dyn TransactionLog>;
