use crate::domain::ports::{FleetStore, TransactionLog};
use crate::domain::rental::RentalTransaction;
use crate::domain::vehicle::{Rentable, Vehicle};
use crate::error::{RentalError, Result};
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

/// A thread-safe in-memory fleet.
///
/// Vehicles live in a `Vec` so that listing follows insertion order. The write
/// lock is held across lookup and state change in `check_out` and `check_in`,
/// so two callers can never both rent the same vehicle.
#[derive(Default, Clone)]
pub struct InMemoryFleetStore {
    vehicles: Arc<RwLock<Vec<Vehicle>>>,
}

impl InMemoryFleetStore {
    /// Creates a new, empty in-memory fleet.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl FleetStore for InMemoryFleetStore {
    async fn insert(&self, vehicle: Vehicle) -> Result<()> {
        let mut vehicles = self.vehicles.write().await;
        if vehicles.iter().any(|v| v.id() == vehicle.id()) {
            return Err(RentalError::DuplicateVehicle(vehicle.id().to_string()));
        }
        vehicles.push(vehicle);
        Ok(())
    }

    async fn get(&self, vehicle_id: &str) -> Result<Option<Vehicle>> {
        let vehicles = self.vehicles.read().await;
        Ok(vehicles.iter().find(|v| v.id() == vehicle_id).cloned())
    }

    async fn all(&self) -> Result<Vec<Vehicle>> {
        let vehicles = self.vehicles.read().await;
        Ok(vehicles.clone())
    }

    async fn check_out(&self, vehicle_id: &str) -> Result<Vehicle> {
        let mut vehicles = self.vehicles.write().await;
        let vehicle = vehicles
            .iter_mut()
            .find(|v| v.id() == vehicle_id)
            .ok_or_else(|| RentalError::VehicleNotFound(vehicle_id.to_string()))?;
        vehicle.rent()?;
        Ok(vehicle.clone())
    }

    async fn check_in(&self, vehicle_id: &str) -> Result<Vehicle> {
        let mut vehicles = self.vehicles.write().await;
        let vehicle = vehicles
            .iter_mut()
            .find(|v| v.id() == vehicle_id)
            .ok_or_else(|| RentalError::VehicleNotFound(vehicle_id.to_string()))?;
        vehicle.return_vehicle()?;
        Ok(vehicle.clone())
    }
}

/// A thread-safe in-memory transaction log.
#[derive(Default, Clone)]
pub struct InMemoryTransactionLog {
    transactions: Arc<RwLock<Vec<RentalTransaction>>>,
}

impl InMemoryTransactionLog {
    /// Creates a new, empty in-memory transaction log.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TransactionLog for InMemoryTransactionLog {
    async fn append(&self, tx: RentalTransaction) -> Result<()> {
        let mut transactions = self.transactions.write().await;
        transactions.push(tx);
        Ok(())
    }

    async fn all(&self) -> Result<Vec<RentalTransaction>> {
        let transactions = self.transactions.read().await;
        Ok(transactions.clone())
    }

    async fn len(&self) -> Result<usize> {
        let transactions = self.transactions.read().await;
        Ok(transactions.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::customer::Customer;
    use crate::domain::vehicle::RentalDays;
    use rust_decimal_macros::dec;

    #[tokio::test]
    async fn test_in_memory_fleet_store() {
        let store = InMemoryFleetStore::new();
        let car = Vehicle::car("V001", "Toyota Camry", dec!(50), true);

        store.insert(car.clone()).await.unwrap();
        let retrieved = store.get("V001").await.unwrap().unwrap();
        assert_eq!(retrieved, car);

        assert!(store.get("V999").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_fleet_store_rejects_duplicate_ids() {
        let store = InMemoryFleetStore::new();
        store
            .insert(Vehicle::car("V001", "Toyota Camry", dec!(50), true))
            .await
            .unwrap();

        let result = store
            .insert(Vehicle::motorcycle("V001", "Honda CBR", dec!(30)))
            .await;
        assert!(matches!(result, Err(RentalError::DuplicateVehicle(id)) if id == "V001"));

        let all = store.all().await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].model(), "Toyota Camry");
    }

    #[tokio::test]
    async fn test_fleet_store_keeps_insertion_order() {
        let store = InMemoryFleetStore::new();
        for id in ["V003", "V001", "V002"] {
            store
                .insert(Vehicle::motorcycle(id, "Honda CBR", dec!(30)))
                .await
                .unwrap();
        }

        let ids: Vec<String> = store
            .all()
            .await
            .unwrap()
            .iter()
            .map(|v| v.id().to_string())
            .collect();
        assert_eq!(ids, ["V003", "V001", "V002"]);
    }

    #[tokio::test]
    async fn test_check_out_and_check_in() {
        let store = InMemoryFleetStore::new();
        store
            .insert(Vehicle::motorcycle("V002", "Honda CBR", dec!(30)))
            .await
            .unwrap();

        let rented = store.check_out("V002").await.unwrap();
        assert!(!rented.is_available());
        assert!(matches!(
            store.check_out("V002").await,
            Err(RentalError::VehicleAlreadyRented(_))
        ));

        let returned = store.check_in("V002").await.unwrap();
        assert!(returned.is_available());
        assert!(matches!(
            store.check_in("V002").await,
            Err(RentalError::VehicleNotRented(_))
        ));

        assert!(matches!(
            store.check_out("V404").await,
            Err(RentalError::VehicleNotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_in_memory_transaction_log() {
        let log = InMemoryTransactionLog::new();
        let customer = Customer::new("C001", "Alice");
        let bike = Vehicle::motorcycle("V002", "Honda CBR", dec!(30));
        let tx = RentalTransaction::new(&customer, &bike, RentalDays::new(2).unwrap()).unwrap();

        log.append(tx.clone()).await.unwrap();
        assert_eq!(log.len().await.unwrap(), 1);
        assert_eq!(log.all().await.unwrap(), vec![tx]);
    }
}
