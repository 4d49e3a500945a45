use super::report::Report;
use crate::domain::customer::Customer;
use crate::domain::ports::{FleetStoreBox, TransactionLogBox};
use crate::domain::rental::RentalTransaction;
use crate::domain::vehicle::{RentalDays, Rentable, Vehicle};
use crate::error::{RentalError, Result};
use rust_decimal::Decimal;
use tracing::{debug, info, warn};

/// The main entry point for rental processing.
///
/// `RentalAgency` owns the fleet and the transaction log through its storage
/// ports. Each operation awaits its storage calls before returning, so the
/// effects of one rental are visible to the next.
pub struct RentalAgency {
    fleet: FleetStoreBox,
    transactions: TransactionLogBox,
}

impl RentalAgency {
    /// Creates a new `RentalAgency` instance.
    ///
    /// # Arguments
    ///
    /// * `fleet` - The store holding the agency's vehicles.
    /// * `transactions` - The log of approved rentals.
    pub fn new(fleet: FleetStoreBox, transactions: TransactionLogBox) -> Self {
        Self {
            fleet,
            transactions,
        }
    }

    /// Validates a vehicle and adds it to the fleet.
    ///
    /// Vehicle ids are unique within a fleet; a second vehicle with a known id
    /// is rejected with `DuplicateVehicle`.
    pub async fn add_vehicle_to_fleet(&self, vehicle: Vehicle) -> Result<()> {
        vehicle.validate()?;
        let (id, kind) = (vehicle.id().to_string(), vehicle.kind().name());
        self.fleet.insert(vehicle).await?;
        info!(vehicle = %id, kind, "vehicle added to fleet");
        Ok(())
    }

    /// Rents the vehicle `vehicle_id` to `customer` for `days` days.
    ///
    /// On success the vehicle is marked rented, the transaction is appended to
    /// the log and the vehicle is added to the customer's history. On failure
    /// none of these change.
    pub async fn process_rental(
        &self,
        customer: &mut Customer,
        vehicle_id: &str,
        days: i64,
    ) -> Result<RentalTransaction> {
        let outcome = self.try_rent(customer, vehicle_id, days).await;
        match &outcome {
            Ok(tx) => info!(
                customer = customer.id(),
                vehicle = vehicle_id,
                days = tx.days(),
                cost = %tx.cost(),
                "rental processed"
            ),
            Err(e) => warn!(
                customer = customer.id(),
                vehicle = vehicle_id,
                days,
                error = %e,
                "rental rejected"
            ),
        }
        outcome
    }

    async fn try_rent(
        &self,
        customer: &mut Customer,
        vehicle_id: &str,
        days: i64,
    ) -> Result<RentalTransaction> {
        let days = RentalDays::new(days)?;
        let vehicle = self.fleet.check_out(vehicle_id).await?;

        let recorded = match RentalTransaction::new(customer, &vehicle, days) {
            Ok(tx) => self.transactions.append(tx.clone()).await.map(|()| tx),
            Err(e) => Err(e),
        };
        match recorded {
            Ok(tx) => {
                customer.add_rental_to_history(vehicle.id());
                Ok(tx)
            }
            Err(e) => {
                self.release(vehicle_id).await;
                Err(e)
            }
        }
    }

    /// Puts a checked-out vehicle back after a rental could not be recorded.
    async fn release(&self, vehicle_id: &str) {
        if let Err(e) = self.fleet.check_in(vehicle_id).await {
            warn!(vehicle = vehicle_id, error = %e, "could not release vehicle");
        }
    }

    /// Returns a rented vehicle to the fleet, making it rentable again.
    pub async fn return_vehicle(&self, vehicle_id: &str) -> Result<Vehicle> {
        match self.fleet.check_in(vehicle_id).await {
            Ok(vehicle) => {
                info!(vehicle = vehicle_id, "vehicle returned");
                Ok(vehicle)
            }
            Err(e) => {
                warn!(vehicle = vehicle_id, error = %e, "return rejected");
                Err(e)
            }
        }
    }

    /// Prices a rental of `vehicle_id` for `days` days without renting it.
    pub async fn quote(&self, vehicle_id: &str, days: i64) -> Result<Decimal> {
        let days = RentalDays::new(days)?;
        let vehicle = self
            .fleet
            .get(vehicle_id)
            .await?
            .ok_or_else(|| RentalError::VehicleNotFound(vehicle_id.to_string()))?;
        let cost = vehicle.compute_rental_cost(days.value())?;
        debug!(vehicle = vehicle_id, days = days.value(), cost = %cost, "quote");
        Ok(cost)
    }

    pub async fn vehicle(&self, vehicle_id: &str) -> Result<Option<Vehicle>> {
        self.fleet.get(vehicle_id).await
    }

    /// All vehicles, in the order they joined the fleet.
    pub async fn fleet(&self) -> Result<Vec<Vehicle>> {
        self.fleet.all().await
    }

    pub async fn available_vehicles(&self) -> Result<Vec<Vehicle>> {
        let mut vehicles = self.fleet.all().await?;
        vehicles.retain(|v| v.is_rentable());
        Ok(vehicles)
    }

    pub async fn transactions(&self) -> Result<Vec<RentalTransaction>> {
        self.transactions.all().await
    }

    pub async fn transaction_count(&self) -> Result<usize> {
        self.transactions.len().await
    }

    /// Takes a snapshot of the transaction log for rendering.
    pub async fn generate_report(&self) -> Result<Report> {
        Ok(Report::new(self.transactions.all().await?))
    }
}
