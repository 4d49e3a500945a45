use super::customer::Customer;
use super::vehicle::{RentalDays, Vehicle};
use crate::error::Result;
use rust_decimal::Decimal;
use serde::Serialize;
use std::fmt;

/// An approved rental.
///
/// Captures who rented which vehicle, for how long, and what it cost at the
/// moment of approval. Transactions are never modified after creation.
#[derive(Debug, Serialize, PartialEq, Clone)]
pub struct RentalTransaction {
    customer_id: String,
    customer_name: String,
    vehicle_id: String,
    vehicle_model: String,
    days: u32,
    cost: Decimal,
}

impl RentalTransaction {
    /// Records a rental of `vehicle` by `customer`, pricing it with the vehicle's own rule.
    pub fn new(customer: &Customer, vehicle: &Vehicle, days: RentalDays) -> Result<Self> {
        Ok(Self {
            customer_id: customer.id().to_string(),
            customer_name: customer.name().to_string(),
            vehicle_id: vehicle.id().to_string(),
            vehicle_model: vehicle.model().to_string(),
            days: days.value(),
            cost: vehicle.compute_rental_cost(days.value())?,
        })
    }

    pub fn customer_id(&self) -> &str {
        &self.customer_id
    }

    pub fn customer_name(&self) -> &str {
        &self.customer_name
    }

    pub fn vehicle_id(&self) -> &str {
        &self.vehicle_id
    }

    pub fn vehicle_model(&self) -> &str {
        &self.vehicle_model
    }

    pub fn days(&self) -> u32 {
        self.days
    }

    pub fn cost(&self) -> Decimal {
        self.cost
    }
}

impl fmt::Display for RentalTransaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Customer: {}, Vehicle: {}, Days: {}",
            self.customer_name, self.vehicle_model, self.days
        )
    }
}
