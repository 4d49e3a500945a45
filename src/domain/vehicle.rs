use crate::error::{RentalError, Result};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Flat daily surcharge for a car fitted with navigation.
pub const NAVIGATION_DAILY_FEE: Decimal = dec!(5);
/// Daily surcharge per unit of truck cargo capacity.
pub const CARGO_DAILY_FACTOR: Decimal = dec!(0.5);

/// A validated rental duration in whole days.
///
/// Ensures that a rental always lasts at least one day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct RentalDays(u32);

impl RentalDays {
    pub fn new(days: i64) -> Result<Self> {
        match u32::try_from(days) {
            Ok(value) if value > 0 => Ok(Self(value)),
            _ => Err(RentalError::InvalidDuration(days)),
        }
    }

    pub fn value(&self) -> u32 {
        self.0
    }
}

impl TryFrom<i64> for RentalDays {
    type Error = RentalError;

    fn try_from(value: i64) -> Result<Self> {
        Self::new(value)
    }
}

impl From<RentalDays> for u32 {
    fn from(days: RentalDays) -> Self {
        days.0
    }
}

/// The category of a vehicle together with the fields its pricing rule needs.
#[derive(Debug, Clone, PartialEq)]
pub enum VehicleKind {
    Car { has_navigation: bool },
    Motorcycle,
    Truck { cargo_capacity: Decimal },
}

impl VehicleKind {
    pub fn name(&self) -> &'static str {
        match self {
            VehicleKind::Car { .. } => "car",
            VehicleKind::Motorcycle => "motorcycle",
            VehicleKind::Truck { .. } => "truck",
        }
    }
}

/// The rent/return contract every fleet vehicle follows.
///
/// A vehicle starts out available. `rent` moves it to rented and
/// `return_vehicle` moves it back. Any other transition is rejected.
pub trait Rentable {
    fn is_rentable(&self) -> bool;
    fn rent(&mut self) -> Result<()>;
    fn return_vehicle(&mut self) -> Result<()>;
}

/// A vehicle of the fleet.
///
/// The identifier is fixed at construction. Availability is the only state that
/// changes over the vehicle's lifetime.
#[derive(Debug, Clone, PartialEq)]
pub struct Vehicle {
    id: String,
    model: String,
    base_rate: Decimal,
    available: bool,
    kind: VehicleKind,
}

impl Vehicle {
    pub fn new(
        id: impl Into<String>,
        model: impl Into<String>,
        base_rate: Decimal,
        kind: VehicleKind,
    ) -> Self {
        Self {
            id: id.into(),
            model: model.into(),
            base_rate,
            available: true,
            kind,
        }
    }

    pub fn car(
        id: impl Into<String>,
        model: impl Into<String>,
        base_rate: Decimal,
        has_navigation: bool,
    ) -> Self {
        Self::new(id, model, base_rate, VehicleKind::Car { has_navigation })
    }

    pub fn motorcycle(id: impl Into<String>, model: impl Into<String>, base_rate: Decimal) -> Self {
        Self::new(id, model, base_rate, VehicleKind::Motorcycle)
    }

    pub fn truck(
        id: impl Into<String>,
        model: impl Into<String>,
        base_rate: Decimal,
        cargo_capacity: Decimal,
    ) -> Self {
        Self::new(id, model, base_rate, VehicleKind::Truck { cargo_capacity })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn base_rate(&self) -> Decimal {
        self.base_rate
    }

    pub fn kind(&self) -> &VehicleKind {
        &self.kind
    }

    pub fn is_available(&self) -> bool {
        self.available
    }

    pub fn set_availability(&mut self, available: bool) {
        self.available = available;
    }

    /// Computes the cost of renting this vehicle for `days` days.
    ///
    /// The result is linear in `days`; zero days cost nothing. Fails with
    /// `CostOverflow` when the amount does not fit in a `Decimal`.
    pub fn compute_rental_cost(&self, days: u32) -> Result<Decimal> {
        let days = Decimal::from(days);
        let daily_surcharge = match &self.kind {
            VehicleKind::Car { has_navigation } if *has_navigation => Some(NAVIGATION_DAILY_FEE),
            VehicleKind::Car { .. } | VehicleKind::Motorcycle => Some(Decimal::ZERO),
            VehicleKind::Truck { cargo_capacity } => cargo_capacity.checked_mul(CARGO_DAILY_FACTOR),
        };
        daily_surcharge
            .and_then(|surcharge| self.base_rate.checked_add(surcharge))
            .and_then(|daily| daily.checked_mul(days))
            .map(|cost| cost.normalize())
            .ok_or_else(|| RentalError::CostOverflow(self.id.clone()))
    }

    /// Checks the invariants a vehicle must hold before it joins a fleet.
    pub fn validate(&self) -> Result<()> {
        if self.id.trim().is_empty() {
            return Err(RentalError::ValidationError(
                "Vehicle id must not be empty".to_string(),
            ));
        }
        if self.base_rate < Decimal::ZERO {
            return Err(RentalError::ValidationError(format!(
                "Vehicle {} has a negative base rate",
                self.id
            )));
        }
        if let VehicleKind::Truck { cargo_capacity } = &self.kind
            && *cargo_capacity < Decimal::ZERO
        {
            return Err(RentalError::ValidationError(format!(
                "Truck {} has a negative cargo capacity",
                self.id
            )));
        }
        Ok(())
    }
}

impl Rentable for Vehicle {
    fn is_rentable(&self) -> bool {
        self.available
    }

    fn rent(&mut self) -> Result<()> {
        if !self.is_rentable() {
            return Err(RentalError::VehicleAlreadyRented(self.id.clone()));
        }
        self.available = false;
        Ok(())
    }

    fn return_vehicle(&mut self) -> Result<()> {
        if self.is_rentable() {
            return Err(RentalError::VehicleNotRented(self.id.clone()));
        }
        self.available = true;
        Ok(())
    }
}
