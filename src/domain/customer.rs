/// A customer of the agency and the vehicles they have rented so far.
#[derive(Debug, Clone, PartialEq)]
pub struct Customer {
    id: String,
    name: String,
    rental_history: Vec<String>,
}

impl Customer {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            rental_history: Vec::new(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Records a rented vehicle. Repeat rentals of the same vehicle are kept.
    pub fn add_rental_to_history(&mut self, vehicle_id: impl Into<String>) {
        self.rental_history.push(vehicle_id.into());
    }

    /// Vehicle ids in the order they were rented.
    pub fn rental_history(&self) -> &[String] {
        &self.rental_history
    }
}
