//! Application layer containing the rental orchestration.
//!
//! This module defines the `RentalAgency`, the primary entry point for adding
//! vehicles, renting and returning them, and reporting on approved rentals.

pub mod agency;
pub mod report;
