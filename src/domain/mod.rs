//! Domain layer: vehicles, customers, rental records and the storage ports the
//! application layer depends on.

pub mod customer;
pub mod ports;
pub mod rental;
pub mod vehicle;
