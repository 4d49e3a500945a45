//! Adapters between the outside world and the agency: CSV and JSON formats,
//! plus the built-in sample data.

pub mod csv;
pub mod demo;
pub mod json;
