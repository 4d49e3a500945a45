pub mod fleet_reader;
pub mod request_reader;
pub mod transaction_writer;
