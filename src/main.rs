use clap::{Parser, ValueEnum};
use miette::{IntoDiagnostic, Result};
use rental_agency::application::agency::RentalAgency;
use rental_agency::domain::customer::Customer;
use rental_agency::domain::ports::{FleetStoreBox, TransactionLogBox};
use rental_agency::domain::vehicle::Vehicle;
use rental_agency::error::RentalError;
use rental_agency::infrastructure::in_memory::{InMemoryFleetStore, InMemoryTransactionLog};
use rental_agency::interfaces::csv::fleet_reader::FleetReader;
use rental_agency::interfaces::csv::request_reader::{
    RentalRequest, RequestAction, RequestReader,
};
use rental_agency::interfaces::csv::transaction_writer::TransactionWriter;
use rental_agency::interfaces::{demo, json};
use std::collections::HashMap;
use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum ReportFormat {
    Text,
    Csv,
    Json,
}

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Fleet CSV file (kind, id, model, rate, navigation, cargo_capacity).
    /// The sample fleet is used when omitted.
    #[arg(long)]
    fleet: Option<PathBuf>,

    /// Rental requests CSV file (action, customer, name, vehicle, days).
    /// The sample rentals are used when omitted.
    #[arg(long)]
    rentals: Option<PathBuf>,

    /// Output format of the transaction report.
    #[arg(long, value_enum, default_value_t = ReportFormat::Text)]
    format: ReportFormat,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let fleet: FleetStoreBox = Box::new(InMemoryFleetStore::new());
    let transactions: TransactionLogBox = Box::new(InMemoryTransactionLog::new());
    let agency = RentalAgency::new(fleet, transactions);

    // Build the fleet
    let vehicles: Box<dyn Iterator<Item = std::result::Result<Vehicle, RentalError>>> =
        match cli.fleet {
            Some(path) => {
                let file = File::open(path).into_diagnostic()?;
                Box::new(FleetReader::new(file).vehicles())
            }
            None => Box::new(demo::sample_fleet().into_iter().map(Ok::<_, RentalError>)),
        };
    for vehicle_result in vehicles {
        match vehicle_result {
            Ok(vehicle) => {
                if let Err(e) = agency.add_vehicle_to_fleet(vehicle).await {
                    eprintln!("Error adding vehicle: {}", e);
                }
            }
            Err(e) => {
                eprintln!("Error reading vehicle: {}", e);
            }
        }
    }

    // Process rental requests
    let requests: Box<dyn Iterator<Item = std::result::Result<RentalRequest, RentalError>>> =
        match cli.rentals {
            Some(path) => {
                let file = File::open(path).into_diagnostic()?;
                Box::new(RequestReader::new(file).requests())
            }
            None => Box::new(demo::sample_requests().into_iter().map(Ok::<_, RentalError>)),
        };
    let mut customers: HashMap<String, Customer> = HashMap::new();
    for request_result in requests {
        match request_result {
            Ok(request) => {
                if let Err(e) = apply_request(&agency, &mut customers, request).await {
                    eprintln!("Error processing request: {}", e);
                }
            }
            Err(e) => {
                eprintln!("Error reading request: {}", e);
            }
        }
    }

    // Output the report
    let report = agency.generate_report().await.into_diagnostic()?;
    let stdout = io::stdout();
    let mut out = stdout.lock();
    match cli.format {
        ReportFormat::Text => write!(out, "{report}").into_diagnostic()?,
        ReportFormat::Csv => TransactionWriter::new(out)
            .write_transactions(report.transactions())
            .into_diagnostic()?,
        ReportFormat::Json => json::write_transactions(out, report.transactions()).into_diagnostic()?,
    }

    Ok(())
}

async fn apply_request(
    agency: &RentalAgency,
    customers: &mut HashMap<String, Customer>,
    request: RentalRequest,
) -> std::result::Result<(), RentalError> {
    match request.action {
        RequestAction::Rent => {
            if request.customer.is_empty() {
                return Err(RentalError::ValidationError(format!(
                    "Rental of {} has no customer id",
                    request.vehicle
                )));
            }
            let customer = customers
                .entry(request.customer.clone())
                .or_insert_with(|| Customer::new(request.customer, request.name.clone()));
            if !request.name.is_empty() && customer.name() != request.name {
                return Err(RentalError::ValidationError(format!(
                    "Customer {} is registered as {}, not {}",
                    customer.id(),
                    customer.name(),
                    request.name
                )));
            }
            agency
                .process_rental(customer, &request.vehicle, request.days.unwrap_or(0))
                .await?;
        }
        RequestAction::Return => {
            agency.return_vehicle(&request.vehicle).await?;
        }
    }
    Ok(())
}
