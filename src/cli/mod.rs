mod console;

pub use console::Console;

use anyhow::{Context, Result};
use chrono::Local;
use clap::{Parser, Subcommand};

use crate::application::{sample_flights, BookingService};
use crate::domain::{format_date_time, parse_date_time, Flight, Seats};
use crate::io::{ImportOptions, Importer};

/// Flightdesk - Flight Search and Booking
#[derive(Parser)]
#[command(name = "flightdesk")]
#[command(about = "An in-memory flight search and booking ledger")]
#[command(version)]
pub struct Cli {
    /// Seed the ledger from a flights CSV instead of the sample schedule
    #[arg(long, global = true)]
    pub flights: Option<String>,

    /// Start with an empty ledger (ignored when --flights is given)
    #[arg(long, global = true)]
    pub no_sample: bool,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Interactive menu (default)
    Console,

    /// List all registered flights
    Flights,

    /// Show a flight and its reservations
    Show {
        /// Flight number (case-insensitive)
        flight_number: String,
    },

    /// Search flights by destination and departure date
    Search {
        /// Destination city (case-insensitive, exact match)
        destination: String,

        /// Departure date and time ("yyyy-MM-dd HH:mm"); only the date is used
        date_time: String,
    },

    /// Book seats on a flight
    Book {
        /// Customer name
        customer: String,

        /// Flight number (case-insensitive)
        flight_number: String,

        /// Number of seats to book
        #[arg(allow_negative_numbers = true)]
        seats: Seats,
    },

    /// Load flights from a CSV file into the ledger and report the outcome
    Import {
        /// Flights CSV (flight_number,destination,departure,available_seats)
        file: String,

        /// Preview without registering anything
        #[arg(long)]
        dry_run: bool,

        /// Skip flight numbers that are already registered
        #[arg(long)]
        skip_duplicates: bool,

        /// Only check that each row is well formed
        #[arg(long)]
        validate: bool,
    },

    /// Export data to CSV or JSON
    Export {
        /// What to export: flights, reservations, full
        export_type: String,

        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },
}

impl Cli {
    /// Build the ledger this invocation works on.
    async fn build_service(&self) -> Result<BookingService> {
        let service = BookingService::new();

        match &self.flights {
            Some(path) => {
                let file = std::fs::File::open(path)
                    .with_context(|| format!("Failed to open flights file: {}", path))?;
                let result = Importer::new(&service)
                    .import_flights_csv(file, ImportOptions::default())
                    .await?;

                if !result.is_clean() {
                    let details: Vec<String> =
                        result.errors.iter().take(10).map(|e| e.to_string()).collect();
                    anyhow::bail!(
                        "Failed to load {} flight(s) from {}:\n  {}",
                        result.errors.len(),
                        path,
                        details.join("\n  ")
                    );
                }
                tracing::debug!(count = result.imported, path = %path, "flights loaded");
            }
            None if !self.no_sample => {
                service
                    .add_flights(sample_flights(Local::now().naive_local()))
                    .await?;
            }
            None => {}
        }

        Ok(service)
    }

    pub async fn run(self) -> Result<()> {
        let service = self.build_service().await?;

        match self.command.unwrap_or(Commands::Console) {
            Commands::Console => {
                let stdin = std::io::stdin();
                let mut console = Console::new(&service, stdin.lock(), std::io::stdout());
                console.run().await?;
            }

            Commands::Flights => {
                let flights = service.get_all_flights().await;
                if flights.is_empty() {
                    println!("No flights registered.");
                } else {
                    print_flights_table(&flights);
                }
            }

            Commands::Show { flight_number } => {
                let info = service.get_flight(&flight_number).await?;
                let flight = &info.flight;

                println!("Flight: {}", flight.flight_number);
                println!("  Handle:          {}", info.id);
                println!("  Destination:     {}", flight.destination);
                println!("  Departure:       {}", format_date_time(&flight.departure));
                println!("  Available seats: {}", flight.available_seats);
                println!(
                    "  Booked seats:    {} ({} reservations)",
                    info.seats_booked,
                    info.reservations.len()
                );
                for reservation in &info.reservations {
                    println!(
                        "    {} {} x{}",
                        reservation.id, reservation.customer_name, reservation.seats_booked
                    );
                }
            }

            Commands::Search {
                destination,
                date_time,
            } => {
                let date_time = parse_date_time(&date_time)
                    .with_context(|| format!("Invalid date format '{}'", date_time))?;
                let flights = service.search_flights(&destination, date_time).await;

                if flights.is_empty() {
                    println!(
                        "No available flights found for {} on {}.",
                        destination,
                        date_time.date()
                    );
                } else {
                    print_flights_table(&flights);
                }
            }

            Commands::Book {
                customer,
                flight_number,
                seats,
            } => {
                let result = service
                    .book_flight(&customer, &flight_number, seats)
                    .await
                    .context("Booking failed")?;

                println!(
                    "Booked {} seat(s) on {} for {} ({})",
                    result.reservation.seats_booked,
                    result.flight.flight_number,
                    result.reservation.customer_name,
                    result.reservation.id
                );
                println!(
                    "  Departure: {} to {}",
                    format_date_time(&result.flight.departure),
                    result.flight.destination
                );
                println!("  Remaining seats: {}", result.flight.available_seats);
            }

            Commands::Import {
                file,
                dry_run,
                skip_duplicates,
                validate,
            } => {
                let options = ImportOptions {
                    dry_run,
                    skip_duplicates,
                    validate_only: validate,
                };
                run_import_command(&service, &file, options).await?;
            }

            Commands::Export {
                export_type,
                output,
            } => {
                run_export_command(&service, &export_type, output.as_deref()).await?;
            }
        }

        Ok(())
    }
}

async fn run_import_command(
    service: &BookingService,
    path: &str,
    options: ImportOptions,
) -> Result<()> {
    let file = std::fs::File::open(path)
        .with_context(|| format!("Failed to open input file: {}", path))?;
    let preview = options.dry_run || options.validate_only;
    let result = Importer::new(service)
        .import_flights_csv(file, options)
        .await?;

    if preview {
        println!("Validation complete");
    } else {
        println!("Import complete");
    }
    println!("  Imported: {}", result.imported);
    println!("  Skipped:  {}", result.skipped);
    println!("  Errors:   {}", result.errors.len());

    if !result.errors.is_empty() {
        println!("\nErrors:");
        for error in result.errors.iter().take(10) {
            println!("  {}", error);
        }
        if result.errors.len() > 10 {
            println!("  ... and {} more", result.errors.len() - 10);
        }
    }

    if !preview && result.imported > 0 {
        println!();
        print_flights_table(&service.get_all_flights().await);
    }

    Ok(())
}

async fn run_export_command(
    service: &BookingService,
    export_type: &str,
    output: Option<&str>,
) -> Result<()> {
    use crate::io::Exporter;
    use std::fs::File;
    use std::io::{stdout, Write};

    let exporter = Exporter::new(service);

    // Determine output writer
    let writer: Box<dyn Write> = match output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create output file: {}", path))?;
            Box::new(file)
        }
        None => Box::new(stdout()),
    };

    match export_type {
        "flights" => {
            let count = exporter.export_flights_csv(writer).await?;
            if output.is_some() {
                eprintln!("Exported {} flights", count);
            }
        }
        "reservations" => {
            let count = exporter.export_reservations_csv(writer).await?;
            if output.is_some() {
                eprintln!("Exported {} reservations", count);
            }
        }
        "full" => {
            let snapshot = exporter.export_full_json(writer).await?;
            if output.is_some() {
                eprintln!(
                    "Exported ledger: {} flights, {} reservations",
                    snapshot.flights.len(),
                    snapshot.reservations.len()
                );
            }
        }
        _ => {
            anyhow::bail!(
                "Invalid export type '{}'. Valid types: flights, reservations, full",
                export_type
            );
        }
    }

    Ok(())
}

fn print_flights_table(flights: &[Flight]) {
    println!(
        "{:<10} {:<20} {:<17} {:>6}",
        "FLIGHT", "DESTINATION", "DEPARTURE", "SEATS"
    );
    println!("{}", "-".repeat(56));
    for flight in flights {
        println!(
            "{:<10} {:<20} {:<17} {:>6}",
            flight.flight_number,
            truncate(&flight.destination, 20),
            format_date_time(&flight.departure),
            flight.available_seats
        );
    }
}

fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}
