use anyhow::Result;
use std::collections::HashSet;
use std::io::Read;

use crate::application::BookingService;
use crate::domain::{parse_date_time_lenient, Flight, Seats};

/// Result of an import operation
#[derive(Debug, Clone)]
pub struct ImportResult {
    pub imported: usize,
    pub skipped: usize,
    pub errors: Vec<ImportError>,
}

impl ImportResult {
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Error that occurred during import
#[derive(Debug, Clone)]
pub struct ImportError {
    pub line: usize,
    pub field: Option<String>,
    pub error: String,
}

impl std::fmt::Display for ImportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.field {
            Some(field) => write!(f, "line {}: {}: {}", self.line, field, self.error),
            None => write!(f, "line {}: {}", self.line, self.error),
        }
    }
}

/// Options for import operations
#[derive(Debug, Clone, Default)]
pub struct ImportOptions {
    /// Run every check, duplicates included, but register nothing
    pub dry_run: bool,
    /// Skip rows whose flight number is already registered or appeared
    /// earlier in the same file
    pub skip_duplicates: bool,
    /// Check each row on its own; the ledger is neither read nor written
    pub validate_only: bool,
}

/// Importer for loading flights into the ledger
pub struct Importer<'a> {
    service: &'a BookingService,
}

impl<'a> Importer<'a> {
    pub fn new(service: &'a BookingService) -> Self {
        Self { service }
    }

    /// Import flights from CSV with the columns
    /// `flight_number,destination,departure,available_seats`.
    pub async fn import_flights_csv<R: Read>(
        &self,
        reader: R,
        options: ImportOptions,
    ) -> Result<ImportResult> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);
        let mut imported = 0;
        let mut skipped = 0;
        let mut errors = Vec::new();
        let mut seen: HashSet<String> = HashSet::new();

        for (line_num, result) in csv_reader.records().enumerate() {
            let line = line_num + 2; // +2 for header and 0-indexing

            let record = match result {
                Ok(r) => r,
                Err(e) => {
                    errors.push(ImportError {
                        line,
                        field: None,
                        error: format!("CSV parse error: {}", e),
                    });
                    continue;
                }
            };

            let flight_number = record.get(0).unwrap_or("");
            let destination = record.get(1).unwrap_or("");
            let departure_str = record.get(2).unwrap_or("");
            let seats_str = record.get(3).unwrap_or("");

            if flight_number.is_empty() {
                errors.push(ImportError {
                    line,
                    field: Some("flight_number".to_string()),
                    error: "Flight number is required".to_string(),
                });
                continue;
            }

            if destination.is_empty() {
                errors.push(ImportError {
                    line,
                    field: Some("destination".to_string()),
                    error: "Destination is required".to_string(),
                });
                continue;
            }

            let departure = match parse_date_time_lenient(departure_str) {
                Ok(dt) => dt,
                Err(e) => {
                    errors.push(ImportError {
                        line,
                        field: Some("departure".to_string()),
                        error: format!("Invalid departure: {}", e),
                    });
                    continue;
                }
            };

            let available_seats = match seats_str.parse::<Seats>() {
                Ok(seats) if seats >= 0 => seats,
                _ => {
                    errors.push(ImportError {
                        line,
                        field: Some("available_seats".to_string()),
                        error: format!("Invalid seat count: '{}'", seats_str),
                    });
                    continue;
                }
            };

            if options.validate_only {
                imported += 1;
                continue;
            }

            if options.skip_duplicates {
                let first_in_file = seen.insert(flight_number.to_lowercase());
                if !first_in_file || self.service.find_flight(flight_number).await.is_some() {
                    skipped += 1;
                    continue;
                }
            }

            if options.dry_run {
                imported += 1;
                continue;
            }

            let flight = Flight::new(flight_number, destination, departure, available_seats);
            match self.service.add_flight(flight).await {
                Ok(_) => imported += 1,
                Err(e) => errors.push(ImportError {
                    line,
                    field: None,
                    error: format!("Flight registration failed: {}", e),
                }),
            }
        }

        Ok(ImportResult {
            imported,
            skipped,
            errors,
        })
    }
}
