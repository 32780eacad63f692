use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::application::BookingService;
use crate::domain::{format_date_time, Flight, Reservation};

/// Ledger snapshot for full export
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LedgerSnapshot {
    pub version: String,
    pub exported_at: DateTime<Utc>,
    pub flights: Vec<Flight>,
    pub reservations: Vec<Reservation>,
}

/// Header of the flights CSV, shared with the importer.
pub const FLIGHTS_CSV_HEADER: [&str; 4] =
    ["flight_number", "destination", "departure", "available_seats"];

/// Exporter for converting ledger data to various formats
pub struct Exporter<'a> {
    service: &'a BookingService,
}

impl<'a> Exporter<'a> {
    pub fn new(service: &'a BookingService) -> Self {
        Self { service }
    }

    /// Export flights to CSV format (readable back by the importer)
    pub async fn export_flights_csv<W: Write>(&self, writer: W) -> Result<usize> {
        let flights = self.service.get_all_flights().await;
        let mut csv_writer = csv::Writer::from_writer(writer);

        csv_writer.write_record(FLIGHTS_CSV_HEADER)?;

        for flight in &flights {
            let departure = format_date_time(&flight.departure);
            let seats = flight.available_seats.to_string();
            csv_writer.write_record([
                &flight.flight_number,
                &flight.destination,
                &departure,
                &seats,
            ])?;
        }

        csv_writer.flush()?;
        Ok(flights.len())
    }

    /// Export reservations to CSV format
    pub async fn export_reservations_csv<W: Write>(&self, writer: W) -> Result<usize> {
        let reservations = self.service.get_all_reservation_infos().await;
        let mut csv_writer = csv::Writer::from_writer(writer);

        csv_writer.write_record([
            "id",
            "customer_name",
            "flight_number",
            "destination",
            "departure",
            "seats_booked",
            "booked_at",
        ])?;

        for info in &reservations {
            csv_writer.write_record([
                info.reservation.id.to_string(),
                info.reservation.customer_name.clone(),
                info.flight.flight_number.clone(),
                info.flight.destination.clone(),
                format_date_time(&info.flight.departure),
                info.reservation.seats_booked.to_string(),
                info.reservation.booked_at.to_rfc3339(),
            ])?;
        }

        csv_writer.flush()?;
        Ok(reservations.len())
    }

    /// Export the whole ledger as a JSON snapshot
    pub async fn export_full_json<W: Write>(&self, mut writer: W) -> Result<LedgerSnapshot> {
        let snapshot = LedgerSnapshot {
            version: env!("CARGO_PKG_VERSION").to_string(),
            exported_at: Utc::now(),
            flights: self.service.get_all_flights().await,
            reservations: self.service.get_all_reservations().await,
        };

        let json = serde_json::to_string_pretty(&snapshot)?;
        writer.write_all(json.as_bytes())?;
        writer.flush()?;

        Ok(snapshot)
    }
}
