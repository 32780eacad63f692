// Allow dead_code because these helpers are used across different test files
// which are compiled separately
#![allow(dead_code)]

use anyhow::Result;
use chrono::NaiveDateTime;
use flightdesk::application::BookingService;
use flightdesk::domain::{Flight, Seats};

/// Helper to parse a "yyyy-MM-dd HH:mm" string into a NaiveDateTime
pub fn at(date_time: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(date_time, "%Y-%m-%d %H:%M").unwrap()
}

/// Helper to build a flight departing at a "yyyy-MM-dd HH:mm" time
pub fn flight(number: &str, destination: &str, departure: &str, seats: Seats) -> Flight {
    Flight::new(number, destination, at(departure), seats)
}

/// Helper to create a service over an empty ledger
pub fn test_service() -> BookingService {
    BookingService::new()
}

/// Test fixture: Standard flight setup
pub struct StandardFlights;

impl StandardFlights {
    /// AA101/AA102 to New York on Christmas, UA201 to Los Angeles the day after
    pub fn basic() -> Vec<Flight> {
        vec![
            flight("AA101", "New York", "2024-12-25 10:00", 50),
            flight("AA102", "New York", "2024-12-25 15:30", 30),
            flight("UA201", "Los Angeles", "2024-12-26 08:00", 40),
        ]
    }

    /// Service pre-loaded with the basic flights
    pub async fn service() -> Result<BookingService> {
        Ok(BookingService::with_flights(Self::basic()).await?)
    }
}
