use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Seat counts are signed so that zero and negative requests can be
/// represented and rejected by validation instead of by the type system.
pub type Seats = i32;

/// Stable handle to a flight inside a [`Ledger`](super::Ledger).
/// Flights are never removed, so the index stays valid for the ledger's lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FlightId(pub(crate) usize);

impl FlightId {
    pub fn index(&self) -> usize {
        self.0
    }
}

impl std::fmt::Display for FlightId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A scheduled departure with a plain seat counter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Flight {
    /// Carrier code and number, e.g. "AA101"
    pub flight_number: String,
    pub destination: String,
    /// Local departure time (no timezone)
    pub departure: NaiveDateTime,
    /// Remaining bookable seats; only ever decreases
    pub available_seats: Seats,
}

impl Flight {
    pub fn new(
        flight_number: impl Into<String>,
        destination: impl Into<String>,
        departure: NaiveDateTime,
        available_seats: Seats,
    ) -> Self {
        Self {
            flight_number: flight_number.into(),
            destination: destination.into(),
            departure,
            available_seats,
        }
    }

    /// Calendar date of departure, used by date-based searches.
    pub fn departure_date(&self) -> NaiveDate {
        self.departure.date()
    }

    pub fn has_available_seats(&self) -> bool {
        self.available_seats > 0
    }

    /// Case-insensitive comparison against a typed flight number.
    pub fn matches_number(&self, flight_number: &str) -> bool {
        eq_ignore_case(&self.flight_number, flight_number)
    }

    pub fn matches_destination(&self, destination: &str) -> bool {
        eq_ignore_case(&self.destination, destination)
    }

    pub(crate) fn reduce_available_seats(&mut self, seats: Seats) {
        debug_assert!(seats <= self.available_seats);
        self.available_seats -= seats;
    }
}

/// Unicode-aware case-insensitive equality (whole string, not substring).
pub(crate) fn eq_ignore_case(a: &str, b: &str) -> bool {
    a.eq_ignore_ascii_case(b) || a.to_lowercase() == b.to_lowercase()
}

impl PartialEq for Flight {
    fn eq(&self, other: &Self) -> bool {
        self.flight_number == other.flight_number
    }
}

impl Eq for Flight {}

impl std::hash::Hash for Flight {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.flight_number.hash(state);
    }
}
