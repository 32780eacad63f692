use chrono::NaiveDateTime;

use super::{Flight, FlightId, Reservation, Seats};

/// The booking ledger: registered flights and issued reservations, both
/// kept in insertion order. All lookups are linear scans.
///
/// The ledger is a plain value with `&mut self` mutation; callers that need
/// shared access wrap it (see `BookingService`).
#[derive(Debug, Clone, Default)]
pub struct Ledger {
    flights: Vec<Flight>,
    reservations: Vec<Reservation>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a flight. Duplicate flight numbers are permitted; key lookups
    /// resolve to the first one registered.
    pub fn add_flight(&mut self, flight: Flight) -> Result<FlightId, LedgerError> {
        if flight.available_seats < 0 {
            return Err(LedgerError::NegativeAvailableSeats);
        }

        let id = FlightId(self.flights.len());
        self.flights.push(flight);
        Ok(id)
    }

    /// Flights to `destination` (case-insensitive, exact) departing on the
    /// calendar date of `date_time` with at least one seat left.
    /// The time-of-day component of `date_time` is ignored.
    pub fn search_flights(&self, destination: &str, date_time: NaiveDateTime) -> Vec<&Flight> {
        let search_date = date_time.date();

        self.flights
            .iter()
            .filter(|f| f.matches_destination(destination))
            .filter(|f| f.departure_date() == search_date)
            .filter(|f| f.has_available_seats())
            .collect()
    }

    /// Book `seats` on the flight identified by `flight_number`.
    ///
    /// Validation runs in a fixed order and stops at the first failure:
    /// customer name, flight reference, seat count, existence, availability.
    /// Nothing is mutated unless every check passes.
    pub fn book_flight(
        &mut self,
        customer_name: &str,
        flight_number: &str,
        seats: Seats,
    ) -> Result<Reservation, LedgerError> {
        if customer_name.trim().is_empty() {
            return Err(LedgerError::CustomerNameRequired);
        }

        if flight_number.trim().is_empty() {
            return Err(LedgerError::FlightRequired);
        }

        if seats <= 0 {
            return Err(LedgerError::InvalidSeatCount);
        }

        let id = self
            .find_flight_id(flight_number)
            .ok_or(LedgerError::FlightNotFound)?;

        let flight = &mut self.flights[id.0];
        if flight.available_seats < seats {
            return Err(LedgerError::InsufficientSeats {
                requested: seats,
                available: flight.available_seats,
            });
        }

        let reservation = Reservation::new(customer_name, id, flight.flight_number.clone(), seats);
        flight.reduce_available_seats(seats);
        self.reservations.push(reservation.clone());

        Ok(reservation)
    }

    /// Reservations whose customer name equals `customer_name` ignoring case.
    /// A blank name matches nothing.
    pub fn reservations_by_customer(&self, customer_name: &str) -> Vec<&Reservation> {
        self.reservations
            .iter()
            .filter(|r| r.is_for_customer(customer_name))
            .collect()
    }

    /// First flight (in insertion order) whose number matches ignoring case.
    pub fn find_flight_id(&self, flight_number: &str) -> Option<FlightId> {
        let flight_number = flight_number.trim();
        self.flights
            .iter()
            .position(|f| f.matches_number(flight_number))
            .map(FlightId)
    }

    pub fn find_flight(&self, flight_number: &str) -> Option<&Flight> {
        self.find_flight_id(flight_number).and_then(|id| self.flight(id))
    }

    /// Resolve a handle to the live flight.
    pub fn flight(&self, id: FlightId) -> Option<&Flight> {
        self.flights.get(id.0)
    }

    /// The live flight a reservation was booked on.
    pub fn flight_for(&self, reservation: &Reservation) -> Option<&Flight> {
        self.flight(reservation.flight_id)
    }

    pub fn flights(&self) -> &[Flight] {
        &self.flights
    }

    pub fn reservations(&self) -> &[Reservation] {
        &self.reservations
    }
}

/// Rejections raised by the ledger. Every variant is an invalid argument
/// from the caller's point of view; the messages are user-facing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LedgerError {
    CustomerNameRequired,
    FlightRequired,
    InvalidSeatCount,
    FlightNotFound,
    InsufficientSeats { requested: Seats, available: Seats },
    NegativeAvailableSeats,
}

impl std::fmt::Display for LedgerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LedgerError::CustomerNameRequired => {
                write!(f, "Customer name cannot be null or empty")
            }
            LedgerError::FlightRequired => write!(f, "Flight cannot be null"),
            LedgerError::InvalidSeatCount => {
                write!(f, "Number of seats must be greater than zero")
            }
            LedgerError::FlightNotFound => write!(f, "Flight not found in the system"),
            LedgerError::InsufficientSeats {
                requested,
                available,
            } => write!(
                f,
                "Not enough seats available. Requested: {}, Available: {}",
                requested, available
            ),
            LedgerError::NegativeAvailableSeats => {
                write!(f, "Available seats cannot be negative")
            }
        }
    }
}

impl std::error::Error for LedgerError {}
