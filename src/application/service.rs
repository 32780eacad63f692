use chrono::NaiveDateTime;
use tokio::sync::RwLock;
use tracing::{debug, info};

use crate::domain::{Flight, FlightId, Ledger, Reservation, Seats};

use super::AppError;

/// Application service providing high-level operations over the booking ledger.
/// This is the primary interface for any client (console, one-shot CLI, importers).
///
/// The ledger sits behind a single read/write lock: searches and queries share
/// it, bookings take it exclusively so the seat check and the decrement happen
/// as one step.
pub struct BookingService {
    ledger: RwLock<Ledger>,
}

/// Result of a successful booking
#[derive(Debug, Clone)]
pub struct BookingResult {
    pub reservation: Reservation,
    /// The booked flight, after its seats were decremented
    pub flight: Flight,
}

/// A reservation together with the current state of its flight
#[derive(Debug, Clone)]
pub struct ReservationInfo {
    pub reservation: Reservation,
    pub flight: Flight,
}

/// Detailed flight information
#[derive(Debug, Clone)]
pub struct FlightInfo {
    pub id: FlightId,
    pub flight: Flight,
    pub reservations: Vec<Reservation>,
    pub seats_booked: Seats,
}

impl Default for BookingService {
    fn default() -> Self {
        Self::new()
    }
}

impl BookingService {
    /// Create a service over an empty ledger.
    pub fn new() -> Self {
        Self::from_ledger(Ledger::new())
    }

    /// Create a service over an existing ledger.
    pub fn from_ledger(ledger: Ledger) -> Self {
        Self {
            ledger: RwLock::new(ledger),
        }
    }

    /// Create a service pre-loaded with the given flights.
    pub async fn with_flights(
        flights: impl IntoIterator<Item = Flight>,
    ) -> Result<Self, AppError> {
        let service = Self::new();
        service.add_flights(flights).await?;
        Ok(service)
    }

    // ========================
    // Flight operations
    // ========================

    /// Register a flight.
    pub async fn add_flight(&self, flight: Flight) -> Result<FlightId, AppError> {
        let mut ledger = self.ledger.write().await;
        let number = flight.flight_number.clone();
        let id = ledger.add_flight(flight)?;
        info!(flight = %number, id = %id, "flight registered");
        Ok(id)
    }

    /// Register several flights, stopping at the first rejected one.
    pub async fn add_flights(
        &self,
        flights: impl IntoIterator<Item = Flight>,
    ) -> Result<usize, AppError> {
        let mut count = 0;
        for flight in flights {
            self.add_flight(flight).await?;
            count += 1;
        }
        Ok(count)
    }

    /// Flights to a destination on the calendar date of `date_time` with seats left.
    pub async fn search_flights(&self, destination: &str, date_time: NaiveDateTime) -> Vec<Flight> {
        let ledger = self.ledger.read().await;
        let flights: Vec<Flight> = ledger
            .search_flights(destination, date_time)
            .into_iter()
            .cloned()
            .collect();

        debug!(
            destination,
            date = %date_time.date(),
            matches = flights.len(),
            "flight search"
        );
        flights
    }

    /// Look up a flight by number, ignoring case.
    pub async fn find_flight(&self, flight_number: &str) -> Option<Flight> {
        self.ledger.read().await.find_flight(flight_number).cloned()
    }

    /// Get detailed flight information, including its reservations.
    pub async fn get_flight(&self, flight_number: &str) -> Result<FlightInfo, AppError> {
        let ledger = self.ledger.read().await;
        let id = ledger
            .find_flight_id(flight_number)
            .ok_or_else(|| AppError::UnknownFlight(flight_number.to_string()))?;
        let flight = ledger
            .flight(id)
            .cloned()
            .ok_or_else(|| AppError::UnknownFlight(flight_number.to_string()))?;

        let reservations: Vec<Reservation> = ledger
            .reservations()
            .iter()
            .filter(|r| r.flight_id == id)
            .cloned()
            .collect();
        let seats_booked = reservations.iter().map(|r| r.seats_booked).sum();

        Ok(FlightInfo {
            id,
            flight,
            reservations,
            seats_booked,
        })
    }

    /// Copy of every registered flight, in registration order.
    pub async fn get_all_flights(&self) -> Vec<Flight> {
        self.ledger.read().await.flights().to_vec()
    }

    // ========================
    // Reservation operations
    // ========================

    /// Book seats on a flight for a customer.
    pub async fn book_flight(
        &self,
        customer_name: &str,
        flight_number: &str,
        seats: Seats,
    ) -> Result<BookingResult, AppError> {
        let mut ledger = self.ledger.write().await;

        let reservation = match ledger.book_flight(customer_name, flight_number, seats) {
            Ok(reservation) => reservation,
            Err(e) => {
                debug!(customer = customer_name, flight = flight_number, seats, error = %e, "booking rejected");
                return Err(e.into());
            }
        };

        let flight = ledger
            .flight_for(&reservation)
            .cloned()
            .ok_or_else(|| AppError::UnknownFlight(reservation.flight_number.clone()))?;

        info!(
            reservation = %reservation.id,
            customer = %reservation.customer_name,
            flight = %flight.flight_number,
            seats,
            remaining = flight.available_seats,
            "flight booked"
        );

        Ok(BookingResult {
            reservation,
            flight,
        })
    }

    /// Reservations held by a customer (name compared ignoring case).
    pub async fn get_reservations_by_customer(&self, customer_name: &str) -> Vec<ReservationInfo> {
        let ledger = self.ledger.read().await;
        let infos: Vec<ReservationInfo> = ledger
            .reservations_by_customer(customer_name)
            .into_iter()
            .filter_map(|reservation| {
                ledger.flight_for(reservation).map(|flight| ReservationInfo {
                    reservation: reservation.clone(),
                    flight: flight.clone(),
                })
            })
            .collect();

        debug!(
            customer = customer_name,
            count = infos.len(),
            "reservations lookup"
        );
        infos
    }

    /// Copy of every reservation, in booking order.
    pub async fn get_all_reservations(&self) -> Vec<Reservation> {
        self.ledger.read().await.reservations().to_vec()
    }

    /// Every reservation with the current state of its flight.
    pub async fn get_all_reservation_infos(&self) -> Vec<ReservationInfo> {
        let ledger = self.ledger.read().await;
        ledger
            .reservations()
            .iter()
            .filter_map(|reservation| {
                ledger.flight_for(reservation).map(|flight| ReservationInfo {
                    reservation: reservation.clone(),
                    flight: flight.clone(),
                })
            })
            .collect()
    }
}
