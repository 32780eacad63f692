use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{FlightId, Seats};

pub type ReservationId = Uuid;

/// A reservation binds a customer to a flight for a number of seats.
/// It holds a handle to the ledger's flight rather than a copy, so seat
/// changes made after booking remain visible through the ledger.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Reservation {
    pub id: ReservationId,
    pub customer_name: String,
    /// Handle into the ledger's flight store
    pub flight_id: FlightId,
    /// Flight number at booking time (display and export)
    pub flight_number: String,
    pub seats_booked: Seats,
    pub booked_at: DateTime<Utc>,
}

impl Reservation {
    /// Create a new reservation. Only the ledger books, after validation.
    pub(crate) fn new(
        customer_name: impl Into<String>,
        flight_id: FlightId,
        flight_number: impl Into<String>,
        seats_booked: Seats,
    ) -> Self {
        assert!(seats_booked > 0, "Seats booked must be positive");
        Self {
            id: Uuid::new_v4(),
            customer_name: customer_name.into(),
            flight_id,
            flight_number: flight_number.into(),
            seats_booked,
            booked_at: Utc::now(),
        }
    }

    pub fn is_for_customer(&self, customer_name: &str) -> bool {
        super::flight::eq_ignore_case(&self.customer_name, customer_name)
    }
}

impl PartialEq for Reservation {
    fn eq(&self, other: &Self) -> bool {
        self.customer_name == other.customer_name && self.flight_number == other.flight_number
    }
}

impl Eq for Reservation {}
