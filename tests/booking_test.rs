mod common;

use anyhow::Result;
use common::{flight, test_service, StandardFlights};
use flightdesk::application::AppError;
use flightdesk::domain::LedgerError;

#[tokio::test]
async fn test_book_flight_creates_reservation() -> Result<()> {
    let service = StandardFlights::service().await?;

    let result = service.book_flight("John Doe", "AA101", 3).await?;

    assert_eq!(result.reservation.customer_name, "John Doe");
    assert_eq!(result.reservation.flight_number, "AA101");
    assert_eq!(result.reservation.seats_booked, 3);
    assert_eq!(result.flight.available_seats, 47);

    let stored = service.find_flight("AA101").await.unwrap();
    assert_eq!(stored.available_seats, 47);
    assert_eq!(service.get_all_reservations().await.len(), 1);

    Ok(())
}

#[tokio::test]
async fn test_book_exact_available_seats() -> Result<()> {
    let service = test_service();
    service
        .add_flight(flight("AA101", "New York", "2024-12-25 10:00", 5))
        .await?;

    let result = service.book_flight("John Doe", "AA101", 5).await?;

    assert_eq!(result.reservation.seats_booked, 5);
    assert_eq!(result.flight.available_seats, 0);

    Ok(())
}

#[tokio::test]
async fn test_book_more_seats_than_available() -> Result<()> {
    let service = test_service();
    service
        .add_flight(flight("AA101", "New York", "2024-12-25 10:00", 5))
        .await?;

    let err = service
        .book_flight("John Doe", "AA101", 10)
        .await
        .err()
        .unwrap();

    assert_eq!(
        err.to_string(),
        "Not enough seats available. Requested: 10, Available: 5"
    );
    assert_eq!(service.find_flight("AA101").await.unwrap().available_seats, 5);
    assert!(service.get_all_reservations().await.is_empty());

    Ok(())
}

#[tokio::test]
async fn test_book_zero_or_negative_seats() -> Result<()> {
    let service = StandardFlights::service().await?;

    for seats in [0, -1] {
        let err = service
            .book_flight("John Doe", "AA101", seats)
            .await
            .err()
            .unwrap();
        assert!(err.to_string().contains("greater than zero"));
    }
    assert_eq!(service.find_flight("AA101").await.unwrap().available_seats, 50);

    Ok(())
}

#[tokio::test]
async fn test_book_with_blank_customer_name() -> Result<()> {
    let service = StandardFlights::service().await?;

    for name in ["", "   ", "\t\n"] {
        let err = service.book_flight(name, "AA101", 1).await.err().unwrap();
        assert!(matches!(
            err,
            AppError::InvalidArgument(LedgerError::CustomerNameRequired)
        ));
        assert_eq!(err.to_string(), "Customer name cannot be null or empty");
    }

    Ok(())
}

#[tokio::test]
async fn test_book_with_missing_flight() -> Result<()> {
    let service = StandardFlights::service().await?;

    let err = service.book_flight("John Doe", "", 1).await.err().unwrap();
    assert_eq!(err.to_string(), "Flight cannot be null");

    Ok(())
}

#[tokio::test]
async fn test_book_flight_not_in_system() -> Result<()> {
    let service = StandardFlights::service().await?;

    // Same shape as a real flight, but never registered
    let unregistered = flight("XX999", "New York", "2024-12-25 10:00", 50);
    let err = service
        .book_flight("John Doe", &unregistered.flight_number, 1)
        .await
        .err()
        .unwrap();

    assert_eq!(err.to_string(), "Flight not found in the system");
    assert_eq!(err.ledger_error(), Some(&LedgerError::FlightNotFound));

    Ok(())
}

#[tokio::test]
async fn test_book_resolves_flight_number_ignoring_case() -> Result<()> {
    let service = StandardFlights::service().await?;

    let result = service.book_flight("John Doe", "aa102", 2).await?;

    assert_eq!(result.flight.flight_number, "AA102");
    assert_eq!(result.flight.available_seats, 28);

    Ok(())
}

#[tokio::test]
async fn test_multiple_bookings_reduce_seats_cumulatively() -> Result<()> {
    let service = StandardFlights::service().await?;

    service.book_flight("John Doe", "AA101", 10).await?;
    service.book_flight("Jane Smith", "AA101", 5).await?;
    let third = service.book_flight("Bob Johnson", "AA101", 15).await?;

    assert_eq!(third.flight.available_seats, 20);
    assert_eq!(service.find_flight("AA101").await.unwrap().available_seats, 20);
    assert_eq!(service.get_all_reservations().await.len(), 3);

    Ok(())
}

#[tokio::test]
async fn test_validation_order_reports_first_violation() -> Result<()> {
    let service = StandardFlights::service().await?;

    let err = service.book_flight(" ", "", -3).await.err().unwrap();
    assert_eq!(err.to_string(), "Customer name cannot be null or empty");

    let err = service.book_flight("Alice", "", -3).await.err().unwrap();
    assert_eq!(err.to_string(), "Flight cannot be null");

    let err = service.book_flight("Alice", "NOPE", -3).await.err().unwrap();
    assert_eq!(err.to_string(), "Number of seats must be greater than zero");

    let err = service.book_flight("Alice", "NOPE", 3).await.err().unwrap();
    assert_eq!(err.to_string(), "Flight not found in the system");

    Ok(())
}

#[tokio::test]
async fn test_duplicate_flight_numbers_book_first_registered() -> Result<()> {
    let service = test_service();
    service
        .add_flight(flight("AA101", "New York", "2024-12-25 10:00", 2))
        .await?;
    service
        .add_flight(flight("AA101", "Boston", "2024-12-26 10:00", 100))
        .await?;

    let result = service.book_flight("Alice", "AA101", 2).await?;
    assert_eq!(result.flight.destination, "New York");

    // The first match is sold out; the duplicate is never consulted
    let err = service.book_flight("Alice", "AA101", 1).await.err().unwrap();
    assert_eq!(
        err.to_string(),
        "Not enough seats available. Requested: 1, Available: 0"
    );

    let flights = service.get_all_flights().await;
    assert_eq!(flights.len(), 2);
    assert_eq!(flights[1].available_seats, 100);

    Ok(())
}

#[tokio::test]
async fn test_add_flight_rejects_negative_seat_counter() -> Result<()> {
    let service = test_service();
    let mut bad = flight("AA101", "New York", "2024-12-25 10:00", 1);
    bad.available_seats = -1;

    let err = service.add_flight(bad).await.err().unwrap();
    assert_eq!(err.to_string(), "Available seats cannot be negative");
    assert!(service.get_all_flights().await.is_empty());

    Ok(())
}
