use anyhow::Result;
use std::io::{BufRead, Write};

use crate::application::BookingService;
use crate::domain::{format_date_time, parse_date_time, Seats, DATE_TIME_EXAMPLE};

const RULE: &str = "------------------------------------------------------------";

/// Interactive menu over a booking service.
/// Generic over its input and output so scripted sessions can drive it.
pub struct Console<'a, R, W> {
    service: &'a BookingService,
    input: R,
    output: W,
}

impl<'a, R: BufRead, W: Write> Console<'a, R, W> {
    pub fn new(service: &'a BookingService, input: R, output: W) -> Self {
        Self {
            service,
            input,
            output,
        }
    }

    /// Run the menu loop until the user exits or input ends.
    pub async fn run(&mut self) -> Result<()> {
        writeln!(self.output, "=== Flight Reservation System ===")?;
        writeln!(self.output, "Welcome! Please select an option:\n")?;

        loop {
            self.print_menu()?;
            let Some(choice) = self.read_line()? else {
                break;
            };

            match choice.as_str() {
                "1" => self.search_flights().await?,
                "2" => self.book_flight().await?,
                "3" => self.view_reservations().await?,
                "4" => self.list_flights().await?,
                "5" => {
                    writeln!(
                        self.output,
                        "Thank you for using the Flight Reservation System. Goodbye!"
                    )?;
                    break;
                }
                _ => writeln!(self.output, "Invalid option. Please try again.\n")?,
            }
        }

        self.output.flush()?;
        Ok(())
    }

    /// Consume the console and hand back its output (used by tests).
    pub fn into_output(self) -> W {
        self.output
    }

    fn print_menu(&mut self) -> Result<()> {
        writeln!(self.output, "1. Search for flights")?;
        writeln!(self.output, "2. Book a flight")?;
        writeln!(self.output, "3. View my reservations")?;
        writeln!(self.output, "4. List all flights")?;
        writeln!(self.output, "5. Exit")?;
        write!(self.output, "\nEnter your choice: ")?;
        self.output.flush()?;
        Ok(())
    }

    /// Next trimmed input line, or `None` at end of input.
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn prompt(&mut self, label: &str) -> Result<Option<String>> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;
        self.read_line()
    }

    async fn search_flights(&mut self) -> Result<()> {
        writeln!(self.output, "\n=== Search Flights ===")?;
        let Some(destination) = self.prompt("Enter destination: ")? else {
            return Ok(());
        };
        if destination.is_empty() {
            writeln!(self.output, "Destination cannot be empty.\n")?;
            return Ok(());
        }

        let Some(date_time_str) =
            self.prompt("Enter departure date and time (yyyy-MM-dd HH:mm): ")?
        else {
            return Ok(());
        };
        let date_time = match parse_date_time(&date_time_str) {
            Ok(dt) => dt,
            Err(_) => {
                writeln!(
                    self.output,
                    "Invalid date format. Please use yyyy-MM-dd HH:mm (e.g., {})\n",
                    DATE_TIME_EXAMPLE
                )?;
                return Ok(());
            }
        };

        let flights = self.service.search_flights(&destination, date_time).await;
        if flights.is_empty() {
            writeln!(
                self.output,
                "\nNo available flights found for {} on {}.\n",
                destination,
                date_time.date()
            )?;
            return Ok(());
        }

        writeln!(self.output, "\nAvailable flights:")?;
        writeln!(self.output, "{}", RULE)?;
        for (i, flight) in flights.iter().enumerate() {
            writeln!(
                self.output,
                "{}. Flight: {} | Destination: {} | Departure: {} | Available Seats: {}",
                i + 1,
                flight.flight_number,
                flight.destination,
                format_date_time(&flight.departure),
                flight.available_seats
            )?;
        }
        writeln!(self.output, "{}\n", RULE)?;
        Ok(())
    }

    async fn book_flight(&mut self) -> Result<()> {
        writeln!(self.output, "\n=== Book a Flight ===")?;
        let Some(customer_name) = self.prompt("Enter your name: ")? else {
            return Ok(());
        };
        if customer_name.is_empty() {
            writeln!(self.output, "Customer name cannot be empty.\n")?;
            return Ok(());
        }

        let Some(flight_number) = self.prompt("Enter flight number: ")? else {
            return Ok(());
        };
        let Some(flight) = self.service.find_flight(&flight_number).await else {
            writeln!(
                self.output,
                "Flight not found. Please search for flights first.\n"
            )?;
            return Ok(());
        };

        let Some(seats_str) = self.prompt("Enter number of seats to book: ")? else {
            return Ok(());
        };
        let Ok(seats) = seats_str.parse::<Seats>() else {
            writeln!(self.output, "Invalid number of seats.\n")?;
            return Ok(());
        };

        match self
            .service
            .book_flight(&customer_name, &flight.flight_number, seats)
            .await
        {
            Ok(result) => {
                writeln!(self.output, "\nBooking successful!")?;
                writeln!(self.output, "Reservation details:")?;
                writeln!(
                    self.output,
                    "  Customer: {}",
                    result.reservation.customer_name
                )?;
                writeln!(self.output, "  Flight: {}", result.flight.flight_number)?;
                writeln!(self.output, "  Destination: {}", result.flight.destination)?;
                writeln!(
                    self.output,
                    "  Departure: {}",
                    format_date_time(&result.flight.departure)
                )?;
                writeln!(self.output, "  Seats: {}", result.reservation.seats_booked)?;
                writeln!(
                    self.output,
                    "  Remaining seats on flight: {}",
                    result.flight.available_seats
                )?;
                writeln!(self.output)?;
            }
            Err(e) => writeln!(self.output, "Booking failed: {}\n", e)?,
        }
        Ok(())
    }

    async fn view_reservations(&mut self) -> Result<()> {
        writeln!(self.output, "\n=== View Reservations ===")?;
        let Some(customer_name) = self.prompt("Enter your name: ")? else {
            return Ok(());
        };
        if customer_name.is_empty() {
            writeln!(self.output, "Customer name cannot be empty.\n")?;
            return Ok(());
        }

        let reservations = self
            .service
            .get_reservations_by_customer(&customer_name)
            .await;
        if reservations.is_empty() {
            writeln!(
                self.output,
                "\nNo reservations found for {}.\n",
                customer_name
            )?;
            return Ok(());
        }

        writeln!(self.output, "\nYour reservations:")?;
        writeln!(self.output, "{}", RULE)?;
        for (i, info) in reservations.iter().enumerate() {
            writeln!(
                self.output,
                "{}. Flight: {} | Destination: {} | Departure: {} | Seats: {}",
                i + 1,
                info.flight.flight_number,
                info.flight.destination,
                format_date_time(&info.flight.departure),
                info.reservation.seats_booked
            )?;
        }
        writeln!(self.output, "{}\n", RULE)?;
        Ok(())
    }

    async fn list_flights(&mut self) -> Result<()> {
        writeln!(self.output, "\n=== All Flights ===")?;
        let flights = self.service.get_all_flights().await;
        if flights.is_empty() {
            writeln!(self.output, "No flights registered.\n")?;
            return Ok(());
        }

        writeln!(self.output, "{}", RULE)?;
        for flight in &flights {
            writeln!(
                self.output,
                "Flight: {} | Destination: {} | Departure: {} | Available Seats: {}",
                flight.flight_number,
                flight.destination,
                format_date_time(&flight.departure),
                flight.available_seats
            )?;
        }
        writeln!(self.output, "{}\n", RULE)?;
        Ok(())
    }
}
