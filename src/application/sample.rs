use chrono::{Days, NaiveDateTime, NaiveTime};

use crate::domain::{Flight, Seats};

/// Demo schedule relative to `now`: (number, destination, days ahead, hour, minute, seats).
const SAMPLE_SCHEDULE: [(&str, &str, u64, u32, u32, Seats); 6] = [
    ("AA101", "New York", 1, 10, 0, 50),
    ("AA102", "New York", 1, 15, 30, 30),
    ("UA201", "Los Angeles", 2, 8, 0, 40),
    ("UA202", "Los Angeles", 2, 18, 45, 25),
    ("DL301", "Chicago", 3, 12, 0, 60),
    ("SW401", "Miami", 1, 14, 0, 20),
];

/// Sample flights departing over the next few days, used to seed the console.
pub fn sample_flights(now: NaiveDateTime) -> Vec<Flight> {
    SAMPLE_SCHEDULE
        .iter()
        .filter_map(|&(number, destination, days, hour, minute, seats)| {
            let date = now.date().checked_add_days(Days::new(days))?;
            let time = NaiveTime::from_hms_opt(hour, minute, 0)?;
            Some(Flight::new(number, destination, date.and_time(time), seats))
        })
        .collect()
}
