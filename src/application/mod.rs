// Application layer - the booking service every front end talks to.
// Console, one-shot commands and the import/export tools all go through
// `BookingService`; none of them touch the ledger directly.

pub mod error;
pub mod sample;
pub mod service;

pub use error::*;
pub use sample::*;
pub use service::*;
