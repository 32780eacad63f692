mod flight;
mod ledger;
mod reservation;
mod schedule;

pub use flight::*;
pub use ledger::*;
pub use reservation::*;
pub use schedule::*;
