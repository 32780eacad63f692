use thiserror::Error;

use crate::domain::LedgerError;

#[derive(Error, Debug)]
pub enum AppError {
    /// The ledger rejected the request; the message is user-facing.
    #[error(transparent)]
    InvalidArgument(#[from] LedgerError),

    #[error("Flight not found: {0}")]
    UnknownFlight(String),
}

impl AppError {
    /// The ledger's rejection, if this error came from one.
    pub fn ledger_error(&self) -> Option<&LedgerError> {
        match self {
            AppError::InvalidArgument(e) => Some(e),
            AppError::UnknownFlight(_) => None,
        }
    }
}
