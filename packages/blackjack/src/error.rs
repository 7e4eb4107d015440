use thiserror::Error;

use crate::{Move, TurnState};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Cannot draw from an empty deck")]
    EmptyDeck,
    #[error("Invalid bet {amount}: must be between 1 and {max}")]
    InvalidBet { amount: u64, max: u64 },
    #[error("Move {mv:?} is not allowed while {state:?}")]
    InvalidMove { mv: Move, state: TurnState },
    #[error("Terminal I/O error: {0}")]
    Io(String),
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}
