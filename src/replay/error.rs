use thiserror::Error;

use crate::input::InputError;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReplayError {
    #[error("Cursor {requested} is out of range for a history of {len} steps")]
    OutOfRange {
        requested: isize,
        len: usize,
    },
}

/// Errors surfaced by an interactive session
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    #[error("Invalid input: {0}")]
    Input(#[from] InputError),
    #[error("Replay error: {0}")]
    Replay(#[from] ReplayError),
    #[error("No simulation loaded")]
    NotLoaded,
}

pub type ReplayResult<T> = Result<T, ReplayError>;
