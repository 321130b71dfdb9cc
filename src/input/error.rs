use thiserror::Error;

/// Errors raised while turning raw user text into a simulation input
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("Frame count must be at least 1")]
    NoFrames,
    #[error("Invalid frame count \"{value}\": expected a whole number between {min} and {max}")]
    InvalidFrameCount {
        value: String,
        min: usize,
        max: usize,
    },
    #[error("Reference string is empty")]
    EmptyReferenceString,
    #[error("Invalid value \"{token}\" at position {position} in reference string: use non-negative whole numbers only")]
    InvalidToken {
        token: String,
        position: usize,
    },
}

pub type InputResult<T> = Result<T, InputError>;
