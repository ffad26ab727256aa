use thiserror::Error;

/// Errors produced by type operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeError {
    #[error("invalid hex character {ch:?} at position {index}")]
    InvalidHex { ch: char, index: usize },

    #[error("invalid address length: expected {expected} hex characters, got {actual}")]
    InvalidLength { expected: usize, actual: usize },
}
