//! Error types for the randutil library.

use std::fmt;

/// Errors produced by the randutil library.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RandError {
    /// Exclusive upper bound is less than the inclusive lower bound.
    BoundsReversed,
    /// Exclusive upper bound is negative.
    MaxNegative,
    /// Probability lies outside [0.0, 1.0].
    ProbabilityOutOfRange,
    /// Explicit seed of zero supplied to the fast engine.
    ZeroSeed,
    /// Alphabet for string generation is empty.
    EmptyAlphabet,
    /// Alphabet length exceeds the 32-bit index range of bounded draws.
    AlphabetTooLarge,
    /// The secure byte source could not be acquired or failed mid-request.
    EntropyUnavailable(String),
}

impl fmt::Display for RandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RandError::BoundsReversed => {
                write!(f, "max must be greater than or equal to min")
            }
            RandError::MaxNegative => {
                write!(f, "max must be greater than or equal to 0")
            }
            RandError::ProbabilityOutOfRange => {
                write!(f, "probability must be between 0.0 and 1.0")
            }
            RandError::ZeroSeed => {
                write!(f, "seed must not be zero")
            }
            RandError::EmptyAlphabet => {
                write!(f, "alphabet must contain at least one character")
            }
            RandError::AlphabetTooLarge => {
                write!(f, "alphabet length exceeds the 32-bit index range")
            }
            RandError::EntropyUnavailable(reason) => {
                write!(f, "secure byte source unavailable: {}", reason)
            }
        }
    }
}

impl std::error::Error for RandError {}
