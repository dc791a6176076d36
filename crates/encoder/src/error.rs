//! Encoding Error Types

use thiserror::Error;

/// Errors during parsing and encoding
#[derive(Debug, Clone, Error)]
pub enum EncodeError {
    /// A token in the delimited series could not be parsed as a number
    #[error("Cannot parse token {token:?} at position {position} as a number")]
    ParseError { token: String, position: usize },

    /// Bin width for SCE encoding must be positive
    #[error("Invalid bin size {0} (must be positive and finite)")]
    InvalidBinSize(f64),

    /// An inter-spike interval is negative or not finite
    #[error("Invalid interval {value} at position {position} (must be non-negative and finite)")]
    InvalidInterval { value: f64, position: usize },

    /// The series spans more bins than the encoder allows
    #[error("Series spans {required} bins, exceeding the limit of {limit}")]
    TooManyBins { required: f64, limit: usize },
}
