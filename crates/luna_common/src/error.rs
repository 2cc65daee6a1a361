//! Typed errors for observation validation and session payload decoding.

use thiserror::Error;

/// A raw sleep entry that fails the caller-side contract.
#[derive(Debug, Error)]
pub enum ObservationError {
    /// Sleep duration outside the realistic 0-24 hour range, or not a number.
    #[error("sleep hours must be a number between 0 and 24, got {value}")]
    InvalidHours { value: f64 },

    /// Temperature reading that is not a finite number of degrees Celsius.
    #[error("temperature must be a finite number of degrees Celsius, got {value}")]
    InvalidTemperature { value: f64 },

    /// A yes/no field holding something other than yes or no.
    #[error("expected \"yes\" or \"no\", got {value:?}")]
    InvalidFlag { value: String },
}

/// A session payload that cannot be decoded into a score/observation pair.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("malformed session payload: {0}")]
    MalformedPayload(#[from] serde_json::Error),
}
