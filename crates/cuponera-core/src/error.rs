//! Error types for the Cuponera core crate.

use thiserror::Error;

/// A specialized Result type for Cuponera core operations.
pub type CuponeraResult<T> = Result<T, CuponeraError>;

/// The main error type for Cuponera core operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CuponeraError {
    /// Error in date calculations or invalid date.
    #[error("Invalid date: {message}")]
    InvalidDate {
        /// Description of the date error.
        message: String,
    },

    /// Payment day outside 1..=31 or unparsable.
    #[error("Invalid payment day: {message}")]
    InvalidPaymentDay {
        /// Description of the payment day error.
        message: String,
    },

    /// Unrecognized periodicity string.
    #[error("Invalid periodicity: '{value}'")]
    InvalidPeriodicity {
        /// The unrecognized input value.
        value: String,
    },
}

impl CuponeraError {
    /// Creates an invalid date error.
    #[must_use]
    pub fn invalid_date(message: impl Into<String>) -> Self {
        Self::InvalidDate {
            message: message.into(),
        }
    }

    /// Creates an invalid payment day error.
    #[must_use]
    pub fn invalid_payment_day(message: impl Into<String>) -> Self {
        Self::InvalidPaymentDay {
            message: message.into(),
        }
    }

    /// Creates an invalid periodicity error.
    #[must_use]
    pub fn invalid_periodicity(value: impl Into<String>) -> Self {
        Self::InvalidPeriodicity {
            value: value.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CuponeraError::invalid_date("2024-02-30 is not a valid date");
        assert!(err.to_string().contains("Invalid date"));
    }

    #[test]
    fn test_periodicity_error_carries_input() {
        let err = CuponeraError::invalid_periodicity("weekly");
        assert!(err.to_string().contains("weekly"));
    }
}
