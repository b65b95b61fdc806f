//! Error types for schedule generation and yield solving.

use thiserror::Error;

use cuponera_core::CuponeraError;
use cuponera_math::MathError;

/// A specialized Result type for bond operations.
pub type BondResult<T> = Result<T, BondError>;

/// The main error type for schedule and yield operations.
#[derive(Error, Debug, Clone)]
pub enum BondError {
    /// Missing or unparsable schedule input.
    #[error("Invalid input: {reason}")]
    InvalidInput {
        /// Description of the invalid input.
        reason: String,
    },

    /// Cash flows that cannot bracket a root (fewer than two entries, or
    /// all amounts on one side of zero).
    #[error("Degenerate cash flows: {reason}")]
    DegenerateCashFlows {
        /// Description of the degeneracy.
        reason: String,
    },

    /// Error from the core date/type layer.
    #[error(transparent)]
    Core(#[from] CuponeraError),

    /// Error from the numeric solver layer.
    #[error(transparent)]
    Math(#[from] MathError),
}

impl BondError {
    /// Creates an invalid input error.
    #[must_use]
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            reason: reason.into(),
        }
    }

    /// Creates a degenerate cash flows error.
    #[must_use]
    pub fn degenerate_cash_flows(reason: impl Into<String>) -> Self {
        Self::DegenerateCashFlows {
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_core_errors_convert() {
        let core = CuponeraError::invalid_date("bad");
        let err: BondError = core.into();
        assert!(err.to_string().contains("Invalid date"));
    }

    #[test]
    fn test_degenerate_display() {
        let err = BondError::degenerate_cash_flows("all amounts are positive");
        assert!(err.to_string().contains("Degenerate cash flows"));
    }
}
