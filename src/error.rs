//! Simulation errors.

use thiserror::Error;

use crate::validation::ValidationError;

/// Simulation operation result.
pub type SimulationResult<T> = Result<T, SimulationError>;

/// Errors raised before a simulation runs.
///
/// Engines themselves are total over validated input; every variant here is
/// a rejection at the request boundary.
#[derive(Error, Debug)]
pub enum SimulationError {
    #[error("Unknown algorithm: {0}")]
    UnknownAlgorithm(String),

    #[error("Invalid input: {}", join_messages(.0))]
    InvalidInput(Vec<ValidationError>),

    #[error("Invalid request format: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl SimulationError {
    /// Whether the error stems from the request itself (a client error).
    pub fn is_client_error(&self) -> bool {
        !matches!(self, Self::Io(_))
    }
}

fn join_messages(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::ValidationErrorKind;

    #[test]
    fn test_invalid_input_message() {
        let err = SimulationError::InvalidInput(vec![
            ValidationError::new(ValidationErrorKind::EmptyProcessSet, "No processes provided"),
            ValidationError::new(ValidationErrorKind::DuplicateId, "Duplicate process ID: P1"),
        ]);
        assert_eq!(
            err.to_string(),
            "Invalid input: No processes provided; Duplicate process ID: P1"
        );
        assert!(err.is_client_error());
    }

    #[test]
    fn test_unknown_algorithm_message() {
        let err = SimulationError::UnknownAlgorithm("EDF".into());
        assert_eq!(err.to_string(), "Unknown algorithm: EDF");
    }

    #[test]
    fn test_io_is_not_client_error() {
        let err = SimulationError::from(std::io::Error::other("disk"));
        assert!(!err.is_client_error());
    }
}
