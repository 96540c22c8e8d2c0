use thiserror::Error;

/// Error type for invalid deposition inputs and configuration.
#[derive(Error, Debug)]
pub enum DepositionError {
    #[error("{0}")]
    Error(String),
    #[error("Dew and rain cannot both be set for the same surface")]
    ConflictingSurfaceWetness,
    #[error("Unknown {kind} '{name}'")]
    UnknownCategory { kind: &'static str, name: String },
    #[error("Field shape mismatch. Expected {expected:?}, got {found:?} for {field}")]
    ShapeMismatch {
        field: &'static str,
        expected: Vec<usize>,
        found: Vec<usize>,
    },
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),
}

/// Convenience type for `Result<T, DepositionError>`.
pub type DepositionResult<T> = Result<T, DepositionError>;
