use thiserror::Error;

/// Error type for invalid operations.
#[derive(Error, Debug)]
pub enum FootprintError {
    #[error("No emission factors available for country '{0}'")]
    UnknownCountry(String),
    #[error("Input '{name}' must be finite, got {value}")]
    NonFiniteInput { name: String, value: f64 },
    #[error("Emission factor '{field}' for {country} must be a non-negative finite number, got {value}")]
    InvalidFactor {
        country: String,
        field: &'static str,
        value: f64,
    },
}

/// Convenience type for `Result<T, FootprintError>`.
pub type FootprintResult<T> = Result<T, FootprintError>;
