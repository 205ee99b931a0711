use std::path::PathBuf;
use thiserror::Error;

/// Rejection from a strict shape constructor.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ShapeError {
    #[error("{field} must not be negative, got {value}")]
    Negative { field: &'static str, value: f64 },

    #[error("{field} must be a finite number, got {value}")]
    NonFinite { field: &'static str, value: f64 },
}

impl ShapeError {
    /// Checks a single dimension, naming it in the error.
    pub fn check(field: &'static str, value: f64) -> Result<f64, ShapeError> {
        if !value.is_finite() {
            Err(ShapeError::NonFinite { field, value })
        } else if value < 0.0 {
            Err(ShapeError::Negative { field, value })
        } else {
            Ok(value)
        }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid shape in config: {0}")]
    Shape(#[from] ShapeError),
}
