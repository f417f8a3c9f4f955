//! Error types for the bridge.
//!
//! The array path never produces these; the routine status travels in the
//! fifth slot instead. They are returned by the checked API and by
//! configuration loading.

use num_complex::Complex64;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

use crate::status::RoutineStatus;

/// Result type alias for bridge operations.
pub type BridgeResult<T> = Result<T, BridgeError>;

/// Errors that can occur in the bridge.
#[derive(Debug, Error)]
pub enum BridgeError {
    /// The external routine reported a non-zero status.
    #[error("Error while calculating BesselK for {z}, error code {}: {status}", .status.code())]
    Routine {
        /// The argument the routine was called with.
        z: Complex64,
        /// Decoded status reported by the routine.
        status: RoutineStatus,
    },

    /// The status slot of an output array does not hold an i32.
    #[error("Malformed status slot {value}: not an integral i32 status code")]
    MalformedStatus {
        /// The value found in the status slot.
        value: f64,
    },

    /// A configuration value is invalid.
    #[error("Invalid configuration for {field}: {message}")]
    Config {
        /// The field that failed validation.
        field: String,
        /// Error message.
        message: String,
    },

    /// The configuration file could not be read.
    #[error("Failed to read configuration file '{}': {source}", .path.display())]
    ConfigFile {
        /// Path of the configuration file.
        path: PathBuf,
        /// The underlying IO error.
        #[source]
        source: io::Error,
    },

    /// The configuration file is not valid TOML for this bridge.
    #[error("Failed to parse configuration file '{}': {message}", .path.display())]
    ConfigParse {
        /// Path of the configuration file.
        path: PathBuf,
        /// Parser message.
        message: String,
    },
}

impl BridgeError {
    /// Creates a routine status error.
    pub fn routine(z: Complex64, status: RoutineStatus) -> Self {
        Self::Routine { z, status }
    }

    /// Creates an invalid configuration error.
    pub fn invalid_config(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Config {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Returns the routine status if this is a Routine error.
    pub fn status(&self) -> Option<RoutineStatus> {
        match self {
            BridgeError::Routine { status, .. } => Some(*status),
            _ => None,
        }
    }
}
