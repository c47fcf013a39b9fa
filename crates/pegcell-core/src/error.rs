//! Error handling for PegCell
//!
//! The placement engine degrades gracefully: out-of-range but well-formed
//! inputs produce an empty placement set instead of an error. The variants
//! here cover the few conditions that are contract violations by the caller:
//! - Non-finite or absurdly large dimensions
//! - Grid metrics requested for a cell without a discrete grid
//! - Grid constants that describe an impossible table
//!
//! All error types use `thiserror` for ergonomic error handling.

use crate::grid::MountingMode;
use thiserror::Error;

/// Placement engine error type
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PlacementError {
    /// A dimension was NaN, infinite, or beyond the sanity bound
    #[error("Invalid dimension '{name}': {value}")]
    InvalidDimension {
        /// The name of the offending input.
        name: String,
        /// The rejected value.
        value: f64,
    },

    /// Grid-based metrics were requested while the cell has no discrete grid
    #[error("Operation '{operation}' is not supported in {mode} mounting mode")]
    UnsupportedMode {
        /// The mounting mode the cell is configured with.
        mode: MountingMode,
        /// The operation that was requested.
        operation: String,
    },

    /// Grid constants are inconsistent
    #[error("Invalid grid: {0}")]
    InvalidGrid(String),
}

impl PlacementError {
    /// Create an invalid dimension error
    pub fn invalid_dimension(name: impl Into<String>, value: f64) -> Self {
        PlacementError::InvalidDimension {
            name: name.into(),
            value,
        }
    }

    /// Create an unsupported mode error
    pub fn unsupported_mode(mode: MountingMode, operation: impl Into<String>) -> Self {
        PlacementError::UnsupportedMode {
            mode,
            operation: operation.into(),
        }
    }

    /// Check if this is an invalid dimension error
    pub fn is_invalid_dimension(&self) -> bool {
        matches!(self, PlacementError::InvalidDimension { .. })
    }

    /// Check if this is an unsupported mode error
    pub fn is_unsupported_mode(&self) -> bool {
        matches!(self, PlacementError::UnsupportedMode { .. })
    }
}

/// Result type using PlacementError
pub type Result<T> = std::result::Result<T, PlacementError>;
