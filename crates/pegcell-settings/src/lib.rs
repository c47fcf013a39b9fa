//! PegCell Settings Crate
//!
//! Handles work-cell configuration: pin table geometry, mounting mode, and
//! workpiece profiles, persisted as JSON or TOML.

pub mod config;
pub mod error;

pub use config::{CellConfig, WorkpieceProfile, CONFIG_FILE_NAME};
pub use error::{ConfigError, SettingsError, SettingsResult};
