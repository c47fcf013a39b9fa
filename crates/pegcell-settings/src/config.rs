//! Work-cell configuration for PegCell
//!
//! Describes the pin table fitted to the cell, how workpieces are mounted,
//! and the named workpiece profiles the cell is set up for. Stored as JSON
//! or TOML, chosen by file extension.

use crate::error::{ConfigError, SettingsError, SettingsResult};
use pegcell_core::{GridConstants, MountingMode, Workpiece};
use pegcell_placement::{PlacementEngine, DEFAULT_MAX_PIN_DIAMETER_MM};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tracing::info;

/// File name used inside the platform config directory
pub const CONFIG_FILE_NAME: &str = "cell.toml";

/// A named workpiece the cell is set up to handle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkpieceProfile {
    pub name: String,
    pub workpiece: Workpiece,
}

impl WorkpieceProfile {
    pub fn new(name: impl Into<String>, workpiece: Workpiece) -> Self {
        Self {
            name: name.into(),
            workpiece,
        }
    }
}

/// Cell configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CellConfig {
    /// Static grid or pinned mounting
    pub mounting_mode: MountingMode,
    /// Largest pin diameter the holes accept (mm)
    pub max_pin_diameter_mm: f64,
    /// Memoize placements per workpiece
    pub cache_placements: bool,
    /// Pin table geometry
    pub grid: GridConstants,
    /// Configured workpiece profiles
    pub workpieces: Vec<WorkpieceProfile>,
}

impl Default for CellConfig {
    fn default() -> Self {
        Self {
            mounting_mode: MountingMode::StaticGrid,
            max_pin_diameter_mm: DEFAULT_MAX_PIN_DIAMETER_MM,
            cache_placements: true,
            grid: GridConstants::default(),
            workpieces: vec![
                WorkpieceProfile::new("bar-100", Workpiece::round(100.0, 8.0, 15.0)),
                WorkpieceProfile::new(
                    "plate-150x80",
                    Workpiece::rectangular(150.0, 80.0, 8.0, 15.0),
                ),
            ],
        }
    }
}

enum Format {
    Json,
    Toml,
}

fn format_for(path: &Path) -> SettingsResult<Format> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => Ok(Format::Json),
        Some("toml") => Ok(Format::Toml),
        other => Err(ConfigError::UnsupportedFormat(other.unwrap_or("<none>").to_string()).into()),
    }
}

impl CellConfig {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Default config file location in the platform config directory
    pub fn default_path() -> SettingsResult<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join("pegcell").join(CONFIG_FILE_NAME))
            .ok_or_else(|| {
                SettingsError::ConfigDirectory("no platform config directory".to_string())
            })
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let format = format_for(path)?;
        let content = std::fs::read_to_string(path)?;

        let config: Self = match format {
            Format::Json => serde_json::from_str(&content)?,
            Format::Toml => toml::from_str(&content)?,
        };

        config.validate()?;
        info!(
            path = %path.display(),
            workpieces = config.workpieces.len(),
            "Loaded cell configuration"
        );
        Ok(config)
    }

    /// Save config to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;

        let content = match format_for(path)? {
            Format::Json => serde_json::to_string_pretty(self)?,
            Format::Toml => toml::to_string_pretty(self)?,
        };

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(path, content)?;

        info!(path = %path.display(), "Saved cell configuration");
        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> SettingsResult<()> {
        self.grid.validate()?;

        if !self.max_pin_diameter_mm.is_finite() || self.max_pin_diameter_mm <= 0.0 {
            return Err(SettingsError::InvalidSetting {
                key: "max_pin_diameter_mm".to_string(),
                reason: format!("must be > 0, got {}", self.max_pin_diameter_mm),
            });
        }

        let mut names = HashSet::new();
        for profile in &self.workpieces {
            if profile.name.trim().is_empty() {
                return Err(SettingsError::InvalidSetting {
                    key: "workpieces.name".to_string(),
                    reason: "profile name must not be empty".to_string(),
                });
            }
            if !names.insert(profile.name.as_str()) {
                return Err(ConfigError::DuplicateProfile(profile.name.clone()).into());
            }
            profile.workpiece.validate()?;
        }

        Ok(())
    }

    /// Look up a workpiece profile by name
    pub fn profile(&self, name: &str) -> SettingsResult<&WorkpieceProfile> {
        self.workpieces
            .iter()
            .find(|profile| profile.name == name)
            .ok_or_else(|| ConfigError::UnknownProfile(name.to_string()).into())
    }

    /// Add or replace a workpiece profile
    pub fn upsert_profile(&mut self, profile: WorkpieceProfile) {
        match self.workpieces.iter_mut().find(|p| p.name == profile.name) {
            Some(existing) => *existing = profile,
            None => self.workpieces.push(profile),
        }
    }

    /// Build a placement engine for this cell
    pub fn engine(&self) -> SettingsResult<PlacementEngine> {
        let engine = PlacementEngine::new(self.grid, self.mounting_mode)?
            .with_max_pin_diameter(self.max_pin_diameter_mm);
        Ok(if self.cache_placements {
            engine.with_cache()
        } else {
            engine
        })
    }
}
