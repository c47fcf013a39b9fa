//! Pegboard geometry
//!
//! The physical table is a rectangular array of pin holes on a square pitch.
//! Workpieces may hang over the table edge by a bounded amount and still be
//! considered placeable. These values are injected into the packers as a
//! value so alternate tables can be modelled and tested.

use crate::error::{PlacementError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Highest row count that still maps every row to a single label letter.
pub const MAX_LABELLED_ROWS: u32 = 26;

/// How workpieces are held on the table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MountingMode {
    /// Pre-registered discrete pin holes
    StaticGrid,
    /// Continuous mounting without a discrete grid
    Pinned,
}

impl Default for MountingMode {
    fn default() -> Self {
        Self::StaticGrid
    }
}

impl MountingMode {
    /// Whether grid-square based metrics can be derived in this mode
    pub fn has_discrete_grid(&self) -> bool {
        matches!(self, Self::StaticGrid)
    }
}

impl fmt::Display for MountingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::StaticGrid => write!(f, "static grid"),
            Self::Pinned => write!(f, "pinned"),
        }
    }
}

impl FromStr for MountingMode {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "static" | "static_grid" | "static grid" | "grid" => Ok(Self::StaticGrid),
            "pinned" | "continuous" => Ok(Self::Pinned),
            _ => Err(format!("Unknown mounting mode: {}", s)),
        }
    }
}

/// Fixed geometry of the pin table
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConstants {
    /// Distance between neighbouring pin holes (mm)
    pub spacing_mm: f64,
    /// Number of hole columns
    pub column_count: u32,
    /// Number of hole rows
    pub row_count: u32,
    /// Diameter of a pin hole (mm)
    pub pin_hole_diameter_mm: f64,
    /// Allowed footprint overhang past the left/right table edge (mm)
    pub max_overhang_x_mm: f64,
    /// Allowed footprint overhang past the far table edge (mm)
    pub max_overhang_y_mm: f64,
}

impl Default for GridConstants {
    fn default() -> Self {
        Self {
            spacing_mm: 25.0,
            column_count: 28,
            row_count: 22,
            pin_hole_diameter_mm: 8.0,
            max_overhang_x_mm: 37.5,
            max_overhang_y_mm: 27.5,
        }
    }
}

impl GridConstants {
    /// Same pitch and tolerances as the default table, different hole counts
    pub fn with_size(column_count: u32, row_count: u32) -> Self {
        Self {
            column_count,
            row_count,
            ..Self::default()
        }
    }

    /// Table width (mm)
    pub fn table_width_mm(&self) -> f64 {
        self.column_count as f64 * self.spacing_mm
    }

    /// Table height (mm)
    pub fn table_height_mm(&self) -> f64 {
        self.row_count as f64 * self.spacing_mm
    }

    /// Validate grid geometry
    pub fn validate(&self) -> Result<()> {
        if !self.spacing_mm.is_finite() || self.spacing_mm <= 0.0 {
            return Err(PlacementError::InvalidGrid(format!(
                "spacing must be > 0, got {}",
                self.spacing_mm
            )));
        }

        if self.column_count < 2 {
            return Err(PlacementError::InvalidGrid(
                "at least 2 columns are required".to_string(),
            ));
        }

        if self.row_count == 0 || self.row_count > MAX_LABELLED_ROWS {
            return Err(PlacementError::InvalidGrid(format!(
                "row count must be within 1..={}, got {}",
                MAX_LABELLED_ROWS, self.row_count
            )));
        }

        if !self.pin_hole_diameter_mm.is_finite() || self.pin_hole_diameter_mm <= 0.0 {
            return Err(PlacementError::InvalidGrid(
                "pin hole diameter must be > 0".to_string(),
            ));
        }

        for (name, value) in [
            ("max_overhang_x_mm", self.max_overhang_x_mm),
            ("max_overhang_y_mm", self.max_overhang_y_mm),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(PlacementError::InvalidGrid(format!(
                    "{} must be finite and >= 0, got {}",
                    name, value
                )));
            }
        }

        Ok(())
    }
}
