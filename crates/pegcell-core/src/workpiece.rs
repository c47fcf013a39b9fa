//! Workpiece descriptors
//!
//! Plain numeric description of a raw part as the placement engine sees it.
//! Parsing user-entered strings into these values happens upstream.

use crate::error::{PlacementError, Result};
use serde::{Deserialize, Serialize};

/// Upper sanity bound for any dimension (mm)
pub const MAX_DIMENSION_MM: f64 = 1.0e6;

/// Workpiece outline
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "shape", rename_all = "snake_case")]
pub enum WorkpieceShape {
    /// Round bar stock, viewed end-on
    Round { diameter_mm: f64 },
    /// Rectangular plate or block
    Rectangular { length_mm: f64, width_mm: f64 },
}

/// A raw workpiece to be placed on the pin table
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Workpiece {
    #[serde(flatten)]
    pub shape: WorkpieceShape,
    /// Diameter of the positioning pins (mm)
    pub pin_diameter_mm: f64,
    /// Clearance kept on every side of the workpiece (mm)
    pub margin_mm: f64,
}

impl Workpiece {
    pub fn round(diameter_mm: f64, pin_diameter_mm: f64, margin_mm: f64) -> Self {
        Self {
            shape: WorkpieceShape::Round { diameter_mm },
            pin_diameter_mm,
            margin_mm,
        }
    }

    pub fn rectangular(length_mm: f64, width_mm: f64, pin_diameter_mm: f64, margin_mm: f64) -> Self {
        Self {
            shape: WorkpieceShape::Rectangular {
                length_mm,
                width_mm,
            },
            pin_diameter_mm,
            margin_mm,
        }
    }

    pub fn is_round(&self) -> bool {
        matches!(self.shape, WorkpieceShape::Round { .. })
    }

    /// Copy with the pin diameter limited to `max_pin_diameter_mm`
    pub fn with_clamped_pin(&self, max_pin_diameter_mm: f64) -> Self {
        Self {
            pin_diameter_mm: self.pin_diameter_mm.min(max_pin_diameter_mm),
            ..*self
        }
    }

    /// Named dimensions, in a stable order
    pub fn dimensions(&self) -> Vec<(&'static str, f64)> {
        let mut dims = match self.shape {
            WorkpieceShape::Round { diameter_mm } => vec![("diameter_mm", diameter_mm)],
            WorkpieceShape::Rectangular {
                length_mm,
                width_mm,
            } => vec![("length_mm", length_mm), ("width_mm", width_mm)],
        };
        dims.push(("pin_diameter_mm", self.pin_diameter_mm));
        dims.push(("margin_mm", self.margin_mm));
        dims
    }

    /// Reject NaN, infinite and pathologically large values.
    ///
    /// Zero or negative values pass; they simply produce no placements.
    pub fn validate(&self) -> Result<()> {
        for (name, value) in self.dimensions() {
            if !value.is_finite() || value.abs() > MAX_DIMENSION_MM {
                return Err(PlacementError::invalid_dimension(name, value));
            }
        }
        Ok(())
    }

    /// Bit-exact key for memoizing placements
    pub fn cache_key(&self) -> Vec<u64> {
        let mut key = vec![u64::from(self.is_round())];
        key.extend(self.dimensions().into_iter().map(|(_, v)| v.to_bits()));
        key
    }
}
