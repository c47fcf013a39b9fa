//! # PegCell Core
//!
//! Core types, grid geometry, and error handling for the PegCell pin-grid
//! placement engine. Everything in this crate is a plain value type; the
//! algorithms that produce placements live in `pegcell-placement`.

pub mod error;
pub mod grid;
pub mod model;
pub mod workpiece;

pub use error::{PlacementError, Result};
pub use grid::{GridConstants, MountingMode};
pub use model::{DerivedMetrics, PinPair, PinPosition, PinSet, PinTriplet, Placements};
pub use workpiece::{Workpiece, WorkpieceShape, MAX_DIMENSION_MM};
