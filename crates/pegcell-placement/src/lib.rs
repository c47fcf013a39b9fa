//! # PegCell Placement
//!
//! Computes where positioning pins go on the pegboard so raw workpieces rest
//! against them, and derives the layout metrics used to build the virtual
//! drawer grid.
//!
//! ## Components
//!
//! - **Round Packer**: pin pairs cradling round stock
//! - **Rectangular Packer**: L-shaped pin triplets for plates and blocks
//! - **Metrics**: pin spacing, offsets and row/column counts from the first placements
//! - **Labels**: spreadsheet-style pin labels (`A2`, `F10`) for display
//! - **Drawer Grid**: virtual drawer slots and field bounds built from the metrics
//! - **Engine**: validation, mounting-mode checks and memoization over all of the above
//!
//! All packers are pure functions of their inputs and the injected
//! [`GridConstants`](pegcell_core::GridConstants).

pub mod drawer;
pub mod engine;
pub mod labels;
pub mod metrics;
pub mod rect;
pub mod round;

pub(crate) fn grid_steps(length_mm: f64, spacing_mm: f64) -> u32 {
    // Never zero, or the scan would stall on tiny parts.
    ((length_mm / spacing_mm).floor() as u32).max(1)
}

pub use drawer::{DrawerGrid, DrawerSlot, FieldBounds};
pub use engine::{
    pack_workpiece, PlacementEngine, DEFAULT_CACHE_CAPACITY, DEFAULT_MAX_PIN_DIAMETER_MM,
};
pub use labels::{labels_for, labels_for_placements};
pub use metrics::{derive_metrics, metrics_for, metrics_for_placements};
pub use rect::pack_rect;
pub use round::{pack_round, pin_distance_units};
