//! Virtual drawer grid
//!
//! The cell tracks raw and finished parts as slots in a virtual drawer laid
//! over the pin table. Slot pitch and counts come straight from the layout
//! metrics; the same counts bound the drawer size fields users may edit.

use pegcell_core::DerivedMetrics;
use serde::{Deserialize, Serialize};

/// One workpiece slot in the virtual drawer
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DrawerSlot {
    /// Zero-based, row-major
    pub index: usize,
    pub row: u32,
    pub column: u32,
    /// Anchor pin X (mm from the table origin)
    pub x_mm: f64,
    /// Anchor pin Y (mm from the table origin)
    pub y_mm: f64,
}

/// Upper limits for the user-editable drawer size fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldBounds {
    pub max_columns: u32,
    pub max_rows: u32,
}

impl FieldBounds {
    /// Clamp a requested (columns, rows) pair into bounds
    pub fn clamp(&self, columns: u32, rows: u32) -> (u32, u32) {
        (columns.min(self.max_columns), rows.min(self.max_rows))
    }
}

/// Drawer laid over the pin table; slots are derived from the metrics on demand
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrawerGrid {
    metrics: DerivedMetrics,
}

impl DrawerGrid {
    pub fn from_metrics(metrics: &DerivedMetrics) -> Self {
        Self { metrics: *metrics }
    }

    pub fn metrics(&self) -> &DerivedMetrics {
        &self.metrics
    }

    /// All slots, row-major
    pub fn slots(&self) -> impl Iterator<Item = DrawerSlot> + '_ {
        (0..self.capacity()).filter_map(move |index| self.slot(index))
    }

    pub fn slot(&self, index: usize) -> Option<DrawerSlot> {
        let columns = self.metrics.column_count_in_first_row as usize;
        if index >= self.capacity() {
            return None;
        }

        let row = u32::try_from(index / columns).ok()?;
        let column = u32::try_from(index % columns).ok()?;
        Some(DrawerSlot {
            index,
            row,
            column,
            x_mm: self.metrics.first_pin_x_mm + column as f64 * self.metrics.grid_x_offset_mm,
            y_mm: self.metrics.first_pin_y_mm + row as f64 * self.metrics.grid_y_offset_mm,
        })
    }

    /// Total number of workpieces the drawer holds
    pub fn capacity(&self) -> usize {
        (self.metrics.column_count_in_first_row as usize)
            .saturating_mul(self.metrics.row_count as usize)
    }

    pub fn field_bounds(&self) -> FieldBounds {
        FieldBounds {
            max_columns: self.metrics.column_count_in_first_row,
            max_rows: self.metrics.row_count,
        }
    }
}
