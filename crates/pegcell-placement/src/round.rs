//! Round-material packer
//!
//! Round stock lies between two pins in the same row. The scan walks the
//! table row-major, sliding one hole at a time until the part's footprint
//! (diameter plus margin on both sides) fits within the table plus the
//! allowed overhang, then skips past that footprint before trying again.

use crate::grid_steps;
use pegcell_core::{GridConstants, PinPair};
use tracing::{debug, trace};

/// Pin separation, in grid units, for a given product diameter.
pub fn pin_distance_units(product_diameter_mm: f64) -> u32 {
    if product_diameter_mm < 75.0 {
        1
    } else if product_diameter_mm < 150.0 {
        2
    } else {
        3
    }
}

/// Vertical clearance one workpiece needs before the next row may start.
///
/// Right triangle between half the pin separation and the effective radius
/// plus pin radius, both squared values floored before subtracting.
fn row_height(units: u32, spacing_mm: f64, effective_mm: f64, pin_diameter_mm: f64) -> f64 {
    let half_pin_distance = units as f64 * spacing_mm / 2.0;
    let diagonal = effective_mm / 2.0 + pin_diameter_mm / 2.0;
    let legs = (diagonal * diagonal).floor() - (half_pin_distance * half_pin_distance).floor();
    legs.abs().sqrt() + effective_mm / 2.0
}

/// Compute pin pairs for a round workpiece.
///
/// Returns an empty set for non-positive or non-finite inputs, or when the
/// part does not fit anywhere on the table.
pub fn pack_round(
    grid: &GridConstants,
    pin_diameter_mm: f64,
    product_diameter_mm: f64,
    margin_mm: f64,
) -> Vec<PinPair> {
    let mut pairs = Vec::new();

    if !(pin_diameter_mm > 0.0 && product_diameter_mm > 0.0 && margin_mm >= 0.0)
        || !(pin_diameter_mm + product_diameter_mm + margin_mm).is_finite()
    {
        debug!(
            pin_diameter_mm,
            product_diameter_mm, margin_mm, "Round packing skipped for degenerate input"
        );
        return pairs;
    }

    let spacing = grid.spacing_mm;
    let effective = product_diameter_mm + 2.0 * margin_mm;
    let radius = effective / 2.0;
    let units = pin_distance_units(product_diameter_mm);

    let min_x = -grid.max_overhang_x_mm;
    let max_x = grid.table_width_mm() + grid.max_overhang_x_mm;
    let max_y = grid.table_height_mm() + grid.max_overhang_y_mm;

    let col_step = grid_steps(spacing + effective, spacing);
    let clearance = row_height(units, spacing, effective, pin_diameter_mm);
    let row_step = grid_steps(pin_diameter_mm / 2.0 + clearance, spacing);

    // The first row is only bounded by its own offset.
    let mut y_height = 0.0;
    let mut row = 0u32;

    while row < grid.row_count && row as f64 * spacing + y_height <= max_y {
        let mut col = 0u32;
        while col + 1 < grid.column_count {
            let center_x = col as f64 * spacing + spacing / 2.0;
            if center_x - radius >= min_x && center_x + radius <= max_x {
                if col + units < grid.column_count {
                    let pair = PinPair::new(row, col, col + units);
                    trace!(row, col, partner = col + units, "Round placement");
                    pairs.push(pair);
                }
                col = col.saturating_add(col_step);
            } else {
                col += 1;
            }
        }

        y_height = clearance;
        row = row.saturating_add(row_step);
    }

    debug!(
        pin_diameter_mm,
        product_diameter_mm,
        margin_mm,
        units,
        row_step,
        placements = pairs.len(),
        "Round packing complete"
    );

    pairs
}
