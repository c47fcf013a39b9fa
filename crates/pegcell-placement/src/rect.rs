//! Rectangular-material packer
//!
//! Plates rest on two pins along their bottom edge with a third pin one row
//! up on the left, forming an L-shaped stop. Only the right table edge limits
//! a placement horizontally; the overhang tolerance applies to rows only.

use crate::grid_steps;
use pegcell_core::{GridConstants, PinPosition, PinTriplet};
use tracing::{debug, trace};

/// Compute pin triplets for a rectangular workpiece.
///
/// Triplets whose right or left-above pin would fall off the grid are not
/// emitted. Non-positive or non-finite inputs give an empty set.
pub fn pack_rect(
    grid: &GridConstants,
    pin_diameter_mm: f64,
    length_mm: f64,
    width_mm: f64,
    margin_mm: f64,
) -> Vec<PinTriplet> {
    let mut triplets = Vec::new();

    if !(pin_diameter_mm > 0.0 && length_mm > 0.0 && width_mm > 0.0 && margin_mm >= 0.0)
        || !(pin_diameter_mm + length_mm + width_mm + margin_mm).is_finite()
    {
        debug!(
            pin_diameter_mm,
            length_mm, width_mm, margin_mm, "Rectangular packing skipped for degenerate input"
        );
        return triplets;
    }

    let spacing = grid.spacing_mm;
    let effective_length = length_mm + 2.0 * margin_mm;
    let effective_width = width_mm + 2.0 * margin_mm;

    let max_x = grid.table_width_mm();
    let max_y = grid.table_height_mm() + grid.max_overhang_y_mm;

    // Columns between the left and right pin, measured from the left-above pin.
    let reach = ((length_mm - pin_diameter_mm / 2.0) / spacing).floor() as i64;
    let col_step = grid_steps(spacing + effective_length, spacing);
    let row_step = grid_steps(effective_width + pin_diameter_mm, spacing);

    let mut row = 0u32;
    while row < grid.row_count && row as f64 * spacing + effective_width <= max_y {
        let mut col = 1u32;
        while col + 1 < grid.column_count {
            let center_x = col as f64 * spacing + spacing / 2.0;
            if center_x + effective_length / 2.0 <= max_x {
                let left_up_col = col - 1;
                let right_col = left_up_col as i64 + reach;

                if (0..grid.column_count as i64).contains(&right_col) && row + 1 < grid.row_count {
                    trace!(row, col, right_col, "Rectangular placement");
                    triplets.push(PinTriplet::new(
                        PinPosition::new(row, col),
                        PinPosition::new(row, right_col as u32),
                        PinPosition::new(row + 1, left_up_col),
                    ));
                }
                col = col.saturating_add(col_step);
            } else {
                col += 1;
            }
        }

        row = row.saturating_add(row_step);
    }

    debug!(
        pin_diameter_mm,
        length_mm,
        width_mm,
        margin_mm,
        row_step,
        placements = triplets.len(),
        "Rectangular packing complete"
    );

    triplets
}
