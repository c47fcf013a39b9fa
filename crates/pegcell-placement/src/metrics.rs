//! Layout metrics derived from the first placements of a scan.
//!
//! Placements are emitted row-major, so the first placement and its
//! immediate successors describe the repeating pattern: pin separation,
//! horizontal and vertical pitch, and how many placements fit per row.

use crate::engine::pack_workpiece;
use pegcell_core::{DerivedMetrics, GridConstants, PinSet, Placements, Result, Workpiece};

/// Derive metrics from an already computed placement sequence.
pub fn metrics_for<P: PinSet>(grid: &GridConstants, placements: &[P]) -> DerivedMetrics {
    let Some(first) = placements.first() else {
        return DerivedMetrics::default();
    };

    let spacing = grid.spacing_mm;
    let anchor = first.anchor();
    let partner = first.partner();

    let mut metrics = DerivedMetrics {
        pin_spacing_distance_mm: (partner.col as f64 - anchor.col as f64) * spacing,
        first_pin_x_mm: anchor.col as f64 * spacing,
        first_pin_y_mm: anchor.row as f64 * spacing,
        row_count: 1,
        ..DerivedMetrics::default()
    };

    if let Some(second) = placements.get(1) {
        metrics.grid_x_offset_mm = (second.anchor().col as f64 - anchor.col as f64) * spacing;
    }

    let mut current_row = anchor.row;
    let mut in_first_row = true;
    for placement in placements {
        let row = placement.anchor().row;
        if row != current_row {
            if metrics.row_count == 1 {
                metrics.grid_y_offset_mm = (row as f64 - anchor.row as f64) * spacing;
            }
            metrics.row_count += 1;
            current_row = row;
            in_first_row = false;
        }
        if in_first_row {
            metrics.column_count_in_first_row += 1;
        }
    }

    metrics
}

/// Derive metrics from either kind of placement set.
pub fn metrics_for_placements(grid: &GridConstants, placements: &Placements) -> DerivedMetrics {
    match placements {
        Placements::Round(pairs) => metrics_for(grid, pairs),
        Placements::Rectangular(triplets) => metrics_for(grid, triplets),
    }
}

/// Re-run the matching packer for `workpiece` and derive its metrics.
pub fn derive_metrics(grid: &GridConstants, workpiece: &Workpiece) -> Result<DerivedMetrics> {
    workpiece.validate()?;
    let placements = pack_workpiece(grid, workpiece);
    Ok(metrics_for_placements(grid, &placements))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pegcell_core::{PinPair, PinPosition, PinTriplet};

    #[test]
    fn test_empty_placements() {
        let grid = GridConstants::default();
        let metrics = metrics_for::<PinPair>(&grid, &[]);
        assert_eq!(metrics, DerivedMetrics::default());
        assert!(metrics.equal_grid);
    }

    #[test]
    fn test_single_placement() {
        let grid = GridConstants::default();
        let metrics = metrics_for(&grid, &[PinPair::new(2, 4, 5)]);
        assert_eq!(metrics.pin_spacing_distance_mm, 25.0);
        assert_eq!(metrics.grid_x_offset_mm, 0.0);
        assert_eq!(metrics.grid_y_offset_mm, 0.0);
        assert_eq!(metrics.column_count_in_first_row, 1);
        assert_eq!(metrics.row_count, 1);
        assert_eq!(metrics.first_pin_x_mm, 100.0);
        assert_eq!(metrics.first_pin_y_mm, 50.0);
    }

    #[test]
    fn test_one_placement_per_row() {
        let grid = GridConstants::default();
        let metrics = metrics_for(
            &grid,
            &[PinPair::new(0, 2, 5), PinPair::new(7, 2, 5), PinPair::new(14, 2, 5)],
        );
        assert_eq!(metrics.grid_x_offset_mm, 0.0);
        assert_eq!(metrics.grid_y_offset_mm, 175.0);
        assert_eq!(metrics.column_count_in_first_row, 1);
        assert_eq!(metrics.row_count, 3);
    }

    #[test]
    fn test_triplets_use_left_and_right() {
        let grid = GridConstants::default();
        let triplet = |row: u32, col: u32| {
            PinTriplet::new(
                PinPosition::new(row, col),
                PinPosition::new(row, col + 4),
                PinPosition::new(row + 1, col - 1),
            )
        };
        let metrics = metrics_for(&grid, &[triplet(0, 1), triplet(0, 9), triplet(4, 1)]);
        assert_eq!(metrics.pin_spacing_distance_mm, 100.0);
        assert_eq!(metrics.grid_x_offset_mm, 200.0);
        assert_eq!(metrics.grid_y_offset_mm, 100.0);
        assert_eq!(metrics.column_count_in_first_row, 2);
        assert_eq!(metrics.row_count, 2);
    }
}
