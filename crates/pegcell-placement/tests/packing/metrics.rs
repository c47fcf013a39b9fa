use pegcell_core::{DerivedMetrics, GridConstants, Workpiece};
use pegcell_placement::metrics::{derive_metrics, metrics_for};
use pegcell_placement::rect::pack_rect;

#[test]
fn test_round_100mm_metrics() {
    let grid = GridConstants::default();
    let metrics = derive_metrics(&grid, &Workpiece::round(100.0, 8.0, 15.0)).unwrap();

    assert_eq!(
        metrics,
        DerivedMetrics {
            pin_spacing_distance_mm: 50.0,
            grid_x_offset_mm: 150.0,
            grid_y_offset_mm: 125.0,
            column_count_in_first_row: 5,
            row_count: 4,
            first_pin_x_mm: 25.0,
            first_pin_y_mm: 0.0,
            equal_grid: true,
        }
    );
}

#[test]
fn test_round_160mm_metrics() {
    let grid = GridConstants::default();
    let metrics = derive_metrics(&grid, &Workpiece::round(160.0, 8.0, 15.0)).unwrap();

    assert_eq!(metrics.pin_spacing_distance_mm, 75.0);
    assert_eq!(metrics.grid_x_offset_mm, 200.0);
    assert_eq!(metrics.grid_y_offset_mm, 175.0);
    assert_eq!(metrics.column_count_in_first_row, 3);
    assert_eq!(metrics.row_count, 3);
    assert_eq!(metrics.first_pin_x_mm, 50.0);
}

#[test]
fn test_rect_metrics_match_packer() {
    let grid = GridConstants::default();
    let from_workpiece =
        derive_metrics(&grid, &Workpiece::rectangular(150.0, 80.0, 8.0, 15.0)).unwrap();
    let from_placements = metrics_for(&grid, &pack_rect(&grid, 8.0, 150.0, 80.0, 15.0));

    assert_eq!(from_workpiece, from_placements);
    assert_eq!(from_workpiece.pin_spacing_distance_mm, 100.0);
    assert_eq!(from_workpiece.grid_x_offset_mm, 200.0);
    assert_eq!(from_workpiece.grid_y_offset_mm, 100.0);
    assert_eq!(from_workpiece.column_count_in_first_row, 3);
    assert_eq!(from_workpiece.row_count, 5);
    assert_eq!(from_workpiece.first_pin_x_mm, 25.0);
}

#[test]
fn test_no_fit_gives_zeroed_metrics() {
    let grid = GridConstants::default();
    let metrics = derive_metrics(&grid, &Workpiece::round(2000.0, 8.0, 15.0)).unwrap();
    assert_eq!(metrics, DerivedMetrics::default());
    assert!(metrics.equal_grid);
}

#[test]
fn test_nan_is_rejected() {
    let grid = GridConstants::default();
    let err = derive_metrics(&grid, &Workpiece::round(f64::NAN, 8.0, 15.0)).unwrap_err();
    assert!(err.is_invalid_dimension());
}
