use pegcell_core::{GridConstants, PinPosition, PinSet};
use pegcell_placement::rect::pack_rect;

#[test]
fn test_rect_150_by_80_plate() {
    let grid = GridConstants::default();
    let triplets = pack_rect(&grid, 8.0, 150.0, 80.0, 15.0);

    assert_eq!(triplets.len(), 15);
    assert_eq!(
        triplets[0].positions(),
        &[
            PinPosition::new(0, 1),
            PinPosition::new(0, 5),
            PinPosition::new(1, 0)
        ]
    );

    for (index, row) in [0u32, 4, 8, 12, 16].iter().enumerate() {
        let in_row: Vec<_> = triplets[index * 3..index * 3 + 3].to_vec();
        assert!(in_row.iter().all(|t| t.left().row == *row));
        assert_eq!(
            in_row.iter().map(|t| t.left().col).collect::<Vec<_>>(),
            vec![1, 9, 17]
        );
    }
}

#[test]
fn test_rect_triplet_geometry() {
    let grid = GridConstants::default();
    for triplet in pack_rect(&grid, 8.0, 150.0, 80.0, 15.0) {
        assert_eq!(triplet.left().row, triplet.right().row);
        assert_eq!(triplet.left_above().row, triplet.left().row + 1);
        assert_eq!(triplet.left_above().col + 1, triplet.left().col);
        assert_eq!(triplet.right().col, triplet.left_above().col + 5);
    }
}

#[test]
fn test_rect_ignores_horizontal_overhang() {
    let grid = GridConstants::default();
    let triplets = pack_rect(&grid, 8.0, 600.0, 80.0, 20.0);
    assert!(!triplets.is_empty());
    assert!(triplets.iter().all(|t| t.left().col == 1));

    // Col 1 centre plus half of 1340 mm is 707.5 mm: inside the overhang
    // tolerance, but past the table edge.
    assert!(pack_rect(&grid, 8.0, 1340.0, 80.0, 0.0).is_empty());
}

#[test]
fn test_rect_is_deterministic() {
    let grid = GridConstants::default();
    assert_eq!(
        pack_rect(&grid, 10.0, 120.0, 60.0, 10.0),
        pack_rect(&grid, 10.0, 120.0, 60.0, 10.0)
    );
}
