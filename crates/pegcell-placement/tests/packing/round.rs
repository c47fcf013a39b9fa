use pegcell_core::{GridConstants, PinPair, PinPosition, PinSet};
use pegcell_placement::round::pack_round;
use std::collections::BTreeMap;

fn pairs_per_row(pairs: &[PinPair]) -> BTreeMap<u32, usize> {
    let mut rows = BTreeMap::new();
    for pair in pairs {
        *rows.entry(pair.anchor().row).or_insert(0) += 1;
    }
    rows
}

fn anchor_columns(pairs: &[PinPair], row: u32) -> Vec<u32> {
    pairs
        .iter()
        .filter(|p| p.anchor().row == row)
        .map(|p| p.anchor().col)
        .collect()
}

#[test]
fn test_round_100mm_bar() {
    let grid = GridConstants::default();
    let pairs = pack_round(&grid, 8.0, 100.0, 15.0);

    assert_eq!(pairs.len(), 20);
    assert_eq!(pairs[0].positions(), &[PinPosition::new(0, 1), PinPosition::new(0, 3)]);

    let rows = pairs_per_row(&pairs);
    assert_eq!(rows.keys().copied().collect::<Vec<_>>(), vec![0, 5, 10, 15]);
    assert!(rows.values().all(|&count| count == 5));
    assert_eq!(anchor_columns(&pairs, 0), vec![1, 7, 13, 19, 25]);
}

#[test]
fn test_round_thick_pins_keep_row_pitch() {
    let grid = GridConstants::default();
    let thin = pack_round(&grid, 8.0, 100.0, 15.0);
    let thick = pack_round(&grid, 20.0, 100.0, 15.0);

    assert_eq!(thin, thick);
    assert_eq!(
        pairs_per_row(&thick).keys().copied().collect::<Vec<_>>(),
        vec![0, 5, 10, 15]
    );
}

#[test]
fn test_round_160mm_bar() {
    let grid = GridConstants::default();
    let pairs = pack_round(&grid, 8.0, 160.0, 15.0);

    assert_eq!(pairs.len(), 9);
    assert_eq!(pairs[0].positions(), &[PinPosition::new(0, 2), PinPosition::new(0, 5)]);

    let rows = pairs_per_row(&pairs);
    assert_eq!(rows.keys().copied().collect::<Vec<_>>(), vec![0, 7, 14]);
    assert!(rows.values().all(|&count| count == 3));
    assert_eq!(anchor_columns(&pairs, 7), vec![2, 10, 18]);
}

#[test]
fn test_round_small_bar_uses_adjacent_pins() {
    let grid = GridConstants::default();
    let pairs = pack_round(&grid, 8.0, 40.0, 5.0);

    assert!(!pairs.is_empty());
    for pair in &pairs {
        assert_eq!(pair.partner().col, pair.anchor().col + 1);
        assert_eq!(pair.partner().row, pair.anchor().row);
    }
}

#[test]
fn test_round_scan_order_is_row_major() {
    let grid = GridConstants::default();
    let pairs = pack_round(&grid, 8.0, 100.0, 15.0);
    let anchors: Vec<_> = pairs.iter().map(|p| p.anchor()).collect();
    let mut sorted = anchors.clone();
    sorted.sort();
    assert_eq!(anchors, sorted);
}

#[test]
fn test_round_narrow_table() {
    // Four columns: only the footprint starting at col 1 fits.
    let grid = GridConstants::with_size(4, 22);
    let pairs = pack_round(&grid, 8.0, 100.0, 15.0);
    assert_eq!(anchor_columns(&pairs, 0), vec![1]);
    assert_eq!(pairs[0].partner().col, 3);
}
