use pegcell_core::GridConstants;
use pegcell_placement::labels::labels_for;
use pegcell_placement::rect::pack_rect;
use pegcell_placement::round::pack_round;
use std::collections::HashSet;

#[test]
fn test_round_100mm_labels() {
    let grid = GridConstants::default();
    let labels = labels_for(&pack_round(&grid, 8.0, 100.0, 15.0));

    assert_eq!(labels.len(), 40);
    assert_eq!(&labels[..4], &["A2", "A4", "A8", "A10"]);

    let letters: HashSet<char> = labels.iter().filter_map(|l| l.chars().next()).collect();
    assert_eq!(letters, HashSet::from(['A', 'F', 'K', 'P']));
    assert!(labels.contains(&"P26".to_string()));
    assert!(labels.contains(&"P28".to_string()));
}

#[test]
fn test_rect_labels_include_stop_pins() {
    let grid = GridConstants::default();
    let labels = labels_for(&pack_rect(&grid, 8.0, 150.0, 80.0, 15.0));

    assert_eq!(&labels[..3], &["A2", "A6", "B1"]);
    // 15 triplets, 3 distinct pins each
    assert_eq!(labels.len(), 45);
}

#[test]
fn test_labels_are_unique() {
    let grid = GridConstants::default();
    let labels = labels_for(&pack_rect(&grid, 8.0, 30.0, 30.0, 5.0));
    let unique: HashSet<_> = labels.iter().collect();
    assert_eq!(unique.len(), labels.len());
}
