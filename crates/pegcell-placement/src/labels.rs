//! Display labels for pin positions.

use pegcell_core::{PinPosition, PinSet, Placements};
use std::collections::HashSet;

fn unique_labels(positions: impl IntoIterator<Item = PinPosition>) -> Vec<String> {
    let mut seen = HashSet::new();
    positions
        .into_iter()
        .map(|position| position.label())
        .filter(|label| seen.insert(label.clone()))
        .collect()
}

/// Labels for every pin, in placement order, without duplicates.
pub fn labels_for<P: PinSet>(placements: &[P]) -> Vec<String> {
    unique_labels(
        placements
            .iter()
            .flat_map(|placement| placement.positions().iter().copied()),
    )
}

pub fn labels_for_placements(placements: &Placements) -> Vec<String> {
    unique_labels(placements.positions())
}
