//! Placement value types
//!
//! A placement is a small group of pin positions that together cradle one
//! workpiece. Round stock rests on a pair of pins in the same row;
//! rectangular stock rests against an L-shaped triplet.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One physical pin hole on the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PinPosition {
    pub row: u32,
    pub col: u32,
}

impl PinPosition {
    pub fn new(row: u32, col: u32) -> Self {
        Self { row, col }
    }

    /// Spreadsheet-style label: row 0 is `A`, columns are 1-based.
    pub fn label(&self) -> String {
        let letter = char::from_u32('A' as u32 + self.row).unwrap_or('?');
        format!("{}{}", letter, self.col + 1)
    }
}

impl fmt::Display for PinPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A group of pins holding a single workpiece.
///
/// The first position is the anchor the layout metrics are measured from,
/// and the second shares the anchor's row.
pub trait PinSet {
    /// All positions, in placement order
    fn positions(&self) -> &[PinPosition];

    fn anchor(&self) -> PinPosition {
        self.positions()[0]
    }

    fn partner(&self) -> PinPosition {
        self.positions()[1]
    }
}

/// Two pins in the same row cradling a round workpiece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PinPair(pub [PinPosition; 2]);

impl PinPair {
    pub fn new(row: u32, col: u32, partner_col: u32) -> Self {
        Self([PinPosition::new(row, col), PinPosition::new(row, partner_col)])
    }
}

impl PinSet for PinPair {
    fn positions(&self) -> &[PinPosition] {
        &self.0
    }
}

/// Left, right and left-above pins forming an L-shaped stop
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PinTriplet(pub [PinPosition; 3]);

impl PinTriplet {
    pub fn new(left: PinPosition, right: PinPosition, left_above: PinPosition) -> Self {
        Self([left, right, left_above])
    }

    pub fn left(&self) -> PinPosition {
        self.0[0]
    }

    pub fn right(&self) -> PinPosition {
        self.0[1]
    }

    pub fn left_above(&self) -> PinPosition {
        self.0[2]
    }
}

impl PinSet for PinTriplet {
    fn positions(&self) -> &[PinPosition] {
        &self.0
    }
}

/// Placements for one workpiece, in row-major scan order
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "placements", rename_all = "snake_case")]
pub enum Placements {
    Round(Vec<PinPair>),
    Rectangular(Vec<PinTriplet>),
}

impl Placements {
    pub fn len(&self) -> usize {
        match self {
            Self::Round(pairs) => pairs.len(),
            Self::Rectangular(triplets) => triplets.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Every pin position, flattened in placement order
    pub fn positions(&self) -> Vec<PinPosition> {
        match self {
            Self::Round(pairs) => flatten(pairs),
            Self::Rectangular(triplets) => flatten(triplets),
        }
    }

    /// Anchor position of each placement
    pub fn anchors(&self) -> Vec<PinPosition> {
        match self {
            Self::Round(pairs) => pairs.iter().map(PinSet::anchor).collect(),
            Self::Rectangular(triplets) => triplets.iter().map(PinSet::anchor).collect(),
        }
    }
}

fn flatten<P: PinSet>(sets: &[P]) -> Vec<PinPosition> {
    sets.iter()
        .flat_map(|set| set.positions().iter().copied())
        .collect()
}

/// Layout metrics used to size the virtual drawer grid
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DerivedMetrics {
    /// Distance between the two row-sharing pins of the first placement (mm)
    pub pin_spacing_distance_mm: f64,
    /// Horizontal distance between the first two placements (mm)
    pub grid_x_offset_mm: f64,
    /// Vertical distance between the first two placement rows (mm)
    pub grid_y_offset_mm: f64,
    pub column_count_in_first_row: u32,
    pub row_count: u32,
    pub first_pin_x_mm: f64,
    pub first_pin_y_mm: f64,
    /// Always true for the static grid
    pub equal_grid: bool,
}

impl Default for DerivedMetrics {
    fn default() -> Self {
        Self {
            pin_spacing_distance_mm: 0.0,
            grid_x_offset_mm: 0.0,
            grid_y_offset_mm: 0.0,
            column_count_in_first_row: 0,
            row_count: 0,
            first_pin_x_mm: 0.0,
            first_pin_y_mm: 0.0,
            equal_grid: true,
        }
    }
}
