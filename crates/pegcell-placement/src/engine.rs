//! Placement engine facade
//!
//! Binds one table geometry and mounting mode, validates workpieces at the
//! boundary, and dispatches to the matching packer. Results can optionally
//! be memoized; the packers are pure so a cached set is always identical to
//! a freshly computed one.

use crate::drawer::DrawerGrid;
use crate::labels::labels_for_placements;
use crate::metrics::metrics_for_placements;
use crate::rect::pack_rect;
use crate::round::pack_round;
use parking_lot::Mutex;
use pegcell_core::{
    DerivedMetrics, GridConstants, MountingMode, PlacementError, Placements, Result, Workpiece,
    WorkpieceShape,
};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, warn};

/// Largest pin the table's holes accept (mm)
pub const DEFAULT_MAX_PIN_DIAMETER_MM: f64 = 20.0;

/// Memoized placement sets kept before the cache is flushed
pub const DEFAULT_CACHE_CAPACITY: usize = 256;

type PlacementCache = Arc<Mutex<HashMap<Vec<u64>, Placements>>>;

/// Run the packer matching the workpiece shape.
pub fn pack_workpiece(grid: &GridConstants, workpiece: &Workpiece) -> Placements {
    match workpiece.shape {
        WorkpieceShape::Round { diameter_mm } => Placements::Round(pack_round(
            grid,
            workpiece.pin_diameter_mm,
            diameter_mm,
            workpiece.margin_mm,
        )),
        WorkpieceShape::Rectangular {
            length_mm,
            width_mm,
        } => Placements::Rectangular(pack_rect(
            grid,
            workpiece.pin_diameter_mm,
            length_mm,
            width_mm,
            workpiece.margin_mm,
        )),
    }
}

/// Placement engine for one pin table
#[derive(Debug, Clone)]
pub struct PlacementEngine {
    grid: GridConstants,
    mode: MountingMode,
    max_pin_diameter_mm: f64,
    cache: Option<PlacementCache>,
    cache_capacity: usize,
}

impl PlacementEngine {
    /// Create an engine for the given table; fails if the geometry is invalid
    pub fn new(grid: GridConstants, mode: MountingMode) -> Result<Self> {
        grid.validate()?;
        Ok(Self {
            grid,
            mode,
            max_pin_diameter_mm: DEFAULT_MAX_PIN_DIAMETER_MM,
            cache: None,
            cache_capacity: DEFAULT_CACHE_CAPACITY,
        })
    }

    /// Memoize placements by workpiece.
    ///
    /// Holds at most `DEFAULT_CACHE_CAPACITY` sets; inserting past that
    /// flushes the cache first.
    pub fn with_cache(mut self) -> Self {
        self.cache = Some(Arc::new(Mutex::new(HashMap::new())));
        self
    }

    /// Memoize placements, keeping at most `capacity` sets (minimum 1)
    pub fn with_cache_capacity(mut self, capacity: usize) -> Self {
        self.cache_capacity = capacity.max(1);
        self.with_cache()
    }

    pub fn with_max_pin_diameter(mut self, max_pin_diameter_mm: f64) -> Self {
        self.max_pin_diameter_mm = max_pin_diameter_mm;
        self
    }

    pub fn grid(&self) -> &GridConstants {
        &self.grid
    }

    pub fn mode(&self) -> MountingMode {
        self.mode
    }

    pub fn max_pin_diameter_mm(&self) -> f64 {
        self.max_pin_diameter_mm
    }

    /// Number of memoized placement sets
    pub fn cached_entries(&self) -> usize {
        self.cache.as_ref().map_or(0, |cache| cache.lock().len())
    }

    pub fn clear_cache(&self) {
        if let Some(cache) = &self.cache {
            cache.lock().clear();
        }
    }

    /// Compute placements for a workpiece.
    ///
    /// The pin diameter is clamped to the table maximum before packing.
    pub fn place(&self, workpiece: &Workpiece) -> Result<Placements> {
        if let Err(err) = workpiece.validate() {
            warn!("Rejected workpiece: {}", err);
            return Err(err);
        }

        let workpiece = workpiece.with_clamped_pin(self.max_pin_diameter_mm);

        let Some(cache) = &self.cache else {
            return Ok(pack_workpiece(&self.grid, &workpiece));
        };

        let key = workpiece.cache_key();
        if let Some(hit) = cache.lock().get(&key) {
            debug!("Placement cache hit");
            return Ok(hit.clone());
        }

        let placements = pack_workpiece(&self.grid, &workpiece);
        let mut entries = cache.lock();
        if entries.len() >= self.cache_capacity && !entries.contains_key(&key) {
            debug!(entries = entries.len(), "Placement cache full, flushing");
            entries.clear();
        }
        entries.insert(key, placements.clone());
        Ok(placements)
    }

    /// Layout metrics for the workpiece's placements
    pub fn metrics(&self, workpiece: &Workpiece) -> Result<DerivedMetrics> {
        self.require_grid("metrics")?;
        let placements = self.place(workpiece)?;
        Ok(metrics_for_placements(&self.grid, &placements))
    }

    /// Unique pin labels for the workpiece's placements
    pub fn labels(&self, workpiece: &Workpiece) -> Result<Vec<String>> {
        self.require_grid("labels")?;
        let placements = self.place(workpiece)?;
        Ok(labels_for_placements(&placements))
    }

    /// Virtual drawer grid for the workpiece
    pub fn drawer_grid(&self, workpiece: &Workpiece) -> Result<DrawerGrid> {
        self.require_grid("drawer_grid")?;
        let placements = self.place(workpiece)?;
        let metrics = metrics_for_placements(&self.grid, &placements);
        Ok(DrawerGrid::from_metrics(&metrics))
    }

    fn require_grid(&self, operation: &str) -> Result<()> {
        if self.mode.has_discrete_grid() {
            return Ok(());
        }
        warn!(mode = %self.mode, operation, "Grid operation requested without a discrete grid");
        Err(PlacementError::unsupported_mode(self.mode, operation))
    }
}
