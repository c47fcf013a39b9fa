//! # PegCell
//!
//! Pin-grid placement engine for a cobot work-cell that tends a machine tool.
//! Raw parts wait on a pegboard table, held in place by positioning pins;
//! this workspace computes where those pins go and how the resulting virtual
//! drawer is laid out.
//!
//! ## Architecture
//!
//! 1. **pegcell-core** - Grid geometry, placement value types, errors
//! 2. **pegcell-placement** - Round/rectangular packers, metrics, labels, drawer grid
//! 3. **pegcell-settings** - Cell configuration (JSON/TOML)
//! 4. **pegcell** - Binary that reports layouts for the configured workpieces

pub use pegcell_core::{
    DerivedMetrics, GridConstants, MountingMode, PinPair, PinPosition, PinSet, PinTriplet,
    PlacementError, Placements, Result, Workpiece, WorkpieceShape,
};

pub use pegcell_placement::{
    derive_metrics, labels_for, pack_rect, pack_round, DrawerGrid, DrawerSlot, FieldBounds,
    PlacementEngine,
};

pub use pegcell_settings::{CellConfig, ConfigError, SettingsError, WorkpieceProfile};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Console output with compact formatting
/// - RUST_LOG environment variable support
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_line_number(true)
        .compact();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}

/// Summary of one workpiece profile's layout
#[derive(Debug, Clone)]
pub struct LayoutReport {
    pub profile: String,
    pub placements: usize,
    pub metrics: DerivedMetrics,
    pub labels: Vec<String>,
    pub drawer_capacity: usize,
}

/// Compute layouts for every workpiece profile in the config.
pub fn layout_reports(config: &CellConfig) -> anyhow::Result<Vec<LayoutReport>> {
    use anyhow::Context;

    let engine = config.engine().context("Failed to build placement engine")?;

    config
        .workpieces
        .iter()
        .map(|profile| -> anyhow::Result<LayoutReport> {
            let placements = engine
                .place(&profile.workpiece)
                .with_context(|| format!("Failed to place '{}'", profile.name))?;
            let drawer = engine
                .drawer_grid(&profile.workpiece)
                .with_context(|| format!("Failed to build drawer for '{}'", profile.name))?;
            let labels = engine.labels(&profile.workpiece)?;

            Ok(LayoutReport {
                profile: profile.name.clone(),
                placements: placements.len(),
                metrics: *drawer.metrics(),
                labels,
                drawer_capacity: drawer.capacity(),
            })
        })
        .collect()
}
