use anyhow::Context;
use clap::Parser;
use pegcell::{init_logging, layout_reports, CellConfig, BUILD_DATE, VERSION};
use std::path::PathBuf;
use tracing::{info, warn};

#[derive(Debug, Parser)]
#[command(name = "pegcell", version = VERSION)]
#[command(about = "Report pin-grid layouts for the configured workpieces", long_about = None)]
struct Args {
    /// Cell configuration file (.toml or .json); defaults to the platform config directory
    config: Option<PathBuf>,
}

fn load_config(path: Option<PathBuf>) -> anyhow::Result<CellConfig> {
    if let Some(path) = path {
        return CellConfig::load_from_file(&path)
            .with_context(|| format!("Failed to load {}", path.display()));
    }

    match CellConfig::default_path() {
        Ok(path) if path.exists() => CellConfig::load_from_file(&path)
            .with_context(|| format!("Failed to load {}", path.display())),
        Ok(_) => Ok(CellConfig::default()),
        Err(err) => {
            warn!("{}; using built-in defaults", err);
            Ok(CellConfig::default())
        }
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    init_logging()?;
    info!("PegCell {} (built {})", VERSION, BUILD_DATE);

    let config = load_config(args.config)?;
    info!(
        mode = %config.mounting_mode,
        columns = config.grid.column_count,
        rows = config.grid.row_count,
        "Cell configuration ready"
    );

    for report in layout_reports(&config)? {
        let m = &report.metrics;
        info!(
            profile = %report.profile,
            placements = report.placements,
            drawer_capacity = report.drawer_capacity,
            pin_spacing_mm = m.pin_spacing_distance_mm,
            grid_x_offset_mm = m.grid_x_offset_mm,
            grid_y_offset_mm = m.grid_y_offset_mm,
            columns = m.column_count_in_first_row,
            rows = m.row_count,
            "Layout"
        );
        println!("{}: {}", report.profile, report.labels.join(" "));
    }

    Ok(())
}
