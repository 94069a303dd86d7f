//! Print the reference z-level column.
//!
//! Writes one diagnostic line per layer, then the thickness list and the
//! midpoint depth list. Set `RUST_LOG=debug` to see regime transitions on
//! stderr.

use std::io;

use env_logger::Env;
use log::info;

use ocean_levels::{write_report, LevelGrid, RegimeGrowth, Result};

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let growth = RegimeGrowth::default();
    let grid = LevelGrid::new(growth.n_levels, growth)?;

    info!(
        "{}: {} levels, {:.1}m total depth",
        grid.profile_description(),
        grid.n_levels(),
        grid.total_depth()
    );

    write_report(&grid, io::stdout().lock())?;
    Ok(())
}
