//! CLI for rebuilding an occupancy map from LMS and NAV logs.
//!
//! # Usage
//!
//! ```bash
//! lms-gridmap --lms URG_X_20130903_195003.lms --nav ld.nav \
//!     --start-ms 71439698 --svg map.svg
//! ```
//!
//! Writes an SVG rendering of the voted map and, with `--cells`, a CSV of
//! the voted cell corners for downstream consumers.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use clap::Parser;

use lms_gridmap::{build_map, render_map, MapConfig, SvgConfig};

#[derive(Parser)]
#[command(name = "lms-gridmap")]
#[command(about = "Rebuild a 2D occupancy map from LMS laser and NAV pose logs")]
struct Args {
    /// LMS binary laser log
    #[arg(long)]
    lms: PathBuf,

    /// NAV pose log (text)
    #[arg(long)]
    nav: PathBuf,

    /// Timestamp (ms) when the robot starts moving; earlier data is dropped
    #[arg(long, default_value_t = 0)]
    start_ms: i32,

    /// Grid cell side length in world units
    #[arg(long, default_value_t = 0.1)]
    cell_size: f32,

    /// Minimum points in a cell to mark it occupied
    #[arg(long, default_value_t = 16)]
    vote_threshold: u32,

    /// Output SVG map
    #[arg(long, default_value = "map.svg")]
    svg: PathBuf,

    /// Optional CSV of voted cell corners (x,y per line)
    #[arg(long)]
    cells: Option<PathBuf>,

    /// Omit the robot trajectory from the SVG
    #[arg(long)]
    no_trajectory: bool,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    if let Err(e) = run(&args) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let lms = std::fs::read(&args.lms)?;
    let nav = std::fs::read_to_string(&args.nav)?;

    let config = MapConfig {
        start_timestamp_ms: args.start_ms,
        cell_size: args.cell_size,
        vote_threshold: args.vote_threshold,
    };

    let map = build_map(&lms, &nav, &config)?;

    if let Some(path) = &args.cells {
        let mut writer = BufWriter::new(File::create(path)?);
        writeln!(writer, "x,y")?;
        for cell in &map.occupied {
            writeln!(writer, "{:.4},{:.4}", cell.x, cell.y)?;
        }
        writer.flush()?;
    }

    let trajectory = if args.no_trajectory {
        &[][..]
    } else {
        &map.trajectory[..]
    };
    let svg = render_map(&map.occupied, config.cell_size, trajectory, &SvgConfig::default());
    std::fs::write(&args.svg, svg)?;

    println!(
        "{} points voted into a {}x{} grid, {} occupied cells -> {}",
        map.point_count,
        map.grid.width(),
        map.grid.height(),
        map.occupied.len(),
        args.svg.display()
    );
    Ok(())
}
