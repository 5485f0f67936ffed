//! End-to-end batch pipeline: logs in, voted occupancy map out.

use log::info;

use crate::align::align_streams;
use crate::config::MapConfig;
use crate::core::types::{Point2D, Pose2D, ScanGeometry};
use crate::error::Result;
use crate::grid::VoteGrid;
use crate::io::lms::decode_lms;
use crate::io::nav::parse_nav;
use crate::projection::project_cloud;

/// Result of one mapping run.
#[derive(Debug)]
pub struct BuiltMap {
    /// Scan geometry decoded from the LMS header
    pub geometry: ScanGeometry,
    /// Robot poses of the aligned pairs, in time order
    pub trajectory: Vec<Pose2D>,
    /// Total world points projected
    pub point_count: usize,
    /// The vote grid
    pub grid: VoteGrid,
    /// Lower-left corners of cells voted occupied, row-major
    pub occupied: Vec<Point2D>,
}

/// Run the whole pipeline over in-memory logs.
///
/// Decodes the LMS byte buffer, parses the NAV text, aligns the two streams
/// at `config.start_timestamp_ms`, projects every reading into the world
/// frame and votes the cloud into a grid. Any stage failure aborts the run.
pub fn build_map(lms: &[u8], nav_text: &str, config: &MapConfig) -> Result<BuiltMap> {
    config.validate()?;

    let (geometry, frames) = decode_lms(lms)?;
    info!(
        "decoded {} scan frames of {} points",
        frames.len(),
        geometry.point_count
    );

    let nav = parse_nav(nav_text)?;
    info!("parsed {} NAV samples", nav.len());

    let pairs = align_streams(frames, nav, config.start_timestamp_ms)?;
    let trajectory: Vec<Pose2D> = pairs.iter().map(|pair| pair.nav.pose).collect();

    let points = project_cloud(&pairs, &geometry);
    info!("projected {} world points", points.len());

    let grid = VoteGrid::build(&points, config.cell_size)?;
    let occupied = grid.occupied_cells(config.vote_threshold);
    info!(
        "{}x{} grid: {} cells at or above {} votes",
        grid.width(),
        grid.height(),
        occupied.len(),
        config.vote_threshold
    );

    Ok(BuiltMap {
        geometry,
        trajectory,
        point_count: points.len(),
        grid,
        occupied,
    })
}
