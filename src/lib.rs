//! LMS occupancy grid mapper.
//!
//! Rebuilds a 2D occupancy map from two time-stamped logs recorded on a
//! mobile robot: a fixed-layout binary laser rangefinder stream (LMS) and a
//! whitespace-delimited navigation pose log (NAV).
//!
//! # Pipeline
//!
//! ```text
//! LMS bytes ──> io::lms ──> ScanFrames + ScanGeometry ─┐
//!                                                      ├─> align ──> AlignedScans
//! NAV text ───> io::nav ──> NavSamples ────────────────┘       │
//!                                                              v
//!                                              projection ──> world points
//!                                                              │
//!                                                              v
//!                                                    grid ──> voted cells ──> io::svg
//! ```
//!
//! The whole log is processed as a closed batch: decode everything, align
//! scans to poses by exact timestamp, project each range sample into the
//! world frame using the robot pose at that instant, then vote the flattened
//! point cloud into a fixed-resolution grid. Cells that collect enough votes
//! are emitted as occupied.

// Foundation: shared data types (no internal deps)
pub mod core;

// Run configuration and error taxonomy
pub mod config;
pub mod error;

// Batch algorithm stages
pub mod align;
pub mod grid;
pub mod projection;

// Orchestration
pub mod pipeline;

// I/O infrastructure: log decoding and map rendering
pub mod io;

pub use crate::core::types::{AlignedScan, NavSample, Point2D, Pose2D, ScanFrame, ScanGeometry};

pub use align::align_streams;
pub use config::MapConfig;
pub use error::{MapError, Result};
pub use grid::VoteGrid;
pub use pipeline::{build_map, BuiltMap};
pub use projection::{project_cloud, project_frame};

pub use io::lms::{decode_lms, read_lms, HEADER_SIZE};
pub use io::nav::{parse_nav, read_nav};
pub use io::svg::{render_map, save_svg, SvgConfig};
