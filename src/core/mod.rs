//! Foundation layer: shared data types.

pub mod types;

pub use types::{AlignedScan, NavSample, Point2D, Pose2D, ScanFrame, ScanGeometry};
