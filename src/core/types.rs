//! Data types shared across the pipeline stages.

use serde::{Deserialize, Serialize};

/// A 2D point in the world frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point2D {
    /// X coordinate in world units
    pub x: f32,
    /// Y coordinate in world units
    pub y: f32,
}

impl Point2D {
    /// Create a new point.
    #[inline]
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl Default for Point2D {
    fn default() -> Self {
        Self { x: 0.0, y: 0.0 }
    }
}

/// Robot pose in the world frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Pose2D {
    /// X position in world units
    pub x: f32,
    /// Y position in world units
    pub y: f32,
    /// Heading in radians
    pub theta: f32,
}

impl Pose2D {
    /// Create a new pose.
    #[inline]
    pub fn new(x: f32, y: f32, theta: f32) -> Self {
        Self { x, y, theta }
    }

    /// Pose at the origin with zero heading.
    #[inline]
    pub fn identity() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }
}

impl Default for Pose2D {
    fn default() -> Self {
        Self::identity()
    }
}

/// One timestamped NAV fix: where the robot was at an instant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NavSample {
    /// Timestamp in milliseconds
    pub timestamp_ms: i32,
    /// Robot pose at that instant
    pub pose: Pose2D,
}

impl NavSample {
    /// Create a new NAV sample.
    #[inline]
    pub fn new(timestamp_ms: i32, pose: Pose2D) -> Self {
        Self { timestamp_ms, pose }
    }
}

/// One timestamped laser scan: raw range readings in sensor units.
///
/// Immutable once decoded. The reading count always equals the
/// [`ScanGeometry::point_count`] derived from the stream header.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScanFrame {
    /// Timestamp in milliseconds
    pub timestamp_ms: i32,
    /// Raw range readings, one per scan angle
    pub ranges: Vec<u16>,
}

impl ScanFrame {
    /// Create a new frame.
    #[inline]
    pub fn new(timestamp_ms: i32, ranges: Vec<u16>) -> Self {
        Self {
            timestamp_ms,
            ranges,
        }
    }

    /// Number of range readings.
    #[inline]
    pub fn len(&self) -> usize {
        self.ranges.len()
    }

    /// Check if the frame has no readings.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }
}

/// Scan geometry derived once from the LMS stream header.
///
/// Shared read-only by every frame projection in a run; it never varies
/// across frames of one stream.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScanGeometry {
    /// Raw-unit to world-unit divisor: length = raw / range_unit
    pub range_unit: f32,
    /// Angle between consecutive readings, in radians
    pub angle_increment: f32,
    /// Readings per scan
    pub point_count: usize,
}

impl ScanGeometry {
    /// Size in bytes of one frame record in the LMS stream.
    #[inline]
    pub fn record_size(&self) -> usize {
        4 + 2 * self.point_count
    }
}

/// A laser frame paired with the NAV fix sharing its timestamp.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlignedScan {
    /// The laser frame
    pub frame: ScanFrame,
    /// The pose at the same instant
    pub nav: NavSample,
}

impl AlignedScan {
    /// Shared timestamp of the pair in milliseconds.
    #[inline]
    pub fn timestamp_ms(&self) -> i32 {
        self.frame.timestamp_ms
    }
}
