//! Polar-to-world projection of laser readings.
//!
//! Each reading k of a scan is a raw range at the scan angle
//! `k * angle_increment` relative to the robot heading. The world position
//! of the return is the robot position plus that range along the world
//! angle. Pure and per-sample: no state, no caching.

use crate::core::types::{AlignedScan, Point2D, Pose2D, ScanFrame, ScanGeometry};

/// Project one frame's readings into world-frame points.
///
/// Returns exactly one point per reading, in scan order:
///
/// ```text
/// len_k = ranges[k] / range_unit
/// a_k   = pose.theta + k * angle_increment
/// p_k   = (pose.x + len_k * cos(a_k), pose.y + len_k * sin(a_k))
/// ```
pub fn project_frame(frame: &ScanFrame, pose: &Pose2D, geometry: &ScanGeometry) -> Vec<Point2D> {
    debug_assert_eq!(frame.ranges.len(), geometry.point_count);
    frame
        .ranges
        .iter()
        .enumerate()
        .map(|(k, &raw)| {
            let length = raw as f32 / geometry.range_unit;
            let angle = pose.theta + k as f32 * geometry.angle_increment;
            let (sin_a, cos_a) = angle.sin_cos();
            Point2D::new(pose.x + length * cos_a, pose.y + length * sin_a)
        })
        .collect()
}

/// Project every aligned pair and flatten into one world point cloud.
pub fn project_cloud(pairs: &[AlignedScan], geometry: &ScanGeometry) -> Vec<Point2D> {
    let mut points = Vec::with_capacity(pairs.len() * geometry.point_count);
    for pair in pairs {
        points.extend(project_frame(&pair.frame, &pair.nav.pose, geometry));
    }
    points
}
