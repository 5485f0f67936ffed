//! SVG rendering of the voted occupancy map.
//!
//! Draws each voted cell as a filled square, with an optional robot
//! trajectory polyline overlaid for auditing. World Y grows upward, screen
//! Y grows downward, so the Y axis is flipped during projection.

use std::fmt::Write as _;
use std::path::Path;

use crate::core::types::{Point2D, Pose2D};
use crate::error::Result;

/// Configuration for SVG rendering.
#[derive(Clone, Debug)]
pub struct SvgConfig {
    /// Pixels per world unit
    pub scale: f32,
    /// Padding around the map in pixels
    pub padding: f32,
    /// Occupied cell fill color
    pub cell_color: &'static str,
    /// Background color
    pub background: &'static str,
    /// Trajectory line color
    pub trajectory_color: &'static str,
    /// Trajectory line width in pixels
    pub trajectory_width: f32,
}

impl Default for SvgConfig {
    fn default() -> Self {
        Self {
            scale: 50.0,
            padding: 20.0,
            cell_color: "#333333",
            background: "#FFFFFF",
            trajectory_color: "#AA2222",
            trajectory_width: 1.5,
        }
    }
}

/// Render voted cells (lower-left corners) and an optional trajectory to SVG.
///
/// `cell_size` is the world-unit side length the cells were voted at.
pub fn render_map(
    cells: &[Point2D],
    cell_size: f32,
    trajectory: &[Pose2D],
    config: &SvgConfig,
) -> String {
    // World bounds over cell squares and trajectory points
    let mut min_x = f32::INFINITY;
    let mut min_y = f32::INFINITY;
    let mut max_x = f32::NEG_INFINITY;
    let mut max_y = f32::NEG_INFINITY;
    for cell in cells {
        min_x = min_x.min(cell.x);
        min_y = min_y.min(cell.y);
        max_x = max_x.max(cell.x + cell_size);
        max_y = max_y.max(cell.y + cell_size);
    }
    for pose in trajectory {
        min_x = min_x.min(pose.x);
        min_y = min_y.min(pose.y);
        max_x = max_x.max(pose.x);
        max_y = max_y.max(pose.y);
    }
    if cells.is_empty() && trajectory.is_empty() {
        min_x = 0.0;
        min_y = 0.0;
        max_x = cell_size;
        max_y = cell_size;
    }

    let width = (max_x - min_x) * config.scale + 2.0 * config.padding;
    let height = (max_y - min_y) * config.scale + 2.0 * config.padding;

    let to_px_x = |x: f32| (x - min_x) * config.scale + config.padding;
    let to_px_y = |y: f32| (max_y - y) * config.scale + config.padding;

    let mut out = String::new();
    let _ = writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width:.1}" height="{height:.1}" viewBox="0 0 {width:.1} {height:.1}">"#
    );
    let _ = writeln!(
        out,
        r#"  <rect x="0" y="0" width="{width:.1}" height="{height:.1}" fill="{}"/>"#,
        config.background
    );

    let side = cell_size * config.scale;
    for cell in cells {
        // Screen anchor is the cell's top-left corner: world (x, y + L)
        let _ = writeln!(
            out,
            r#"  <rect x="{:.2}" y="{:.2}" width="{side:.2}" height="{side:.2}" fill="{}"/>"#,
            to_px_x(cell.x),
            to_px_y(cell.y + cell_size),
            config.cell_color
        );
    }

    if trajectory.len() > 1 {
        let mut points = String::new();
        for pose in trajectory {
            let _ = write!(points, "{:.2},{:.2} ", to_px_x(pose.x), to_px_y(pose.y));
        }
        let _ = writeln!(
            out,
            r#"  <polyline points="{}" fill="none" stroke="{}" stroke-width="{:.1}"/>"#,
            points.trim_end(),
            config.trajectory_color,
            config.trajectory_width
        );
    }

    out.push_str("</svg>\n");
    out
}

/// Render and write the map to a file.
pub fn save_svg(
    path: impl AsRef<Path>,
    cells: &[Point2D],
    cell_size: f32,
    trajectory: &[Pose2D],
    config: &SvgConfig,
) -> Result<()> {
    let svg = render_map(cells, cell_size, trajectory, config);
    std::fs::write(path, svg)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_cells() {
        let cells = vec![Point2D::new(0.0, 0.0), Point2D::new(0.1, 0.2)];
        let svg = render_map(&cells, 0.1, &[], &SvgConfig::default());
        assert!(svg.starts_with("<svg"));
        assert!(svg.trim_end().ends_with("</svg>"));
        // Background plus one rect per cell
        assert_eq!(svg.matches("<rect").count(), 3);
        assert!(!svg.contains("<polyline"));
    }

    #[test]
    fn test_render_trajectory() {
        let trajectory = vec![
            Pose2D::new(0.0, 0.0, 0.0),
            Pose2D::new(1.0, 0.5, 0.0),
            Pose2D::new(2.0, 1.0, 0.0),
        ];
        let svg = render_map(&[], 0.1, &trajectory, &SvgConfig::default());
        assert!(svg.contains("<polyline"));
    }

    #[test]
    fn test_render_empty_is_valid() {
        let svg = render_map(&[], 0.1, &[], &SvgConfig::default());
        assert!(svg.starts_with("<svg"));
        assert!(svg.contains("</svg>"));
    }

    #[test]
    fn test_save_svg() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("map.svg");
        save_svg(
            &path,
            &[Point2D::new(0.0, 0.0)],
            0.1,
            &[],
            &SvgConfig::default(),
        )
        .unwrap();
        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.contains("<svg"));
    }
}
