//! Vote-counting occupancy grid.
//!
//! The grid is sized once from the bounding box of the complete point cloud
//! (floor/ceil rounded to whole world units), every point increments the
//! counter of the cell it falls in, and cells with enough votes are emitted
//! as occupied. Single-pass batch construction, no eviction or incremental
//! update.

use log::debug;

use crate::core::types::Point2D;
use crate::error::{MapError, Result};

/// 2D grid of vote counters over the point cloud's bounding box.
///
/// Cell `(i, j)` covers world coordinates
/// `[left + i*L, left + (i+1)*L) x [bottom + j*L, bottom + (j+1)*L)`.
///
/// Counters are stored in a flat buffer indexed by `i * height + j`.
#[derive(Debug, Clone)]
pub struct VoteGrid {
    cells: Vec<u32>,
    width: usize,
    height: usize,
    left: f32,
    bottom: f32,
    cell_size: f32,
}

impl VoteGrid {
    /// Build the grid from a complete world point cloud.
    ///
    /// Bounds and indices are computed from the same point slice in one
    /// call; that coupling is what guarantees every index lands in range.
    /// Fails with [`MapError::EmptyPointCloud`] if there are no points and
    /// [`MapError::Config`] if `cell_size` is not positive and finite.
    pub fn build(points: &[Point2D], cell_size: f32) -> Result<Self> {
        if !cell_size.is_finite() || cell_size <= 0.0 {
            return Err(MapError::Config(format!(
                "cell_size must be positive and finite, got {cell_size}"
            )));
        }
        if points.is_empty() {
            return Err(MapError::EmptyPointCloud);
        }

        let mut min_x = f32::INFINITY;
        let mut min_y = f32::INFINITY;
        let mut max_x = f32::NEG_INFINITY;
        let mut max_y = f32::NEG_INFINITY;
        for p in points {
            min_x = min_x.min(p.x);
            min_y = min_y.min(p.y);
            max_x = max_x.max(p.x);
            max_y = max_y.max(p.y);
        }

        let left = min_x.floor();
        let bottom = min_y.floor();
        let right = max_x.ceil();
        let top = max_y.ceil();

        // A cloud of identical integer-coordinate points collapses the box;
        // the grid still needs one cell
        let width = (((right - left) / cell_size).ceil() as usize).max(1);
        let height = (((top - bottom) / cell_size).ceil() as usize).max(1);

        let mut grid = Self {
            cells: vec![0; width * height],
            width,
            height,
            left,
            bottom,
            cell_size,
        };

        for p in points {
            let (i, j) = grid.cell_index(p);
            grid.cells[i * height + j] += 1;
        }

        debug!(
            "vote grid {}x{} cells of {} units, origin ({}, {})",
            width, height, cell_size, left, bottom
        );
        Ok(grid)
    }

    /// Map a world point to its cell index, clamped into range.
    ///
    /// Bounds come from the same cloud being indexed, so the result is in
    /// range by construction; the clamp only guards against a float rounding
    /// at the exact right/top edge pushing an index out by one.
    #[inline]
    fn cell_index(&self, p: &Point2D) -> (usize, usize) {
        let i = ((p.x - self.left) / self.cell_size).floor() as isize;
        let j = ((p.y - self.bottom) / self.cell_size).floor() as isize;
        debug_assert!(i >= 0 && (i as usize) <= self.width);
        debug_assert!(j >= 0 && (j as usize) <= self.height);
        let i = (i.max(0) as usize).min(self.width - 1);
        let j = (j.max(0) as usize).min(self.height - 1);
        (i, j)
    }

    /// Grid width in cells.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Grid height in cells.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// World X coordinate of the grid's left edge.
    #[inline]
    pub fn left(&self) -> f32 {
        self.left
    }

    /// World Y coordinate of the grid's bottom edge.
    #[inline]
    pub fn bottom(&self) -> f32 {
        self.bottom
    }

    /// Cell side length in world units.
    #[inline]
    pub fn cell_size(&self) -> f32 {
        self.cell_size
    }

    /// Vote count of cell `(i, j)`.
    #[inline]
    pub fn votes(&self, i: usize, j: usize) -> u32 {
        self.cells[i * self.height + j]
    }

    /// Lower-left corners of every cell with at least `threshold` votes.
    ///
    /// Emission order is deterministic: row-major over i, then j.
    pub fn occupied_cells(&self, threshold: u32) -> Vec<Point2D> {
        let mut voted = Vec::new();
        for i in 0..self.width {
            for j in 0..self.height {
                if self.cells[i * self.height + j] >= threshold {
                    voted.push(Point2D::new(
                        self.left + i as f32 * self.cell_size,
                        self.bottom + j as f32 * self.cell_size,
                    ));
                }
            }
        }
        voted
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    #[test]
    fn test_empty_cloud_fails() {
        assert!(matches!(
            VoteGrid::build(&[], 0.1),
            Err(MapError::EmptyPointCloud)
        ));
    }

    #[test]
    fn test_bad_cell_size_fails() {
        let points = [Point2D::new(0.0, 0.0)];
        assert!(matches!(
            VoteGrid::build(&points, 0.0),
            Err(MapError::Config(_))
        ));
        assert!(matches!(
            VoteGrid::build(&points, -1.0),
            Err(MapError::Config(_))
        ));
        assert!(matches!(
            VoteGrid::build(&points, f32::NAN),
            Err(MapError::Config(_))
        ));
    }

    #[test]
    fn test_bounds_and_size() {
        let points = [Point2D::new(0.25, -0.75), Point2D::new(1.5, 2.5)];
        let grid = VoteGrid::build(&points, 0.5).unwrap();
        assert_relative_eq!(grid.left(), 0.0);
        assert_relative_eq!(grid.bottom(), -1.0);
        // right = 2, top = 3 -> 2/0.5 = 4 wide, 4/0.5 = 8 tall
        assert_eq!(grid.width(), 4);
        assert_eq!(grid.height(), 8);
    }

    #[test]
    fn test_degenerate_cloud_gets_one_cell() {
        // All points on one integer coordinate: floor == ceil
        let points = [Point2D::new(2.0, 3.0), Point2D::new(2.0, 3.0)];
        let grid = VoteGrid::build(&points, 0.1).unwrap();
        assert_eq!(grid.width(), 1);
        assert_eq!(grid.height(), 1);
        assert_eq!(grid.votes(0, 0), 2);
    }

    #[test]
    fn test_votes_accumulate() {
        let points = [
            Point2D::new(0.05, 0.05),
            Point2D::new(0.06, 0.04),
            Point2D::new(0.95, 0.95),
        ];
        let grid = VoteGrid::build(&points, 0.1).unwrap();
        assert_eq!(grid.votes(0, 0), 2);
        assert_eq!(grid.votes(9, 9), 1);
    }

    #[test]
    fn test_threshold_monotonicity() {
        let mut rng = StdRng::seed_from_u64(7);
        let points: Vec<Point2D> = (0..500)
            .map(|_| Point2D::new(rng.gen_range(-2.0..2.0), rng.gen_range(-2.0..2.0)))
            .collect();
        let grid = VoteGrid::build(&points, 0.25).unwrap();

        let mut previous = usize::MAX;
        for threshold in 1..10 {
            let count = grid.occupied_cells(threshold).len();
            assert!(count <= previous, "threshold {threshold} grew the cell count");
            previous = count;
        }
    }

    #[test]
    fn test_occupied_cells_row_major_order() {
        let points = [
            Point2D::new(0.05, 0.05),
            Point2D::new(0.05, 0.95),
            Point2D::new(0.95, 0.05),
        ];
        let grid = VoteGrid::build(&points, 0.1).unwrap();
        let voted = grid.occupied_cells(1);
        assert_eq!(voted.len(), 3);
        // i outer, j inner
        assert_relative_eq!(voted[0].x, 0.0);
        assert_relative_eq!(voted[0].y, 0.0);
        assert_relative_eq!(voted[1].x, 0.0);
        assert_relative_eq!(voted[1].y, 0.9, epsilon = 1e-6);
        assert_relative_eq!(voted[2].x, 0.9, epsilon = 1e-6);
        assert_relative_eq!(voted[2].y, 0.0);
    }

    #[test]
    fn test_boundary_points_stay_in_range() {
        // Points exactly on the ceil'd right/top edge must map inside
        let points = [Point2D::new(0.0, 0.0), Point2D::new(1.0, 1.0)];
        let grid = VoteGrid::build(&points, 0.1).unwrap();
        assert_eq!(grid.width(), 10);
        assert_eq!(grid.height(), 10);
        assert_eq!(grid.votes(0, 0), 1);
        assert_eq!(grid.votes(9, 9), 1);
    }

    #[test]
    fn test_random_clouds_index_in_bounds() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..50 {
            let n = rng.gen_range(1..200);
            let spread = rng.gen_range(0.1..100.0f32);
            let points: Vec<Point2D> = (0..n)
                .map(|_| {
                    Point2D::new(
                        rng.gen_range(-spread..spread),
                        rng.gen_range(-spread..spread),
                    )
                })
                .collect();
            let cell_size = rng.gen_range(0.01..5.0f32);

            let grid = VoteGrid::build(&points, cell_size).unwrap();
            // Every vote landed in an allocated cell and none were lost
            let total: u32 = (0..grid.width())
                .flat_map(|i| (0..grid.height()).map(move |j| (i, j)))
                .map(|(i, j)| grid.votes(i, j))
                .sum();
            assert_eq!(total as usize, points.len());
        }
    }
}
