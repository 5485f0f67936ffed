//! Run configuration for the mapping pipeline.
//!
//! All parameters are per-run inputs, never hardcoded in the pipeline. The
//! start timestamp in particular is dataset-specific (the instant the robot
//! begins moving) and must be supplied by the caller.

use serde::{Deserialize, Serialize};

use crate::error::{MapError, Result};

/// Parameters for one mapping run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MapConfig {
    /// Scans and poses stamped before this (milliseconds) are dropped.
    /// Marks when the robot begins moving. Default: 0 (no cutoff).
    pub start_timestamp_ms: i32,

    /// Grid cell side length in world units.
    /// Default: 0.1
    pub cell_size: f32,

    /// Minimum number of points in a cell to mark it occupied.
    /// Default: 16
    pub vote_threshold: u32,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            start_timestamp_ms: 0,
            cell_size: 0.1,
            vote_threshold: 16,
        }
    }
}

impl MapConfig {
    /// Create a config with the given start cutoff and default grid parameters.
    pub fn new(start_timestamp_ms: i32) -> Self {
        Self {
            start_timestamp_ms,
            ..Self::default()
        }
    }

    /// Check parameter ranges before a run.
    pub fn validate(&self) -> Result<()> {
        if !self.cell_size.is_finite() || self.cell_size <= 0.0 {
            return Err(MapError::Config(format!(
                "cell_size must be positive and finite, got {}",
                self.cell_size
            )));
        }
        if self.vote_threshold < 1 {
            return Err(MapError::Config(
                "vote_threshold must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
