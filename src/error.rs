//! Error types for the mapping pipeline.
//!
//! Every variant is fatal for the run: this is a batch offline tool with no
//! partial-result or retry policy. Truncated trailing records in the LMS
//! stream are the one tolerated defect and are dropped silently by the
//! decoder rather than reported here.

use thiserror::Error;

/// Pipeline error type.
#[derive(Error, Debug)]
pub enum MapError {
    /// LMS buffer is shorter than the fixed 12-byte header.
    #[error("LMS stream too short for header: {actual} bytes, expected at least {expected}")]
    MalformedHeader { expected: usize, actual: usize },

    /// Header values derive a non-positive scan point count.
    #[error(
        "invalid scan geometry: angular range {angular_range}\u{b0} at \
         {angular_resolution_deg}\u{b0} resolution yields no scan points"
    )]
    InvalidGeometry {
        angular_range: f32,
        angular_resolution_deg: f32,
    },

    /// Scan and pose streams disagree after timestamp filtering.
    #[error("stream alignment failed: {0}")]
    AlignmentMismatch(String),

    /// No world points to bound, grid construction is undefined.
    #[error("empty point cloud: no points to build a grid from")]
    EmptyPointCloud,

    /// Invalid run parameter.
    #[error("configuration error: {0}")]
    Config(String),

    /// NAV pose log line that cannot be parsed.
    #[error("NAV log parse error at line {line}: {reason}")]
    NavParse { line: usize, reason: String },

    /// Underlying file I/O failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, MapError>;
