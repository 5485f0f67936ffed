//! NAV pose log parser.
//!
//! The NAV log is plain text: the first line is a column header and is
//! skipped; every following line holds whitespace-separated fields where
//! field 0 is the integer timestamp in milliseconds and fields 3..6 are
//! heading (radians), x and y. Extra trailing fields are ignored.

use std::path::Path;

use log::debug;

use crate::core::types::{NavSample, Pose2D};
use crate::error::{MapError, Result};

/// Minimum fields per data line: timestamp plus heading/x/y at indices 3..6.
const MIN_FIELDS: usize = 6;

/// Parse a NAV pose log from text.
///
/// Returns samples in file order. Any malformed data line is fatal and
/// reported with its 1-based line number. Blank lines are skipped.
pub fn parse_nav(text: &str) -> Result<Vec<NavSample>> {
    let mut samples = Vec::new();

    // Line 1 is the column header
    for (index, line) in text.lines().enumerate().skip(1) {
        let line_no = index + 1;
        if line.trim().is_empty() {
            continue;
        }

        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.len() < MIN_FIELDS {
            return Err(MapError::NavParse {
                line: line_no,
                reason: format!(
                    "expected at least {MIN_FIELDS} fields, got {}",
                    fields.len()
                ),
            });
        }

        let timestamp_ms = parse_field::<i32>(fields[0], "timestamp", line_no)?;
        let theta = parse_field::<f32>(fields[3], "heading", line_no)?;
        let x = parse_field::<f32>(fields[4], "x", line_no)?;
        let y = parse_field::<f32>(fields[5], "y", line_no)?;

        samples.push(NavSample::new(timestamp_ms, Pose2D::new(x, y, theta)));
    }

    debug!("NAV log: {} samples", samples.len());
    Ok(samples)
}

fn parse_field<T: std::str::FromStr>(field: &str, name: &str, line_no: usize) -> Result<T> {
    field.parse().map_err(|_| MapError::NavParse {
        line: line_no,
        reason: format!("cannot parse {name} from {field:?}"),
    })
}

/// Read and parse a NAV pose log from a file.
pub fn read_nav(path: impl AsRef<Path>) -> Result<Vec<NavSample>> {
    let text = std::fs::read_to_string(path)?;
    parse_nav(&text)
}
