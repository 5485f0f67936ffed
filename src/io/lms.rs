//! Fixed-layout binary LMS laser stream decoder.
//!
//! Stream layout (little-endian throughout):
//!
//! ```text
//! Header (12 bytes):
//!   - Angular range:      f32, degrees
//!   - Angular resolution: f32, degrees
//!   - Range unit:         f32, raw-to-length divisor
//! Record (4 + 2N bytes), repeated:
//!   - Timestamp:          i32, milliseconds
//!   - Ranges:             u16 x N, raw sensor units
//! ```
//!
//! N is derived from the header, not stored:
//! `N = round(angular_range / angular_resolution) + 1`.
//!
//! A trailing partial record is not an error; it is silently discarded.

use std::path::Path;

use log::{debug, warn};

use crate::core::types::{ScanFrame, ScanGeometry};
use crate::error::{MapError, Result};

/// Size of the stream header in bytes: 3 little-endian f32 values.
pub const HEADER_SIZE: usize = 12;

#[inline]
fn le_f32(bytes: &[u8]) -> f32 {
    f32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]])
}

#[inline]
fn le_i32(bytes: &[u8]) -> i32 {
    i32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]])
}

/// Decode a complete LMS stream from a byte buffer.
///
/// Returns the scan geometry derived from the header and every complete
/// frame record, in stream order. Fails with [`MapError::MalformedHeader`]
/// if the buffer cannot hold the header, and [`MapError::InvalidGeometry`]
/// if the header derives a non-positive point count.
pub fn decode_lms(buf: &[u8]) -> Result<(ScanGeometry, Vec<ScanFrame>)> {
    if buf.len() < HEADER_SIZE {
        return Err(MapError::MalformedHeader {
            expected: HEADER_SIZE,
            actual: buf.len(),
        });
    }

    let angular_range = le_f32(&buf[0..4]);
    let angular_resolution_deg = le_f32(&buf[4..8]);
    let range_unit = le_f32(&buf[8..12]);

    let steps = angular_range / angular_resolution_deg;
    if !steps.is_finite() || steps < 0.0 {
        return Err(MapError::InvalidGeometry {
            angular_range,
            angular_resolution_deg,
        });
    }
    let point_count = steps.round() as usize + 1;

    let geometry = ScanGeometry {
        range_unit,
        angle_increment: angular_resolution_deg.to_radians(),
        point_count,
    };

    let body = &buf[HEADER_SIZE..];
    let record_size = geometry.record_size();
    let mut frames = Vec::with_capacity(body.len() / record_size);

    // chunks_exact drops a trailing partial record by construction
    for record in body.chunks_exact(record_size) {
        let timestamp_ms = le_i32(&record[0..4]);
        let ranges = record[4..]
            .chunks_exact(2)
            .map(|pair| u16::from_le_bytes([pair[0], pair[1]]))
            .collect();
        frames.push(ScanFrame::new(timestamp_ms, ranges));
    }

    let leftover = body.len() % record_size;
    if leftover != 0 {
        warn!("LMS stream: discarding {leftover} trailing bytes of a partial record");
    }
    debug!(
        "LMS stream: {} frames of {} points (record size {} bytes)",
        frames.len(),
        point_count,
        record_size
    );

    Ok((geometry, frames))
}

/// Read and decode an LMS stream from a file.
pub fn read_lms(path: impl AsRef<Path>) -> Result<(ScanGeometry, Vec<ScanFrame>)> {
    let buf = std::fs::read(path)?;
    decode_lms(&buf)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn encode_header(angular_range: f32, angular_resolution_deg: f32, range_unit: f32) -> Vec<u8> {
        let mut buf = Vec::with_capacity(HEADER_SIZE);
        buf.extend_from_slice(&angular_range.to_le_bytes());
        buf.extend_from_slice(&angular_resolution_deg.to_le_bytes());
        buf.extend_from_slice(&range_unit.to_le_bytes());
        buf
    }

    fn encode_frame(timestamp_ms: i32, ranges: &[u16]) -> Vec<u8> {
        let mut buf = Vec::with_capacity(4 + 2 * ranges.len());
        buf.extend_from_slice(&timestamp_ms.to_le_bytes());
        for &r in ranges {
            buf.extend_from_slice(&r.to_le_bytes());
        }
        buf
    }

    #[test]
    fn test_geometry_derivation() {
        let buf = encode_header(180.0, 0.5, 100.0);
        let (geometry, frames) = decode_lms(&buf).unwrap();
        assert_eq!(geometry.point_count, 361);
        assert_relative_eq!(geometry.range_unit, 100.0);
        assert_relative_eq!(geometry.angle_increment, 0.5f32.to_radians());
        assert!(frames.is_empty());
    }

    #[test]
    fn test_decode_round_trip() {
        let mut buf = encode_header(2.0, 1.0, 50.0);
        // N = round(2/1) + 1 = 3
        buf.extend(encode_frame(100, &[10, 20, 30]));
        buf.extend(encode_frame(200, &[40, 50, 60]));
        buf.extend(encode_frame(-300, &[0, 65535, 7]));

        let (geometry, frames) = decode_lms(&buf).unwrap();
        assert_eq!(geometry.point_count, 3);
        assert_eq!(frames.len(), 3);
        assert_eq!(frames[0].timestamp_ms, 100);
        assert_eq!(frames[0].ranges, vec![10, 20, 30]);
        assert_eq!(frames[1].timestamp_ms, 200);
        assert_eq!(frames[1].ranges, vec![40, 50, 60]);
        assert_eq!(frames[2].timestamp_ms, -300);
        assert_eq!(frames[2].ranges, vec![0, 65535, 7]);
    }

    #[test]
    fn test_truncation_tolerance() {
        let mut buf = encode_header(2.0, 1.0, 50.0);
        buf.extend(encode_frame(100, &[1, 2, 3]));
        buf.extend(encode_frame(200, &[4, 5, 6]));
        let record_size = 4 + 2 * 3;

        let (_, reference) = decode_lms(&buf).unwrap();
        for extra in 1..record_size {
            let mut truncated = buf.clone();
            truncated.extend(std::iter::repeat(0xAB).take(extra));
            let (_, frames) = decode_lms(&truncated).unwrap();
            assert_eq!(frames, reference, "extra {extra} bytes changed the decode");
        }
    }

    #[test]
    fn test_header_too_short() {
        for len in 0..HEADER_SIZE {
            let buf = vec![0u8; len];
            assert!(matches!(
                decode_lms(&buf),
                Err(MapError::MalformedHeader { actual, .. }) if actual == len
            ));
        }
    }

    #[test]
    fn test_invalid_geometry() {
        // Negative step count
        let buf = encode_header(-180.0, 0.5, 100.0);
        assert!(matches!(
            decode_lms(&buf),
            Err(MapError::InvalidGeometry { .. })
        ));

        // Zero resolution divides to infinity
        let buf = encode_header(180.0, 0.0, 100.0);
        assert!(matches!(
            decode_lms(&buf),
            Err(MapError::InvalidGeometry { .. })
        ));
    }

    #[test]
    fn test_single_beam_stream() {
        // angular_range 0 over any resolution gives exactly one point
        let mut buf = encode_header(0.0, 1.0, 10.0);
        buf.extend(encode_frame(5, &[123]));
        let (geometry, frames) = decode_lms(&buf).unwrap();
        assert_eq!(geometry.point_count, 1);
        assert_eq!(frames.len(), 1);
        assert_eq!(frames[0].ranges, vec![123]);
    }
}
