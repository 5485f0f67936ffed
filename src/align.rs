//! Timestamp alignment of the laser and pose streams.
//!
//! Both logs are recorded against the same clock, so after dropping
//! everything before the start cutoff the two sequences must correspond
//! one-to-one by position with identical timestamps. Any disagreement means
//! the logs do not belong together and the run aborts.

use log::{debug, info};

use crate::core::types::{AlignedScan, NavSample, ScanFrame};
use crate::error::{MapError, Result};

/// Filter both streams by the start cutoff and pair them positionally.
///
/// Frames are retained for `start_timestamp_ms <= t <= last nav timestamp`;
/// NAV samples for `t >= start_timestamp_ms`. Both inputs must already be in
/// chronological order. Fails with [`MapError::AlignmentMismatch`] if the
/// filtered lengths differ or any positional pair disagrees on timestamp.
pub fn align_streams(
    frames: Vec<ScanFrame>,
    nav: Vec<NavSample>,
    start_timestamp_ms: i32,
) -> Result<Vec<AlignedScan>> {
    let end_timestamp_ms = nav
        .last()
        .map(|sample| sample.timestamp_ms)
        .ok_or_else(|| {
            MapError::AlignmentMismatch(
                "NAV series is empty, no end-of-log timestamp to bound scans".to_string(),
            )
        })?;

    let total_frames = frames.len();
    let total_nav = nav.len();

    let frames: Vec<ScanFrame> = frames
        .into_iter()
        .filter(|f| start_timestamp_ms <= f.timestamp_ms && f.timestamp_ms <= end_timestamp_ms)
        .collect();
    let nav: Vec<NavSample> = nav
        .into_iter()
        .filter(|n| n.timestamp_ms >= start_timestamp_ms)
        .collect();

    debug!(
        "alignment window [{start_timestamp_ms}, {end_timestamp_ms}] ms: \
         {}/{total_frames} scans, {}/{total_nav} poses retained",
        frames.len(),
        nav.len()
    );

    if frames.len() != nav.len() {
        return Err(MapError::AlignmentMismatch(format!(
            "{} scans vs {} poses after filtering",
            frames.len(),
            nav.len()
        )));
    }

    let pairs: Vec<AlignedScan> = frames
        .into_iter()
        .zip(nav)
        .map(|(frame, nav)| AlignedScan { frame, nav })
        .collect();

    for (index, pair) in pairs.iter().enumerate() {
        if pair.frame.timestamp_ms != pair.nav.timestamp_ms {
            return Err(MapError::AlignmentMismatch(format!(
                "timestamp mismatch at pair {index}: scan {} ms vs pose {} ms",
                pair.frame.timestamp_ms, pair.nav.timestamp_ms
            )));
        }
    }

    info!("aligned {} scan/pose pairs", pairs.len());
    Ok(pairs)
}
