//! Input series alignment.
//!
//! Length reconciliation is a caller-side convenience: the engine itself only
//! asserts the post-truncation invariant and fails on mismatched lengths.

use tracing::warn;

/// Truncate three series to their minimum common length, keeping the leading
/// prefix of each.
///
/// Emits a warning when any series was longer; a length mismatch is a
/// data-quality signal, not a failure.
pub fn align_series<'a>(
    high: &'a [f64],
    low: &'a [f64],
    volume: &'a [f64],
) -> (&'a [f64], &'a [f64], &'a [f64]) {
    let min_len = high.len().min(low.len()).min(volume.len());
    if high.len() != min_len || low.len() != min_len || volume.len() != min_len {
        warn!(
            high_len = high.len(),
            low_len = low.len(),
            volume_len = volume.len(),
            min_len,
            "input series have different lengths, truncating to the shortest"
        );
    }
    (&high[..min_len], &low[..min_len], &volume[..min_len])
}
