//! Core data types for the volume profile engine.

use serde::{Deserialize, Serialize};

/// One fixed-width price bucket of the profile histogram.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileBin {
    /// Lower price boundary of the bin.
    pub price_low: f64,
    /// Upper price boundary of the bin (equals the next bin's `price_low`).
    pub price_high: f64,
    /// Midpoint, `(price_low + price_high) / 2`.
    pub price_mid: f64,
    /// Volume attributed to this bin, rounded to the nearest integer.
    pub volume: f64,
    /// Share of total volume in percent, from the full-precision accumulator.
    pub volume_percent: f64,
}

impl ProfileBin {
    /// Width of the bin's price range.
    #[inline]
    pub fn width(&self) -> f64 {
        self.price_high - self.price_low
    }
}

/// Complete volume profile for one input window.
///
/// Constructed once per call, never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VolumeProfileResult {
    /// Lowest low across the whole input window.
    pub price_min: f64,
    /// Highest high across the whole input window.
    pub price_max: f64,
    /// Bin width, `(price_max - price_min) / num_bins`.
    pub bin_width: f64,
    /// Bins ordered by ascending `price_low`.
    pub bins: Vec<ProfileBin>,
    /// Midpoint of the highest-volume bin; `null` only when `bins` is empty.
    pub point_of_control: Option<f64>,
    /// Lower boundary of the value area; absent when `bins` is empty.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value_area_low: Option<f64>,
    /// Upper boundary of the value area; absent when `bins` is empty.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value_area_high: Option<f64>,
}

impl VolumeProfileResult {
    /// Value area as a `(low, high)` pair, when present.
    #[inline]
    pub fn value_area(&self) -> Option<(f64, f64)> {
        match (self.value_area_low, self.value_area_high) {
            (Some(low), Some(high)) => Some((low, high)),
            _ => None,
        }
    }
}
