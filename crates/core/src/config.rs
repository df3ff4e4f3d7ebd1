//! Configuration structures for the volume profile engine.

use serde::{Deserialize, Serialize};

/// Default number of price bins when the caller does not specify one.
pub const DEFAULT_NUM_BINS: usize = 10;

/// Default value area coverage target in percent.
pub const DEFAULT_VALUE_AREA_PERCENT: f64 = 70.0;

/// Minimum number of aligned bars required for a profile.
pub const MIN_BARS: usize = 20;

/// Volume profile computation configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileConfig {
    /// Number of fixed-width price bins.
    pub num_bins: usize,
    /// Target value area coverage (e.g. 70.0 for 70%).
    pub value_area_percent: f64,
}

impl Default for ProfileConfig {
    fn default() -> Self {
        Self {
            num_bins: DEFAULT_NUM_BINS,
            value_area_percent: DEFAULT_VALUE_AREA_PERCENT,
        }
    }
}

impl ProfileConfig {
    /// Configuration with the default coverage target and an explicit bin count.
    pub fn with_num_bins(num_bins: usize) -> Self {
        Self {
            num_bins,
            ..Self::default()
        }
    }
}
