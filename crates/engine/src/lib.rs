//! Volume profile computation.
//!
//! This crate turns aligned high/low/volume series into a volume profile:
//! - Price-domain computation and fixed-width bin construction
//! - Volume accumulation under an inclusive range-overlap test
//! - Point of Control and Value Area derivation
//!
//! All interior arithmetic runs in `Decimal` so bin-boundary comparisons and
//! percentage sums are reproducible across platforms; only the final integer
//! rounding of bin volume and the outward-facing conversion use `f64`.

pub mod align;
mod histogram;
mod value_area;

pub use align::align_series;

use histogram::{populate_bins, price_domain, to_decimals};
use profile_core::{Error, ProfileBin, ProfileConfig, Result, VolumeProfileResult, MIN_BARS};
use rust_decimal::prelude::*;
use rust_decimal::Decimal;
use value_area::{point_of_control, value_area};

/// Volume profile computer.
///
/// Stateless; each call operates solely on its own inputs and local
/// accumulators, so a single instance is safe to share across callers.
pub struct VolumeProfiler {
    config: ProfileConfig,
}

impl VolumeProfiler {
    /// Create a new profiler from configuration.
    pub fn new(config: ProfileConfig) -> Self {
        Self { config }
    }

    /// Compute the volume profile for one aligned window.
    ///
    /// The three series must share one length (callers with ragged inputs go
    /// through [`align_series`] first) of at least 20 bars. Fails before any
    /// computation on a precondition violation; never returns a partial
    /// result.
    pub fn compute(
        &self,
        high: &[f64],
        low: &[f64],
        volume: &[f64],
    ) -> Result<VolumeProfileResult> {
        if high.len() != low.len() || high.len() != volume.len() {
            return Err(Error::data(format!(
                "series lengths differ after alignment: high={}, low={}, volume={}",
                high.len(),
                low.len(),
                volume.len()
            )));
        }
        if high.len() < MIN_BARS {
            return Err(Error::insufficient_data(format!(
                "volume profile needs at least {MIN_BARS} aligned bars, got {}",
                high.len()
            )));
        }
        if self.config.num_bins == 0 {
            return Err(Error::invalid_config("numBins must be at least 1, got 0"));
        }
        let target_percent =
            Decimal::from_f64(self.config.value_area_percent).ok_or_else(|| {
                Error::invalid_config(format!(
                    "value area percent is not representable: {}",
                    self.config.value_area_percent
                ))
            })?;

        let high_d = to_decimals(high, "high")?;
        let low_d = to_decimals(low, "low")?;
        let volume_d = to_decimals(volume, "volume")?;

        let domain = price_domain(&high_d, &low_d, self.config.num_bins);
        let raw = populate_bins(&domain, &high_d, &low_d, &volume_d, self.config.num_bins);

        let poc = point_of_control(&raw).map(dec_to_f64);
        let va = value_area(&raw, target_percent);

        let bins = raw
            .iter()
            .map(|b| ProfileBin {
                price_low: dec_to_f64(b.price_low),
                price_high: dec_to_f64(b.price_high),
                price_mid: dec_to_f64(b.price_mid),
                volume: dec_to_f64(b.rounded_volume()),
                volume_percent: dec_to_f64(b.volume_percent),
            })
            .collect();

        Ok(VolumeProfileResult {
            price_min: dec_to_f64(domain.price_min),
            price_max: dec_to_f64(domain.price_max),
            bin_width: dec_to_f64(domain.bin_width),
            bins,
            point_of_control: poc,
            value_area_low: va.map(|(low, _)| dec_to_f64(low)),
            value_area_high: va.map(|(_, high)| dec_to_f64(high)),
        })
    }
}

/// Compute a volume profile with the default value area target (70%) and an
/// explicit bin count.
pub fn compute_volume_profile(
    high: &[f64],
    low: &[f64],
    volume: &[f64],
    num_bins: usize,
) -> Result<VolumeProfileResult> {
    VolumeProfiler::new(ProfileConfig::with_num_bins(num_bins)).compute(high, low, volume)
}

/// Outward conversion at the `f64` boundary.
#[inline]
fn dec_to_f64(value: Decimal) -> f64 {
    value.to_f64().unwrap_or(0.0)
}
