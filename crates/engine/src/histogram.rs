//! Price-domain computation and bin population.
//!
//! Builds fixed-width price bins over the input window and accumulates bar
//! volume into them under an inclusive range-overlap test. All arithmetic here
//! runs in `Decimal`; rounding and `f64` conversion happen at the output
//! boundary only.

use profile_core::{Error, Result};
use rust_decimal::prelude::*;
use rust_decimal::{Decimal, RoundingStrategy};

/// Price domain of one input window.
#[derive(Debug, Clone)]
pub(crate) struct PriceDomain {
    /// Lowest low across the window.
    pub price_min: Decimal,
    /// Highest high across the window.
    pub price_max: Decimal,
    /// Fixed bin width, `(price_max - price_min) / num_bins`.
    pub bin_width: Decimal,
}

/// A bin carrying its full-precision accumulators.
#[derive(Debug, Clone)]
pub(crate) struct RawBin {
    pub price_low: Decimal,
    pub price_high: Decimal,
    pub price_mid: Decimal,
    /// Accumulated volume at full precision.
    pub volume: Decimal,
    /// Share of total volume in percent, from the full-precision accumulator.
    pub volume_percent: Decimal,
}

impl RawBin {
    /// Volume rounded to the nearest integer, as reported to callers.
    ///
    /// Half-way values round away from zero, matching conventional rounding
    /// rather than banker's rounding.
    #[inline]
    pub fn rounded_volume(&self) -> Decimal {
        self.volume
            .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
    }
}

/// Convert an input series to decimals, rejecting non-finite values.
pub(crate) fn to_decimals(values: &[f64], name: &str) -> Result<Vec<Decimal>> {
    values
        .iter()
        .enumerate()
        .map(|(i, &v)| {
            Decimal::from_f64(v)
                .ok_or_else(|| Error::data(format!("{name}[{i}] is not representable: {v}")))
        })
        .collect()
}

/// Compute the global price domain and bin width.
///
/// A flat window (`price_max == price_min`) yields a zero bin width; every bin
/// collapses to a point and the profile degenerates, which is legitimate. The
/// division guard for `volume_percent` lives in [`populate_bins`], not here.
pub(crate) fn price_domain(high: &[Decimal], low: &[Decimal], num_bins: usize) -> PriceDomain {
    let price_min = low.iter().copied().min().unwrap_or_default();
    let price_max = high.iter().copied().max().unwrap_or_default();
    let bin_width = (price_max - price_min) / Decimal::from(num_bins as u64);

    PriceDomain {
        price_min,
        price_max,
        bin_width,
    }
}

/// Construct `num_bins` bins and accumulate bar volume into them.
///
/// A bar contributes its entire volume to every bin whose range it overlaps
/// under the inclusive test `low <= bin_high && high >= bin_low`. A bar
/// straddling a bin boundary is therefore counted in each bin it touches, so
/// bin volumes can over-count the total; callers must not assume bins
/// partition total volume.
pub(crate) fn populate_bins(
    domain: &PriceDomain,
    high: &[Decimal],
    low: &[Decimal],
    volume: &[Decimal],
    num_bins: usize,
) -> Vec<RawBin> {
    // Total volume at full precision, before any rounding.
    let total_volume: Decimal = volume.iter().copied().sum();

    (0..num_bins)
        .map(|i| {
            let bin_low = domain.price_min + domain.bin_width * Decimal::from(i as u64);
            let bin_high = bin_low + domain.bin_width;
            let price_mid = (bin_low + bin_high) / Decimal::TWO;

            let mut acc = Decimal::ZERO;
            for ((l, h), v) in low.iter().zip(high).zip(volume) {
                if *l <= bin_high && *h >= bin_low {
                    acc += *v;
                }
            }

            let volume_percent = if total_volume > Decimal::ZERO {
                acc / total_volume * Decimal::ONE_HUNDRED
            } else {
                Decimal::ZERO
            };

            RawBin {
                price_low: bin_low,
                price_high: bin_high,
                price_mid,
                volume: acc,
                volume_percent,
            }
        })
        .collect()
}
