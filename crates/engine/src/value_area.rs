//! Point of Control and Value Area derivation.
//!
//! Both operate on the full-precision bins produced by the histogram step and
//! use the rounded integer volume as the ranking key, matching what callers
//! see in the output.

use crate::histogram::RawBin;
use rust_decimal::Decimal;

/// Midpoint of the highest-volume bin, or `None` when there are no bins.
///
/// A challenger wins only with strictly greater rounded volume, so on a tie
/// the earlier (lower-priced) bin is kept.
pub(crate) fn point_of_control(bins: &[RawBin]) -> Option<Decimal> {
    bins.iter()
        .fold(None::<&RawBin>, |best, bin| match best {
            Some(b) if bin.rounded_volume() > b.rounded_volume() => Some(bin),
            Some(b) => Some(b),
            None => Some(bin),
        })
        .map(|b| b.price_mid)
}

/// Value area boundaries `(low, high)`, or `None` when there are no bins.
///
/// Bins are visited in descending rounded-volume order and collected until the
/// cumulative full-precision percent reaches `target_percent`. The sort is
/// stable, so equal volumes retain ascending-price order and the traversal is
/// deterministic. When total volume is zero the cumulative sum never reaches
/// the target and the area spans every bin.
pub(crate) fn value_area(bins: &[RawBin], target_percent: Decimal) -> Option<(Decimal, Decimal)> {
    if bins.is_empty() {
        return None;
    }

    let mut ranked: Vec<&RawBin> = bins.iter().collect();
    ranked.sort_by(|a, b| b.rounded_volume().cmp(&a.rounded_volume()));

    let mut cumulative = Decimal::ZERO;
    let mut area: Vec<&RawBin> = Vec::new();
    for bin in ranked {
        area.push(bin);
        cumulative += bin.volume_percent;
        if cumulative >= target_percent {
            break;
        }
    }

    let low = area.iter().map(|b| b.price_low).min()?;
    let high = area.iter().map(|b| b.price_high).max()?;
    Some((low, high))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn make_bin(price_low: Decimal, width: Decimal, volume: Decimal, percent: Decimal) -> RawBin {
        RawBin {
            price_low,
            price_high: price_low + width,
            price_mid: price_low + width / Decimal::TWO,
            volume,
            volume_percent: percent,
        }
    }

    #[test]
    fn test_poc_empty() {
        assert_eq!(point_of_control(&[]), None);
    }

    #[test]
    fn test_poc_strictly_greater_wins() {
        let bins = vec![
            make_bin(dec!(8), dec!(1), dec!(100), dec!(25)),
            make_bin(dec!(9), dec!(1), dec!(300), dec!(75)),
        ];
        assert_eq!(point_of_control(&bins), Some(dec!(9.5)));
    }

    #[test]
    fn test_poc_tie_keeps_lower_priced_bin() {
        let bins = vec![
            make_bin(dec!(8), dec!(1), dec!(200), dec!(50)),
            make_bin(dec!(9), dec!(1), dec!(200), dec!(50)),
        ];
        assert_eq!(point_of_control(&bins), Some(dec!(8.5)));
    }

    #[test]
    fn test_value_area_single_dominant_bin() {
        // First bin alone covers >= 70%; the area is exactly its span.
        let bins = vec![
            make_bin(dec!(8), dec!(1), dec!(800), dec!(80)),
            make_bin(dec!(9), dec!(1), dec!(200), dec!(20)),
        ];
        assert_eq!(value_area(&bins, dec!(70)), Some((dec!(8), dec!(9))));
    }

    #[test]
    fn test_value_area_minimality() {
        // Ranked percents: 40, 20, 15, 15, 10. Cumulative hits 75 at the
        // third bin; dropping it would leave 60 < 70.
        let bins = vec![
            make_bin(dec!(1), dec!(1), dec!(150), dec!(15)),
            make_bin(dec!(2), dec!(1), dec!(400), dec!(40)),
            make_bin(dec!(3), dec!(1), dec!(200), dec!(20)),
            make_bin(dec!(4), dec!(1), dec!(150), dec!(15)),
            make_bin(dec!(5), dec!(1), dec!(100), dec!(10)),
        ];

        // Visit order: 40 (bin@2), 20 (bin@3), then the first 15 (bin@1).
        let (low, high) = value_area(&bins, dec!(70)).unwrap();
        assert_eq!(low, dec!(1));
        assert_eq!(high, dec!(4));
    }

    #[test]
    fn test_value_area_tie_rank_is_stable() {
        // Two equal-volume bins; the lower-priced one is visited first.
        let bins = vec![
            make_bin(dec!(1), dec!(1), dec!(500), dec!(50)),
            make_bin(dec!(2), dec!(1), dec!(500), dec!(50)),
        ];
        let (low, high) = value_area(&bins, dec!(70)).unwrap();
        assert_eq!(low, dec!(1));
        assert_eq!(high, dec!(3));
    }

    #[test]
    fn test_value_area_zero_volume_spans_all_bins() {
        let bins = vec![
            make_bin(dec!(1), dec!(1), dec!(0), dec!(0)),
            make_bin(dec!(2), dec!(1), dec!(0), dec!(0)),
            make_bin(dec!(3), dec!(1), dec!(0), dec!(0)),
        ];
        let (low, high) = value_area(&bins, dec!(70)).unwrap();
        assert_eq!(low, dec!(1));
        assert_eq!(high, dec!(4));
    }

    #[test]
    fn test_value_area_empty() {
        assert_eq!(value_area(&[], dec!(70)), None);
    }
}
