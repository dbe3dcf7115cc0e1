use super::config::Bin;

/// Map a numeric value to a point value via threshold bins.
///
/// Bins are scanned in the given order (expected sorted by descending
/// threshold); the first bin whose threshold is `<= x` wins. A missing
/// or NaN value is treated as 0. When no bin matches, the LAST bin's
/// points are returned rather than 0 — scores fall through to the
/// bottom bin even for values below every threshold. Empty bins yield 0.
pub fn bin_points(x: Option<f64>, bins: &[Bin]) -> i64 {
    let x = match x {
        Some(v) if !v.is_nan() => v,
        _ => 0.0,
    };

    for bin in bins {
        if x >= bin.threshold() {
            return bin.points();
        }
    }

    bins.last().map(Bin::points).unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_bins() -> Vec<Bin> {
        vec![Bin(100.0, 5), Bin(50.0, 3), Bin(0.0, 1)]
    }

    #[test]
    fn test_first_matching_bin_wins() {
        assert_eq!(bin_points(Some(150.0), &sample_bins()), 5);
        assert_eq!(bin_points(Some(100.0), &sample_bins()), 5);
        assert_eq!(bin_points(Some(75.0), &sample_bins()), 3);
        assert_eq!(bin_points(Some(0.0), &sample_bins()), 1);
    }

    #[test]
    fn test_negative_value_falls_through_to_last_bin() {
        // -10 is below every threshold; the last bin's points apply.
        assert_eq!(bin_points(Some(-10.0), &sample_bins()), 1);
    }

    #[test]
    fn test_last_bin_fallback_keeps_last_points() {
        // Non-exhaustive bins: the fallback is the last entry, not 0.
        let bins = vec![Bin(100.0, 5), Bin(50.0, 3)];
        assert_eq!(bin_points(Some(10.0), &bins), 3);
    }

    #[test]
    fn test_empty_bins_yield_zero() {
        assert_eq!(bin_points(Some(42.0), &[]), 0);
        assert_eq!(bin_points(None, &[]), 0);
    }

    #[test]
    fn test_missing_value_scores_like_zero() {
        let bins = sample_bins();
        assert_eq!(bin_points(None, &bins), bin_points(Some(0.0), &bins));
    }

    #[test]
    fn test_nan_value_scores_like_zero() {
        let bins = sample_bins();
        assert_eq!(bin_points(Some(f64::NAN), &bins), bin_points(Some(0.0), &bins));
    }

    #[test]
    fn test_negative_points_pass_through() {
        let bins = vec![Bin(10.0, 2), Bin(0.0, -1)];
        assert_eq!(bin_points(Some(3.0), &bins), -1);
    }
}
