//! Cumulative distribution helpers shared by single picks and pick vectors.

/// Build the running prefix sums of `pdf`.
///
/// `cdf[0] = pdf[0]`, `cdf[i] = cdf[i - 1] + pdf[i]`. An empty input yields an
/// empty output. Sums are accumulated in `u64`, wide enough for any slice of
/// fewer than 2^32 entries.
#[must_use]
pub fn derive_cdf(pdf: &[u32]) -> Vec<u64> {
    pdf.iter()
        .scan(0u64, |acc, &weight| {
            *acc += u64::from(weight);
            Some(*acc)
        })
        .collect()
}

/// Inverse-CDF lookup: the smallest index whose cumulative value exceeds `draw`.
///
/// Zero-weight entries never match because their cumulative value equals the
/// one before them.
///
/// # Panics
///
/// Panics if `draw` is not strictly below the last cumulative value. Callers
/// must draw from `[0, cdf[last])` over the same slice the CDF was built from.
#[must_use]
pub fn lookup_index(cdf: &[u64], draw: u64) -> usize {
    let total = cdf.last().copied().unwrap_or(0);
    assert!(
        draw < total,
        "draw {draw} outside cumulative range [0, {total})"
    );

    let mut index = 0;
    while draw >= cdf[index] {
        index += 1;
    }
    index
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derive_cdf_prefix_sums() {
        assert_eq!(derive_cdf(&[30, 0, 20, 50]), vec![30, 30, 50, 100]);
    }

    #[test]
    fn test_derive_cdf_large_weights_stay_monotonic() {
        let cdf = derive_cdf(&[u32::MAX, 1, u32::MAX]);
        assert_eq!(
            cdf,
            vec![
                u64::from(u32::MAX),
                u64::from(u32::MAX) + 1,
                2 * u64::from(u32::MAX) + 1
            ]
        );
        assert_eq!(lookup_index(&cdf, u64::from(u32::MAX)), 1);
        assert_eq!(lookup_index(&cdf, u64::from(u32::MAX) + 1), 2);
    }

    #[test]
    fn test_derive_cdf_empty() {
        assert!(derive_cdf(&[]).is_empty());
    }

    #[test]
    fn test_lookup_index_boundaries() {
        let cdf = derive_cdf(&[30, 70]);
        assert_eq!(lookup_index(&cdf, 0), 0);
        assert_eq!(lookup_index(&cdf, 29), 0);
        assert_eq!(lookup_index(&cdf, 30), 1);
        assert_eq!(lookup_index(&cdf, 99), 1);
    }

    #[test]
    fn test_lookup_index_skips_zero_weights() {
        let cdf = derive_cdf(&[0, 0, 40, 0, 60]);
        assert_eq!(lookup_index(&cdf, 0), 2);
        assert_eq!(lookup_index(&cdf, 40), 4);
    }

    #[test]
    #[should_panic(expected = "outside cumulative range")]
    fn test_lookup_index_rejects_draw_at_total() {
        let cdf = derive_cdf(&[50, 50]);
        let _ = lookup_index(&cdf, 100);
    }

    #[test]
    #[should_panic(expected = "outside cumulative range")]
    fn test_lookup_index_rejects_empty_cdf() {
        let _ = lookup_index(&[], 0);
    }
}
