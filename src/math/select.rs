/// Returns the 1-indexed rank of the lower median for a set of `n` values.
///
/// This is `⌊(n + 1) / 2⌋`: the middle element for odd `n`, the smaller of the
/// two middle elements for even `n`.
#[must_use]
pub fn lower_median_rank(n: usize) -> usize {
    n.div_ceil(2)
}

/// Returns the value of the given 1-indexed ascending rank, reordering `values`
/// in place.
///
/// Uses introselect with a deterministic pivot, so identical input always
/// produces the same partition and result. Values are compared with
/// [`f64::total_cmp`]; ties at the requested rank resolve to the same value
/// either way.
///
/// Returns `None` if `rank` is zero or larger than `values.len()`.
#[must_use]
pub fn select_rank(values: &mut [f64], rank: usize) -> Option<f64> {
    if rank == 0 || rank > values.len() {
        return None;
    }
    let (_, value, _) = values.select_nth_unstable_by(rank - 1, f64::total_cmp);
    Some(*value)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn lower_median_rank_odd_and_even() {
        assert_eq!(lower_median_rank(1), 1);
        assert_eq!(lower_median_rank(2), 1);
        assert_eq!(lower_median_rank(3), 2);
        assert_eq!(lower_median_rank(4), 2);
        assert_eq!(lower_median_rank(7), 4);
    }

    #[test]
    fn select_every_rank_matches_sorted() {
        let original = [5.0, -1.0, 3.5, 0.0, 12.0, -7.25, 3.5];
        let mut sorted = original.to_vec();
        sorted.sort_by(f64::total_cmp);
        for rank in 1..=original.len() {
            let mut values = original.to_vec();
            assert_eq!(select_rank(&mut values, rank).unwrap(), sorted[rank - 1]);
        }
    }

    #[test]
    fn select_with_ties() {
        let mut values = vec![2.0, 2.0, 2.0, 1.0];
        assert_eq!(select_rank(&mut values, 2).unwrap(), 2.0);
    }

    #[test]
    fn select_out_of_range() {
        let mut values = vec![1.0, 2.0];
        assert!(select_rank(&mut values, 0).is_none());
        assert!(select_rank(&mut values, 3).is_none());
        assert!(select_rank(&mut [], 1).is_none());
    }
}
