//! Deterministic even sampling of capture sequences.
//!
//! Reviews and AI summaries work from a small representative subset of a
//! session's captures instead of every screenshot. The selection is driven
//! by record position, not elapsed time, so a session with skipped ticks
//! still samples evenly across what was actually captured.

/// Indices of an evenly spaced selection of `k` items from a sequence of
/// length `len`.
///
/// Sample slot `i` maps to source index `floor(i * (len-1) / (k-1))`, so
/// the first and last items are always selected. When `len <= k` every
/// index is returned unchanged; `k == 1` selects only the first item.
pub fn evenly_spaced_indices(len: usize, k: usize) -> Vec<usize> {
    if len == 0 || k == 0 {
        return vec![];
    }
    if len <= k {
        return (0..len).collect();
    }
    if k == 1 {
        return vec![0];
    }
    // Multiply before dividing. Computing (len-1)/(k-1) once and scaling
    // per slot rounds low enough to miss the final index for some sizes.
    let last = (len - 1) as f64;
    let span = (k - 1) as f64;
    (0..k)
        .map(|i| (i as f64 * last / span).floor() as usize)
        .collect()
}

/// An evenly spaced sample of up to `k` items, preserving order.
pub fn sample<T: Clone>(items: &[T], k: usize) -> Vec<T> {
    evenly_spaced_indices(items.len(), k)
        .into_iter()
        .map(|i| items[i].clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_twelve_records_sampled_to_five() {
        assert_eq!(evenly_spaced_indices(12, 5), vec![0, 2, 5, 8, 11]);
    }

    #[test]
    fn test_ten_records_include_both_endpoints() {
        let indices = evenly_spaced_indices(10, 5);
        assert_eq!(indices.first(), Some(&0));
        assert_eq!(indices.last(), Some(&9));
    }

    #[test]
    fn test_short_sequences_pass_through_unchanged() {
        assert_eq!(evenly_spaced_indices(3, 5), vec![0, 1, 2]);
        assert_eq!(sample(&["a", "b", "c"], 5), vec!["a", "b", "c"]);
        assert_eq!(sample(&["a", "b", "c"], 3), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_single_slot_selects_first() {
        assert_eq!(evenly_spaced_indices(10, 1), vec![0]);
    }

    #[test]
    fn test_empty_inputs() {
        assert!(evenly_spaced_indices(0, 5).is_empty());
        assert!(evenly_spaced_indices(10, 0).is_empty());
        assert!(sample::<u32>(&[], 5).is_empty());
    }

    #[test]
    fn test_last_index_included_for_awkward_ratios() {
        // 15/11 scaled per slot loses the last index if the division
        // happens before the multiplication.
        let indices = evenly_spaced_indices(16, 12);
        assert_eq!(indices.last(), Some(&15));
    }

    proptest! {
        #[test]
        fn prop_indices_bounded_ordered_and_endpoint_inclusive(
            len in 1usize..4096,
            k in 1usize..64,
        ) {
            let indices = evenly_spaced_indices(len, k);
            prop_assert_eq!(indices.len(), len.min(k));
            prop_assert!(indices.iter().all(|&i| i < len));
            prop_assert!(indices.windows(2).all(|w| w[0] <= w[1]));
            prop_assert_eq!(indices[0], 0);
            if k >= 2 {
                prop_assert_eq!(indices[indices.len() - 1], len - 1);
            }
        }
    }
}
