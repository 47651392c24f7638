//! Batch partitioning

use std::ops::Range;

/// Partition `[0, total)` into contiguous batches of `batch_size`
///
/// The final batch may be shorter. A total of zero yields no batches; a
/// batch size covering the whole run yields exactly one.
pub fn batch_ranges(total: usize, batch_size: usize) -> impl Iterator<Item = Range<usize>> {
    // step_by panics on zero; validation rejects it upstream
    let size = batch_size.max(1);
    (0..total)
        .step_by(size)
        .map(move |start| start..usize::min(start + size, total))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_total_yields_no_batches() {
        assert_eq!(batch_ranges(0, 10).count(), 0);
    }

    #[test]
    fn test_single_batch_when_size_covers_total() {
        let batches: Vec<_> = batch_ranges(7, 10).collect();
        assert_eq!(batches, vec![0..7]);
    }

    #[test]
    fn test_exact_division() {
        let batches: Vec<_> = batch_ranges(20, 10).collect();
        assert_eq!(batches, vec![0..10, 10..20]);
    }

    #[test]
    fn test_final_batch_shorter() {
        let batches: Vec<_> = batch_ranges(23, 10).collect();
        assert_eq!(batches, vec![0..10, 10..20, 20..23]);
    }

    #[test]
    fn test_batches_cover_every_index_once() {
        let covered: Vec<usize> = batch_ranges(23, 4).flatten().collect();
        assert_eq!(covered, (0..23).collect::<Vec<_>>());
    }
}
