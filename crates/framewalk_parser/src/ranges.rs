//! Range compression over sorted distinct frame sets

use framewalk_sequence::{FrameNumber, Range};

/// Compress a sorted, duplicate-free slice into ranges plus one uniform
/// step: the minimum positive first-order difference.
///
/// Every input value lands in exactly one returned range; ranges are
/// disjoint and ordered by `first`. The step applies to the whole
/// result, so irregular spacing degrades into more, smaller ranges
/// rather than per-range steps. `{20,22,24,26,28,30,34,36}` compresses
/// to step 2 with ranges `[20:30]` and `[34:36]`.
pub fn compress_ranges(sorted_distinct: &[FrameNumber]) -> (Vec<Range>, FrameNumber) {
    debug_assert!(sorted_distinct.windows(2).all(|pair| pair[0] < pair[1]));

    match sorted_distinct {
        [] => (Vec::new(), 1),
        [value] => (vec![Range::single(*value)], 1),
        values => {
            let step = values
                .windows(2)
                .map(|pair| pair[1] - pair[0])
                .min()
                .unwrap_or(1);
            let mut ranges: Vec<Range> = Vec::new();
            for &value in values {
                match ranges.last_mut() {
                    Some(range) if value - range.last == step => range.last = value,
                    _ => ranges.push(Range::single(value)),
                }
            }
            (ranges, step)
        }
    }
}

/// Fold a sorted, duplicate-free slice into strictly contiguous
/// (step 1) ranges, regardless of the dominant spacing.
pub fn consecutive_ranges(sorted_distinct: &[FrameNumber]) -> Vec<Range> {
    debug_assert!(sorted_distinct.windows(2).all(|pair| pair[0] < pair[1]));

    let mut ranges: Vec<Range> = Vec::new();
    for &value in sorted_distinct {
        match ranges.last_mut() {
            Some(range) if value - range.last == 1 => range.last = value,
            _ => ranges.push(Range::single(value)),
        }
    }
    ranges
}
