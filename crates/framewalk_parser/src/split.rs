//! Multi-counter pattern splitting
//!
//! After constant baking, a pattern with two or more varying columns is
//! ambiguous: several counters move at once (`_1_1_`, `_1_2_`, `_2_1_`,
//! `_2_2_` could be read along either axis). The splitter resolves this
//! greedily: pick the column with the fewest distinct values, bake each
//! of its values into a child key, and redistribute the remaining
//! columns' tuples to the matching child. Each split removes exactly one
//! column, so repeated splitting always terminates. The greedy choice
//! keeps the final sequence count small without a combinatorial search;
//! it is not guaranteed to be globally minimal.

use crate::pattern::{overwrite_run, PatternAccumulator};
use framewalk_sequence::FrameNumber;
use std::collections::HashMap;

/// Index of the pivot column: fewest distinct values, ties resolved to
/// the leftmost position so splitting is deterministic.
fn pivot_column(parent: &PatternAccumulator) -> usize {
    parent
        .columns
        .iter()
        .enumerate()
        .min_by_key(|(_, column)| column.distinct.len())
        .map(|(index, _)| index)
        .unwrap_or(0)
}

/// Partition `parent` into one child accumulator per distinct pivot
/// value. Children keep the parent's non-pivot columns and receive
/// their tuples by tuple index; they come back unresolved, ready for
/// another build/bake pass.
///
/// Requires built columns and at least two varying columns.
pub(crate) fn split_pattern(
    parent: &PatternAccumulator,
    capacity: usize,
) -> Vec<PatternAccumulator> {
    debug_assert!(parent.varying() >= 2);

    let pivot = pivot_column(parent);
    let pivot_run = parent.columns[pivot].run;
    let child_runs: Vec<_> = parent
        .columns
        .iter()
        .enumerate()
        .filter(|(index, _)| *index != pivot)
        .map(|(_, column)| column.run)
        .collect();

    let mut children: Vec<PatternAccumulator> = Vec::new();
    let mut child_by_value: HashMap<FrameNumber, usize> =
        HashMap::with_capacity(parent.columns[pivot].distinct.len());
    let mut tuple: Vec<FrameNumber> = Vec::with_capacity(child_runs.len());

    for index in 0..parent.tuple_count() {
        let pivot_value = parent.columns[pivot].values[index];
        let child = *child_by_value.entry(pivot_value).or_insert_with(|| {
            let mut key = parent.key.clone();
            overwrite_run(&mut key, pivot_run, pivot_value);
            children.push(PatternAccumulator::new(key, &child_runs, capacity));
            children.len() - 1
        });

        tuple.clear();
        for (column_index, column) in parent.columns.iter().enumerate() {
            if column_index != pivot {
                tuple.push(column.values[index]);
            }
        }
        children[child].insert(&tuple);
    }

    children
}
