//! Pattern accumulation and column resolution
//!
//! A `PatternAccumulator` collects the value tuples of every filename
//! that shares one pattern key, then decides column by column whether
//! the numbers are a constant (baked back into the key literal) or a
//! genuine counter. Tuples are stored as one flat stream during
//! ingestion and redistributed round-robin when columns are built, so
//! insertion stays a plain memcpy on the hot path.

use crate::extract::DigitRun;
use framewalk_sequence::FrameNumber;

/// Observed values for one digit-run column of a pattern.
#[derive(Debug, Clone)]
pub(crate) struct Column {
    pub run: DigitRun,
    /// Values in tuple-insertion order; rebuilt by `build_columns`.
    pub values: Vec<FrameNumber>,
    /// Sorted distinct values; rebuilt alongside `values`.
    pub distinct: Vec<FrameNumber>,
}

impl Column {
    fn new(run: DigitRun) -> Self {
        Self {
            run,
            values: Vec::new(),
            distinct: Vec::new(),
        }
    }

    fn rebuild_distinct(&mut self) {
        self.distinct.clear();
        self.distinct.extend_from_slice(&self.values);
        self.distinct.sort_unstable();
        self.distinct.dedup();
    }

    fn is_constant(&self) -> bool {
        self.distinct.len() == 1
    }
}

/// Accumulated state for one pattern key within one directory.
#[derive(Debug, Clone)]
pub(crate) struct PatternAccumulator {
    /// The pattern key; baking overwrites constant runs in place.
    pub key: String,
    /// Flat value stream, `columns.len()` values per inserted tuple.
    flat: Vec<FrameNumber>,
    pub columns: Vec<Column>,
}

impl PatternAccumulator {
    /// `capacity` is the expected tuple count, a pre-sizing hint only.
    pub fn new(key: String, runs: &[DigitRun], capacity: usize) -> Self {
        Self {
            key,
            flat: Vec::with_capacity(runs.len() * capacity),
            columns: runs.iter().copied().map(Column::new).collect(),
        }
    }

    /// Append one filename's value tuple.
    ///
    /// The key encodes the run count, so a length mismatch can only be
    /// a logic error upstream, never bad input; it aborts.
    pub fn insert(&mut self, values: &[FrameNumber]) {
        assert_eq!(
            values.len(),
            self.columns.len(),
            "value tuple length does not match column count for key '{}'",
            self.key
        );
        self.flat.extend_from_slice(values);
    }

    /// Rebuild the per-column value lists from the flat stream and
    /// recompute each column's distinct set.
    ///
    /// Flat index `i` belongs to column `i % columns.len()`; this pairs
    /// with tuples being inserted in left-to-right run order. Columns
    /// are cleared first, so calling again after further inserts is
    /// safe, and calling with no new inserts changes nothing.
    pub fn build_columns(&mut self) {
        if self.columns.is_empty() {
            return;
        }
        let width = self.columns.len();
        let per_column = self.flat.len() / width;
        for column in &mut self.columns {
            column.values.clear();
            column.values.reserve(per_column);
        }
        for (index, &value) in self.flat.iter().enumerate() {
            self.columns[index % width].values.push(value);
        }
        for column in &mut self.columns {
            column.rebuild_distinct();
        }
    }

    /// Fold every single-valued column back into the key literal and
    /// drop it from the active set; genuinely varying columns remain.
    pub fn bake_constants(&mut self) {
        let columns = std::mem::take(&mut self.columns);
        let mut remaining = Vec::with_capacity(columns.len());
        for column in columns {
            if column.is_constant() {
                overwrite_run(&mut self.key, column.run, column.distinct[0]);
            } else {
                remaining.push(column);
            }
        }
        self.columns = remaining;
    }

    /// Number of columns still varying after the last bake.
    pub fn varying(&self) -> usize {
        self.columns.len()
    }

    /// Number of tuples redistributed into the columns.
    pub fn tuple_count(&self) -> usize {
        self.columns.first().map_or(0, |column| column.values.len())
    }
}

/// Overwrite the key bytes at `run` with `value`, left-zero-padded to
/// the run width. The formatted value always fits: it was parsed from
/// exactly `run.width` digits.
pub(crate) fn overwrite_run(key: &mut String, run: DigitRun, value: FrameNumber) {
    let digits = format!("{:0width$}", value, width = run.width);
    debug_assert_eq!(digits.len(), run.width);
    key.replace_range(run.offset..run.offset + run.width, &digits);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::extract_runs;

    fn accumulator_for(filenames: &[&str]) -> PatternAccumulator {
        let (key, runs, values) = extract_runs(filenames[0]);
        let mut accumulator = PatternAccumulator::new(key.clone(), &runs, 16);
        accumulator.insert(&values);
        for filename in &filenames[1..] {
            let (other_key, _, values) = extract_runs(filename);
            assert_eq!(other_key, key, "fixture filenames must share a key");
            accumulator.insert(&values);
        }
        accumulator
    }

    #[test]
    fn builds_columns_round_robin() {
        let mut accumulator = accumulator_for(&["p2.sgi", "p3.sgi"]);
        assert_eq!(accumulator.key, "p#.sgi");
        assert!(accumulator.columns[0].values.is_empty());
        accumulator.build_columns();
        assert_eq!(accumulator.columns.len(), 1);
        assert_eq!(accumulator.columns[0].values, vec![2, 3]);
        assert_eq!(accumulator.columns[0].distinct, vec![2, 3]);
        assert_eq!(accumulator.tuple_count(), 2);
    }

    #[test]
    fn rebuild_after_more_inserts_sees_everything() {
        let mut accumulator = accumulator_for(&["p2.cr2"]);
        accumulator.build_columns();
        assert_eq!(accumulator.columns[0].distinct.len(), 1);
        assert_eq!(accumulator.columns[1].distinct.len(), 1);

        let (_, _, values) = extract_runs("p3.cr2");
        accumulator.insert(&values);
        accumulator.build_columns();
        assert_eq!(accumulator.columns[0].distinct.len(), 2);
        assert_eq!(accumulator.columns[1].distinct.len(), 1);

        let (_, _, values) = extract_runs("p3.cr1");
        accumulator.insert(&values);
        accumulator.build_columns();
        assert_eq!(accumulator.columns[0].distinct.len(), 2);
        assert_eq!(accumulator.columns[1].distinct.len(), 2);
    }

    #[test]
    fn build_columns_is_idempotent() {
        let mut accumulator = accumulator_for(&["p2.sgi", "p3.sgi"]);
        accumulator.build_columns();
        let values = accumulator.columns[0].values.clone();
        accumulator.build_columns();
        assert_eq!(accumulator.columns[0].values, values);
    }

    #[test]
    fn bakes_constants_into_the_key() {
        let mut accumulator = accumulator_for(&["0_0_012", "0_1_012", "0_2_012"]);
        accumulator.build_columns();
        assert_eq!(accumulator.key, "#_#_###");
        assert_eq!(accumulator.columns.len(), 3);

        accumulator.bake_constants();
        assert_eq!(accumulator.key, "0_#_012");
        assert_eq!(accumulator.varying(), 1);
        assert_eq!(accumulator.columns[0].distinct, vec![0, 1, 2]);
    }

    #[test]
    fn baking_pads_to_run_width() {
        let mut accumulator =
            accumulator_for(&["_00132_file11.cr2", "_00132_file12.cr2", "_00132_file13.cr2"]);
        accumulator.build_columns();
        accumulator.bake_constants();
        assert_eq!(accumulator.key, "_00132_file##.cr2");
        assert_eq!(accumulator.varying(), 1);
    }

    #[test]
    fn zero_run_pattern_is_trivially_final() {
        let mut accumulator = accumulator_for(&["afile.txt"]);
        accumulator.build_columns();
        accumulator.bake_constants();
        assert_eq!(accumulator.varying(), 0);
        assert_eq!(accumulator.key, "afile.txt");
    }

    #[test]
    fn substituting_values_reconstructs_the_filename() {
        let (mut key, runs, values) = extract_runs("file-20.1234.cr2");
        for (run, value) in runs.iter().zip(values) {
            overwrite_run(&mut key, *run, value);
        }
        assert_eq!(key, "file-20.1234.cr2");
    }

    #[test]
    #[should_panic(expected = "value tuple length")]
    fn mismatched_tuple_aborts() {
        let mut accumulator = accumulator_for(&["p2.sgi"]);
        accumulator.insert(&[1, 2]);
    }
}
