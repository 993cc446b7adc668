//! Per-directory aggregation and lazy resolution
//!
//! The `Parser` is the mutable heart of the pipeline: paths stream in
//! through [`Parser::insert`], grouped by parent directory and pattern
//! key; nothing else happens until results are requested. Resolution
//! then runs the full build/bake/split/compress pass over a copy of the
//! accumulated state, so the parser keeps accepting paths afterwards
//! and resolved output is cached until the next insert.

use crate::config::ParserConfig;
use crate::extract::{extract_runs_into, DigitRun};
use crate::pattern::PatternAccumulator;
use crate::ranges::compress_ranges;
use crate::split::split_pattern;
use framewalk_sequence::{split_path, BrowseItem, FrameNumber, SequencePattern};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Patterns accumulated for one parent directory, keyed by pattern key.
type DirectoryPatterns = HashMap<String, PatternAccumulator>;

/// Extraction buffers reused across inserts.
#[derive(Debug, Default)]
struct Scratch {
    key: String,
    runs: Vec<DigitRun>,
    values: Vec<FrameNumber>,
}

/// Groups ingested paths into per-directory patterns and resolves them
/// into classified [`BrowseItem`]s on demand.
#[derive(Debug)]
pub struct Parser {
    config: ParserConfig,
    directories: HashMap<String, DirectoryPatterns>,
    scratch: Scratch,
    cache: Option<Vec<BrowseItem>>,
}

impl Default for Parser {
    fn default() -> Self {
        Self::new()
    }
}

impl Parser {
    pub fn new() -> Self {
        Self::with_config(ParserConfig::default())
    }

    pub fn with_config(config: ParserConfig) -> Self {
        Self {
            directories: HashMap::with_capacity(config.directories),
            config,
            scratch: Scratch::default(),
            cache: None,
        }
    }

    /// Ingest one absolute or relative path.
    ///
    /// Never fails: a basename without digits yields a zero-run pattern
    /// and resolves to a unit file.
    pub fn insert(&mut self, path: &str) {
        self.cache = None;

        let (parent, filename) = split_path(path);
        let Scratch { key, runs, values } = &mut self.scratch;
        extract_runs_into(filename, key, runs, values);

        let patterns = self
            .directories
            .entry(parent.to_string())
            .or_insert_with(HashMap::new);
        if !patterns.contains_key(key.as_str()) {
            let accumulator =
                PatternAccumulator::new(key.clone(), runs, self.config.tuples_per_pattern);
            patterns.insert(key.clone(), accumulator);
        }
        patterns
            .get_mut(key.as_str())
            .expect("pattern entry ensured above")
            .insert(values);
    }

    /// Number of parent directories seen so far.
    pub fn directory_count(&self) -> usize {
        self.directories.len()
    }

    /// Resolve everything ingested so far into classified items.
    ///
    /// Lazy and cached: the first call after an insert runs the full
    /// resolution pass, later calls return the same slice. Output order
    /// is normalized by sorting, so equal ingest sets always produce
    /// identical results regardless of hash-iteration order.
    pub fn results(&mut self) -> &[BrowseItem] {
        if self.cache.is_none() {
            self.cache = Some(self.resolve());
        }
        self.cache.as_deref().expect("resolution cached above")
    }

    /// Resolve and take ownership of the items, consuming the parser.
    pub fn into_results(mut self) -> Vec<BrowseItem> {
        self.results();
        self.cache.take().unwrap_or_default()
    }

    fn resolve(&self) -> Vec<BrowseItem> {
        let mut items = Vec::new();
        for (directory, patterns) in &self.directories {
            for accumulator in patterns.values() {
                resolve_pattern(
                    accumulator.clone(),
                    directory,
                    self.config.tuples_per_pattern,
                    &mut items,
                );
            }
        }
        items.sort_unstable();
        debug!(
            directories = self.directories.len(),
            items = items.len(),
            "resolved ingested paths"
        );
        items
    }
}

/// Run one accumulated pattern to completion, splitting as needed.
///
/// Worklist-driven: every split removes exactly one varying column, so
/// the list drains after at most one entry per column combination.
fn resolve_pattern(
    accumulator: PatternAccumulator,
    directory: &str,
    capacity: usize,
    items: &mut Vec<BrowseItem>,
) {
    let mut worklist = vec![accumulator];
    while let Some(mut pattern) = worklist.pop() {
        pattern.build_columns();
        pattern.bake_constants();
        match pattern.varying() {
            0 => items.push(BrowseItem::unit_file(join_path(directory, &pattern.key))),
            1 => emit_sequences(directory, &pattern, items),
            _ => worklist.extend(split_pattern(&pattern, capacity)),
        }
    }
}

/// Item builder for the single-counter case: compress the column's
/// distinct values and emit one sequence item per compressed range.
fn emit_sequences(directory: &str, pattern: &PatternAccumulator, items: &mut Vec<BrowseItem>) {
    let [column] = pattern.columns.as_slice() else {
        unreachable!("sequence emission requires exactly one varying column");
    };

    let run = column.run;
    let descriptor = SequencePattern::new(
        &pattern.key[..run.offset],
        &pattern.key[run.offset + run.width..],
        run.width,
    );
    let (ranges, step) = compress_ranges(&column.distinct);
    let directory = PathBuf::from(directory);
    for range in ranges {
        items.push(BrowseItem::sequence(
            directory.clone(),
            descriptor.clone(),
            range,
            step,
        ));
    }
}

fn join_path(directory: &str, filename: &str) -> PathBuf {
    if directory.is_empty() {
        PathBuf::from(filename)
    } else {
        Path::new(directory).join(filename)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use framewalk_sequence::{Range, Sequence};

    fn sequence_item(
        path: &str,
        prefix: &str,
        suffix: &str,
        padding: usize,
        first: FrameNumber,
        last: FrameNumber,
        step: FrameNumber,
    ) -> BrowseItem {
        BrowseItem::Sequence {
            path: PathBuf::from(path),
            sequence: Sequence::new(
                SequencePattern::new(prefix, suffix, padding),
                Range { first, last },
                step,
            ),
        }
    }

    #[test]
    fn two_frames_make_a_sequence() {
        let mut parser = Parser::new();
        parser.insert("p2.sgi");
        parser.insert("p3.sgi");
        assert_eq!(
            parser.results(),
            &[sequence_item("", "p", ".sgi", 1, 2, 3, 1)]
        );
    }

    #[test]
    fn classifies_a_mixed_directory() {
        let mut parser = Parser::new();
        for path in [
            "path/path",
            "path/afile.txt",
            "path/file_with_numbers_0213.txt",
            "path/_00132_file11.cr2",
            "path/_00132_file12.cr2",
            "path/_00132_file13.cr2",
            "path/p13.cr2",
            "path/p18.cr2",
            "path/p23.cr2",
            "path/p28.cr2",
        ] {
            parser.insert(path);
        }

        assert_eq!(
            parser.results(),
            &[
                BrowseItem::unit_file("path/afile.txt"),
                BrowseItem::unit_file("path/file_with_numbers_0213.txt"),
                BrowseItem::unit_file("path/path"),
                sequence_item("path", "_00132_file", ".cr2", 2, 11, 13, 1),
                sequence_item("path", "p", ".cr2", 2, 13, 28, 5),
            ]
        );
    }

    #[test]
    fn splits_independent_counters() {
        let mut parser = Parser::new();
        for path in ["_1_1_", "_1_2_", "_2_2_", "_2_1_"] {
            parser.insert(path);
        }
        assert_eq!(
            parser.results(),
            &[
                sequence_item("", "_1_", "_", 1, 1, 2, 1),
                sequence_item("", "_2_", "_", 1, 1, 2, 1),
            ]
        );
    }

    #[test]
    fn digitless_paths_never_become_sequences() {
        let mut parser = Parser::new();
        parser.insert("dir/readme");
        parser.insert("dir/license");
        let items = parser.results();
        assert_eq!(items.len(), 2);
        assert!(items.iter().all(|item| !item.is_sequence()));
    }

    #[test]
    fn irregular_spacing_fragments_with_one_step() {
        let mut parser = Parser::new();
        for frame in [20, 22, 24, 26, 28, 30, 34, 36] {
            parser.insert(&format!("f{frame}.dpx"));
        }
        assert_eq!(
            parser.results(),
            &[
                sequence_item("", "f", ".dpx", 2, 20, 30, 2),
                sequence_item("", "f", ".dpx", 2, 34, 36, 2),
            ]
        );
    }

    #[test]
    fn resolve_is_idempotent() {
        let mut parser = Parser::new();
        parser.insert("a/p2.sgi");
        parser.insert("a/p3.sgi");
        let first = parser.results().to_vec();
        let second = parser.results().to_vec();
        assert_eq!(first, second);
    }

    #[test]
    fn insert_after_resolve_invalidates_the_cache() {
        let mut parser = Parser::new();
        parser.insert("p2.sgi");
        assert_eq!(parser.results(), &[BrowseItem::unit_file("p2.sgi")]);

        parser.insert("p3.sgi");
        assert_eq!(
            parser.results(),
            &[sequence_item("", "p", ".sgi", 1, 2, 3, 1)]
        );
    }

    #[test]
    fn directories_aggregate_independently() {
        let mut parser = Parser::new();
        parser.insert("a/p2.sgi");
        parser.insert("b/p3.sgi");
        assert_eq!(parser.directory_count(), 2);
        assert_eq!(
            parser.results(),
            &[
                BrowseItem::unit_file("a/p2.sgi"),
                BrowseItem::unit_file("b/p3.sgi"),
            ]
        );
    }

    #[test]
    fn constant_counter_bakes_back_into_the_name() {
        let mut parser = Parser::new();
        parser.insert("v001/beauty.0001.exr");
        parser.insert("v001/beauty.0002.exr");
        assert_eq!(
            parser.results(),
            &[sequence_item("v001", "beauty.", ".exr", 4, 1, 2, 1)]
        );
    }

    #[test]
    fn capacity_hints_change_no_behavior() {
        let mut small = Parser::with_config(ParserConfig::small());
        let mut default = Parser::new();
        for path in ["seq/a1.exr", "seq/a2.exr", "seq/readme"] {
            small.insert(path);
            default.insert(path);
        }
        assert_eq!(small.results(), default.results());
    }

    #[test]
    fn into_results_consumes_the_parser() {
        let mut parser = Parser::new();
        parser.insert("p2.sgi");
        parser.insert("p3.sgi");
        let items = parser.into_results();
        assert_eq!(items, vec![sequence_item("", "p", ".sgi", 1, 2, 3, 1)]);
    }
}
