//! Parser tuning knobs

/// Capacity hints for the parser's accumulation buffers.
///
/// Pre-sizing generously avoids reallocation churn on listings in the
/// hundreds of thousands of paths. These are performance hints only;
/// no observable behavior depends on them.
#[derive(Debug, Clone)]
pub struct ParserConfig {
    /// Expected number of value tuples per pattern.
    pub tuples_per_pattern: usize,
    /// Expected number of distinct parent directories.
    pub directories: usize,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            tuples_per_pattern: 8 * 1024,
            directories: 64,
        }
    }
}

impl ParserConfig {
    /// A configuration sized for small ad-hoc listings.
    pub fn small() -> Self {
        Self {
            tuples_per_pattern: 16,
            directories: 4,
        }
    }
}
