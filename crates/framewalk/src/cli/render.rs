//! Render command - instantiate a pattern at frames

use anyhow::{Context, Result};
use framewalk_sequence::SequencePattern;

pub fn run(pattern: &str, frames: &[u32]) -> Result<()> {
    let (directory, pattern) = SequencePattern::parse(pattern)
        .with_context(|| format!("'{pattern}' is not a sequence pattern"))?;

    for &frame in frames {
        let filename = pattern
            .render(frame)
            .with_context(|| format!("Cannot render frame {frame}"))?;
        if directory.as_os_str().is_empty() {
            println!("{filename}");
        } else {
            println!("{}", directory.join(filename).display());
        }
    }
    Ok(())
}
