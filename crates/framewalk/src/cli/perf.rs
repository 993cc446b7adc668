//! Perf command - time the engine on a synthetic listing

use anyhow::Result;
use comfy_table::{presets::UTF8_FULL_CONDENSED, Table};
use framewalk_parser::Parser;
use framewalk_sequence::SequencePattern;
use serde::Serialize;
use std::time::Instant;
use tracing::info;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct PerfOutput {
    paths: usize,
    items: usize,
    ingest_ms: u128,
    resolve_ms: u128,
    paths_per_sec: f64,
}

pub fn run(frames: u32, variants: u32, json: bool) -> Result<()> {
    // Synthetic patterns are padded to 6 digits; larger frame counts
    // would not fit.
    let frames = frames.min(999_999);
    let paths = synthetic_paths(frames, variants);
    info!(paths = paths.len(), "generated synthetic listing");

    let start = Instant::now();
    let mut parser = Parser::new();
    for path in &paths {
        parser.insert(path);
    }
    let ingested = Instant::now();
    let items = parser.into_results();
    let resolved = Instant::now();

    let total_secs = resolved.duration_since(start).as_secs_f64();
    let output = PerfOutput {
        paths: paths.len(),
        items: items.len(),
        ingest_ms: ingested.duration_since(start).as_millis(),
        resolve_ms: resolved.duration_since(ingested).as_millis(),
        paths_per_sec: if total_secs > 0.0 {
            paths.len() as f64 / total_secs
        } else {
            f64::INFINITY
        },
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        let mut table = Table::new();
        table.load_preset(UTF8_FULL_CONDENSED).set_header(vec![
            "PATHS",
            "ITEMS",
            "INGEST (ms)",
            "RESOLVE (ms)",
            "PATHS/S",
        ]);
        table.add_row(vec![
            output.paths.to_string(),
            output.items.to_string(),
            output.ingest_ms.to_string(),
            output.resolve_ms.to_string(),
            format!("{:.0}", output.paths_per_sec),
        ]);
        println!("{table}");
    }
    Ok(())
}

/// One shuffled path per frame of every synthetic variant.
fn synthetic_paths(frames: u32, variants: u32) -> Vec<String> {
    let passes = ["beauty", "directDiffuse", "indirectDiffuse", "z"];
    let mut paths = Vec::new();
    for variant in 0..variants {
        let pass = passes[variant as usize % passes.len()];
        let pattern = SequencePattern::new(
            format!("shot{:02}_{pass}.", variant / passes.len() as u32 + 1),
            ".exr",
            6,
        );
        for frame in 1..=frames {
            let filename = pattern.render(frame).expect("frame fits padding");
            paths.push(format!("/prods/wip/shot01/{filename}"));
        }
    }
    shuffle(&mut paths);
    paths
}

/// Deterministic xorshift permutation.
fn shuffle(paths: &mut [String]) {
    let mut state = 0x2545_F491_4F6C_DD1Du64;
    for index in (1..paths.len()).rev() {
        state ^= state << 13;
        state ^= state >> 7;
        state ^= state << 17;
        paths.swap(index, (state % (index as u64 + 1)) as usize);
    }
}
