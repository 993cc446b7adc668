//! Framewalk command line interface
//!
//! Thin front end over the parser: browse a directory and print the
//! classified listing, render pattern frames, or time the engine on a
//! synthetic listing.

use anyhow::Result;
use clap::{Parser, Subcommand};
use framewalk_logging::{init_logging, LogConfig};
use std::path::PathBuf;

mod cli;

#[derive(Parser, Debug)]
#[command(name = "framewalk", about = "File sequence browser")]
struct Cli {
    /// Enable verbose logging (info/debug to stderr)
    #[arg(short = 'v', long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Browse a directory and list folders, files and sequences
    Browse {
        /// Directory to browse
        path: PathBuf,

        /// Descend into subdirectories
        #[arg(short = 'R', long)]
        recursive: bool,

        /// Follow symbolic links
        #[arg(long)]
        follow_symlinks: bool,

        /// Skip dot-files and dot-directories
        #[arg(long)]
        no_hidden: bool,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Render frames of a '#' pattern into filenames
    Render {
        /// Pattern, e.g. 'beauty.####.exr'
        pattern: String,

        /// Frames to render
        #[arg(required = true)]
        frames: Vec<u32>,
    },

    /// Time ingest and resolve over a synthetic listing
    Perf {
        /// Frames per synthetic sequence
        #[arg(long, default_value = "400")]
        frames: u32,

        /// Number of synthetic sequence variants
        #[arg(long, default_value = "12")]
        variants: u32,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let args = Cli::parse();
    init_logging(LogConfig {
        app_name: "framewalk",
        verbose: args.verbose,
    })?;

    match args.command {
        Commands::Browse {
            path,
            recursive,
            follow_symlinks,
            no_hidden,
            json,
        } => cli::browse::run(&path, recursive, follow_symlinks, !no_hidden, json),
        Commands::Render { pattern, frames } => cli::render::run(&pattern, &frames),
        Commands::Perf {
            frames,
            variants,
            json,
        } => cli::perf::run(frames, variants, json),
    }
}
