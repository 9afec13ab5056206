// src/cli.rs
use anyhow::{Context as _, Result};
use clap::Parser;
use std::path::PathBuf;

use crate::core::walker::{cleanup_dir, resolve_root};
use crate::models::CleanupStats;

const RULE_WIDTH: usize = 50;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Directory to clean (defaults to current directory)
    #[arg(short, long, default_value = ".")]
    pub directory: PathBuf,

    /// Log per-file decisions to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Default for Args {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("."),
            verbose: false,
        }
    }
}

/// Cleans the requested tree and prints the banner, per-file lines and summary.
///
/// # Errors
///
/// Returns an error if the root cannot be resolved, does not exist or is
/// not a directory. Per-file failures are reported and do not fail the run.
pub fn run(args: Args) -> Result<CleanupStats> {
    let root = resolve_root(&args.directory)?;

    println!("Start cleaning whitespace...");
    print_rule();
    println!("Working directory: {}", root.display());

    let stats = cleanup_dir(&root)
        .with_context(|| format!("Failed to clean directory: {}", root.display()))?;

    print_rule();
    print_summary(&stats);

    Ok(stats)
}

fn print_rule() {
    println!("{}", "=".repeat(RULE_WIDTH));
}

fn print_summary(stats: &CleanupStats) {
    println!("Summary:");
    println!("   Total files: {}", stats.total);
    println!("   Files cleaned: {}", stats.cleaned);
    println!("   No cleanup needed: {}", stats.unchanged());
    if stats.failed > 0 {
        println!("   Failed: {}", stats.failed);
    }
    if stats.cleaned > 0 {
        println!("Whitespace cleanup finished!");
    } else {
        println!("No files needed cleaning.");
    }
}
