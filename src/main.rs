//! stream-shred - best-effort secure file shredder.
//!
//! Overwrites each target with streamed random passes, optionally verifies
//! sampled ranges, then renames, truncates and unlinks it.

use anyhow::Context;
use clap::Parser;
use std::io::{self, Write};
use std::path::PathBuf;
use stream_shred::{wipe_file, WipeConfig, WipeEvent, WipeReport};

#[derive(Parser)]
#[command(name = "stream-shred")]
#[command(author, version, about, long_about = None)]
#[command(
    about = "Streaming secure file overwrite + delete",
    long_about = "Overwrites files with multiple passes of cryptographically strong random data, \
                  optionally verifies sampled ranges after each pass, then renames, truncates and \
                  deletes them. On SSD/NVMe this is best-effort only."
)]
struct Cli {
    /// Files to shred
    #[arg(required = true)]
    targets: Vec<PathBuf>,

    /// Minimum number of overwrite passes
    #[arg(long, default_value_t = 3)]
    min_passes: u32,

    /// Maximum number of overwrite passes
    #[arg(long, default_value_t = 7)]
    max_passes: u32,

    /// Use exactly min-passes instead of a random count in [min, max]
    #[arg(long)]
    no_randomize_pass_count: bool,

    /// Chunk size in bytes for streaming writes
    #[arg(long, default_value_t = 1024 * 1024)]
    chunk: usize,

    /// Read back random samples after each pass and compare
    #[arg(long)]
    verify: bool,

    /// Samples per pass when verifying
    #[arg(long, default_value_t = 6)]
    verify_samples: usize,

    /// Bytes per sample when verifying
    #[arg(long, default_value_t = 64)]
    verify_len: usize,

    /// Renames to random names before deletion
    #[arg(long, default_value_t = 2)]
    rename_passes: u32,

    /// Linux only: hint the kernel to drop cached pages after each pass
    #[arg(long)]
    drop_cache: bool,

    /// Keep the truncated, renamed file instead of deleting it (testing)
    #[arg(long)]
    keep: bool,

    /// Skip the confirmation prompt
    #[arg(long)]
    force: bool,

    /// Print a JSON report for all targets to stdout
    #[arg(long)]
    json: bool,
}

fn main() {
    let cli = Cli::parse();

    match run(cli) {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            eprintln!("Error: {:#}", e);
            std::process::exit(1);
        }
    }
}

/// Run all targets; returns whether every attempted wipe succeeded.
fn run(cli: Cli) -> anyhow::Result<bool> {
    let config = WipeConfig {
        min_passes: cli.min_passes,
        max_passes: cli.max_passes,
        randomize_pass_count: !cli.no_randomize_pass_count,
        chunk_size: cli.chunk,
        verify: cli.verify,
        verify_samples: cli.verify_samples,
        verify_len: cli.verify_len,
        rename_passes: cli.rename_passes,
        drop_cache: cli.drop_cache,
        keep: cli.keep,
    };
    config
        .validate()
        .map_err(anyhow::Error::msg)
        .context("invalid arguments")?;

    let mut all_ok = true;
    let mut reports: Vec<WipeReport> = Vec::new();

    for target in &cli.targets {
        if !cli.force && !confirm_target(target)? {
            println!("Skipping {}", target.display());
            continue;
        }

        match wipe_one(target, &config) {
            Ok(report) => reports.push(report),
            Err(e) => {
                eprintln!("Error: failed on {}: {}", target.display(), e);
                all_ok = false;
            }
        }
    }

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
    }

    Ok(all_ok)
}

/// Ask the operator to confirm one destructive wipe.
fn confirm_target(target: &std::path::Path) -> anyhow::Result<bool> {
    eprintln!("Target: {}", target.display());
    eprint!("Destructive operation; best-effort only on SSD/NVMe. Continue? [y/N] ");
    io::stderr().flush()?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .context("failed to read confirmation")?;
    Ok(input.trim().eq_ignore_ascii_case("y"))
}

fn wipe_one(target: &std::path::Path, config: &WipeConfig) -> stream_shred::Result<WipeReport> {
    let report = wipe_file(target, config, &mut |event| match event {
        WipeEvent::ZeroLength => {
            println!("{}: file is 0 bytes; skipping overwrites", target.display());
        }
        WipeEvent::PassComplete {
            pass,
            total,
            verified,
        } => {
            let suffix = if verified { " (verified)" } else { "" };
            println!("{}: pass {}/{} complete{}", target.display(), pass, total, suffix);
        }
        WipeEvent::Removed => {
            println!("{}: overwritten and deleted", target.display());
        }
        WipeEvent::Kept { path } => {
            println!(
                "{}: overwritten; kept at {}",
                target.display(),
                path.display()
            );
        }
    })?;

    Ok(report)
}
