use std::path::PathBuf;

use amalgam::{Amalgamator, Config, GuardPolicy, config::DEFAULT_MAX_DEPTH};
use anyhow::{Context as _, Result};
use clap::Parser;

/// Flatten a C/C++ file and its local includes into a single file
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// Root source or header file
    root: PathBuf,

    /// Path of the single-file output
    output: PathBuf,

    /// When to emit a leading `#pragma once`
    #[arg(long, value_enum, default_value_t = GuardPolicy::Auto)]
    guard: GuardPolicy,

    /// Deepest allowed chain of nested local includes
    #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
    max_depth: usize,

    /// Inline a `#pragma once` file only the first time it is included
    #[arg(long)]
    dedup_guarded: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn config(&self) -> Config {
        Config {
            guard: self.guard,
            max_depth: self.max_depth,
            dedup_guarded: self.dedup_guarded,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_filter = match cli.verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    Amalgamator::new(cli.config())
        .amalgamate(&cli.root, &cli.output)
        .with_context(|| {
            format!(
                "Failed to amalgamate {} into {}",
                cli.root.display(),
                cli.output.display()
            )
        })?;

    Ok(())
}
