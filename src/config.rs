//! Configuration types for word-splitter
//!
//! This module defines:
//! - CLI argument parsing using clap derive macros
//! - Runtime configuration with validation

use crate::error::ConfigError;
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

/// Maximum reasonable worker count
const MAX_WORKERS: usize = 64;

/// Default cap on concurrently running workers per pass/round
pub const DEFAULT_WORKERS: usize = 8;

/// Decompose a word list into root words, compounds, and residue
#[derive(Parser, Debug, Clone)]
#[command(
    name = "word-splitter",
    version,
    about = "Decomposes a word list into root words, compound candidates, and residue",
    long_about = "Reads one token per line, seeds a dictionary from capitalized \
                  sub-words and doubled words, then iteratively peels known \
                  prefixes off the remaining tokens until no new words appear.\n\n\
                  Produces three sorted output files: dictionary words, compound \
                  candidates, and the undecomposable residue.",
    after_help = "EXAMPLES:\n    \
        word-splitter words.txt\n    \
        word-splitter words.txt --words dict.txt --candidates comp.txt --residue rest.txt\n    \
        word-splitter words.txt -w 8 -v"
)]
pub struct CliArgs {
    /// Input file with one token per line
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Output file for dictionary words
    #[arg(long, default_value = "words.txt", value_name = "FILE")]
    pub words: PathBuf,

    /// Output file for compound candidates
    #[arg(long, default_value = "candidates.txt", value_name = "FILE")]
    pub candidates: PathBuf,

    /// Output file for undecomposable residue tokens
    #[arg(long, default_value = "residue.txt", value_name = "FILE")]
    pub residue: PathBuf,

    /// Number of worker threads per pass
    #[arg(short = 'w', long, default_value_t = DEFAULT_WORKERS, value_name = "NUM")]
    pub workers: usize,

    /// Progress update interval in milliseconds
    #[arg(long, default_value = "1000", value_name = "MILLIS")]
    pub interval: u64,

    /// Quiet mode - suppress progress output
    #[arg(short = 'q', long)]
    pub quiet: bool,

    /// Verbose output (debug logging)
    #[arg(short = 'v', long)]
    pub verbose: bool,
}

/// Validated runtime configuration
#[derive(Debug, Clone)]
pub struct SplitConfig {
    /// Input token file
    pub input_path: PathBuf,

    /// Dictionary output file
    pub words_path: PathBuf,

    /// Candidate output file
    pub candidates_path: PathBuf,

    /// Residue output file
    pub residue_path: PathBuf,

    /// Number of worker threads per pass/round
    pub worker_count: usize,

    /// Progress update interval
    pub progress_interval: Duration,

    /// Show progress indicator
    pub show_progress: bool,

    /// Verbose logging
    pub verbose: bool,
}

impl SplitConfig {
    /// Create and validate configuration from CLI arguments
    pub fn from_args(args: CliArgs) -> Result<Self, ConfigError> {
        // Validate worker count
        if args.workers == 0 || args.workers > MAX_WORKERS {
            return Err(ConfigError::InvalidWorkerCount {
                count: args.workers,
                max: MAX_WORKERS,
            });
        }

        // Validate progress interval
        if args.interval == 0 {
            return Err(ConfigError::InvalidInterval {
                millis: args.interval,
            });
        }

        // Input must exist up front; the loader treats it as already validated
        if !args.input.exists() {
            return Err(ConfigError::InputNotFound {
                path: args.input.clone(),
            });
        }

        // Validate output paths
        for path in [&args.words, &args.candidates, &args.residue] {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() && !parent.exists() {
                    return Err(ConfigError::InvalidOutputPath {
                        path: path.clone(),
                        reason: format!("Parent directory '{}' does not exist", parent.display()),
                    });
                }
            }
        }

        Ok(Self {
            input_path: args.input,
            words_path: args.words,
            candidates_path: args.candidates,
            residue_path: args.residue,
            worker_count: args.workers,
            progress_interval: Duration::from_millis(args.interval),
            show_progress: !args.quiet,
            verbose: args.verbose,
        })
    }
}
