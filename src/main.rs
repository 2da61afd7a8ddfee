//! word-splitter - Word List Decomposition Tool
//!
//! Entry point for the CLI application.

use anyhow::{Context, Result};
use clap::Parser;
use std::process::ExitCode;
use tracing::error;
use tracing_subscriber::EnvFilter;
use word_splitter::config::{CliArgs, SplitConfig};
use word_splitter::output;
use word_splitter::progress::{print_header, print_summary};
use word_splitter::splitter::SplitCoordinator;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{:#}", e);
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    // Parse CLI arguments
    let args = CliArgs::parse();

    // Setup logging
    setup_logging(args.verbose)?;

    // Validate and create config
    let config = SplitConfig::from_args(args).context("Invalid configuration")?;

    // Load tokens
    let tokens = output::read_tokens(&config.input_path)
        .with_context(|| format!("Failed to read '{}'", config.input_path.display()))?;

    // Print header
    if config.show_progress {
        print_header(
            &config.input_path.display().to_string(),
            tokens.len() as u64,
            config.worker_count,
        );
    }

    // Run the pipeline
    let coordinator = SplitCoordinator::new(config.clone());
    let result = coordinator.run(tokens).context("Decomposition failed")?;

    // Write the three sorted output files
    output::write_sorted(&config.words_path, result.dictionary.clone())
        .context("Failed to write dictionary output")?;
    output::write_sorted(&config.candidates_path, result.candidates.clone())
        .context("Failed to write candidate output")?;
    output::write_sorted(&config.residue_path, result.residue.clone())
        .context("Failed to write residue output")?;

    // Print summary
    print_summary(
        result.dictionary.len() as u64,
        result.candidates.len() as u64,
        result.residue.len() as u64,
        result.rounds,
        result.duration,
    );

    Ok(())
}

fn setup_logging(verbose: bool) -> Result<()> {
    let filter = if verbose {
        EnvFilter::new("word_splitter=debug,warn")
    } else {
        EnvFilter::new("word_splitter=info,warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .init();

    Ok(())
}
