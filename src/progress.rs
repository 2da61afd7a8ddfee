//! Progress reporting for the decomposition pipeline
//!
//! Provides real-time per-round status display using indicatif progress bars,
//! plus the console header and summary printed around a run.
//!
//! The per-round ticker runs concurrently with the round's worker pool: it
//! wakes at a fixed interval, reads the remaining-queue size, and emits one
//! status line with throughput and ETA. When the round finishes first, the
//! ticker stops without emitting a final line, and is always joined before
//! the round is considered closed.

use crate::splitter::queue::{TokenBag, WordSet};
use console::style;
use crossbeam_channel::{bounded, select, tick, Sender};
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

/// Snapshot of one peeling round's progress
#[derive(Debug, Clone)]
pub struct RoundProgress {
    /// Round number (1-based)
    pub round: u32,

    /// Pending tokens when the round started
    pub starting: usize,

    /// Pending tokens right now
    pub remaining: usize,

    /// Candidates discovered so far this round
    pub candidates: usize,

    /// Elapsed time since round start
    pub elapsed: Duration,
}

impl RoundProgress {
    /// Tokens processed so far this round
    pub fn completed(&self) -> usize {
        self.starting.saturating_sub(self.remaining)
    }

    /// Calculate tokens per second rate
    pub fn tokens_per_second(&self) -> f64 {
        let secs = self.elapsed.as_secs_f64();
        if secs > 0.0 {
            self.completed() as f64 / secs
        } else {
            0.0
        }
    }

    /// Estimated time remaining, if the throughput allows one
    pub fn eta(&self) -> Option<Duration> {
        let rate = self.tokens_per_second();
        if rate > 0.0 {
            Some(Duration::from_secs_f64(self.remaining as f64 / rate))
        } else {
            None
        }
    }
}

/// Progress reporter that displays round status
pub struct ProgressReporter {
    /// Progress bar
    bar: ProgressBar,
}

impl ProgressReporter {
    /// Create a new progress reporter
    pub fn new() -> Self {
        let bar = ProgressBar::new_spinner();

        bar.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} [{elapsed_precise}] {msg}")
                .expect("Invalid progress template")
                .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
        );

        bar.enable_steady_tick(Duration::from_millis(100));

        Self { bar }
    }

    /// Update the progress display
    pub fn update(&self, progress: &RoundProgress) {
        let eta = match progress.eta() {
            Some(d) => format_eta(d),
            None => "-".to_string(),
        };

        let msg = format!(
            "Round {} | Left: {} | Candidates: {} | Rate: {:.0}/s | ETA: {}",
            progress.round,
            format_number(progress.remaining as u64),
            format_number(progress.candidates as u64),
            progress.tokens_per_second(),
            eta,
        );

        self.bar.set_message(msg);
    }

    /// Set a status message
    pub fn set_status(&self, status: &str) {
        self.bar.set_message(status.to_string());
    }

    /// Finish the progress display with a final message
    pub fn finish(&self, message: &str) {
        self.bar.finish_with_message(message.to_string());
    }

    /// Finish and clear the progress display
    pub fn finish_and_clear(&self) {
        self.bar.finish_and_clear();
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

/// Periodic status emitter for one peeling round
///
/// Races the round's worker pool against an interval timer: each tick emits
/// one status line, and a done signal from the round driver stops the loop.
pub struct RoundTicker {
    done: Sender<()>,
    handle: Option<JoinHandle<()>>,
}

impl RoundTicker {
    /// Start the ticker for a round
    pub fn start(
        reporter: Arc<ProgressReporter>,
        interval: Duration,
        round: u32,
        starting: usize,
        pending: TokenBag,
        candidates: Arc<WordSet>,
    ) -> Self {
        let (done_tx, done_rx) = bounded::<()>(1);
        let started = Instant::now();

        let handle = thread::spawn(move || {
            let ticks = tick(interval);
            loop {
                select! {
                    // Round finished first: stop without a final emission.
                    recv(done_rx) -> _ => break,
                    recv(ticks) -> _ => {
                        let progress = RoundProgress {
                            round,
                            starting,
                            remaining: pending.len(),
                            candidates: candidates.len(),
                            elapsed: started.elapsed(),
                        };
                        reporter.update(&progress);
                    }
                }
            }
        });

        Self {
            done: done_tx,
            handle: Some(handle),
        }
    }

    /// Signal the ticker to stop and wait for it
    ///
    /// The round is not considered closed until this returns; no background
    /// emission outlives the round.
    pub fn stop(mut self) {
        let _ = self.done.send(());
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

/// Format a number with thousands separators
fn format_number(n: u64) -> String {
    let s = n.to_string();
    let bytes: Vec<_> = s.bytes().rev().collect();

    let chunks: Vec<String> = bytes
        .chunks(3)
        .map(|chunk| {
            chunk
                .iter()
                .rev()
                .map(|&b| b as char)
                .collect::<String>()
        })
        .collect();

    chunks.into_iter().rev().collect::<Vec<_>>().join(",")
}

/// Format an ETA duration as h/m/s
fn format_eta(d: Duration) -> String {
    let secs = d.as_secs();
    if secs >= 3600 {
        format!("{}h{}m", secs / 3600, (secs % 3600) / 60)
    } else if secs >= 60 {
        format!("{}m{}s", secs / 60, secs % 60)
    } else {
        format!("{}s", secs)
    }
}

/// Print a summary of the run results
pub fn print_summary(
    dictionary: u64,
    candidates: u64,
    residue: u64,
    rounds: u32,
    duration: Duration,
) {
    println!();
    println!("{}", style("Decomposition Complete").green().bold());
    println!("{}", style("─".repeat(50)).dim());
    println!(
        "  {} {}",
        style("Dictionary:").bold(),
        format_number(dictionary)
    );
    println!(
        "  {} {}",
        style("Candidates:").bold(),
        format_number(candidates)
    );
    println!("  {} {}", style("Residue:").bold(), format_number(residue));
    println!("  {} {}", style("Rounds:").bold(), rounds);
    println!(
        "  {} {:.1}s",
        style("Duration:").bold(),
        duration.as_secs_f64()
    );
    println!();
}

/// Print a header at the start of a run
pub fn print_header(input: &str, tokens: u64, workers: usize) {
    println!();
    println!(
        "{} {}",
        style("word-splitter").cyan().bold(),
        env!("CARGO_PKG_VERSION")
    );
    println!("{}", style("─".repeat(50)).dim());
    println!("  {} {}", style("Input:").bold(), input);
    println!("  {} {}", style("Tokens:").bold(), format_number(tokens));
    println!("  {} {}", style("Workers:").bold(), workers);
    println!();
}
