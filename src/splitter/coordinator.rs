//! Split coordinator - orchestrates the decomposition pipeline
//!
//! The coordinator is responsible for:
//! - Running the two seeding passes over the raw tokens
//! - Driving the peeling rounds until a round discovers no new words
//! - Per-round progress reporting
//! - Final result assembly (dictionary, candidate log, residue)

use crate::config::SplitConfig;
use crate::error::Result;
use crate::progress::{ProgressReporter, RoundTicker};
use crate::splitter::peel::peel_token;
use crate::splitter::pool::run_workers;
use crate::splitter::queue::{TokenBag, WordSet};
use crate::splitter::seed::{extract_capitalized, fold_doubled};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Result of a completed decomposition run
#[derive(Debug)]
pub struct SplitResult {
    /// All discovered root words (unordered)
    pub dictionary: Vec<String>,

    /// Every remainder logged across all rounds (duplicates across rounds kept)
    pub candidates: Vec<String>,

    /// Tokens that never matched any frontier word (unordered)
    pub residue: Vec<String>,

    /// Words seeded by the capital-boundary pass
    pub capital_seeds: u64,

    /// Words seeded by the doubled-word pass
    pub doubled_seeds: u64,

    /// Number of peeling rounds executed
    pub rounds: u32,

    /// Time taken for the run
    pub duration: Duration,
}

/// Coordinates the decomposition pipeline
pub struct SplitCoordinator {
    /// Configuration
    config: Arc<SplitConfig>,

    /// Globally accumulating dictionary of root words
    dictionary: Arc<WordSet>,
}

impl SplitCoordinator {
    /// Create a new coordinator
    pub fn new(config: SplitConfig) -> Self {
        Self {
            config: Arc::new(config),
            dictionary: Arc::new(WordSet::new()),
        }
    }

    /// Run the full pipeline over the loaded tokens
    pub fn run(self, tokens: Vec<String>) -> Result<SplitResult> {
        let start_time = Instant::now();
        let workers = self.config.worker_count;

        info!(tokens = tokens.len(), workers, "Starting decomposition");

        let reporter = if self.config.show_progress {
            Some(Arc::new(ProgressReporter::new()))
        } else {
            None
        };

        // Seeding pass: capital-boundary extraction
        let stage1 = TokenBag::from_tokens(tokens);
        let stage2 = TokenBag::new();
        if let Some(r) = &reporter {
            r.set_status("Seeding from capitalized sub-words...");
        }
        {
            let bag = stage1.clone();
            let out = stage2.clone();
            let dict = Arc::clone(&self.dictionary);
            run_workers("seed-capital", workers, move || {
                while let Some(token) = bag.take() {
                    if !extract_capitalized(&token, &dict) {
                        out.push(token);
                    }
                }
            })?;
        }
        let capital_seeds = self.dictionary.len() as u64;
        info!(words = capital_seeds, "Capital-boundary pass complete");

        // Seeding pass: doubled-word detection
        let stage3 = TokenBag::new();
        if let Some(r) = &reporter {
            r.set_status("Seeding from doubled words...");
        }
        {
            let bag = stage2.clone();
            let out = stage3.clone();
            let dict = Arc::clone(&self.dictionary);
            run_workers("seed-doubled", workers, move || {
                while let Some(token) = bag.take() {
                    if let Some(token) = fold_doubled(token, &dict) {
                        out.push(token);
                    }
                }
            })?;
        }
        let doubled_seeds = self.dictionary.len() as u64 - capital_seeds;
        info!(words = doubled_seeds, "Doubled-word pass complete");

        // Peeling rounds. The initial frontier is the dictionary as seeded;
        // every later frontier is only the previous round's new candidates.
        let mut frontier: Arc<Vec<String>> = Arc::new(self.dictionary.snapshot());
        let mut pending = stage3;
        let mut candidate_log: Vec<String> = Vec::new();
        let mut rounds = 0u32;

        loop {
            rounds += 1;
            let starting = pending.len();

            info!(
                round = rounds,
                pending = starting,
                frontier = frontier.len(),
                "Starting peel round"
            );

            let round_candidates = Arc::new(WordSet::new());
            let next_pending = TokenBag::new();

            let ticker = reporter.as_ref().map(|r| {
                RoundTicker::start(
                    Arc::clone(r),
                    self.config.progress_interval,
                    rounds,
                    starting,
                    pending.clone(),
                    Arc::clone(&round_candidates),
                )
            });

            let pool_result = {
                let bag = pending.clone();
                let frontier = Arc::clone(&frontier);
                let candidates = Arc::clone(&round_candidates);
                let next = next_pending.clone();
                run_workers("peel", workers, move || {
                    while let Some(token) = bag.take() {
                        peel_token(token, &frontier, &candidates, &next);
                    }
                })
            };

            // The ticker is joined before the round closes, pass or fail.
            if let Some(ticker) = ticker {
                ticker.stop();
            }
            pool_result?;

            let new_words = round_candidates.snapshot();
            debug!(
                round = rounds,
                candidates = new_words.len(),
                forwarded = next_pending.len(),
                "Peel round complete"
            );

            for word in &new_words {
                self.dictionary.insert(word.clone());
            }
            candidate_log.extend(new_words.iter().cloned());

            frontier = Arc::new(new_words);
            pending = next_pending;

            if frontier.is_empty() {
                break;
            }
        }

        if let Some(r) = &reporter {
            r.finish_and_clear();
        }

        let residue = pending.drain_all();
        let duration = start_time.elapsed();

        info!(
            dictionary = self.dictionary.len(),
            candidates = candidate_log.len(),
            residue = residue.len(),
            rounds,
            duration_secs = duration.as_secs(),
            "Decomposition complete"
        );

        Ok(SplitResult {
            dictionary: self.dictionary.snapshot(),
            candidates: candidate_log,
            residue,
            capital_seeds,
            doubled_seeds,
            rounds,
            duration,
        })
    }
}
