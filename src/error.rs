//! Error types for word-splitter
//!
//! This module defines a structured error hierarchy covering:
//! - Configuration and CLI errors
//! - Worker thread errors
//! - I/O errors from the token loader and output writer
//!
//! Design philosophy:
//! - Use thiserror for structured error types in library code
//! - Errors should be actionable - include context about what to do
//! - A broken algorithmic assumption (the capital-scan check in the seeding
//!   pass) is a panic, not an error value: it surfaces through the worker
//!   pool as `WorkerError::Panicked` and aborts the run.

use std::path::PathBuf;
use thiserror::Error;

/// Top-level error type for the word-splitter application
#[derive(Error, Debug)]
pub enum SplitterError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Worker/concurrency errors
    #[error("Worker error: {0}")]
    Worker(#[from] WorkerError),

    /// I/O errors (reading tokens, writing output files)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration and CLI errors
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Invalid worker count
    #[error("Invalid worker count {count}: must be between 1 and {max}")]
    InvalidWorkerCount { count: usize, max: usize },

    /// Invalid progress interval
    #[error("Invalid progress interval {millis}ms: must be at least 1ms")]
    InvalidInterval { millis: u64 },

    /// Input file missing
    #[error("Input file not found: '{path}'")]
    InputNotFound { path: PathBuf },

    /// Output path error
    #[error("Invalid output path '{path}': {reason}")]
    InvalidOutputPath { path: PathBuf, reason: String },
}

/// Worker thread errors
#[derive(Error, Debug)]
pub enum WorkerError {
    /// Worker thread could not be spawned
    #[error("Failed to start worker {id}: {reason}")]
    SpawnFailed { id: usize, reason: String },

    /// Worker panicked (includes fatal invariant violations inside a pass)
    #[error("Worker {id} panicked: {message}")]
    Panicked { id: usize, message: String },
}

/// Result type alias for SplitterError
pub type Result<T> = std::result::Result<T, SplitterError>;
