//! word-splitter - Word List Decomposition Tool
//!
//! A batch tool that decomposes a large word list into a minimal set of
//! "root" words plus a record of every word derivable by concatenating
//! roots.
//!
//! # Features
//!
//! - **Two seeding passes**: capitalized sub-words (`FooBar` -> `foo`, `bar`)
//!   and doubled words (`abab` -> `ab`) bootstrap the dictionary.
//!
//! - **Iterative peeling**: each round strips known prefixes off the
//!   remaining tokens; every remainder becomes a candidate and feeds the
//!   next round's match set, until a round discovers nothing new.
//!
//! - **Bounded parallelism**: every pass drains a shared token bag with a
//!   fixed pool of worker threads (8 by default).
//!
//! - **Three sorted outputs**: dictionary words, compound candidates, and
//!   the undecomposable residue.
//!
//! # Architecture
//!
//! ```text
//!  raw tokens
//!      │
//!      ▼
//! ┌──────────────────┐   no capital boundary
//! │  capital pass    │──────────────────────┐
//! │  FooBar→foo,bar  │                      ▼
//! └──────────────────┘             ┌──────────────────┐  even, not doubled
//!      │ seeds                     │  doubled pass    │─────────────┐
//!      ▼                           │  abab→ab         │             ▼
//! ┌──────────────────┐             └──────────────────┘    ┌─────────────────┐
//! │    Dictionary    │◄───── seeds ──────┘                 │  peeling rounds │
//! │  (insert-only)   │◄──── candidates ──────────────────  │  frontier match │
//! └──────────────────┘                                     └─────────────────┘
//!      │                                                        │         │
//!      ▼                                                        ▼         ▼
//!  words.txt                                           candidates.txt  residue.txt
//! ```
//!
//! # Example
//!
//! ```bash
//! # Basic run
//! word-splitter tokens.txt
//!
//! # Custom outputs and verbose logging
//! word-splitter tokens.txt --words dict.txt --candidates comp.txt --residue rest.txt -v
//! ```

pub mod config;
pub mod error;
pub mod output;
pub mod progress;
pub mod splitter;

pub use config::{CliArgs, SplitConfig};
pub use error::{Result, SplitterError};
pub use splitter::{SplitCoordinator, SplitResult};
