//! Decomposition pipeline
//!
//! The pipeline runs in stages: two seeding passes bootstrap the dictionary,
//! then peeling rounds repeatedly strip known prefixes off the remaining
//! tokens. Every stage drains a shared token bag with a bounded pool of
//! worker threads.

pub mod coordinator;
pub mod peel;
pub mod pool;
pub mod queue;
pub mod seed;

pub use coordinator::{SplitCoordinator, SplitResult};
pub use queue::{TokenBag, WordSet};
