//! Fixed-size worker pool for draining a token bag
//!
//! Each pass/round hands the pool a job closure that repeatedly takes tokens
//! from a shared [`TokenBag`](super::queue::TokenBag) until it is empty. The
//! pool spawns a fixed number of named worker threads, runs the job on each,
//! and joins them all before returning. The worker count caps how many
//! executions are in flight at once.
//!
//! There is no fault isolation: a panic inside any worker is mapped to
//! [`WorkerError::Panicked`] and aborts the whole pass.

use crate::error::WorkerError;
use std::any::Any;
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use tracing::{debug, trace};

/// Run `job` on `count` worker threads and wait for all of them
///
/// The job is shared by reference across workers; any state it touches must
/// be internally synchronized. Returns once every worker has finished, so
/// the bag the job drains is empty when this returns.
pub fn run_workers<F>(name: &str, count: usize, job: F) -> Result<(), WorkerError>
where
    F: Fn() + Send + Sync + 'static,
{
    debug!(pool = name, workers = count, "Starting worker pool");

    let job = Arc::new(job);
    let mut handles: Vec<JoinHandle<()>> = Vec::with_capacity(count);

    for id in 0..count {
        let job = Arc::clone(&job);
        let handle = thread::Builder::new()
            .name(format!("{name}-{id}"))
            .spawn(move || {
                trace!(worker = id, "Worker starting");
                job();
                trace!(worker = id, "Worker finished");
            })
            .map_err(|e| WorkerError::SpawnFailed {
                id,
                reason: e.to_string(),
            })?;
        handles.push(handle);
    }

    // Join every worker before surfacing a failure: no execution may
    // outlive the pool, even when a sibling panicked first.
    let mut first_panic: Option<WorkerError> = None;
    for (id, handle) in handles.into_iter().enumerate() {
        if let Err(payload) = handle.join() {
            first_panic.get_or_insert(WorkerError::Panicked {
                id,
                message: panic_message(payload),
            });
        }
    }
    if let Some(err) = first_panic {
        return Err(err);
    }

    debug!(pool = name, "Worker pool drained");
    Ok(())
}

/// Extract a readable message from a panic payload
fn panic_message(payload: Box<dyn Any + Send>) -> String {
    if let Some(msg) = payload.downcast_ref::<&str>() {
        (*msg).to_string()
    } else if let Some(msg) = payload.downcast_ref::<String>() {
        msg.clone()
    } else {
        "unknown panic".to_string()
    }
}
