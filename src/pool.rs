// Worker pool and orchestration module
// Bounded work queue, fixed set of hashing workers, join barrier

use std::fs;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::{Duration, Instant};

use crossbeam_channel::{bounded, Receiver};

use crate::classify::{classify, Classification};
use crate::config::RunConfig;
use crate::error::HasherError;
use crate::exclude::ExclusionSet;
use crate::hash;
use crate::sink::ResultSink;
use crate::walk;

/// Statistics aggregated over a completed run
#[derive(Debug, Clone, Default)]
pub struct RunStats {
    pub files_hashed: usize,
    pub files_unsupported: usize,
    pub total_bytes: u64,
    pub duration: Duration,
}

/// Per-worker counters, merged into `RunStats` at the join barrier
#[derive(Debug, Default)]
struct WorkerTally {
    hashed: usize,
    unsupported: usize,
    bytes: u64,
}

type FailureSlot = Arc<Mutex<Option<HasherError>>>;

/// Run the full pipeline: start the worker pool, enumerate the tree on the
/// calling thread, close the queue, and wait for every worker to drain it.
///
/// Soft errors are routed to the sink and the run continues; the first
/// fatal error stops enumeration, lets every worker finish its in-flight
/// file, and is returned after the pool has been joined.
pub fn run(
    config: &RunConfig,
    exclusions: &ExclusionSet,
    sink: Arc<dyn ResultSink>,
) -> Result<RunStats, HasherError> {
    let start = Instant::now();
    let workers = config.workers.max(1);

    // Queue capacity equals the worker count so the walk cannot run
    // arbitrarily far ahead of hashing throughput
    let (sender, receiver) = bounded::<PathBuf>(workers);
    let stop = Arc::new(AtomicBool::new(false));
    let failure: FailureSlot = Arc::new(Mutex::new(None));

    let mut handles = Vec::with_capacity(workers);
    for id in 0..workers {
        let receiver = receiver.clone();
        let algorithm = config.algorithm.clone();
        let sink = Arc::clone(&sink);
        let stop = Arc::clone(&stop);
        let failure = Arc::clone(&failure);
        handles.push(thread::spawn(move || {
            worker_loop(id, receiver, &algorithm, sink, stop, failure)
        }));
    }
    drop(receiver);

    let walk_result = walk::enumerate(&config.root, exclusions, &sender, &stop);

    // Closing the queue: workers drain the remaining items and exit
    drop(sender);

    let mut stats = RunStats::default();
    for (id, handle) in handles.into_iter().enumerate() {
        match handle.join() {
            Ok(tally) => {
                stats.files_hashed += tally.hashed;
                stats.files_unsupported += tally.unsupported;
                stats.total_bytes += tally.bytes;
            }
            Err(_) => {
                record_failure(&failure, &stop, HasherError::WorkerPanicked { worker: id });
            }
        }
    }
    stats.duration = start.elapsed();

    if let Some(err) = failure.lock().unwrap().take() {
        return Err(err);
    }
    walk_result?;

    tracing::debug!(
        "hashed {} files ({} bytes) in {:.2}s, {} unsupported",
        stats.files_hashed,
        stats.total_bytes,
        stats.duration.as_secs_f64(),
        stats.files_unsupported,
    );

    Ok(stats)
}

/// Sequential loop of one worker: pull a task, classify, hash, report.
///
/// Exits when the queue is closed and drained, or promptly after the stop
/// flag is raised by a fatal error elsewhere in the pool.
fn worker_loop(
    id: usize,
    receiver: Receiver<PathBuf>,
    algorithm: &str,
    sink: Arc<dyn ResultSink>,
    stop: Arc<AtomicBool>,
    failure: FailureSlot,
) -> WorkerTally {
    let mut tally = WorkerTally::default();

    while let Ok(path) = receiver.recv() {
        if stop.load(Ordering::Relaxed) {
            break;
        }

        tracing::debug!("{}: statting {}", id, path.display());
        match classify(&path) {
            Ok(Classification::Hashable) => {
                tracing::debug!("{}: hashing {}", id, path.display());
                match hash::hash_file(&path, algorithm) {
                    Ok(result) => {
                        tally.bytes += fs::metadata(&path).map(|m| m.len()).unwrap_or(0);
                        tally.hashed += 1;
                        sink.hashed(&result);
                    }
                    Err(err) => {
                        record_failure(&failure, &stop, err);
                        break;
                    }
                }
            }
            Ok(Classification::Unsupported { reason }) => {
                tally.unsupported += 1;
                sink.unsupported(&HasherError::UnsupportedFile {
                    path,
                    reason: reason.to_string(),
                });
            }
            Err(err) => {
                record_failure(&failure, &stop, err);
                break;
            }
        }
    }

    tracing::debug!("{}: worker done", id);
    tally
}

/// Park the first fatal error and signal the rest of the pool to stop.
fn record_failure(failure: &FailureSlot, stop: &AtomicBool, err: HasherError) {
    let mut slot = failure.lock().unwrap();
    if slot.is_none() {
        *slot = Some(err);
    }
    stop.store(true, Ordering::Relaxed);
}
