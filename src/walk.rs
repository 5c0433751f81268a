// Tree enumeration module
// Single producer walking the tree depth-first and feeding the work queue

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};

use crossbeam_channel::Sender;
use walkdir::WalkDir;

use crate::error::HasherError;
use crate::exclude::ExclusionSet;

/// Walk the tree under `root` and push every surviving candidate into the
/// work queue.
///
/// Directories are never emitted. The exclusion filter is applied per
/// discovered entry; excluded directories are still descended into, their
/// files are filtered individually. Pushing blocks when the queue is full,
/// which ties enumeration speed to hashing throughput.
///
/// Any error during the walk is fatal for the run. Enumeration also stops
/// when the stop flag is raised or when every receiver is gone.
///
/// Returns the number of tasks enqueued.
pub fn enumerate(
    root: &Path,
    exclusions: &ExclusionSet,
    tasks: &Sender<PathBuf>,
    stop: &AtomicBool,
) -> Result<usize, HasherError> {
    let mut enqueued = 0usize;

    for entry in WalkDir::new(root).follow_links(false) {
        if stop.load(Ordering::Relaxed) {
            break;
        }

        let entry = entry?;

        // Symlinks and special files are left in: the classifier decides
        // their fate, the walker only drops directories
        if entry.file_type().is_dir() {
            continue;
        }

        let path = entry.into_path();
        if exclusions.is_excluded(&path) {
            tracing::debug!("excluded {}", path.display());
            continue;
        }

        if tasks.send(path).is_err() {
            // All workers have exited; nothing left to feed
            break;
        }
        enqueued += 1;
    }

    Ok(enqueued)
}
