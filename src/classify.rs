// File classification module
// Metadata-only inspection that decides whether a path can be hashed

use std::fs;
use std::path::Path;

use crate::error::HasherError;

/// Outcome of classifying a filesystem entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classification {
    /// Regular file, safe to open and stream
    Hashable,
    /// Socket, device, named pipe, or symlink (including symlinks that
    /// resolve to directories); reported but never fatal
    Unsupported { reason: &'static str },
}

/// Classify a path before any byte of it is read.
///
/// Uses `symlink_metadata` so the type check never follows links. The check
/// happens on metadata rather than by attempting a read because pipes and
/// sockets open successfully and then block the worker forever.
pub fn classify(path: &Path) -> Result<Classification, HasherError> {
    let metadata = fs::symlink_metadata(path).map_err(|e| HasherError::StatFailed {
        path: path.to_path_buf(),
        source: e,
    })?;

    if metadata.file_type().is_file() {
        Ok(Classification::Hashable)
    } else {
        Ok(Classification::Unsupported {
            reason: "not a regular file",
        })
    }
}
