// Centralized error handling module
// Every failure mode carries an explicit kind so callers match on variants

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Main error type for the hasher.
///
/// Soft errors (`UnsupportedFile`) are handled at the worker boundary and
/// never abort the run; every other variant is fatal.
#[derive(Debug)]
pub enum HasherError {
    /// Root path errors, detected before any work starts
    RootNotFound { path: PathBuf },
    RootUnreadable { path: PathBuf, source: io::Error },

    /// Algorithm selection errors, detected before any work starts
    UnsupportedAlgorithm { algorithm: String },

    /// Per-file soft error: entry is not a regular file (socket, device,
    /// named pipe, symlink)
    UnsupportedFile { path: PathBuf, reason: String },

    /// Per-file fatal errors
    StatFailed { path: PathBuf, source: io::Error },
    OpenFailed { path: PathBuf, source: io::Error },
    ReadFailed { path: PathBuf, source: io::Error },

    /// Enumeration cannot continue
    WalkFailed { path: Option<PathBuf>, source: walkdir::Error },

    /// A worker thread panicked
    WorkerPanicked { worker: usize },
}

impl HasherError {
    /// Whether this error aborts the whole run.
    ///
    /// Only unsupported-file classifications are soft; they are reported
    /// (or suppressed) and the run continues.
    pub fn is_fatal(&self) -> bool {
        !matches!(self, HasherError::UnsupportedFile { .. })
    }
}

impl fmt::Display for HasherError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            HasherError::RootNotFound { path } => {
                write!(f, "{} does not exist", path.display())
            }
            HasherError::RootUnreadable { path, source } => {
                write!(f, "error reading {}: {}", path.display(), source)
            }
            HasherError::UnsupportedAlgorithm { algorithm } => {
                write!(
                    f,
                    "unsupported algorithm {}. see treesum -h for list of supported options",
                    algorithm
                )
            }
            HasherError::UnsupportedFile { path, reason } => {
                write!(f, "unhashable file {}: {}", path.display(), reason)
            }
            HasherError::StatFailed { path, source } => {
                write!(f, "error statting {}: {}", path.display(), source)
            }
            HasherError::OpenFailed { path, source } => {
                write!(f, "error opening {}: {}", path.display(), source)
            }
            HasherError::ReadFailed { path, source } => {
                write!(f, "error reading {}: {}", path.display(), source)
            }
            HasherError::WalkFailed { path, source } => {
                if let Some(p) = path {
                    write!(f, "error walking at {}: {}", p.display(), source)
                } else {
                    write!(f, "error walking directory tree: {}", source)
                }
            }
            HasherError::WorkerPanicked { worker } => {
                write!(f, "worker {} panicked", worker)
            }
        }
    }
}

impl std::error::Error for HasherError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            HasherError::RootUnreadable { source, .. }
            | HasherError::StatFailed { source, .. }
            | HasherError::OpenFailed { source, .. }
            | HasherError::ReadFailed { source, .. } => Some(source),
            HasherError::WalkFailed { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl HasherError {
    /// Classify an I/O error hit while probing the root path.
    pub fn from_root_io_error(err: io::Error, path: PathBuf) -> Self {
        match err.kind() {
            io::ErrorKind::NotFound => HasherError::RootNotFound { path },
            _ => HasherError::RootUnreadable { path, source: err },
        }
    }
}

impl From<walkdir::Error> for HasherError {
    fn from(err: walkdir::Error) -> Self {
        let path = err.path().map(|p| p.to_path_buf());
        HasherError::WalkFailed { path, source: err }
    }
}
