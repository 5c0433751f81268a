// Result sink module
// Routes successful digests to stdout and diagnostics to stderr

use crate::config::RunConfig;
use crate::error::HasherError;
use crate::hash::HashResult;

/// Destination for per-file outcomes.
///
/// Workers call into the sink concurrently; implementations must be safe
/// to share across threads.
pub trait ResultSink: Send + Sync {
    /// A file was hashed successfully
    fn hashed(&self, result: &HashResult);

    /// A file was classified as unhashable; soft, suppressible
    fn unsupported(&self, err: &HasherError);
}

/// Standard sink: result lines on stdout, `Error: ...` lines on stderr.
pub struct StdioSink {
    show_errors: bool,
    debug: bool,
}

impl StdioSink {
    pub fn new(config: &RunConfig) -> Self {
        Self {
            show_errors: config.show_errors,
            debug: config.debug,
        }
    }
}

impl ResultSink for StdioSink {
    fn hashed(&self, result: &HashResult) {
        if self.debug {
            // Debug mode: the result becomes a diagnostic line on stderr,
            // stdout stays silent
            tracing::debug!("{} {}", result.hash, result.path.display());
        } else {
            println!("{} {}", result.hash, result.path.display());
        }
    }

    fn unsupported(&self, err: &HasherError) {
        if self.show_errors {
            eprintln!("Error: {}", err);
        }
    }
}
