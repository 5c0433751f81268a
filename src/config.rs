// Run configuration module
// One immutable value built at startup and passed to every component

use std::path::PathBuf;

/// Configuration for a single hashing run.
///
/// Built once from the parsed command line and never mutated afterwards;
/// components read the fields they need instead of consulting globals.
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Root directory to enumerate
    pub root: PathBuf,
    /// Selected hash algorithm name
    pub algorithm: String,
    /// Number of hashing workers
    pub workers: usize,
    /// Surface normally-suppressed unsupported-file diagnostics
    pub show_errors: bool,
    /// Diagnostic progress lines replace result printing
    pub debug: bool,
}

impl RunConfig {
    /// Create a configuration with default settings for the given root
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            algorithm: "md5".to_string(),
            workers: num_cpus::get(),
            show_errors: false,
            debug: false,
        }
    }

    /// Set the hash algorithm
    pub fn with_algorithm(mut self, algorithm: impl Into<String>) -> Self {
        self.algorithm = algorithm.into();
        self
    }

    /// Set the worker count; clamped to at least one worker
    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = workers.max(1);
        self
    }

    /// Enable or disable unsupported-file diagnostics
    pub fn with_show_errors(mut self, show_errors: bool) -> Self {
        self.show_errors = show_errors;
        self
    }

    /// Enable or disable debug output
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }
}
