//! treesum - recursively hash every file in the supplied path, writing one
//! `<digest> <path>` line per file to stdout.
//!
//! # Usage
//!
//! ```bash
//! # Hash the current directory with the default algorithm
//! treesum
//!
//! # SHA-256 over the home directory, skipping two subtrees
//! treesum -a sha256 -x $HOME/Library,$HOME/.lima ~/
//! ```

use std::fs;
use std::path::PathBuf;
use std::process;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;

use treesum::{logging, pool, ExclusionSet, HasherError, HashRegistry, ResultSink, RunConfig, StdioSink};

/// Recursively hash every file in the supplied path, writing the hash to stdout.
#[derive(Parser, Debug)]
#[command(name = "treesum")]
#[command(after_help = "Example: treesum -a sha256 -x $HOME/Library,$HOME/.lima ~/")]
struct Cli {
    /// Root directory to hash
    #[arg(default_value = ".")]
    path: PathBuf,

    /// Number of workers
    #[arg(short, long, default_value_t = num_cpus::get())]
    workers: usize,

    /// Hash algorithm: md5, sha1, sha256, sha512
    #[arg(short, long, default_value = "md5")]
    algorithm: String,

    /// Comma-separated list of directories to exclude
    #[arg(short = 'x', long, value_delimiter = ',', value_name = "PATH1,PATH2")]
    exclude: Vec<PathBuf>,

    /// Show normally-suppressed errors (like skipping non-regular files)
    #[arg(long)]
    show_errors: bool,

    /// Enable debug output
    #[arg(long)]
    debug: bool,

    /// Show version number
    #[arg(short = 'v', long)]
    version: bool,
}

fn main() {
    let cli = Cli::parse();

    if cli.version {
        println!("treesum version: {}", env!("CARGO_PKG_VERSION"));
        return;
    }

    logging::init(cli.debug);

    if let Err(err) = run(cli) {
        eprintln!("Error: {:#}", err);
        process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    // Probe the algorithm before any traversal starts
    HashRegistry::get_hasher(&cli.algorithm)?;

    // The root must exist and be statable before any work starts
    fs::metadata(&cli.path)
        .map_err(|e| HasherError::from_root_io_error(e, cli.path.clone()))?;

    let exclusions =
        ExclusionSet::new(&cli.exclude).context("failed to resolve exclusion list")?;

    let config = RunConfig::new(cli.path)
        .with_algorithm(cli.algorithm)
        .with_workers(cli.workers)
        .with_show_errors(cli.show_errors)
        .with_debug(cli.debug);

    let sink: Arc<dyn ResultSink> = Arc::new(StdioSink::new(&config));
    pool::run(&config, &exclusions, sink)?;

    Ok(())
}
