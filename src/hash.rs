// Hash computation module
// Algorithm registry and streaming digest logic

use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use crate::error::HasherError;

use md5::{Digest as Md5Digest, Md5};
use sha1::{Digest as Sha1Digest, Sha1};
use sha2::{Digest as Sha2Digest, Sha256, Sha512};

/// Streaming read buffer size (1 MiB)
const BUFFER_SIZE: usize = 1024 * 1024;

/// Trait for hash algorithm implementations
pub trait Hasher: Send + std::fmt::Debug {
    /// Update the hasher with new data
    fn update(&mut self, data: &[u8]);

    /// Finalize the hash and return the raw digest
    fn finalize(self: Box<Self>) -> Vec<u8>;

    /// Get the output size in bytes
    fn output_size(&self) -> usize;
}

// MD5 wrapper
#[derive(Debug)]
pub struct Md5Wrapper(Md5);

impl Hasher for Md5Wrapper {
    fn update(&mut self, data: &[u8]) {
        Md5Digest::update(&mut self.0, data);
    }

    fn finalize(self: Box<Self>) -> Vec<u8> {
        Md5Digest::finalize(self.0).to_vec()
    }

    fn output_size(&self) -> usize {
        16 // 128 bits
    }
}

// SHA1 wrapper
#[derive(Debug)]
pub struct Sha1Wrapper(Sha1);

impl Hasher for Sha1Wrapper {
    fn update(&mut self, data: &[u8]) {
        Sha1Digest::update(&mut self.0, data);
    }

    fn finalize(self: Box<Self>) -> Vec<u8> {
        Sha1Digest::finalize(self.0).to_vec()
    }

    fn output_size(&self) -> usize {
        20 // 160 bits
    }
}

// SHA-256 wrapper
#[derive(Debug)]
pub struct Sha256Wrapper(Sha256);

impl Hasher for Sha256Wrapper {
    fn update(&mut self, data: &[u8]) {
        Sha2Digest::update(&mut self.0, data);
    }

    fn finalize(self: Box<Self>) -> Vec<u8> {
        Sha2Digest::finalize(self.0).to_vec()
    }

    fn output_size(&self) -> usize {
        32 // 256 bits
    }
}

// SHA-512 wrapper
#[derive(Debug)]
pub struct Sha512Wrapper(Sha512);

impl Hasher for Sha512Wrapper {
    fn update(&mut self, data: &[u8]) {
        Sha2Digest::update(&mut self.0, data);
    }

    fn finalize(self: Box<Self>) -> Vec<u8> {
        Sha2Digest::finalize(self.0).to_vec()
    }

    fn output_size(&self) -> usize {
        64 // 512 bits
    }
}

/// Registry for the supported hash algorithms
pub struct HashRegistry;

impl HashRegistry {
    /// Get a fresh hasher instance for the specified algorithm.
    ///
    /// Digest state is never shared across files; callers request a new
    /// instance per file.
    pub fn get_hasher(algorithm: &str) -> Result<Box<dyn Hasher>, HasherError> {
        match algorithm.to_lowercase().as_str() {
            "md5" => Ok(Box::new(Md5Wrapper(Md5Digest::new()))),
            "sha1" => Ok(Box::new(Sha1Wrapper(Sha1Digest::new()))),
            "sha256" => Ok(Box::new(Sha256Wrapper(Sha2Digest::new()))),
            "sha512" => Ok(Box::new(Sha512Wrapper(Sha2Digest::new()))),
            _ => Err(HasherError::UnsupportedAlgorithm {
                algorithm: algorithm.to_string(),
            }),
        }
    }

    /// Names of the supported algorithms, in help-text order.
    pub fn algorithm_names() -> &'static [&'static str] {
        &["md5", "sha1", "sha256", "sha512"]
    }
}

/// Result of a hash computation, ready for output
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HashResult {
    pub hash: String, // lowercase hex
    pub path: PathBuf,
}

/// Stream a file through the selected algorithm and return the hex digest.
///
/// Reads in fixed-size chunks so the file is never buffered whole in
/// memory. The caller is expected to have classified the path as a regular
/// file first; opening a pipe or socket here would block forever.
pub fn hash_file(path: &Path, algorithm: &str) -> Result<HashResult, HasherError> {
    let mut hasher = HashRegistry::get_hasher(algorithm)?;

    let mut file = File::open(path).map_err(|e| HasherError::OpenFailed {
        path: path.to_path_buf(),
        source: e,
    })?;

    let mut buffer = vec![0u8; BUFFER_SIZE];
    loop {
        let bytes_read = file.read(&mut buffer).map_err(|e| HasherError::ReadFailed {
            path: path.to_path_buf(),
            source: e,
        })?;
        if bytes_read == 0 {
            break;
        }
        hasher.update(&buffer[..bytes_read]);
    }

    let hash = bytes_to_hex(&hasher.finalize());
    Ok(HashResult {
        hash,
        path: path.to_path_buf(),
    })
}

/// Convert raw digest bytes to a lowercase hexadecimal string
pub fn bytes_to_hex(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{:02x}", b)).collect()
}
