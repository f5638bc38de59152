//! Error types for stream-shred.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for wipe operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during a wipe.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error during file operations.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Target path does not exist.
    #[error("Target not found: {0}")]
    TargetNotFound(PathBuf),

    /// Target is a directory; only regular files are wiped.
    #[error("Refusing to wipe a directory: {0}")]
    IsADirectory(PathBuf),

    /// Target is a symbolic link; links are never followed.
    #[error("Refusing to wipe a symlink: {0}")]
    SymlinkRefused(PathBuf),

    /// Invalid wipe configuration.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// A verification sample was not fully captured during streaming.
    /// Indicates a tracker defect, not a storage problem.
    #[error("Internal consistency error on pass {pass}: sample {sample} not fully captured")]
    SampleNotCaptured { pass: u32, sample: usize },

    /// Read-back bytes differ from what was written.
    #[error("Verification failed on pass {pass}: sample {sample} mismatch at offset {offset}")]
    VerificationMismatch { pass: u32, sample: usize, offset: u64 },
}
