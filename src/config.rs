//! Configuration constants and types for stream-shred.

use serde::{Deserialize, Serialize};

/// Smallest permitted chunk size (4KB, one page on most systems).
pub const MIN_CHUNK_SIZE: usize = 4096;

/// Default chunk size for streaming writes (1 MiB).
pub const DEFAULT_CHUNK_SIZE: usize = 1024 * 1024;

/// Default minimum number of overwrite passes.
pub const DEFAULT_MIN_PASSES: u32 = 3;

/// Default maximum number of overwrite passes.
pub const DEFAULT_MAX_PASSES: u32 = 7;

/// Default verification samples per pass.
pub const DEFAULT_VERIFY_SAMPLES: usize = 6;

/// Default bytes per verification sample.
pub const DEFAULT_VERIFY_LEN: usize = 64;

/// Default number of rename passes before unlink.
pub const DEFAULT_RENAME_PASSES: u32 = 2;

/// Rename token parameters.
pub mod rename_params {
    /// Random bytes per rename token (hex-encoded, so 32 chars).
    pub const TOKEN_BYTES: usize = 16;

    /// Regeneration attempts when a token collides with an existing name.
    pub const COLLISION_RETRIES: u32 = 10;
}

/// Immutable request parameters for one wipe invocation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WipeConfig {
    /// Minimum number of overwrite passes.
    pub min_passes: u32,

    /// Maximum number of overwrite passes.
    pub max_passes: u32,

    /// Draw the pass count uniformly from [min_passes, max_passes]
    /// instead of using exactly min_passes.
    pub randomize_pass_count: bool,

    /// Streaming write chunk size in bytes.
    pub chunk_size: usize,

    /// Read back random samples after each pass and compare.
    pub verify: bool,

    /// Samples per pass when verifying.
    pub verify_samples: usize,

    /// Bytes per sample when verifying.
    pub verify_len: usize,

    /// Renames to a random name before deletion.
    pub rename_passes: u32,

    /// Hint the OS to drop cached pages after each pass (best-effort).
    pub drop_cache: bool,

    /// Leave the truncated, renamed file in place instead of unlinking.
    pub keep: bool,
}

impl Default for WipeConfig {
    fn default() -> Self {
        Self {
            min_passes: DEFAULT_MIN_PASSES,
            max_passes: DEFAULT_MAX_PASSES,
            randomize_pass_count: true,
            chunk_size: DEFAULT_CHUNK_SIZE,
            verify: false,
            verify_samples: DEFAULT_VERIFY_SAMPLES,
            verify_len: DEFAULT_VERIFY_LEN,
            rename_passes: DEFAULT_RENAME_PASSES,
            drop_cache: false,
            keep: false,
        }
    }
}

impl WipeConfig {
    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.min_passes < 1 {
            return Err("min_passes must be at least 1".to_string());
        }
        if self.max_passes < self.min_passes {
            return Err("max_passes must be >= min_passes".to_string());
        }
        if self.chunk_size < MIN_CHUNK_SIZE {
            return Err(format!("chunk_size must be at least {} bytes", MIN_CHUNK_SIZE));
        }
        if self.verify {
            if self.verify_samples < 1 {
                return Err("verify_samples must be at least 1 when verifying".to_string());
            }
            if self.verify_len < 1 {
                return Err("verify_len must be at least 1 when verifying".to_string());
            }
        }
        Ok(())
    }
}
