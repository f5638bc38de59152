//! Pass-count selection and the sequential pass loop.

use crate::config::WipeConfig;
use crate::error::Result;
use crate::rng;
use crate::verify::{plan_samples, verify_pass};
use crate::wipe::overwrite::run_pass;
use crate::wipe::target::WipeEvent;
use serde::Serialize;
use std::fs::File;

/// Outcome of one pass's verification stage.
///
/// A failed verification never produces a result; it aborts the wipe with
/// an error instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum VerificationOutcome {
    /// Verification was not requested.
    Skipped,
    /// All samples read back exactly as written.
    Verified,
}

/// Record of one completed overwrite pass.
#[derive(Debug, Clone, Serialize)]
pub struct PassResult {
    /// 1-based pass index.
    pub pass: u32,
    /// Bytes written this pass (equals the file size).
    pub bytes: u64,
    /// Verification stage outcome.
    pub verification: VerificationOutcome,
}

/// Compute how many passes to run for `config`.
///
/// Exactly `min_passes` unless randomization is requested and the bounds
/// differ, in which case the count is drawn uniformly from
/// `[min_passes, max_passes]` inclusive.
pub fn pass_count(config: &WipeConfig) -> u32 {
    if !config.randomize_pass_count || config.min_passes == config.max_passes {
        return config.min_passes;
    }
    rng::random_in_range(config.min_passes as u64, config.max_passes as u64) as u32
}

/// Run `total` overwrite passes over `file`, verifying each one before the
/// next begins when the configuration asks for it.
///
/// Each pass plans a fresh set of sample ranges. The first verification
/// failure (mismatch or incomplete capture) aborts the remaining passes
/// and propagates; a failed wipe is never reported as complete.
pub fn run_passes(
    file: &mut File,
    file_size: u64,
    total: u32,
    config: &WipeConfig,
    observer: &mut dyn FnMut(WipeEvent),
) -> Result<Vec<PassResult>> {
    let mut results = Vec::with_capacity(total as usize);

    for pass in 1..=total {
        let ranges = if config.verify {
            plan_samples(file_size, config.verify_samples, config.verify_len)
        } else {
            Vec::new()
        };

        let captures = run_pass(
            file,
            file_size,
            config.chunk_size,
            &ranges,
            config.drop_cache,
        )?;

        let verification = if config.verify {
            verify_pass(file, pass, &captures, config.drop_cache)?;
            VerificationOutcome::Verified
        } else {
            VerificationOutcome::Skipped
        };

        observer(WipeEvent::PassComplete {
            pass,
            total,
            verified: verification == VerificationOutcome::Verified,
        });

        results.push(PassResult {
            pass,
            bytes: file_size,
            verification,
        });
    }

    Ok(results)
}
