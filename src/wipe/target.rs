//! Per-target wipe orchestration.

use crate::config::WipeConfig;
use crate::error::{Error, Result};
use crate::wipe::delete::finalize;
use crate::wipe::passes::{pass_count, run_passes, PassResult};
use serde::Serialize;
use std::fs::OpenOptions;
use std::path::{Path, PathBuf};

/// Progress notification emitted while a wipe runs.
///
/// The library never prints; callers turn these into console output,
/// logging, or nothing at all.
#[derive(Debug)]
pub enum WipeEvent {
    /// The target is zero bytes; overwrite passes are skipped.
    ZeroLength,
    /// One overwrite pass (and its verification, when requested) finished.
    PassComplete { pass: u32, total: u32, verified: bool },
    /// The file was truncated and unlinked.
    Removed,
    /// The file was truncated and kept at its final renamed path.
    Kept { path: PathBuf },
}

/// Final disposition of a wiped target.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "snake_case", tag = "state", content = "path")]
pub enum Disposition {
    /// Directory entry removed.
    Deleted,
    /// Zero-length file left at the given path (testing mode).
    Kept(PathBuf),
}

/// Summary of one completed wipe, suitable for machine-readable output.
#[derive(Debug, Clone, Serialize)]
pub struct WipeReport {
    /// The target as requested.
    pub target: PathBuf,
    /// Size of the file before wiping.
    pub size: u64,
    /// Per-pass outcomes, in order.
    pub passes: Vec<PassResult>,
    /// What happened to the directory entry.
    pub disposition: Disposition,
}

/// Check that `path` is an existing regular file, without following
/// symlinks. Runs before any destructive action.
fn check_target(path: &Path) -> Result<()> {
    let meta = match std::fs::symlink_metadata(path) {
        Ok(meta) => meta,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(Error::TargetNotFound(path.to_path_buf()));
        }
        Err(e) => return Err(e.into()),
    };

    if meta.file_type().is_symlink() {
        return Err(Error::SymlinkRefused(path.to_path_buf()));
    }
    if meta.is_dir() {
        return Err(Error::IsADirectory(path.to_path_buf()));
    }
    Ok(())
}

/// Wipe one file: overwrite passes with optional verification, then the
/// rename/truncate/unlink sequence.
///
/// Refuses symlinks and directories before touching anything. A zero-byte
/// file skips the overwrite stage but still goes through deletion. Any
/// failure aborts this target immediately; callers decide whether to
/// continue with other targets.
pub fn wipe_file(
    path: &Path,
    config: &WipeConfig,
    observer: &mut dyn FnMut(WipeEvent),
) -> Result<WipeReport> {
    config.validate().map_err(Error::InvalidConfig)?;
    check_target(path)?;

    let size = std::fs::symlink_metadata(path)?.len();

    let passes = if size > 0 {
        let mut file = OpenOptions::new().read(true).write(true).open(path)?;
        let total = pass_count(config);
        let results = run_passes(&mut file, size, total, config, observer)?;
        drop(file);
        results
    } else {
        observer(WipeEvent::ZeroLength);
        Vec::new()
    };

    let final_path = finalize(path, config.rename_passes, config.keep)?;

    let disposition = if config.keep {
        observer(WipeEvent::Kept {
            path: final_path.clone(),
        });
        Disposition::Kept(final_path)
    } else {
        observer(WipeEvent::Removed);
        Disposition::Deleted
    };

    Ok(WipeReport {
        target: path.to_path_buf(),
        size,
        passes,
        disposition,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn quick_config() -> WipeConfig {
        WipeConfig {
            min_passes: 1,
            max_passes: 1,
            randomize_pass_count: false,
            rename_passes: 1,
            ..Default::default()
        }
    }

    #[test]
    fn test_missing_target_fails_fast() {
        let dir = TempDir::new().unwrap();
        let err = wipe_file(&dir.path().join("ghost"), &quick_config(), &mut |_| {}).unwrap_err();
        assert!(matches!(err, Error::TargetNotFound(_)));
    }

    #[test]
    fn test_directory_target_is_refused_untouched() {
        let dir = TempDir::new().unwrap();
        let sub = dir.path().join("subdir");
        fs::create_dir(&sub).unwrap();
        fs::write(sub.join("inner.txt"), b"safe").unwrap();

        let err = wipe_file(&sub, &quick_config(), &mut |_| {}).unwrap_err();
        assert!(matches!(err, Error::IsADirectory(_)));

        // The directory and its contents are untouched.
        assert!(sub.is_dir());
        assert_eq!(fs::read(sub.join("inner.txt")).unwrap(), b"safe");
    }

    #[cfg(unix)]
    #[test]
    fn test_symlink_target_is_refused_and_not_followed() {
        let dir = TempDir::new().unwrap();
        let real = dir.path().join("precious.dat");
        fs::write(&real, b"do not wipe").unwrap();
        let link = dir.path().join("link");
        std::os::unix::fs::symlink(&real, &link).unwrap();

        let err = wipe_file(&link, &quick_config(), &mut |_| {}).unwrap_err();
        assert!(matches!(err, Error::SymlinkRefused(_)));

        assert!(link.exists());
        assert_eq!(fs::read(&real).unwrap(), b"do not wipe");
    }

    #[test]
    fn test_invalid_config_fails_before_preconditions() {
        let dir = TempDir::new().unwrap();
        let cfg = WipeConfig {
            min_passes: 0,
            ..quick_config()
        };
        let err = wipe_file(&dir.path().join("ghost"), &cfg, &mut |_| {}).unwrap_err();
        assert!(matches!(err, Error::InvalidConfig(_)));
    }

    #[test]
    fn test_zero_byte_file_skips_passes_but_deletes() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("empty.dat");
        fs::write(&path, b"").unwrap();

        let mut saw_zero_length = false;
        let report = wipe_file(&path, &quick_config(), &mut |e| {
            if matches!(e, WipeEvent::ZeroLength) {
                saw_zero_length = true;
            }
        })
        .unwrap();

        assert!(saw_zero_length);
        assert!(report.passes.is_empty());
        assert!(matches!(report.disposition, Disposition::Deleted));
        assert!(!path.exists());
    }
}
