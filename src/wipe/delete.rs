//! Destructive rename/truncate/unlink sequence.

use crate::config::rename_params;
use crate::error::Result;
use crate::platform;
use crate::rng;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Pick a non-colliding random filename next to `current`.
///
/// Regenerates on collision up to the bounded retry count; if every token
/// collides the last candidate is used anyway and the rename itself
/// surfaces any real conflict.
fn random_sibling(current: &Path) -> PathBuf {
    let mut candidate = current.with_file_name(rng::random_hex_token(rename_params::TOKEN_BYTES));
    let mut tries = 0;
    while candidate.exists() && tries < rename_params::COLLISION_RETRIES {
        candidate = current.with_file_name(rng::random_hex_token(rename_params::TOKEN_BYTES));
        tries += 1;
    }
    candidate
}

/// Finalize a wiped file: rename it `rename_passes` times to random names
/// within its directory, truncate it to zero length, durably sync, and
/// unlink it (unless `keep` is set, in which case the zero-length file is
/// left at its final renamed path).
///
/// Every rename and the unlink are followed by a best-effort sync of the
/// parent directory so the metadata change survives a crash. Renames never
/// leave the directory; they obscure the name, not the location.
///
/// Returns the final path the file had (or still has, with `keep`).
pub fn finalize(path: &Path, rename_passes: u32, keep: bool) -> Result<PathBuf> {
    let mut current = path.to_path_buf();

    for _ in 0..rename_passes {
        let candidate = random_sibling(&current);
        std::fs::rename(&current, &candidate)?;
        current = candidate;
        if let Some(parent) = current.parent() {
            platform::sync_dir_best_effort(parent);
        }
    }

    let mut file = OpenOptions::new().write(true).open(&current)?;
    file.set_len(0)?;
    file.flush()?;
    file.sync_all()?;
    drop(file);

    let parent = current.parent().map(Path::to_path_buf);

    if keep {
        if let Some(dir) = &parent {
            platform::sync_dir_best_effort(dir);
        }
        return Ok(current);
    }

    std::fs::remove_file(&current)?;
    if let Some(dir) = &parent {
        platform::sync_dir_best_effort(dir);
    }
    Ok(current)
}
