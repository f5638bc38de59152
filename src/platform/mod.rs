//! Best-effort, platform-conditional filesystem helpers.
//!
//! Directory metadata sync and page-cache eviction are optimizations with
//! no correctness dependency; on platforms lacking them they are no-ops,
//! and failures are ignored everywhere.

use std::fs::File;
use std::path::Path;

/// Fsync a directory so a rename or unlink survives a crash.
///
/// Errors (including the platform not supporting directory fsync) are
/// swallowed.
#[cfg(unix)]
pub fn sync_dir_best_effort(dir: &Path) {
    if let Ok(handle) = File::open(dir) {
        let _ = handle.sync_all();
    }
}

#[cfg(not(unix))]
pub fn sync_dir_best_effort(_dir: &Path) {}

/// Advise the kernel to drop cached pages for the first `len` bytes of
/// `file`. Linux only; elsewhere a no-op.
///
/// Must only be called after a durable sync, so a later read cannot be
/// satisfied by cache contents that predate the sync.
#[cfg(target_os = "linux")]
pub fn drop_page_cache_best_effort(file: &File, len: u64) {
    use std::os::unix::io::AsRawFd;

    let page = unsafe { libc::sysconf(libc::_SC_PAGESIZE) };
    let page = if page > 0 { page as u64 } else { 4096 };
    let rounded = len.div_ceil(page) * page;

    unsafe {
        let _ = libc::posix_fadvise(
            file.as_raw_fd(),
            0,
            rounded as libc::off_t,
            libc::POSIX_FADV_DONTNEED,
        );
    }
}

#[cfg(not(target_os = "linux"))]
pub fn drop_page_cache_best_effort(_file: &File, _len: u64) {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::{NamedTempFile, TempDir};

    #[test]
    fn test_sync_dir_ignores_missing_directory() {
        sync_dir_best_effort(Path::new("/nonexistent/definitely/not/here"));
    }

    #[test]
    fn test_sync_dir_on_real_directory() {
        let dir = TempDir::new().unwrap();
        sync_dir_best_effort(dir.path());
    }

    #[test]
    fn test_drop_page_cache_on_open_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"some cached bytes").unwrap();
        file.flush().unwrap();
        drop_page_cache_best_effort(file.as_file(), 17);
    }
}
