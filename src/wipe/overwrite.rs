//! Streaming random overwrite of a whole file.

use crate::error::Result;
use crate::platform;
use crate::rng;
use crate::verify::{SampleCapture, SampleRange};
use std::fs::File;
use std::io::{Seek, SeekFrom, Write};

/// Run one overwrite pass: stream fresh random bytes across the full
/// extent `[0, file_size)` in `chunk_size` writes, capturing the expected
/// bytes of each planned sample range along the way.
///
/// After the loop the file is flushed and durably synced, so the pass's
/// bytes are persisted before any verification read or a following pass.
/// When `drop_cache` is set, the page-cache eviction hint is issued after
/// the sync.
///
/// Memory use is one chunk buffer plus the sample captures; the file size
/// never matters.
pub fn run_pass(
    file: &mut File,
    file_size: u64,
    chunk_size: usize,
    ranges: &[SampleRange],
    drop_cache: bool,
) -> Result<Vec<SampleCapture>> {
    let mut captures: Vec<SampleCapture> = ranges.iter().map(|&r| SampleCapture::new(r)).collect();

    file.seek(SeekFrom::Start(0))?;

    let mut chunk = vec![0u8; chunk_size];
    let mut written = 0u64;

    while written < file_size {
        let n = chunk_size.min((file_size - written) as usize);
        let data = &mut chunk[..n];
        rng::fill_random(data);

        for capture in &mut captures {
            capture.absorb_chunk(data, written);
        }

        file.write_all(data)?;
        written += n as u64;
    }

    file.flush()?;
    file.sync_all()?;

    if drop_cache {
        platform::drop_page_cache_best_effort(file, file_size);
    }

    Ok(captures)
}
