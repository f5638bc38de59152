//! Incremental capture of expected sample bytes during streaming.

use super::plan::SampleRange;

/// Expected bytes for one sample range, built up chunk by chunk as the
/// overwrite pass streams past it.
///
/// Memory cost is two buffers of the sample length, independent of file
/// size. `filled` tracks which positions have been captured; after a full
/// pass every entry must be true, and a false entry means the tracker
/// missed chunk coverage (an internal defect, not a data mismatch).
#[derive(Debug)]
pub struct SampleCapture {
    range: SampleRange,
    expected: Vec<u8>,
    filled: Vec<bool>,
}

impl SampleCapture {
    /// Create an empty capture for `range`.
    pub fn new(range: SampleRange) -> Self {
        Self {
            range,
            expected: vec![0u8; range.length],
            filled: vec![false; range.length],
        }
    }

    /// The range this capture tracks.
    pub fn range(&self) -> SampleRange {
        self.range
    }

    /// The captured expected bytes.
    pub fn expected(&self) -> &[u8] {
        &self.expected
    }

    /// Record the portion of `chunk` (written at absolute offset
    /// `chunk_start`) that overlaps this sample, if any.
    ///
    /// Handles chunks that cover the sample partially, fully, or not at
    /// all, and samples that span several chunks.
    pub fn absorb_chunk(&mut self, chunk: &[u8], chunk_start: u64) {
        let chunk_end = chunk_start + chunk.len() as u64;
        let s_start = self.range.offset;
        let s_end = self.range.end();

        if s_end <= chunk_start || s_start >= chunk_end {
            return;
        }

        let overlap_start = s_start.max(chunk_start);
        let overlap_end = s_end.min(chunk_end);

        let sample_i0 = (overlap_start - s_start) as usize;
        let sample_i1 = (overlap_end - s_start) as usize;
        let chunk_i0 = (overlap_start - chunk_start) as usize;
        let chunk_i1 = (overlap_end - chunk_start) as usize;

        self.expected[sample_i0..sample_i1].copy_from_slice(&chunk[chunk_i0..chunk_i1]);
        for slot in &mut self.filled[sample_i0..sample_i1] {
            *slot = true;
        }
    }

    /// Whether every byte of the sample has been captured.
    pub fn is_complete(&self) -> bool {
        self.filled.iter().all(|&f| f)
    }
}
