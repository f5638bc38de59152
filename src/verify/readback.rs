//! Read-back comparison of sampled ranges after a durable pass.

use crate::error::{Error, Result};
use crate::platform;
use crate::verify::SampleCapture;
use std::fs::File;
use std::io::{Read, Seek, SeekFrom};

/// Re-read every captured sample range from `file` and compare it
/// byte-for-byte against the captured expectation.
///
/// Preconditions: the pass the captures belong to must have been synced to
/// storage. Every capture must be complete; an incomplete fill mask aborts
/// with [`Error::SampleNotCaptured`] before any read is issued, since it
/// indicates the tracker missed chunk coverage.
///
/// A mismatch fails with [`Error::VerificationMismatch`] carrying the
/// absolute file offset of the first differing byte.
///
/// Reads only; file content is never mutated. When `drop_cache` is set the
/// page-cache hint is re-issued after the reads, mirroring the write path.
pub fn verify_pass(
    file: &mut File,
    pass: u32,
    captures: &[SampleCapture],
    drop_cache: bool,
) -> Result<()> {
    for (index, capture) in captures.iter().enumerate() {
        if !capture.is_complete() {
            return Err(Error::SampleNotCaptured {
                pass,
                sample: index + 1,
            });
        }
    }

    let mut buf = Vec::new();
    let mut max_end = 0u64;

    for (index, capture) in captures.iter().enumerate() {
        let range = capture.range();
        max_end = max_end.max(range.end());

        buf.resize(range.length, 0);
        file.seek(SeekFrom::Start(range.offset))?;
        file.read_exact(&mut buf)?;

        if let Some(pos) = buf
            .iter()
            .zip(capture.expected())
            .position(|(got, want)| got != want)
        {
            return Err(Error::VerificationMismatch {
                pass,
                sample: index + 1,
                offset: range.offset + pos as u64,
            });
        }
    }

    if drop_cache {
        platform::drop_page_cache_best_effort(file, max_end);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::verify::SampleRange;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn file_with(content: &[u8]) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content).unwrap();
        file.flush().unwrap();
        file
    }

    fn complete_capture(offset: u64, bytes: &[u8]) -> SampleCapture {
        let mut cap = SampleCapture::new(SampleRange {
            offset,
            length: bytes.len(),
        });
        cap.absorb_chunk(bytes, offset);
        assert!(cap.is_complete());
        cap
    }

    #[test]
    fn test_matching_samples_pass() {
        let content: Vec<u8> = (0..128).collect();
        let tmp = file_with(&content);
        let captures = vec![
            complete_capture(0, &content[0..16]),
            complete_capture(100, &content[100..128]),
        ];

        let mut file = File::open(tmp.path()).unwrap();
        verify_pass(&mut file, 1, &captures, false).unwrap();
    }

    #[test]
    fn test_mismatch_reports_exact_offset() {
        let mut content: Vec<u8> = (0..128).collect();
        let captures = vec![complete_capture(32, &content[32..96])];

        // Corrupt one byte inside the sampled range after capture.
        content[70] ^= 0xFF;
        let tmp = file_with(&content);

        let mut file = File::open(tmp.path()).unwrap();
        let err = verify_pass(&mut file, 2, &captures, false).unwrap_err();
        match err {
            Error::VerificationMismatch {
                pass,
                sample,
                offset,
            } => {
                assert_eq!(pass, 2);
                assert_eq!(sample, 1);
                assert_eq!(offset, 70);
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_incomplete_capture_is_consistency_error() {
        let content = [0u8; 64];
        let tmp = file_with(&content);

        let mut partial = SampleCapture::new(SampleRange {
            offset: 0,
            length: 32,
        });
        partial.absorb_chunk(&content[..16], 0);
        assert!(!partial.is_complete());

        let mut file = File::open(tmp.path()).unwrap();
        let err = verify_pass(&mut file, 1, &[partial], false).unwrap_err();
        assert!(matches!(
            err,
            Error::SampleNotCaptured { pass: 1, sample: 1 }
        ));
    }

    #[test]
    fn test_sample_ending_at_file_end() {
        let content: Vec<u8> = (0..64).collect();
        let tmp = file_with(&content);
        let captures = vec![complete_capture(48, &content[48..64])];

        let mut file = File::open(tmp.path()).unwrap();
        verify_pass(&mut file, 1, &captures, false).unwrap();
    }
}
