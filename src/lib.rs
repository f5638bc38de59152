//! Stream Shred
//!
//! Best-effort secure erasure of files on a mounted filesystem: several
//! streamed passes of cryptographically strong random data, optional
//! sampled read-back verification, and a rename/truncate/unlink deletion
//! sequence with metadata-durability hints.
//!
//! # Features
//!
//! - **Streaming overwrite**: bounded memory regardless of file size
//! - **Sampled verification**: expected bytes captured during streaming,
//!   compared byte-for-byte after each durable pass
//! - **Destructive deletion**: randomized renames, truncate, unlink, each
//!   with best-effort directory sync
//! - **CLI Interface**: command-line tool over the same library core
//!
//! # Architecture
//!
//! ```text
//! Pass Controller → Overwrite Engine → Sample Capture (inline)
//!                 → Verifier → … → Deletion Sequencer
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! use stream_shred::{wipe_file, WipeConfig};
//! use std::path::Path;
//!
//! let config = WipeConfig {
//!     min_passes: 3,
//!     max_passes: 3,
//!     randomize_pass_count: false,
//!     verify: true,
//!     ..Default::default()
//! };
//!
//! let report = wipe_file(Path::new("./sensitive.dat"), &config, &mut |_| {}).unwrap();
//! assert_eq!(report.passes.len(), 3);
//! ```
//!
//! # SSD/NVMe caveat
//!
//! On flash storage with wear-leveling, and on copy-on-write filesystems,
//! the controller or filesystem may remap blocks, so a file-level
//! overwrite is probabilistic at best. For high assurance there, prefer
//! encrypted containers with key destruction or device sanitize commands.

pub mod config;
pub mod error;
pub mod platform;
pub mod rng;
pub mod verify;
pub mod wipe;

pub use config::WipeConfig;
pub use error::{Error, Result};
pub use wipe::{wipe_file, Disposition, PassResult, WipeEvent, WipeReport};
