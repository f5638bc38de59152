//! Overwrite passes and the destructive deletion sequence.

mod delete;
mod overwrite;
mod passes;
mod target;

pub use delete::finalize;
pub use overwrite::run_pass;
pub use passes::{pass_count, run_passes, PassResult, VerificationOutcome};
pub use target::{wipe_file, Disposition, WipeEvent, WipeReport};
