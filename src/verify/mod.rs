//! Sampled read-back verification.
//!
//! While a pass streams random data across the file, the expected bytes of
//! a handful of randomly planned ranges are captured in bounded memory.
//! After the pass is durable, those ranges are re-read and compared.

mod capture;
mod plan;
mod readback;

pub use capture::SampleCapture;
pub use plan::{plan_samples, SampleRange};
pub use readback::verify_pass;
