//! rle-core
//!
//! Streaming run-length codec (5-byte records of u32 LE length + u8 value)
//! and the small text helpers behind the `w*` utilities.
//! No process handling, no exit codes.

#![forbid(unsafe_code)]

// Shared and top level
pub mod constants;
pub mod types;
pub mod utils;

pub mod rle;
pub mod telemetry;
pub mod text;

// Stream layer
pub mod stream;

// -----------------------------------------------------------------------------
// Prelude (Rust users)
// -----------------------------------------------------------------------------
pub mod prelude {
    pub use crate::rle::{decode, encode, Run, RleError, TrailingPolicy};
    pub use crate::stream::{decode_sources, encode_sources, CodecConfig, InputSource};
    pub use crate::telemetry::TelemetrySnapshot;
    pub use crate::text::{cat_sources, grep_sources};
    pub use crate::types::StreamError;
}
