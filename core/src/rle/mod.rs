//! rle/mod.rs
//! Run-length codec: 5-byte records of (u32 LE length, u8 value).
//!
//! - `encode` turns a byte stream into records, one per maximal run.
//! - `decode` expands records back into bytes.
//! - Both are chunk-driven so neither buffers a whole input or output.

pub mod types;
pub mod record;
pub mod encode;
pub mod decode;

pub use types::*;
pub use record::{encode_record, parse_record, records, write_record};
pub use encode::{encode, encode_runs, RleEncoder, RunAccumulator};
pub use decode::{decode, DecodeState, RleDecoder};
