//! Multi-source streaming over the codec.
//!
//! Responsibilities:
//! - Open sources in order and read them in fixed-size chunks
//! - Drive the encoder/decoder and collect telemetry
//!
//! Non-responsibilities:
//! - Record layout (see `rle::record`)
//! - Process exit codes and diagnostics (see the cli crate)

pub mod core;
pub mod io;

pub use self::core::{decode_sources, encode_sources, CodecConfig};
pub use self::io::{open_input, read_full, InputSource};
