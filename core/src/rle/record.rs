//! rle/record.rs
//!
//! Record framing.
//!
//! Layout (5 bytes, no padding):
//!
//! ```text
//! [ length (4, u32 little-endian) ]
//! [ value  (1) ]
//! ```
//!
//! The byte order is fixed little-endian on every host.

use std::io::Write;
use byteorder::{ByteOrder, LittleEndian, WriteBytesExt};

use crate::constants::{LENGTH_FIELD_LEN, RECORD_LEN};
use crate::rle::types::{RleError, Run};

/// Encode a run into its canonical 5-byte record.
#[inline]
pub fn encode_record(run: &Run) -> [u8; RECORD_LEN] {
    let mut out = [0u8; RECORD_LEN];
    LittleEndian::write_u32(&mut out[..LENGTH_FIELD_LEN], run.length);
    out[LENGTH_FIELD_LEN] = run.value;
    out
}

/// Write a run as one record to `w`.
#[inline]
pub fn write_record<W: Write + ?Sized>(w: &mut W, run: &Run) -> std::io::Result<()> {
    w.write_u32::<LittleEndian>(run.length)?;
    w.write_u8(run.value)
}

/// Parse one record from the front of `wire`.
///
/// Does not reject zero-length runs; the decoder decides what to do with them.
#[inline]
pub fn parse_record(wire: &[u8]) -> Result<Run, RleError> {
    if wire.len() < RECORD_LEN {
        return Err(RleError::Truncated { have: wire.len(), need: RECORD_LEN });
    }
    let length = LittleEndian::read_u32(&wire[..LENGTH_FIELD_LEN]);
    Ok(Run::new(length, wire[LENGTH_FIELD_LEN]))
}

/// Iterate over the complete records of an in-memory compressed stream.
///
/// A trailing fragment shorter than a record is yielded as `Err(MalformedRecord)`.
pub fn records(wire: &[u8]) -> impl Iterator<Item = Result<Run, RleError>> + '_ {
    let mut chunks = wire.chunks(RECORD_LEN);
    std::iter::from_fn(move || {
        let chunk = chunks.next()?;
        if chunk.len() < RECORD_LEN {
            return Some(Err(RleError::trailing(chunk.len())));
        }
        Some(parse_record(chunk))
    })
}
