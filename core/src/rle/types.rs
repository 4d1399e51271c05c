//! rle/types.rs
//! Run model, record errors and the chunked codec traits.
use std::io::Write;
use thiserror::Error;

use crate::constants::RECORD_LEN;

/// One run of identical bytes. `length` is always >= 1 once emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Run {
    pub length: u32,
    pub value: u8,
}

impl Run {
    pub const fn new(length: u32, value: u8) -> Self {
        Self { length, value }
    }

    /// Number of plaintext bytes this run expands to.
    pub fn expanded_len(&self) -> u64 {
        self.length as u64
    }
}

/// What the decoder does with a partial trailing record or a zero-length run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TrailingPolicy {
    /// Fail with `RleError::MalformedRecord` / `RleError::ZeroLengthRun`.
    #[default]
    Reject,
    /// Drop the offending bytes, log a warning and continue.
    Ignore,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RleError {
    /// A source ended in the middle of a record.
    #[error("malformed record: {trailing} trailing byte(s), expected {expected}")]
    MalformedRecord { trailing: usize, expected: usize },

    /// A record carried a run length of zero.
    #[error("zero-length run at record {record_index}")]
    ZeroLengthRun { record_index: u64 },

    /// A slice handed to the record parser was shorter than a record.
    #[error("truncated record: have {have}, need {need}")]
    Truncated { have: usize, need: usize },
}

impl RleError {
    pub fn trailing(trailing: usize) -> Self {
        RleError::MalformedRecord { trailing, expected: RECORD_LEN }
    }
}

/// Streaming encoder: consumes plaintext chunks, writes completed records.
pub trait Compressor {
    /// Feed one chunk of plaintext. Completed records are written to `out`.
    /// Returns the number of records written.
    fn compress_chunk(&mut self, input: &[u8], out: &mut dyn Write) -> std::io::Result<u64>;
    /// Flush the pending run, if any. Returns the number of records written.
    fn finish(&mut self, out: &mut dyn Write) -> std::io::Result<u64>;
}

/// Streaming decoder: consumes record bytes in arbitrary chunks, writes expanded runs.
pub trait Decompressor {
    /// Feed one chunk of compressed bytes. Returns plaintext bytes written.
    fn decompress_chunk(&mut self, input: &[u8], out: &mut dyn Write) -> Result<u64, DecodeFailure>;
    /// Close the current source, checking record framing.
    fn end_source(&mut self) -> Result<(), RleError>;
}

/// Decoder failure: either the sink failed or the input was malformed.
#[derive(Debug, Error)]
pub enum DecodeFailure {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Rle(#[from] RleError),
}
