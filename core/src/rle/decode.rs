//! rle/decode.rs
//! Record parsing and run expansion.
//!
//! Per source the decoder moves through
//! `Idle -> ReadingLength -> ReadingValue -> Emitting -> ReadingLength ... -> Exhausted`.
//! Record framing survives arbitrary chunk boundaries: a partial record is
//! carried in a 5-byte buffer until the next chunk completes it.

use std::io::Write;
use tracing::warn;

use crate::constants::{FILL_BUF_LEN, LENGTH_FIELD_LEN, RECORD_LEN};
use crate::rle::record::{parse_record, records};
use crate::rle::types::{DecodeFailure, Decompressor, RleError, Run, TrailingPolicy};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeState {
    Idle,
    ReadingLength,
    ReadingValue,
    Emitting,
    Exhausted,
}

/// Streaming run-length decoder.
#[derive(Debug)]
pub struct RleDecoder {
    policy: TrailingPolicy,
    state: DecodeState,
    pending: [u8; RECORD_LEN],
    filled: usize,
    record_index: u64,
    records: u64,
    discarded: u64,
    fill: Vec<u8>,
    fill_value: Option<u8>,
}

impl RleDecoder {
    pub fn new(policy: TrailingPolicy) -> Self {
        Self {
            policy,
            state: DecodeState::Idle,
            pending: [0u8; RECORD_LEN],
            filled: 0,
            record_index: 0,
            records: 0,
            discarded: 0,
            fill: vec![0u8; FILL_BUF_LEN],
            fill_value: None,
        }
    }

    pub fn state(&self) -> DecodeState {
        self.state
    }

    /// Records expanded so far, across all sources.
    pub fn records(&self) -> u64 {
        self.records
    }

    /// Fragments and zero-length records dropped under `TrailingPolicy::Ignore`.
    pub fn discarded(&self) -> u64 {
        self.discarded
    }

    fn partial_state(&self) -> DecodeState {
        if self.filled < LENGTH_FIELD_LEN {
            DecodeState::ReadingLength
        } else {
            DecodeState::ReadingValue
        }
    }

    fn emit(&mut self, run: Run, out: &mut dyn Write) -> Result<u64, DecodeFailure> {
        self.record_index += 1;
        if run.length == 0 {
            match self.policy {
                TrailingPolicy::Reject => {
                    return Err(RleError::ZeroLengthRun { record_index: self.record_index }.into());
                }
                TrailingPolicy::Ignore => {
                    warn!(record_index = self.record_index, "ignoring zero-length run");
                    self.discarded += 1;
                    return Ok(0);
                }
            }
        }

        self.state = DecodeState::Emitting;
        if self.fill_value != Some(run.value) {
            self.fill.fill(run.value);
            self.fill_value = Some(run.value);
        }

        let mut remaining = run.expanded_len();
        while remaining > 0 {
            let n = remaining.min(FILL_BUF_LEN as u64) as usize;
            out.write_all(&self.fill[..n])?;
            remaining -= n as u64;
        }

        self.records += 1;
        self.state = DecodeState::ReadingLength;
        Ok(run.expanded_len())
    }
}

impl Decompressor for RleDecoder {
    fn decompress_chunk(&mut self, input: &[u8], out: &mut dyn Write) -> Result<u64, DecodeFailure> {
        let mut written = 0u64;
        let mut rest = input;

        if !rest.is_empty() && matches!(self.state, DecodeState::Idle | DecodeState::Exhausted) {
            self.state = DecodeState::ReadingLength;
        }

        while !rest.is_empty() {
            if self.filled > 0 || rest.len() < RECORD_LEN {
                let take = (RECORD_LEN - self.filled).min(rest.len());
                self.pending[self.filled..self.filled + take].copy_from_slice(&rest[..take]);
                self.filled += take;
                rest = &rest[take..];

                if self.filled < RECORD_LEN {
                    self.state = self.partial_state();
                    break;
                }
                let run = parse_record(&self.pending)?;
                self.filled = 0;
                written += self.emit(run, out)?;
            } else {
                let run = parse_record(&rest[..RECORD_LEN])?;
                rest = &rest[RECORD_LEN..];
                written += self.emit(run, out)?;
            }
        }

        Ok(written)
    }

    fn end_source(&mut self) -> Result<(), RleError> {
        let trailing = std::mem::take(&mut self.filled);
        self.state = DecodeState::Exhausted;
        if trailing == 0 {
            return Ok(());
        }
        match self.policy {
            TrailingPolicy::Reject => Err(RleError::trailing(trailing)),
            TrailingPolicy::Ignore => {
                warn!(trailing, "ignoring partial trailing record");
                self.discarded += 1;
                Ok(())
            }
        }
    }
}

/// Decode an in-memory compressed stream.
pub fn decode(wire: &[u8], policy: TrailingPolicy) -> Result<Vec<u8>, RleError> {
    let mut out = Vec::new();
    for (i, record) in records(wire).enumerate() {
        let run = match (record, policy) {
            (Ok(run), _) if run.length > 0 => run,
            (Ok(_), TrailingPolicy::Reject) => {
                return Err(RleError::ZeroLengthRun { record_index: i as u64 + 1 });
            }
            (Err(e), TrailingPolicy::Reject) => return Err(e),
            (_, TrailingPolicy::Ignore) => continue,
        };
        out.resize(out.len() + run.length as usize, run.value);
    }
    Ok(out)
}
