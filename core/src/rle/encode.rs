//! rle/encode.rs
//! Run detection and record emission.
//!
//! Design notes:
//! - The current run lives in an explicit `RunAccumulator` owned by one encoder.
//! - Runs spanning chunk or source boundaries are never split; only `finish` flushes.
//! - A run reaching `MAX_RUN_LEN` is emitted and continued in a fresh record.

use std::io::Write;

use crate::constants::{MAX_RUN_LEN, RECORD_LEN};
use crate::rle::record::write_record;
use crate::rle::types::{Compressor, Run};

/// Accumulates the run currently being built.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RunAccumulator {
    current: Option<Run>,
    split_runs: u64,
}

impl RunAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// The run being accumulated, if any.
    pub fn pending(&self) -> Option<Run> {
        self.current
    }

    /// How many times a run was cut at `MAX_RUN_LEN`.
    pub fn split_runs(&self) -> u64 {
        self.split_runs
    }

    /// Feed a single byte. Returns the run it completed, if any.
    pub fn push(&mut self, b: u8) -> Option<Run> {
        let mut completed = None;
        self.push_span(b, 1, |run| completed = Some(run));
        completed
    }

    /// Feed `count` consecutive copies of `value`, calling `emit` for every completed run.
    pub fn push_span<F: FnMut(Run)>(&mut self, value: u8, mut count: u64, mut emit: F) {
        while count > 0 {
            match self.current.as_mut() {
                Some(run) if run.value == value => {
                    if run.length == MAX_RUN_LEN {
                        emit(*run);
                        self.split_runs += 1;
                        self.current = None;
                        continue;
                    }
                    let take = count.min((MAX_RUN_LEN - run.length) as u64);
                    run.length += take as u32;
                    count -= take;
                }
                Some(run) => {
                    emit(*run);
                    self.current = None;
                }
                None => {
                    let take = count.min(MAX_RUN_LEN as u64);
                    self.current = Some(Run::new(take as u32, value));
                    count -= take;
                }
            }
        }
    }

    /// Take the pending run, leaving the accumulator empty.
    pub fn flush(&mut self) -> Option<Run> {
        self.current.take()
    }
}

/// Streaming run-length encoder writing 5-byte records.
#[derive(Debug, Default)]
pub struct RleEncoder {
    acc: RunAccumulator,
    scratch: Vec<u8>,
}

impl RleEncoder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn split_runs(&self) -> u64 {
        self.acc.split_runs()
    }

    fn drain_scratch(&mut self, out: &mut dyn Write) -> std::io::Result<u64> {
        let records = (self.scratch.len() / RECORD_LEN) as u64;
        if !self.scratch.is_empty() {
            out.write_all(&self.scratch)?;
            self.scratch.clear();
        }
        Ok(records)
    }
}

impl Compressor for RleEncoder {
    fn compress_chunk(&mut self, input: &[u8], out: &mut dyn Write) -> std::io::Result<u64> {
        let Self { acc, scratch } = self;
        let mut rest = input;
        while let Some(&value) = rest.first() {
            let span = rest.iter().take_while(|&&b| b == value).count();
            acc.push_span(value, span as u64, |run| {
                // Writing into a Vec cannot fail.
                let _ = write_record(&mut *scratch, &run);
            });
            rest = &rest[span..];
        }
        self.drain_scratch(out)
    }

    fn finish(&mut self, out: &mut dyn Write) -> std::io::Result<u64> {
        if let Some(run) = self.acc.flush() {
            write_record(&mut self.scratch, &run)?;
        }
        self.drain_scratch(out)
    }
}

/// Encode an in-memory buffer into the list of its runs.
pub fn encode_runs(input: &[u8]) -> Vec<Run> {
    let mut acc = RunAccumulator::new();
    let mut runs = Vec::new();
    for &b in input {
        if let Some(run) = acc.push(b) {
            runs.push(run);
        }
    }
    runs.extend(acc.flush());
    runs
}

/// Encode an in-memory buffer into a compressed stream.
pub fn encode(input: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(RECORD_LEN * 4);
    let mut enc = RleEncoder::new();
    // Writes into a Vec are infallible.
    let _ = enc.compress_chunk(input, &mut out);
    let _ = enc.finish(&mut out);
    out
}
