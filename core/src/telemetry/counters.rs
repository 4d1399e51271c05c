//! telemetry/counters.rs
//! Mutable counters used during a codec run.
//!
//! Summary: Collects source, record and byte counts during encode/decode.
//! Converted into an immutable TelemetrySnapshot at the end of the run.
use std::ops::AddAssign;
use serde::{Deserialize, Serialize};

use crate::constants::RECORD_LEN;

/// Deterministic counters collected during stream processing
#[derive(Default, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TelemetryCounters {
    pub sources: u64,
    pub records: u64,
    pub bytes_in: u64,
    pub bytes_out: u64,
    pub split_runs: u64,
    pub discarded_fragments: u64,
    pub lines_matched: u64,
}

impl TelemetryCounters {
    /// Record one source fully consumed.
    pub fn add_source(&mut self) {
        self.sources += 1;
    }

    /// Record plaintext consumed and records produced by the encoder.
    pub fn add_encoded(&mut self, plaintext_len: usize, records: u64) {
        self.bytes_in += plaintext_len as u64;
        self.records += records;
        self.bytes_out += records * RECORD_LEN as u64;
    }

    /// Record compressed bytes consumed and plaintext produced by the decoder.
    pub fn add_decoded(&mut self, wire_len: usize, plaintext_len: u64) {
        self.bytes_in += wire_len as u64;
        self.bytes_out += plaintext_len;
    }

    /// Record raw bytes copied through unchanged.
    pub fn add_copied(&mut self, len: u64) {
        self.bytes_in += len;
        self.bytes_out += len;
    }

    pub fn merge(&mut self, other: &TelemetryCounters) {
        self.sources += other.sources;
        self.records += other.records;
        self.bytes_in += other.bytes_in;
        self.bytes_out += other.bytes_out;
        self.split_runs += other.split_runs;
        self.discarded_fragments += other.discarded_fragments;
        self.lines_matched += other.lines_matched;
    }
}

impl AddAssign for TelemetryCounters {
    fn add_assign(&mut self, rhs: Self) {
        self.merge(&rhs);
    }
}
