//! telemetry/snapshot.rs
//!
//! Immutable view of one codec run: counters, ratio, throughput and stage timings.

use std::time::Duration;
use serde::{Deserialize, Serialize};

use crate::telemetry::counters::TelemetryCounters;
use crate::telemetry::timers::{Stage, StageTimes, TelemetryTimer};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TelemetrySnapshot {
    pub sources: u64,
    pub records: u64,
    pub bytes_in: u64,
    pub bytes_out: u64,
    pub split_runs: u64,
    pub discarded_fragments: u64,
    pub lines_matched: u64,
    /// `bytes_out / bytes_in`; above 1.0 when the output grew.
    pub ratio: f64,
    pub throughput_bytes_per_sec: f64,
    pub elapsed: Duration,
    pub stage_times: StageTimes,
}

impl TelemetrySnapshot {
    pub fn from(counters: &TelemetryCounters, timer: &TelemetryTimer) -> Self {
        let elapsed = timer.elapsed();

        let ratio = if counters.bytes_in > 0 {
            counters.bytes_out as f64 / counters.bytes_in as f64
        } else {
            0.0
        };

        let throughput = if elapsed.as_secs_f64() > 0.0 {
            counters.bytes_in as f64 / elapsed.as_secs_f64()
        } else {
            0.0
        };

        Self {
            sources: counters.sources,
            records: counters.records,
            bytes_in: counters.bytes_in,
            bytes_out: counters.bytes_out,
            split_runs: counters.split_runs,
            discarded_fragments: counters.discarded_fragments,
            lines_matched: counters.lines_matched,
            ratio,
            throughput_bytes_per_sec: throughput,
            elapsed,
            stage_times: timer.stage_times,
        }
    }

    pub fn total_stage_time(&self) -> Duration {
        self.stage_times.total()
    }

    pub fn has_all_stages(&self, expected: &[Stage]) -> bool {
        expected.iter().all(|s| self.stage_times.get(*s) > Duration::ZERO)
    }

    /// Validates internal invariants:
    /// - `total_stage_time() <= elapsed`
    /// - `ratio` is zero when nothing was read
    pub fn sanity_check(&self) -> bool {
        self.total_stage_time() <= self.elapsed && (self.bytes_in > 0 || self.ratio == 0.0)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
