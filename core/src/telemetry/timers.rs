//! telemetry/timers.rs
//! Stage timers for codec runs.
//!
//! Summary: Records durations for the read, encode/decode and write stages.

use std::fmt;
use std::time::{Duration, Instant};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Stage {
    Read,
    Encode,
    Decode,
    Write,
}

impl Stage {
    pub const COUNT: usize = 4;
    pub const ALL: [Stage; Stage::COUNT] = [Stage::Read, Stage::Encode, Stage::Decode, Stage::Write];

    fn slot(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::Read   => "read",
            Stage::Encode => "encode",
            Stage::Decode => "decode",
            Stage::Write  => "write",
        };
        f.write_str(name)
    }
}

/// Accumulated time per stage, one slot per `Stage`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct StageTimes {
    slots: [Duration; Stage::COUNT],
}

impl StageTimes {
    pub fn add(&mut self, stage: Stage, dur: Duration) {
        self.slots[stage.slot()] += dur;
    }

    pub fn get(&self, stage: Stage) -> Duration {
        self.slots[stage.slot()]
    }

    pub fn get_ms(&self, stage: Stage) -> f64 {
        self.get(stage).as_secs_f64() * 1e3
    }

    pub fn total(&self) -> Duration {
        self.slots.iter().sum()
    }

    /// True when no stage has been charged any time.
    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Duration::is_zero)
    }

    /// Stages with non-zero time, in pipeline order.
    pub fn iter(&self) -> impl Iterator<Item = (Stage, Duration)> + '_ {
        Stage::ALL
            .iter()
            .map(move |&s| (s, self.get(s)))
            .filter(|(_, d)| !d.is_zero())
    }
}

/// Wall clock for a whole run plus optional per-stage times.
#[derive(Clone, Debug)]
pub struct TelemetryTimer {
    pub start_time: Instant,
    pub end_time: Option<Instant>,
    pub stage_times: StageTimes,
    enabled: bool,
}

impl Default for TelemetryTimer {
    fn default() -> Self {
        Self::new(true)
    }
}

impl TelemetryTimer {
    /// `stages = false` keeps only the wall clock; `time` then skips the Instant calls.
    pub fn new(stages: bool) -> Self {
        Self {
            start_time: Instant::now(),
            end_time: None,
            stage_times: StageTimes::default(),
            enabled: stages,
        }
    }

    pub fn finish(&mut self) {
        self.end_time = Some(Instant::now());
    }

    pub fn add_stage_time(&mut self, stage: Stage, dur: Duration) {
        self.stage_times.add(stage, dur);
    }

    /// Run `f`, charging its duration to `stage` when stage timing is on.
    pub fn time<T>(&mut self, stage: Stage, f: impl FnOnce() -> T) -> T {
        if !self.enabled {
            return f();
        }
        let t = Instant::now();
        let out = f();
        self.add_stage_time(stage, t.elapsed());
        out
    }

    pub fn elapsed(&self) -> Duration {
        match self.end_time {
            Some(end) => end.duration_since(self.start_time),
            None => Instant::now().duration_since(self.start_time),
        }
    }
}
