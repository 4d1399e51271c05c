//! stream/core.rs
//! Stable public API: multi-source encode and decode over `Read`/`Write`.
//!
//! Design notes:
//! - Sources are opened lazily, one at a time, in order.
//! - Output is written as each read chunk is processed; nothing is rolled back on failure.
//! - The encoder's pending run is flushed only after the last source, so a
//!   failing source leaves it unwritten.

use std::io::Write;
use tracing::{debug, trace};

use crate::constants::{MAX_READ_BUF, MIN_READ_BUF};
use crate::rle::{Compressor, Decompressor, RleDecoder, RleEncoder, TrailingPolicy};
use crate::stream::io::{open_input, read_full, InputSource};
use crate::telemetry::{Stage, TelemetryCounters, TelemetrySnapshot, TelemetryTimer};
use crate::types::StreamError;
use crate::utils::clamp_buffer_size;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodecConfig {
    /// Bytes requested from a source per read.
    pub read_buf_size: usize,

    /// Decoder behaviour on a partial trailing record or zero-length run.
    pub trailing: TrailingPolicy,

    /// Whether to collect per-stage timings. The wall clock is always kept.
    pub collect_timings: bool,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            read_buf_size: clamp_buffer_size(None),
            trailing: TrailingPolicy::Reject,
            collect_timings: false,
        }
    }
}

impl CodecConfig {
    pub fn new(
        read_buf_size: Option<usize>,
        trailing: Option<TrailingPolicy>,
        collect_timings: Option<bool>,
    ) -> Self {
        Self {
            read_buf_size: clamp_buffer_size(read_buf_size),
            trailing: trailing.unwrap_or_default(),
            collect_timings: collect_timings.unwrap_or(false),
        }
    }

    pub fn lenient() -> Self {
        Self { trailing: TrailingPolicy::Ignore, ..Self::default() }
    }

    pub fn validate(&self) -> Result<(), StreamError> {
        if !(MIN_READ_BUF..=MAX_READ_BUF).contains(&self.read_buf_size) {
            return Err(StreamError::Validation(format!(
                "invalid read buffer size: {}, must be within {}..={}",
                self.read_buf_size, MIN_READ_BUF, MAX_READ_BUF
            )));
        }
        Ok(())
    }
}

/// Encode the concatenation of `sources` into one compressed stream on `out`.
pub fn encode_sources<I, W>(
    sources: I,
    out: &mut W,
    config: &CodecConfig,
) -> Result<TelemetrySnapshot, StreamError>
where
    I: IntoIterator<Item = InputSource>,
    W: Write,
{
    config.validate()?;
    let sources: Vec<InputSource> = sources.into_iter().collect();
    if sources.is_empty() {
        return Err(StreamError::Usage);
    }

    let mut counters = TelemetryCounters::default();
    let mut timer = TelemetryTimer::new(config.collect_timings);
    let mut encoder = RleEncoder::new();
    let mut buf = vec![0u8; config.read_buf_size];

    for (index, src) in sources.into_iter().enumerate() {
        let name = src.name();
        let mut reader = open_input(src)
            .map_err(|e| StreamError::source_unavailable(index, name.as_str(), e))?;
        debug!(index, source = %name, "encoding source");

        loop {
            let n = timer
                .time(Stage::Read, || read_full(&mut reader, &mut buf))
                .map_err(|e| StreamError::source_unavailable(index, name.as_str(), e))?;
            if n == 0 {
                break;
            }
            let records = timer.time(Stage::Encode, || encoder.compress_chunk(&buf[..n], &mut *out))?;
            trace!(index, bytes = n, records, "encoded chunk");
            counters.add_encoded(n, records);
        }
        counters.add_source();
    }

    let records = timer.time(Stage::Encode, || encoder.finish(&mut *out))?;
    counters.add_encoded(0, records);
    counters.split_runs = encoder.split_runs();
    out.flush()?;

    timer.finish();
    debug!(records = counters.records, bytes_in = counters.bytes_in, "encode finished");
    Ok(TelemetrySnapshot::from(&counters, &timer))
}

/// Decode each source's compressed stream, writing the concatenated plaintext to `out`.
pub fn decode_sources<I, W>(
    sources: I,
    out: &mut W,
    config: &CodecConfig,
) -> Result<TelemetrySnapshot, StreamError>
where
    I: IntoIterator<Item = InputSource>,
    W: Write,
{
    config.validate()?;
    let sources: Vec<InputSource> = sources.into_iter().collect();
    if sources.is_empty() {
        return Err(StreamError::Usage);
    }

    let mut counters = TelemetryCounters::default();
    let mut timer = TelemetryTimer::new(config.collect_timings);
    let mut decoder = RleDecoder::new(config.trailing);
    let mut buf = vec![0u8; config.read_buf_size];

    for (index, src) in sources.into_iter().enumerate() {
        let name = src.name();
        let mut reader = open_input(src)
            .map_err(|e| StreamError::source_unavailable(index, name.as_str(), e))?;
        debug!(index, source = %name, "decoding source");

        loop {
            let n = timer
                .time(Stage::Read, || read_full(&mut reader, &mut buf))
                .map_err(|e| StreamError::source_unavailable(index, name.as_str(), e))?;
            if n == 0 {
                break;
            }
            let written = timer.time(Stage::Decode, || decoder.decompress_chunk(&buf[..n], &mut *out))?;
            trace!(index, bytes = n, written, "decoded chunk");
            counters.add_decoded(n, written);
        }
        decoder.end_source()?;
        counters.add_source();
    }
    out.flush()?;

    counters.records = decoder.records();
    counters.discarded_fragments = decoder.discarded();
    timer.finish();
    debug!(records = counters.records, bytes_out = counters.bytes_out, "decode finished");
    Ok(TelemetrySnapshot::from(&counters, &timer))
}
