//! text/cat.rs
//! Byte-for-byte copy of sources to a sink.

use std::io::{self, Read, Write};
use thiserror::Error;
use tracing::debug;

use crate::stream::{open_input, read_full, CodecConfig, InputSource};
use crate::telemetry::{Stage, TelemetryCounters, TelemetrySnapshot, TelemetryTimer};
use crate::types::StreamError;

/// Which side of a copy failed.
#[derive(Debug, Error)]
pub enum CopyError {
    #[error("read failed: {0}")]
    Read(#[source] io::Error),
    #[error("write failed: {0}")]
    Write(#[source] io::Error),
}

/// Copy everything from `r` to `w` through `buf`. Returns the byte count.
pub fn stream_bytes<R, W>(r: &mut R, w: &mut W, buf: &mut [u8]) -> Result<u64, CopyError>
where
    R: Read + ?Sized,
    W: Write + ?Sized,
{
    let mut total = 0u64;
    loop {
        let n = read_full(r, buf).map_err(CopyError::Read)?;
        if n == 0 {
            return Ok(total);
        }
        w.write_all(&buf[..n]).map_err(CopyError::Write)?;
        total += n as u64;
    }
}

/// Print each source in turn. An empty source list is not an error.
pub fn cat_sources<I, W>(
    sources: I,
    out: &mut W,
    config: &CodecConfig,
) -> Result<TelemetrySnapshot, StreamError>
where
    I: IntoIterator<Item = InputSource>,
    W: Write,
{
    config.validate()?;
    let mut counters = TelemetryCounters::default();
    let mut timer = TelemetryTimer::new(config.collect_timings);
    let mut buf = vec![0u8; config.read_buf_size];

    for (index, src) in sources.into_iter().enumerate() {
        let name = src.name();
        let mut reader = open_input(src)
            .map_err(|e| StreamError::source_unavailable(index, name.as_str(), e))?;
        debug!(index, source = %name, "copying source");

        let copied = timer
            .time(Stage::Write, || stream_bytes(&mut reader, &mut *out, &mut buf))
            .map_err(|e| match e {
                CopyError::Read(e) => StreamError::source_unavailable(index, name.as_str(), e),
                CopyError::Write(e) => StreamError::Io(e),
            })?;
        counters.add_copied(copied);
        counters.add_source();
    }
    out.flush()?;

    timer.finish();
    Ok(TelemetrySnapshot::from(&counters, &timer))
}
