//! text/grep.rs
//! Print the lines of each source that contain a search term.

use std::io::{BufReader, Write};
use tracing::debug;

use crate::stream::{open_input, CodecConfig, InputSource};
use crate::telemetry::{Stage, TelemetryCounters, TelemetrySnapshot, TelemetryTimer};
use crate::text::lines::LineReader;
use crate::types::StreamError;
use crate::utils::contains_subslice;

/// Case-sensitive substring match; the empty term matches every line.
pub fn line_matches(line: &[u8], term: &[u8]) -> bool {
    contains_subslice(line, term)
}

/// Write every matching line of every source to `out`, each followed by `\n`.
pub fn grep_sources<I, W>(
    term: &[u8],
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

    for (index, src) in sources.into_iter().enumerate() {
        let name = src.name();
        let reader = open_input(src)
            .map_err(|e| StreamError::source_unavailable(index, name.as_str(), e))?;
        debug!(index, source = %name, "searching source");

        let mut lines = LineReader::new(BufReader::with_capacity(config.read_buf_size, reader));
        loop {
            let line = match timer.time(Stage::Read, || lines.next()) {
                None => break,
                Some(line) => line.map_err(|e| StreamError::source_unavailable(index, name.as_str(), e))?,
            };
            counters.bytes_in += line.len() as u64;
            if line_matches(&line, term) {
                timer.time(Stage::Write, || {
                    out.write_all(&line)?;
                    out.write_all(b"\n")
                })?;
                counters.lines_matched += 1;
                counters.bytes_out += line.len() as u64 + 1;
            }
        }
        counters.add_source();
    }
    out.flush()?;

    timer.finish();
    Ok(TelemetrySnapshot::from(&counters, &timer))
}
