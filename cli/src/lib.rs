//! rle-cli
//!
//! Shared front end for `wzip`, `wunzip`, `wcat` and `wgrep`.
//! Each binary parses its arguments, calls one `run_*` function with stdout
//! as the sink, and hands the result to `report::finish`.

pub mod args;
pub mod logging;
pub mod report;

use std::io::Write;

use rle_core::rle::TrailingPolicy;
use rle_core::stream::{decode_sources, encode_sources, InputSource};
use rle_core::telemetry::TelemetrySnapshot;
use rle_core::text::{cat_sources, grep_sources};
use rle_core::types::StreamError;

use crate::args::{file_sources, CatArgs, GrepArgs, UnzipArgs, ZipArgs};

/// Compress the concatenation of all files into one record stream.
pub fn run_wzip<W: Write>(args: &ZipArgs, out: &mut W) -> Result<TelemetrySnapshot, StreamError> {
    encode_sources(file_sources(&args.files), out, &args.config())
}

/// Expand each file's record stream, in order.
pub fn run_wunzip<W: Write>(args: &UnzipArgs, out: &mut W) -> Result<TelemetrySnapshot, StreamError> {
    decode_sources(file_sources(&args.files), out, &args.config())
}

/// Print each file in turn; no files is a no-op.
pub fn run_wcat<W: Write>(args: &CatArgs, out: &mut W) -> Result<TelemetrySnapshot, StreamError> {
    cat_sources(file_sources(&args.files), out, &args.common.config(TrailingPolicy::Reject))
}

/// Print matching lines of each file, or of stdin when no file is given.
pub fn run_wgrep<W: Write>(args: &GrepArgs, out: &mut W) -> Result<TelemetrySnapshot, StreamError> {
    let term = match &args.term {
        Some(term) => term.clone().into_encoded_bytes(),
        None => return Err(StreamError::Usage),
    };
    let sources = if args.files.is_empty() {
        vec![InputSource::Stdin]
    } else {
        file_sources(&args.files)
    };
    grep_sources(&term, sources, out, &args.common.config(TrailingPolicy::Reject))
}
