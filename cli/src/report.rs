//! Mapping of run results to diagnostics and exit codes.
//!
//! Usage, unopenable sources and malformed input print one fixed line on
//! **stdout** (legacy behaviour); sink failures go to stderr.

use std::io::{self, Write};
use std::process::ExitCode;

use rle_core::constants::progs;
use rle_core::telemetry::TelemetrySnapshot;
use rle_core::types::StreamError;
use tracing::debug;

pub const EXIT_FAILURE: u8 = 1;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    Stdout(String),
    Stderr(String),
}

pub fn usage_line(prog: &str) -> String {
    match prog {
        progs::WGREP => format!("{prog}: searchterm [file ...]"),
        _ => format!("{prog}: file1 [file2 ...]"),
    }
}

pub fn diagnostic(prog: &str, err: &StreamError) -> Diagnostic {
    match err {
        StreamError::Usage => Diagnostic::Stdout(usage_line(prog)),
        StreamError::SourceUnavailable { .. } => Diagnostic::Stdout(format!("{prog}: cannot open file")),
        StreamError::Rle(_) => Diagnostic::Stdout(format!("{prog}: malformed input")),
        StreamError::Io(e) => Diagnostic::Stderr(format!("{prog}: {e}")),
        StreamError::Validation(msg) => Diagnostic::Stderr(format!("{prog}: {msg}")),
    }
}

/// Flush tool output, then report the outcome and pick the exit code.
pub fn finish<W: Write>(
    prog: &str,
    result: Result<TelemetrySnapshot, StreamError>,
    stats: bool,
    out: &mut W,
) -> ExitCode {
    match result {
        Ok(snapshot) => {
            if let Err(e) = out.flush() {
                eprintln!("{prog}: {e}");
                return ExitCode::from(EXIT_FAILURE);
            }
            if stats {
                print_stats(prog, &snapshot);
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            debug!(error = %err, "{} failed", prog);
            // Output for earlier sources stays; it goes out before the diagnostic.
            let _ = out.flush();
            match diagnostic(prog, &err) {
                Diagnostic::Stdout(line) => {
                    let _ = writeln!(out, "{line}");
                    let _ = out.flush();
                }
                Diagnostic::Stderr(line) => eprintln!("{line}"),
            }
            ExitCode::from(EXIT_FAILURE)
        }
    }
}

fn print_stats(prog: &str, snapshot: &TelemetrySnapshot) {
    match snapshot.to_json() {
        Ok(json) => {
            let _ = writeln!(io::stderr(), "{json}");
        }
        Err(e) => eprintln!("{prog}: cannot serialize stats: {e}"),
    }
}
