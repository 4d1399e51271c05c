use std::io;
use thiserror::Error;

use crate::rle::{DecodeFailure, RleError};

/// Unified stream error covering usage, source access, record framing and sink I/O.
/// - `From<T>` impls enable `?` across the codec and the stream layer.
/// - Messages aim to be stable and contextual for logs.
#[derive(Debug, Error)]
pub enum StreamError {
    /// No input sources were supplied.
    #[error("no input sources supplied")]
    Usage,

    /// A named source could not be opened or read.
    #[error("cannot open source #{index} ({name}): {source}")]
    SourceUnavailable {
        index: usize,
        name: String,
        #[source]
        source: io::Error,
    },

    /// Record-level error (framing or zero-length run).
    #[error("record error: {0}")]
    Rle(#[from] RleError),

    /// I/O error on the output sink.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Generic high-level validation with a descriptive message.
    #[error("validation error: {0}")]
    Validation(String),
}

impl StreamError {
    pub fn source_unavailable(index: usize, name: impl Into<String>, source: io::Error) -> Self {
        StreamError::SourceUnavailable { index, name: name.into(), source }
    }

    /// True for errors caused by bad compressed input rather than the environment.
    pub fn is_malformed(&self) -> bool {
        matches!(self, StreamError::Rle(_))
    }
}

impl From<DecodeFailure> for StreamError {
    fn from(e: DecodeFailure) -> Self {
        match e {
            DecodeFailure::Io(e) => StreamError::Io(e),
            DecodeFailure::Rle(e) => StreamError::Rle(e),
        }
    }
}
