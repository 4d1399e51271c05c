//! Command-line argument parsing for the four binaries.
//!
//! Missing positional arguments are not a clap error: each tool prints its own
//! fixed usage line on stdout instead. Options must come before the first file;
//! from there on every argument is a path, even one starting with `-`.

use std::ffi::OsString;
use std::path::PathBuf;

use clap::{Args, Parser};
use rle_core::rle::TrailingPolicy;
use rle_core::stream::{CodecConfig, InputSource};

/// Options shared by every tool.
#[derive(Args, Debug, Clone, Default)]
pub struct CommonArgs {
    /// Bytes read from a source per chunk
    #[arg(long, value_name = "BYTES")]
    pub buffer_size: Option<usize>,

    /// Print run statistics as JSON on stderr
    #[arg(long)]
    pub stats: bool,
}

/// Compress files into a run-length record stream on stdout
#[derive(Parser, Debug, Clone, Default)]
pub struct ZipArgs {
    /// Input files, concatenated in order
    #[arg(value_name = "FILE", allow_hyphen_values = true, trailing_var_arg = true)]
    pub files: Vec<PathBuf>,

    #[command(flatten)]
    pub common: CommonArgs,
}

/// Expand run-length record streams back to bytes on stdout
#[derive(Parser, Debug, Clone, Default)]
pub struct UnzipArgs {
    /// Compressed files, expanded in order
    #[arg(value_name = "FILE", allow_hyphen_values = true, trailing_var_arg = true)]
    pub files: Vec<PathBuf>,

    /// Drop a partial trailing record or a zero-length run instead of failing
    #[arg(long)]
    pub lenient: bool,

    #[command(flatten)]
    pub common: CommonArgs,
}

/// Print files to stdout, in order
#[derive(Parser, Debug, Clone, Default)]
pub struct CatArgs {
    /// Files to print, in order
    #[arg(value_name = "FILE", allow_hyphen_values = true, trailing_var_arg = true)]
    pub files: Vec<PathBuf>,

    #[command(flatten)]
    pub common: CommonArgs,
}

/// Print lines containing a search term
#[derive(Parser, Debug, Clone, Default)]
pub struct GrepArgs {
    /// Case-sensitive search term
    #[arg(value_name = "SEARCHTERM", allow_hyphen_values = true)]
    pub term: Option<OsString>,

    /// Files to search; standard input when none
    #[arg(value_name = "FILE", allow_hyphen_values = true, trailing_var_arg = true)]
    pub files: Vec<PathBuf>,

    #[command(flatten)]
    pub common: CommonArgs,
}

impl CommonArgs {
    pub fn config(&self, trailing: TrailingPolicy) -> CodecConfig {
        CodecConfig::new(self.buffer_size, Some(trailing), Some(self.stats))
    }
}

impl ZipArgs {
    pub fn config(&self) -> CodecConfig {
        self.common.config(TrailingPolicy::Reject)
    }
}

impl UnzipArgs {
    pub fn config(&self) -> CodecConfig {
        let trailing = if self.lenient { TrailingPolicy::Ignore } else { TrailingPolicy::Reject };
        self.common.config(trailing)
    }
}

/// Turn paths into input sources, preserving order.
pub fn file_sources(files: &[PathBuf]) -> Vec<InputSource> {
    files.iter().cloned().map(InputSource::File).collect()
}

/// Parse `std::env::args` with the binary's own name in help and errors.
pub fn parse_for<T: Parser>(prog: &'static str) -> T {
    let matches = T::command().name(prog).bin_name(prog).get_matches();
    T::from_arg_matches(&matches).unwrap_or_else(|e| e.exit())
}

/// Same as `parse_for`, over an explicit argument list.
pub fn try_parse_from<T, I, S>(prog: &'static str, argv: I) -> Result<T, clap::Error>
where
    T: Parser,
    I: IntoIterator<Item = S>,
    S: Into<OsString> + Clone,
{
    let matches = T::command().name(prog).bin_name(prog).try_get_matches_from(argv)?;
    T::from_arg_matches(&matches)
}
