//! Plain-text helpers behind `wcat` and `wgrep`.

pub mod lines;
pub mod cat;
pub mod grep;

pub use lines::{read_lines, LineReader};
pub use cat::{cat_sources, stream_bytes, CopyError};
pub use grep::{grep_sources, line_matches};
