/// Width of the run-length field in a record (u32, little-endian).
pub const LENGTH_FIELD_LEN: usize = 4;
/// Width of the run-value field in a record.
pub const VALUE_FIELD_LEN: usize = 1;
/// Fixed size of one serialized record.
pub const RECORD_LEN: usize = LENGTH_FIELD_LEN + VALUE_FIELD_LEN;

/// Longest run a single record can carry. Longer runs are split.
pub const MAX_RUN_LEN: u32 = u32::MAX;

/// Defaults when Option<T> is None
pub const DEFAULT_READ_BUF: usize = 64 * 1024; // 64 KiB
/// Smallest read buffer accepted by the stream API.
pub const MIN_READ_BUF: usize = 512;
/// Max read buffer sanity bound (32 MiB).
pub const MAX_READ_BUF: usize = 32 * 1024 * 1024;

/// Size of the repeated-byte buffer used to expand long runs.
pub const FILL_BUF_LEN: usize = 8 * 1024;

/// Program names, used for diagnostics.
pub mod progs {
    pub const WZIP: &str = "wzip";
    pub const WUNZIP: &str = "wunzip";
    pub const WCAT: &str = "wcat";
    pub const WGREP: &str = "wgrep";
}
