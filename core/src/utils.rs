use crate::constants::{DEFAULT_READ_BUF, MAX_READ_BUF, MIN_READ_BUF};

/// Resolve a requested read buffer size.
/// - `None` → `DEFAULT_READ_BUF`
/// - otherwise clamped to `MIN_READ_BUF ..= MAX_READ_BUF`
pub fn clamp_buffer_size(requested: Option<usize>) -> usize {
    match requested {
        None => DEFAULT_READ_BUF,
        Some(size) => size.clamp(MIN_READ_BUF, MAX_READ_BUF),
    }
}

/// Case-sensitive byte substring search. The empty needle matches everything.
pub fn contains_subslice(haystack: &[u8], needle: &[u8]) -> bool {
    if needle.is_empty() {
        return true;
    }
    if needle.len() > haystack.len() {
        return false;
    }
    haystack.windows(needle.len()).any(|w| w == needle)
}

// Helper function to flatten chunks into a single blob
pub fn concat_chunks(chunks: &[impl AsRef<[u8]>]) -> Vec<u8> {
    chunks.iter()
        .flat_map(|c| c.as_ref())
        .copied()
        .collect()
}
