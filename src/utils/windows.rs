use crate::index::types::{WINDOW_LEN, WindowHash};
use crate::utils::hash::window_hash;

/// Hash every window of a string being indexed.
///
/// Windows slide one byte at a time from offset 0 to `len - WINDOW_LEN`.
/// The returned hashes are unique (sorted, then deduplicated) so a caller can
/// push the owning string into each bucket without a membership check.
/// Inputs shorter than one window yield nothing.
pub fn index_window_hashes(content: &[u8]) -> Vec<WindowHash> {
    if content.len() < WINDOW_LEN {
        return Vec::new();
    }

    let mut hashes: Vec<WindowHash> = content.windows(WINDOW_LEN).map(window_hash).collect();
    hashes.sort_unstable();
    hashes.dedup();
    hashes
}

/// Decompose a query into the windows whose buckets get intersected.
///
/// Windows are consecutive and non-overlapping, starting at offset 0. When
/// the unconsumed tail is non-empty but shorter than a window, the final
/// window is the query's last `WINDOW_LEN` bytes instead, so it may overlap
/// the previous one. Queries shorter than one window yield nothing.
pub fn query_windows(needle: &[u8]) -> Vec<&[u8]> {
    if needle.len() < WINDOW_LEN {
        return Vec::new();
    }

    let mut windows = Vec::with_capacity(needle.len().div_ceil(WINDOW_LEN));
    let mut chunks = needle.chunks_exact(WINDOW_LEN);
    windows.extend(&mut chunks);
    if !chunks.remainder().is_empty() {
        windows.push(&needle[needle.len() - WINDOW_LEN..]);
    }
    windows
}
