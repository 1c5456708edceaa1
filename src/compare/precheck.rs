//! Size precheck - metadata-only rejection of obviously different files

use crate::config::ComparisonOptions;
use crate::types::KuaError;
use std::fs;
use std::path::Path;

/// File size from filesystem metadata, without opening the content
pub fn file_size(path: &Path) -> Result<u64, KuaError> {
    fs::metadata(path)
        .map(|m| m.len())
        .map_err(|e| KuaError::file_access(path, e))
}

/// Whether two raw file sizes can belong to equal files
///
/// Full sizes are compared even when `max_bytes` truncates the content, so
/// files that only share a prefix are rejected here; `--no-size` turns the
/// precheck off for prefix matching. Meaningless when whitespace is ignored;
/// callers must skip the precheck then.
pub fn sizes_compatible(a: u64, b: u64, options: &ComparisonOptions) -> bool {
    debug_assert!(options.size_tracks_content());
    a == b
}
