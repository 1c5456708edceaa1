//! Streaming input - chunked reads and content normalization

mod chunk;
mod normalize;

pub use chunk::ChunkReader;
pub use normalize::{is_whitespace, NormalizedStream, Normalization};

use crate::config::ComparisonOptions;
use crate::types::KuaError;
use std::fs::File;
use std::path::Path;

/// Open `path` and wrap it in a normalized, truncated stream
///
/// The file handle lives inside the returned stream and is closed when the
/// stream is dropped.
pub fn open_normalized(
    path: &Path,
    options: &ComparisonOptions,
) -> Result<NormalizedStream<File>, KuaError> {
    let file = File::open(path).map_err(|e| KuaError::file_access(path, e))?;
    let reader = ChunkReader::new(file, options.buffer_size, options.max_bytes);
    Ok(NormalizedStream::new(reader, options.normalization()))
}
