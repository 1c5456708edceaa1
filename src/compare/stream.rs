//! Lockstep comparison of two normalized byte producers

use crate::reader::NormalizedStream;
use std::io::{self, Read};

/// Which side of a comparison failed
#[derive(Debug)]
pub enum Side {
    Left(io::Error),
    Right(io::Error),
}

/// Compare two streams byte by byte
///
/// Returns `false` at the first differing byte or as soon as one stream ends
/// before the other; nothing past the divergence point is read.
pub fn streams_equal<A: Read, B: Read>(
    left: &mut NormalizedStream<A>,
    right: &mut NormalizedStream<B>,
) -> Result<bool, Side> {
    loop {
        let a = left.fill_buf().map_err(Side::Left)?;
        let b = right.fill_buf().map_err(Side::Right)?;

        if a.is_empty() || b.is_empty() {
            return Ok(a.is_empty() && b.is_empty());
        }

        let n = a.len().min(b.len());
        if a[..n] != b[..n] {
            return Ok(false);
        }

        left.consume(n);
        right.consume(n);
    }
}
