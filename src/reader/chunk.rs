//! Fixed-size chunked reads with an optional byte limit

use std::io::{self, ErrorKind, Read};
use std::num::NonZeroUsize;

/// Reads a source in chunks of at most `buffer_size` bytes
///
/// Stops at end of input or once `max_bytes` raw bytes have been handed out
/// (`0` means no limit). The limit counts bytes as they come off the source,
/// before any normalization.
pub struct ChunkReader<R> {
    inner: R,
    buffer: Vec<u8>,
    remaining: Option<u64>,
    bytes_read: u64,
}

impl<R: Read> ChunkReader<R> {
    pub fn new(inner: R, buffer_size: NonZeroUsize, max_bytes: u64) -> Self {
        Self {
            inner,
            buffer: vec![0u8; buffer_size.get()],
            remaining: (max_bytes > 0).then_some(max_bytes),
            bytes_read: 0,
        }
    }

    /// Read the next chunk, or `None` once the source or the limit is exhausted
    pub fn next_chunk(&mut self) -> io::Result<Option<&[u8]>> {
        let want = match self.remaining {
            Some(0) => return Ok(None),
            Some(left) => left.min(self.buffer.len() as u64) as usize,
            None => self.buffer.len(),
        };

        let n = loop {
            match self.inner.read(&mut self.buffer[..want]) {
                Ok(n) => break n,
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            }
        };

        if n == 0 {
            return Ok(None);
        }

        if let Some(left) = self.remaining.as_mut() {
            *left -= n as u64;
        }
        self.bytes_read += n as u64;

        Ok(Some(&self.buffer[..n]))
    }

    /// Raw bytes handed out so far
    pub fn bytes_read(&self) -> u64 {
        self.bytes_read
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn nz(n: usize) -> NonZeroUsize {
        NonZeroUsize::new(n).unwrap()
    }

    fn collect<R: Read>(reader: &mut ChunkReader<R>) -> Vec<Vec<u8>> {
        let mut chunks = Vec::new();
        while let Some(chunk) = reader.next_chunk().unwrap() {
            chunks.push(chunk.to_vec());
        }
        chunks
    }

    #[test]
    fn test_chunks_respect_buffer_size() {
        let mut reader = ChunkReader::new(Cursor::new(b"abcdefghij".to_vec()), nz(4), 0);
        let chunks = collect(&mut reader);

        assert_eq!(chunks, vec![b"abcd".to_vec(), b"efgh".to_vec(), b"ij".to_vec()]);
        assert_eq!(reader.bytes_read(), 10);
    }

    #[test]
    fn test_max_bytes_stops_mid_chunk() {
        let mut reader = ChunkReader::new(Cursor::new(b"abcdefghij".to_vec()), nz(4), 6);
        let chunks = collect(&mut reader);

        assert_eq!(chunks, vec![b"abcd".to_vec(), b"ef".to_vec()]);
        assert_eq!(reader.bytes_read(), 6);
        // Exhausted readers stay exhausted
        assert!(reader.next_chunk().unwrap().is_none());
    }

    #[test]
    fn test_max_bytes_larger_than_input() {
        let mut reader = ChunkReader::new(Cursor::new(b"abc".to_vec()), nz(1024), 100);
        assert_eq!(collect(&mut reader), vec![b"abc".to_vec()]);
    }

    #[test]
    fn test_empty_input() {
        let mut reader = ChunkReader::new(Cursor::new(Vec::new()), nz(8), 0);
        assert!(reader.next_chunk().unwrap().is_none());
        assert_eq!(reader.bytes_read(), 0);
    }

    struct Flaky {
        interrupted: bool,
    }

    impl Read for Flaky {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            if !self.interrupted {
                self.interrupted = true;
                return Err(io::Error::new(ErrorKind::Interrupted, "signal"));
            }
            Err(io::Error::other("disk on fire"))
        }
    }

    #[test]
    fn test_interrupted_is_retried_and_errors_surface() {
        let mut reader = ChunkReader::new(Flaky { interrupted: false }, nz(8), 0);
        let err = reader.next_chunk().unwrap_err();
        assert_eq!(err.to_string(), "disk on fire");
    }
}
