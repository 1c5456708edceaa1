//! Content normalization applied before comparing or hashing

use super::ChunkReader;
use std::io::{self, Read};

/// Which superficial differences to ignore
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Normalization {
    /// Fold ASCII letters to lowercase
    pub ignore_case: bool,
    /// Drop whitespace bytes entirely
    pub ignore_whitespace: bool,
}

/// Whitespace as classified by C `isspace` in the "C" locale.
///
/// Unlike `u8::is_ascii_whitespace` this includes vertical tab (0x0B).
pub fn is_whitespace(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | 0x0B | 0x0C | b'\r')
}

impl Normalization {
    pub fn new(ignore_case: bool, ignore_whitespace: bool) -> Self {
        Self {
            ignore_case,
            ignore_whitespace,
        }
    }

    /// True when bytes pass through untouched
    pub fn is_identity(&self) -> bool {
        !self.ignore_case && !self.ignore_whitespace
    }

    /// Append the normalized form of `chunk` to `out`
    pub fn apply(&self, chunk: &[u8], out: &mut Vec<u8>) {
        if self.is_identity() {
            out.extend_from_slice(chunk);
            return;
        }
        out.extend(
            chunk
                .iter()
                .copied()
                .filter(|&b| !(self.ignore_whitespace && is_whitespace(b)))
                .map(|b| {
                    if self.ignore_case {
                        b.to_ascii_lowercase()
                    } else {
                        b
                    }
                }),
        );
    }

    /// Normalize `chunk` into a fresh buffer
    pub fn normalize(&self, chunk: &[u8]) -> Vec<u8> {
        let mut out = Vec::with_capacity(chunk.len());
        self.apply(chunk, &mut out);
        out
    }
}

/// Lazy producer of normalized bytes over a [`ChunkReader`]
///
/// Exposes a `fill_buf`/`consume` pair like `BufRead`, so two streams can be
/// walked in lockstep even though whitespace removal makes their chunk sizes
/// drift apart.
pub struct NormalizedStream<R> {
    reader: ChunkReader<R>,
    normalization: Normalization,
    pending: Vec<u8>,
    pos: usize,
}

impl<R: Read> NormalizedStream<R> {
    pub fn new(reader: ChunkReader<R>, normalization: Normalization) -> Self {
        Self {
            reader,
            normalization,
            pending: Vec::new(),
            pos: 0,
        }
    }

    /// Unconsumed normalized bytes; empty only at end of stream
    pub fn fill_buf(&mut self) -> io::Result<&[u8]> {
        while self.pos == self.pending.len() {
            self.pending.clear();
            self.pos = 0;
            match self.reader.next_chunk()? {
                Some(chunk) => self.normalization.apply(chunk, &mut self.pending),
                None => break,
            }
        }
        Ok(&self.pending[self.pos..])
    }

    /// Mark `n` bytes of the current buffer as used
    pub fn consume(&mut self, n: usize) {
        self.pos = (self.pos + n).min(self.pending.len());
    }

    /// Raw bytes pulled from the underlying source so far
    pub fn raw_bytes_read(&self) -> u64 {
        self.reader.bytes_read()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use std::num::NonZeroUsize;

    fn stream(
        data: &[u8],
        buffer: usize,
        max: u64,
        n: Normalization,
    ) -> NormalizedStream<Cursor<Vec<u8>>> {
        let reader = ChunkReader::new(
            Cursor::new(data.to_vec()),
            NonZeroUsize::new(buffer).unwrap(),
            max,
        );
        NormalizedStream::new(reader, n)
    }

    fn drain<R: Read>(s: &mut NormalizedStream<R>) -> Vec<u8> {
        let mut out = Vec::new();
        loop {
            let buf = s.fill_buf().unwrap();
            if buf.is_empty() {
                return out;
            }
            let n = buf.len();
            out.extend_from_slice(buf);
            s.consume(n);
        }
    }

    #[test]
    fn test_identity_passes_bytes_through() {
        let n = Normalization::default();
        assert!(n.is_identity());
        assert_eq!(n.normalize(b"Hello World\n"), b"Hello World\n");
    }

    #[test]
    fn test_ignore_case_folds_ascii_only() {
        let n = Normalization::new(true, false);
        assert_eq!(n.normalize(b"HeLLo W\xC9rld"), b"hello w\xC9rld");
    }

    #[test]
    fn test_ignore_whitespace_removes_isspace_set() {
        let n = Normalization::new(false, true);
        assert_eq!(n.normalize(b" a\tb\nc\x0Bd\x0Ce\rf "), b"abcdef");
        assert!(n.normalize(b" \t\r\n").is_empty());
    }

    #[test]
    fn test_output_never_longer_than_input() {
        let input = b"  Mixed CASE\tand\nspace  ";
        for (ic, iw) in [(false, false), (true, false), (false, true), (true, true)] {
            let out = Normalization::new(ic, iw).normalize(input);
            assert!(out.len() <= input.len());
        }
    }

    #[test]
    fn test_normalization_is_idempotent() {
        let input = b"  Mixed CASE\tand\nspace \x0B ";
        for (ic, iw) in [(false, false), (true, false), (false, true), (true, true)] {
            let n = Normalization::new(ic, iw);
            let once = n.normalize(input);
            assert_eq!(n.normalize(&once), once);
        }
    }

    #[test]
    fn test_stream_skips_chunks_that_normalize_to_nothing() {
        // Buffer of 2 means the middle chunks are pure whitespace
        let mut s = stream(b"a     b", 2, 0, Normalization::new(false, true));
        assert_eq!(drain(&mut s), b"ab");
        assert_eq!(s.raw_bytes_read(), 7);
    }

    #[test]
    fn test_stream_partial_consume() {
        let mut s = stream(b"abcdef", 4, 0, Normalization::default());
        assert_eq!(s.fill_buf().unwrap(), b"abcd");
        s.consume(1);
        assert_eq!(s.fill_buf().unwrap(), b"bcd");
        s.consume(3);
        assert_eq!(s.fill_buf().unwrap(), b"ef");
        s.consume(2);
        assert!(s.fill_buf().unwrap().is_empty());
    }

    #[test]
    fn test_stream_truncates_before_normalizing() {
        // The first 4 raw bytes are "a  b"; the limit lands before "cd"
        let mut s = stream(b"a  bcd", 3, 4, Normalization::new(false, true));
        assert_eq!(drain(&mut s), b"ab");
    }
}
