//! File identity engine - digest and equality under one set of options

use super::stream::{streams_equal, Side};
use crate::config::{ComparisonOptions, Strategy};
use crate::hash::{Digest, DigestBackend};
use crate::reader::{open_normalized, NormalizedStream};
use crate::types::{ComparisonOutcome, KuaError};
use std::io::Read;
use std::path::Path;

/// Decides whether files are "the same" under a fixed [`ComparisonOptions`]
///
/// Holds no mutable state; every call opens its own file handles and drops
/// them before returning, whatever the result.
#[derive(Debug, Clone)]
pub struct IdentityEngine {
    options: ComparisonOptions,
}

impl IdentityEngine {
    pub fn new(options: ComparisonOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &ComparisonOptions {
        &self.options
    }

    /// Digest a file's normalized, truncated content
    ///
    /// # Example
    /// ```no_run
    /// use kua::compare::IdentityEngine;
    /// use kua::config::ComparisonOptions;
    /// use std::path::Path;
    ///
    /// let engine = IdentityEngine::new(ComparisonOptions::default());
    /// let digest = engine.compute_digest(Path::new("file.txt"))?;
    /// println!("{}", digest.to_hex());
    /// # Ok::<(), kua::types::KuaError>(())
    /// ```
    pub fn compute_digest(&self, path: &Path) -> Result<Digest, KuaError> {
        let mut stream = open_normalized(path, &self.options)?;
        self.digest_stream(&mut stream)
            .map_err(|e| KuaError::file_access(path, e))
    }

    /// Feed a normalized stream into the configured backend
    pub fn digest_stream<R: Read>(
        &self,
        stream: &mut NormalizedStream<R>,
    ) -> std::io::Result<Digest> {
        let mut backend = DigestBackend::new(self.options.algorithm);
        loop {
            let buf = stream.fill_buf()?;
            if buf.is_empty() {
                break;
            }
            let n = buf.len();
            backend.update(buf);
            stream.consume(n);
        }
        Ok(backend.finalize())
    }

    /// Compare two files with the configured strategy
    pub fn are_equal(&self, a: &Path, b: &Path) -> ComparisonOutcome {
        self.are_equal_with(a, b, self.options.strategy)
    }

    /// Compare two files with an explicit strategy
    pub fn are_equal_with(&self, a: &Path, b: &Path, strategy: Strategy) -> ComparisonOutcome {
        match strategy {
            Strategy::Stream => self.stream_equal(a, b).into(),
            Strategy::Digest => self.digest_equal(a, b).into(),
        }
    }

    /// Lockstep comparison that stops at the first difference
    pub fn stream_equal(&self, a: &Path, b: &Path) -> Result<bool, KuaError> {
        let mut left = open_normalized(a, &self.options)?;
        let mut right = open_normalized(b, &self.options)?;

        streams_equal(&mut left, &mut right).map_err(|side| match side {
            Side::Left(e) => KuaError::file_access(a, e),
            Side::Right(e) => KuaError::file_access(b, e),
        })
    }

    /// Compare against an already computed digest of the other file
    pub fn matches_digest(&self, expected: &Digest, path: &Path) -> Result<bool, KuaError> {
        debug_assert_eq!(expected.algorithm(), self.options.algorithm);
        Ok(self.compute_digest(path)? == *expected)
    }

    fn digest_equal(&self, a: &Path, b: &Path) -> Result<bool, KuaError> {
        let expected = self.compute_digest(a)?;
        self.matches_digest(&expected, b)
    }
}
