//! Reference matcher - one reference file checked against many candidates

use super::engine::IdentityEngine;
use super::precheck::{file_size, sizes_compatible};
use super::stream::{streams_equal, Side};
use crate::config::{Config, Strategy};
use crate::hash::Digest;
use crate::reader::open_normalized;
use crate::types::{ComparisonOutcome, KuaError};
use std::path::{Path, PathBuf};

/// An [`IdentityEngine`] bound to a reference file
///
/// Everything that can go wrong with the reference is checked in
/// [`Matcher::new`]. A reference that still fails later is reported as
/// [`KuaError::Reference`], which ends the search.
#[derive(Debug)]
pub struct Matcher {
    engine: IdentityEngine,
    reference: PathBuf,
    reference_size: Option<u64>,
    reference_digest: Option<Digest>,
}

impl Matcher {
    /// Validate the reference and cache what the run will need from it
    ///
    /// The size is cached when the precheck is enabled and the digest when
    /// the digest strategy or `print_hash` asks for it.
    pub fn new(config: &Config) -> Result<Self, KuaError> {
        let engine = IdentityEngine::new(config.options.clone());
        let reference = config.reference.clone();
        let fatal = |e: KuaError| e.into_reference(&reference);

        let reference_size = if config.size_precheck_enabled() {
            Some(file_size(&reference).map_err(fatal)?)
        } else {
            None
        };

        let reference_digest =
            if config.print_hash || config.options.strategy == Strategy::Digest {
                Some(engine.compute_digest(&reference).map_err(fatal)?)
            } else {
                // Opening alone succeeds for directories; pull the first chunk.
                let mut stream = open_normalized(&reference, engine.options()).map_err(fatal)?;
                stream.fill_buf().map_err(|e| fatal(KuaError::Io(e)))?;
                None
            };

        Ok(Self {
            engine,
            reference,
            reference_size,
            reference_digest,
        })
    }

    /// Cached reference digest, if one was computed
    pub fn reference_digest(&self) -> Option<&Digest> {
        self.reference_digest.as_ref()
    }

    /// Compare one candidate against the reference
    pub fn check(&self, candidate: &Path) -> ComparisonOutcome {
        if let Some(expected) = self.reference_size {
            match file_size(candidate) {
                Ok(size) if !sizes_compatible(expected, size, self.engine.options()) => {
                    log::debug!(
                        "Size mismatch for {}: {} vs {} bytes",
                        candidate.display(),
                        size,
                        expected
                    );
                    return ComparisonOutcome::NotEqual;
                }
                Ok(_) => {}
                Err(e) => return ComparisonOutcome::Error(e),
            }
        }

        match (self.engine.options().strategy, &self.reference_digest) {
            (Strategy::Digest, Some(expected)) => {
                self.engine.matches_digest(expected, candidate).into()
            }
            _ => self.stream_against_reference(candidate).into(),
        }
    }

    fn stream_against_reference(&self, candidate: &Path) -> Result<bool, KuaError> {
        let options = self.engine.options();
        let mut left = open_normalized(&self.reference, options)
            .map_err(|e| e.into_reference(&self.reference))?;
        let mut right = open_normalized(candidate, options)?;

        streams_equal(&mut left, &mut right).map_err(|side| match side {
            Side::Left(e) => KuaError::Reference {
                path: self.reference.clone(),
                source: e,
            },
            Side::Right(e) => KuaError::file_access(candidate, e),
        })
    }
}
