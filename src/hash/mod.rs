//! Hashing utilities
//!
//! Each [`HashAlgorithm`] maps to exactly one [`DigestBackend`] variant; the
//! rest of the crate only ever talks to the backend through `update` and
//! `finalize`.

mod algorithm;
mod digest;

pub use algorithm::HashAlgorithm;
pub use digest::Digest;

use md5::Md5;
use sha1::Sha1;
use sha2::Sha256;
use xxhash_rust::xxh64::Xxh64;

/// Incremental hasher state for one algorithm
pub enum DigestBackend {
    Md5(Md5),
    Sha1(Sha1),
    Sha256(Sha256),
    Blake3(Box<blake3::Hasher>),
    Xxh64(Xxh64),
}

impl DigestBackend {
    /// Create a fresh hasher for `algorithm`
    pub fn new(algorithm: HashAlgorithm) -> Self {
        match algorithm {
            HashAlgorithm::Md5 => DigestBackend::Md5(md5::Digest::new()),
            HashAlgorithm::Sha1 => DigestBackend::Sha1(sha1::Digest::new()),
            HashAlgorithm::Sha256 => DigestBackend::Sha256(sha2::Digest::new()),
            HashAlgorithm::Blake3 => DigestBackend::Blake3(Box::new(blake3::Hasher::new())),
            HashAlgorithm::Xxh64 => DigestBackend::Xxh64(Xxh64::new(0)),
        }
    }

    pub fn algorithm(&self) -> HashAlgorithm {
        match self {
            DigestBackend::Md5(_) => HashAlgorithm::Md5,
            DigestBackend::Sha1(_) => HashAlgorithm::Sha1,
            DigestBackend::Sha256(_) => HashAlgorithm::Sha256,
            DigestBackend::Blake3(_) => HashAlgorithm::Blake3,
            DigestBackend::Xxh64(_) => HashAlgorithm::Xxh64,
        }
    }

    /// Feed more bytes into the hasher
    pub fn update(&mut self, data: &[u8]) {
        match self {
            DigestBackend::Md5(h) => md5::Digest::update(h, data),
            DigestBackend::Sha1(h) => sha1::Digest::update(h, data),
            DigestBackend::Sha256(h) => sha2::Digest::update(h, data),
            DigestBackend::Blake3(h) => {
                h.update(data);
            }
            DigestBackend::Xxh64(h) => h.update(data),
        }
    }

    /// Consume the hasher and produce the digest
    ///
    /// XXH64 is emitted in canonical (big-endian) byte order so that its hex
    /// form matches the usual `xxh64sum` rendering.
    pub fn finalize(self) -> Digest {
        let algorithm = self.algorithm();
        let bytes = match self {
            DigestBackend::Md5(h) => md5::Digest::finalize(h).to_vec(),
            DigestBackend::Sha1(h) => sha1::Digest::finalize(h).to_vec(),
            DigestBackend::Sha256(h) => sha2::Digest::finalize(h).to_vec(),
            DigestBackend::Blake3(h) => h.finalize().as_bytes().to_vec(),
            DigestBackend::Xxh64(h) => h.digest().to_be_bytes().to_vec(),
        };
        Digest::new(algorithm, bytes)
    }
}

/// Digest an in-memory byte slice
///
/// # Example
/// ```
/// use kua::hash::{digest_bytes, HashAlgorithm};
///
/// let digest = digest_bytes(HashAlgorithm::Md5, b"abc");
/// assert_eq!(digest.to_hex(), "900150983cd24fb0d6963f7d28e17f72");
/// ```
pub fn digest_bytes(algorithm: HashAlgorithm, data: &[u8]) -> Digest {
    let mut backend = DigestBackend::new(algorithm);
    backend.update(data);
    backend.finalize()
}
