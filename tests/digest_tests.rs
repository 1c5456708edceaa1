//! File digest tests
//!
//! Tests for computing digests of files on disk with every backend.

use kua::compare::IdentityEngine;
use kua::config::ComparisonOptions;
use kua::hash::{digest_bytes, HashAlgorithm};
use std::fs;
use std::num::NonZeroUsize;
use std::path::PathBuf;
use tempfile::TempDir;

fn engine_for(algorithm: HashAlgorithm) -> IdentityEngine {
    IdentityEngine::new(ComparisonOptions {
        algorithm,
        ..ComparisonOptions::default()
    })
}

fn create_temp_file(dir: &TempDir, name: &str, content: &[u8]) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).expect("Failed to write test file");
    path
}

#[test]
fn test_compute_digest_basic() {
    let temp_dir = tempfile::tempdir().unwrap();
    let file_path = create_temp_file(&temp_dir, "test.txt", b"Hello, World!");

    for alg in HashAlgorithm::ALL {
        let digest = engine_for(alg)
            .compute_digest(&file_path)
            .expect("Failed to compute digest");
        assert!(!digest.is_empty());
        assert_eq!(digest.len(), alg.output_len());
        assert_eq!(digest.to_hex().len(), alg.output_len() * 2);
        assert!(digest
            .to_hex()
            .chars()
            .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)));
    }
}

#[test]
fn test_compute_digest_different_content() {
    let temp_dir = tempfile::tempdir().unwrap();
    let file1 = create_temp_file(&temp_dir, "file1.txt", b"Content A");
    let file2 = create_temp_file(&temp_dir, "file2.txt", b"Content B");

    for alg in HashAlgorithm::ALL {
        let engine = engine_for(alg);
        assert_ne!(
            engine.compute_digest(&file1).unwrap(),
            engine.compute_digest(&file2).unwrap()
        );
    }
}

#[test]
fn test_compute_digest_large_file_small_buffer() {
    let temp_dir = tempfile::tempdir().unwrap();
    let content: Vec<u8> = (0..1024 * 1024).map(|i| (i % 251) as u8).collect();
    let file_path = create_temp_file(&temp_dir, "large.bin", &content);

    let engine = IdentityEngine::new(ComparisonOptions {
        algorithm: HashAlgorithm::Blake3,
        buffer_size: NonZeroUsize::new(7).unwrap(),
        ..ComparisonOptions::default()
    });
    let digest = engine.compute_digest(&file_path).unwrap();

    assert_eq!(digest, digest_bytes(HashAlgorithm::Blake3, &content));
}

#[test]
fn test_compute_digest_known_value() {
    let temp_dir = tempfile::tempdir().unwrap();
    let file_path = create_temp_file(&temp_dir, "abc.txt", b"abc");

    let digest = engine_for(HashAlgorithm::Sha256)
        .compute_digest(&file_path)
        .unwrap();
    assert_eq!(
        digest.to_hex(),
        "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
    );
}

#[test]
fn test_compute_digest_nonexistent_file() {
    let path = PathBuf::from("/nonexistent/file.txt");

    for alg in HashAlgorithm::ALL {
        assert!(engine_for(alg).compute_digest(&path).is_err());
    }
}
