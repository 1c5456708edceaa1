//! # kua - Find the same file
//!
//! Looks for files identical to a reference file, either by comparing byte
//! streams directly or by comparing digests (MD5, SHA-1, SHA-256, BLAKE3,
//! XXH64). Equality can ignore ASCII case, ignore whitespace, and be limited
//! to the first N bytes.

// Module declarations
pub mod commands;
pub mod compare;
pub mod config;
pub mod hash;
pub mod reader;
pub mod types;
pub mod ui;

// Re-export commonly used types
pub use compare::{IdentityEngine, Matcher};
pub use config::{ComparisonOptions, Config, Strategy};
pub use hash::{Digest, HashAlgorithm};
pub use types::{ComparisonOutcome, KuaError};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
