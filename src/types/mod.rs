//! Core type definitions for kua

mod error;
mod outcome;

pub use error::{ErrorKind, KuaError};
pub use outcome::ComparisonOutcome;
