//! Comparison engine - size precheck, streaming and digest equality

mod engine;
mod matcher;
pub mod precheck;
mod stream;

pub use engine::IdentityEngine;
pub use matcher::Matcher;
pub use stream::{streams_equal, Side};
