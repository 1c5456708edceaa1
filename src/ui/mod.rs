//! User-facing output

mod output;

pub use output::MatchPrinter;
