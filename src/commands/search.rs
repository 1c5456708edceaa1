//! Main search command

use crate::compare::Matcher;
use crate::config::CandidateSource;
use crate::types::{ComparisonOutcome, KuaError};
use crate::ui::MatchPrinter;
use crate::Config;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

/// Counters for one search run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchSummary {
    /// Candidates looked at
    pub considered: usize,
    /// Candidates identical to the reference
    pub matched: usize,
    /// Candidates that differ
    pub different: usize,
    /// Candidates that could not be read
    pub skipped: usize,
}

/// Run the search against stdin/stdout
pub fn run(config: &Config) -> Result<SearchSummary, KuaError> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match &config.candidates {
        CandidateSource::Args(files) => {
            let candidates = files.iter().cloned().map(Ok);
            search(config, candidates, &mut out)
        }
        CandidateSource::Stdin => {
            let stdin = io::stdin();
            search(config, read_candidates(stdin.lock()), &mut out)
        }
    }
}

/// Compare every candidate against the reference, printing matches to `out`
///
/// Unreadable candidates are logged and skipped. An unusable reference, a
/// failure to read the candidate list, or a failure to write output ends the
/// search with an error.
pub fn search<I, W>(
    config: &Config,
    candidates: I,
    out: &mut W,
) -> Result<SearchSummary, KuaError>
where
    I: IntoIterator<Item = io::Result<PathBuf>>,
    W: Write,
{
    if config.size_check && !config.size_precheck_enabled() {
        log::debug!("Size precheck disabled: whitespace is ignored");
    }

    let matcher = Matcher::new(config)?;
    let hash_hex = if config.print_hash {
        matcher.reference_digest().map(|d| d.to_hex())
    } else {
        None
    };
    let printer = MatchPrinter::new(config, hash_hex);
    let mut summary = SearchSummary::default();

    for candidate in candidates {
        let candidate = candidate?;
        summary.considered += 1;
        log::info!("Considering {}", candidate.display());

        match matcher.check(&candidate) {
            ComparisonOutcome::Equal => {
                summary.matched += 1;
                printer.write_match(out, &candidate)?;
            }
            ComparisonOutcome::NotEqual => summary.different += 1,
            ComparisonOutcome::Error(e) if e.is_fatal() => return Err(e),
            ComparisonOutcome::Error(e) => {
                summary.skipped += 1;
                log::warn!("Skipping {}, {}", candidate.display(), e);
            }
        }
    }

    out.flush()?;
    log::info!(
        "{} considered, {} matched, {} different, {} skipped",
        summary.considered,
        summary.matched,
        summary.different,
        summary.skipped
    );
    Ok(summary)
}

/// Candidate names from a newline-delimited list
///
/// Blank lines are ignored; a trailing `\r` is kept as part of the name.
pub fn read_candidates<R: BufRead>(reader: R) -> impl Iterator<Item = io::Result<PathBuf>> {
    reader.split(b'\n').filter_map(|line| match line {
        Ok(bytes) if bytes.is_empty() => None,
        Ok(bytes) => Some(Ok(path_from_bytes(bytes))),
        Err(e) => Some(Err(e)),
    })
}

#[cfg(unix)]
fn path_from_bytes(bytes: Vec<u8>) -> PathBuf {
    use std::os::unix::ffi::OsStringExt;
    PathBuf::from(std::ffi::OsString::from_vec(bytes))
}

#[cfg(not(unix))]
fn path_from_bytes(bytes: Vec<u8>) -> PathBuf {
    PathBuf::from(String::from_utf8_lossy(&bytes).into_owned())
}
