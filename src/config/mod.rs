//! Configuration management
//!
//! The command line is parsed into [`Cli`] and converted once into an
//! immutable [`Config`]; every engine operation receives it (or its
//! [`ComparisonOptions`]) explicitly.

use crate::hash::HashAlgorithm;
use crate::reader::Normalization;
use crate::types::KuaError;
use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};
use std::num::NonZeroUsize;
use std::path::PathBuf;

/// Default read buffer size in bytes
pub const DEFAULT_BUFFER_SIZE: usize = 1024;

const LONG_ABOUT: &str = "\
Find files identical to the given one.

kua looks for files which are identical to the one given as the argument of -f.
For example,

  $ kua -f f.txt `ls`

looks for files identical to f.txt in the current directory, while

  $ find ~ -type f | kua -f f.txt -

will compare f.txt to each file under home.";

/// How two files are compared
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// Read both files in lockstep and stop at the first difference
    #[default]
    Stream,
    /// Reduce both files to digests and compare those
    Digest,
}

/// Options shared by every comparison in a run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparisonOptions {
    /// Treat ASCII upper and lower case as equal
    pub ignore_case: bool,

    /// Remove whitespace before comparing
    pub ignore_whitespace: bool,

    /// Consider only the first N raw bytes (0 = whole file)
    pub max_bytes: u64,

    /// Read buffer size
    pub buffer_size: NonZeroUsize,

    /// Digest algorithm
    pub algorithm: HashAlgorithm,

    /// Comparison strategy
    pub strategy: Strategy,
}

impl Default for ComparisonOptions {
    fn default() -> Self {
        Self {
            ignore_case: false,
            ignore_whitespace: false,
            max_bytes: 0,
            buffer_size: NonZeroUsize::new(DEFAULT_BUFFER_SIZE).unwrap_or(NonZeroUsize::MIN),
            algorithm: HashAlgorithm::default(),
            strategy: Strategy::default(),
        }
    }
}

impl ComparisonOptions {
    pub fn normalization(&self) -> Normalization {
        Normalization::new(self.ignore_case, self.ignore_whitespace)
    }

    /// Whether raw file size still predicts normalized length
    pub fn size_tracks_content(&self) -> bool {
        !self.ignore_whitespace
    }
}

/// Where candidate file names come from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CandidateSource {
    /// Names given on the command line
    Args(Vec<PathBuf>),
    /// One name per line on standard input
    Stdin,
}

/// Command-line arguments
#[derive(Parser, Debug)]
#[command(
    name = "kua",
    version,
    about = "Find files identical to the given one",
    long_about = LONG_ABOUT,
    arg_required_else_help = true
)]
pub struct Cli {
    /// File to compare to
    #[arg(short = 'f', long = "file", value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Ignore case
    #[arg(short = 'i', long = "ignore-case")]
    pub ignore_case: bool,

    /// Ignore white space (implies --no-size)
    #[arg(short = 'w', long = "ignore-white")]
    pub ignore_white: bool,

    /// Do not ask the file system for file size
    #[arg(short = 'n', long = "no-size")]
    pub no_size: bool,

    /// Verbose output on stderr
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,

    /// Consider only the first MAX bytes (0 = all)
    #[arg(short = 'm', long = "max", value_name = "MAX", default_value_t = 0)]
    pub max: u64,

    /// Separator between the hash and the file name
    #[arg(short = 's', long = "separator", value_name = "SEP", default_value = " ")]
    pub separator: String,

    /// Also print the hash value
    #[arg(short = 'p', long = "print-hash")]
    pub print_hash: bool,

    /// Internal buffer size
    #[arg(
        short = 'b',
        long = "buffer",
        value_name = "BSIZE",
        default_value_t = DEFAULT_BUFFER_SIZE
    )]
    pub buffer: usize,

    /// Hash algorithm: md5, sha1, sha256, b3, xxh64
    #[arg(short = 'a', long = "algorithm", value_name = "ALG", default_value = "md5")]
    pub algorithm: String,

    /// Quote file names with single quotes
    #[arg(short = 'q', long = "quote")]
    pub quote: bool,

    /// Compare byte streams directly or through digests
    #[arg(long = "strategy", value_enum, default_value_t = Strategy::Stream)]
    pub strategy: Strategy,

    /// Files to compare; a single `-` reads names from stdin
    #[arg(value_name = "FILE")]
    pub files: Vec<PathBuf>,
}

/// Validated configuration for one run
#[derive(Debug, Clone)]
pub struct Config {
    /// Reference file every candidate is compared to
    pub reference: PathBuf,

    /// Candidate names
    pub candidates: CandidateSource,

    /// Comparison options
    pub options: ComparisonOptions,

    /// Reject candidates by file size before reading them
    pub size_check: bool,

    /// Report considered and skipped files
    pub verbose: bool,

    /// Prefix matches with the reference digest
    pub print_hash: bool,

    /// Separator after the printed digest
    pub separator: String,

    /// Wrap names in single quotes
    pub quote: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            reference: PathBuf::new(),
            candidates: CandidateSource::Args(Vec::new()),
            options: ComparisonOptions::default(),
            size_check: true,
            verbose: false,
            print_hash: false,
            separator: " ".to_string(),
            quote: false,
        }
    }
}

impl Config {
    /// Validate configuration
    pub fn validate(&self) -> Result<(), KuaError> {
        if self.reference.as_os_str().is_empty() {
            return Err(KuaError::Config(
                "File param missing. See kua --help".to_string(),
            ));
        }
        Ok(())
    }

    /// Whether the size precheck actually runs
    ///
    /// Whitespace removal breaks the link between file size and compared
    /// length, so `ignore_whitespace` switches the precheck off even when it
    /// was requested.
    pub fn size_precheck_enabled(&self) -> bool {
        self.size_check && self.options.size_tracks_content()
    }
}

impl TryFrom<Cli> for Config {
    type Error = KuaError;

    fn try_from(cli: Cli) -> Result<Self, Self::Error> {
        let buffer_size = NonZeroUsize::new(cli.buffer)
            .ok_or_else(|| KuaError::Config(format!("Invalid buffer size {}", cli.buffer)))?;
        let algorithm: HashAlgorithm = cli.algorithm.parse()?;

        let candidates = match cli.files.split_first() {
            Some((first, rest)) if first.as_os_str() == "-" => {
                if !rest.is_empty() {
                    return Err(KuaError::Config("Spurious arguments!".to_string()));
                }
                CandidateSource::Stdin
            }
            _ => CandidateSource::Args(cli.files),
        };

        let config = Config {
            reference: cli.file.unwrap_or_default(),
            candidates,
            options: ComparisonOptions {
                ignore_case: cli.ignore_case,
                ignore_whitespace: cli.ignore_white,
                max_bytes: cli.max,
                buffer_size,
                algorithm,
                strategy: cli.strategy,
            },
            size_check: !cli.no_size,
            verbose: cli.verbose,
            print_hash: cli.print_hash,
            separator: cli.separator,
            quote: cli.quote,
        };
        config.validate()?;
        Ok(config)
    }
}
