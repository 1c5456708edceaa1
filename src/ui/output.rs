//! Match line rendering

use crate::Config;
use std::borrow::Cow;
use std::io::{self, Write};
use std::path::Path;

/// Writes one line per matching candidate
///
/// Line layout: `[<hash><separator>]['<name>']`. Names are written as the
/// raw bytes they were given, so output can be fed back as a candidate list.
#[derive(Debug, Clone, Default)]
pub struct MatchPrinter {
    prefix: Option<String>,
    quote: bool,
}

impl MatchPrinter {
    /// Build a printer; `hash_hex` is printed before each name when given
    pub fn new(config: &Config, hash_hex: Option<String>) -> Self {
        Self {
            prefix: hash_hex.map(|hex| format!("{}{}", hex, config.separator)),
            quote: config.quote,
        }
    }

    /// Render one line, newline included
    pub fn format_match(&self, path: &Path) -> Vec<u8> {
        let name = name_bytes(path);
        let prefix = self.prefix.as_deref().unwrap_or_default().as_bytes();

        let mut line = Vec::with_capacity(prefix.len() + name.len() + 3);
        line.extend_from_slice(prefix);
        if self.quote {
            line.push(b'\'');
            line.extend_from_slice(&name);
            line.push(b'\'');
        } else {
            line.extend_from_slice(&name);
        }
        line.push(b'\n');
        line
    }

    pub fn write_match<W: Write>(&self, out: &mut W, path: &Path) -> io::Result<()> {
        out.write_all(&self.format_match(path))
    }
}

#[cfg(unix)]
fn name_bytes(path: &Path) -> Cow<'_, [u8]> {
    use std::os::unix::ffi::OsStrExt;
    Cow::Borrowed(path.as_os_str().as_bytes())
}

#[cfg(not(unix))]
fn name_bytes(path: &Path) -> Cow<'_, [u8]> {
    Cow::Owned(path.display().to_string().into_bytes())
}
