//! TLD suffix resolution.
//!
//! A [`TldList`] holds an immutable set of known TLD suffixes ("com", "co.uk",
//! "blogspot.com", ...). Entries are opaque strings: "co.uk" is a single
//! member, not a trie of labels. Resolution walks a hostname from the left,
//! dropping one label at a time, until the remaining suffix is a member.
//!
//! Key functions:
//! - `TldList::from_lines()` / `TldList::from_file()` - build the set
//! - `TldList::resolve()` - find the registered suffix of a hostname
//!
//! The [`source`] submodule formats raw suffix lists (Public Suffix List style)
//! into the one-suffix-per-line files read here.

pub mod source;

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use log::{debug, info};

use crate::error_handling::TldListError;

/// Immutable set of known TLD suffixes.
///
/// Read-only after construction, so it can be shared across threads by
/// reference or `Arc` without further synchronization.
#[derive(Debug, Clone, Default)]
pub struct TldList {
    tlds: HashSet<String>,
}

impl TldList {
    /// Wraps an already-built set. Entries are used as given.
    pub fn new(tlds: HashSet<String>) -> Self {
        TldList { tlds }
    }

    /// Builds a list from raw lines.
    ///
    /// Each line is either a bare suffix or a comma-separated row whose first
    /// field is the suffix. Fields are trimmed and lowercased; blank entries
    /// are skipped and duplicates collapse.
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        lines
            .into_iter()
            .filter_map(|line| {
                let line = line.as_ref();
                let first = line.split(',').next().unwrap_or(line).trim();
                (!first.is_empty()).then(|| first.to_lowercase())
            })
            .collect()
    }

    /// Loads a list from a file in the format accepted by [`TldList::from_lines`].
    ///
    /// # Errors
    ///
    /// Returns `TldListError::Io` if the file cannot be read and
    /// `TldListError::Empty` if it yields no suffixes.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, TldListError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| TldListError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let list = Self::from_lines(contents.lines());
        if list.is_empty() {
            return Err(TldListError::Empty(path.to_path_buf()));
        }

        info!("Loaded {} TLD suffixes from {}", list.len(), path.display());
        Ok(list)
    }

    /// True if `suffix` is an exact member of the set.
    pub fn contains(&self, suffix: &str) -> bool {
        self.tlds.contains(suffix)
    }

    pub fn len(&self) -> usize {
        self.tlds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tlds.is_empty()
    }

    /// Returns the TLD of `hostname`.
    ///
    /// Starting from the full hostname, each candidate suffix is tested for
    /// membership; on a miss the leftmost label is dropped and the remainder
    /// retried. The first hit is the longest registered suffix. When nothing
    /// matches, the final dot-segment of `hostname` is returned as the
    /// presumed TLD, so the result is only empty when `hostname` ends in a dot.
    ///
    /// The returned slice borrows from `hostname`.
    ///
    /// # Examples
    ///
    /// ```
    /// use domain_decomp::TldList;
    ///
    /// let tlds = TldList::from_lines(["com", "co.uk"]);
    /// assert_eq!(tlds.resolve("www.example.co.uk"), "co.uk");
    /// assert_eq!(tlds.resolve("example.unknown"), "unknown");
    /// ```
    pub fn resolve<'a>(&self, hostname: &'a str) -> &'a str {
        let mut candidate = hostname;
        while !candidate.is_empty() {
            if self.tlds.contains(candidate) {
                return candidate;
            }
            match candidate.split_once('.') {
                Some((_, rest)) => candidate = rest,
                None => break,
            }
        }

        let fallback = hostname.rsplit('.').next().unwrap_or(hostname);
        debug!("No registered suffix for {hostname}, falling back to {fallback:?}");
        fallback
    }

    /// Iterates the suffixes in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tlds.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for TldList {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        TldList {
            tlds: iter.into_iter().map(Into::into).collect(),
        }
    }
}
