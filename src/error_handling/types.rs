//! Error type definitions.
//!
//! This module defines all error, warning, and info types used throughout the crate.

use std::path::PathBuf;

use log::SetLoggerError;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the DNS resolver.
    #[error("DNS resolver initialization error: {0}")]
    DnsResolverError(String),
}

/// A validator grammar failed to compile.
///
/// This is a programming defect, never a property of the input being checked.
#[derive(Error, Debug)]
pub enum ConfigurationError {
    /// A regex grammar could not be compiled.
    #[error("Invalid {name} pattern: {source}")]
    InvalidPattern {
        /// Name of the grammar (e.g. "IPv4")
        name: &'static str,
        /// Underlying compilation error
        source: regex::Error,
    },
}

/// Why an input string could not be turned into a domain.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MalformedReason {
    /// The normalized string is not a parseable URL.
    #[error("URL could not be parsed: {0}")]
    UnparseableUrl(#[from] url::ParseError),

    /// The URL parsed but carries no host (e.g. `file:///etc/hosts`).
    #[error("URL has no host component")]
    MissingHost,

    /// The extracted domain is empty.
    #[error("domain is empty")]
    EmptyDomain,

    /// The extracted domain has no dot character.
    #[error("domain does not contain a dot character")]
    MissingDot,
}

/// Errors raised while constructing a `Domain`.
///
/// Construction either succeeds completely or fails with one of these; no
/// partially decomposed domain is ever produced.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The input could not be normalized into a usable hostname.
    #[error("Malformed input \"{input}\": {reason}")]
    MalformedInput {
        /// The raw input, as given by the caller
        input: String,
        /// What was wrong with it
        #[source]
        reason: MalformedReason,
    },
}

impl DomainError {
    pub(crate) fn malformed(input: &str, reason: impl Into<MalformedReason>) -> Self {
        DomainError::MalformedInput {
            input: input.to_string(),
            reason: reason.into(),
        }
    }

    /// Returns the reason the input was rejected.
    pub fn reason(&self) -> &MalformedReason {
        match self {
            DomainError::MalformedInput { reason, .. } => reason,
        }
    }
}

/// Errors raised while loading or downloading a TLD list.
#[derive(Error, Debug)]
pub enum TldListError {
    /// The TLD file could not be read or written.
    #[error("TLD file {path}: {source}")]
    Io {
        /// Path of the file
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// The TLD file contained no suffixes.
    #[error("TLD file {0} contains no entries")]
    Empty(PathBuf),

    /// The HTTP request for the list failed.
    #[error("TLD list download failed: {0}")]
    Download(#[from] reqwest::Error),

    /// The list server answered with a non-success status.
    #[error("TLD list download from {url} returned HTTP {status}")]
    HttpStatus {
        /// Requested URL
        url: String,
        /// Response status code
        status: u16,
    },
}

/// Types of errors that can occur while decomposing a batch of inputs.
///
/// Each variant is a per-line failure; none of them aborts the batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum ErrorType {
    UnparseableUrl,
    MissingHost,
    EmptyDomain,
    DomainWithoutDot,
}

/// Types of warnings that can occur while decomposing a batch.
///
/// Warnings never prevent a domain from being produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum WarningType {
    DnsResolutionFailed,
}

/// Informational metrics about the inputs of a batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum InfoType {
    SkippedLine,   // Blank line or '#' comment
    IpLiteral,     // Input was an IPv4 address
    EffectiveTld,  // Input was itself a registered suffix
    DuplicateDomain,
}

impl std::fmt::Display for ErrorType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ErrorType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorType::UnparseableUrl => "Unparseable URL",
            ErrorType::MissingHost => "URL without host",
            ErrorType::EmptyDomain => "Empty domain",
            ErrorType::DomainWithoutDot => "Domain without dot",
        }
    }
}

impl std::fmt::Display for WarningType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl WarningType {
    pub fn as_str(&self) -> &'static str {
        match self {
            WarningType::DnsResolutionFailed => "DNS resolution failed",
        }
    }
}

impl std::fmt::Display for InfoType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl InfoType {
    pub fn as_str(&self) -> &'static str {
        match self {
            InfoType::SkippedLine => "Skipped blank or comment line",
            InfoType::IpLiteral => "IPv4 literal",
            InfoType::EffectiveTld => "Effective TLD",
            InfoType::DuplicateDomain => "Duplicate domain",
        }
    }
}
