//! TLD list download and formatting.
//!
//! Raw suffix lists (the Public Suffix List format) carry comments, wildcard
//! rules and punycode TLDs that only appear inside comments. This module turns
//! such a list into the one-suffix-per-line format read by
//! [`TldList::from_file`](super::TldList::from_file).

use std::path::Path;
use std::time::Duration;

use log::{debug, info, warn};
use tokio_retry::Retry;

use crate::config::TLD_DOWNLOAD_TIMEOUT_SECS;
use crate::error_handling::{get_retry_strategy, TldListError};

const COMMENT_PREFIX: &str = "//";
const PUNYCODE_COMMENT_PREFIX: &str = "// xn--";
const PUNYCODE_MARKER: &str = "xn--";
const WILDCARD_PREFIX: &str = "*.";
const EXCEPTION_PREFIX: char = '!';

/// Formats a single raw line, returning the suffix it contributes, if any.
///
/// - `// xn--abc (comment)` and `// xn--abc : comment` yield `xn--abc`
/// - other `//` lines are comments and yield nothing
/// - `*.example` yields `example`
/// - `!rule` exception lines are not suffixes and yield nothing
/// - everything else is lowercased and trimmed
pub fn format_suffix_line(line: &str) -> Option<String> {
    let line = line.trim().to_lowercase();

    if line.starts_with(PUNYCODE_COMMENT_PREFIX) {
        let start = line.find(PUNYCODE_MARKER)?;
        let end = line
            .find(" (")
            .or_else(|| line.find(" :"))
            .filter(|&end| end > start);
        return match end {
            Some(end) => Some(line[start..end].to_string()),
            None => {
                warn!("Ignoring unknown formatted line: {line}");
                None
            }
        };
    }

    if line.starts_with(COMMENT_PREFIX) || line.starts_with(EXCEPTION_PREFIX) {
        return None;
    }

    let line = line.strip_prefix(WILDCARD_PREFIX).unwrap_or(&line);
    (!line.is_empty()).then(|| line.to_string())
}

/// Formats a whole raw list, preserving line order.
pub fn format_suffix_list(text: &str) -> Vec<String> {
    text.lines().filter_map(format_suffix_line).collect()
}

/// Downloads a raw suffix list, formats it, and writes one suffix per line to `to_file`.
///
/// The request is retried with exponential backoff (see `get_retry_strategy`).
///
/// # Returns
///
/// The number of suffixes written.
///
/// # Errors
///
/// Returns `TldListError::Download` / `TldListError::HttpStatus` if every
/// attempt fails, and `TldListError::Io` if the file cannot be written.
pub async fn download_tld_list(url: &str, to_file: &Path) -> Result<usize, TldListError> {
    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(TLD_DOWNLOAD_TIMEOUT_SECS))
        .build()?;

    let body = Retry::spawn(get_retry_strategy(), || fetch_list(&client, url)).await?;
    let suffixes = format_suffix_list(&body);

    let mut contents = suffixes.join("\n");
    contents.push('\n');
    tokio::fs::write(to_file, contents)
        .await
        .map_err(|source| TldListError::Io {
            path: to_file.to_path_buf(),
            source,
        })?;

    info!(
        "Wrote {} TLD suffixes from {url} to {}",
        suffixes.len(),
        to_file.display()
    );
    Ok(suffixes.len())
}

async fn fetch_list(client: &reqwest::Client, url: &str) -> Result<String, TldListError> {
    debug!("Fetching TLD list from {url}");
    let response = client.get(url).send().await?;
    let status = response.status();
    if !status.is_success() {
        warn!("TLD list request to {url} returned {status}");
        return Err(TldListError::HttpStatus {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }
    Ok(response.text().await?)
}
