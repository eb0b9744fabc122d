//! Input file reading.

use std::path::Path;

use anyhow::{Context, Result};
use log::debug;

use crate::error_handling::{InfoType, ProcessingStats};

/// Reads `path` and returns its non-blank, non-comment lines, trimmed.
///
/// Blank lines and lines starting with `#` are skipped and counted as
/// `InfoType::SkippedLine`.
pub(crate) fn read_input_lines(path: &Path, stats: &ProcessingStats) -> Result<Vec<String>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read input file: {}", path.display()))?;
    Ok(input_lines(&text, stats))
}

pub(crate) fn input_lines(text: &str, stats: &ProcessingStats) -> Vec<String> {
    text.lines()
        .enumerate()
        .filter_map(|(n, line)| {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                debug!("Skipping line {}", n + 1);
                stats.increment_info(InfoType::SkippedLine);
                None
            } else {
                Some(line.to_string())
            }
        })
        .collect()
}
