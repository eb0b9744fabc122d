//! JSONL export.
//!
//! Each line is a complete JSON object for one decomposed domain, suitable for
//! piping to `jq` or loading elsewhere.

use std::io::Write;

use anyhow::{Context, Result};

use super::row::DomainRecord;

/// Writes one JSON object per record and returns the number written.
pub fn write_jsonl<'a, W, I>(writer: &mut W, records: I) -> Result<usize>
where
    W: Write + ?Sized,
    I: IntoIterator<Item = &'a DomainRecord>,
{
    let mut count = 0;
    for record in records {
        serde_json::to_writer(&mut *writer, record)
            .with_context(|| format!("Failed to serialize record for {}", record.domain))?;
        writer.write_all(b"\n")?;
        count += 1;
    }
    writer.flush()?;
    Ok(count)
}
