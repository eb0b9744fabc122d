//! Plain-text export: tab-separated columns with a header row.

use std::io::Write;

use anyhow::Result;

use super::row::{DomainRecord, PLAIN_HEADER};

/// Writes a header and one tab-separated line per record; returns the record count.
pub fn write_plain<'a, W, I>(writer: &mut W, records: I) -> Result<usize>
where
    W: Write + ?Sized,
    I: IntoIterator<Item = &'a DomainRecord>,
{
    writeln!(writer, "{}", PLAIN_HEADER.join("\t"))?;
    let mut count = 0;
    for record in records {
        writeln!(writer, "{}", record.plain_fields().join("\t"))?;
        count += 1;
    }
    writer.flush()?;
    Ok(count)
}
