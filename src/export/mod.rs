//! Export of decomposed domains.
//!
//! This module turns `Domain` values into flat [`DomainRecord`] rows and
//! writes them as JSONL or tab-separated text.

mod jsonl;
mod output;
mod plain;
mod row;

pub use jsonl::write_jsonl;
pub use output::open_output;
pub use plain::write_plain;
pub use row::DomainRecord;

use std::io::Write;

use anyhow::Result;

use crate::config::OutputFormat;

/// Writes `records` in `format`; returns the number written.
pub fn write_records<W: Write + ?Sized>(
    writer: &mut W,
    records: &[DomainRecord],
    format: OutputFormat,
) -> Result<usize> {
    match format {
        OutputFormat::Jsonl => write_jsonl(writer, records),
        OutputFormat::Plain => write_plain(writer, records),
    }
}
