//! JSON output formatting.

use crate::types::Record;
use std::io::{self, Write};

/// Write records as a pretty-printed JSON array.
pub fn write_json<W: Write>(out: &mut W, records: &[Record]) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, records)?;
    writeln!(out)
}

/// Print records in JSON format.
pub fn print_json(records: &[Record]) -> io::Result<()> {
    write_json(&mut io::stdout().lock(), records)
}
