//! Output formatting module.
//!
//! Provides formatters for plain text, JSON, and CSV output of records.

mod csv_format;
mod json_format;
mod plain;

pub use csv_format::{print_csv, write_csv};
pub use json_format::{print_json, write_json};
pub use plain::{
    print_error, print_info, print_success, print_warning, record_line, write_record,
    write_records,
};

use crate::cli::OutputFormat;
use crate::error::CliResult;
use crate::types::{Record, RecordKind};

/// Format and print records according to the specified format.
pub fn print_records(kind: RecordKind, records: &[Record], format: OutputFormat) -> CliResult<()> {
    match format {
        OutputFormat::Plain => plain::print_plain(kind, records)?,
        OutputFormat::Json => json_format::print_json(records)?,
        OutputFormat::Csv => csv_format::print_csv(kind, records)?,
    }
    Ok(())
}
