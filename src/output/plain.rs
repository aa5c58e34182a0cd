//! Plain text output formatting.
//!
//! Produces human-readable output with colors and formatting.

use crate::types::{Record, RecordKind};
use console::style;
use std::io::{self, Write};

/// One-line description of a record.
///
/// `- ID: 1 | Sword | Category: weapon | Rarity: rare`
pub fn record_line(kind: RecordKind, record: &Record) -> String {
    let mut line = format!("- ID: {} | {}", record.id, record.name);
    for field in kind.fields() {
        line.push_str(&format!(" | {}: {}", field.label, record.attribute(field.key)));
    }
    line
}

/// Write a single record.
pub fn write_record<W: Write>(out: &mut W, kind: RecordKind, record: &Record) -> io::Result<()> {
    writeln!(out, "{}", record_line(kind, record))
}

/// Write the whole collection, or the kind's empty message.
pub fn write_records<W: Write>(out: &mut W, kind: RecordKind, records: &[Record]) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", style(format!("{}:", kind.title())).cyan().bold())?;

    if records.is_empty() {
        writeln!(out, "{}", style(kind.empty_message()).dim())?;
        return Ok(());
    }

    for record in records {
        write_record(out, kind, record)?;
    }

    Ok(())
}

/// Print the whole collection to stdout.
pub fn print_plain(kind: RecordKind, records: &[Record]) -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_records(&mut out, kind, records)?;
    writeln!(out)
}

/// Print an error message.
pub fn print_error(msg: &str) {
    eprintln!("{} {}", style("Error:").red().bold(), msg);
}

/// Print a warning message.
pub fn print_warning(msg: &str) {
    eprintln!("{} {}", style("Warning:").yellow().bold(), msg);
}

/// Print a success message.
pub fn print_success(msg: &str) {
    println!("{} {}", style("✓").green().bold(), msg);
}

/// Print an info message.
pub fn print_info(msg: &str) {
    println!("{} {}", style("ℹ").blue().bold(), msg);
}
