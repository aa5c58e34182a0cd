//! CSV output formatting.

use crate::types::{Record, RecordKind};
use std::io::{self, Write};

/// Write records as CSV with an `id,name,<fields>` header.
pub fn write_csv<W: Write>(out: W, kind: RecordKind, records: &[Record]) -> csv::Result<()> {
    let mut wtr = csv::Writer::from_writer(out);

    let mut header = vec!["id", "name"];
    header.extend(kind.fields().iter().map(|f| f.key));
    wtr.write_record(&header)?;

    for record in records {
        let mut row = vec![record.id.to_string(), record.name.clone()];
        row.extend(
            kind.fields()
                .iter()
                .map(|f| record.attribute(f.key).to_string()),
        );
        wtr.write_record(&row)?;
    }

    wtr.flush()?;
    Ok(())
}

/// Print records in CSV format.
pub fn print_csv(kind: RecordKind, records: &[Record]) -> csv::Result<()> {
    write_csv(io::stdout().lock(), kind, records)
}
