//! One-shot record subcommands.
//!
//! Handles `roster add|find|update|delete|list` for scripting without the
//! interactive menu.

use super::OutputFormat;
use crate::error::{CliError, CliResult};
use crate::output;
use crate::storage::RecordStore;
use crate::types::{validate, Record, RecordId, RecordPatch};
use clap::Parser;
use std::io::{self, BufRead, Write};

/// Add a new record.
#[derive(Parser, Debug)]
pub struct AddCommand {
    /// Unique numeric ID
    #[arg(value_name = "ID", allow_negative_numbers = true)]
    pub id: RecordId,

    /// Record name
    #[arg(value_name = "NAME")]
    pub name: String,

    /// Attribute value, e.g. `-a team=Ferrari` (repeatable)
    #[arg(short = 'a', long = "attr", value_name = "KEY=VALUE", value_parser = validate::parse_attribute)]
    pub attributes: Vec<(String, String)>,
}

impl AddCommand {
    pub fn execute(&self, store: &mut RecordStore, quiet: bool) -> CliResult<()> {
        let record = self
            .attributes
            .iter()
            .fold(Record::new(self.id, self.name.clone()), |r, (k, v)| {
                r.with_attribute(k.clone(), v.clone())
            });

        let kind = store.kind();
        let added = store.add(record)?;

        if !quiet {
            output::print_success(&format!("{} added: {}", kind.label(), added.name));
        }

        Ok(())
    }
}

/// Show a record by ID.
#[derive(Parser, Debug)]
pub struct FindCommand {
    /// ID to look up
    #[arg(value_name = "ID", allow_negative_numbers = true)]
    pub id: RecordId,

    /// Output format
    #[arg(short, long, value_enum, default_value = "plain")]
    pub format: OutputFormat,
}

impl FindCommand {
    pub fn execute(&self, store: &RecordStore) -> CliResult<()> {
        let record = store.get(self.id)?;

        match self.format {
            OutputFormat::Plain => {
                output::write_record(&mut io::stdout().lock(), store.kind(), record)?
            }
            _ => output::print_records(store.kind(), std::slice::from_ref(record), self.format)?,
        }

        Ok(())
    }
}

/// Change fields of an existing record.
///
/// Only the options given are changed; empty values are ignored.
#[derive(Parser, Debug)]
pub struct UpdateCommand {
    /// ID of the record to change
    #[arg(value_name = "ID", allow_negative_numbers = true)]
    pub id: RecordId,

    /// New name
    #[arg(short, long)]
    pub name: Option<String>,

    /// New attribute value, e.g. `-a rarity=legendary` (repeatable)
    #[arg(short = 'a', long = "attr", value_name = "KEY=VALUE", value_parser = validate::parse_attribute)]
    pub attributes: Vec<(String, String)>,
}

impl UpdateCommand {
    pub fn patch(&self) -> RecordPatch {
        RecordPatch {
            name: self.name.clone(),
            attributes: self.attributes.iter().cloned().collect(),
        }
    }

    pub fn execute(&self, store: &mut RecordStore, quiet: bool) -> CliResult<()> {
        let patch = self.patch();
        if patch.is_empty() && !quiet {
            output::print_warning("nothing to update");
        }

        let kind = store.kind();
        let updated = store.update(self.id, &patch)?;

        if !quiet {
            output::print_success(&format!("{} updated", kind.label()));
            println!("{}", output::record_line(kind, updated));
        }

        Ok(())
    }
}

/// Delete a record.
#[derive(Parser, Debug)]
pub struct DeleteCommand {
    /// ID of the record to delete
    #[arg(value_name = "ID", allow_negative_numbers = true)]
    pub id: RecordId,

    /// Skip confirmation
    #[arg(short = 'y', long)]
    pub yes: bool,
}

impl DeleteCommand {
    pub fn execute(&self, store: &mut RecordStore, quiet: bool) -> CliResult<()> {
        let kind = store.kind();
        let line = output::record_line(kind, store.get(self.id)?);

        if !self.yes {
            let stdin = io::stdin();
            let mut out = io::stdout();
            if !confirm(&mut stdin.lock(), &mut out, &format!("Delete {}?", line))? {
                output::print_info("Cancelled.");
                return Ok(());
            }
        }

        let removed = store.delete(self.id)?;

        if !quiet {
            output::print_success(&format!("{} '{}' deleted", kind.label(), removed.name));
        }

        Ok(())
    }
}

/// List every record.
#[derive(Parser, Debug)]
pub struct ListCommand {
    /// Output format
    #[arg(short, long, value_enum, default_value = "plain")]
    pub format: OutputFormat,
}

impl ListCommand {
    pub fn execute(&self, store: &RecordStore) -> CliResult<()> {
        output::print_records(store.kind(), store.list(), self.format)
    }
}

/// Ask a yes/no question; anything but `y` is no.
fn confirm<R: BufRead, W: Write>(input: &mut R, out: &mut W, question: &str) -> CliResult<bool> {
    write!(out, "{} [y/N] ", question)?;
    out.flush()?;

    let mut answer = String::new();
    input.read_line(&mut answer).map_err(CliError::Io)?;
    Ok(answer.trim().eq_ignore_ascii_case("y"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::RecordKind;
    use std::io::Cursor;
    use tempfile::TempDir;

    #[derive(Parser, Debug)]
    struct Harness {
        #[command(subcommand)]
        command: Sub,
    }

    #[derive(clap::Subcommand, Debug)]
    enum Sub {
        Add(AddCommand),
        Update(UpdateCommand),
    }

    #[test]
    fn test_add_command_parses_attributes() {
        let parsed = Harness::try_parse_from([
            "roster", "add", "7", "Dark Sword", "-a", "category=weapon", "--attr", "rarity=rare",
        ])
        .unwrap();

        let Sub::Add(cmd) = parsed.command else {
            panic!("expected add");
        };
        assert_eq!(cmd.id, RecordId::new(7));
        assert_eq!(cmd.attributes.len(), 2);

        let dir = TempDir::new().unwrap();
        let mut store = RecordStore::new(dir.path().join("items.json"), RecordKind::Item);
        cmd.execute(&mut store, true).unwrap();
        assert_eq!(store.find(RecordId::new(7)).unwrap().attribute("rarity"), "rare");
    }

    #[test]
    fn test_add_command_rejects_non_numeric_id() {
        assert!(Harness::try_parse_from(["roster", "add", "seven", "Dark Sword"]).is_err());
    }

    #[test]
    fn test_update_command_patch() {
        let parsed =
            Harness::try_parse_from(["roster", "update", "-2", "-a", "team=Sauber"]).unwrap();

        let Sub::Update(cmd) = parsed.command else {
            panic!("expected update");
        };
        assert_eq!(cmd.id, RecordId::new(-2));
        assert_eq!(cmd.patch(), RecordPatch::new().attribute("team", "Sauber"));
    }

    #[test]
    fn test_add_command_duplicate_id() {
        let dir = TempDir::new().unwrap();
        let mut store = RecordStore::new(dir.path().join("items.json"), RecordKind::Item);
        store.add(Record::new(RecordId::new(1), "Sword")).unwrap();

        let cmd = AddCommand {
            id: RecordId::new(1),
            name: "Shield".to_string(),
            attributes: Vec::new(),
        };
        let err = cmd.execute(&mut store, true).unwrap_err();
        assert!(matches!(
            err,
            CliError::Record(crate::error::RecordError::DuplicateIdentifier(_))
        ));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_confirm() {
        let mut out = Vec::new();
        assert!(confirm(&mut Cursor::new("y\n"), &mut out, "Delete?").unwrap());
        assert!(confirm(&mut Cursor::new("Y\n"), &mut out, "Delete?").unwrap());
        assert!(!confirm(&mut Cursor::new("\n"), &mut out, "Delete?").unwrap());
        assert!(!confirm(&mut Cursor::new(""), &mut out, "Delete?").unwrap());
    }
}
