//! Interactive menu.
//!
//! A line-oriented loop over any reader/writer pair, so sessions can be
//! scripted in tests. All store failures are reported and the loop carries
//! on; only I/O errors on the terminal itself end the session.

use crate::output;
use crate::storage::RecordStore;
use crate::types::{validate, Record, RecordId, RecordPatch};
use console::style;
use std::fmt::Display;
use std::io::{self, BufRead, Write};
use tracing::{info, warn};

/// Drives a [`RecordStore`] from user input.
pub struct Menu<'s, R, W> {
    store: &'s mut RecordStore,
    input: R,
    out: W,
}

impl<'s, R: BufRead, W: Write> Menu<'s, R, W> {
    pub fn new(store: &'s mut RecordStore, input: R, out: W) -> Self {
        Self { store, input, out }
    }

    /// Run until the user exits or input ends.
    pub fn run(&mut self) -> io::Result<()> {
        let kind = self.store.kind();

        loop {
            self.show_options()?;

            let Some(choice) = self.prompt("Choose an option: ")? else {
                break;
            };

            match choice.as_str() {
                "1" => self.add()?,
                "2" => self.find()?,
                "3" => self.update()?,
                "4" => self.delete()?,
                "5" => output::write_records(&mut self.out, kind, self.store.list())?,
                "6" => break,
                other => {
                    writeln!(self.out, "Invalid option. Try again.")?;
                    warn!("invalid option selected: {}", other);
                }
            }
        }

        writeln!(self.out, "{}", kind.farewell())?;
        info!("application closed by user");
        Ok(())
    }

    fn show_options(&mut self) -> io::Result<()> {
        let kind = self.store.kind();
        let rule = "=".repeat(29);

        writeln!(self.out)?;
        writeln!(self.out, "{}", rule)?;
        writeln!(self.out, "   {} MENU", kind.title().to_uppercase())?;
        writeln!(self.out, "{}", rule)?;
        writeln!(self.out, "1. Add {}", kind.noun())?;
        writeln!(self.out, "2. Find {}", kind.noun())?;
        writeln!(self.out, "3. Update {}", kind.noun())?;
        writeln!(self.out, "4. Delete {}", kind.noun())?;
        writeln!(self.out, "5. List all {}", kind.plural())?;
        writeln!(self.out, "6. Exit")?;
        writeln!(self.out)
    }

    fn add(&mut self) -> io::Result<()> {
        let kind = self.store.kind();
        writeln!(self.out, "\nAdd a new {}", kind.noun())?;

        let id = loop {
            let Some(raw) = self.prompt(&format!("{} ID: ", kind.label()))? else {
                return Ok(());
            };
            match validate::parse_id(&raw) {
                Ok(id) if self.store.contains(id) => {
                    writeln!(self.out, "That ID already exists.")?;
                }
                Ok(id) => break id,
                Err(e) => writeln!(self.out, "{}", e)?,
            }
        };

        let name = loop {
            let Some(raw) = self.prompt(&format!("{} name: ", kind.label()))? else {
                return Ok(());
            };
            match validate::require_name(&raw) {
                Ok(name) => break name,
                Err(e) => writeln!(self.out, "{}", e)?,
            }
        };

        let mut record = Record::new(id, name);
        for field in kind.fields() {
            let Some(value) = self.prompt(&format!("{}: ", field.hint))? else {
                return Ok(());
            };
            record = record.with_attribute(field.key, value);
        }

        match self.store.add(record) {
            Ok(_) => writeln!(self.out, "{} added.", kind.label()),
            Err(e) => self.report(e),
        }
    }

    fn find(&mut self) -> io::Result<()> {
        let kind = self.store.kind();
        writeln!(self.out, "\nFind {} by ID", kind.noun())?;

        let Some(id) = self.prompt_id("ID to find: ", "find")? else {
            return Ok(());
        };

        match self.store.find(id) {
            Some(record) => {
                info!("{} found: {}", kind, record.summary());
                output::write_record(&mut self.out, kind, record)
            }
            None => {
                info!("lookup failed, id {} does not exist", id);
                writeln!(self.out, "No {} with that ID.", kind.noun())
            }
        }
    }

    fn update(&mut self) -> io::Result<()> {
        let kind = self.store.kind();
        writeln!(self.out, "\nUpdate {}", kind.noun())?;

        let Some(id) = self.prompt_id("ID to update: ", "update")? else {
            return Ok(());
        };

        match self.store.get(id).map(|record| output::record_line(kind, record)) {
            Ok(line) => writeln!(self.out, "{}", line)?,
            Err(e) => return self.report(e),
        }

        let Some(name) = self.prompt("New name (enter to keep current): ")? else {
            return Ok(());
        };
        let mut patch = RecordPatch::new().name(name);

        for field in kind.fields() {
            let Some(value) = self.prompt(&format!("New {}: ", field.label.to_lowercase()))? else {
                return Ok(());
            };
            patch = patch.attribute(field.key, value);
        }

        match self.store.update(id, &patch) {
            Ok(_) => writeln!(self.out, "{} updated.", kind.label()),
            Err(e) => self.report(e),
        }
    }

    fn delete(&mut self) -> io::Result<()> {
        let kind = self.store.kind();
        writeln!(self.out, "\nDelete {}", kind.noun())?;

        let Some(id) = self.prompt_id("ID to delete: ", "delete")? else {
            return Ok(());
        };

        match self.store.delete(id) {
            Ok(_) => writeln!(self.out, "{} deleted.", kind.label()),
            Err(e) => self.report(e),
        }
    }

    /// Ask once for an id. Bad input is reported, logged and yields `None`.
    fn prompt_id(&mut self, prompt: &str, action: &str) -> io::Result<Option<RecordId>> {
        let Some(raw) = self.prompt(prompt)? else {
            return Ok(None);
        };

        match validate::parse_id(&raw) {
            Ok(id) => Ok(Some(id)),
            Err(e) => {
                writeln!(self.out, "Invalid ID: {}", e)?;
                warn!("{} with invalid id: {:?}", action, raw);
                Ok(None)
            }
        }
    }

    /// Print a prompt and read one trimmed line. `None` at end of input.
    fn prompt(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.out, "{}", prompt)?;
        self.out.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.out)?;
            return Ok(None);
        }

        Ok(Some(line.trim().to_string()))
    }

    fn report(&mut self, err: impl Display) -> io::Result<()> {
        writeln!(self.out, "{} {}", style("Error:").red().bold(), err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::RecordKind;
    use std::io::Cursor;
    use tempfile::TempDir;

    fn session(store: &mut RecordStore, script: &str) -> String {
        let mut out = Vec::new();
        Menu::new(store, Cursor::new(script.to_string()), &mut out)
            .run()
            .unwrap();
        String::from_utf8(out).unwrap()
    }

    fn driver_store(dir: &TempDir) -> RecordStore {
        RecordStore::new(dir.path().join("drivers.json"), RecordKind::Driver)
    }

    #[test]
    fn test_add_retries_until_valid() {
        let dir = TempDir::new().unwrap();
        let mut store = driver_store(&dir);
        store
            .add(Record::new(RecordId::new(44), "Lewis Hamilton").with_attribute("team", "Ferrari"))
            .unwrap();

        let out = session(
            &mut store,
            "1\nforty\n44\n81\n\nOscar Piastri\nMcLaren\nAustralian\n6\n",
        );

        assert!(out.contains("the id must be a number"));
        assert!(out.contains("That ID already exists."));
        assert!(out.contains("the name cannot be empty"));
        assert!(out.contains("Driver added."));

        let added = store.find(RecordId::new(81)).unwrap();
        assert_eq!(added.name, "Oscar Piastri");
        assert_eq!(added.attribute("team"), "McLaren");
        assert_eq!(added.attribute("nationality"), "Australian");
    }

    #[test]
    fn test_find_and_list() {
        let dir = TempDir::new().unwrap();
        let mut store = driver_store(&dir);
        store
            .add(
                Record::new(RecordId::new(1), "Max Verstappen")
                    .with_attribute("team", "Red Bull")
                    .with_attribute("nationality", "Dutch"),
            )
            .unwrap();

        let out = session(&mut store, "2\n1\n2\n9\n2\nx\n5\n6\n");

        assert!(out.contains("- ID: 1 | Max Verstappen | Team: Red Bull | Nationality: Dutch"));
        assert!(out.contains("No driver with that ID."));
        assert!(out.contains("Invalid ID"));
    }

    #[test]
    fn test_update_keeps_blank_fields() {
        let dir = TempDir::new().unwrap();
        let mut store = driver_store(&dir);
        store
            .add(
                Record::new(RecordId::new(14), "Fernando Alonso")
                    .with_attribute("team", "Aston Martin")
                    .with_attribute("nationality", "Spanish"),
            )
            .unwrap();

        let out = session(&mut store, "3\n14\n\nAlpine\n\n6\n");
        assert!(out.contains("Driver updated."));

        let record = store.find(RecordId::new(14)).unwrap();
        assert_eq!(record.name, "Fernando Alonso");
        assert_eq!(record.attribute("team"), "Alpine");
        assert_eq!(record.attribute("nationality"), "Spanish");
    }

    #[test]
    fn test_update_missing_id_returns_to_menu() {
        let dir = TempDir::new().unwrap();
        let mut store = driver_store(&dir);

        let out = session(&mut store, "3\n7\n5\n6\n");
        assert!(out.contains("no record with id 7"));
        assert!(out.contains(RecordKind::Driver.empty_message()));
    }

    #[test]
    fn test_delete() {
        let dir = TempDir::new().unwrap();
        let mut store = driver_store(&dir);
        store.add(Record::new(RecordId::new(4), "Lando Norris")).unwrap();

        let out = session(&mut store, "4\n4\n4\n4\n6\n");
        assert!(out.contains("Driver deleted."));
        assert!(out.contains("no record with id 4"));
        assert!(store.is_empty());
    }

    #[test]
    fn test_invalid_option_and_end_of_input() {
        let dir = TempDir::new().unwrap();
        let mut store = driver_store(&dir);

        let out = session(&mut store, "9\n");
        assert!(out.contains("Invalid option. Try again."));
        assert!(out.contains(RecordKind::Driver.farewell()));
    }

    #[test]
    fn test_end_of_input_mid_add_adds_nothing() {
        let dir = TempDir::new().unwrap();
        let mut store = RecordStore::new(dir.path().join("items.json"), RecordKind::Item);

        session(&mut store, "1\n3\nLongsword\n");
        assert!(store.is_empty());
    }
}
