//! CLI subcommand definitions and handlers.
//!
//! Implements a git-like subcommand architecture:
//! - `roster` / `roster menu` - Interactive menu
//! - `roster add|find|update|delete` - One-shot record operations
//! - `roster list` - Print the whole collection

mod menu;
mod records;

pub use menu::Menu;
pub use records::{AddCommand, DeleteCommand, FindCommand, ListCommand, UpdateCommand};

use crate::config::{AppSettings, Paths};
use crate::error::CliResult;
use crate::output;
use crate::storage::RecordStore;
use crate::types::RecordKind;
use clap::{Parser, Subcommand};
use std::io;
use std::path::PathBuf;

/// roster - A console record manager.
///
/// Keeps a small collection of inventory items or racing drivers in a JSON
/// file, with an interactive menu and one-shot commands for scripting.
#[derive(Parser, Debug)]
#[command(name = "roster")]
#[command(author = "HueCodes <huecodes@proton.me>")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "A console record manager backed by JSON", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Subcommand to execute (defaults to the interactive menu)
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to custom settings file
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Collection to manage
    #[arg(short, long, global = true, value_enum, env = "ROSTER_KIND")]
    pub kind: Option<RecordKind>,

    /// Record file to read and write
    #[arg(long, global = true, value_name = "PATH", env = "ROSTER_DATA_FILE")]
    pub data_file: Option<PathBuf>,

    /// Activity log file
    #[arg(long, global = true, value_name = "PATH", env = "ROSTER_LOG_FILE")]
    pub log_file: Option<PathBuf>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Open the interactive menu
    #[command(alias = "m")]
    Menu,

    /// Add a record
    #[command(alias = "a")]
    Add(AddCommand),

    /// Show a record by ID
    #[command(alias = "f")]
    Find(FindCommand),

    /// Change fields of a record
    #[command(alias = "u")]
    Update(UpdateCommand),

    /// Delete a record
    #[command(alias = "d")]
    Delete(DeleteCommand),

    /// List all records
    #[command(alias = "l", alias = "ls")]
    List(ListCommand),
}

/// Output format for records.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable plain text
    #[default]
    Plain,
    /// JSON structured output
    Json,
    /// CSV format for spreadsheets
    Csv,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Plain => write!(f, "plain"),
            Self::Json => write!(f, "json"),
            Self::Csv => write!(f, "csv"),
        }
    }
}

impl Cli {
    /// Merge the settings file with command-line and environment overrides.
    pub fn settings(&self, paths: &Paths) -> CliResult<AppSettings> {
        let mut settings = match &self.config {
            Some(path) => AppSettings::load_from(path)?,
            None => AppSettings::load(paths)?,
        };

        if let Some(kind) = self.kind {
            settings.kind = kind;
        }
        if let Some(path) = &self.data_file {
            settings.data_file = Some(path.clone());
        }
        if let Some(path) = &self.log_file {
            settings.log_file = Some(path.clone());
        }
        if self.verbose {
            settings.log_level = "debug".to_string();
        }

        Ok(settings)
    }

    /// Open the store and dispatch the selected command.
    pub fn run(&self, settings: &AppSettings, paths: &Paths) -> CliResult<()> {
        let (mut store, loaded) = RecordStore::open(settings.data_file(paths), settings.kind);

        match &self.command {
            None | Some(Commands::Menu) => {
                if let Err(e) = loaded {
                    output::print_warning(&format!(
                        "{}; starting with an empty {} (saving will overwrite {})",
                        e,
                        settings.kind.title().to_lowercase(),
                        store.path().display()
                    ));
                }

                let stdin = io::stdin();
                Menu::new(&mut store, stdin.lock(), io::stdout()).run()?;
                Ok(())
            }
            Some(Commands::Add(cmd)) => {
                loaded?;
                cmd.execute(&mut store, self.quiet)
            }
            Some(Commands::Find(cmd)) => {
                loaded?;
                cmd.execute(&store)
            }
            Some(Commands::Update(cmd)) => {
                loaded?;
                cmd.execute(&mut store, self.quiet)
            }
            Some(Commands::Delete(cmd)) => {
                loaded?;
                cmd.execute(&mut store, self.quiet)
            }
            Some(Commands::List(cmd)) => {
                loaded?;
                cmd.execute(&store)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn paths_in(dir: &TempDir) -> Paths {
        Paths {
            config_dir: dir.path().join("config"),
            data_dir: dir.path().join("data"),
        }
    }

    #[test]
    fn test_no_subcommand_means_menu() {
        let cli = Cli::try_parse_from(["roster"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_global_options_after_subcommand() {
        let cli = Cli::try_parse_from(["roster", "list", "--kind", "driver", "-f", "csv"]).unwrap();
        assert_eq!(cli.kind, Some(RecordKind::Driver));
        assert!(matches!(
            cli.command,
            Some(Commands::List(ListCommand {
                format: OutputFormat::Csv
            }))
        ));
    }

    #[test]
    fn test_cli_overrides_settings_file() {
        let dir = TempDir::new().unwrap();
        let paths = paths_in(&dir);
        AppSettings {
            kind: RecordKind::Driver,
            log_level: "warn".to_string(),
            ..AppSettings::default()
        }
        .save(&paths)
        .unwrap();

        let cli = Cli::try_parse_from(["roster", "-v", "--data-file", "/tmp/f1.json"]).unwrap();
        let settings = cli.settings(&paths).unwrap();

        assert_eq!(settings.kind, RecordKind::Driver);
        assert_eq!(settings.data_file, Some(PathBuf::from("/tmp/f1.json")));
        assert_eq!(settings.log_level, "debug");
    }

    #[test]
    fn test_one_shot_command_fails_on_malformed_file() {
        let dir = TempDir::new().unwrap();
        let paths = paths_in(&dir);
        let data_file = dir.path().join("items.json");
        std::fs::write(&data_file, "not json").unwrap();

        let settings = AppSettings {
            data_file: Some(data_file.clone()),
            ..AppSettings::default()
        };
        let cli = Cli::try_parse_from(["roster", "add", "1", "Sword"]).unwrap();

        assert!(cli.run(&settings, &paths).is_err());
        assert_eq!(std::fs::read_to_string(&data_file).unwrap(), "not json");
    }
}
