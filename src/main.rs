use anyhow::Context;
use clap::Parser;
use roster::cli::Cli;
use roster::config::Paths;
use roster::{logging, output};
use std::process::ExitCode;
use tracing::{error, info};

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{:#}", e);
            output::print_error(&format!("{:#}", e));
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let paths = Paths::resolve().context("failed to locate configuration directories")?;
    let settings = cli.settings(&paths).context("failed to load settings")?;

    let log_file = settings.log_file(&paths);
    logging::init(&log_file, &settings.log_level)
        .with_context(|| format!("failed to open activity log {}", log_file.display()))?;

    info!("application started ({})", settings.kind.plural());
    cli.run(&settings, &paths)?;
    Ok(())
}
