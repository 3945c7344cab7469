//! sqlaudit CLI - SQL review

use anyhow::Result;
use clap::Parser;
use sqlaudit_cli::commands::{self, review::ReviewExitCode};
use sqlaudit_cli::{logging, Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);

    let exit = match cli.command {
        Some(Commands::Review { ref file }) => commands::review::run(file.as_deref(), &cli)?,
        Some(Commands::Rules) => {
            commands::rules::run(&cli)?;
            ReviewExitCode::Success
        }
        Some(Commands::Explain { ref item }) => {
            commands::explain::run(item)?;
            ReviewExitCode::Success
        }
        Some(Commands::Init { ref path }) => {
            commands::init::run(path.as_deref())?;
            ReviewExitCode::Success
        }
        // Default command is review of stdin
        None => commands::review::run(None, &cli)?,
    };

    if exit != ReviewExitCode::Success {
        std::process::exit(exit.code());
    }
    Ok(())
}
