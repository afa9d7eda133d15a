mod cli;
mod commands;
mod config;
mod data;
mod error;
mod logging;
mod utils;

use crate::cli::{Cli, Commands};
use crate::error::{CliError, Result};
use clap::Parser;
use tracing::{debug, error, info};

fn main() {
    if let Err(e) = run_app() {
        eprintln!("\n❌ Error: {}", e);
        std::process::exit(1);
    }
}

fn run_app() -> Result<()> {
    let cli = Cli::parse();
    logging::setup_logging(cli.verbose, cli.quiet, cli.log_file.clone())?;

    let (panic_hook, eyre_hook) = color_eyre::config::HookBuilder::default().into_hooks();
    eyre_hook.install().map_err(|e| CliError::Other(e.into()))?;
    std::panic::set_hook(Box::new(move |pi| {
        error!("{}", panic_hook.panic_report(pi));
    }));

    info!("🚀 fiches v{} starting up.", env!("CARGO_PKG_VERSION"));
    debug!("Full CLI arguments parsed: {:?}", &cli);

    let settings = &cli.settings;
    let quiet = cli.quiet;
    let command_result = match cli.command {
        Commands::Vocab(args) => {
            info!("Dispatching to 'vocab' command.");
            commands::vocab::run(args, settings, quiet)
        }
        Commands::Verbs(args) => {
            info!("Dispatching to 'verbs' command.");
            commands::verbs::run(args, settings, quiet)
        }
        Commands::Cloze(args) => {
            info!("Dispatching to 'cloze' command.");
            commands::cloze::run(args, settings, quiet)
        }
        Commands::Library => {
            info!("Dispatching to 'library' command.");
            commands::library::run(settings)
        }
        Commands::Data(args) => {
            info!("Dispatching to 'data' command.");
            commands::data::run(args)
        }
    };

    match &command_result {
        Ok(_) => {
            info!("✅ Command completed successfully.");
        }
        Err(e) => {
            error!("❌ Command failed: {}", e);
        }
    }

    command_result
}
