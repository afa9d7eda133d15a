use crate::cli::{DataArgs, DataCommands};
use crate::data::DataManager;
use crate::error::Result;
use std::path::PathBuf;
use tracing::info;

pub fn run(args: DataArgs) -> Result<()> {
    match args.command {
        DataCommands::Path => handle_path(),
        DataCommands::SetPath { path } => handle_set_path(path),
        DataCommands::ResetPath => handle_reset_path(),
    }
}

fn handle_path() -> Result<()> {
    let manager = DataManager::new()?;
    let path = manager.get_data_path();
    println!("{}", path.display());
    if !path.exists() {
        eprintln!("Note: this directory does not exist yet.");
    }
    Ok(())
}

fn handle_set_path(path: PathBuf) -> Result<()> {
    let absolute = std::path::absolute(&path)?;
    info!("Setting library path to {:?}", absolute);
    DataManager::set_custom_path(&absolute)?;
    println!("Library path set to {}", absolute.display());
    Ok(())
}

fn handle_reset_path() -> Result<()> {
    DataManager::reset_path()?;
    let manager = DataManager::new()?;
    println!(
        "Library path reset to the default: {}",
        manager.get_data_path().display()
    );
    Ok(())
}
