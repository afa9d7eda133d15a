pub mod cloze;
pub mod data;
pub mod library;
pub mod verbs;
pub mod vocab;

use crate::cli::SettingsArgs;
use crate::config::{AppConfig, ConfigOverrides, build_config};
use crate::data::DataManager;
use crate::error::Result;

/// Resolves the configuration shared by all worksheet commands.
pub(crate) fn load_app_config(
    settings: &SettingsArgs,
    overrides: &ConfigOverrides,
) -> Result<AppConfig> {
    let data_manager = DataManager::new()?;
    build_config(settings, overrides, &data_manager)
}
