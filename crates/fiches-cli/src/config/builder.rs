use super::defaults::DefaultsConfig;
use super::file::FileConfig;
use super::models::AppConfig;
use crate::cli::{LayoutArgs, SettingsArgs};
use crate::data::DataManager;
use crate::error::{CliError, Result};
use fiches::core::io::library::VocabularyLibrary;
use fiches::engine::config::WorksheetConfigBuilder;
use std::path::PathBuf;
use std::str::FromStr;
use tracing::debug;

/// Per-command flags that override configuration values.
#[derive(Debug, Default, Clone)]
pub struct ConfigOverrides {
    pub grid_size: Option<usize>,
    pub max_attempts: Option<usize>,
    pub font_size: Option<f32>,
    pub row_height_cm: Option<f32>,
    pub drill_rows: Option<usize>,
}

impl ConfigOverrides {
    pub fn with_layout(mut self, layout: &LayoutArgs) -> Self {
        self.font_size = layout.font_size;
        self.row_height_cm = layout.row_height;
        self
    }
}

pub fn build_config(
    settings: &SettingsArgs,
    overrides: &ConfigOverrides,
    data_manager: &DataManager,
) -> Result<AppConfig> {
    let defaults = DefaultsConfig::default();

    let file_config = if let Some(config_path) = &settings.config {
        FileConfig::from_file(config_path)?
    } else {
        FileConfig::default()
    };
    let mut file_config = apply_set_values(file_config, &settings.set_values)?;

    let library_root = settings
        .library
        .clone()
        .or_else(|| file_config.library.take())
        .unwrap_or_else(|| data_manager.get_data_path().to_path_buf());
    let library = VocabularyLibrary::new(library_root);
    debug!("Using vocabulary library at {:?}", library.root());

    let template = settings
        .template
        .clone()
        .or_else(|| file_config.template.take())
        .or_else(|| library.template_path());

    let word_search = file_config.word_search.take().unwrap_or_default();
    let layout = file_config.layout.take().unwrap_or_default();
    let conjugation = file_config.conjugation.take().unwrap_or_default();

    let mut builder = WorksheetConfigBuilder::new()
        .grid_size(
            overrides
                .grid_size
                .or(word_search.grid_size)
                .unwrap_or(defaults.grid_size),
        )
        .max_attempts(
            overrides
                .max_attempts
                .or(word_search.max_attempts)
                .unwrap_or(defaults.max_attempts),
        )
        .drill_rows(
            overrides
                .drill_rows
                .or(conjugation.rows)
                .unwrap_or(defaults.drill_rows),
        )
        .seed(settings.seed.or(file_config.seed));

    if let Some(size) = overrides.font_size.or(layout.font_size) {
        builder = builder.font_size_pt(size);
    }
    if let Some(height) = overrides.row_height_cm.or(layout.row_height_cm) {
        builder = builder.row_height_cm(height);
    }

    let worksheet = builder
        .build()
        .map_err(|e| CliError::Config(e.to_string()))?;

    Ok(AppConfig {
        library,
        template,
        worksheet,
    })
}

fn parse_value<T: FromStr>(key: &str, value: &str, kind: &str) -> Result<T> {
    value
        .trim()
        .parse()
        .map_err(|_| CliError::Config(format!("Invalid {} value for {}: {}", kind, key, value)))
}

fn apply_set_values(mut config: FileConfig, set_values: &[String]) -> Result<FileConfig> {
    for kv_pair in set_values {
        let Some((key, value_str)) = kv_pair.split_once('=') else {
            return Err(CliError::Config(format!(
                "Invalid --set format: '{}'. Expected KEY=VALUE.",
                kv_pair
            )));
        };
        let key = key.trim();

        match key {
            "library" => config.library = Some(PathBuf::from(value_str.trim())),
            "template" => config.template = Some(PathBuf::from(value_str.trim())),
            "seed" => config.seed = Some(parse_value(key, value_str, "integer")?),
            "word-search.grid-size" => {
                config
                    .word_search
                    .get_or_insert_with(Default::default)
                    .grid_size = Some(parse_value(key, value_str, "integer")?);
            }
            "word-search.max-attempts" => {
                config
                    .word_search
                    .get_or_insert_with(Default::default)
                    .max_attempts = Some(parse_value(key, value_str, "integer")?);
            }
            "layout.font-size" => {
                config.layout.get_or_insert_with(Default::default).font_size =
                    Some(parse_value(key, value_str, "float")?);
            }
            "layout.row-height-cm" => {
                config
                    .layout
                    .get_or_insert_with(Default::default)
                    .row_height_cm = Some(parse_value(key, value_str, "float")?);
            }
            "conjugation.rows" => {
                config.conjugation.get_or_insert_with(Default::default).rows =
                    Some(parse_value(key, value_str, "integer")?);
            }
            _ => {
                return Err(CliError::Config(format!(
                    "Unsupported configuration key for --set: '{}'",
                    key
                )));
            }
        }
    }
    Ok(config)
}
