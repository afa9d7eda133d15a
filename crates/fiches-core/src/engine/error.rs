use super::config::ConfigError;
use super::document::DocumentError;
use crate::core::io::json::LoadError;
use crate::core::selection::SelectionError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum WorksheetError {
    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("Failed to load input: {0}")]
    Load(#[from] LoadError),

    #[error("Vocabulary selection failed: {0}")]
    Selection(#[from] SelectionError),

    #[error("Failed to render document: {0}")]
    Document(#[from] DocumentError),

    #[error("Nothing to put on the worksheet: no {0} selected")]
    EmptySelection(&'static str),

    #[error("Unknown verb '{0}'")]
    UnknownVerb(String),

    #[error("None of the selected verbs has a tense named '{0}'")]
    UnknownTense(String),

    #[error("Row count must be between 1 and {max}, got {requested}")]
    InvalidRowCount { requested: usize, max: usize },
}
