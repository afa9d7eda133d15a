use fiches::core::io::library::VocabularyLibrary;
use fiches::engine::config::WorksheetConfig;
use std::path::PathBuf;

pub struct AppConfig {
    pub library: VocabularyLibrary,
    pub template: Option<PathBuf>,
    pub worksheet: WorksheetConfig,
}
