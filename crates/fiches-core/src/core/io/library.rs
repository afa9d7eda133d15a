use super::json::{self, LoadError};
use crate::core::models::conjugation::ConjugationTable;
use crate::core::models::vocab::VocabEntry;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

pub const VOCABULARY_DIR: &str = "Vokabeln";
pub const DICTIONARY_DIR: &str = "vocabs_all";
pub const MERGED_DICTIONARY: &str = "zusammengeführt.json";
pub const CONTEXT_DIR: &str = "Kontexte";
pub const LEARNING_STATUS_DIR: &str = "Vokabeln";
pub const VERB_DIR: &str = "unregelmäßige Verben alle";
pub const TEMPLATE_FILE: &str = "Vorlagen/Vorlage Vokabellisten.docx";

/// A vocabulary library on disk.
///
/// ```text
/// <root>/
/// ├── Vokabeln/
/// │   ├── vocabs_all/*.json            dictionaries
/// │   └── <book>/<chapter>/*.json      chapter word lists
/// ├── Kontexte/
/// │   ├── *.json                       thematic contexts
/// │   └── Vokabeln/<n>.json            learning-status snapshots
/// ├── unregelmäßige Verben alle/*.json conjugation tables
/// └── Vorlagen/Vorlage Vokabellisten.docx
/// ```
#[derive(Debug, Clone)]
pub struct VocabularyLibrary {
    root: PathBuf,
}

impl VocabularyLibrary {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn books(&self) -> Result<Vec<String>, LoadError> {
        let mut books = subdirectories(&self.root.join(VOCABULARY_DIR))?;
        books.retain(|name| name != DICTIONARY_DIR);
        Ok(books)
    }

    pub fn chapters(&self, book: &str) -> Result<Vec<String>, LoadError> {
        subdirectories(&self.root.join(VOCABULARY_DIR).join(book))
    }

    pub fn chapter_files(&self, book: &str, chapter: &str) -> Result<Vec<String>, LoadError> {
        json_file_names(&self.chapter_dir(book, chapter))
    }

    pub fn load_chapter_file(
        &self,
        book: &str,
        chapter: &str,
        file: &str,
    ) -> Result<Vec<VocabEntry>, LoadError> {
        json::load_vocabulary(&self.chapter_dir(book, chapter).join(with_json_extension(file)))
    }

    pub fn dictionaries(&self) -> Result<Vec<String>, LoadError> {
        json_file_names(&self.dictionary_dir())
    }

    /// The first dictionary in file name order.
    pub fn default_dictionary(&self) -> Result<String, LoadError> {
        self.dictionaries()?
            .into_iter()
            .next()
            .ok_or_else(|| LoadError::NoFiles(self.dictionary_dir().to_string_lossy().to_string()))
    }

    pub fn load_dictionary(&self, name: &str) -> Result<Vec<VocabEntry>, LoadError> {
        json::load_vocabulary(&self.dictionary_dir().join(with_json_extension(name)))
    }

    pub fn contexts(&self) -> Result<Vec<String>, LoadError> {
        json_file_names(&self.root.join(CONTEXT_DIR))
    }

    pub fn load_context(&self, name: &str) -> Result<Vec<VocabEntry>, LoadError> {
        json::load_vocabulary(&self.root.join(CONTEXT_DIR).join(with_json_extension(name)))
    }

    /// Loads learning-status snapshots `1.json` to `<count>.json` and concatenates them.
    ///
    /// A missing snapshot is skipped with a warning; any other failure is returned.
    pub fn load_learning_status(&self, count: usize) -> Result<Vec<VocabEntry>, LoadError> {
        let dir = self.root.join(CONTEXT_DIR).join(LEARNING_STATUS_DIR);
        let mut entries = Vec::new();
        for i in 1..=count {
            let path = dir.join(format!("{}.json", i));
            match json::load_vocabulary(&path) {
                Ok(mut loaded) => entries.append(&mut loaded),
                Err(LoadError::Io { source, .. })
                    if source.kind() == std::io::ErrorKind::NotFound =>
                {
                    warn!("Learning status {} not found at {:?}, skipping.", i, path);
                }
                Err(e) => return Err(e),
            }
        }
        debug!(
            "Loaded {} learning-status entries from {} snapshot(s)",
            entries.len(),
            count
        );
        Ok(entries)
    }

    pub fn verb_dir(&self) -> PathBuf {
        self.root.join(VERB_DIR)
    }

    pub fn load_verbs(&self) -> Result<ConjugationTable, LoadError> {
        json::load_conjugation_dir(&self.verb_dir())
    }

    /// The library's own `.docx` template, if it ships one.
    pub fn template_path(&self) -> Option<PathBuf> {
        let path = self.root.join(TEMPLATE_FILE);
        path.is_file().then_some(path)
    }

    fn chapter_dir(&self, book: &str, chapter: &str) -> PathBuf {
        self.root.join(VOCABULARY_DIR).join(book).join(chapter)
    }

    fn dictionary_dir(&self) -> PathBuf {
        self.root.join(VOCABULARY_DIR).join(DICTIONARY_DIR)
    }
}

fn with_json_extension(name: &str) -> String {
    if name.ends_with(".json") {
        name.to_string()
    } else {
        format!("{}.json", name)
    }
}

fn json_file_names(dir: &Path) -> Result<Vec<String>, LoadError> {
    Ok(json::json_files_in(dir)?
        .iter()
        .filter_map(|p| p.file_name())
        .map(|n| n.to_string_lossy().to_string())
        .collect())
}

fn subdirectories(dir: &Path) -> Result<Vec<String>, LoadError> {
    let io_error = |e| LoadError::Io {
        path: dir.to_string_lossy().to_string(),
        source: e,
    };

    let mut names = Vec::new();
    for entry in std::fs::read_dir(dir).map_err(io_error)? {
        let entry = entry.map_err(io_error)?;
        if entry.path().is_dir() {
            names.push(entry.file_name().to_string_lossy().to_string());
        }
    }
    names.sort();
    Ok(names)
}
