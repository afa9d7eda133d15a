use crate::core::models::conjugation::{ConjugationTable, Tense, Verb};
use crate::core::models::vocab::VocabEntry;
use serde::Deserialize;
use serde::de::{Deserializer, MapAccess, Visitor};
use std::collections::HashMap;
use std::fmt;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("File I/O error for '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("JSON parsing error for '{path}': {source}")]
    Json {
        path: String,
        source: serde_json::Error,
    },
    #[error("No JSON files found in '{0}'")]
    NoFiles(String),
}

/// A JSON object read as a list of key/value pairs in document order.
struct OrderedEntries<V>(Vec<(String, V)>);

impl<'de, V: Deserialize<'de>> Deserialize<'de> for OrderedEntries<V> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct EntriesVisitor<V>(PhantomData<V>);

        impl<'de, V: Deserialize<'de>> Visitor<'de> for EntriesVisitor<V> {
            type Value = OrderedEntries<V>;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a JSON object")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((key, value)) = map.next_entry::<String, V>()? {
                    entries.push((key, value));
                }
                Ok(OrderedEntries(entries))
            }
        }

        deserializer.deserialize_map(EntriesVisitor(PhantomData))
    }
}

#[derive(Deserialize)]
struct RawEntry {
    word: Option<String>,
    translation: Option<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawVocabulary {
    List(Vec<RawEntry>),
    Map(OrderedEntries<String>),
}

type RawConjugations = OrderedEntries<OrderedEntries<HashMap<String, String>>>;

/// Parses a vocabulary file.
///
/// Two shapes are accepted: an array of `{"word": .., "translation": ..}` objects (extra fields
/// are ignored) or an object mapping each word to its translation. Entries without a word or a
/// translation are skipped.
pub fn parse_vocabulary(content: &str) -> Result<Vec<VocabEntry>, serde_json::Error> {
    let raw: RawVocabulary = serde_json::from_str(content)?;
    let entries: Vec<VocabEntry> = match raw {
        RawVocabulary::List(items) => items
            .into_iter()
            .filter_map(|item| match (item.word, item.translation) {
                (Some(word), Some(translation)) => Some(VocabEntry::new(word, translation)),
                _ => None,
            })
            .collect(),
        RawVocabulary::Map(OrderedEntries(pairs)) => pairs
            .into_iter()
            .map(|(word, translation)| VocabEntry::new(word, translation))
            .collect(),
    };
    Ok(entries.into_iter().filter(VocabEntry::is_complete).collect())
}

pub fn load_vocabulary(path: &Path) -> Result<Vec<VocabEntry>, LoadError> {
    let content = read_file(path)?;
    let entries = parse_vocabulary(&content).map_err(|e| LoadError::Json {
        path: path.to_string_lossy().to_string(),
        source: e,
    })?;
    debug!("Loaded {} vocabulary entries from {:?}", entries.len(), path);
    Ok(entries)
}

/// Parses a conjugation file: infinitive → tense → pronoun → form.
pub fn parse_conjugations(content: &str) -> Result<ConjugationTable, serde_json::Error> {
    let OrderedEntries(verbs): RawConjugations = serde_json::from_str(content)?;
    Ok(verbs
        .into_iter()
        .map(|(infinitive, OrderedEntries(tenses))| {
            let tenses = tenses
                .into_iter()
                .map(|(name, forms)| {
                    forms
                        .into_iter()
                        .fold(Tense::new(name), |tense, (pronoun, form)| {
                            tense.with_form(pronoun, form)
                        })
                })
                .collect();
            Verb::new(infinitive, tenses)
        })
        .collect())
}

pub fn load_conjugations(path: &Path) -> Result<ConjugationTable, LoadError> {
    let content = read_file(path)?;
    parse_conjugations(&content).map_err(|e| LoadError::Json {
        path: path.to_string_lossy().to_string(),
        source: e,
    })
}

/// Loads every `*.json` file of a directory (in file name order) into one table.
///
/// Each file usually holds a single verb; a verb defined twice keeps the later definition.
pub fn load_conjugation_dir(dir: &Path) -> Result<ConjugationTable, LoadError> {
    let files = json_files_in(dir)?;
    if files.is_empty() {
        return Err(LoadError::NoFiles(dir.to_string_lossy().to_string()));
    }

    let mut table = ConjugationTable::new();
    for file in &files {
        table.merge(load_conjugations(file)?);
    }
    debug!(
        "Loaded {} verbs from {} files in {:?}",
        table.len(),
        files.len(),
        dir
    );
    Ok(table)
}

/// Lists the `*.json` files directly inside `dir`, sorted by file name.
pub fn json_files_in(dir: &Path) -> Result<Vec<PathBuf>, LoadError> {
    let read_dir = std::fs::read_dir(dir).map_err(|e| LoadError::Io {
        path: dir.to_string_lossy().to_string(),
        source: e,
    })?;

    let mut files = Vec::new();
    for entry in read_dir {
        let entry = entry.map_err(|e| LoadError::Io {
            path: dir.to_string_lossy().to_string(),
            source: e,
        })?;
        let path = entry.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == "json") {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

fn read_file(path: &Path) -> Result<String, LoadError> {
    std::fs::read_to_string(path).map_err(|e| LoadError::Io {
        path: path.to_string_lossy().to_string(),
        source: e,
    })
}
