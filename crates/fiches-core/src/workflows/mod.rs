//! # Workflows Module
//!
//! One generator per worksheet kind. Every generator validates its input, draws all random
//! choices from the generator it is handed, and returns a layout [`Document`]; [`render`]
//! packs that document into `.docx` bytes.
//!
//! - **Vocabulary sheets** ([`vocab_list`], [`matching`], [`word_search`], [`scramble`],
//!   [`word_snake`]) - built from a list of word/translation pairs, dispatched by
//!   [`WorksheetKind`] through [`build_vocabulary_sheet`]
//! - **Conjugation sheets** ([`conjugation`]) - a two-tense drill and a pronoun table
//! - **Cloze sheets** ([`cloze`]) - differentiated gap texts

pub mod cloze;
pub mod conjugation;
pub mod matching;
pub mod scramble;
pub mod vocab_list;
pub mod word_search;
pub mod word_snake;

use crate::core::models::vocab::VocabEntry;
use crate::engine::config::WorksheetConfig;
use crate::engine::document::{self, Document, TextStyle};
use crate::engine::error::WorksheetError;
use crate::engine::progress::{Progress, ProgressReporter};
use crate::engine::random::rng_from_seed;
use rand::Rng;
use std::fmt;
use std::path::Path;
use std::str::FromStr;
use tracing::{info, instrument};

pub const DOCX_MIME: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

pub(crate) const BODY_FONT: &str = "Arial";

pub(crate) fn body_style(size_pt: f32) -> TextStyle {
    TextStyle::new().font(BODY_FONT).size(size_pt)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WorksheetKind {
    VocabList,
    Matching,
    WordSearch,
    Scramble,
    WordSnake,
}

impl WorksheetKind {
    pub const ALL: [WorksheetKind; 5] = [
        WorksheetKind::WordSearch,
        WorksheetKind::Scramble,
        WorksheetKind::WordSnake,
        WorksheetKind::Matching,
        WorksheetKind::VocabList,
    ];

    /// Suggested name of the generated file.
    pub fn file_name(self) -> &'static str {
        match self {
            WorksheetKind::VocabList => "Vokabelliste.docx",
            WorksheetKind::Matching => "Zuordnen.docx",
            WorksheetKind::WordSearch => "Vokabelsuchgitter.docx",
            WorksheetKind::Scramble => "Vokabelrätsel.docx",
            WorksheetKind::WordSnake => "Wortschlange.docx",
        }
    }
}

impl fmt::Display for WorksheetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            WorksheetKind::VocabList => "vocab-list",
            WorksheetKind::Matching => "matching",
            WorksheetKind::WordSearch => "word-search",
            WorksheetKind::Scramble => "scramble",
            WorksheetKind::WordSnake => "word-snake",
        };
        f.write_str(name)
    }
}

impl FromStr for WorksheetKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        WorksheetKind::ALL
            .into_iter()
            .find(|kind| kind.to_string().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("Unknown worksheet kind '{s}'"))
    }
}

pub(crate) fn ensure_words(entries: &[VocabEntry]) -> Result<(), WorksheetError> {
    if entries.is_empty() {
        Err(WorksheetError::EmptySelection("words"))
    } else {
        Ok(())
    }
}

/// Lays out a vocabulary worksheet of the given kind.
pub fn build_vocabulary_sheet(
    kind: WorksheetKind,
    entries: &[VocabEntry],
    config: &WorksheetConfig,
    rng: &mut impl Rng,
) -> Result<Document, WorksheetError> {
    match kind {
        WorksheetKind::VocabList => vocab_list::build(entries, config),
        WorksheetKind::Matching => matching::build(entries, config, rng),
        WorksheetKind::WordSearch => word_search::build(entries, config, rng),
        WorksheetKind::Scramble => scramble::build(entries, config, rng),
        WorksheetKind::WordSnake => word_snake::build(entries, config, rng),
    }
}

/// Packs a laid-out worksheet into `.docx` bytes, on top of `template` if given.
pub fn render(document: &Document, template: Option<&Path>) -> Result<Vec<u8>, WorksheetError> {
    Ok(document::render(document, template)?)
}

/// Builds a vocabulary worksheet end to end, seeding randomness from `config.seed`.
#[instrument(skip_all, name = "vocabulary_workflow", fields(kind = %kind))]
pub fn generate_vocabulary_sheet(
    kind: WorksheetKind,
    entries: &[VocabEntry],
    config: &WorksheetConfig,
    template: Option<&Path>,
    reporter: &ProgressReporter,
) -> Result<Vec<u8>, WorksheetError> {
    info!("Generating {} worksheet from {} words.", kind, entries.len());
    let mut rng = rng_from_seed(config.seed);

    let document = reporter.phase("Layout", || {
        build_vocabulary_sheet(kind, entries, config, &mut rng)
    })?;
    let bytes = reporter.phase("Rendering", || render(&document, template))?;

    reporter.report(Progress::Message(format!(
        "{} ready ({} bytes)",
        kind.file_name(),
        bytes.len()
    )));
    info!("Worksheet rendered: {} bytes.", bytes.len());
    Ok(bytes)
}
