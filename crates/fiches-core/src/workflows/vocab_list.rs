use super::ensure_words;
use crate::core::models::vocab::VocabEntry;
use crate::engine::config::WorksheetConfig;
use crate::engine::document::{Alignment, Document, HeadingLevel, Table, TextStyle};
use crate::engine::error::WorksheetError;
use tracing::info;

pub const TITLE: &str = "vocabulaire";
pub const HEADERS: [&str; 2] = ["Wort", "Übersetzung"];

const HEADER_SIZE_PT: f32 = 14.0;
const ROW_HEIGHT_CM: f32 = 1.0;

/// A two-column list of every word with its translation.
pub fn build(entries: &[VocabEntry], config: &WorksheetConfig) -> Result<Document, WorksheetError> {
    ensure_words(entries)?;

    let mut doc = Document::new();
    doc.heading(TITLE, HeadingLevel::Title, Alignment::Center);
    doc.empty_line();

    let header_style = TextStyle::new().size(config.layout.font_size_or(HEADER_SIZE_PT));
    let mut table = Table::new(2)
        .header(&HEADERS, &header_style)
        .row_height(config.layout.row_height_or(ROW_HEIGHT_CM));
    for entry in entries {
        table.push_text_row(&[&entry.word, &entry.translation], &TextStyle::new());
    }
    doc.table(table);

    info!("Vocabulary list laid out with {} rows.", entries.len());
    Ok(doc)
}
