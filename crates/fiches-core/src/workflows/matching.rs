use super::ensure_words;
use super::vocab_list::{HEADERS, TITLE};
use crate::core::models::vocab::VocabEntry;
use crate::engine::config::WorksheetConfig;
use crate::engine::document::{Alignment, Document, HeadingLevel, Table, TextStyle};
use crate::engine::error::WorksheetError;
use rand::Rng;
use rand::seq::SliceRandom;
use tracing::info;

const FONT_SIZE_PT: f32 = 14.0;
const ROW_HEIGHT_CM: f32 = 1.0;
const BULLET: &str = "o ";

/// Words in their original order next to the translations in random order.
pub fn build(
    entries: &[VocabEntry],
    config: &WorksheetConfig,
    rng: &mut impl Rng,
) -> Result<Document, WorksheetError> {
    ensure_words(entries)?;

    let mut translations: Vec<&str> = entries.iter().map(|e| e.translation.as_str()).collect();
    translations.shuffle(rng);

    let mut doc = Document::new();
    doc.heading(TITLE, HeadingLevel::Title, Alignment::Center);
    doc.empty_line();

    let style = TextStyle::new().size(config.layout.font_size_or(FONT_SIZE_PT));
    let mut table = Table::new(2)
        .header(&HEADERS, &style)
        .row_height(config.layout.row_height_or(ROW_HEIGHT_CM));
    for (entry, translation) in entries.iter().zip(translations) {
        table.push_text_row(
            &[format!("{BULLET}{}", entry.word), format!("{BULLET}{translation}")],
            &style,
        );
    }
    doc.table(table);

    info!("Matching exercise laid out with {} pairs.", entries.len());
    Ok(doc)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn words_keep_order_and_translations_are_a_permutation() {
        let entries: Vec<VocabEntry> = (0..8)
            .map(|i| VocabEntry::new(format!("mot{i}"), format!("Wort{i}")))
            .collect();
        let doc = build(&entries, &WorksheetConfig::default(), &mut StdRng::seed_from_u64(0)).unwrap();
        let table = doc.tables().next().unwrap();

        let mut shown: Vec<String> = Vec::new();
        for (i, row) in table.body().iter().enumerate() {
            assert_eq!(row[0].text(), format!("o mot{i}"));
            shown.push(row[1].text().trim_start_matches("o ").to_string());
        }
        shown.sort();
        let mut expected: Vec<String> = entries.iter().map(|e| e.translation.clone()).collect();
        expected.sort();
        assert_eq!(shown, expected);
    }
}
