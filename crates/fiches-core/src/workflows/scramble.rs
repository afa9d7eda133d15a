use super::ensure_words;
use crate::core::models::vocab::VocabEntry;
use crate::core::puzzles::scramble::{scramble, scramble_keep_first};
use crate::engine::config::WorksheetConfig;
use crate::engine::document::{Alignment, Document, HeadingLevel, Paragraph, Table, TextStyle};
use crate::engine::error::WorksheetError;
use rand::Rng;
use rand::seq::SliceRandom;
use tracing::info;

pub const HEADING: &str = "mystère";
pub const HELP_HEADING: &str = "mystère – aide";
pub const INSTRUCTIONS: &str = "1. Cherche les mots";
pub const HELP_INSTRUCTIONS: &str = "1. Trouve les mots (première lettre donnée)";
pub const HEADERS: [&str; 3] = ["mystère", "mot", "traduction"];

const FONT_SIZE_PT: f32 = 12.0;
const ROW_HEIGHT_CM: f32 = 1.2;

/// Two pages of scrambled words: fully shuffled, then with the first letter given.
pub fn build(
    entries: &[VocabEntry],
    config: &WorksheetConfig,
    rng: &mut impl Rng,
) -> Result<Document, WorksheetError> {
    ensure_words(entries)?;

    let mut order: Vec<&VocabEntry> = entries.iter().collect();
    order.shuffle(rng);

    let puzzles: Vec<String> = order.iter().map(|e| scramble(&e.word, rng)).collect();
    let hints: Vec<String> = order
        .iter()
        .map(|e| scramble_keep_first(&e.word, rng))
        .collect();

    let mut doc = Document::new();
    page(&mut doc, HEADING, INSTRUCTIONS, &puzzles, config);
    doc.page_break();
    page(&mut doc, HELP_HEADING, HELP_INSTRUCTIONS, &hints, config);

    info!("Scrambled {} words.", entries.len());
    Ok(doc)
}

fn page(doc: &mut Document, heading: &str, instructions: &str, words: &[String], config: &WorksheetConfig) {
    doc.heading(heading, HeadingLevel::Section, Alignment::Left);
    doc.paragraph(Paragraph::plain(instructions));

    let style = TextStyle::new().size(config.layout.font_size_or(FONT_SIZE_PT));
    let mut table = Table::new(3)
        .header(&HEADERS, &TextStyle::new())
        .row_height(config.layout.row_height_or(ROW_HEIGHT_CM));
    for word in words {
        table.push_text_row(&[word.as_str(), "", ""], &style);
    }
    doc.table(table);
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn sorted_letters(s: &str) -> Vec<char> {
        let mut v: Vec<char> = s.chars().filter(|c| *c != ' ').collect();
        v.sort_unstable();
        v
    }

    #[test]
    fn both_pages_hold_permutations_of_the_words() {
        let entries = vec![
            VocabEntry::new("la pomme", "der Apfel"),
            VocabEntry::new("le fromage", "der Käse"),
            VocabEntry::new("le lait", "die Milch"),
        ];
        let doc = build(&entries, &WorksheetConfig::default(), &mut StdRng::seed_from_u64(2)).unwrap();

        assert_eq!(doc.page_count(), 2);
        assert_eq!(
            doc.headings().collect::<Vec<_>>(),
            vec!["mystère", "mystère – aide"]
        );

        let tables: Vec<_> = doc.tables().collect();
        assert_eq!(tables.len(), 2);
        let originals: Vec<Vec<char>> = entries.iter().map(|e| sorted_letters(&e.word)).collect();
        for table in &tables {
            assert_eq!(table.row_height_cm, Some(1.2));
            assert_eq!(table.body().len(), 3);
            for row in table.body() {
                assert!(originals.contains(&sorted_letters(&row[0].text())));
                assert_eq!(row[1].text(), "");
            }
        }

        // Rows appear in the same order on both pages.
        for (puzzle, hint) in tables[0].body().iter().zip(tables[1].body()) {
            assert_eq!(sorted_letters(&puzzle[0].text()), sorted_letters(&hint[0].text()));
        }
    }

    #[test]
    fn help_page_keeps_first_letters() {
        let entries = vec![VocabEntry::new("bonjour", "hallo")];
        let doc = build(&entries, &WorksheetConfig::default(), &mut StdRng::seed_from_u64(5)).unwrap();
        let help = doc.tables().nth(1).unwrap();
        assert!(help.body()[0][0].text().starts_with('b'));
    }
}
