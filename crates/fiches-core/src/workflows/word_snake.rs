use super::{body_style, ensure_words};
use crate::core::models::vocab::VocabEntry;
use crate::core::puzzles::snake::build_word_snake;
use crate::engine::config::WorksheetConfig;
use crate::engine::document::{Alignment, Document, HeadingLevel, Table};
use crate::engine::error::WorksheetError;
use rand::Rng;
use tracing::info;

pub const HEADING: &str = "Cherche le mot";
pub const ANSWER_HEADERS: [&str; 2] = ["mot", "traduction"];

const FONT_SIZE_PT: f32 = 14.0;
const ROW_HEIGHT_CM: f32 = 1.2;

/// The word snake with articles, then the same snake without them, each followed by an
/// empty answer table.
pub fn build(
    entries: &[VocabEntry],
    config: &WorksheetConfig,
    rng: &mut impl Rng,
) -> Result<Document, WorksheetError> {
    ensure_words(entries)?;

    let words: Vec<&str> = entries.iter().map(|e| e.word.as_str()).collect();
    let snake = build_word_snake(&words, rng);

    let mut doc = Document::new();
    section(&mut doc, &snake.with_articles, entries.len(), config);
    section(&mut doc, &snake.without_articles, entries.len(), config);

    info!("Word snake laid out for {} words.", entries.len());
    Ok(doc)
}

fn section(doc: &mut Document, snake: &str, answer_rows: usize, config: &WorksheetConfig) {
    let style = body_style(config.layout.font_size_or(FONT_SIZE_PT));

    doc.heading(HEADING, HeadingLevel::Section, Alignment::Left);

    let mut snake_table = Table::new(1).centered();
    snake_table.push_text_row(&[snake], &style);
    doc.table(snake_table);
    doc.empty_line();

    let mut answers = Table::new(2)
        .header(&ANSWER_HEADERS, &style)
        .row_height(config.layout.row_height_or(ROW_HEIGHT_CM))
        .centered();
    for _ in 0..answer_rows {
        answers.push_text_row(&["", ""], &style);
    }
    doc.table(answers);
    doc.empty_line();
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn two_sections_with_and_without_articles() {
        let entries = vec![
            VocabEntry::new("le chat", "die Katze"),
            VocabEntry::new("la souris", "die Maus"),
        ];
        let doc = build(&entries, &WorksheetConfig::default(), &mut StdRng::seed_from_u64(6)).unwrap();

        assert_eq!(doc.headings().collect::<Vec<_>>(), vec![HEADING, HEADING]);
        let tables: Vec<_> = doc.tables().collect();
        assert_eq!(tables.len(), 4);

        let with = tables[0].cell_text(0, 0).unwrap();
        let without = tables[2].cell_text(0, 0).unwrap();
        assert!(with == "lechatlasouris" || with == "lasourislechat");
        assert_eq!(without, with.replace("le", "").replace("la", ""));

        for answers in [tables[1], tables[3]] {
            assert_eq!(answers.body().len(), 2);
            assert_eq!(answers.alignment, Alignment::Center);
        }
    }
}
