use super::ensure_words;
use crate::core::models::vocab::VocabEntry;
use crate::core::puzzles::word_search::{WordSearch, build_word_search};
use crate::engine::config::WorksheetConfig;
use crate::engine::document::{Alignment, Document, HeadingLevel, Paragraph, Table, TextStyle};
use crate::engine::error::WorksheetError;
use rand::Rng;
use tracing::{info, instrument};

pub const HEADING: &str = "Cherche le vocabulaire";
pub const INSTRUCTIONS: &str = "1. Mets les bons mots :";
pub const ANSWER_HEADERS: [&str; 2] = ["mot", "traduction"];

const GRID_FONT: &str = "Courier New";
const GRID_SIZE_PT: f32 = 12.0;
const ROW_HEIGHT_CM: f32 = 1.0;

/// The grid followed by an answer table listing the translation of every placed word.
#[instrument(skip_all, fields(words = entries.len()))]
pub fn build(
    entries: &[VocabEntry],
    config: &WorksheetConfig,
    rng: &mut impl Rng,
) -> Result<Document, WorksheetError> {
    ensure_words(entries)?;

    let puzzle = build_word_search(
        entries,
        config.word_search.grid_size,
        config.word_search.max_attempts,
        rng,
    );
    info!(
        "Placed {} of {} words in a {}x{} grid.",
        puzzle.placed.len(),
        entries.len(),
        puzzle.grid.size(),
        puzzle.grid.size()
    );

    Ok(layout(&puzzle, config))
}

fn layout(puzzle: &WordSearch, config: &WorksheetConfig) -> Document {
    let mut doc = Document::new();
    doc.heading(HEADING, HeadingLevel::Section, Alignment::Left);

    let grid_style = TextStyle::new()
        .font(GRID_FONT)
        .size(config.layout.font_size_or(GRID_SIZE_PT));
    let mut grid = Table::new(puzzle.grid.size());
    for row in puzzle.grid.rows() {
        let letters: Vec<String> = row.iter().map(char::to_string).collect();
        grid.push_text_row(&letters, &grid_style);
    }
    doc.table(grid);

    doc.empty_line();
    doc.paragraph(Paragraph::plain(INSTRUCTIONS));
    doc.empty_line();

    let mut answers = Table::new(2)
        .header(&ANSWER_HEADERS, &TextStyle::new())
        .row_height(config.layout.row_height_or(ROW_HEIGHT_CM));
    for entry in puzzle.placed_entries() {
        answers.push_text_row(&["", entry.translation.as_str()], &TextStyle::new());
    }
    doc.table(answers);
    doc
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn entries() -> Vec<VocabEntry> {
        vec![
            VocabEntry::new("chat", "Katze"),
            VocabEntry::new("chien", "Hund"),
            VocabEntry::new("une maison extrêmement grande et belle", "ein Haus"),
        ]
    }

    #[test]
    fn grid_table_matches_configured_size() {
        let mut config = WorksheetConfig::default();
        config.word_search.grid_size = 12;
        let doc = build(&entries(), &config, &mut StdRng::seed_from_u64(1)).unwrap();

        let grid = doc.tables().next().unwrap();
        assert_eq!(grid.columns(), 12);
        assert_eq!(grid.rows().len(), 12);
        for row in grid.rows() {
            for cell in row {
                let text = cell.text();
                assert_eq!(text.chars().count(), 1);
                assert_eq!(cell.runs[0].style.font.as_deref(), Some("Courier New"));
            }
        }
    }

    #[test]
    fn answer_table_lists_only_placed_words() {
        let doc = build(&entries(), &WorksheetConfig::default(), &mut StdRng::seed_from_u64(4)).unwrap();
        let answers = doc.tables().nth(1).unwrap();

        assert_eq!(answers.cell_text(0, 0).as_deref(), Some("mot"));
        assert_eq!(answers.cell_text(0, 1).as_deref(), Some("traduction"));
        // The long entry has more than 20 letters and can never fit.
        assert_eq!(answers.body().len(), 2);
        for row in answers.body() {
            assert_eq!(row[0].text(), "");
            assert!(["Katze", "Hund"].contains(&row[1].text().as_str()));
        }
    }
}
