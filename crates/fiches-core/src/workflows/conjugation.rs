use crate::core::models::conjugation::{ConjugationTable, Verb};
use crate::core::puzzles::conjugation::{DrillRow, TABLE_HEADERS, build_drill, build_pronoun_rows};
use crate::engine::config::{MAX_DRILL_ROWS, WorksheetConfig};
use crate::engine::document::{Alignment, Document, HeadingLevel, Table, TextStyle};
use crate::engine::error::WorksheetError;
use rand::Rng;
use tracing::{debug, info, instrument};

pub const TITLE: &str = "Test de conjugaison";
pub const TRANSLATION_HEADER: &str = "En allemand";
pub const DRILL_FILE_NAME: &str = "Konjugationen_Unterstriche.docx";
pub const TABLE_FILE_NAME: &str = "Konjugationstabelle.docx";

const DRILL_COLUMN_WIDTHS_CM: [f32; 4] = [3.0, 5.522, 5.522, 4.0];
const DRILL_HEADER_SIZE_PT: f32 = 12.0;
const TABLE_HEADER_SIZE_PT: f32 = 14.0;
const ROW_HEIGHT_CM: f32 = 1.0;

/// What to put on a conjugation drill.
#[derive(Debug, Clone, Default)]
pub struct DrillRequest {
    /// Infinitives to draw from; empty means every verb of the table.
    pub verbs: Vec<String>,
    /// The two tenses to ask for; defaults to the first two tenses of the first verb.
    pub tenses: Option<(String, String)>,
}

/// Resolves `names` against `table`, keeping the caller's order.
pub fn select_verbs<'a>(
    table: &'a ConjugationTable,
    names: &[String],
) -> Result<Vec<&'a Verb>, WorksheetError> {
    let verbs: Vec<&Verb> = if names.is_empty() {
        table.verbs().iter().collect()
    } else {
        names
            .iter()
            .map(|name| {
                table
                    .get(name)
                    .ok_or_else(|| WorksheetError::UnknownVerb(name.clone()))
            })
            .collect::<Result<_, _>>()?
    };

    if verbs.is_empty() {
        return Err(WorksheetError::EmptySelection("verbs"));
    }
    Ok(verbs)
}

/// The first two tenses of the first verb, or its only tense twice.
fn default_tenses(first: &Verb) -> Result<(String, String), WorksheetError> {
    let names: Vec<&str> = first.tenses().iter().map(|t| t.name.as_str()).collect();
    match names.as_slice() {
        [] => Err(WorksheetError::EmptySelection("tenses")),
        [only] => Ok((only.to_string(), only.to_string())),
        [a, b, ..] => Ok((a.to_string(), b.to_string())),
    }
}

fn check_tense(verbs: &[&Verb], tense: &str) -> Result<(), WorksheetError> {
    if verbs.iter().any(|v| v.tense(tense).is_some()) {
        Ok(())
    } else {
        Err(WorksheetError::UnknownTense(tense.to_string()))
    }
}

fn check_rows(rows: usize) -> Result<(), WorksheetError> {
    if (1..=MAX_DRILL_ROWS).contains(&rows) {
        Ok(())
    } else {
        Err(WorksheetError::InvalidRowCount {
            requested: rows,
            max: MAX_DRILL_ROWS,
        })
    }
}

/// A drill over two tenses: page 1 shows the pronoun and a blank per letter of the form,
/// page 2 repeats the same exercises with pronouns only.
#[instrument(skip_all, name = "conjugation_drill")]
pub fn build_drill_sheet(
    table: &ConjugationTable,
    request: &DrillRequest,
    config: &WorksheetConfig,
    rng: &mut impl Rng,
) -> Result<Document, WorksheetError> {
    check_rows(config.drill_rows)?;
    let verbs = select_verbs(table, &request.verbs)?;

    let (first_tense, second_tense) = match &request.tenses {
        Some(tenses) => tenses.clone(),
        None => default_tenses(verbs[0])?,
    };
    check_tense(&verbs, &first_tense)?;
    check_tense(&verbs, &second_tense)?;
    debug!("Drilling '{}' and '{}' over {} verbs.", first_tense, second_tense, verbs.len());

    let exercises = build_drill(
        &verbs,
        config.drill_rows,
        (first_tense.as_str(), second_tense.as_str()),
        rng,
    );

    let headers = ["Verbe", first_tense.as_str(), second_tense.as_str(), TRANSLATION_HEADER];
    let mut doc = Document::new();
    doc.heading(TITLE, HeadingLevel::Title, Alignment::Center);
    doc.empty_line();
    doc.table(drill_table(&headers, &exercises, true, config));
    doc.page_break();
    doc.heading(TITLE, HeadingLevel::Title, Alignment::Center);
    doc.table(drill_table(&headers, &exercises, false, config));

    info!("Conjugation drill laid out with {} exercises.", exercises.len());
    Ok(doc)
}

fn drill_table(
    headers: &[&str],
    exercises: &[DrillRow],
    with_blanks: bool,
    config: &WorksheetConfig,
) -> Table {
    let header_style = TextStyle::new().size(config.layout.font_size_or(DRILL_HEADER_SIZE_PT));
    let mut table = Table::new(4)
        .header(headers, &header_style)
        .column_widths(DRILL_COLUMN_WIDTHS_CM.to_vec())
        .row_height(config.layout.row_height_or(ROW_HEIGHT_CM));

    for row in exercises {
        let (first, second) = if with_blanks {
            (row.first.underlined(), row.second.underlined())
        } else {
            (row.first.pronoun.to_string(), row.second.pronoun.to_string())
        };
        table.push_text_row(
            &[row.verb.as_str(), first.as_str(), second.as_str(), ""],
            &TextStyle::new(),
        );
    }
    table
}

/// Rows of a random verb and a random pronoun, written twice for present and perfect.
#[instrument(skip_all, name = "conjugation_table")]
pub fn build_table_sheet(
    table: &ConjugationTable,
    verbs: &[String],
    config: &WorksheetConfig,
    rng: &mut impl Rng,
) -> Result<Document, WorksheetError> {
    check_rows(config.drill_rows)?;
    let selected: Vec<&str> = select_verbs(table, verbs)?
        .into_iter()
        .map(|v| v.infinitive.as_str())
        .collect();

    let rows = build_pronoun_rows(&selected, config.drill_rows, rng);

    let header_style = TextStyle::new().size(config.layout.font_size_or(TABLE_HEADER_SIZE_PT));
    let mut grid = Table::new(4)
        .header(&TABLE_HEADERS, &header_style)
        .row_height(config.layout.row_height_or(ROW_HEIGHT_CM));
    for row in &rows {
        grid.push_text_row(&[row.verb.as_str(), row.pronoun, row.pronoun, ""], &TextStyle::new());
    }

    let mut doc = Document::new();
    doc.heading(TITLE, HeadingLevel::Title, Alignment::Center);
    doc.empty_line();
    doc.table(grid);

    info!("Conjugation table laid out with {} rows.", rows.len());
    Ok(doc)
}
