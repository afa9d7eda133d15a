use super::body_style;
use crate::core::models::vocab::VocabEntry;
use crate::core::puzzles::cloze::{ClozeText, GapMode};
use crate::engine::config::WorksheetConfig;
use crate::engine::document::{Alignment, Document, HeadingLevel};
use crate::engine::error::WorksheetError;
use rand::Rng;
use tracing::{info, instrument, warn};

pub const DEFAULT_PREFIX: &str = "Differenzierung";
pub const WORD_BOX_HEADING: &str = "boîte de mots";
pub const INSTRUCTIONS: &str = "Ergänze die richtigen Wörter:";
pub const FILE_NAME: &str = "Differenzierung.docx";

const TEXT_SIZE_PT: f32 = 12.0;
const INSTRUCTIONS_SIZE_PT: f32 = 14.0;

/// One section per gap mode, each with its own word box, separated by page breaks.
///
/// Repeated modes are laid out once. `dictionary` is only consulted for
/// [`GapMode::Translated`].
#[instrument(skip_all, name = "cloze_workflow")]
pub fn build(
    text: &str,
    dictionary: &[VocabEntry],
    modes: &[GapMode],
    prefix: &str,
    config: &WorksheetConfig,
    rng: &mut impl Rng,
) -> Result<Document, WorksheetError> {
    if text.trim().is_empty() {
        return Err(WorksheetError::EmptySelection("text"));
    }
    let mut sections: Vec<GapMode> = Vec::with_capacity(modes.len());
    for mode in modes {
        if !sections.contains(mode) {
            sections.push(*mode);
        }
    }
    if sections.is_empty() {
        return Err(WorksheetError::EmptySelection("gap modes"));
    }

    let cloze = ClozeText::new(text, rng);
    if !cloze.has_entries() {
        warn!("The text has no [bracketed] words; the worksheet will have no gaps.");
    }

    let text_style = body_style(config.layout.font_size_or(TEXT_SIZE_PT));
    let instructions_style = body_style(INSTRUCTIONS_SIZE_PT);

    let mut doc = Document::new();
    for (i, mode) in sections.iter().enumerate() {
        if i > 0 {
            doc.page_break();
        }
        doc.heading(
            format!("{prefix} – {}", mode.title()),
            HeadingLevel::Section,
            Alignment::Center,
        );
        doc.heading(WORD_BOX_HEADING, HeadingLevel::Subsection, Alignment::Left);
        if cloze.has_entries() {
            let words = cloze.box_for(*mode, dictionary).join(" / ");
            doc.boxed(text_style.paragraph(words));
        }
        doc.paragraph(instructions_style.paragraph(INSTRUCTIONS));
        doc.paragraph(text_style.paragraph(cloze.gapped(*mode)));
    }

    info!(
        "Cloze worksheet laid out: {} sections, {} boxed words.",
        sections.len(),
        cloze.word_box().len()
    );
    Ok(doc)
}
