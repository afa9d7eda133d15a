use super::layout::{self, Alignment, Block, Document, HeadingLevel, TextRun};
use docx_rs::{
    AlignmentType, BreakType, Docx, HeightRule, Paragraph, ReaderError, Run, RunFonts, Table,
    TableAlignmentType, TableCell, TableRow, WidthType,
};
use std::io::Cursor;
use std::path::Path;
use thiserror::Error;
use tracing::debug;

const HEADING_FONT: &str = "Arial";

#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("Failed to read template {path}: {source}")]
    TemplateIo {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Template {path} is not a readable .docx file: {source}")]
    Template {
        path: String,
        #[source]
        source: ReaderError,
    },
    #[error("Failed to write .docx archive: {0}")]
    Pack(String),
}

/// Renders `document` to the bytes of a `.docx` file.
///
/// With a template, its styles and existing content come first and the worksheet is appended.
pub fn render(document: &Document, template: Option<&Path>) -> Result<Vec<u8>, DocumentError> {
    let mut docx = match template {
        Some(path) => load_template(path)?,
        None => Docx::new(),
    };

    for block in document.blocks() {
        docx = append_block(docx, block);
    }

    let mut buffer = Cursor::new(Vec::new());
    docx.build()
        .pack(&mut buffer)
        .map_err(|e| DocumentError::Pack(e.to_string()))?;
    Ok(buffer.into_inner())
}

fn load_template(path: &Path) -> Result<Docx, DocumentError> {
    let bytes = std::fs::read(path).map_err(|e| DocumentError::TemplateIo {
        path: path.display().to_string(),
        source: e,
    })?;
    debug!("Loaded template {} ({} bytes).", path.display(), bytes.len());
    docx_rs::read_docx(&bytes).map_err(|e| DocumentError::Template {
        path: path.display().to_string(),
        source: e,
    })
}

fn append_block(docx: Docx, block: &Block) -> Docx {
    match block {
        Block::Heading {
            text,
            level,
            alignment,
        } => docx.add_paragraph(heading(text, *level, *alignment)),
        Block::Paragraph(p) => docx.add_paragraph(paragraph(p)),
        Block::Boxed(p) => {
            // A single-cell table gives the frame; paragraph borders are not portable.
            let cell = TableCell::new()
                .add_paragraph(paragraph(p))
                .width(twips(layout::TEXT_WIDTH_CM), WidthType::Dxa);
            docx.add_table(
                Table::new(vec![TableRow::new(vec![cell])])
                    .set_grid(vec![twips(layout::TEXT_WIDTH_CM)]),
            )
        }
        Block::Table(t) => docx.add_table(table(t)),
        Block::PageBreak => {
            docx.add_paragraph(Paragraph::new().add_run(Run::new().add_break(BreakType::Page)))
        }
    }
}

fn heading(text: &str, level: HeadingLevel, alignment: Alignment) -> Paragraph {
    let style = layout::TextStyle::new()
        .font(HEADING_FONT)
        .size(level.font_size_pt())
        .bold();
    Paragraph::new()
        .add_run(run(&style.run(text)))
        .align(align(alignment))
}

fn paragraph(p: &layout::Paragraph) -> Paragraph {
    p.runs
        .iter()
        .fold(Paragraph::new(), |para, r| para.add_run(run(r)))
        .align(align(p.alignment))
}

fn run(text_run: &TextRun) -> Run {
    let mut run = Run::new();
    for (i, line) in text_run.text.split('\n').enumerate() {
        if i > 0 {
            run = run.add_break(BreakType::TextWrapping);
        }
        run = run.add_text(line);
    }

    let style = &text_run.style;
    if let Some(font) = &style.font {
        run = run.fonts(
            RunFonts::new()
                .ascii(font)
                .hi_ansi(font)
                .east_asia(font)
                .cs(font),
        );
    }
    if let Some(size) = style.size_pt {
        // Sizes are stored in half-points.
        run = run.size((size * 2.0).round() as usize);
    }
    if style.bold {
        run = run.bold();
    }
    run
}

fn table(t: &layout::Table) -> Table {
    let widths: Vec<usize> = t.widths_cm().into_iter().map(twips).collect();

    let rows = t
        .rows()
        .iter()
        .map(|cells| {
            let cells = cells
                .iter()
                .zip(&widths)
                .map(|(p, w)| {
                    TableCell::new()
                        .add_paragraph(paragraph(p))
                        .width(*w, WidthType::Dxa)
                })
                .collect();
            let row = TableRow::new(cells);
            match t.row_height_cm {
                Some(h) => row
                    .row_height(layout::cm_to_twips(h) as f32)
                    .height_rule(HeightRule::AtLeast),
                None => row,
            }
        })
        .collect();

    let table = Table::new(rows).set_grid(widths);
    match t.alignment {
        Alignment::Center => table.align(TableAlignmentType::Center),
        Alignment::Left => table,
    }
}

fn twips(cm: f32) -> usize {
    layout::cm_to_twips(cm) as usize
}

fn align(alignment: Alignment) -> AlignmentType {
    match alignment {
        Alignment::Left => AlignmentType::Left,
        Alignment::Center => AlignmentType::Center,
    }
}
