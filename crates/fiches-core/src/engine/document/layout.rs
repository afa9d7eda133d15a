pub const TWIPS_PER_CM: f32 = 567.0;

/// Usable page width of an A4 page with default margins.
pub const TEXT_WIDTH_CM: f32 = 16.0;

#[inline]
pub fn cm_to_twips(cm: f32) -> u32 {
    (cm * TWIPS_PER_CM) as u32
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alignment {
    #[default]
    Left,
    Center,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeadingLevel {
    Title,
    Section,
    Subsection,
}

impl HeadingLevel {
    pub fn font_size_pt(self) -> f32 {
        match self {
            HeadingLevel::Title => 18.0,
            HeadingLevel::Section => 16.0,
            HeadingLevel::Subsection => 14.0,
        }
    }
}

/// Character formatting shared by the runs it creates.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TextStyle {
    pub font: Option<String>,
    pub size_pt: Option<f32>,
    pub bold: bool,
}

impl TextStyle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn font(mut self, font: impl Into<String>) -> Self {
        self.font = Some(font.into());
        self
    }

    pub fn size(mut self, size_pt: f32) -> Self {
        self.size_pt = Some(size_pt);
        self
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub fn run(&self, text: impl Into<String>) -> TextRun {
        TextRun {
            text: text.into(),
            style: self.clone(),
        }
    }

    pub fn paragraph(&self, text: impl Into<String>) -> Paragraph {
        Paragraph::new().with_run(self.run(text))
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct TextRun {
    pub text: String,
    pub style: TextStyle,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Paragraph {
    pub runs: Vec<TextRun>,
    pub alignment: Alignment,
}

impl Paragraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn plain(text: impl Into<String>) -> Self {
        TextStyle::new().paragraph(text)
    }

    pub fn with_run(mut self, run: TextRun) -> Self {
        self.runs.push(run);
        self
    }

    pub fn align(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }

    pub fn text(&self) -> String {
        self.runs.iter().map(|r| r.text.as_str()).collect()
    }
}

/// A table whose rows all share one minimum height.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    columns: usize,
    column_widths_cm: Option<Vec<f32>>,
    rows: Vec<Vec<Paragraph>>,
    has_header: bool,
    pub row_height_cm: Option<f32>,
    pub alignment: Alignment,
}

impl Table {
    pub fn new(columns: usize) -> Self {
        Self {
            columns,
            column_widths_cm: None,
            rows: Vec::new(),
            has_header: false,
            row_height_cm: None,
            alignment: Alignment::Left,
        }
    }

    /// Adds a bold, centred header row in `style`.
    pub fn header<S: AsRef<str>>(mut self, titles: &[S], style: &TextStyle) -> Self {
        let style = style.clone().bold();
        let row = titles
            .iter()
            .map(|t| style.paragraph(t.as_ref()).align(Alignment::Center))
            .collect();
        self.rows.insert(0, row);
        self.has_header = true;
        self
    }

    pub fn column_widths(mut self, widths_cm: Vec<f32>) -> Self {
        self.column_widths_cm = Some(widths_cm);
        self
    }

    pub fn row_height(mut self, height_cm: f32) -> Self {
        self.row_height_cm = Some(height_cm);
        self
    }

    pub fn centered(mut self) -> Self {
        self.alignment = Alignment::Center;
        self
    }

    /// Appends a row, padding it with empty cells or cutting it to the column count.
    pub fn push_row(&mut self, mut cells: Vec<Paragraph>) {
        cells.resize_with(self.columns, Paragraph::new);
        self.rows.push(cells);
    }

    /// Appends a row of texts in one style.
    pub fn push_text_row<S: AsRef<str>>(&mut self, texts: &[S], style: &TextStyle) {
        self.push_row(texts.iter().map(|t| style.paragraph(t.as_ref())).collect());
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Widths in cm, spreading the text width evenly when none were set.
    pub fn widths_cm(&self) -> Vec<f32> {
        match &self.column_widths_cm {
            Some(widths) => widths.clone(),
            None => vec![TEXT_WIDTH_CM / self.columns.max(1) as f32; self.columns],
        }
    }

    pub fn rows(&self) -> &[Vec<Paragraph>] {
        &self.rows
    }

    pub fn header_row(&self) -> Option<&[Paragraph]> {
        self.has_header.then(|| self.rows[0].as_slice())
    }

    /// Rows below the header.
    pub fn body(&self) -> &[Vec<Paragraph>] {
        &self.rows[usize::from(self.has_header)..]
    }

    pub fn cell_text(&self, row: usize, col: usize) -> Option<String> {
        self.rows.get(row)?.get(col).map(Paragraph::text)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    Heading {
        text: String,
        level: HeadingLevel,
        alignment: Alignment,
    },
    Paragraph(Paragraph),
    /// A paragraph drawn inside a frame.
    Boxed(Paragraph),
    Table(Table),
    PageBreak,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Document {
    blocks: Vec<Block>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn heading(&mut self, text: impl Into<String>, level: HeadingLevel, alignment: Alignment) {
        self.blocks.push(Block::Heading {
            text: text.into(),
            level,
            alignment,
        });
    }

    pub fn paragraph(&mut self, paragraph: Paragraph) {
        self.blocks.push(Block::Paragraph(paragraph));
    }

    pub fn empty_line(&mut self) {
        self.paragraph(Paragraph::new());
    }

    pub fn boxed(&mut self, paragraph: Paragraph) {
        self.blocks.push(Block::Boxed(paragraph));
    }

    pub fn table(&mut self, table: Table) {
        self.blocks.push(Block::Table(table));
    }

    pub fn page_break(&mut self) {
        self.blocks.push(Block::PageBreak);
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub fn tables(&self) -> impl Iterator<Item = &Table> {
        self.blocks.iter().filter_map(|b| match b {
            Block::Table(t) => Some(t),
            _ => None,
        })
    }

    pub fn headings(&self) -> impl Iterator<Item = &str> {
        self.blocks.iter().filter_map(|b| match b {
            Block::Heading { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }

    pub fn page_count(&self) -> usize {
        1 + self
            .blocks
            .iter()
            .filter(|b| matches!(b, Block::PageBreak))
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn twips_conversion_truncates() {
        assert_eq!(cm_to_twips(1.0), 567);
        assert_eq!(cm_to_twips(1.2), 680);
        assert_eq!(cm_to_twips(5.522), 3130);
    }

    #[test]
    fn header_row_is_bold_and_centered() {
        let table = Table::new(2).header(&["Wort", "Übersetzung"], &TextStyle::new().size(14.0));
        let header = table.header_row().unwrap();
        assert_eq!(header[1].text(), "Übersetzung");
        assert!(header[0].runs[0].style.bold);
        assert_eq!(header[0].runs[0].style.size_pt, Some(14.0));
        assert_eq!(header[0].alignment, Alignment::Center);
        assert!(table.body().is_empty());
    }

    #[test]
    fn rows_are_padded_to_column_count() {
        let mut table = Table::new(3);
        table.push_text_row(&["a"], &TextStyle::new());
        assert_eq!(table.rows()[0].len(), 3);
        assert_eq!(table.cell_text(0, 2).as_deref(), Some(""));
        assert!(table.header_row().is_none());
        assert_eq!(table.body().len(), 1);
    }

    #[test]
    fn widths_default_to_even_split() {
        assert_eq!(Table::new(4).widths_cm(), vec![4.0; 4]);
        assert_eq!(Table::new(2).column_widths(vec![3.0, 5.0]).widths_cm(), vec![3.0, 5.0]);
    }

    #[test]
    fn document_counts_pages_and_collects_headings() {
        let mut doc = Document::new();
        doc.heading("mystère", HeadingLevel::Section, Alignment::Left);
        doc.page_break();
        doc.heading("mystère – aide", HeadingLevel::Section, Alignment::Left);
        assert_eq!(doc.page_count(), 2);
        assert_eq!(doc.headings().collect::<Vec<_>>(), vec!["mystère", "mystère – aide"]);
    }
}
