//! A small layout model for worksheets and its `.docx` renderer.
//!
//! Worksheets are assembled as a [`Document`] of headings, paragraphs, boxed paragraphs,
//! tables and page breaks. Nothing in the model knows about Office Open XML; [`render`]
//! turns it into the bytes of a `.docx` file, optionally on top of a template.

mod docx;
mod layout;

pub use docx::{DocumentError, render};
pub use layout::{
    Alignment, Block, Document, HeadingLevel, Paragraph, TEXT_WIDTH_CM, Table, TextRun,
    TextStyle, cm_to_twips,
};
