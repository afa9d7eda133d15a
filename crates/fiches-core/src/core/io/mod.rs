//! Loading of vocabulary and conjugation data.
//!
//! All inputs are flat JSON files read wholesale into memory. [`json`] holds the file-level
//! loaders; [`library`] knows how a vocabulary library directory is laid out on disk.

pub mod json;
pub mod library;
