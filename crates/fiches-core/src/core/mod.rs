//! # Core Module
//!
//! Data models, input loading and the worksheet puzzle algorithms.
//!
//! - **Models** ([`models`]) - Vocabulary entries and verb conjugation tables
//! - **File I/O** ([`io`]) - JSON loaders and the vocabulary library directory layout
//! - **Selection** ([`selection`]) - Dictionary search, merging and learning-status filtering
//! - **Puzzles** ([`puzzles`]) - Word-search placement, scrambling, word snakes, cloze gaps and
//!   conjugation drills

pub mod io;
pub mod models;
pub mod puzzles;
pub mod selection;
