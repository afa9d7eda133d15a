//! # fiches
//!
//! A library for generating French vocabulary worksheets (word-search grids, scrambled-letter
//! puzzles, word snakes, matching exercises, conjugation drills and cloze texts) as `.docx`
//! documents held in memory.
//!
//! ## Architecture
//!
//! The library is split into three layers:
//!
//! - **[`core`]: The Foundation.** Vocabulary and conjugation models, JSON loading, the on-disk
//!   vocabulary library, vocabulary selection, and the puzzle algorithms themselves. Every
//!   randomized routine takes an injected [`rand::Rng`].
//!
//! - **[`engine`]: Shared Machinery.** Generation configuration, error types, progress reporting,
//!   seeded randomness, and the document layout model with its `.docx` renderer.
//!
//! - **[`workflows`]: The Public API.** One generator per worksheet kind. Each turns a word list
//!   (or a conjugation table, or a marked-up text) into a layout [`engine::document::Document`],
//!   which [`workflows::render`] packs into `.docx` bytes.

pub mod core;
pub mod engine;
pub mod workflows;
