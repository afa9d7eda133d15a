//! The randomized building blocks of each worksheet.
//!
//! Every function that needs randomness takes `rng: &mut impl Rng`, so a seeded generator
//! reproduces a worksheet exactly.

pub mod cloze;
pub mod conjugation;
pub mod scramble;
pub mod snake;
pub mod word_search;
