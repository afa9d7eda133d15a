pub mod conjugation;
pub mod vocab;
