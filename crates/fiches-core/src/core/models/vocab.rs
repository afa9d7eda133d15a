use serde::{Deserialize, Serialize};

/// A French word (or short phrase) together with its translation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VocabEntry {
    pub word: String,
    pub translation: String,
}

impl VocabEntry {
    pub fn new(word: impl Into<String>, translation: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            translation: translation.into(),
        }
    }

    /// Entries with a blank word or a blank translation cannot appear on a worksheet.
    pub fn is_complete(&self) -> bool {
        !self.word.trim().is_empty() && !self.translation.trim().is_empty()
    }
}
