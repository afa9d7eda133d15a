use crate::core::models::vocab::VocabEntry;
use std::collections::{HashMap, HashSet};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SelectionError {
    #[error("Word '{0}' is not part of the current vocabulary selection")]
    UnknownWord(String),
}

/// Case-insensitive substring search on the French side of a dictionary.
///
/// An empty (or all-whitespace) term matches nothing.
pub fn search(dictionary: &[VocabEntry], term: &str) -> Vec<VocabEntry> {
    let term = term.trim().to_lowercase();
    if term.is_empty() {
        return Vec::new();
    }
    dictionary
        .iter()
        .filter(|entry| entry.word.to_lowercase().contains(&term))
        .cloned()
        .collect()
}

/// Deduplicates entries by exact word.
///
/// The first occurrence of a word fixes its position, the last occurrence supplies its
/// translation. Incomplete entries are dropped.
pub fn merge_unique(entries: impl IntoIterator<Item = VocabEntry>) -> Vec<VocabEntry> {
    let mut merged: Vec<VocabEntry> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();
    for entry in entries.into_iter().filter(VocabEntry::is_complete) {
        match index.get(&entry.word) {
            Some(&i) => merged[i] = entry,
            None => {
                index.insert(entry.word.clone(), merged.len());
                merged.push(entry);
            }
        }
    }
    merged
}

/// Keeps the context entries whose word (compared case-insensitively) appears in the
/// learning status.
pub fn filter_by_status(context: &[VocabEntry], status: &[VocabEntry]) -> Vec<VocabEntry> {
    let known: HashSet<String> = status.iter().map(|e| e.word.to_lowercase()).collect();
    context
        .iter()
        .filter(|entry| known.contains(&entry.word.to_lowercase()))
        .cloned()
        .collect()
}

/// The words a worksheet is built from: a base list plus dictionary search results.
///
/// Search results accumulate across calls, deduplicated by word, and are appended after the
/// base entries when the selection is resolved.
#[derive(Debug, Clone, Default)]
pub struct VocabSelection {
    base: Vec<VocabEntry>,
    additions: Vec<VocabEntry>,
}

impl VocabSelection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn extend_base(&mut self, entries: impl IntoIterator<Item = VocabEntry>) {
        self.base.extend(entries);
    }

    /// Adds every dictionary entry matching `term` and returns how many matched.
    pub fn add_search_results(&mut self, dictionary: &[VocabEntry], term: &str) -> usize {
        let found = search(dictionary, term);
        let count = found.len();
        let additions = std::mem::take(&mut self.additions);
        self.additions = merge_unique(additions.into_iter().chain(found));
        count
    }

    pub fn additions(&self) -> &[VocabEntry] {
        &self.additions
    }

    /// All selectable entries, deduplicated.
    pub fn entries(&self) -> Vec<VocabEntry> {
        merge_unique(self.base.iter().chain(&self.additions).cloned())
    }

    /// Restricts the selection to `words`, in the given order.
    ///
    /// An empty `words` list selects everything.
    pub fn pick(&self, words: &[String]) -> Result<Vec<VocabEntry>, SelectionError> {
        let entries = self.entries();
        if words.is_empty() {
            return Ok(entries);
        }
        let by_word: HashMap<&str, &VocabEntry> =
            entries.iter().map(|e| (e.word.as_str(), e)).collect();
        words
            .iter()
            .map(|word| {
                by_word
                    .get(word.as_str())
                    .map(|&e| e.clone())
                    .ok_or_else(|| SelectionError::UnknownWord(word.clone()))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dictionary() -> Vec<VocabEntry> {
        vec![
            VocabEntry::new("la Maison", "das Haus"),
            VocabEntry::new("la maisonnette", "das Häuschen"),
            VocabEntry::new("le jardin", "der Garten"),
        ]
    }

    #[test]
    fn search_is_case_insensitive_substring() {
        let found = search(&dictionary(), "MAISON");
        assert_eq!(found.len(), 2);
        assert!(search(&dictionary(), "   ").is_empty());
        assert!(search(&dictionary(), "voiture").is_empty());
    }

    #[test]
    fn merge_unique_keeps_first_position_and_last_translation() {
        let merged = merge_unique(vec![
            VocabEntry::new("le chat", "die Katze"),
            VocabEntry::new("le chien", "der Hund"),
            VocabEntry::new("le chat", "der Kater"),
            VocabEntry::new("", "leer"),
        ]);
        assert_eq!(
            merged,
            vec![
                VocabEntry::new("le chat", "der Kater"),
                VocabEntry::new("le chien", "der Hund"),
            ]
        );
    }

    #[test]
    fn filter_by_status_compares_lowercase_words() {
        let context = vec![
            VocabEntry::new("La Rue", "die Straße"),
            VocabEntry::new("le pont", "die Brücke"),
        ];
        let status = vec![VocabEntry::new("la rue", "die Straße")];
        let kept = filter_by_status(&context, &status);
        assert_eq!(kept, vec![VocabEntry::new("La Rue", "die Straße")]);
    }

    #[test]
    fn selection_accumulates_search_results_without_duplicates() {
        let mut selection = VocabSelection::new();
        selection.extend_base(vec![VocabEntry::new("le jardin", "der Garten")]);

        assert_eq!(selection.add_search_results(&dictionary(), "maison"), 2);
        assert_eq!(selection.add_search_results(&dictionary(), "maisonnette"), 1);
        assert_eq!(selection.additions().len(), 2);

        let words: Vec<_> = selection.entries().into_iter().map(|e| e.word).collect();
        assert_eq!(words, vec!["le jardin", "la Maison", "la maisonnette"]);
    }

    #[test]
    fn pick_restricts_and_orders() {
        let mut selection = VocabSelection::new();
        selection.extend_base(dictionary());

        let picked = selection
            .pick(&["le jardin".to_string(), "la Maison".to_string()])
            .unwrap();
        assert_eq!(picked[0].word, "le jardin");
        assert_eq!(picked[1].word, "la Maison");

        assert_eq!(selection.pick(&[]).unwrap().len(), 3);
        assert_eq!(
            selection.pick(&["la voiture".to_string()]),
            Err(SelectionError::UnknownWord("la voiture".to_string()))
        );
    }
}
