use crate::core::models::vocab::VocabEntry;
use rand::Rng;
use rand::seq::SliceRandom;
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// How a bracketed entry is turned into a gap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GapMode {
    /// Every letter becomes `_`.
    Blanks,
    /// The first letter of each word stays visible.
    FirstLetter,
    /// Gaps as in [`GapMode::Blanks`], the word box shows translations instead.
    Translated,
}

impl GapMode {
    pub const ALL: [GapMode; 3] = [GapMode::Blanks, GapMode::FirstLetter, GapMode::Translated];

    /// Section title used on the worksheet.
    pub fn title(self) -> &'static str {
        match self {
            GapMode::Blanks => "Nur Unterstriche",
            GapMode::FirstLetter => "Erster Buchstabe",
            GapMode::Translated => "Deutsch in Box",
        }
    }

    pub fn gap(self, entry: &str) -> String {
        match self {
            GapMode::Blanks | GapMode::Translated => blank_word(entry),
            GapMode::FirstLetter => first_letter_word(entry),
        }
    }
}

impl fmt::Display for GapMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            GapMode::Blanks => "blanks",
            GapMode::FirstLetter => "first-letter",
            GapMode::Translated => "translated",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Unknown gap mode '{0}' (expected blanks, first-letter or translated)")]
pub struct ParseGapModeError(pub String);

impl FromStr for GapMode {
    type Err = ParseGapModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "1" | "blanks" => Ok(GapMode::Blanks),
            "2" | "first-letter" => Ok(GapMode::FirstLetter),
            "3" | "translated" => Ok(GapMode::Translated),
            _ => Err(ParseGapModeError(s.to_string())),
        }
    }
}

/// Finds every `[entry]` in `text` and passes its byte range and content to `on_entry`.
///
/// An empty `[]` is not an entry, and an entry ends at
/// the first `]` after its opening bracket.
fn scan_entries<'a>(text: &'a str, mut on_entry: impl FnMut(std::ops::Range<usize>, &'a str)) {
    let mut pos = 0;
    while let Some(open) = text[pos..].find('[').map(|i| pos + i) {
        let Some(close) = text[open + 1..].find(']').map(|i| open + 1 + i) else {
            break;
        };
        if close == open + 1 {
            pos = open + 1;
            continue;
        }
        on_entry(open..close + 1, &text[open + 1..close]);
        pos = close + 1;
    }
}

/// All bracketed entries of `text`, in reading order.
pub fn extract_entries(text: &str) -> Vec<String> {
    let mut entries = Vec::new();
    scan_entries(text, |_, entry| entries.push(entry.to_string()));
    entries
}

/// Replaces every `[entry]` of `text`, brackets included, with `replace(entry)`.
pub fn replace_entries(text: &str, mut replace: impl FnMut(&str) -> String) -> String {
    let mut out = String::with_capacity(text.len());
    let mut last = 0;
    scan_entries(text, |range, entry| {
        out.push_str(&text[last..range.start]);
        out.push_str(&replace(entry));
        last = range.end;
    });
    out.push_str(&text[last..]);
    out
}

/// `_ ` for every letter, words separated by three spaces.
pub fn blank_word(entry: &str) -> String {
    entry
        .split_whitespace()
        .map(|word| "_ ".repeat(word.chars().count()))
        .collect::<Vec<_>>()
        .join("   ")
        .trim()
        .to_string()
}

/// Like [`blank_word`] but the first letter of every word is kept.
pub fn first_letter_word(entry: &str) -> String {
    entry
        .split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            let first = chars.next().map(String::from).unwrap_or_default();
            format!("{first} {}", "_ ".repeat(chars.count()))
        })
        .collect::<Vec<_>>()
        .join("   ")
        .trim()
        .to_string()
}

pub fn gap_text(text: &str, mode: GapMode) -> String {
    replace_entries(text, |entry| mode.gap(entry))
}

/// Replaces each box word by its translation, looked up case-insensitively.
///
/// Words missing from `dictionary` are kept as they are. When the dictionary lists a word
/// twice the later translation wins.
pub fn translate_box(words: &[String], dictionary: &[VocabEntry]) -> Vec<String> {
    let lookup: HashMap<String, &str> = dictionary
        .iter()
        .map(|e| (e.word.to_lowercase(), e.translation.as_str()))
        .collect();

    words
        .iter()
        .map(|w| {
            lookup
                .get(&w.to_lowercase())
                .map_or_else(|| w.clone(), |t| t.to_string())
        })
        .collect()
}

/// A gap text together with its word box.
///
/// The box is shuffled once on construction so every gap mode shows the same order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClozeText {
    text: String,
    word_box: Vec<String>,
}

impl ClozeText {
    pub fn new(text: impl Into<String>, rng: &mut impl Rng) -> Self {
        let text = text.into();
        let mut word_box = extract_entries(&text);
        word_box.shuffle(rng);
        Self { text, word_box }
    }

    pub fn word_box(&self) -> &[String] {
        &self.word_box
    }

    pub fn has_entries(&self) -> bool {
        !self.word_box.is_empty()
    }

    pub fn gapped(&self, mode: GapMode) -> String {
        gap_text(&self.text, mode)
    }

    /// The word box as shown for `mode`.
    pub fn box_for(&self, mode: GapMode, dictionary: &[VocabEntry]) -> Vec<String> {
        match mode {
            GapMode::Translated => translate_box(&self.word_box, dictionary),
            GapMode::Blanks | GapMode::FirstLetter => self.word_box.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn extracts_entries_in_order() {
        let text = "Je mange [une pomme] et [le pain]. [] n'est rien.";
        assert_eq!(extract_entries(text), vec!["une pomme", "le pain"]);
    }

    #[test]
    fn entry_ends_at_first_closing_bracket() {
        assert_eq!(extract_entries("[[a]b]"), vec!["[a"]);
        assert_eq!(extract_entries("[open without close"), Vec::<String>::new());
        assert_eq!(extract_entries("[]x[y]"), vec!["y"]);
    }

    #[test]
    fn blank_word_formats_single_and_multi_word_entries() {
        assert_eq!(blank_word("chat"), "_ _ _ _");
        assert_eq!(blank_word("ai mangé"), "_ _    _ _ _ _ _");
        assert_eq!(blank_word("   "), "");
    }

    #[test]
    fn first_letter_word_keeps_initials() {
        assert_eq!(first_letter_word("chat"), "c _ _ _");
        assert_eq!(first_letter_word("le pain"), "l _    p _ _ _");
        assert_eq!(first_letter_word("à"), "à");
    }

    #[test]
    fn gap_text_replaces_only_entries() {
        let text = "Il a [un chien].";
        assert_eq!(gap_text(text, GapMode::Blanks), "Il a _ _    _ _ _ _ _.");
        assert_eq!(gap_text(text, GapMode::FirstLetter), "Il a u _    c _ _ _ _.");
        assert_eq!(gap_text("sans crochets", GapMode::Blanks), "sans crochets");
    }

    #[test]
    fn translated_box_uses_case_insensitive_lookup_with_fallback() {
        let dictionary = vec![
            VocabEntry::new("le chien", "der Hund"),
            VocabEntry::new("la maison", "das Haus"),
        ];
        let words = vec!["Le Chien".to_string(), "le chat".to_string()];
        assert_eq!(
            translate_box(&words, &dictionary),
            vec!["der Hund".to_string(), "le chat".to_string()]
        );
    }

    #[test]
    fn word_box_is_shuffled_once_and_shared_by_modes() {
        let mut rng = StdRng::seed_from_u64(9);
        let cloze = ClozeText::new("[a] [b] [c] [d] [e]", &mut rng);

        let mut sorted = cloze.word_box().to_vec();
        sorted.sort();
        assert_eq!(sorted, vec!["a", "b", "c", "d", "e"]);
        assert_eq!(cloze.box_for(GapMode::Blanks, &[]), cloze.word_box());
        assert_eq!(cloze.box_for(GapMode::FirstLetter, &[]), cloze.word_box());
        assert_eq!(cloze.box_for(GapMode::Translated, &[]), cloze.word_box());
    }

    #[test]
    fn gap_mode_parses_names_and_numbers() {
        assert_eq!("blanks".parse::<GapMode>(), Ok(GapMode::Blanks));
        assert_eq!("2".parse::<GapMode>(), Ok(GapMode::FirstLetter));
        assert_eq!("Translated".parse::<GapMode>(), Ok(GapMode::Translated));
        assert!("4".parse::<GapMode>().is_err());
        assert_eq!(GapMode::FirstLetter.to_string(), "first-letter");
    }
}
