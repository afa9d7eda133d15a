use super::cloze::blank_word;
use crate::core::models::conjugation::Verb;
use rand::Rng;
use rand::seq::SliceRandom;

pub const PRONOUNS: [&str; 9] = ["je", "tu", "il", "elle", "on", "nous", "vous", "ils", "elles"];

/// Pronouns offered by the conjugation table, which leaves out `on`.
pub const TABLE_PRONOUNS: [&str; 8] = ["je", "tu", "il", "elle", "nous", "vous", "ils", "elles"];

pub const TABLE_HEADERS: [&str; 4] = ["Verbe", "Présent", "Passé Composé", "En allemand"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PronounForm {
    pub pronoun: &'static str,
    pub form: String,
}

impl PronounForm {
    pub fn underlined(&self) -> String {
        underline_form(self.pronoun, &self.form)
    }
}

/// One line of a conjugation drill: a verb asked in two tenses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrillRow {
    pub verb: String,
    pub first: PronounForm,
    pub second: PronounForm,
}

/// One line of a conjugation table: a verb and the pronoun to conjugate it with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PronounRow {
    pub verb: String,
    pub pronoun: &'static str,
}

/// The pronoun followed by the form blanked out letter by letter.
pub fn underline_form(pronoun: &str, form: &str) -> String {
    format!("{pronoun} {}", blank_word(form))
}

/// Draws `rows` exercises, each with a random verb and two independently drawn pronouns.
///
/// A form missing from the verb's data falls back to its infinitive. Returns nothing when
/// `verbs` is empty.
pub fn build_drill(
    verbs: &[&Verb],
    rows: usize,
    tenses: (&str, &str),
    rng: &mut impl Rng,
) -> Vec<DrillRow> {
    if verbs.is_empty() {
        return Vec::new();
    }

    (0..rows)
        .filter_map(|_| {
            let verb = verbs.choose(rng)?;
            let mut draw = |tense: &str| {
                let pronoun = *PRONOUNS.choose(&mut *rng)?;
                Some(PronounForm {
                    pronoun,
                    form: verb.form_or_infinitive(tense, pronoun).to_string(),
                })
            };
            let first = draw(tenses.0)?;
            let second = draw(tenses.1)?;
            Some(DrillRow {
                verb: verb.infinitive.clone(),
                first,
                second,
            })
        })
        .collect()
}

pub fn build_pronoun_rows<S: AsRef<str>>(
    verbs: &[S],
    rows: usize,
    rng: &mut impl Rng,
) -> Vec<PronounRow> {
    (0..rows)
        .filter_map(|_| {
            let verb = verbs.choose(rng)?;
            let pronoun = *TABLE_PRONOUNS.choose(rng)?;
            Some(PronounRow {
                verb: verb.as_ref().to_string(),
                pronoun,
            })
        })
        .collect()
}
