use std::collections::HashMap;

/// The conjugated forms of one verb in one tense, keyed by personal pronoun.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Tense {
    pub name: String,
    forms: HashMap<String, String>,
}

impl Tense {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            forms: HashMap::new(),
        }
    }

    pub fn with_form(mut self, pronoun: impl Into<String>, form: impl Into<String>) -> Self {
        self.forms.insert(pronoun.into(), form.into());
        self
    }

    pub fn form(&self, pronoun: &str) -> Option<&str> {
        self.forms.get(pronoun).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.forms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.forms.is_empty()
    }
}

/// A verb with its tenses, kept in the order they appear in the source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verb {
    pub infinitive: String,
    tenses: Vec<Tense>,
}

impl Verb {
    pub fn new(infinitive: impl Into<String>, tenses: Vec<Tense>) -> Self {
        Self {
            infinitive: infinitive.into(),
            tenses,
        }
    }

    pub fn tenses(&self) -> &[Tense] {
        &self.tenses
    }

    pub fn tense(&self, name: &str) -> Option<&Tense> {
        self.tenses.iter().find(|t| t.name == name)
    }

    pub fn form(&self, tense: &str, pronoun: &str) -> Option<&str> {
        self.tense(tense).and_then(|t| t.form(pronoun))
    }

    /// Falls back to the infinitive when the tense or the pronoun is missing.
    pub fn form_or_infinitive(&self, tense: &str, pronoun: &str) -> &str {
        self.form(tense, pronoun).unwrap_or(&self.infinitive)
    }
}

/// Infinitive → tense → pronoun → conjugated form.
///
/// Verbs keep their insertion order. Inserting a verb whose infinitive is already present
/// replaces it in place, so merging several files behaves like a dictionary update.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ConjugationTable {
    verbs: Vec<Verb>,
}

impl ConjugationTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, verb: Verb) {
        match self
            .verbs
            .iter_mut()
            .find(|v| v.infinitive == verb.infinitive)
        {
            Some(existing) => *existing = verb,
            None => self.verbs.push(verb),
        }
    }

    pub fn merge(&mut self, other: ConjugationTable) {
        for verb in other.verbs {
            self.insert(verb);
        }
    }

    pub fn get(&self, infinitive: &str) -> Option<&Verb> {
        self.verbs.iter().find(|v| v.infinitive == infinitive)
    }

    pub fn verbs(&self) -> &[Verb] {
        &self.verbs
    }

    pub fn infinitives(&self) -> impl Iterator<Item = &str> {
        self.verbs.iter().map(|v| v.infinitive.as_str())
    }

    /// Tense names of the first verb; these are what a user is offered to choose from.
    pub fn tense_names(&self) -> Vec<&str> {
        self.verbs
            .first()
            .map(|v| v.tenses.iter().map(|t| t.name.as_str()).collect())
            .unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.verbs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.verbs.is_empty()
    }
}

impl FromIterator<Verb> for ConjugationTable {
    fn from_iter<I: IntoIterator<Item = Verb>>(iter: I) -> Self {
        let mut table = ConjugationTable::new();
        for verb in iter {
            table.insert(verb);
        }
        table
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn etre() -> Verb {
        Verb::new(
            "être",
            vec![
                Tense::new("Présent")
                    .with_form("je", "suis")
                    .with_form("nous", "sommes"),
                Tense::new("Passé composé").with_form("je", "ai été"),
            ],
        )
    }

    #[test]
    fn form_lookup_and_infinitive_fallback() {
        let verb = etre();
        assert_eq!(verb.form("Présent", "je"), Some("suis"));
        assert_eq!(verb.form_or_infinitive("Présent", "vous"), "être");
        assert_eq!(verb.form_or_infinitive("Imparfait", "je"), "être");
    }

    #[test]
    fn insert_replaces_existing_verb_in_place() {
        let mut table: ConjugationTable = vec![etre(), Verb::new("avoir", vec![])]
            .into_iter()
            .collect();
        table.insert(Verb::new("être", vec![Tense::new("Futur")]));

        let names: Vec<_> = table.infinitives().collect();
        assert_eq!(names, vec!["être", "avoir"]);
        assert_eq!(table.get("être").unwrap().tenses().len(), 1);
    }

    #[test]
    fn tense_names_follow_first_verb_order() {
        let table: ConjugationTable = std::iter::once(etre()).collect();
        assert_eq!(table.tense_names(), vec!["Présent", "Passé composé"]);
        assert!(ConjugationTable::new().tense_names().is_empty());
    }
}
