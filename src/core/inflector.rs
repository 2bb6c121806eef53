use crate::core::morphology::Case;
use crate::domain::ports::MorphAnalyzer;

/// Puts words into a grammatical case using an injected [`MorphAnalyzer`].
///
/// Inflection is best effort: when the analyzer has no reading of the word, or
/// its best reading has no form for the case, the word comes back unchanged.
pub struct Inflector<A: MorphAnalyzer> {
    analyzer: A,
}

impl<A: MorphAnalyzer> Inflector<A> {
    pub fn new(analyzer: A) -> Self {
        Self { analyzer }
    }

    pub fn analyzer(&self) -> &A {
        &self.analyzer
    }

    pub fn inflect(&self, word: &str, case: Case) -> String {
        let Some(first) = word.chars().next() else {
            return String::new();
        };

        let parses = self.analyzer.parse(word);
        let Some(best) = parses.first() else {
            tracing::debug!("No parse for '{}', leaving it as is", word);
            return word.to_string();
        };

        match best.inflect(case) {
            Some(form) if first.is_uppercase() => capitalize(&form),
            Some(form) => form,
            None => {
                tracing::debug!("'{}' has no {} form", best.normal_form(), case);
                word.to_string()
            }
        }
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
