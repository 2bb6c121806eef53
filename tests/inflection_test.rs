use menagerie::core::morphology::Paradigm;
use menagerie::core::MorphAnalyzer;
use menagerie::{Case, DictionaryAnalyzer, Inflector};
use std::io::Write;
use tempfile::NamedTempFile;

fn inflector() -> Inflector<DictionaryAnalyzer> {
    Inflector::new(DictionaryAnalyzer::builtin().unwrap())
}

#[test]
fn test_lion_accusative_and_snake_genitive() {
    let inflector = inflector();

    assert_eq!(inflector.inflect("Лев", Case::Accusative), "Льва");
    assert_eq!(inflector.inflect("Змея", Case::Genitive), "Змеи");
}

#[test]
fn test_demo_animals_in_every_case() {
    let inflector = inflector();

    let expected = [
        ("Попугай", ["Попугай", "Попугая", "Попугаю", "Попугая", "Попугаем", "Попугае"]),
        ("Лев", ["Лев", "Льва", "Льву", "Льва", "Львом", "Льве"]),
        ("Змея", ["Змея", "Змеи", "Змее", "Змею", "Змеёй", "Змее"]),
    ];

    for (word, forms) in expected {
        for (case, form) in Case::ALL.iter().zip(forms) {
            assert_eq!(inflector.inflect(word, *case), form, "{} in {}", word, case);
        }
    }
}

#[test]
fn test_every_lexicon_word_inflects_and_keeps_capitalization() {
    let analyzer = DictionaryAnalyzer::builtin().unwrap();
    let lemmas: Vec<String> = analyzer.lexemes().map(|l| l.lemma().to_string()).collect();
    let inflector = Inflector::new(analyzer);

    for lemma in &lemmas {
        let mut chars = lemma.chars();
        let capitalized: String = chars
            .next()
            .map(|c| c.to_uppercase().chain(chars).collect())
            .unwrap_or_default();

        for case in Case::ALL {
            let lower = inflector.inflect(lemma, case);
            assert!(!lower.is_empty(), "{} in {}", lemma, case);
            assert!(lower.chars().next().unwrap().is_lowercase());

            let upper = inflector.inflect(&capitalized, case);
            assert!(
                upper.chars().next().unwrap().is_uppercase(),
                "{} in {} gave {}",
                capitalized,
                case,
                upper
            );
        }
    }
}

#[test]
fn test_unknown_and_foreign_words_are_unchanged() {
    let inflector = inflector();

    for word in ["Rex", "Smith", "Хрюндель", "Барсик", "x"] {
        for case in Case::ALL {
            assert_eq!(inflector.inflect(word, case), word);
        }
    }
}

#[test]
fn test_guessing_inflects_unknown_cyrillic_only() {
    let analyzer = DictionaryAnalyzer::builtin().unwrap().with_guessing(true);
    let inflector = Inflector::new(analyzer);

    assert_eq!(inflector.inflect("Барсик", Case::Accusative), "Барсика");
    assert_eq!(inflector.inflect("Мурка", Case::Genitive), "Мурки");
    assert_eq!(inflector.inflect("Rex", Case::Accusative), "Rex");
    // dictionary entries still win over guesses
    assert_eq!(inflector.inflect("Лев", Case::Genitive), "Льва");
}

#[test]
fn test_indeclinable_words_stay_put() {
    let inflector = inflector();

    assert_eq!(inflector.inflect("Кенгуру", Case::Instrumental), "Кенгуру");
    assert_eq!(inflector.inflect("фламинго", Case::Dative), "фламинго");
}

#[test]
fn test_oblique_input_reinflects() {
    let inflector = inflector();

    assert_eq!(inflector.inflect("Льва", Case::Dative), "Льву");
    assert_eq!(inflector.inflect("змеёй", Case::Nominative), "змея");
    assert_eq!(inflector.inflect("Орла", Case::Nominative), "Орёл");
}

#[test]
fn test_extra_lexicon_file_is_merged() {
    let mut lexicon = NamedTempFile::new().unwrap();
    lexicon
        .write_all(
            r#"
[[lexeme]]
lemma = "барсук"
paradigm = "masc_hard"

[[lexeme]]
lemma = "гиена"
paradigm = "fem_hard"
"#
            .as_bytes(),
        )
        .unwrap();

    let analyzer = DictionaryAnalyzer::builtin()
        .unwrap()
        .with_lexicon_file(lexicon.path())
        .unwrap();
    assert_eq!(analyzer.parse("гиена")[0].lexeme().paradigm(), Paradigm::FemHard);

    let inflector = Inflector::new(analyzer);
    assert_eq!(inflector.inflect("Барсук", Case::Instrumental), "Барсуком");
    assert_eq!(inflector.inflect("Гиена", Case::Accusative), "Гиену");
    assert_eq!(inflector.inflect("Лев", Case::Accusative), "Льва");
}

#[test]
fn test_borrowed_analyzer_can_back_an_inflector() {
    let analyzer = DictionaryAnalyzer::builtin().unwrap();
    let inflector = Inflector::new(&analyzer);

    assert_eq!(inflector.inflect("Тигр", Case::Instrumental), "Тигром");
    assert_eq!(analyzer.len(), inflector.analyzer().len());
}
