//! Rule-table morphology for Russian singular nouns.
//!
//! A lexicon entry names a lemma and its declension paradigm; every case form
//! is generated once when the entry is loaded and indexed, so any form of a
//! known word (not just the nominative) parses back to its lexeme.

use crate::domain::ports::MorphAnalyzer;
use crate::utils::error::{Result, ZooError};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::path::Path;
use std::str::FromStr;
use std::sync::Arc;

const BUILTIN_LEXICON: &str = include_str!("../../assets/lexicon.toml");

/// Score given to dictionary readings.
pub const DICTIONARY_SCORE: f32 = 1.0;
/// Score given to a reading predicted from the word ending.
pub const GUESS_SCORE: f32 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Case {
    Nominative,
    Genitive,
    Dative,
    Accusative,
    Instrumental,
    Prepositional,
}

impl Case {
    pub const ALL: [Case; 6] = [
        Case::Nominative,
        Case::Genitive,
        Case::Dative,
        Case::Accusative,
        Case::Instrumental,
        Case::Prepositional,
    ];

    /// OpenCorpora grammeme for the case.
    pub fn tag(&self) -> &'static str {
        match self {
            Case::Nominative => "nomn",
            Case::Genitive => "gent",
            Case::Dative => "datv",
            Case::Accusative => "accs",
            Case::Instrumental => "ablt",
            Case::Prepositional => "loct",
        }
    }
}

impl fmt::Display for Case {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Case {
    type Err = ZooError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "nomn" | "nom" | "nominative" => Ok(Case::Nominative),
            "gent" | "gen" | "genitive" => Ok(Case::Genitive),
            "datv" | "dat" | "dative" => Ok(Case::Dative),
            "accs" | "acc" | "accusative" => Ok(Case::Accusative),
            "ablt" | "ins" | "instrumental" => Ok(Case::Instrumental),
            "loct" | "loc" | "prep" | "locative" | "prepositional" => Ok(Case::Prepositional),
            _ => Err(ZooError::UnknownCaseError { tag: s.to_string() }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Paradigm {
    /// Masculine, hard consonant stem: лев, тигр.
    MascHard,
    /// Masculine in -ь: медведь, конь.
    MascSoft,
    /// Masculine in -й: попугай.
    MascJot,
    /// Neuter in -о: существо.
    NeutHard,
    /// First declension in -а: обезьяна, лиса.
    FemHard,
    /// First declension in -я: змея, цапля.
    FemSoft,
    /// Third declension in -ь: рысь, лошадь.
    FemThird,
    /// Borrowed nouns that never change: кенгуру, фламинго.
    Indeclinable,
}

enum Accusative {
    Ending(&'static str),
    /// Genitive for animate nouns, nominative for inanimate ones.
    ByAnimacy,
}

struct Endings {
    nominative: &'static str,
    genitive: &'static str,
    dative: &'static str,
    accusative: Accusative,
    instrumental: &'static str,
    prepositional: &'static str,
}

impl Paradigm {
    fn endings(self) -> Option<Endings> {
        let endings = match self {
            Paradigm::MascHard => Endings {
                nominative: "",
                genitive: "а",
                dative: "у",
                accusative: Accusative::ByAnimacy,
                instrumental: "ом",
                prepositional: "е",
            },
            Paradigm::MascSoft => Endings {
                nominative: "ь",
                genitive: "я",
                dative: "ю",
                accusative: Accusative::ByAnimacy,
                instrumental: "ем",
                prepositional: "е",
            },
            Paradigm::MascJot => Endings {
                nominative: "й",
                genitive: "я",
                dative: "ю",
                accusative: Accusative::ByAnimacy,
                instrumental: "ем",
                prepositional: "е",
            },
            Paradigm::NeutHard => Endings {
                nominative: "о",
                genitive: "а",
                dative: "у",
                accusative: Accusative::Ending("о"),
                instrumental: "ом",
                prepositional: "е",
            },
            Paradigm::FemHard => Endings {
                nominative: "а",
                genitive: "ы",
                dative: "е",
                accusative: Accusative::Ending("у"),
                instrumental: "ой",
                prepositional: "е",
            },
            Paradigm::FemSoft => Endings {
                nominative: "я",
                genitive: "и",
                dative: "е",
                accusative: Accusative::Ending("ю"),
                instrumental: "ей",
                prepositional: "е",
            },
            Paradigm::FemThird => Endings {
                nominative: "ь",
                genitive: "и",
                dative: "и",
                accusative: Accusative::Ending("ь"),
                instrumental: "ью",
                prepositional: "и",
            },
            Paradigm::Indeclinable => return None,
        };
        Some(endings)
    }

    /// Predicts a paradigm from the last letter of a lowercase lemma.
    pub fn guess(lemma: &str) -> Option<Paradigm> {
        match lemma.chars().last()? {
            'а' => Some(Paradigm::FemHard),
            'я' => Some(Paradigm::FemSoft),
            'й' => Some(Paradigm::MascJot),
            'о' => Some(Paradigm::NeutHard),
            'ь' => Some(Paradigm::MascSoft),
            c if is_cyrillic_consonant(c) => Some(Paradigm::MascHard),
            _ => None,
        }
    }
}

fn is_cyrillic_letter(c: char) -> bool {
    ('а'..='я').contains(&c) || c == 'ё'
}

fn is_cyrillic_consonant(c: char) -> bool {
    is_cyrillic_letter(c) && !"аеёиоуыэюяъь".contains(c)
}

/// ы is never written after velars and hushing consonants.
fn join(stem: &str, ending: &str) -> String {
    if let (Some(last), Some(rest)) = (stem.chars().last(), ending.strip_prefix('ы')) {
        if "гкхжшщч".contains(last) {
            return format!("{}и{}", stem, rest);
        }
    }
    format!("{}{}", stem, ending)
}

fn normalize(word: &str) -> String {
    word.to_lowercase().replace('ё', "е")
}

#[derive(Debug, Clone, PartialEq)]
pub struct Lexeme {
    lemma: String,
    paradigm: Paradigm,
    animate: bool,
    forms: BTreeMap<Case, String>,
}

impl Lexeme {
    pub fn build(
        lemma: &str,
        paradigm: Paradigm,
        animate: bool,
        stem: Option<&str>,
        overrides: &BTreeMap<Case, String>,
    ) -> Result<Self> {
        let lemma = lemma.trim().to_lowercase();
        if lemma.is_empty() {
            return Err(ZooError::LexiconError {
                message: "lemma cannot be empty".to_string(),
            });
        }

        let mut forms = BTreeMap::new();
        match paradigm.endings() {
            None => {
                for case in Case::ALL {
                    forms.insert(case, lemma.clone());
                }
            }
            Some(endings) => {
                let stem = match stem {
                    Some(stem) => stem.trim().to_lowercase(),
                    None => lemma
                        .strip_suffix(endings.nominative)
                        .filter(|s| !s.is_empty())
                        .map(str::to_string)
                        .ok_or_else(|| ZooError::LexiconError {
                            message: format!(
                                "'{}' does not end in '{}' required by {:?}; give an explicit stem",
                                lemma, endings.nominative, paradigm
                            ),
                        })?,
                };

                let genitive = join(&stem, endings.genitive);
                let accusative = match endings.accusative {
                    Accusative::Ending(ending) => join(&stem, ending),
                    Accusative::ByAnimacy if animate => genitive.clone(),
                    Accusative::ByAnimacy => lemma.clone(),
                };

                forms.insert(Case::Nominative, lemma.clone());
                forms.insert(Case::Genitive, genitive);
                forms.insert(Case::Dative, join(&stem, endings.dative));
                forms.insert(Case::Accusative, accusative);
                forms.insert(Case::Instrumental, join(&stem, endings.instrumental));
                forms.insert(Case::Prepositional, join(&stem, endings.prepositional));
            }
        }

        for (case, form) in overrides {
            forms.insert(*case, form.trim().to_lowercase());
        }

        Ok(Self {
            lemma,
            paradigm,
            animate,
            forms,
        })
    }

    pub fn lemma(&self) -> &str {
        &self.lemma
    }

    pub fn paradigm(&self) -> Paradigm {
        self.paradigm
    }

    pub fn is_animate(&self) -> bool {
        self.animate
    }

    pub fn form(&self, case: Case) -> Option<&str> {
        self.forms.get(&case).map(String::as_str)
    }

    pub fn forms(&self) -> impl Iterator<Item = (Case, &str)> {
        self.forms.iter().map(|(case, form)| (*case, form.as_str()))
    }
}

/// One reading of a surface word: which lexeme it belongs to and which case it realises.
#[derive(Debug, Clone, PartialEq)]
pub struct Parse {
    pub word: String,
    pub case: Case,
    pub score: f32,
    lexeme: Arc<Lexeme>,
}

impl Parse {
    pub fn new(word: impl Into<String>, case: Case, score: f32, lexeme: Arc<Lexeme>) -> Self {
        Self {
            word: word.into(),
            case,
            score,
            lexeme,
        }
    }

    pub fn normal_form(&self) -> &str {
        self.lexeme.lemma()
    }

    pub fn lexeme(&self) -> &Lexeme {
        &self.lexeme
    }

    pub fn inflect(&self, case: Case) -> Option<String> {
        self.lexeme.form(case).map(str::to_string)
    }
}

#[derive(Debug, Deserialize)]
struct LexiconFile {
    #[serde(default)]
    lexeme: Vec<LexiconEntry>,
}

#[derive(Debug, Deserialize)]
struct LexiconEntry {
    lemma: String,
    paradigm: Paradigm,
    stem: Option<String>,
    #[serde(default = "default_animate")]
    animate: bool,
    #[serde(default)]
    forms: BTreeMap<String, String>,
}

// Zoo lexicons are mostly animals, so entries are animate unless marked otherwise.
fn default_animate() -> bool {
    true
}

impl LexiconEntry {
    fn into_lexeme(self) -> Result<Lexeme> {
        let mut overrides = BTreeMap::new();
        for (tag, form) in &self.forms {
            let case = tag.parse::<Case>().map_err(|_| ZooError::LexiconError {
                message: format!("'{}': unknown case tag '{}' in forms", self.lemma, tag),
            })?;
            overrides.insert(case, form.clone());
        }
        Lexeme::build(
            &self.lemma,
            self.paradigm,
            self.animate,
            self.stem.as_deref(),
            &overrides,
        )
    }
}

/// Dictionary-backed [`MorphAnalyzer`] with optional ending-based guessing
/// for words it does not know.
#[derive(Debug, Clone, Default)]
pub struct DictionaryAnalyzer {
    lexemes: Vec<Arc<Lexeme>>,
    index: HashMap<String, Vec<(usize, Case)>>,
    guess_unknown: bool,
}

impl DictionaryAnalyzer {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Analyzer over the lexicon bundled with the crate.
    pub fn builtin() -> Result<Self> {
        Self::from_lexicon_str(BUILTIN_LEXICON)
    }

    pub fn from_lexicon_str(content: &str) -> Result<Self> {
        let mut analyzer = Self::empty();
        analyzer.add_lexicon_str(content)?;
        Ok(analyzer)
    }

    /// Merges the entries of a lexicon TOML file into this analyzer.
    pub fn with_lexicon_file<P: AsRef<Path>>(mut self, path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        let added = self.add_lexicon_str(&content)?;
        tracing::debug!(
            "Merged {} lexemes from {}",
            added,
            path.as_ref().display()
        );
        Ok(self)
    }

    pub fn with_guessing(mut self, enabled: bool) -> Self {
        self.guess_unknown = enabled;
        self
    }

    pub fn guesses_unknown(&self) -> bool {
        self.guess_unknown
    }

    pub fn add_lexicon_str(&mut self, content: &str) -> Result<usize> {
        let file: LexiconFile = toml::from_str(content).map_err(|e| ZooError::LexiconError {
            message: format!("TOML parsing error: {}", e),
        })?;

        // all or nothing: a bad entry leaves the analyzer untouched
        let lexemes = file
            .lexeme
            .into_iter()
            .map(LexiconEntry::into_lexeme)
            .collect::<Result<Vec<_>>>()?;

        let count = lexemes.len();
        for lexeme in lexemes {
            self.add_lexeme(lexeme);
        }
        Ok(count)
    }

    pub fn add_lexeme(&mut self, lexeme: Lexeme) {
        let idx = self.lexemes.len();
        for (case, form) in lexeme.forms() {
            let hits = self.index.entry(normalize(form)).or_default();
            if !hits.contains(&(idx, case)) {
                hits.push((idx, case));
            }
        }
        self.lexemes.push(Arc::new(lexeme));
    }

    pub fn len(&self) -> usize {
        self.lexemes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lexemes.is_empty()
    }

    pub fn lexemes(&self) -> impl Iterator<Item = &Lexeme> {
        self.lexemes.iter().map(|l| l.as_ref())
    }

    fn guess(&self, word: &str) -> Option<Parse> {
        let lower = word.to_lowercase();
        if lower.chars().count() < 3 || !lower.chars().all(is_cyrillic_letter) {
            return None;
        }

        let paradigm = Paradigm::guess(&lower)?;
        let lexeme = Lexeme::build(&lower, paradigm, true, None, &BTreeMap::new()).ok()?;
        tracing::debug!("Guessed {:?} for unknown word '{}'", paradigm, word);
        Some(Parse::new(lower, Case::Nominative, GUESS_SCORE, Arc::new(lexeme)))
    }
}

impl MorphAnalyzer for DictionaryAnalyzer {
    fn parse(&self, word: &str) -> Vec<Parse> {
        let surface = word.to_lowercase();

        if let Some(hits) = self.index.get(&normalize(word)) {
            let mut parses: Vec<Parse> = hits
                .iter()
                .map(|&(idx, case)| {
                    Parse::new(
                        surface.clone(),
                        case,
                        DICTIONARY_SCORE,
                        Arc::clone(&self.lexemes[idx]),
                    )
                })
                .collect();
            // stable: lexicon order is kept within each case
            parses.sort_by_key(|p| p.case);
            return parses;
        }

        if self.guess_unknown {
            return self.guess(word).into_iter().collect();
        }

        Vec::new()
    }
}
