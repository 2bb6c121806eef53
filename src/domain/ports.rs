use crate::core::morphology::Parse;
use crate::utils::error::Result;

/// A morphological analyzer: returns every reading of `word`, most probable first.
pub trait MorphAnalyzer {
    fn parse(&self, word: &str) -> Vec<Parse>;
}

pub trait Storage {
    fn read_file(&self, path: &str) -> Result<Vec<u8>>;
    fn write_file(&self, path: &str, data: &[u8]) -> Result<()>;
}

impl<T: MorphAnalyzer + ?Sized> MorphAnalyzer for &T {
    fn parse(&self, word: &str) -> Vec<Parse> {
        (**self).parse(word)
    }
}

impl<T: MorphAnalyzer + ?Sized> MorphAnalyzer for Box<T> {
    fn parse(&self, word: &str) -> Vec<Parse> {
        (**self).parse(word)
    }
}
