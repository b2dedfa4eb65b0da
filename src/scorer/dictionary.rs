use crate::CfResult;
use std::collections::HashSet;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// A set of common words the scorer matches decoded tokens against.
/// Owned by the caller, not the engine, so tests can substitute
/// synthetic dictionaries.
#[derive(Debug, Clone)]
pub struct Dictionary {
    words: HashSet<String>,
}

/// The stock common-word list used when no file is supplied.
const COMMON_ENGLISH: &[&str] = &[
    "the", "and", "to", "of", "a", "in", "is", "that", "it", "you", "for",
    "on", "with", "as", "are", "this", "be", "or", "by", "from", "at", "an",
];

impl Dictionary {
    pub fn common_english() -> Self {
        Self::from_words(COMMON_ENGLISH.iter().copied())
    }

    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|w| w.as_ref().to_ascii_lowercase())
            .collect();
        Self { words }
    }

    /// Reads a JSON array of words. Reader-based so tests can feed a Cursor.
    pub fn from_reader<R: Read>(reader: R) -> CfResult<Self> {
        let words: Vec<String> = serde_json::from_reader(reader)?;
        Ok(Self::from_words(words))
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> CfResult<Self> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    /// Whole-word membership check; `word` must already be lowercased.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
