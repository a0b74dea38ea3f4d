// In-memory dictionary built from a newline-delimited word list

use std::path::Path;

use hashbrown::HashSet;

use crate::dictionary::Dictionary;
use crate::error::GameError;

/// A set of known words for one locale.
///
/// Words are stored normalized (trimmed, lowercase). Lookups for any other
/// locale report the word as unknown, the same as a spell checker with no
/// dictionary installed for that language.
#[derive(Debug, Clone)]
pub struct WordListDictionary {
    locale: String,
    words: HashSet<String>,
}

impl WordListDictionary {
    /// Create a dictionary from an iterator of words.
    pub fn new<I, S>(locale: &str, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|w| scramble_core::word::normalize(w.as_ref()))
            .filter(|w| !w.is_empty())
            .collect();
        Self {
            locale: locale.to_string(),
            words,
        }
    }

    /// Parse newline-delimited text. Blank lines are skipped.
    ///
    /// Returns `GameError::EmptyDictionary` if no words remain.
    pub fn from_text(locale: &str, text: &str) -> Result<Self, GameError> {
        let dict = Self::new(locale, text.lines());
        if dict.is_empty() {
            return Err(GameError::EmptyDictionary);
        }
        Ok(dict)
    }

    /// Read a newline-delimited word list from disk.
    pub fn load(locale: &str, path: &Path) -> Result<Self, GameError> {
        let text = std::fs::read_to_string(path).map_err(|source| GameError::DictionaryRead {
            path: path.to_path_buf(),
            source,
        })?;
        let dict = Self::from_text(locale, &text)?;
        tracing::debug!(
            path = %path.display(),
            locale = dict.locale(),
            words = dict.len(),
            "loaded dictionary"
        );
        Ok(dict)
    }

    /// Locale this dictionary answers for.
    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Dictionary for WordListDictionary {
    fn is_known_word(&self, word: &str, locale: &str) -> bool {
        locale == self.locale && self.words.contains(word)
    }
}
