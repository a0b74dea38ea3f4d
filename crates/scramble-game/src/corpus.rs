// Root-word corpus: the list new games draw their root word from

use std::path::Path;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::error::GameError;

/// Built-in start words, used when no corpus file is available.
const BUILTIN_START_WORDS: &str = include_str!("../data/start.txt");

/// A list of candidate root words.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RootWordCorpus {
    words: Vec<String>,
}

impl RootWordCorpus {
    /// Parse newline-delimited text.
    ///
    /// Each line is trimmed and lowercased; blank lines (including the one
    /// after a trailing newline) are dropped so they can never become a root.
    pub fn from_text(text: &str) -> Self {
        Self::from_words(text.lines())
    }

    /// Build a corpus from individual words, normalizing each one.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|w| scramble_core::word::normalize(w.as_ref()))
            .filter(|w| !w.is_empty())
            .collect();
        Self { words }
    }

    /// Read a corpus file.
    pub fn load(path: &Path) -> Result<Self, GameError> {
        let text = std::fs::read_to_string(path).map_err(|source| GameError::CorpusRead {
            path: path.to_path_buf(),
            source,
        })?;
        let corpus = Self::from_text(&text);
        tracing::debug!(path = %path.display(), words = corpus.len(), "loaded start words");
        Ok(corpus)
    }

    /// Read a corpus file, falling back to the built-in list if it cannot be
    /// read or holds no words.
    pub fn load_or_builtin(path: &Path) -> Self {
        match Self::load(path) {
            Ok(corpus) if !corpus.is_empty() => corpus,
            Ok(_) => {
                tracing::warn!(path = %path.display(), "start word file is empty, using built-in list");
                Self::builtin()
            }
            Err(e) => {
                tracing::warn!(error = %e, "using built-in start words");
                Self::builtin()
            }
        }
    }

    /// The embedded default list.
    pub fn builtin() -> Self {
        Self::from_text(BUILTIN_START_WORDS)
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Pick a root word uniformly at random, or `fallback` if the corpus is
    /// empty.
    pub fn choose<R: Rng + ?Sized>(&self, rng: &mut R, fallback: &str) -> String {
        match self.words.choose(rng) {
            Some(word) => word.clone(),
            None => {
                tracing::warn!(fallback, "start word corpus is empty");
                fallback.to_string()
            }
        }
    }
}

impl Default for RootWordCorpus {
    fn default() -> Self {
        Self::builtin()
    }
}
