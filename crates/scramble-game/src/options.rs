// Game configuration

use scramble_core::constants::{DEFAULT_LOCALE, FALLBACK_ROOT_WORD, MIN_WORD_LENGTH};

/// Options controlling validation and root-word selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameOptions {
    /// Shortest candidate, in letters, that can be accepted.
    pub min_word_length: usize,
    /// Locale passed to the dictionary oracle.
    pub locale: String,
    /// Root word used when the corpus has no words. Always normalized and
    /// non-blank, so it is only set through `with_fallback_root`.
    fallback_root: String,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            min_word_length: MIN_WORD_LENGTH,
            locale: DEFAULT_LOCALE.to_string(),
            fallback_root: FALLBACK_ROOT_WORD.to_string(),
        }
    }
}

impl GameOptions {
    /// Set the minimum candidate length. Values below 1 are clamped to 1.
    pub fn with_min_word_length(mut self, len: usize) -> Self {
        self.min_word_length = len.max(1);
        self
    }

    /// Set the dictionary locale.
    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = locale.into();
        self
    }

    /// Set the fallback root word. The word is normalized; blank input
    /// keeps the current fallback.
    pub fn with_fallback_root(mut self, root: &str) -> Self {
        let root = scramble_core::word::normalize(root);
        if !root.is_empty() {
            self.fallback_root = root;
        }
        self
    }

    /// Root word used when the corpus has no words.
    pub fn fallback_root(&self) -> &str {
        &self.fallback_root
    }
}
