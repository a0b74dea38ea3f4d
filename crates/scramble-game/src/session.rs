// GameSession: root word, accepted-word history and score tally
//
// The session is an explicit value owned by the caller. It changes in exactly
// two ways: `start_game` replaces the root and clears history and tally
// together, and a successful `submit` pushes one word to the front of the
// history and counts it. A rejected submission leaves it untouched.

use rand::Rng;
use serde::Serialize;

use scramble_core::{RejectionReason, ScoreTally};

use crate::corpus::RootWordCorpus;
use crate::dictionary::Dictionary;
use crate::options::GameOptions;
use crate::validator::{AcceptedWord, validate};

/// State of one game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSession {
    root: String,
    /// Accepted words, most recent first.
    used: Vec<String>,
    tally: ScoreTally,
    options: GameOptions,
}

/// Read-only copy of a session for presentation layers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSnapshot {
    pub root_word: String,
    pub used_words: Vec<String>,
    pub score: ScoreTally,
}

impl GameSession {
    /// Start a new game with a root word drawn from `corpus`.
    pub fn start<R: Rng + ?Sized>(
        corpus: &RootWordCorpus,
        rng: &mut R,
        options: GameOptions,
    ) -> Self {
        let root = corpus.choose(rng, options.fallback_root());
        tracing::info!(root = %root, "new game");
        Self {
            root,
            used: Vec::new(),
            tally: ScoreTally::new(),
            options,
        }
    }

    /// Start a game over a fixed root word.
    ///
    /// The root is normalized. A blank root falls back to
    /// `options.fallback_root()`.
    pub fn with_root(root: &str, options: GameOptions) -> Self {
        let mut root = scramble_core::word::normalize(root);
        if root.is_empty() {
            root = options.fallback_root().to_string();
        }
        tracing::info!(root = %root, "new game");
        Self {
            root,
            used: Vec::new(),
            tally: ScoreTally::new(),
            options,
        }
    }

    /// Pick a fresh root word and clear history and tally.
    ///
    /// Always resets fully, no matter how many times it is called.
    pub fn start_game<R: Rng + ?Sized>(&mut self, corpus: &RootWordCorpus, rng: &mut R) {
        let root = corpus.choose(rng, self.options.fallback_root());
        tracing::info!(root = %root, previous = %self.root, words = self.tally.total(), "new game");
        self.root = root;
        self.used.clear();
        self.tally.reset();
    }

    /// Validate `candidate` and record it if accepted.
    pub fn submit<D: Dictionary + ?Sized>(
        &mut self,
        candidate: &str,
        dictionary: &D,
    ) -> Result<AcceptedWord, RejectionReason> {
        let accepted = validate(candidate, &self.root, &self.used, dictionary, &self.options)?;
        self.used.insert(0, accepted.as_str().to_string());
        self.tally.record(accepted.letter_count());
        Ok(accepted)
    }

    pub fn root(&self) -> &str {
        &self.root
    }

    /// Accepted words, most recent first.
    pub fn used_words(&self) -> &[String] {
        &self.used
    }

    pub fn tally(&self) -> &ScoreTally {
        &self.tally
    }

    pub fn options(&self) -> &GameOptions {
        &self.options
    }

    /// User-facing message for a rejection in this session.
    pub fn rejection_message(&self, reason: RejectionReason) -> String {
        reason.message(&self.root)
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            root_word: self.root.clone(),
            used_words: self.used.clone(),
            score: self.tally,
        }
    }
}
