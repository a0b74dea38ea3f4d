// Candidate validation pipeline
//
// Checks run in a fixed order and the first failure decides the outcome:
//
//   1. length        -> TooShort
//   2. non-identity  -> SameAsRoot
//   3. originality   -> AlreadyUsed
//   4. letters       -> NotPossible
//   5. dictionary    -> NotReal
//
// The pipeline is pure: it never touches the session. `GameSession::submit`
// applies the result.

use serde::Serialize;

use scramble_core::RejectionReason;
use scramble_core::word::{can_form, letter_count, normalize};

use crate::dictionary::Dictionary;
use crate::options::GameOptions;

/// A candidate that passed every check.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct AcceptedWord {
    word: String,
    letters: usize,
}

impl AcceptedWord {
    fn new(word: String) -> Self {
        let letters = letter_count(&word);
        Self { word, letters }
    }

    /// The normalized word.
    pub fn as_str(&self) -> &str {
        &self.word
    }

    /// Length in letters.
    pub fn letter_count(&self) -> usize {
        self.letters
    }

    pub fn into_string(self) -> String {
        self.word
    }
}

impl std::fmt::Display for AcceptedWord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.word)
    }
}

/// Check a normalized word against the minimum length.
pub fn is_long_enough(word: &str, min_len: usize) -> bool {
    letter_count(word) >= min_len
}

/// Check that a normalized word is not already in the history.
pub fn is_original<S: AsRef<str>>(word: &str, used: &[S]) -> bool {
    !used.iter().any(|u| u.as_ref() == word)
}

/// Check that a normalized word can be spelled from the root's letters.
pub fn is_possible(word: &str, root: &str) -> bool {
    can_form(word, root)
}

/// Validate a raw candidate against a root word and the used-word history.
///
/// `candidate` is normalized first (trimmed, lowercased). `root` and `used`
/// are expected to be normalized already, which `GameSession` guarantees.
pub fn validate<D, S>(
    candidate: &str,
    root: &str,
    used: &[S],
    dictionary: &D,
    options: &GameOptions,
) -> Result<AcceptedWord, RejectionReason>
where
    D: Dictionary + ?Sized,
    S: AsRef<str>,
{
    let word = normalize(candidate);

    let outcome = check(&word, root, used, dictionary, options);
    match outcome {
        Ok(()) => {
            tracing::debug!(word = %word, root, "accepted");
            Ok(AcceptedWord::new(word))
        }
        Err(reason) => {
            tracing::debug!(word = %word, root, reason = reason.code(), "rejected");
            Err(reason)
        }
    }
}

fn check<D, S>(
    word: &str,
    root: &str,
    used: &[S],
    dictionary: &D,
    options: &GameOptions,
) -> Result<(), RejectionReason>
where
    D: Dictionary + ?Sized,
    S: AsRef<str>,
{
    if !is_long_enough(word, options.min_word_length) {
        return Err(RejectionReason::TooShort);
    }
    if word == root {
        return Err(RejectionReason::SameAsRoot);
    }
    if !is_original(word, used) {
        return Err(RejectionReason::AlreadyUsed);
    }
    if !is_possible(word, root) {
        return Err(RejectionReason::NotPossible);
    }
    if !dictionary.is_known_word(word, &options.locale) {
        return Err(RejectionReason::NotReal);
    }
    Ok(())
}
