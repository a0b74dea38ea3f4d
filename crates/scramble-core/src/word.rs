// Word normalization and letter-pool arithmetic
//
// A "letter" is an extended grapheme cluster: what the player sees as one
// character. "s\u{301}" (s + combining acute) is one letter, not two.

use unicode_segmentation::UnicodeSegmentation;

/// Normalize raw user input into a candidate word.
///
/// Trims surrounding whitespace (including newlines) and lowercases the rest.
/// Inner whitespace is kept, so "silk worm" stays two words and will fail the
/// letter check against any root without a space.
pub fn normalize(input: &str) -> String {
    input.trim().to_lowercase()
}

/// Number of letters (grapheme clusters) in a word.
///
/// Lengths are never counted in bytes or code points.
pub fn letter_count(word: &str) -> usize {
    word.graphemes(true).count()
}

/// The letters of a root word as a consumable multiset.
///
/// Each letter instance in the root can back at most one letter instance in a
/// candidate, so `"sills"` cannot be taken from `"silkworm"` (one `s`).
#[derive(Debug, Clone, PartialEq, Eq)]
struct LetterPool<'a> {
    letters: Vec<&'a str>,
}

impl<'a> LetterPool<'a> {
    /// Build a pool holding every letter of `root`.
    fn new(root: &'a str) -> Self {
        Self {
            letters: root.graphemes(true).collect(),
        }
    }

    /// Remove one occurrence of `letter`. Returns `false` if none is left.
    fn take(&mut self, letter: &str) -> bool {
        match self.letters.iter().position(|&l| l == letter) {
            Some(pos) => {
                self.letters.remove(pos);
                true
            }
            None => false,
        }
    }
}

/// Check whether `candidate` can be spelled from the letters of `root`,
/// using each root letter at most once.
pub fn can_form(candidate: &str, root: &str) -> bool {
    let mut pool = LetterPool::new(root);
    candidate.graphemes(true).all(|letter| pool.take(letter))
}
