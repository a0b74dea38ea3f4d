// Score tally: accepted-word counts bucketed by length

use serde::{Deserialize, Serialize};

use crate::constants::{BUCKET_COUNT, MAX_BUCKET_LENGTH, MIN_BUCKET_LENGTH};
use crate::word::letter_count;

/// Counts of accepted words.
///
/// The tally is a projection of the session's used-word list: `total` counts
/// every accepted word, and words of 4 to 7 letters are also counted in their
/// own bucket. Longer or shorter words only move `total`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreTally {
    total: usize,
    by_length: [usize; BUCKET_COUNT],
}

impl ScoreTally {
    /// An empty tally.
    pub fn new() -> Self {
        Self::default()
    }

    /// Recompute a tally from a list of accepted words.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut tally = Self::new();
        for word in words {
            tally.record(letter_count(word.as_ref()));
        }
        tally
    }

    /// Count one accepted word of `len` letters.
    pub fn record(&mut self, len: usize) {
        self.total += 1;
        if let Some(slot) = bucket_index(len) {
            self.by_length[slot] += 1;
        }
    }

    /// Zero every counter.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Total number of accepted words.
    pub fn total(&self) -> usize {
        self.total
    }

    /// Number of accepted words of exactly `len` letters.
    ///
    /// Returns 0 for lengths without a bucket.
    pub fn count_for_length(&self, len: usize) -> usize {
        bucket_index(len).map_or(0, |slot| self.by_length[slot])
    }

    /// `(length, count)` pairs for every bucket, shortest first.
    pub fn buckets(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.by_length
            .iter()
            .enumerate()
            .map(|(i, &count)| (MIN_BUCKET_LENGTH + i, count))
    }
}

fn bucket_index(len: usize) -> Option<usize> {
    (MIN_BUCKET_LENGTH..=MAX_BUCKET_LENGTH)
        .contains(&len)
        .then(|| len - MIN_BUCKET_LENGTH)
}

impl std::fmt::Display for ScoreTally {
    /// Renders as `Total: 3  4L: 1  5L: 1  6L: 1  7L: 0`.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Total: {}", self.total)?;
        for (len, count) in self.buckets() {
            write!(f, "  {len}L: {count}")?;
        }
        Ok(())
    }
}
