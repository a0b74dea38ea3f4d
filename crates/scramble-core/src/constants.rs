// Game-wide constants: length limits, tally buckets, defaults

/// Shortest candidate length (in characters) that can be accepted.
///
/// Candidates of three characters or fewer are rejected as too short.
pub const MIN_WORD_LENGTH: usize = 4;

/// Shortest word length that has its own score bucket.
pub const MIN_BUCKET_LENGTH: usize = 4;

/// Longest word length that has its own score bucket.
pub const MAX_BUCKET_LENGTH: usize = 7;

/// Number of per-length score buckets (lengths 4, 5, 6 and 7).
pub const BUCKET_COUNT: usize = MAX_BUCKET_LENGTH - MIN_BUCKET_LENGTH + 1;

/// Root word used when no start-word corpus is available.
pub const FALLBACK_ROOT_WORD: &str = "silkworm";

/// Locale passed to the dictionary oracle unless configured otherwise.
pub const DEFAULT_LOCALE: &str = "en";
