// Engine failures (I/O and malformed resources). Rejected candidates are
// not errors; see `scramble_core::RejectionReason`.

use std::path::PathBuf;

/// Error type for loading game resources.
#[derive(Debug, thiserror::Error)]
pub enum GameError {
    /// The start-word file could not be read.
    #[error("failed to read start words from {path}: {source}")]
    CorpusRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The dictionary file could not be read.
    #[error("failed to read dictionary from {path}: {source}")]
    DictionaryRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The dictionary text contained no words.
    #[error("dictionary contains no words")]
    EmptyDictionary,
}
