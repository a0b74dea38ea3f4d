// scramble-game: the Word Scramble engine.
//
// A `GameSession` owns the root word, the accepted-word history and the score
// tally. Candidates go through the `validator` pipeline, which consults a
// `Dictionary` oracle for the final real-word check. Root words come from a
// `RootWordCorpus`.

pub mod corpus;
pub mod dictionary;
pub mod error;
pub mod options;
pub mod session;
pub mod validator;

pub use corpus::RootWordCorpus;
pub use dictionary::Dictionary;
pub use error::GameError;
pub use options::GameOptions;
pub use session::{GameSession, SessionSnapshot};
pub use validator::{AcceptedWord, validate};

pub use scramble_core::{RejectionReason, ScoreTally};
