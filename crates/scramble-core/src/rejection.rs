// Rejection reasons produced by the validation pipeline

use serde::Serialize;

/// Why a candidate word was not accepted.
///
/// Variants are listed in the order the validator checks them; the first
/// failing check decides the outcome. A rejection is an expected result of
/// play, not a failure of the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, thiserror::Error)]
#[serde(rename_all = "snake_case")]
pub enum RejectionReason {
    /// The normalized candidate is shorter than the minimum length.
    #[error("word is too short")]
    TooShort,
    /// The candidate is the root word itself.
    #[error("word is the same as the root word")]
    SameAsRoot,
    /// The candidate was already accepted in this session.
    #[error("word was already used")]
    AlreadyUsed,
    /// The candidate cannot be spelled from the root word's letters.
    #[error("word cannot be made from the root word")]
    NotPossible,
    /// The dictionary oracle does not know the candidate.
    #[error("word is not recognized")]
    NotReal,
}

impl RejectionReason {
    /// All reasons, in check order.
    pub const ALL: [RejectionReason; 5] = [
        RejectionReason::TooShort,
        RejectionReason::SameAsRoot,
        RejectionReason::AlreadyUsed,
        RejectionReason::NotPossible,
        RejectionReason::NotReal,
    ];

    /// Stable machine-readable code, used in JSON output.
    pub fn code(self) -> &'static str {
        match self {
            RejectionReason::TooShort => "too_short",
            RejectionReason::SameAsRoot => "same_as_root",
            RejectionReason::AlreadyUsed => "already_used",
            RejectionReason::NotPossible => "not_possible",
            RejectionReason::NotReal => "not_real",
        }
    }

    /// Short user-facing title.
    pub fn title(self) -> &'static str {
        match self {
            RejectionReason::TooShort => "Word is too short",
            RejectionReason::SameAsRoot => "Word is the same",
            RejectionReason::AlreadyUsed => "Word used already",
            RejectionReason::NotPossible => "Word not possible",
            RejectionReason::NotReal => "Word not recognized",
        }
    }

    /// User-facing message. `root` is only interpolated for `NotPossible`.
    pub fn message(self, root: &str) -> String {
        match self {
            RejectionReason::TooShort => "It's got to be longer than that!".to_string(),
            RejectionReason::SameAsRoot => "Nice Try!".to_string(),
            RejectionReason::AlreadyUsed => "Be more original!".to_string(),
            RejectionReason::NotPossible => {
                format!("You can't spell that word from '{root}'!")
            }
            RejectionReason::NotReal => "You can't just make them up, you know!".to_string(),
        }
    }
}
