//! Property tests for the validation pipeline and session bookkeeping.

use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

use scramble_game::dictionary::{Dictionary, WordListDictionary};
use scramble_game::validator::is_possible;
use scramble_game::{
    GameOptions, GameSession, RejectionReason, RootWordCorpus, ScoreTally, validate,
};

/// Knows every word; isolates the non-dictionary checks.
struct Everything;

impl Dictionary for Everything {
    fn is_known_word(&self, _word: &str, _locale: &str) -> bool {
        true
    }
}

/// Knows no word.
struct Nothing;

impl Dictionary for Nothing {
    fn is_known_word(&self, _word: &str, _locale: &str) -> bool {
        false
    }
}

const NO_HISTORY: &[&str] = &[];

proptest! {
    #[test]
    fn short_candidates_are_too_short(word in "[a-z]{0,3}", root in "[a-z]{4,10}") {
        let got = validate(&word, &root, NO_HISTORY, &Everything, &GameOptions::default());
        prop_assert_eq!(got, Err(RejectionReason::TooShort));
    }

    #[test]
    fn padding_and_case_do_not_matter(word in "[a-z]{4,8}", pad in "[ \t\n]{0,3}") {
        let root = format!("{word}xyz");
        let raw = format!("{pad}{}{pad}", word.to_uppercase());
        let got = validate(&raw, &root, NO_HISTORY, &Everything, &GameOptions::default());
        prop_assert_eq!(got.map(|a| a.into_string()), Ok(word));
    }

    #[test]
    fn root_is_same_as_root(root in "[a-z]{4,10}") {
        let got = validate(&root, &root, NO_HISTORY, &Nothing, &GameOptions::default());
        prop_assert_eq!(got, Err(RejectionReason::SameAsRoot));
    }

    #[test]
    fn used_words_are_already_used(word in "[a-z]{4,8}", root in "[a-z]{9,12}") {
        // regardless of whether the word is possible or real
        let used = vec![word.clone()];
        let got = validate(&word, &root, &used, &Nothing, &GameOptions::default());
        prop_assert_eq!(got, Err(RejectionReason::AlreadyUsed));
    }

    #[test]
    fn any_permutation_of_a_subset_is_possible(
        root in "[a-z]{4,10}",
        keep in proptest::collection::vec(any::<bool>(), 10),
        seed in any::<u64>(),
    ) {
        use rand::seq::SliceRandom;
        let mut letters: Vec<char> = root
            .chars()
            .zip(keep.iter())
            .filter_map(|(c, &k)| k.then_some(c))
            .collect();
        letters.shuffle(&mut StdRng::seed_from_u64(seed));
        let candidate: String = letters.into_iter().collect();
        prop_assert!(is_possible(&candidate, &root));
    }

    #[test]
    fn an_extra_letter_is_never_possible(root in "[a-z]{4,10}") {
        let candidate = format!("{root}{}", root.chars().next().unwrap_or('a'));
        prop_assert!(!is_possible(&candidate, &root));
    }

    #[test]
    fn rejections_never_mutate(inputs in proptest::collection::vec("[a-z ]{0,9}", 1..20)) {
        let dict = WordListDictionary::new("en", ["silk", "worm", "milk", "works", "kilo"]);
        let mut session = GameSession::with_root("silkworm", GameOptions::default());
        for input in &inputs {
            let before = session.clone();
            match session.submit(input, &dict) {
                Ok(accepted) => {
                    prop_assert_eq!(session.used_words()[0].as_str(), accepted.as_str());
                    prop_assert_eq!(session.tally().total(), before.tally().total() + 1);
                }
                Err(_) => prop_assert_eq!(&session, &before),
            }
        }
        prop_assert_eq!(*session.tally(), ScoreTally::from_words(session.used_words()));
    }
}

#[test]
fn silkworm_silk_and_sills() {
    assert!(is_possible("silk", "silkworm"));
    assert_eq!(
        validate("sills", "silkworm", NO_HISTORY, &Everything, &GameOptions::default()),
        Err(RejectionReason::NotPossible)
    );
}

#[test]
fn listen_silent_goes_to_front() {
    let dict = WordListDictionary::new("en", ["silent", "lens"]);
    let mut session = GameSession::with_root("listen", GameOptions::default());
    session.submit("lens", &dict).unwrap();
    let accepted = session.submit("silent", &dict).unwrap();
    assert_eq!(accepted.as_str(), "silent");
    assert_eq!(session.used_words(), &["silent", "lens"]);
}

#[test]
fn lengths_four_five_six_fill_one_bucket_each() {
    let dict = WordListDictionary::new("en", ["lens", "inlet", "silent"]);
    let mut session = GameSession::with_root("listens", GameOptions::default());
    for w in ["lens", "inlet", "silent"] {
        session.submit(w, &dict).unwrap();
    }
    let tally = session.tally();
    assert_eq!(tally.total(), 3);
    assert_eq!(tally.count_for_length(4), 1);
    assert_eq!(tally.count_for_length(5), 1);
    assert_eq!(tally.count_for_length(6), 1);
    assert_eq!(tally.count_for_length(7), 0);
}

#[test]
fn start_game_twice_fully_resets() {
    let corpus = RootWordCorpus::from_words(["silkworm", "listener"]);
    let dict = WordListDictionary::new("en", ["silk", "list", "worm", "tile"]);
    let mut rng = StdRng::seed_from_u64(9);
    let mut session = GameSession::start(&corpus, &mut rng, GameOptions::default());

    for _ in 0..2 {
        for w in ["silk", "list", "worm", "tile"] {
            let _ = session.submit(w, &dict);
        }
        assert!(session.tally().total() > 0);
        session.start_game(&corpus, &mut rng);
        assert!(session.used_words().is_empty());
        assert_eq!(*session.tally(), ScoreTally::new());
    }
}
