// WASM bindings for the Word Scramble engine.
//
// Provides a `WasmGame` class exported via wasm-bindgen. The page owns
// rendering; this binding only hands over display data (root word, used
// words, score) and accepts candidates and new-game requests. Structured
// results are serialized to JavaScript values using serde-wasm-bindgen.
//
// Usage from JavaScript:
//
//   const game = new WasmGame(startWordsText, dictionaryText, seed);
//   game.rootWord();          // => "silkworm"
//   game.submit("Silk");      // => { accepted: true, word: "silk", ... }
//   game.submit("sills");     // => { accepted: false, code: "not_possible", title, message }
//   game.usedWords();         // => ["silk"]
//   game.score();             // => { total: 1, byLength: [1, 0, 0, 0] }
//   game.newGame();

use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::Serialize;
use wasm_bindgen::prelude::*;

use scramble_game::dictionary::WordListDictionary;
use scramble_game::{GameError, GameOptions, GameSession, RootWordCorpus};

// ============================================================================
// Serde-serializable DTO types for JS interop
// ============================================================================

/// Outcome of one submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
struct JsSubmission {
    accepted: bool,
    word: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    code: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    title: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
}

/// Score tally as the page displays it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
struct JsScore {
    total: usize,
    by_length: Vec<usize>,
}

fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsError> {
    serde_wasm_bindgen::to_value(value).map_err(|e| JsError::new(&e.to_string()))
}

fn game_error_to_js(e: GameError) -> JsError {
    JsError::new(&e.to_string())
}

// ============================================================================
// Game state (plain Rust, independent of wasm-bindgen)
// ============================================================================

struct Game {
    session: GameSession,
    corpus: RootWordCorpus,
    dictionary: WordListDictionary,
    rng: StdRng,
}

impl Game {
    fn new(
        start_words: &str,
        dictionary_words: &str,
        seed: u64,
        locale: &str,
    ) -> Result<Self, GameError> {
        let mut corpus = RootWordCorpus::from_text(start_words);
        if corpus.is_empty() {
            corpus = RootWordCorpus::builtin();
        }
        let dictionary = WordListDictionary::from_text(locale, dictionary_words)?;
        let mut rng = StdRng::seed_from_u64(seed);
        let options = GameOptions::default().with_locale(locale);
        let session = GameSession::start(&corpus, &mut rng, options);
        Ok(Self {
            session,
            corpus,
            dictionary,
            rng,
        })
    }

    fn submit(&mut self, candidate: &str) -> JsSubmission {
        match self.session.submit(candidate, &self.dictionary) {
            Ok(word) => JsSubmission {
                accepted: true,
                word: word.into_string(),
                code: None,
                title: None,
                message: None,
            },
            Err(reason) => JsSubmission {
                accepted: false,
                word: scramble_core::word::normalize(candidate),
                code: Some(reason.code()),
                title: Some(reason.title()),
                message: Some(self.session.rejection_message(reason)),
            },
        }
    }

    fn score(&self) -> JsScore {
        let tally = self.session.tally();
        JsScore {
            total: tally.total(),
            by_length: tally.buckets().map(|(_, count)| count).collect(),
        }
    }

    fn new_game(&mut self) {
        self.session.start_game(&self.corpus, &mut self.rng);
    }
}

// ============================================================================
// WasmGame
// ============================================================================

/// Word Scramble game for WebAssembly.
#[wasm_bindgen]
pub struct WasmGame {
    game: Game,
}

#[wasm_bindgen]
impl WasmGame {
    /// Create a game.
    ///
    /// - `start_words`: newline-delimited root words (built-in list if blank)
    /// - `dictionary_words`: newline-delimited known words (required)
    /// - `seed`: seed for root word selection
    /// - `locale`: dictionary locale, defaults to "en"
    #[wasm_bindgen(constructor)]
    pub fn new(
        start_words: &str,
        dictionary_words: &str,
        seed: u64,
        locale: Option<String>,
    ) -> Result<WasmGame, JsError> {
        let locale = locale.unwrap_or_else(|| scramble_core::constants::DEFAULT_LOCALE.to_string());
        let game = Game::new(start_words, dictionary_words, seed, &locale)
            .map_err(game_error_to_js)?;
        Ok(WasmGame { game })
    }

    /// The current root word.
    #[wasm_bindgen(js_name = "rootWord")]
    pub fn root_word(&self) -> String {
        self.game.session.root().to_string()
    }

    /// Accepted words, most recent first.
    #[wasm_bindgen(js_name = "usedWords")]
    pub fn used_words(&self) -> Vec<String> {
        self.game.session.used_words().to_vec()
    }

    /// Score tally: `{ total, byLength }` where `byLength` covers 4 to 7
    /// letters.
    pub fn score(&self) -> Result<JsValue, JsError> {
        to_js(&self.game.score())
    }

    /// Submit a candidate word.
    ///
    /// Returns `{ accepted, word, code?, title?, message? }`.
    pub fn submit(&mut self, candidate: &str) -> Result<JsValue, JsError> {
        to_js(&self.game.submit(candidate))
    }

    /// Start a new game with a fresh root word.
    #[wasm_bindgen(js_name = "newGame")]
    pub fn new_game(&mut self) {
        self.game.new_game();
    }
}
