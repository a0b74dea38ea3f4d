// scramble-cli: shared utilities for the command-line tools.

pub mod check;
pub mod play;

use std::path::{Path, PathBuf};

use anyhow::Context;
use scramble_game::RootWordCorpus;
use scramble_game::dictionary::WordListDictionary;
use tracing_subscriber::EnvFilter;

/// Environment variable naming a start-word file.
pub const WORDS_PATH_ENV: &str = "SCRAMBLE_WORDS_PATH";

/// Environment variable naming a dictionary word list.
pub const DICT_PATH_ENV: &str = "SCRAMBLE_DICT_PATH";

/// Start-word file name looked up in the search directories.
const START_WORDS_FILE: &str = "start.txt";

/// Dictionary file name looked up in the working directory.
const LOCAL_DICT_FILE: &str = "words.txt";

/// Per-user configuration directory, relative to `$HOME`.
const USER_DIR: &str = ".wordscramble";

/// Install the stderr log subscriber.
///
/// `RUST_LOG` wins if set; otherwise the level is `warn`, raised to `info`,
/// `debug` and `trace` by each `-v`.
pub fn init_logging(verbosity: u8) {
    let default_level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    // A second init (e.g. from tests) is harmless.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Load the start-word corpus.
///
/// Search order:
/// 1. `path` argument (if provided; an unreadable explicit path is an error)
/// 2. `SCRAMBLE_WORDS_PATH` environment variable
/// 3. `~/.wordscramble/start.txt`
/// 4. `start.txt` in the current working directory
///
/// Falls back to the built-in list when nothing is found.
pub fn load_corpus(path: Option<&Path>) -> anyhow::Result<RootWordCorpus> {
    if let Some(p) = path {
        return RootWordCorpus::load(p).context("could not load the requested start words");
    }

    for candidate in corpus_search_paths() {
        if candidate.is_file() {
            return Ok(RootWordCorpus::load_or_builtin(&candidate));
        }
    }

    tracing::info!("no start word file found, using built-in list");
    Ok(RootWordCorpus::builtin())
}

/// Load the dictionary oracle's word list.
///
/// Search order:
/// 1. `path` argument (if provided)
/// 2. `SCRAMBLE_DICT_PATH` environment variable
/// 3. `/usr/share/dict/words`, `/usr/dict/words`
/// 4. `words.txt` in the current working directory
pub fn load_dictionary(path: Option<&Path>, locale: &str) -> anyhow::Result<WordListDictionary> {
    if let Some(p) = path {
        return WordListDictionary::load(locale, p)
            .context("could not load the requested dictionary");
    }

    let search_paths = dictionary_search_paths();
    for candidate in &search_paths {
        if candidate.is_file() {
            return WordListDictionary::load(locale, candidate)
                .with_context(|| format!("could not load dictionary {}", candidate.display()));
        }
    }

    anyhow::bail!(
        "could not find a dictionary in any of the search paths:\n{}",
        search_paths
            .iter()
            .map(|p| format!("  - {}", p.display()))
            .collect::<Vec<_>>()
            .join("\n")
    )
}

/// Directories and files searched for start words, in order.
fn corpus_search_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();

    if let Ok(env_path) = std::env::var(WORDS_PATH_ENV) {
        paths.push(PathBuf::from(env_path));
    }

    if let Some(home) = home_dir() {
        paths.push(home.join(USER_DIR).join(START_WORDS_FILE));
    }

    if let Ok(cwd) = std::env::current_dir() {
        paths.push(cwd.join(START_WORDS_FILE));
    }

    paths
}

/// Files searched for a dictionary word list, in order.
fn dictionary_search_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();

    if let Ok(env_path) = std::env::var(DICT_PATH_ENV) {
        paths.push(PathBuf::from(env_path));
    }

    paths.push(PathBuf::from("/usr/share/dict/words"));
    paths.push(PathBuf::from("/usr/dict/words"));

    if let Ok(cwd) = std::env::current_dir() {
        paths.push(cwd.join(LOCAL_DICT_FILE));
    }

    paths
}

fn home_dir() -> Option<PathBuf> {
    std::env::var("HOME").ok().map(PathBuf::from)
}
