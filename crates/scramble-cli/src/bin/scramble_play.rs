// scramble-play: play Word Scramble in the terminal.
//
// Prints a root word, then reads words from stdin (one per line). Each word is
// accepted or rejected with a reason. Commands start with ':' (see :help).
//
// Usage:
//   scramble-play [OPTIONS]

use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;
use scramble_game::dictionary::CachedDictionary;
use scramble_game::{GameOptions, GameSession};

#[derive(Debug, Parser)]
#[command(name = "scramble-play", version, about = "Play Word Scramble in the terminal")]
struct Args {
    /// Start-word file (one root word per line)
    #[arg(short, long)]
    words: Option<PathBuf>,

    /// Dictionary word list (one word per line)
    #[arg(short, long)]
    dict: Option<PathBuf>,

    /// Locale passed to the dictionary
    #[arg(short, long, default_value = scramble_core::constants::DEFAULT_LOCALE)]
    locale: String,

    /// Shortest accepted word
    #[arg(long, default_value_t = scramble_core::constants::MIN_WORD_LENGTH)]
    min_length: usize,

    /// Seed for root word selection (random if omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let args = Args::parse();
    scramble_cli::init_logging(args.verbose);

    let corpus = scramble_cli::load_corpus(args.words.as_deref())?;
    let dictionary = CachedDictionary::new(scramble_cli::load_dictionary(
        args.dict.as_deref(),
        &args.locale,
    )?);

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let options = GameOptions::default()
        .with_locale(args.locale)
        .with_min_word_length(args.min_length);
    let mut session = GameSession::start(&corpus, &mut rng, options);

    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();
    scramble_cli::play::run(
        stdin.lock(),
        &mut stdout,
        &mut session,
        &corpus,
        &dictionary,
        &mut rng,
    )?;

    tracing::debug!(
        hits = dictionary.hits(),
        misses = dictionary.misses(),
        "dictionary cache"
    );
    Ok(())
}
