// scramble-check: check a batch of words against one root word.
//
// Reads words from stdin (one per line) and submits each to a single game
// over the given root. Output format:
//   A: word            (accepted)
//   R: word (reason)   (rejected)
// followed by the score line. With --json, one JSON object per line and a
// final session snapshot.
//
// Usage:
//   scramble-check --root WORD [OPTIONS]

use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use scramble_game::{GameOptions, GameSession};

#[derive(Debug, Parser)]
#[command(name = "scramble-check", version, about = "Check words against a root word")]
struct Args {
    /// Root word to derive words from
    #[arg(short, long)]
    root: String,

    /// Dictionary word list (one word per line)
    #[arg(short, long)]
    dict: Option<PathBuf>,

    /// Locale passed to the dictionary
    #[arg(short, long, default_value = scramble_core::constants::DEFAULT_LOCALE)]
    locale: String,

    /// Shortest accepted word
    #[arg(long, default_value_t = scramble_core::constants::MIN_WORD_LENGTH)]
    min_length: usize,

    /// Print JSON lines instead of text
    #[arg(long)]
    json: bool,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let args = Args::parse();
    scramble_cli::init_logging(args.verbose);

    let dictionary = scramble_cli::load_dictionary(args.dict.as_deref(), &args.locale)?;
    let options = GameOptions::default()
        .with_locale(args.locale)
        .with_min_word_length(args.min_length);
    let mut session = GameSession::with_root(&args.root, options);

    let stdin = io::stdin();
    let mut stdout = io::BufWriter::new(io::stdout().lock());
    scramble_cli::check::run(stdin.lock(), &mut stdout, &mut session, &dictionary, args.json)?;
    Ok(())
}
