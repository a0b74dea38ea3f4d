// Interactive line-based game loop used by `scramble-play`.
//
// Each input line is either a candidate word or a `:command`. Output is plain
// text so the loop can be driven from a terminal or a pipe.

use std::io::{self, BufRead, Write};

use rand::Rng;
use scramble_core::word::letter_count;
use scramble_game::dictionary::Dictionary;
use scramble_game::{GameSession, RootWordCorpus};

/// One parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Submit a candidate word.
    Submit(String),
    /// Start a new game with a fresh root word.
    NewGame,
    /// Print the score tally.
    Score,
    /// List accepted words, most recent first.
    Words,
    Help,
    Quit,
    /// A `:command` that is not recognized.
    Unknown(String),
}

/// Parse an input line. Blank lines yield `None`.
pub fn parse_line(line: &str) -> Option<Command> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return None;
    }
    let Some(cmd) = trimmed.strip_prefix(':') else {
        return Some(Command::Submit(trimmed.to_string()));
    };
    Some(match cmd.to_lowercase().as_str() {
        "new" | "n" => Command::NewGame,
        "score" | "s" => Command::Score,
        "words" | "w" => Command::Words,
        "help" | "h" | "?" => Command::Help,
        "quit" | "q" | "exit" => Command::Quit,
        _ => Command::Unknown(trimmed.to_string()),
    })
}

const HELP: &str = "\
Type a word made from the letters of the root word and press enter.
Commands:
  :new     start a new game
  :score   show the score
  :words   list your words
  :help    show this help
  :quit    exit";

/// Drive a game from `input` until end of input or `:quit`.
pub fn run<B, W, D, R>(
    input: B,
    out: &mut W,
    session: &mut GameSession,
    corpus: &RootWordCorpus,
    dictionary: &D,
    rng: &mut R,
) -> io::Result<()>
where
    B: BufRead,
    W: Write,
    D: Dictionary + ?Sized,
    R: Rng + ?Sized,
{
    writeln!(out, "Root word: {}", session.root())?;
    out.flush()?;

    for line in input.lines() {
        let line = line?;
        let Some(command) = parse_line(&line) else {
            continue;
        };

        match command {
            Command::Submit(candidate) => match session.submit(&candidate, dictionary) {
                Ok(word) => writeln!(out, "+ {} ({} letters)", word, word.letter_count())?,
                Err(reason) => writeln!(
                    out,
                    "! {}: {}",
                    reason.title(),
                    session.rejection_message(reason)
                )?,
            },
            Command::NewGame => {
                session.start_game(corpus, rng);
                writeln!(out, "Root word: {}", session.root())?;
            }
            Command::Score => writeln!(out, "{}", session.tally())?,
            Command::Words => {
                if session.used_words().is_empty() {
                    writeln!(out, "(no words yet)")?;
                }
                for word in session.used_words() {
                    writeln!(out, "  {word} ({})", letter_count(word))?;
                }
            }
            Command::Help => writeln!(out, "{HELP}")?,
            Command::Quit => break,
            Command::Unknown(cmd) => writeln!(out, "unknown command {cmd} (try :help)")?,
        }
        out.flush()?;
    }

    writeln!(out, "{}", session.tally())?;
    out.flush()
}
