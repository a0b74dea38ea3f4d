// Batch checking used by `scramble-check`: every input line is submitted to
// one session over a fixed root word.

use std::io::{self, BufRead, Write};

use serde::Serialize;
use scramble_game::GameSession;
use scramble_game::dictionary::Dictionary;

/// Result of one submitted line, in the shape printed by `--json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub input: String,
    pub accepted: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub word: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Submit `input` and describe what happened.
pub fn check_line<D: Dictionary + ?Sized>(
    session: &mut GameSession,
    input: &str,
    dictionary: &D,
) -> Report {
    match session.submit(input, dictionary) {
        Ok(word) => Report {
            input: input.to_string(),
            accepted: true,
            word: Some(word.into_string()),
            code: None,
            title: None,
            message: None,
        },
        Err(reason) => Report {
            input: input.to_string(),
            accepted: false,
            word: None,
            code: Some(reason.code()),
            title: Some(reason.title()),
            message: Some(session.rejection_message(reason)),
        },
    }
}

/// Check every non-blank line of `input`.
///
/// Text output prints `A: word` for accepted and `R: word (title)` for
/// rejected words, followed by the score line. JSON output prints one report
/// object per line followed by the session snapshot.
pub fn run<B, W, D>(
    input: B,
    out: &mut W,
    session: &mut GameSession,
    dictionary: &D,
    json: bool,
) -> io::Result<()>
where
    B: BufRead,
    W: Write,
    D: Dictionary + ?Sized,
{
    for line in input.lines() {
        let line = line?;
        let word = line.trim();
        if word.is_empty() {
            continue;
        }

        let report = check_line(session, word, dictionary);
        if json {
            serde_json::to_writer(&mut *out, &report)?;
            writeln!(out)?;
        } else if report.accepted {
            writeln!(out, "A: {}", report.word.as_deref().unwrap_or(word))?;
        } else {
            writeln!(out, "R: {word} ({})", report.title.unwrap_or_default())?;
        }
    }

    if json {
        serde_json::to_writer(&mut *out, &session.snapshot())?;
        writeln!(out)?;
    } else {
        writeln!(out, "{}", session.tally())?;
    }
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use scramble_game::GameOptions;
    use scramble_game::dictionary::WordListDictionary;

    fn check(script: &str, json: bool) -> String {
        let dict = WordListDictionary::new("en", ["silk", "worm"]);
        let mut session = GameSession::with_root("silkworm", GameOptions::default());
        let mut out = Vec::new();
        run(script.as_bytes(), &mut out, &mut session, &dict, json).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn text_output() {
        let out = check("Silk\n\nkilo\nworm\n", false);
        assert_eq!(
            out,
            "A: silk\nR: kilo (Word not recognized)\nA: worm\nTotal: 2  4L: 2  5L: 0  6L: 0  7L: 0\n"
        );
    }

    #[test]
    fn json_output() {
        let out = check("silk\nsil\n", true);
        let lines: Vec<serde_json::Value> = out
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0]["accepted"], true);
        assert_eq!(lines[0]["word"], "silk");
        assert!(lines[0].get("code").is_none());
        assert_eq!(lines[1]["accepted"], false);
        assert_eq!(lines[1]["code"], "too_short");
        assert_eq!(lines[1]["message"], "It's got to be longer than that!");
        assert_eq!(lines[2]["rootWord"], "silkworm");
        assert_eq!(lines[2]["usedWords"], serde_json::json!(["silk"]));
    }
}
