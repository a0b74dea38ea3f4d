// Criterion benchmarks for scramble-game.
//
// Uses the built-in start words as roots and a synthetic dictionary built
// from every four-letter window of those roots, so no external files are
// needed.
//
// Run:
//   cargo bench -p scramble-game

use criterion::{Criterion, criterion_group, criterion_main};

use scramble_game::dictionary::{CachedDictionary, WordListDictionary};
use scramble_game::{GameOptions, GameSession, RootWordCorpus, validate};

fn windows(words: &[String]) -> Vec<String> {
    let mut out = Vec::new();
    for word in words {
        let chars: Vec<char> = word.chars().collect();
        for w in chars.windows(4) {
            out.push(w.iter().collect());
        }
    }
    out
}

/// Validate every window of every root against its own root.
fn bench_validate(c: &mut Criterion) {
    let corpus = RootWordCorpus::builtin();
    let candidates = windows(corpus.words());
    let dict = WordListDictionary::new("en", &candidates);
    let options = GameOptions::default();
    let used: Vec<String> = Vec::new();

    c.bench_function("validate_builtin_windows", |b| {
        b.iter(|| {
            for root in corpus.words() {
                for candidate in &candidates {
                    std::hint::black_box(validate(candidate, root, &used, &dict, &options).is_ok());
                }
            }
        });
    });
}

/// Play a full session per root, with and without a lookup cache.
fn bench_session(c: &mut Criterion) {
    let corpus = RootWordCorpus::builtin();
    let candidates = windows(corpus.words());
    let dict = WordListDictionary::new("en", &candidates);
    let cached = CachedDictionary::new(dict.clone());

    c.bench_function("session_plain", |b| {
        b.iter(|| {
            for root in corpus.words() {
                let mut session = GameSession::with_root(root, GameOptions::default());
                for candidate in &candidates {
                    let _ = std::hint::black_box(session.submit(candidate, &dict));
                }
            }
        });
    });

    c.bench_function("session_cached", |b| {
        b.iter(|| {
            for root in corpus.words() {
                let mut session = GameSession::with_root(root, GameOptions::default());
                for candidate in &candidates {
                    let _ = std::hint::black_box(session.submit(candidate, &cached));
                }
            }
        });
    });
}

criterion_group!(benches, bench_validate, bench_session);
criterion_main!(benches);
