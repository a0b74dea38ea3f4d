// Dictionary oracle: decides whether a candidate is a real word

pub mod cache;
pub mod word_list;

pub use cache::CachedDictionary;
pub use word_list::WordListDictionary;

/// Trait for dictionary oracles.
///
/// An oracle answers a single question: is `word` a known word in `locale`?
/// The word passed in is already normalized (trimmed, lowercase). The engine
/// treats the oracle as a synchronous black box and only consults it after
/// every cheaper check has passed.
pub trait Dictionary {
    fn is_known_word(&self, word: &str, locale: &str) -> bool;
}

impl<D: Dictionary + ?Sized> Dictionary for &D {
    fn is_known_word(&self, word: &str, locale: &str) -> bool {
        (**self).is_known_word(word, locale)
    }
}

impl<D: Dictionary + ?Sized> Dictionary for Box<D> {
    fn is_known_word(&self, word: &str, locale: &str) -> bool {
        (**self).is_known_word(word, locale)
    }
}
