//! Word validity: dictionary lookup and submitted-word verification.

use std::collections::HashSet;
use tracing::debug;

/// Minimum length of a playable word.
pub const MINIMUM_WORD_LENGTH: usize = 2;

/// Why a submitted word was rejected.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum WordError {
    /// Shorter than [`MINIMUM_WORD_LENGTH`].
    #[display("word '{}' is too short", _0)]
    TooShort(String),
    /// Contains a hyphen.
    #[display("word '{}' contains a hyphen", _0)]
    ContainsHyphen(String),
    /// Contains an apostrophe.
    #[display("word '{}' contains an apostrophe", _0)]
    ContainsApostrophe(String),
    /// Absent from the active dictionary.
    #[display("word '{}' is not in the dictionary", _0)]
    NotInDictionary(String),
}

impl std::error::Error for WordError {}

/// Lookup seam between the engine and whatever holds the word list.
///
/// Injected into [`crate::game::Game`] and the word finder by the caller;
/// the engine never owns a global dictionary registry.
pub trait DictionaryLookup: Send + Sync {
    /// Whether `word` (lowercase) is a playable word.
    fn contains(&self, word: &str) -> bool;
}

/// Hash-set backed dictionary, case-insensitive.
#[derive(Debug, Clone, Default)]
pub struct InMemoryDictionary {
    words: HashSet<String>,
}

impl InMemoryDictionary {
    /// Builds a dictionary from an iterator of words.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            words: words
                .into_iter()
                .map(|word| word.as_ref().to_lowercase())
                .collect(),
        }
    }

    /// Builds a dictionary from newline-separated text, one word per line.
    pub fn from_text(text: &str) -> Self {
        Self::from_words(text.lines().map(str::trim).filter(|line| !line.is_empty()))
    }

    /// Number of words held.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the dictionary holds no words.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl DictionaryLookup for InMemoryDictionary {
    fn contains(&self, word: &str) -> bool {
        self.words.contains(&word.to_lowercase())
    }
}

/// Verifies submitted words against form rules and the dictionary.
///
/// Checks run in order: length, punctuation, lookup. The first failing word
/// aborts verification; callers reject the whole turn, never part of it.
///
/// # Errors
///
/// The [`WordError`] identifying the offending word and why.
pub fn verify_words(words: &[String], dictionary: &dyn DictionaryLookup) -> Result<(), WordError> {
    for word in words {
        if word.chars().count() < MINIMUM_WORD_LENGTH {
            return Err(WordError::TooShort(word.clone()));
        }
        if word.contains('-') {
            return Err(WordError::ContainsHyphen(word.clone()));
        }
        if word.contains('\'') {
            return Err(WordError::ContainsApostrophe(word.clone()));
        }
        if !dictionary.contains(word) {
            debug!(word, "word rejected by dictionary");
            return Err(WordError::NotInDictionary(word.clone()));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dictionary() -> InMemoryDictionary {
        InMemoryDictionary::from_words(["cat", "dog", "toad"])
    }

    #[test]
    fn lookup_is_case_insensitive() {
        let dictionary = dictionary();
        assert!(dictionary.contains("CAT"));
        assert!(dictionary.contains("cat"));
        assert!(!dictionary.contains("bat"));
    }

    #[test]
    fn rejects_short_word() {
        let result = verify_words(&["a".into()], &dictionary());
        assert_eq!(result, Err(WordError::TooShort("a".into())));
    }

    #[test]
    fn rejects_punctuation() {
        let dictionary = dictionary();
        assert_eq!(
            verify_words(&["a-a".into()], &dictionary),
            Err(WordError::ContainsHyphen("a-a".into()))
        );
        assert_eq!(
            verify_words(&["it's".into()], &dictionary),
            Err(WordError::ContainsApostrophe("it's".into()))
        );
    }

    #[test]
    fn rejects_unknown_word_and_accepts_known() {
        let dictionary = dictionary();
        assert_eq!(
            verify_words(&["cat".into(), "xyzzy".into()], &dictionary),
            Err(WordError::NotInDictionary("xyzzy".into()))
        );
        assert_eq!(
            verify_words(&["cat".into(), "TOAD".into()], &dictionary),
            Ok(())
        );
    }
}
