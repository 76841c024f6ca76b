use crate::error::{Error, Result};
use crate::tokenizer::{is_valid_term, tokenize};
use std::collections::BTreeSet;

/// Words that are never indexed.
#[derive(Debug, Clone, Default)]
pub struct StopWords {
    words: BTreeSet<String>,
}

impl StopWords {
    /// Build from a collection of words. Empty entries are dropped and duplicates merged;
    /// any invalid term (control character, lone `-`, `--` prefix) rejects the whole set.
    pub fn new<I, S>(words: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = BTreeSet::new();
        for word in words {
            let word = word.as_ref();
            if word.is_empty() {
                continue;
            }
            if !is_valid_term(word) {
                return Err(Error::InvalidConfiguration { reason: format!("incorrect stop word {word:?}") });
            }
            set.insert(word.to_string());
        }
        Ok(Self { words: set })
    }

    /// Build from space-separated text.
    pub fn from_text(text: &str) -> Result<Self> {
        Self::new(tokenize(text))
    }

    pub fn is_stop_word(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Drop stop words, keeping the order of the rest.
    pub fn filter<'a, I>(&self, tokens: I) -> Vec<&'a str>
    where
        I: IntoIterator<Item = &'a str>,
    {
        tokens.into_iter().filter(|t| !self.is_stop_word(t)).collect()
    }

    pub fn len(&self) -> usize { self.words.len() }
    pub fn is_empty(&self) -> bool { self.words.is_empty() }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }
}
