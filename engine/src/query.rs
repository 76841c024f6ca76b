use crate::error::{Error, Result};
use crate::tokenizer::{is_valid_term, tokenize};
use std::collections::BTreeSet;
use std::str::FromStr;

/// A parsed query: words that score and words that disqualify.
///
/// Both sets are ordered, so iteration is lexicographic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    pub plus_words: BTreeSet<String>,
    pub minus_words: BTreeSet<String>,
}

impl Query {
    /// Parse raw query text. A leading `-` makes a minus word; the dash is dropped.
    ///
    /// Fails on a lone `-`, a double dash prefix, or a control character.
    pub fn parse(text: &str) -> Result<Self> {
        let mut query = Query::default();
        for token in tokenize(text) {
            let (word, is_minus) = parse_query_word(token)?;
            if is_minus {
                query.minus_words.insert(word.to_string());
            } else {
                query.plus_words.insert(word.to_string());
            }
        }
        Ok(query)
    }

    pub fn is_empty(&self) -> bool {
        self.plus_words.is_empty() && self.minus_words.is_empty()
    }
}

impl FromStr for Query {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

fn parse_query_word(token: &str) -> Result<(&str, bool)> {
    if !is_valid_term(token) {
        return Err(Error::MalformedQuery { token: token.to_string() });
    }
    Ok(match token.strip_prefix('-') {
        Some(rest) => (rest, true),
        None => (token, false),
    })
}
