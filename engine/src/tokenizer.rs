/// Split text into words on the ASCII space character.
///
/// Runs of spaces never produce empty words. Tabs, newlines and other whitespace
/// are kept inside words; only `' '` separates.
pub fn tokenize(text: &str) -> Vec<&str> {
    text.split(' ').filter(|word| !word.is_empty()).collect()
}

/// A word is valid when it holds no control characters (anything below `' '`).
pub fn is_valid_word(word: &str) -> bool {
    !word.chars().any(|c| c < ' ')
}

/// A term is a valid word that is neither a lone `-` nor starts with `--`.
///
/// Shared by stop words and query tokens (checked before the minus prefix is stripped).
pub fn is_valid_term(word: &str) -> bool {
    !word.is_empty() && word != "-" && !word.starts_with("--") && is_valid_word(word)
}
