//! Tokenization shared by the vectorizers

use crate::stopwords::is_stop_word;

/// Lowercase a text and split it into word tokens.
///
/// A token is a maximal run of alphanumeric or underscore characters of
/// at least two characters. Stop words are excluded when `drop_stop_words`
/// is set.
pub fn tokenize(text: &str, drop_stop_words: bool) -> Vec<String> {
    let lowered = text.to_lowercase();
    lowered
        .split(|c: char| !c.is_alphanumeric() && c != '_')
        .filter(|token| token.chars().count() >= 2)
        .filter(|token| !drop_stop_words || !is_stop_word(token))
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_punctuation_and_lowercases() {
        let tokens = tokenize("Rust 1.75 is GREAT, really!", false);
        assert_eq!(tokens, vec!["rust", "75", "is", "great", "really"]);
    }

    #[test]
    fn single_character_tokens_are_dropped() {
        let tokens = tokenize("a b cd", false);
        assert_eq!(tokens, vec!["cd"]);
    }

    #[test]
    fn stop_words_are_excluded_when_requested() {
        let tokens = tokenize("the cat and the hat", true);
        assert_eq!(tokens, vec!["cat", "hat"]);
        let kept = tokenize("the cat and the hat", false);
        assert_eq!(kept, vec!["the", "cat", "and", "the", "hat"]);
    }

    #[test]
    fn underscores_join_tokens() {
        let tokens = tokenize("snake_case stays", false);
        assert_eq!(tokens, vec!["snake_case", "stays"]);
    }
}
