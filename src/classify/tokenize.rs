// Text normalization: markup and punctuation out, lowercase tokens in.
//
// Order and duplicates are preserved. N-grams are built from adjacent tokens,
// and every occurrence of a term counts toward its category's score.

use std::collections::HashSet;

use anyhow::{Context, Result};
use regex_lite::Regex;
use stop_words::{get, LANGUAGE};

/// Turns article text into a sequence of scoring tokens.
#[derive(Debug, Clone)]
pub struct Tokenizer {
    tags: Regex,
    stop_words: HashSet<String>,
}

impl Tokenizer {
    /// Tokenizer with NLTK's English stop word list.
    pub fn new() -> Result<Self> {
        Self::with_stopwords(get(LANGUAGE::English))
    }

    /// Tokenizer with a caller-supplied stop word list.
    pub fn with_stopwords<I, S>(stop_words: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Ok(Self {
            // Non-greedy, so `<b>a</b> <i>b</i>` keeps the text between tags.
            tags: Regex::new(r"<.*?>").context("Failed to compile tag pattern")?,
            stop_words: stop_words.into_iter().map(Into::into).collect(),
        })
    }

    /// Tokenize `text`. Absent text gives no tokens.
    pub fn tokenize(&self, text: Option<&str>) -> Vec<String> {
        let Some(text) = text else {
            return Vec::new();
        };

        // Only ASCII letters survive, but any Unicode whitespace (a decoded
        // &nbsp; included) still separates words.
        let text: String = self
            .tags
            .replace_all(text, "")
            .chars()
            .filter(|c| c.is_ascii_alphabetic() || c.is_whitespace())
            .collect();
        let text = text.to_lowercase();

        text.split_whitespace()
            .filter(|token| !self.stop_words.contains(*token))
            .map(str::to_string)
            .collect()
    }

    pub fn is_stop_word(&self, word: &str) -> bool {
        self.stop_words.contains(word)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokenizer() -> Tokenizer {
        Tokenizer::with_stopwords(["a", "the", "of", "in", "and"]).unwrap()
    }

    #[test]
    fn test_absent_text_gives_no_tokens() {
        assert!(tokenizer().tokenize(None).is_empty());
    }

    #[test]
    fn test_strips_tags_punctuation_and_numbers() {
        let tokens = tokenizer().tokenize(Some("<p>Floods hit 3 towns!</p> <b>Rescue</b> ongoing."));
        assert_eq!(tokens, vec!["floods", "hit", "towns", "rescue", "ongoing"]);
    }

    #[test]
    fn test_tag_removal_is_non_greedy() {
        let tokens = tokenizer().tokenize(Some("<a href='x'>Riot</a> erupts <i>downtown</i>"));
        assert_eq!(tokens, vec!["riot", "erupts", "downtown"]);
    }

    #[test]
    fn test_removes_stop_words_and_keeps_duplicates() {
        let tokens = tokenizer().tokenize(Some("The flood and the flood of a city"));
        assert_eq!(tokens, vec!["flood", "flood", "city"]);
    }

    #[test]
    fn test_punctuation_inside_words_joins_them() {
        // Apostrophes and hyphens are dropped, not turned into spaces.
        let tokens = tokenizer().tokenize(Some("Don't self-destruct"));
        assert_eq!(tokens, vec!["dont", "selfdestruct"]);
    }

    #[test]
    fn test_no_break_space_separates_words() {
        let tokens = tokenizer().tokenize(Some("flood\u{a0}warning\u{2003}issued"));
        assert_eq!(tokens, vec!["flood", "warning", "issued"]);
    }

    #[test]
    fn test_non_ascii_letters_are_dropped() {
        let tokens = tokenizer().tokenize(Some("café naïve"));
        assert_eq!(tokens, vec!["caf", "nave"]);
    }

    #[test]
    fn test_default_list_removes_common_words() {
        let tokenizer = Tokenizer::new().unwrap();
        assert!(tokenizer.is_stop_word("the"));
        let tokens = tokenizer.tokenize(Some("the the the"));
        assert!(tokens.is_empty());
    }

    #[test]
    fn test_default_list_keeps_content_words() {
        let tokenizer = Tokenizer::new().unwrap();
        for word in ["good", "news", "fire", "help", "home", "found", "great", "best", "world"] {
            assert!(!tokenizer.is_stop_word(word), "{word} should not be a stop word");
        }
        assert_eq!(
            tokenizer.tokenize(Some("Good news for the town")),
            vec!["good", "news", "town"]
        );
    }
}
