//! Sentence splitting on sentence-final punctuation.

use once_cell::sync::Lazy;
use regex::Regex;

static SENTENCE_END: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[.!?]\s+").expect("sentence boundary pattern is valid"));

/// Split text after `.`, `!` or `?` when the punctuation is followed by
/// whitespace. Segments are trimmed and empty ones dropped.
pub fn split_sentences(text: &str) -> Vec<String> {
    let mut sentences = Vec::new();
    let mut start = 0;

    for boundary in SENTENCE_END.find_iter(text) {
        let end = boundary.start() + 1;
        sentences.push(&text[start..end]);
        start = end;
    }
    sentences.push(&text[start..]);

    sentences
        .into_iter()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_basic() {
        assert_eq!(
            split_sentences("Tom woke up. He was late! Why?  He ran."),
            vec!["Tom woke up.", "He was late!", "Why?", "He ran."]
        );
    }

    #[test]
    fn test_split_keeps_inner_punctuation() {
        assert_eq!(
            split_sentences("It cost 3.50 dollars. Mr.Smith paid."),
            vec!["It cost 3.50 dollars.", "Mr.Smith paid."]
        );
    }

    #[test]
    fn test_split_without_final_punctuation() {
        assert_eq!(split_sentences("no ending here"), vec!["no ending here"]);
    }

    #[test]
    fn test_split_empty() {
        assert!(split_sentences("").is_empty());
        assert!(split_sentences("   ").is_empty());
    }

    #[test]
    fn test_split_repeated_punctuation() {
        assert_eq!(
            split_sentences("Wait... Really?! Yes."),
            vec!["Wait...", "Really?!", "Yes."]
        );
    }

    #[test]
    fn test_split_newlines() {
        assert_eq!(
            split_sentences("First one.\nSecond one."),
            vec!["First one.", "Second one."]
        );
    }
}
