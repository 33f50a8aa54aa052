//! Fixed-vocabulary sentiment scoring.
//!
//! Plain word-count-against-lexicon: lower-case the text, tokenize, look up
//! each token, increment every category it is associated with. There is no
//! weighting, negation handling, or context sensitivity; that limitation is
//! part of the scoring contract, not something to fix.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::core::{Emotion, SentimentCounts};

use super::lexicon::LEXICON;

static WORD_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"[a-z']+").unwrap());

static LEXICON_INDEX: Lazy<HashMap<&'static str, &'static [Emotion]>> =
    Lazy::new(|| LEXICON.iter().copied().collect());

/// Score one description. Deterministic: identical text always produces
/// identical counts.
pub fn score(text: &str) -> SentimentCounts {
    let lowered = text.to_lowercase();
    let mut counts = SentimentCounts::new();
    for token in WORD_PATTERN.find_iter(&lowered) {
        if let Some(emotions) = LEXICON_INDEX.get(token.as_str()) {
            for emotion in emotions.iter() {
                counts.increment(*emotion);
            }
        }
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_every_category_of_a_token() {
        let counts = score("an exciting opportunity");
        // "exciting": anticipation, joy, positive, surprise
        // "opportunity": anticipation, positive
        assert_eq!(counts[Emotion::Anticipation], 2);
        assert_eq!(counts[Emotion::Joy], 1);
        assert_eq!(counts[Emotion::Positive], 2);
        assert_eq!(counts[Emotion::Surprise], 1);
        assert_eq!(counts[Emotion::Negative], 0);
    }

    #[test]
    fn scoring_ignores_case_and_punctuation() {
        assert_eq!(score("EXCITING! Opportunity."), score("exciting opportunity"));
    }

    #[test]
    fn repeated_tokens_count_each_occurrence() {
        let counts = score("stress stress stress");
        assert_eq!(counts[Emotion::Fear], 3);
        assert_eq!(counts[Emotion::Negative], 3);
    }

    #[test]
    fn unknown_words_score_zero() {
        assert_eq!(score("forklift certification").total(), 0);
    }

    #[test]
    fn scoring_is_deterministic() {
        let text = "A dynamic team with competitive salary and tight deadlines";
        assert_eq!(score(text), score(text));
    }
}
