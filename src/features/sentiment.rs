//! Lexicon-based sentiment polarity.
//!
//! [`LexiconScorer`] looks every token up in an embedded word list
//! (`data/sentiment_lexicon.tsv`) and averages the hits:
//!
//! - an intensifier ("very", "so", ...) multiplies the next sentiment word,
//! - a negation ("not", "never", "don't", ...) multiplies it by `-0.5`,
//! - emoticons such as `:)` and `<3` are matched on raw whitespace tokens,
//! - text with no lexicon hit scores `0.0`.
//!
//! The result is always clamped to `[-1.0, 1.0]`. Other scorers can be
//! plugged into [`FeatureExtractor`](super::FeatureExtractor) through the
//! [`SentimentScorer`] trait.

use std::collections::HashMap;
use std::fmt;

use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};

use crate::config::SentimentThresholds;

const LEXICON_SOURCE: &str = include_str!("../../data/sentiment_lexicon.tsv");

/// Factor applied to a sentiment word preceded by a negation.
const NEGATION_FACTOR: f64 = -0.5;

const NEGATIONS: &[&str] = &[
    "not", "no", "never", "nothing", "nobody", "neither", "nor", "cannot", "can't", "cant",
    "don't", "dont", "doesn't", "doesnt", "didn't", "didnt", "isn't", "isnt", "wasn't", "wasnt",
    "aren't", "won't", "wont", "wouldn't", "shouldn't", "couldn't", "ain't",
];

const INTENSIFIERS: &[(&str, f64)] = &[
    ("very", 1.3),
    ("really", 1.3),
    ("so", 1.2),
    ("too", 1.2),
    ("super", 1.3),
    ("extremely", 1.5),
    ("incredibly", 1.5),
    ("absolutely", 1.4),
    ("totally", 1.3),
    ("quite", 1.1),
    ("pretty", 1.1),
    ("somewhat", 0.8),
    ("kinda", 0.8),
    ("slightly", 0.7),
    ("barely", 0.5),
];

lazy_static! {
    static ref LEXICON: HashMap<String, f64> = {
        let mut map = HashMap::new();
        for line in LEXICON_SOURCE.lines() {
            if line.starts_with('#') {
                continue;
            }
            if let Some((word, score_str)) = line.split_once('\t') {
                if let Ok(score) = score_str.trim().parse::<f64>() {
                    map.insert(word.trim().to_lowercase(), score.clamp(-1.0, 1.0));
                }
            }
        }
        map
    };
}

/// Maps text to a polarity in `[-1.0, 1.0]`.
pub trait SentimentScorer: Send + Sync {
    /// Returns the polarity of `text`.
    fn polarity(&self, text: &str) -> f64;
}

/// The default scorer backed by the embedded lexicon.
#[derive(Debug, Clone, Copy, Default)]
pub struct LexiconScorer;

impl LexiconScorer {
    /// Creates a scorer using the embedded lexicon.
    pub fn new() -> Self {
        Self
    }

    /// Number of entries in the embedded lexicon.
    pub fn lexicon_len() -> usize {
        LEXICON.len()
    }
}

impl SentimentScorer for LexiconScorer {
    fn polarity(&self, text: &str) -> f64 {
        let mut scores: Vec<f64> = Vec::new();
        let mut intensity = 1.0;
        let mut negated = false;

        for raw in text.split_whitespace() {
            let raw_lower = raw.to_lowercase();
            if let Some(&score) = LEXICON.get(&raw_lower) {
                if raw_lower.starts_with(|c: char| !c.is_alphanumeric()) {
                    // Emoticon: not affected by modifiers.
                    scores.push(score);
                    continue;
                }
            }

            let word = raw_lower
                .trim_matches(|c: char| !c.is_alphanumeric() && c != '\'')
                .trim_matches('\'')
                .replace('\u{2019}', "'");
            if word.is_empty() {
                continue;
            }

            if NEGATIONS.contains(&word.as_str()) {
                negated = true;
                continue;
            }

            if let Some(&(_, factor)) = INTENSIFIERS.iter().find(|(w, _)| *w == word) {
                // Dropped again by the next non-lexicon word.
                intensity *= factor;
                continue;
            }

            if let Some(&base) = LEXICON.get(&word) {
                let mut score = (base * intensity).clamp(-1.0, 1.0);
                if negated {
                    score *= NEGATION_FACTOR;
                }
                scores.push(score);
            }

            intensity = 1.0;
            negated = false;
        }

        if scores.is_empty() {
            return 0.0;
        }

        let mean = scores.iter().sum::<f64>() / scores.len() as f64;
        mean.clamp(-1.0, 1.0)
    }
}

/// Three-way sentiment classification of a polarity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SentimentLabel {
    /// Polarity above the positive threshold
    Positive,
    /// Polarity within the thresholds, boundaries included
    Neutral,
    /// Polarity below the negative threshold
    Negative,
}

impl SentimentLabel {
    /// Classifies `polarity` with the default ±0.1 thresholds.
    ///
    /// ```rust
    /// use chatlens::features::SentimentLabel;
    ///
    /// assert_eq!(SentimentLabel::from_polarity(0.5), SentimentLabel::Positive);
    /// assert_eq!(SentimentLabel::from_polarity(0.1), SentimentLabel::Neutral);
    /// assert_eq!(SentimentLabel::from_polarity(-0.1), SentimentLabel::Neutral);
    /// assert_eq!(SentimentLabel::from_polarity(-0.2), SentimentLabel::Negative);
    /// ```
    pub fn from_polarity(polarity: f64) -> Self {
        Self::classify(polarity, &SentimentThresholds::default())
    }

    /// Classifies `polarity` with explicit thresholds.
    pub fn classify(polarity: f64, thresholds: &SentimentThresholds) -> Self {
        if polarity > thresholds.positive {
            SentimentLabel::Positive
        } else if polarity < thresholds.negative {
            SentimentLabel::Negative
        } else {
            SentimentLabel::Neutral
        }
    }

    /// All labels in display order.
    pub fn all() -> &'static [SentimentLabel] {
        &[
            SentimentLabel::Positive,
            SentimentLabel::Neutral,
            SentimentLabel::Negative,
        ]
    }
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SentimentLabel::Positive => write!(f, "Positive"),
            SentimentLabel::Neutral => write!(f, "Neutral"),
            SentimentLabel::Negative => write!(f, "Negative"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn polarity(text: &str) -> f64 {
        LexiconScorer::new().polarity(text)
    }

    #[test]
    fn test_lexicon_loaded() {
        assert!(LexiconScorer::lexicon_len() > 200);
        assert!(!LEXICON.contains_key("# word"));
    }

    #[test]
    fn test_no_hits_is_zero() {
        assert!(polarity("").abs() < f64::EPSILON);
        assert!(polarity("see you at the station").abs() < f64::EPSILON);
    }

    #[test]
    fn test_positive_text() {
        let p = polarity("Happy New Year!");
        assert!(p > 0.1, "got {p}");
        assert_eq!(SentimentLabel::from_polarity(p), SentimentLabel::Positive);
    }

    #[test]
    fn test_negative_text() {
        let p = polarity("this is terrible, I hate it");
        assert!(p < -0.1, "got {p}");
    }

    #[test]
    fn test_negation_flips() {
        let plain = polarity("good");
        let negated = polarity("not good");
        assert!(plain > 0.0);
        assert!(negated < 0.0);
        assert!((negated - plain * NEGATION_FACTOR).abs() < 1e-9);
    }

    #[test]
    fn test_intensifier_scales() {
        let plain = polarity("nice");
        let strong = polarity("very nice");
        assert!(strong > plain);
    }

    #[test]
    fn test_intensifier_without_target_is_ignored() {
        assert!(polarity("so what").abs() < f64::EPSILON);
    }

    #[test]
    fn test_emoticons() {
        assert!(polarity("see you :)") > 0.1);
        assert!(polarity("missed the bus :(") < -0.1);
        assert!(polarity("haha :D") > 0.1);
    }

    #[test]
    fn test_always_in_range() {
        for text in [
            "absolutely extremely incredibly perfect",
            "extremely terrible awful worst",
            "not not not bad",
        ] {
            let p = polarity(text);
            assert!((-1.0..=1.0).contains(&p), "{text} -> {p}");
        }
    }

    #[test]
    fn test_label_thresholds() {
        assert_eq!(SentimentLabel::from_polarity(0.1000001), SentimentLabel::Positive);
        assert_eq!(SentimentLabel::from_polarity(0.1), SentimentLabel::Neutral);
        assert_eq!(SentimentLabel::from_polarity(0.0), SentimentLabel::Neutral);
        assert_eq!(SentimentLabel::from_polarity(-0.1), SentimentLabel::Neutral);
        assert_eq!(SentimentLabel::from_polarity(-0.1000001), SentimentLabel::Negative);
        assert_eq!(SentimentLabel::from_polarity(1.0), SentimentLabel::Positive);
        assert_eq!(SentimentLabel::from_polarity(-1.0), SentimentLabel::Negative);
    }

    #[test]
    fn test_label_custom_thresholds() {
        let t = SentimentThresholds {
            positive: 0.5,
            negative: -0.5,
        };
        assert_eq!(SentimentLabel::classify(0.4, &t), SentimentLabel::Neutral);
        assert_eq!(SentimentLabel::classify(0.6, &t), SentimentLabel::Positive);
        assert_eq!(SentimentLabel::classify(-0.5, &t), SentimentLabel::Neutral);
    }

    #[test]
    fn test_label_display() {
        assert_eq!(SentimentLabel::Positive.to_string(), "Positive");
        assert_eq!(SentimentLabel::Neutral.to_string(), "Neutral");
        assert_eq!(SentimentLabel::Negative.to_string(), "Negative");
    }
}
