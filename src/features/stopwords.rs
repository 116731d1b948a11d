//! Stopwords and word tokenization for word-frequency tables.
//!
//! The base set is the NLTK English list from the `stop-words` crate, the
//! common English words word clouds usually leave out ([`COMMON_STOPWORDS`]),
//! and a few chat-export artifacts (`media`, `omitted` from
//! `<Media omitted>`, and URL fragments). [`Stopwords`] layers
//! user-configured words on top of it.

use std::collections::HashSet;

use lazy_static::lazy_static;
use regex::Regex;
use stop_words::{LANGUAGE, get};

/// Export artifacts added to the English list.
pub const CHAT_STOPWORDS: &[&str] = &["media", "omitted", "http", "https", "www"];

/// Word-cloud stopwords. Mostly overlaps the NLTK list; adds words like
/// `also`, `could`, `would`, `get`, `like` and more contractions.
pub const COMMON_STOPWORDS: &[&str] = &[
    "a", "about", "above", "after", "again", "against", "all", "also", "am", "an", "and", "any",
    "are", "aren't", "as", "at", "be", "because", "been", "before", "being", "below", "between",
    "both", "but", "by", "can", "can't", "cannot", "com", "could", "couldn't", "did", "didn't",
    "do", "does", "doesn't", "doing", "don't", "down", "during", "each", "else", "ever", "few",
    "for", "from", "further", "get", "had", "hadn't", "has", "hasn't", "have", "haven't",
    "having", "he", "he'd", "he'll", "he's", "hence", "her", "here", "here's", "hers", "herself",
    "him", "himself", "his", "how", "how's", "however", "http", "i", "i'd", "i'll", "i'm", "i've",
    "if", "in", "into", "is", "isn't", "it", "it's", "its", "itself", "just", "k", "let's", "like",
    "me", "more", "most", "mustn't", "my", "myself", "no", "nor", "not", "of", "off", "on", "once",
    "only", "or", "other", "otherwise", "ought", "our", "ours", "ourselves", "out", "over", "own",
    "r", "same", "shall", "shan't", "she", "she'd", "she'll", "she's", "should", "shouldn't",
    "since", "so", "some", "such", "than", "that", "that's", "the", "their", "theirs", "them",
    "themselves", "then", "there", "there's", "therefore", "these", "they", "they'd", "they'll",
    "they're", "they've", "this", "those", "through", "to", "too", "under", "until", "up", "very",
    "was", "wasn't", "we", "we'd", "we'll", "we're", "we've", "were", "weren't", "what", "what's",
    "when", "when's", "where", "where's", "which", "while", "who", "who's", "whom", "why", "why's",
    "with", "won't", "would", "wouldn't", "www", "you", "you'd", "you'll", "you're", "you've",
    "your", "yours", "yourself", "yourselves",
];

lazy_static! {
    static ref BASE_STOPWORDS: HashSet<String> = {
        let mut set: HashSet<String> = get(LANGUAGE::English)
            .iter()
            .map(|w| w.to_lowercase())
            .collect();
        set.extend(COMMON_STOPWORDS.iter().map(ToString::to_string));
        set.extend(CHAT_STOPWORDS.iter().map(ToString::to_string));
        set
    };
    static ref WORD_REGEX: Regex = Regex::new(r"\w[\w']*").expect("word pattern is valid");
}

/// A stopword set: the built-in words plus optional extras.
#[derive(Debug, Clone, Default)]
pub struct Stopwords {
    extra: HashSet<String>,
}

impl Stopwords {
    /// The built-in set only.
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in set plus `words` (compared lowercase).
    pub fn with_extra<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            extra: words
                .into_iter()
                .map(|w| w.as_ref().trim().to_lowercase())
                .filter(|w| !w.is_empty())
                .collect(),
        }
    }

    /// Returns `true` if `word` is a stopword. Comparison is case-insensitive.
    pub fn contains(&self, word: &str) -> bool {
        let lower = word.to_lowercase();
        BASE_STOPWORDS.contains(&lower) || self.extra.contains(&lower)
    }

    /// Size of the built-in set.
    pub fn base_len() -> usize {
        BASE_STOPWORDS.len()
    }
}

/// Splits `text` into lowercase word tokens.
///
/// A token is a word character followed by word characters or apostrophes.
/// A trailing `'s` is removed, and tokens made only of digits are dropped.
///
/// ```rust
/// use chatlens::features::stopwords::tokenize;
///
/// assert_eq!(tokenize("Bob's car, 2 cars!"), vec!["bob", "car", "cars"]);
/// ```
pub fn tokenize(text: &str) -> Vec<String> {
    WORD_REGEX
        .find_iter(text)
        .filter_map(|m| {
            let lower = m.as_str().to_lowercase();
            let word = lower.strip_suffix("'s").unwrap_or(&lower).trim_end_matches('\'');
            if word.is_empty() || word.chars().all(|c| c.is_numeric()) {
                None
            } else {
                Some(word.to_string())
            }
        })
        .collect()
}
