//! Emoji extraction.
//!
//! Matching is per code point: a character counts as an emoji if it has the
//! Unicode `Emoji` property and is not ASCII (the property also covers the
//! keycap bases `0-9`, `#` and `*`, which are plain text in chat bodies).
//!
//! Multi-code-point sequences are not kept together. A family emoji
//! (`👨‍👩‍👧`) yields its three people, a flag (`🇺🇸`) yields two regional
//! indicators, and a skin-toned thumbs up yields the hand and the modifier.
//! Joiners and variation selectors are never emitted.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref EMOJI_REGEX: Regex =
        Regex::new(r"[\p{Emoji}--\p{ASCII}]").expect("emoji class is valid");
}

/// Returns `true` if `c` is in the emoji reference set.
///
/// ```rust
/// use chatlens::features::is_emoji;
///
/// assert!(is_emoji('😂'));
/// assert!(is_emoji('❤'));
/// assert!(!is_emoji('a'));
/// assert!(!is_emoji('7'));
/// ```
pub fn is_emoji(c: char) -> bool {
    let mut buf = [0u8; 4];
    EMOJI_REGEX.is_match(c.encode_utf8(&mut buf))
}

/// Returns the emoji code points of `text`, in order of appearance.
///
/// ```rust
/// use chatlens::features::extract_emojis;
///
/// assert_eq!(extract_emojis("lol 😂😂 ok 👍"), vec!['😂', '😂', '👍']);
/// assert!(extract_emojis("no emoji here").is_empty());
/// ```
pub fn extract_emojis(text: &str) -> Vec<char> {
    EMOJI_REGEX
        .find_iter(text)
        .filter_map(|m| m.as_str().chars().next())
        .collect()
}
