//! Script detection for raw queries.
//!
//! Decides which dictionary field a query most likely targets when the user
//! did not say.

use crate::kana::{is_kana, to_kana::is_apostrophe};
use crate::query::types::Field;

/// Characters with a special meaning in a regular expression
const REGEXP_SPECIAL: &[char] = &[
    '\\', '.', '^', '$', '*', '+', '?', '{', '}', '[', ']', '|', '(', ')',
];

/// Coarse script classification of a query
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryScript {
    /// Plain ASCII text; most likely an English gloss
    Latin,
    /// Latin text with marks particular to rōmaji (macrons, apostrophes)
    Romaji,
    /// Hiragana and/or katakana only
    Kana,
    /// Kanji, mixed scripts, or anything else
    Other,
}

impl QueryScript {
    pub fn of(query: &str) -> Self {
        if is_latin(query) {
            QueryScript::Latin
        } else if is_romaji(query) {
            QueryScript::Romaji
        } else if is_kana_text(query) {
            QueryScript::Kana
        } else {
            QueryScript::Other
        }
    }

    /// Field trial order for this kind of query
    pub fn field_order(&self) -> [Field; 3] {
        match self {
            QueryScript::Latin => [Field::Gloss, Field::Reading, Field::Kanji],
            QueryScript::Romaji => [Field::Reading, Field::Gloss, Field::Kanji],
            QueryScript::Kana => [Field::Reading, Field::Kanji, Field::Gloss],
            QueryScript::Other => [Field::Kanji, Field::Reading, Field::Gloss],
        }
    }
}

/// Order in which fields are tried for an unpinned query
pub fn classify(query: &str) -> [Field; 3] {
    QueryScript::of(query).field_order()
}

/// Printable ASCII with at least one letter
pub fn is_latin(query: &str) -> bool {
    query.chars().any(|c| c.is_ascii_alphabetic())
        && query.chars().all(|c| c.is_ascii() && !c.is_ascii_control())
}

/// Looks like a rōmaji transcription: letters (with macrons or circumflexes),
/// apostrophes, hyphens and spaces
pub fn is_romaji(query: &str) -> bool {
    query.chars().any(|c| c.is_ascii_alphabetic())
        && query.chars().all(|c| {
            c.is_ascii_alphabetic()
                || is_long_vowel_mark(c)
                || is_apostrophe(c)
                || c == '-'
                || c == ' '
        })
}

/// Kana only, ignoring whitespace
pub fn is_kana_text(query: &str) -> bool {
    query.chars().any(is_kana) && query.chars().all(|c| is_kana(c) || c.is_whitespace())
}

pub fn has_regexp_special(query: &str) -> bool {
    query.contains(REGEXP_SPECIAL)
}

/// Default case sensitivity: on as soon as the query has an uppercase letter
pub fn detect_case_sensitive(query: &str) -> bool {
    query.chars().any(char::is_uppercase)
}

fn is_long_vowel_mark(c: char) -> bool {
    matches!(
        c,
        'ā' | 'ī' | 'ū' | 'ē' | 'ō' | 'â' | 'î' | 'û' | 'ê' | 'ô' | 'Ā' | 'Ī' | 'Ū' | 'Ē' | 'Ō'
            | 'Â' | 'Î' | 'Û' | 'Ê' | 'Ô'
    )
}
