//! Kana and rōmaji transliteration.
//!
//! - [`to_hiragana`] / [`to_katakana`] - rōmaji input to kana
//! - [`to_hepburn`] / [`to_kunrei`] - kana to rōmaji for display
//! - script shifting and character classes used by the query classifier
//!
//! ```
//! use kotoba::kana::{to_hiragana, to_katakana, to_hepburn};
//!
//! assert_eq!(to_hiragana("nihongo"), "にほんご");
//! assert_eq!(to_katakana("konpyuuta"), "コンピュウタ");
//! assert_eq!(to_hepburn("しんぶん"), "shinbun");
//! ```

mod table;
pub mod to_kana;
pub mod to_romaji;

pub use to_kana::*;
pub use to_romaji::*;

/// Offset between a hiragana code point and its katakana counterpart
const KATAKANA_OFFSET: u32 = 0x60;

pub fn is_hiragana(c: char) -> bool {
    matches!(c, '\u{3041}'..='\u{309f}')
}

/// Full-width katakana (including the prolonged sound mark) and half-width katakana
pub fn is_katakana(c: char) -> bool {
    matches!(c, '\u{30a0}'..='\u{30ff}' | '\u{31f0}'..='\u{31ff}' | '\u{ff66}'..='\u{ff9f}')
}

pub fn is_kana(c: char) -> bool {
    is_hiragana(c) || is_katakana(c)
}

pub fn hiragana_to_katakana(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            '\u{3041}'..='\u{3096}' | '\u{309d}'..='\u{309e}' => {
                char::from_u32(c as u32 + KATAKANA_OFFSET).unwrap_or(c)
            }
            _ => c,
        })
        .collect()
}

pub fn katakana_to_hiragana(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            '\u{30a1}'..='\u{30f6}' | '\u{30fd}'..='\u{30fe}' => {
                char::from_u32(c as u32 - KATAKANA_OFFSET).unwrap_or(c)
            }
            _ => c,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_script_shift() {
        assert_eq!(hiragana_to_katakana("にほんご"), "ニホンゴ");
        assert_eq!(katakana_to_hiragana("テレビ"), "てれび");
        // prolonged sound mark has no hiragana counterpart
        assert_eq!(katakana_to_hiragana("コーヒー"), "こーひー");
    }

    #[test]
    fn test_char_classes() {
        assert!(is_hiragana('あ'));
        assert!(!is_hiragana('ア'));
        assert!(is_katakana('ア'));
        assert!(is_katakana('ー'));
        assert!(is_katakana('ｱ'));
        assert!(!is_kana('語'));
    }
}
