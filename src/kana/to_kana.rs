use super::hiragana_to_katakana;
use super::table::{MAX_ROMAJI_LEN, ROMAJI_TO_KANA};

/// Convert rōmaji to hiragana.
///
/// Accepts Hepburn, Kunrei and Nihon-shiki spellings, in any case. Characters
/// that do not form a syllable are passed through unchanged, so callers can
/// check [`is_fully_converted`] on the result.
pub fn to_hiragana(romaji: &str) -> String {
    let chars: Vec<char> = normalize_romaji(romaji).chars().collect();
    let mut out = String::with_capacity(chars.len() * 3);
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        let next = chars.get(i + 1).copied();

        if c == 'n' {
            match next {
                Some(a) if is_apostrophe(a) => {
                    out.push('ん');
                    i += 2;
                    continue;
                }
                Some('n') => {
                    // "nn" + vowel is ん followed by an n-syllable
                    out.push('ん');
                    i += if chars.get(i + 2).is_some_and(|&c| starts_syllable(c)) {
                        1
                    } else {
                        2
                    };
                    continue;
                }
                Some(v) if starts_syllable(v) => {
                    if let Some((kana, len)) = lookup(&chars[i..]) {
                        out.push_str(kana);
                        i += len;
                        continue;
                    }
                    out.push('ん');
                    i += 1;
                    continue;
                }
                _ => {
                    out.push('ん');
                    i += 1;
                    continue;
                }
            }
        }

        // Sokuon: doubled consonant, or "tch"
        if is_consonant(c) && (next == Some(c) || (c == 't' && next == Some('c'))) {
            out.push('っ');
            i += 1;
            continue;
        }

        if c == '-' {
            out.push('ー');
            i += 1;
            continue;
        }

        if let Some((kana, len)) = lookup(&chars[i..]) {
            out.push_str(kana);
            i += len;
            continue;
        }

        if !is_apostrophe(c) {
            out.push(c);
        }
        i += 1;
    }

    out
}

/// Convert rōmaji to katakana
pub fn to_katakana(romaji: &str) -> String {
    hiragana_to_katakana(&to_hiragana(romaji))
}

/// True if a conversion left no Latin letters behind
pub fn is_fully_converted(kana: &str) -> bool {
    !kana.chars().any(|c| c.is_ascii_alphabetic())
}

/// Lowercase and spell out long vowels written with macrons or circumflexes
fn normalize_romaji(romaji: &str) -> String {
    let mut out = String::with_capacity(romaji.len());
    for c in romaji.chars().flat_map(char::to_lowercase) {
        match c {
            'ā' | 'â' => out.push_str("aa"),
            'ī' | 'î' => out.push_str("ii"),
            'ū' | 'û' => out.push_str("uu"),
            'ē' | 'ê' => out.push_str("ee"),
            'ō' | 'ô' => out.push_str("ou"),
            c => out.push(c),
        }
    }
    out
}

/// Longest table match at the start of `chars`
fn lookup(chars: &[char]) -> Option<(&'static str, usize)> {
    let max = MAX_ROMAJI_LEN.min(chars.len());
    (1..=max).rev().find_map(|len| {
        let key: String = chars[..len].iter().collect();
        ROMAJI_TO_KANA.get(key.as_str()).map(|&kana| (kana, len))
    })
}

pub(crate) fn is_vowel(c: char) -> bool {
    matches!(c, 'a' | 'i' | 'u' | 'e' | 'o')
}

/// A letter that can follow "n" inside the same syllable
pub(crate) fn starts_syllable(c: char) -> bool {
    is_vowel(c) || c == 'y'
}

pub(crate) fn is_apostrophe(c: char) -> bool {
    matches!(c, '\'' | '’')
}

fn is_consonant(c: char) -> bool {
    c.is_ascii_lowercase() && !is_vowel(c) && c != 'n'
}
