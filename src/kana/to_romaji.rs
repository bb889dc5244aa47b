use super::katakana_to_hiragana;
use super::table::KANA_TO_ROMAJI;
use serde::{Deserialize, Serialize};

/// Rōmaji spelling system used for display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RomajiStyle {
    Hepburn,
    Kunrei,
}

impl RomajiStyle {
    pub fn convert(&self, kana: &str) -> String {
        to_romaji(kana, *self)
    }
}

pub fn to_hepburn(kana: &str) -> String {
    to_romaji(kana, RomajiStyle::Hepburn)
}

pub fn to_kunrei(kana: &str) -> String {
    to_romaji(kana, RomajiStyle::Kunrei)
}

/// Convert hiragana or katakana to rōmaji. Non-kana characters pass through.
pub fn to_romaji(kana: &str, style: RomajiStyle) -> String {
    let chars: Vec<char> = katakana_to_hiragana(kana).chars().collect();
    let mut out = String::with_capacity(chars.len() * 2);
    let mut sokuon = false;
    let mut after_n = false;
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];

        if c == 'っ' {
            if sokuon {
                out.push_str(small_tsu(style));
            }
            sokuon = true;
            after_n = false;
            i += 1;
            continue;
        }

        if c == 'ん' {
            flush_sokuon(&mut out, &mut sokuon, style);
            out.push('n');
            after_n = true;
            i += 1;
            continue;
        }

        let syllable = [2, 1].iter().find_map(|&len| {
            if i + len > chars.len() {
                return None;
            }
            let key: String = chars[i..i + len].iter().collect();
            KANA_TO_ROMAJI.get(key.as_str()).map(|&(hepburn, kunrei)| {
                let romaji = match style {
                    RomajiStyle::Hepburn => hepburn,
                    RomajiStyle::Kunrei => kunrei,
                };
                (romaji, len)
            })
        });

        match syllable {
            Some((romaji, len)) => {
                if after_n && romaji.starts_with(|c: char| "aiueoy".contains(c)) {
                    out.push('\'');
                }
                if sokuon {
                    sokuon = false;
                    match romaji.chars().next() {
                        Some(_) if style == RomajiStyle::Hepburn && romaji.starts_with("ch") => {
                            out.push('t')
                        }
                        Some(first) if !"aiueo".contains(first) => out.push(first),
                        _ => out.push_str(small_tsu(style)),
                    }
                }
                out.push_str(romaji);
                i += len;
            }
            None => {
                flush_sokuon(&mut out, &mut sokuon, style);
                out.push(if c == 'ー' { '-' } else { c });
                i += 1;
            }
        }
        after_n = false;
    }

    flush_sokuon(&mut out, &mut sokuon, style);
    out
}

fn small_tsu(style: RomajiStyle) -> &'static str {
    match style {
        RomajiStyle::Hepburn => "xtsu",
        RomajiStyle::Kunrei => "xtu",
    }
}

fn flush_sokuon(out: &mut String, sokuon: &mut bool, style: RomajiStyle) {
    if *sokuon {
        out.push_str(small_tsu(style));
        *sokuon = false;
    }
}
