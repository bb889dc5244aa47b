//! Rōmaji expansion.
//!
//! A rōmaji query is tried as kana before it is tried as typed. Some spellings
//! segment more than one way ("kanichi" is かにち or かんいち), so every
//! plausible segmentation is rendered in both kana scripts.

use crate::kana::to_kana::{is_vowel, starts_syllable};
use crate::kana::{is_fully_converted, to_hiragana, to_katakana};
use crate::query::classifier::detect_case_sensitive;
use crate::query::types::{Condition, Field};

/// Upper bound on segmentation variants per query
const MAX_VARIANTS: usize = 16;

/// Expand ambiguous rōmaji into every plausible segmentation.
///
/// The spelling as typed comes first, then variants ordered by how many
/// alternative readings they take.
pub fn expand(query: &str) -> Vec<String> {
    let chars: Vec<char> = query.chars().collect();
    let mut segments: Vec<Vec<String>> = Vec::with_capacity(chars.len());
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        let next = chars.get(i + 1).map(|c| c.to_ascii_lowercase());

        if c.eq_ignore_ascii_case(&'n') {
            // "nn" + vowel: ん + n-syllable, or just ん + vowel
            if next == Some('n')
                && chars
                    .get(i + 2)
                    .is_some_and(|c| starts_syllable(c.to_ascii_lowercase()))
            {
                let pair: String = chars[i..i + 2].iter().collect();
                segments.push(vec![pair, format!("{}'", c)]);
                i += 2;
                continue;
            }

            // vowel + "n" + vowel: n-syllable, or ん + vowel
            if i > 0 && is_vowel_like(chars[i - 1]) && next.is_some_and(starts_syllable) {
                segments.push(vec![c.to_string(), format!("{}'", c)]);
                i += 1;
                continue;
            }
        }

        let options = match c {
            'ō' | 'ô' => vec!["ou".to_string(), "oo".to_string()],
            'Ō' | 'Ô' => vec!["OU".to_string(), "OO".to_string()],
            'ē' | 'ê' => vec!["ee".to_string(), "ei".to_string()],
            'Ē' | 'Ê' => vec!["EE".to_string(), "EI".to_string()],
            _ => vec![c.to_string()],
        };
        segments.push(options);
        i += 1;
    }

    let ambiguous: Vec<usize> = segments
        .iter()
        .enumerate()
        .filter(|(_, options)| options.len() > 1)
        .map(|(i, _)| i)
        .collect();

    // Fewest alternates first. Within one count, alternates further right
    // come first, so the spelling stays literal as long as possible.
    let mut variants = Vec::new();
    for count in 0..=ambiguous.len() {
        let mut picks: Vec<usize> = (0..count).collect();
        loop {
            variants.push(render(&segments, &ambiguous, &picks));
            if variants.len() == MAX_VARIANTS {
                return variants;
            }
            if !next_pick(&mut picks, ambiguous.len()) {
                break;
            }
        }
    }
    variants
}

/// Build one variant. `picks` counts ambiguity points from the right.
fn render(segments: &[Vec<String>], ambiguous: &[usize], picks: &[usize]) -> String {
    let mut alternate = vec![false; segments.len()];
    for &pick in picks {
        alternate[ambiguous[ambiguous.len() - 1 - pick]] = true;
    }

    segments
        .iter()
        .zip(alternate)
        .map(|(options, alt)| options[usize::from(alt)].as_str())
        .collect()
}

/// Advance a sorted pick set to the next one of the same size, in colex order
fn next_pick(picks: &mut [usize], points: usize) -> bool {
    for i in 0..picks.len() {
        let limit = picks.get(i + 1).copied().unwrap_or(points);
        if picks[i] + 1 < limit {
            picks[i] += 1;
            for (j, pick) in picks[..i].iter_mut().enumerate() {
                *pick = j;
            }
            return true;
        }
    }
    false
}

/// Put kana renderings of a rōmaji query in front of every reading condition.
///
/// Each reading condition becomes `[kana variants..., original]`. Uppercase in
/// the query puts katakana ahead of hiragana. Renderings that still contain
/// Latin letters are dropped.
pub fn splice_kana_variants(conditions: Vec<Condition>, query: &str) -> Vec<Condition> {
    let converters: [fn(&str) -> String; 2] = if detect_case_sensitive(query) {
        [to_katakana, to_hiragana]
    } else {
        [to_hiragana, to_katakana]
    };

    let variants = expand(query);
    let mut out = Vec::with_capacity(conditions.len() * 3);
    for condition in conditions {
        if condition.field() == Field::Reading {
            let mut kana_queries: Vec<String> = Vec::new();
            for convert in converters {
                for variant in &variants {
                    let kana = convert(variant);
                    if is_fully_converted(&kana)
                        && kana != condition.query()
                        && !kana_queries.contains(&kana)
                    {
                        kana_queries.push(kana);
                    }
                }
            }
            out.extend(kana_queries.into_iter().map(|kana| condition.with_query(kana)));
        }
        out.push(condition);
    }
    out
}

fn is_vowel_like(c: char) -> bool {
    c.to_lowercase().any(|c| {
        is_vowel(c) || matches!(c, 'ā' | 'ī' | 'ū' | 'ē' | 'ō' | 'â' | 'î' | 'û' | 'ê' | 'ô')
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::types::Extent;

    #[test]
    fn test_unambiguous_query_has_one_variant() {
        assert_eq!(expand("nihongo"), vec!["nihongo"]);
        assert_eq!(expand("neko"), vec!["neko"]);
    }

    #[test]
    fn test_n_between_vowels_is_ambiguous() {
        assert_eq!(expand("kanichi"), vec!["kanichi", "kan'ichi"]);
    }

    #[test]
    fn test_double_n_before_vowel_is_ambiguous() {
        assert_eq!(expand("konnichiha"), vec!["konnichiha", "kon'ichiha"]);
    }

    #[test]
    fn test_explicit_apostrophe_is_not_expanded() {
        assert_eq!(expand("kan'i"), vec!["kan'i"]);
    }

    #[test]
    fn test_macrons_expand() {
        assert_eq!(expand("ōkii"), vec!["oukii", "ookii"]);
    }

    #[test]
    fn test_fewest_alternates_first() {
        let variants = expand("kaninani");
        assert_eq!(variants[0], "kaninani");
        assert_eq!(variants.last().map(String::as_str), Some("kan'in'an'i"));
        assert_eq!(variants.len(), 8);
    }

    #[test]
    fn test_variant_cap() {
        assert!(expand("ananananananananana").len() <= MAX_VARIANTS);
    }

    #[test]
    fn test_single_alternates_survive_many_ambiguities() {
        // twelve ambiguous n's: every one-alternate variant comes before any two
        let query = format!("a{}", "na".repeat(12));
        let variants = expand(&query);
        assert_eq!(variants.len(), MAX_VARIANTS);
        assert_eq!(variants[0], query);
        assert!(variants[1..13].iter().all(|v| v.matches('\'').count() == 1));
        assert!(variants[13..].iter().all(|v| v.matches('\'').count() == 2));
        assert_eq!(variants[1], format!("a{}n'a", "na".repeat(11)));
        assert_eq!(variants[12], format!("an'a{}", "na".repeat(11)));
    }

    #[test]
    fn test_long_query_expands_quickly() {
        let query = "an".repeat(2000);
        let start = std::time::Instant::now();
        let variants = expand(&query);
        assert_eq!(variants.len(), MAX_VARIANTS);
        assert_eq!(variants[0], query);
        assert!(start.elapsed() < std::time::Duration::from_secs(1));
    }

    #[test]
    fn test_splice_puts_kana_first() {
        let conditions = vec![
            Condition::new(Field::Gloss, Extent::Whole, false, "neko", false, false),
            Condition::new(Field::Reading, Extent::Whole, false, "neko", false, false),
        ];
        let spliced = splice_kana_variants(conditions, "neko");
        let queries: Vec<_> = spliced.iter().map(|c| (c.field(), c.query())).collect();
        assert_eq!(
            queries,
            vec![
                (Field::Gloss, "neko"),
                (Field::Reading, "ねこ"),
                (Field::Reading, "ネコ"),
                (Field::Reading, "neko"),
            ]
        );
    }

    #[test]
    fn test_uppercase_prefers_katakana() {
        let conditions = vec![Condition::new(
            Field::Reading,
            Extent::Whole,
            false,
            "TEREBI",
            true,
            false,
        )];
        let spliced = splice_kana_variants(conditions, "TEREBI");
        assert_eq!(spliced[0].query(), "テレビ");
        assert_eq!(spliced[1].query(), "てれび");
        assert!(spliced.iter().all(|c| c.case_sensitive()));
    }

    #[test]
    fn test_unconvertible_rendering_dropped() {
        let conditions = vec![Condition::new(Field::Reading, Extent::Partial, false, "cat", false, false)];
        let spliced = splice_kana_variants(conditions, "cat");
        assert_eq!(spliced.len(), 1);
        assert_eq!(spliced[0].query(), "cat");
    }
}
