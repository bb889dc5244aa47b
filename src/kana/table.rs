use rustc_hash::FxHashMap;
use std::sync::LazyLock;

/// Syllable table: kana, Hepburn spelling, Kunrei spelling.
///
/// Order matters: when two kana share a spelling (じ/ぢ, ず/づ), the first
/// row owns it for input conversion.
pub(crate) const SYLLABLES: &[(&str, &str, &str)] = &[
    ("あ", "a", "a"),
    ("い", "i", "i"),
    ("う", "u", "u"),
    ("え", "e", "e"),
    ("お", "o", "o"),
    ("か", "ka", "ka"),
    ("き", "ki", "ki"),
    ("く", "ku", "ku"),
    ("け", "ke", "ke"),
    ("こ", "ko", "ko"),
    ("が", "ga", "ga"),
    ("ぎ", "gi", "gi"),
    ("ぐ", "gu", "gu"),
    ("げ", "ge", "ge"),
    ("ご", "go", "go"),
    ("さ", "sa", "sa"),
    ("し", "shi", "si"),
    ("す", "su", "su"),
    ("せ", "se", "se"),
    ("そ", "so", "so"),
    ("ざ", "za", "za"),
    ("じ", "ji", "zi"),
    ("ず", "zu", "zu"),
    ("ぜ", "ze", "ze"),
    ("ぞ", "zo", "zo"),
    ("た", "ta", "ta"),
    ("ち", "chi", "ti"),
    ("つ", "tsu", "tu"),
    ("て", "te", "te"),
    ("と", "to", "to"),
    ("だ", "da", "da"),
    ("ぢ", "ji", "zi"),
    ("づ", "zu", "zu"),
    ("で", "de", "de"),
    ("ど", "do", "do"),
    ("な", "na", "na"),
    ("に", "ni", "ni"),
    ("ぬ", "nu", "nu"),
    ("ね", "ne", "ne"),
    ("の", "no", "no"),
    ("は", "ha", "ha"),
    ("ひ", "hi", "hi"),
    ("ふ", "fu", "hu"),
    ("へ", "he", "he"),
    ("ほ", "ho", "ho"),
    ("ば", "ba", "ba"),
    ("び", "bi", "bi"),
    ("ぶ", "bu", "bu"),
    ("べ", "be", "be"),
    ("ぼ", "bo", "bo"),
    ("ぱ", "pa", "pa"),
    ("ぴ", "pi", "pi"),
    ("ぷ", "pu", "pu"),
    ("ぺ", "pe", "pe"),
    ("ぽ", "po", "po"),
    ("ま", "ma", "ma"),
    ("み", "mi", "mi"),
    ("む", "mu", "mu"),
    ("め", "me", "me"),
    ("も", "mo", "mo"),
    ("や", "ya", "ya"),
    ("ゆ", "yu", "yu"),
    ("よ", "yo", "yo"),
    ("ら", "ra", "ra"),
    ("り", "ri", "ri"),
    ("る", "ru", "ru"),
    ("れ", "re", "re"),
    ("ろ", "ro", "ro"),
    ("わ", "wa", "wa"),
    ("ゐ", "wi", "wi"),
    ("ゑ", "we", "we"),
    ("を", "o", "o"),
    ("ゔ", "vu", "vu"),
    // yoon
    ("きゃ", "kya", "kya"),
    ("きゅ", "kyu", "kyu"),
    ("きょ", "kyo", "kyo"),
    ("ぎゃ", "gya", "gya"),
    ("ぎゅ", "gyu", "gyu"),
    ("ぎょ", "gyo", "gyo"),
    ("しゃ", "sha", "sya"),
    ("しゅ", "shu", "syu"),
    ("しょ", "sho", "syo"),
    ("じゃ", "ja", "zya"),
    ("じゅ", "ju", "zyu"),
    ("じょ", "jo", "zyo"),
    ("ちゃ", "cha", "tya"),
    ("ちゅ", "chu", "tyu"),
    ("ちょ", "cho", "tyo"),
    ("ぢゃ", "ja", "zya"),
    ("ぢゅ", "ju", "zyu"),
    ("ぢょ", "jo", "zyo"),
    ("にゃ", "nya", "nya"),
    ("にゅ", "nyu", "nyu"),
    ("にょ", "nyo", "nyo"),
    ("ひゃ", "hya", "hya"),
    ("ひゅ", "hyu", "hyu"),
    ("ひょ", "hyo", "hyo"),
    ("びゃ", "bya", "bya"),
    ("びゅ", "byu", "byu"),
    ("びょ", "byo", "byo"),
    ("ぴゃ", "pya", "pya"),
    ("ぴゅ", "pyu", "pyu"),
    ("ぴょ", "pyo", "pyo"),
    ("みゃ", "mya", "mya"),
    ("みゅ", "myu", "myu"),
    ("みょ", "myo", "myo"),
    ("りゃ", "rya", "rya"),
    ("りゅ", "ryu", "ryu"),
    ("りょ", "ryo", "ryo"),
    // loanword combinations
    ("しぇ", "she", "sye"),
    ("じぇ", "je", "zye"),
    ("ちぇ", "che", "tye"),
    ("ふぁ", "fa", "fa"),
    ("ふぃ", "fi", "fi"),
    ("ふぇ", "fe", "fe"),
    ("ふぉ", "fo", "fo"),
    ("ゔぁ", "va", "va"),
    ("ゔぃ", "vi", "vi"),
    ("ゔぇ", "ve", "ve"),
    ("ゔぉ", "vo", "vo"),
    ("いぇ", "ye", "ye"),
    // small kana
    ("ぁ", "xa", "xa"),
    ("ぃ", "xi", "xi"),
    ("ぅ", "xu", "xu"),
    ("ぇ", "xe", "xe"),
    ("ぉ", "xo", "xo"),
    ("ゃ", "xya", "xya"),
    ("ゅ", "xyu", "xyu"),
    ("ょ", "xyo", "xyo"),
    ("ゎ", "xwa", "xwa"),
    ("っ", "xtsu", "xtu"),
];

/// Input-only spellings not produced by either output style
const EXTRA_INPUT: &[(&str, &str)] = &[
    ("wo", "を"),
    ("di", "ぢ"),
    ("du", "づ"),
    ("dya", "ぢゃ"),
    ("dyu", "ぢゅ"),
    ("dyo", "ぢょ"),
    ("jya", "じゃ"),
    ("jyu", "じゅ"),
    ("jyo", "じょ"),
    ("la", "ぁ"),
    ("li", "ぃ"),
    ("lu", "ぅ"),
    ("le", "ぇ"),
    ("lo", "ぉ"),
    ("lya", "ゃ"),
    ("lyu", "ゅ"),
    ("lyo", "ょ"),
    ("ltu", "っ"),
    ("ltsu", "っ"),
    ("lwa", "ゎ"),
];

/// Longest key in the input table
pub(crate) const MAX_ROMAJI_LEN: usize = 4;

/// Rōmaji spelling (Hepburn, Kunrei or Nihon-shiki) to hiragana
pub(crate) static ROMAJI_TO_KANA: LazyLock<FxHashMap<&'static str, &'static str>> =
    LazyLock::new(|| {
        let mut map = FxHashMap::default();
        for &(kana, hepburn, kunrei) in SYLLABLES {
            map.entry(hepburn).or_insert(kana);
            map.entry(kunrei).or_insert(kana);
        }
        for &(romaji, kana) in EXTRA_INPUT {
            map.entry(romaji).or_insert(kana);
        }
        map
    });

/// Hiragana to (Hepburn, Kunrei)
pub(crate) static KANA_TO_ROMAJI: LazyLock<FxHashMap<&'static str, (&'static str, &'static str)>> =
    LazyLock::new(|| {
        SYLLABLES
            .iter()
            .map(|&(kana, hepburn, kunrei)| (kana, (hepburn, kunrei)))
            .collect()
    });

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shared_spellings_prefer_first_row() {
        assert_eq!(ROMAJI_TO_KANA.get("ji"), Some(&"じ"));
        assert_eq!(ROMAJI_TO_KANA.get("zu"), Some(&"ず"));
        assert_eq!(ROMAJI_TO_KANA.get("o"), Some(&"お"));
        assert_eq!(ROMAJI_TO_KANA.get("di"), Some(&"ぢ"));
    }

    #[test]
    fn test_keys_fit_max_len() {
        assert!(ROMAJI_TO_KANA.keys().all(|k| k.len() <= MAX_ROMAJI_LEN));
    }
}
