#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    // Transliteration in both directions and rōmaji expansion
    let _ = kotoba::kana::to_hiragana(data);
    let _ = kotoba::kana::to_katakana(data);
    let _ = kotoba::kana::to_hepburn(data);
    let _ = kotoba::kana::to_kunrei(data);
    let _ = kotoba::query::expand(data);
});
