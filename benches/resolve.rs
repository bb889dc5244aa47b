//! Condition generation and resolution benchmarks.
//!
//! Run with: `cargo bench`
//! Save baseline: `cargo bench -- --save-baseline main`
//! Compare: `cargo bench -- --baseline main`

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use kotoba::dict::{Dictionary, Entry, Sense};
use kotoba::kana::to_hiragana;
use kotoba::query::{SearchRequest, generate, resolve};

const QUERIES: &[&str] = &["日本語", "ねこ", "cat", "nihongo", "kaninani", "tōkyō", "猫.*"];

/// Synthetic dictionary: one entry per two-syllable rōmaji word
fn synthetic_dictionary() -> Dictionary {
    let syllables = ["ka", "ki", "ku", "ne", "ko", "ni", "ho", "go", "to", "yo", "ma", "su"];
    let mut entries = Vec::new();
    let mut id = 0;

    for a in syllables {
        for b in syllables {
            for c in syllables {
                let romaji = format!("{}{}{}", a, b, c);
                entries.push(Entry {
                    id,
                    kanji: Vec::new(),
                    readings: vec![to_hiragana(&romaji)],
                    senses: vec![Sense {
                        pos: vec!["n".to_string()],
                        glosses: vec![format!("word number {}", id)],
                    }],
                    frequent: id % 3 == 0,
                });
                id += 1;
            }
        }
    }

    Dictionary::from_entries(entries)
}

fn bench_generate(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate");
    for query in QUERIES {
        let request = SearchRequest::new(*query);
        group.bench_with_input(BenchmarkId::from_parameter(query), &request, |b, request| {
            b.iter(|| generate(black_box(request)))
        });
    }
    group.finish();
}

fn bench_resolve(c: &mut Criterion) {
    let dict = synthetic_dictionary();
    let mut group = c.benchmark_group("resolve");
    for query in ["nekoko", "word number 7", "zzz"] {
        let request = SearchRequest::new(query);
        group.bench_with_input(BenchmarkId::from_parameter(query), &request, |b, request| {
            b.iter(|| resolve(&dict, black_box(request)))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_generate, bench_resolve);
criterion_main!(benches);
