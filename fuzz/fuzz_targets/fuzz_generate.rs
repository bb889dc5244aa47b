#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    // Generation must not panic on arbitrary queries, and the cascade must
    // survive whatever patterns come out of it
    let request = kotoba::query::SearchRequest::new(data);
    if let Ok(conditions) = kotoba::query::generate(&request) {
        for condition in &conditions {
            let _ = kotoba::dict::compile(condition);
        }
    }
});
