//! # kotoba - Japanese dictionary lookup by guessing
//!
//! kotoba takes one free-form query and works out how to search for it: which
//! field (kanji, reading, gloss), how much of the field must match, whether
//! the query is a regular expression, and whether rōmaji should be tried as
//! kana. Each guess is a [`Condition`](query::Condition); conditions are tried
//! in priority order and the first one that matches anything wins.
//!
//! ## Architecture
//!
//! - [`query`] - Classification, condition generation and the matching cascade
//! - [`kana`] - Rōmaji and kana transliteration
//! - [`dict`] - Dictionary file loading and condition matching
//! - [`output`] - Entry formatting (human or tab-separated)
//! - [`utils`] - Configuration and data directory
//!
//! ## Quick Start
//!
//! ```no_run
//! use kotoba::dict::Dictionary;
//! use kotoba::query::{resolve, SearchRequest};
//! use std::path::Path;
//!
//! let dict = Dictionary::open(Path::new("dictionary.json"))?;
//! let outcome = resolve(&dict, &SearchRequest::new("nihongo"))?;
//!
//! if let Some(condition) = &outcome.condition {
//!     println!("matched on {} ({})", condition.field(), condition.extent());
//!     for id in &outcome.entries {
//!         println!("{:?}", dict.fetch(*id));
//!     }
//! }
//! # Ok::<(), kotoba::query::LookupError>(())
//! ```

pub mod dict;
pub mod kana;
pub mod output;
pub mod query;
pub mod utils;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
