//! Dictionary storage.
//!
//! A [`Dictionary`] is loaded from a JSON file and implements
//! [`Matcher`](crate::query::Matcher), so it can sit behind the guessing
//! cascade directly.
//!
//! ## File format
//!
//! ```json
//! {
//!   "version": "2024-06-01",
//!   "abbreviations": { "n": "noun (common)" },
//!   "entries": [
//!     {
//!       "id": 1464530,
//!       "kanji": ["日本語"],
//!       "readings": ["にほんご"],
//!       "senses": [{ "pos": ["n"], "glosses": ["Japanese (language)"] }],
//!       "frequent": true
//!     }
//!   ]
//! }
//! ```

pub mod entry;
pub mod pattern;
pub mod store;

pub use entry::{DictionaryFile, Entry, Sense};
pub use pattern::{compile, pattern_source};
pub use store::Dictionary;
