pub mod cascade;
pub mod classifier;
pub mod expander;
pub mod generator;
pub mod types;

pub use cascade::{Matcher, guess, resolve};
pub use classifier::{QueryScript, classify};
pub use expander::{expand, splice_kana_variants};
pub use generator::{SearchRequest, generate};
// Re-exports for public API
pub use types::{Condition, EntryId, Extent, Field, LookupError, LookupResult, MatchOutcome};
