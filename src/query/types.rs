use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque identifier of a dictionary entry, as returned by a matcher
pub type EntryId = u64;

/// Dictionary field a condition looks in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Kanji,
    Reading,
    Gloss,
}

impl Field {
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Kanji => "kanji",
            Field::Reading => "reading",
            Field::Gloss => "gloss",
        }
    }

    /// Whether the field has a notion of word boundaries
    pub fn has_words(&self) -> bool {
        matches!(self, Field::Gloss)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How much of a field the query must cover
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Extent {
    /// The entire field
    Whole,
    /// A prefix of the field
    Beginning,
    /// A whole word inside the field
    Word,
    /// Anywhere, even inside words
    Partial,
}

impl Extent {
    /// Extents tried, in order, when the caller did not pick one
    pub const AUTO: [Extent; 3] = [Extent::Whole, Extent::Word, Extent::Partial];

    pub fn as_str(&self) -> &'static str {
        match self {
            Extent::Whole => "whole",
            Extent::Beginning => "beginning",
            Extent::Word => "word",
            Extent::Partial => "partial",
        }
    }
}

impl fmt::Display for Extent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One concrete search strategy: the unit of work sent to a matcher.
///
/// Conditions are values. Nothing mutates one after construction; variants
/// are derived with [`Condition::with_query`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Condition {
    field: Field,
    extent: Extent,
    regexp: bool,
    query: String,
    case_sensitive: bool,
    frequent_only: bool,
}

impl Condition {
    pub fn new(
        field: Field,
        extent: Extent,
        regexp: bool,
        query: impl Into<String>,
        case_sensitive: bool,
        frequent_only: bool,
    ) -> Self {
        Self {
            field,
            extent,
            regexp,
            query: query.into(),
            case_sensitive,
            frequent_only,
        }
    }

    /// Same condition with another query string
    pub fn with_query(&self, query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..self.clone()
        }
    }

    pub fn field(&self) -> Field {
        self.field
    }

    pub fn extent(&self) -> Extent {
        self.extent
    }

    pub fn regexp(&self) -> bool {
        self.regexp
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn case_sensitive(&self) -> bool {
        self.case_sensitive
    }

    pub fn frequent_only(&self) -> bool {
        self.frequent_only
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}{:?}",
            self.field,
            self.extent,
            if self.regexp { "re:" } else { "" },
            self.query
        )?;
        if self.case_sensitive {
            write!(f, " (case-sensitive)")?;
        }
        if self.frequent_only {
            write!(f, " (frequent)")?;
        }
        Ok(())
    }
}

/// Result of running a condition list through the cascade
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MatchOutcome {
    /// The first condition that matched anything; `None` if nothing did
    pub condition: Option<Condition>,
    /// Entries matched by that condition, in matcher order
    pub entries: Vec<EntryId>,
}

impl MatchOutcome {
    pub fn not_found() -> Self {
        Self::default()
    }

    pub fn is_found(&self) -> bool {
        self.condition.is_some()
    }
}

/// Result type for lookups
pub type LookupResult<T> = Result<T, LookupError>;

/// Errors that can occur while resolving a query
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    /// Query was empty after trimming
    EmptyQuery,
    /// A regexp condition carried a pattern the matcher cannot compile
    InvalidPattern { pattern: String, message: String },
    /// The dictionary store could not be reached
    MatcherUnavailable(String),
}

impl fmt::Display for LookupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LookupError::EmptyQuery => write!(f, "Empty query"),
            LookupError::InvalidPattern { pattern, message } => {
                write!(f, "Invalid regular expression {:?}: {}", pattern, message)
            }
            LookupError::MatcherUnavailable(msg) => write!(f, "Dictionary unavailable: {}", msg),
        }
    }
}

impl std::error::Error for LookupError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_query_keeps_other_axes() {
        let cond = Condition::new(Field::Reading, Extent::Partial, true, "nihongo", true, true);
        let derived = cond.with_query("にほんご");

        assert_eq!(derived.query(), "にほんご");
        assert_eq!(derived.field(), Field::Reading);
        assert_eq!(derived.extent(), Extent::Partial);
        assert!(derived.regexp());
        assert!(derived.case_sensitive());
        assert!(derived.frequent_only());
        assert_eq!(cond.query(), "nihongo");
    }

    #[test]
    fn test_condition_serializes_lowercase_names() {
        let cond = Condition::new(Field::Gloss, Extent::Word, false, "cat", false, false);
        let json = serde_json::to_string(&cond).unwrap();
        assert!(json.contains(r#""field":"gloss""#));
        assert!(json.contains(r#""extent":"word""#));
    }

    #[test]
    fn test_not_found_outcome() {
        let outcome = MatchOutcome::not_found();
        assert!(!outcome.is_found());
        assert!(outcome.entries.is_empty());
    }
}
