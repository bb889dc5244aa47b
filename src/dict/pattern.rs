use crate::query::types::{Condition, Extent, LookupError, LookupResult};
use regex::{Regex, RegexBuilder};

/// Regex source for a condition, with the extent turned into anchors
pub fn pattern_source(condition: &Condition) -> String {
    let body = if condition.regexp() {
        format!("(?:{})", condition.query())
    } else {
        regex::escape(condition.query())
    };

    match condition.extent() {
        Extent::Whole => format!("^{}$", body),
        Extent::Beginning => format!("^{}", body),
        Extent::Word => format!(r"\b{}\b", body),
        Extent::Partial => body,
    }
}

/// Compile a condition into the regex used to test field values.
///
/// A regexp query must compile on its own before it is grouped and anchored,
/// so an unbalanced group cannot escape the extent.
pub fn compile(condition: &Condition) -> LookupResult<Regex> {
    if condition.regexp() {
        Regex::new(condition.query()).map_err(|e| invalid(condition, e))?;
    }

    RegexBuilder::new(&pattern_source(condition))
        .case_insensitive(!condition.case_sensitive())
        .build()
        .map_err(|e| invalid(condition, e))
}

fn invalid(condition: &Condition, e: regex::Error) -> LookupError {
    LookupError::InvalidPattern {
        pattern: condition.query().to_string(),
        message: e.to_string(),
    }
}
