use crate::query::generator::{SearchRequest, generate};
use crate::query::types::{Condition, EntryId, LookupResult, MatchOutcome};
use tracing::debug;

/// Something that can run one condition against a dictionary
pub trait Matcher {
    /// Identifiers of the entries matching `condition`, in a stable order
    fn find(&self, condition: &Condition) -> LookupResult<Vec<EntryId>>;
}

impl<F> Matcher for F
where
    F: Fn(&Condition) -> LookupResult<Vec<EntryId>>,
{
    fn find(&self, condition: &Condition) -> LookupResult<Vec<EntryId>> {
        self(condition)
    }
}

/// Try conditions in order and keep the first one that matches anything.
///
/// Conditions after the winner are never evaluated. A matcher error aborts the
/// whole cascade.
pub fn guess<M: Matcher + ?Sized>(matcher: &M, conditions: &[Condition]) -> LookupResult<MatchOutcome> {
    for (index, condition) in conditions.iter().enumerate() {
        let entries = matcher.find(condition)?;
        debug!(index, %condition, hits = entries.len(), "tried condition");

        if !entries.is_empty() {
            debug!(%condition, "condition matched");
            return Ok(MatchOutcome {
                condition: Some(condition.clone()),
                entries,
            });
        }
    }

    debug!(tried = conditions.len(), "no condition matched");
    Ok(MatchOutcome::not_found())
}

/// Generate conditions for a request and run them through [`guess`]
pub fn resolve<M: Matcher + ?Sized>(matcher: &M, request: &SearchRequest) -> LookupResult<MatchOutcome> {
    let conditions = generate(request)?;
    guess(matcher, &conditions)
}
