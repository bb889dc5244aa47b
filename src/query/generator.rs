use crate::query::classifier::{classify, detect_case_sensitive, has_regexp_special, is_romaji};
use crate::query::expander::splice_kana_variants;
use crate::query::types::{Condition, Extent, Field, LookupError, LookupResult};
use tracing::trace;

/// What the caller asked for, before any guessing.
///
/// `None` for field or extent means "auto": let the generator try every
/// sensible value in priority order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchRequest {
    pub query: String,
    pub field: Option<Field>,
    pub extent: Option<Extent>,
    /// Force regular expression matching
    pub regexp: bool,
    /// Explicit case sensitivity; derived from the query when unset
    pub case_sensitive: Option<bool>,
    pub frequent_only: bool,
}

impl SearchRequest {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..Self::default()
        }
    }

    pub fn with_field(mut self, field: Field) -> Self {
        self.field = Some(field);
        self
    }

    pub fn with_extent(mut self, extent: Extent) -> Self {
        self.extent = Some(extent);
        self
    }

    pub fn with_regexp(mut self, regexp: bool) -> Self {
        self.regexp = regexp;
        self
    }

    pub fn with_case_sensitive(mut self, case_sensitive: bool) -> Self {
        self.case_sensitive = Some(case_sensitive);
        self
    }

    pub fn with_frequent_only(mut self, frequent_only: bool) -> Self {
        self.frequent_only = frequent_only;
        self
    }

    /// Case sensitivity after applying the uppercase rule
    pub fn effective_case_sensitive(&self) -> bool {
        self.case_sensitive
            .unwrap_or_else(|| detect_case_sensitive(self.query.trim()))
    }
}

/// Build the ordered list of conditions to try for a request.
///
/// Iteration runs regexp mode, then extent, then field (outermost first), so
/// every literal attempt precedes every pattern attempt, and a whole-field
/// match in any field beats a partial match.
pub fn generate(request: &SearchRequest) -> LookupResult<Vec<Condition>> {
    let query = request.query.trim();
    if query.is_empty() {
        return Err(LookupError::EmptyQuery);
    }

    let case_sensitive = request.effective_case_sensitive();

    let fields: Vec<Field> = match request.field {
        Some(field) => vec![field],
        None => classify(query).to_vec(),
    };

    let extents: &[Extent] = match &request.extent {
        Some(extent) => std::slice::from_ref(extent),
        None => &Extent::AUTO,
    };

    let regexp_modes: &[bool] = if request.regexp {
        &[true]
    } else if has_regexp_special(query) {
        &[false, true]
    } else {
        &[false]
    };

    let mut conditions = Vec::with_capacity(regexp_modes.len() * extents.len() * fields.len());
    for &regexp in regexp_modes {
        for &extent in extents {
            for &field in &fields {
                let extent = if extent == Extent::Word && !field.has_words() {
                    if request.extent.is_none() {
                        // whole already covers this field in the same pass
                        continue;
                    }
                    Extent::Whole
                } else {
                    extent
                };

                conditions.push(Condition::new(
                    field,
                    extent,
                    regexp,
                    query,
                    case_sensitive,
                    request.frequent_only,
                ));
            }
        }
    }

    if matches!(request.field, None | Some(Field::Reading)) && is_romaji(query) {
        conditions = splice_kana_variants(conditions, query);
    }

    trace!(query, count = conditions.len(), "generated conditions");
    Ok(conditions)
}
