use crate::dict::entry::{DictionaryFile, Entry};
use crate::dict::pattern::compile;
use crate::query::cascade::Matcher;
use crate::query::types::{Condition, EntryId, Extent, Field, LookupError, LookupResult};
use rustc_hash::FxHashMap;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use tracing::debug;

/// In-memory dictionary that answers search conditions
pub struct Dictionary {
    version: String,
    abbreviations: BTreeMap<String, String>,
    /// Sorted by id
    entries: Vec<Entry>,
    by_id: FxHashMap<EntryId, usize>,
    /// Lowercased field value to entry positions, for whole-field literals
    exact: FxHashMap<(Field, String), Vec<usize>>,
}

impl Dictionary {
    /// Load a dictionary file
    pub fn open(path: &Path) -> LookupResult<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            LookupError::MatcherUnavailable(format!("cannot read {}: {}", path.display(), e))
        })?;
        let file: DictionaryFile = serde_json::from_str(&content).map_err(|e| {
            LookupError::MatcherUnavailable(format!("cannot parse {}: {}", path.display(), e))
        })?;

        let dict = Self::from_file(file);
        debug!(path = %path.display(), entries = dict.len(), "loaded dictionary");
        Ok(dict)
    }

    pub fn from_file(file: DictionaryFile) -> Self {
        let mut dict = Self::from_entries(file.entries);
        dict.version = file.version;
        dict.abbreviations = file.abbreviations;
        dict
    }

    pub fn from_entries(mut entries: Vec<Entry>) -> Self {
        entries.sort_by_key(|e| e.id);

        let mut by_id = FxHashMap::default();
        let mut exact: FxHashMap<(Field, String), Vec<usize>> = FxHashMap::default();

        for (pos, entry) in entries.iter().enumerate() {
            by_id.entry(entry.id).or_insert(pos);
            for field in [Field::Kanji, Field::Reading, Field::Gloss] {
                for value in entry.values(field) {
                    let positions = exact.entry((field, value.to_lowercase())).or_default();
                    if positions.last() != Some(&pos) {
                        positions.push(pos);
                    }
                }
            }
        }

        Self {
            version: String::new(),
            abbreviations: BTreeMap::new(),
            entries,
            by_id,
            exact,
        }
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up an entry returned by [`Matcher::find`]
    pub fn fetch(&self, id: EntryId) -> Option<&Entry> {
        self.by_id.get(&id).map(|&pos| &self.entries[pos])
    }

    pub fn abbreviations(&self) -> &BTreeMap<String, String> {
        &self.abbreviations
    }

    pub fn abbreviation(&self, abbrev: &str) -> Option<&str> {
        self.abbreviations.get(abbrev).map(String::as_str)
    }

    /// Whole-field literal lookup through the exact index
    fn find_exact(&self, condition: &Condition) -> Vec<EntryId> {
        let field = condition.field();
        let key = (field, condition.query().to_lowercase());

        self.exact
            .get(&key)
            .into_iter()
            .flatten()
            .map(|&pos| &self.entries[pos])
            .filter(|entry| !condition.frequent_only() || entry.frequent)
            .filter(|entry| {
                !condition.case_sensitive() || entry.values(field).contains(&condition.query())
            })
            .map(|entry| entry.id)
            .collect()
    }
}

impl Matcher for Dictionary {
    fn find(&self, condition: &Condition) -> LookupResult<Vec<EntryId>> {
        if condition.extent() == Extent::Whole && !condition.regexp() {
            return Ok(self.find_exact(condition));
        }

        let regex = compile(condition)?;
        let field = condition.field();

        Ok(self
            .entries
            .iter()
            .filter(|entry| !condition.frequent_only() || entry.frequent)
            .filter(|entry| entry.values(field).iter().any(|value| regex.is_match(value)))
            .map(|entry| entry.id)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dict::entry::Sense;

    fn entry(id: EntryId, kanji: &[&str], readings: &[&str], glosses: &[&str], frequent: bool) -> Entry {
        Entry {
            id,
            kanji: kanji.iter().map(|s| s.to_string()).collect(),
            readings: readings.iter().map(|s| s.to_string()).collect(),
            senses: vec![Sense {
                pos: vec!["n".to_string()],
                glosses: glosses.iter().map(|s| s.to_string()).collect(),
            }],
            frequent,
        }
    }

    fn sample() -> Dictionary {
        Dictionary::from_entries(vec![
            entry(30, &["猫舌"], &["ねこじた"], &["cat's tongue", "aversion to hot food"], false),
            entry(10, &["猫"], &["ねこ"], &["cat"], true),
            entry(20, &["東京"], &["とうきょう"], &["Tokyo"], true),
            entry(40, &[], &["キャット"], &["cat (loanword)"], false),
        ])
    }

    fn cond(field: Field, extent: Extent, query: &str) -> Condition {
        Condition::new(field, extent, false, query, false, false)
    }

    #[test]
    fn test_whole_match_uses_index() {
        let dict = sample();
        assert_eq!(dict.find(&cond(Field::Gloss, Extent::Whole, "cat")).unwrap(), vec![10]);
        assert_eq!(dict.find(&cond(Field::Gloss, Extent::Whole, "CAT")).unwrap(), vec![10]);
        assert!(dict.find(&cond(Field::Gloss, Extent::Whole, "ca")).unwrap().is_empty());
    }

    #[test]
    fn test_whole_case_sensitive() {
        let dict = sample();
        let sensitive = Condition::new(Field::Gloss, Extent::Whole, false, "tokyo", true, false);
        assert!(dict.find(&sensitive).unwrap().is_empty());
        let exact = Condition::new(Field::Gloss, Extent::Whole, false, "Tokyo", true, false);
        assert_eq!(dict.find(&exact).unwrap(), vec![20]);
    }

    #[test]
    fn test_word_and_partial_results_in_id_order() {
        let dict = sample();
        assert_eq!(
            dict.find(&cond(Field::Gloss, Extent::Word, "cat")).unwrap(),
            vec![10, 30, 40]
        );
        assert_eq!(
            dict.find(&cond(Field::Kanji, Extent::Partial, "猫")).unwrap(),
            vec![10, 30]
        );
        assert_eq!(
            dict.find(&cond(Field::Reading, Extent::Beginning, "ねこ")).unwrap(),
            vec![10, 30]
        );
    }

    #[test]
    fn test_frequent_only() {
        let dict = sample();
        let condition = Condition::new(Field::Kanji, Extent::Partial, false, "猫", false, true);
        assert_eq!(dict.find(&condition).unwrap(), vec![10]);
    }

    #[test]
    fn test_regexp_condition() {
        let dict = sample();
        let condition = Condition::new(Field::Reading, Extent::Whole, true, "ね.*", false, false);
        assert_eq!(dict.find(&condition).unwrap(), vec![10, 30]);
    }

    #[test]
    fn test_invalid_regexp() {
        let dict = sample();
        let condition = Condition::new(Field::Gloss, Extent::Partial, true, "[cat", false, false);
        assert!(matches!(dict.find(&condition), Err(LookupError::InvalidPattern { .. })));
    }

    #[test]
    fn test_fetch() {
        let dict = sample();
        assert_eq!(dict.fetch(20).map(|e| e.kanji[0].as_str()), Some("東京"));
        assert!(dict.fetch(99).is_none());
    }

    #[test]
    fn test_open_missing_file() {
        let result = Dictionary::open(Path::new("/nonexistent/kotoba/dictionary.json"));
        assert!(matches!(result, Err(LookupError::MatcherUnavailable(_))));
    }
}
