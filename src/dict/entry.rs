use crate::query::types::{EntryId, Field};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One dictionary entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub id: EntryId,
    /// Written forms (kanji, possibly with kana)
    #[serde(default)]
    pub kanji: Vec<String>,
    /// Readings in kana
    #[serde(default)]
    pub readings: Vec<String>,
    #[serde(default)]
    pub senses: Vec<Sense>,
    /// Common word (marked "(P)" in EDICT)
    #[serde(default)]
    pub frequent: bool,
}

/// A group of glosses sharing parts of speech
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Sense {
    /// Part-of-speech and usage abbreviations
    #[serde(default)]
    pub pos: Vec<String>,
    #[serde(default)]
    pub glosses: Vec<String>,
}

impl Entry {
    /// Every text value stored under `field`
    pub fn values(&self, field: Field) -> Vec<&str> {
        match field {
            Field::Kanji => self.kanji.iter().map(String::as_str).collect(),
            Field::Reading => self.readings.iter().map(String::as_str).collect(),
            Field::Gloss => self
                .senses
                .iter()
                .flat_map(|sense| sense.glosses.iter().map(String::as_str))
                .collect(),
        }
    }
}

/// On-disk dictionary layout
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DictionaryFile {
    #[serde(default)]
    pub version: String,
    /// Abbreviation to its meaning
    #[serde(default)]
    pub abbreviations: BTreeMap<String, String>,
    pub entries: Vec<Entry>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_values_per_field() {
        let entry = Entry {
            id: 1,
            kanji: vec!["猫".to_string()],
            readings: vec!["ねこ".to_string()],
            senses: vec![
                Sense {
                    pos: vec!["n".to_string()],
                    glosses: vec!["cat".to_string()],
                },
                Sense {
                    pos: vec![],
                    glosses: vec!["geisha".to_string(), "shamisen player".to_string()],
                },
            ],
            frequent: true,
        };

        assert_eq!(entry.values(Field::Kanji), vec!["猫"]);
        assert_eq!(entry.values(Field::Reading), vec!["ねこ"]);
        assert_eq!(entry.values(Field::Gloss), vec!["cat", "geisha", "shamisen player"]);
    }

    #[test]
    fn test_parse_minimal_file() {
        let file: DictionaryFile =
            serde_json::from_str(r#"{"entries": [{"id": 5, "readings": ["ねこ"]}]}"#).unwrap();
        assert_eq!(file.entries.len(), 1);
        assert!(file.entries[0].kanji.is_empty());
        assert!(!file.entries[0].frequent);
        assert!(file.abbreviations.is_empty());
    }
}
