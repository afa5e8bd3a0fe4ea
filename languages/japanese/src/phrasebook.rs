use std::collections::HashMap;

use kotoba_core::dictionary::{Dictionary, DictionaryMetadata, LoadError};
use kotoba_core::language::FuriganaToken;
use serde::Deserialize;

/// A hand-authored phrase translation
#[derive(Debug, Clone)]
pub struct PhraseEntry {
    pub english: String,
    pub japanese: String,
    pub furigana: Vec<FuriganaToken>,
}

// JSON structure for parsing phrase files
#[derive(Debug, Deserialize)]
struct PhraseBookJson {
    phrases: Vec<PhraseJsonEntry>,
}

#[derive(Debug, Deserialize)]
struct PhraseJsonEntry {
    english: String,
    japanese: String,
    furigana: Vec<FuriganaToken>,
}

/// Exact-phrase dictionary keyed by normalized English phrase.
///
/// The only source of pre-validated furigana: entries whose token bases do
/// not reconstruct the Japanese string are rejected at load, as are
/// duplicate keys within one file.
pub struct PhraseBook {
    entries: HashMap<String, PhraseEntry>,
}

impl PhraseBook {
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Load a phrasebook from JSON
    pub fn from_json(json_str: &str) -> Result<Self, LoadError> {
        let data: PhraseBookJson = serde_json::from_str(json_str)?;

        let mut entries = HashMap::new();

        for json_entry in data.phrases {
            let key = json_entry.english.trim().to_lowercase();

            let surface: String = json_entry
                .furigana
                .iter()
                .map(FuriganaToken::base)
                .collect();
            if surface != json_entry.japanese {
                return Err(LoadError::InvalidFormat(format!(
                    "furigana for \"{}\" does not reconstruct \"{}\"",
                    json_entry.english, json_entry.japanese
                )));
            }

            let entry = PhraseEntry {
                english: key.clone(),
                japanese: json_entry.japanese,
                furigana: json_entry.furigana,
            };

            if entries.insert(key.clone(), entry).is_some() {
                return Err(LoadError::InvalidFormat(format!(
                    "duplicate phrase key \"{key}\""
                )));
            }
        }

        Ok(Self { entries })
    }

    /// Look up a phrase by its normalized key
    pub fn lookup(&self, phrase: &str) -> Option<&PhraseEntry> {
        self.entries.get(phrase)
    }

    /// Get the number of entries in the phrasebook
    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }

    /// Merge another phrasebook into this one; its entries win on key clashes
    pub fn merge(mut self, other: PhraseBook) -> Self {
        for (key, entry) in other.entries {
            self.entries.insert(key, entry);
        }
        self
    }
}

impl Default for PhraseBook {
    fn default() -> Self {
        Self::new()
    }
}

impl Dictionary for PhraseBook {
    fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    fn len(&self) -> usize {
        self.entries.len()
    }

    fn metadata(&self) -> DictionaryMetadata {
        DictionaryMetadata {
            name: "phrasebook".to_string(),
            language: "ja".to_string(),
            entry_count: self.entries.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_entries_and_normalizes_keys() {
        let book = PhraseBook::from_json(
            r#"{"phrases":[{"english":"Thank You","japanese":"ありがとう","furigana":["あ","り","が","と","う"]}]}"#,
        )
        .unwrap();

        assert_eq!(book.entry_count(), 1);
        let entry = book.lookup("thank you").unwrap();
        assert_eq!(entry.japanese, "ありがとう");
        assert!(book.lookup("Thank You").is_none());
    }

    #[test]
    fn rejects_duplicate_normalized_keys() {
        let result = PhraseBook::from_json(
            r#"{"phrases":[
                {"english":"yes","japanese":"はい","furigana":["は","い"]},
                {"english":"YES","japanese":"ええ","furigana":["え","え"]}
            ]}"#,
        );

        assert!(matches!(result, Err(LoadError::InvalidFormat(_))));
    }

    #[test]
    fn rejects_furigana_that_does_not_reconstruct() {
        let result = PhraseBook::from_json(
            r#"{"phrases":[{"english":"water","japanese":"水","furigana":[["氷","こおり"]]}]}"#,
        );

        assert!(matches!(result, Err(LoadError::InvalidFormat(_))));
    }

    #[test]
    fn dictionary_view_reports_contents() {
        let book = PhraseBook::from_json(
            r#"{"phrases":[{"english":"yes","japanese":"はい","furigana":["は","い"]}]}"#,
        )
        .unwrap();

        assert!(book.contains("yes"));
        assert!(!book.contains("no"));
        assert_eq!(book.metadata().entry_count, 1);
        assert_eq!(book.metadata().language, "ja");
    }

    #[test]
    fn merge_overrides_existing_entries() {
        let base = PhraseBook::from_json(
            r#"{"phrases":[{"english":"yes","japanese":"はい","furigana":["は","い"]}]}"#,
        )
        .unwrap();
        let extra = PhraseBook::from_json(
            r#"{"phrases":[{"english":"yes","japanese":"ええ","furigana":["え","え"]}]}"#,
        )
        .unwrap();

        let merged = base.merge(extra);
        assert_eq!(merged.entry_count(), 1);
        assert_eq!(merged.lookup("yes").unwrap().japanese, "ええ");
    }
}
