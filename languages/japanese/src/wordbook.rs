use std::collections::HashMap;

use kotoba_core::dictionary::{Dictionary, DictionaryMetadata, LoadError};

/// Single-word English→Japanese table, consulted when no phrase matches
pub struct WordBook {
    words: HashMap<String, String>,
}

impl WordBook {
    pub fn new() -> Self {
        Self {
            words: HashMap::new(),
        }
    }

    /// Parse from TSV content (english\tjapanese per line)
    pub fn from_tsv(content: &str) -> Result<Self, LoadError> {
        let mut words = HashMap::new();

        for line in content.lines() {
            let line = line.trim_end();
            if line.is_empty() {
                continue;
            }
            let parts: Vec<&str> = line.split('\t').collect();
            if parts.len() >= 2 {
                words.insert(parts[0].trim().to_lowercase(), parts[1].to_string());
            }
        }

        Ok(Self { words })
    }

    /// Look up the Japanese for a single normalized English word
    pub fn lookup(&self, word: &str) -> Option<&str> {
        self.words.get(word).map(String::as_str)
    }

    pub fn entry_count(&self) -> usize {
        self.words.len()
    }

    /// Merge another wordbook into this one; its entries win on key clashes
    pub fn merge(mut self, other: WordBook) -> Self {
        self.words.extend(other.words);
        self
    }
}

impl Default for WordBook {
    fn default() -> Self {
        Self::new()
    }
}

impl Dictionary for WordBook {
    fn contains(&self, key: &str) -> bool {
        self.words.contains_key(key)
    }

    fn len(&self) -> usize {
        self.words.len()
    }

    fn metadata(&self) -> DictionaryMetadata {
        DictionaryMetadata {
            name: "wordbook".to_string(),
            language: "ja".to_string(),
            entry_count: self.words.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_tsv_lines() {
        let book = WordBook::from_tsv("water\t水\ntrain\t電車\n").unwrap();
        assert_eq!(book.entry_count(), 2);
        assert_eq!(book.lookup("water"), Some("水"));
        assert_eq!(book.lookup("missing"), None);
    }

    #[test]
    fn skips_blank_and_malformed_lines() {
        let book = WordBook::from_tsv("water\t水\n\nnot-a-pair\n").unwrap();
        assert_eq!(book.entry_count(), 1);
    }
}
