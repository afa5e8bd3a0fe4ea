use std::collections::HashMap;

use kotoba_core::dictionary::{Dictionary, DictionaryMetadata, LoadError};

/// Kanji-run → reading table.
///
/// Entries may share a prefix ("電" and "電車" both exist); segmentation
/// must try compounds longest-first, so they are kept pre-sorted by
/// descending character length.
pub struct ReadingBook {
    readings: HashMap<String, String>,
    // (base, reading) pairs for every multi-character entry, longest first
    compounds: Vec<(String, String)>,
}

impl ReadingBook {
    pub fn new() -> Self {
        Self {
            readings: HashMap::new(),
            compounds: Vec::new(),
        }
    }

    /// Parse from TSV content (kanji-run\treading per line)
    pub fn from_tsv(content: &str) -> Result<Self, LoadError> {
        let mut readings = HashMap::new();

        for line in content.lines() {
            let line = line.trim_end();
            if line.is_empty() {
                continue;
            }
            let parts: Vec<&str> = line.split('\t').collect();
            if parts.len() >= 2 {
                readings.insert(parts[0].trim().to_string(), parts[1].to_string());
            }
        }

        Ok(Self::from_map(readings))
    }

    fn from_map(readings: HashMap<String, String>) -> Self {
        let mut compounds: Vec<(String, String)> = readings
            .iter()
            .filter(|(base, _)| base.chars().count() > 1)
            .map(|(base, reading)| (base.clone(), reading.clone()))
            .collect();

        // longest first; ties broken lexicographically so scans are deterministic
        compounds.sort_by(|(a, _), (b, _)| {
            b.chars()
                .count()
                .cmp(&a.chars().count())
                .then_with(|| a.cmp(b))
        });

        Self {
            readings,
            compounds,
        }
    }

    /// Look up the reading for an exact character run
    pub fn lookup(&self, base: &str) -> Option<&str> {
        self.readings.get(base).map(String::as_str)
    }

    /// Multi-character entries, longest first
    pub fn compounds(&self) -> &[(String, String)] {
        &self.compounds
    }

    pub fn entry_count(&self) -> usize {
        self.readings.len()
    }

    /// Merge another reading book into this one; its entries win on key clashes
    pub fn merge(mut self, other: ReadingBook) -> Self {
        self.readings.extend(other.readings);
        Self::from_map(self.readings)
    }
}

impl Default for ReadingBook {
    fn default() -> Self {
        Self::new()
    }
}

impl Dictionary for ReadingBook {
    fn contains(&self, key: &str) -> bool {
        self.readings.contains_key(key)
    }

    fn len(&self) -> usize {
        self.readings.len()
    }

    fn metadata(&self) -> DictionaryMetadata {
        DictionaryMetadata {
            name: "readings".to_string(),
            language: "ja".to_string(),
            entry_count: self.readings.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compounds_are_sorted_longest_first() {
        let book = ReadingBook::from_tsv("電\tでん\n電車\tでんしゃ\n国際\tこくさい\n").unwrap();

        let lengths: Vec<usize> = book
            .compounds()
            .iter()
            .map(|(base, _)| base.chars().count())
            .collect();
        let mut sorted = lengths.clone();
        sorted.sort_by(|a, b| b.cmp(a));
        assert_eq!(lengths, sorted);

        // single-character entries stay out of the compound list
        assert!(book.compounds().iter().all(|(base, _)| base != "電"));
        assert_eq!(book.lookup("電"), Some("でん"));
    }

    #[test]
    fn merge_rebuilds_compound_order() {
        let base = ReadingBook::from_tsv("電\tでん\n").unwrap();
        let extra = ReadingBook::from_tsv("電車\tでんしゃ\n").unwrap();

        let merged = base.merge(extra);
        assert_eq!(merged.entry_count(), 2);
        assert_eq!(merged.compounds().len(), 1);
        assert_eq!(merged.compounds()[0].0, "電車");
    }
}
