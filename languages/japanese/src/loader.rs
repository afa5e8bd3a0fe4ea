use std::path::Path;

use kotoba_core::dictionary::LoadError;

use crate::phrasebook::PhraseBook;
use crate::readings::ReadingBook;
use crate::wordbook::WordBook;

/// Loads the three lexicon books, embedded or from files
pub struct LexiconLoader;

impl LexiconLoader {
    /// Load the embedded phrasebook
    pub fn load_embedded_phrases() -> Result<PhraseBook, LoadError> {
        let json = include_str!("../data/phrases.json");
        let book = PhraseBook::from_json(json)?;
        tracing::info!("Loaded {} embedded phrase entries", book.entry_count());
        Ok(book)
    }

    /// Load the embedded wordbook
    pub fn load_embedded_words() -> Result<WordBook, LoadError> {
        let tsv = include_str!("../data/words.tsv");
        let book = WordBook::from_tsv(tsv)?;
        tracing::info!("Loaded {} embedded word entries", book.entry_count());
        Ok(book)
    }

    /// Load the embedded reading table
    pub fn load_embedded_readings() -> Result<ReadingBook, LoadError> {
        let tsv = include_str!("../data/readings.tsv");
        let book = ReadingBook::from_tsv(tsv)?;
        tracing::info!("Loaded {} embedded reading entries", book.entry_count());
        Ok(book)
    }

    /// Load a phrasebook from a JSON file
    pub fn phrases_from_file(path: &Path) -> Result<PhraseBook, LoadError> {
        tracing::info!("Loading phrases from file: {}", path.display());
        let json = std::fs::read_to_string(path)?;
        let book = PhraseBook::from_json(&json)?;
        tracing::info!("Loaded {} phrase entries from file", book.entry_count());
        Ok(book)
    }

    /// Load a wordbook from a TSV file
    pub fn words_from_file(path: &Path) -> Result<WordBook, LoadError> {
        tracing::info!("Loading words from file: {}", path.display());
        let tsv = std::fs::read_to_string(path)?;
        let book = WordBook::from_tsv(&tsv)?;
        tracing::info!("Loaded {} word entries from file", book.entry_count());
        Ok(book)
    }

    /// Load a reading table from a TSV file
    pub fn readings_from_file(path: &Path) -> Result<ReadingBook, LoadError> {
        tracing::info!("Loading readings from file: {}", path.display());
        let tsv = std::fs::read_to_string(path)?;
        let book = ReadingBook::from_tsv(&tsv)?;
        tracing::info!("Loaded {} reading entries from file", book.entry_count());
        Ok(book)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_books_load() {
        let phrases = LexiconLoader::load_embedded_phrases().unwrap();
        let words = LexiconLoader::load_embedded_words().unwrap();
        let readings = LexiconLoader::load_embedded_readings().unwrap();

        assert!(phrases.entry_count() > 40);
        assert!(words.entry_count() > 80);
        assert!(readings.entry_count() > 60);
    }
}
