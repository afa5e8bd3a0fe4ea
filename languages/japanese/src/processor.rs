use std::path::Path;

use kotoba_core::dictionary::Dictionary;
use kotoba_core::error::ResolveError;
use kotoba_core::language::{FuriganaToken, LanguageEngine, TranslationResult};
use unicode_normalization::UnicodeNormalization;

use crate::loader::LexiconLoader;
use crate::phrasebook::PhraseBook;
use crate::readings::ReadingBook;
use crate::resolver::PhraseResolver;
use crate::wordbook::WordBook;

/// Japanese language engine: embedded lexicon plus any configured extras
pub struct JapaneseEngine {
    resolver: PhraseResolver,
}

impl JapaneseEngine {
    /// Create a new engine with default configuration (embedded lexicon)
    pub fn new() -> Self {
        Self::with_additional_dicts(&[], &[], &[])
    }

    /// Create a new engine, merging additional dictionary files over the
    /// embedded lexicon (later files win on key clashes)
    pub fn with_additional_dicts(
        phrase_paths: &[String],
        word_paths: &[String],
        reading_paths: &[String],
    ) -> Self {
        let mut phrases = LexiconLoader::load_embedded_phrases().unwrap_or_else(|e| {
            tracing::error!("Failed to load embedded phrasebook: {}", e);
            tracing::warn!("Starting with empty phrasebook");
            PhraseBook::new()
        });
        let mut words = LexiconLoader::load_embedded_words().unwrap_or_else(|e| {
            tracing::error!("Failed to load embedded wordbook: {}", e);
            tracing::warn!("Starting with empty wordbook");
            WordBook::new()
        });
        let mut readings = LexiconLoader::load_embedded_readings().unwrap_or_else(|e| {
            tracing::error!("Failed to load embedded readings: {}", e);
            tracing::warn!("Starting with empty readings");
            ReadingBook::new()
        });

        for path in phrase_paths {
            match LexiconLoader::phrases_from_file(Path::new(path)) {
                Ok(additional) => phrases = phrases.merge(additional),
                Err(e) => tracing::warn!("Failed to load phrases from {}: {}", path, e),
            }
        }
        for path in word_paths {
            match LexiconLoader::words_from_file(Path::new(path)) {
                Ok(additional) => words = words.merge(additional),
                Err(e) => tracing::warn!("Failed to load words from {}: {}", path, e),
            }
        }
        for path in reading_paths {
            match LexiconLoader::readings_from_file(Path::new(path)) {
                Ok(additional) => readings = readings.merge(additional),
                Err(e) => tracing::warn!("Failed to load readings from {}: {}", path, e),
            }
        }

        for meta in [phrases.metadata(), words.metadata(), readings.metadata()] {
            tracing::info!("{} ready: {} entries", meta.name, meta.entry_count);
        }

        Self {
            resolver: PhraseResolver::new(phrases, words, readings),
        }
    }

    /// The curated lookup tiers only (exact phrase + special cases), for
    /// callers that interpose their own provider before composition
    pub fn lookup_phrase(&self, normalized: &str) -> Option<TranslationResult> {
        self.resolver.lookup_phrase(normalized)
    }

    /// Normalize raw English input to its lookup key
    pub fn normalize_input(&self, input: &str) -> String {
        self.resolver.normalize(input)
    }
}

impl Default for JapaneseEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl LanguageEngine for JapaneseEngine {
    fn language_code(&self) -> &str {
        "ja"
    }

    fn normalize(&self, text: &str) -> String {
        text.nfkc()
            .collect::<String>()
            .chars()
            .filter(|c| !c.is_whitespace() || *c == ' ')
            .collect()
    }

    fn resolve(&self, phrase: &str) -> Result<TranslationResult, ResolveError> {
        self.resolver.resolve(phrase)
    }

    fn segment(&self, text: &str) -> Vec<FuriganaToken> {
        self.resolver.segment(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn engine_resolves_and_segments() {
        let engine = JapaneseEngine::new();

        let result = engine.resolve("train").unwrap();
        assert_eq!(result.japanese, "電車");

        let tokens = engine.segment("電車");
        assert_eq!(tokens, vec![FuriganaToken::annotated("電車", "でんしゃ")]);
    }

    #[test]
    fn additional_dict_overrides_embedded_entry() {
        let dir = std::env::temp_dir().join(format!("kotoba-dict-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("extra_words.tsv");
        std::fs::write(&path, "water\tお水\n").unwrap();

        let engine = JapaneseEngine::with_additional_dicts(
            &[],
            &[path.to_string_lossy().into_owned()],
            &[],
        );

        // the phrasebook tier still wins for "water"; composition shows the override
        let composed = engine.resolve("good water").unwrap();
        assert_eq!(composed.japanese, "いいお水");

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn missing_additional_dict_degrades_gracefully() {
        let engine = JapaneseEngine::with_additional_dicts(
            &["/nonexistent/phrases.json".to_string()],
            &[],
            &[],
        );
        assert_eq!(engine.resolve("hello").unwrap().japanese, "こんにちは");
    }

    #[test]
    fn japanese_normalize_keeps_spaces_drops_newlines() {
        let engine = JapaneseEngine::new();
        assert_eq!(engine.normalize("電車 で\n行く"), "電車 で行く");
    }
}
