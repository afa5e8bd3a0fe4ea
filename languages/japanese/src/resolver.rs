use kotoba_core::error::ResolveError;
use kotoba_core::language::{FuriganaToken, TranslationResult};
use kotoba_core::preprocess::{DefaultPreprocessor, Preprocessor};

use crate::furigana;
use crate::phrasebook::PhraseBook;
use crate::readings::ReadingBook;
use crate::transliterate;
use crate::wordbook::WordBook;

// Stripped from both ends of each token during word composition
const PUNCTUATION: &[char] = &['.', ',', '!', '?', ';', ':', '\'', '"', '(', ')'];

/// English→Japanese phrase resolution over the three lexicon books.
///
/// Tiered fallback, first match wins: exact phrase, fixed special cases,
/// word-by-word composition with katakana substitution for unknown words.
/// Never fails for non-empty input.
pub struct PhraseResolver {
    phrases: PhraseBook,
    words: WordBook,
    readings: ReadingBook,
    preprocessor: DefaultPreprocessor,
}

impl PhraseResolver {
    pub fn new(phrases: PhraseBook, words: WordBook, readings: ReadingBook) -> Self {
        Self {
            phrases,
            words,
            readings,
            preprocessor: DefaultPreprocessor,
        }
    }

    /// Resolve an English phrase to annotated Japanese
    pub fn resolve(&self, input: &str) -> Result<TranslationResult, ResolveError> {
        let normalized = self.preprocessor.process(input);
        if normalized.is_empty() {
            return Err(ResolveError::EmptyInput);
        }

        if let Some(result) = self.lookup_phrase(&normalized) {
            return Ok(result);
        }

        Ok(self.compose(&normalized))
    }

    /// The curated tiers only: exact phrasebook entry, then special cases.
    /// Expects an already-normalized phrase; returns None when only the
    /// generic composition tier remains.
    pub fn lookup_phrase(&self, normalized: &str) -> Option<TranslationResult> {
        if let Some(entry) = self.phrases.lookup(normalized) {
            tracing::debug!("phrasebook hit: '{}'", normalized);
            return Some(TranslationResult::new(
                entry.japanese.clone(),
                entry.furigana.clone(),
            ));
        }

        special_case(normalized)
    }

    /// Normalize raw input to the lookup key form
    pub fn normalize(&self, input: &str) -> String {
        self.preprocessor.process(input)
    }

    /// Annotate Japanese text against this resolver's reading book
    pub fn segment(&self, japanese: &str) -> Vec<FuriganaToken> {
        furigana::segment(japanese, &self.readings)
    }

    /// Word-by-word composition; composed output has no pre-attached
    /// furigana, so the result is segmented from the reading book
    fn compose(&self, normalized: &str) -> TranslationResult {
        let mut japanese = String::new();

        for token in normalized.split_whitespace() {
            let cleaned = token.trim_matches(PUNCTUATION);
            if cleaned.is_empty() {
                continue;
            }

            match self.words.lookup(cleaned) {
                Some(word) => japanese.push_str(word),
                None => {
                    tracing::debug!("no word entry for '{}', transliterating", cleaned);
                    japanese.push_str(&transliterate::to_katakana(cleaned));
                }
            }
        }

        let furigana = self.segment(&japanese);
        TranslationResult::new(japanese, furigana)
    }
}

// Fixed overrides for phrases the generic composition tier mangles;
// checked by literal equality after the phrasebook misses
fn special_case(phrase: &str) -> Option<TranslationResult> {
    let result = match phrase {
        "mother" => TranslationResult::new(
            "母親",
            vec![
                FuriganaToken::annotated("母", "はは"),
                FuriganaToken::annotated("親", "おや"),
            ],
        ),
        "west" => TranslationResult::new("西", vec![FuriganaToken::annotated("西", "にし")]),
        "north" => TranslationResult::new("北", vec![FuriganaToken::annotated("北", "きた")]),
        "villain" => TranslationResult::new(
            "悪役",
            vec![
                FuriganaToken::annotated("悪", "あく"),
                FuriganaToken::annotated("役", "やく"),
            ],
        ),
        "train" => TranslationResult::new(
            "電車",
            vec![
                FuriganaToken::annotated("電", "でん"),
                FuriganaToken::annotated("車", "しゃ"),
            ],
        ),
        _ => return None,
    };
    Some(result)
}

#[cfg(test)]
mod tests {
    use crate::loader::LexiconLoader;

    use super::*;

    fn resolver() -> PhraseResolver {
        PhraseResolver::new(
            LexiconLoader::load_embedded_phrases().unwrap(),
            LexiconLoader::load_embedded_words().unwrap(),
            LexiconLoader::load_embedded_readings().unwrap(),
        )
    }

    #[test]
    fn exact_phrase_returns_stored_furigana() {
        let result = resolver().resolve("hello").unwrap();
        assert_eq!(result.japanese, "こんにちは");
        assert_eq!(
            result.furigana,
            vec![
                FuriganaToken::plain("こ"),
                FuriganaToken::plain("ん"),
                FuriganaToken::plain("に"),
                FuriganaToken::plain("ち"),
                FuriganaToken::plain("は"),
            ]
        );
    }

    #[test]
    fn lookup_is_case_and_whitespace_insensitive() {
        let result = resolver().resolve("  Thank You ").unwrap();
        assert_eq!(result.japanese, "ありがとう");
        // stored furigana verbatim, not a recomputed segmentation
        assert_eq!(result.furigana.len(), 5);
    }

    #[test]
    fn single_kanji_phrase_entry() {
        let result = resolver().resolve("water").unwrap();
        assert_eq!(result.japanese, "水");
        assert_eq!(
            result.furigana,
            vec![FuriganaToken::annotated("水", "みず")]
        );
    }

    #[test]
    fn phrase_entry_with_mixed_tokens() {
        let result = resolver().resolve("what is your name").unwrap();
        assert_eq!(result.japanese, "お名前は何ですか");
        assert_eq!(
            result.furigana,
            vec![
                FuriganaToken::plain("お"),
                FuriganaToken::annotated("名前", "なまえ"),
                FuriganaToken::plain("は"),
                FuriganaToken::annotated("何", "なに"),
                FuriganaToken::plain("で"),
                FuriganaToken::plain("す"),
                FuriganaToken::plain("か"),
            ]
        );
    }

    #[test]
    fn composition_concatenates_word_entries() {
        // not in the phrasebook, each word is in the wordbook
        let result = resolver().resolve("good water").unwrap();
        assert_eq!(result.japanese, "いい水");
        assert_eq!(result.surface(), "いい水");
    }

    #[test]
    fn composition_strips_surrounding_punctuation() {
        let result = resolver().resolve("good water!").unwrap();
        assert_eq!(result.japanese, "いい水");
    }

    #[test]
    fn unknown_words_fall_back_to_katakana() {
        let result = resolver().resolve("zzqx").unwrap();
        assert_eq!(result.japanese, "ザザqx");
        assert_eq!(result.surface(), "ザザqx");
    }

    #[test]
    fn empty_input_is_rejected() {
        assert!(matches!(
            resolver().resolve("   "),
            Err(ResolveError::EmptyInput)
        ));
        assert!(matches!(
            resolver().resolve(""),
            Err(ResolveError::EmptyInput)
        ));
    }

    #[test]
    fn resolution_is_deterministic() {
        let resolver = resolver();
        let first = resolver.resolve("do you speak english").unwrap();
        let second = resolver.resolve("do you speak english").unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn composed_output_gets_segmented_readings() {
        // not an exact phrase, so composed word by word
        let result = resolver().resolve("i love you now").unwrap();
        assert_eq!(result.japanese, "私愛あなた今");
        assert!(
            result
                .furigana
                .iter()
                .any(|t| t == &FuriganaToken::annotated("私", "わたし"))
        );
        assert_eq!(result.surface(), result.japanese);
    }
}
