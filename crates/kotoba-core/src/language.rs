use serde::{Deserialize, Serialize};

use crate::error::ResolveError;

/// Translation and annotation interface for language implementations
pub trait LanguageEngine: Send + Sync {
    /// Language identifier (ISO 639-1 code: "ja", "zh", "ko", etc.)
    fn language_code(&self) -> &str;

    /// Normalize target-language text (Unicode normalization, whitespace, etc.)
    fn normalize(&self, text: &str) -> String;

    /// Resolve a source-language phrase to annotated target-language text
    fn resolve(&self, phrase: &str) -> Result<TranslationResult, ResolveError>;

    /// Annotate target-language text with readings
    fn segment(&self, text: &str) -> Vec<FuriganaToken>;
}

/// One rendered unit of an annotated text run.
///
/// Serializes to the shape renderers consume: a bare string for plain
/// characters, a two-element array for an annotated run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FuriganaToken {
    /// Characters with no reading attached (kana, punctuation, unmapped)
    Plain(String),
    /// A character run paired with its phonetic reading
    Annotated(String, String),
}

impl FuriganaToken {
    pub fn plain(text: impl Into<String>) -> Self {
        Self::Plain(text.into())
    }

    pub fn annotated(base: impl Into<String>, reading: impl Into<String>) -> Self {
        Self::Annotated(base.into(), reading.into())
    }

    /// The characters this token contributes to the surface string
    pub fn base(&self) -> &str {
        match self {
            Self::Plain(text) => text,
            Self::Annotated(base, _) => base,
        }
    }

    /// The attached reading, if any
    pub fn reading(&self) -> Option<&str> {
        match self {
            Self::Plain(_) => None,
            Self::Annotated(_, reading) => Some(reading),
        }
    }
}

/// Annotated translation output, owned by the caller
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationResult {
    pub japanese: String,
    pub furigana: Vec<FuriganaToken>,
}

impl TranslationResult {
    pub fn new(japanese: impl Into<String>, furigana: Vec<FuriganaToken>) -> Self {
        Self {
            japanese: japanese.into(),
            furigana,
        }
    }

    /// Concatenation of all token bases. Equal to `japanese` for any
    /// result produced by a segmenter or a well-formed dictionary entry.
    pub fn surface(&self) -> String {
        self.furigana.iter().map(FuriganaToken::base).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_serde_matches_wire_format() {
        let plain = FuriganaToken::plain("で");
        assert_eq!(serde_json::to_string(&plain).unwrap(), r#""で""#);

        let annotated = FuriganaToken::annotated("名前", "なまえ");
        assert_eq!(
            serde_json::to_string(&annotated).unwrap(),
            r#"["名前","なまえ"]"#
        );

        let tokens: Vec<FuriganaToken> =
            serde_json::from_str(r#"["お",["名前","なまえ"],"は"]"#).unwrap();
        assert_eq!(
            tokens,
            vec![
                FuriganaToken::plain("お"),
                FuriganaToken::annotated("名前", "なまえ"),
                FuriganaToken::plain("は"),
            ]
        );
    }

    #[test]
    fn surface_concatenates_bases() {
        let result = TranslationResult::new(
            "お名前",
            vec![
                FuriganaToken::plain("お"),
                FuriganaToken::annotated("名前", "なまえ"),
            ],
        );
        assert_eq!(result.surface(), "お名前");
    }
}
