use std::time::{SystemTime, UNIX_EPOCH};

use kotoba_core::language::{FuriganaToken, TranslationResult};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone)]
pub enum AppEvent {
    TextInput(String),
    ShowTranslation(TranslationRecord),
    HistoryRequest,
    ShowHistory(Vec<TranslationRecord>),
    ToggleFavorite(String),
    RemoveRecord(String),
    ClearHistory,
    StatusUpdate {
        message: String,
    },
    BackendReady,
}

/// A stored translation: the engine's output wrapped with identity,
/// timestamp, and favorite flag. Field names match the JSON the original
/// client persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslationRecord {
    pub id: String,
    pub english: String,
    pub japanese: String,
    pub furigana: Vec<FuriganaToken>,
    /// Milliseconds since the Unix epoch
    pub timestamp: u64,
    pub is_favorite: bool,
}

impl TranslationRecord {
    pub fn new(english: impl Into<String>, result: TranslationResult) -> Self {
        let timestamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0);

        Self {
            id: Uuid::new_v4().to_string(),
            english: english.into(),
            japanese: result.japanese,
            furigana: result.furigana,
            timestamp,
            is_favorite: false,
        }
    }
}
