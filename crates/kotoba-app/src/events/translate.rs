use std::sync::Arc;

use kanal::AsyncSender;
use kotoba_core::error::ResolveError;
use kotoba_core::language::{LanguageEngine, TranslationResult};
use kotoba_lang_japanese::{JapaneseEngine, WebTranslator};
use kotoba_translator::Translator;
use kotoba_types::{AppEvent, TranslationRecord};

use crate::state::AppState;

pub async fn handle_text_input(
    text: String,
    state: Arc<AppState>,
    engine: &JapaneseEngine,
    translator: Option<&WebTranslator>,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let (from_lang, to_lang) = {
        let config = state.config.read().await;
        (
            config.translator.from_lang.clone(),
            config.translator.to_lang.clone(),
        )
    };

    let result = match translate_text(engine, translator, &from_lang, &to_lang, &text).await {
        Ok(result) => result,
        Err(ResolveError::EmptyInput) => {
            app_to_ui_tx
                .send(AppEvent::StatusUpdate {
                    message: "Nothing to translate".to_string(),
                })
                .await?;
            return Ok(());
        }
    };

    let record = TranslationRecord::new(text.trim(), result);

    {
        let mut history = state.history.lock().await;
        history.add(record.clone());
    }

    app_to_ui_tx
        .send(AppEvent::ShowTranslation(record))
        .await?;

    Ok(())
}

/// Resolution with an optional live provider wedged between the curated
/// tiers and generic composition.
///
/// The offline chain alone is total; the provider is consulted only after
/// the phrasebook and special cases miss, and any provider error drops
/// straight back to the dictionary path.
pub async fn translate_text(
    engine: &JapaneseEngine,
    translator: Option<&WebTranslator>,
    from_lang: &str,
    to_lang: &str,
    text: &str,
) -> Result<TranslationResult, ResolveError> {
    let normalized = engine.normalize_input(text);
    if normalized.is_empty() {
        return Err(ResolveError::EmptyInput);
    }

    if let Some(result) = engine.lookup_phrase(&normalized) {
        return Ok(result);
    }

    if let Some(provider) = translator {
        match provider
            .translate(text, from_lang.to_string(), to_lang.to_string())
            .await
        {
            Ok(translation) => {
                tracing::debug!("live translation: '{}'", translation.text);
                let japanese = engine.normalize(&translation.text);
                let furigana = engine.segment(&japanese);
                return Ok(TranslationResult::new(japanese, furigana));
            }
            Err(e) => {
                tracing::warn!("Live translation failed, using dictionary only: {}", e);
            }
        }
    }

    engine.resolve(&normalized)
}
