use std::sync::Arc;

use kanal::{AsyncReceiver, AsyncSender};
use kotoba_lang_japanese::{JapaneseEngine, WebTranslator};
use kotoba_types::AppEvent;

use crate::state::AppState;

pub mod history;
pub mod translate;

use history::{
    handle_clear_history, handle_history_request, handle_remove_record, handle_toggle_favorite,
};
use translate::handle_text_input;

/// App's main loop
pub async fn event_loop(
    state: Arc<AppState>,
    ui_to_app_rx: AsyncReceiver<AppEvent>,
    app_to_ui_tx: AsyncSender<AppEvent>,
    engine: Arc<JapaneseEngine>,
    translator: Arc<Option<WebTranslator>>,
) -> anyhow::Result<()> {
    app_to_ui_tx.send(AppEvent::BackendReady).await?;

    tracing::debug!("Event loop started, waiting for events");
    loop {
        let event = ui_to_app_rx.recv().await?;

        handle_events(
            state.clone(),
            &engine,
            translator.as_ref().as_ref(),
            &app_to_ui_tx,
            event,
        )
        .await?;
    }
}

async fn handle_events(
    state: Arc<AppState>,
    engine: &JapaneseEngine,
    translator: Option<&WebTranslator>,
    app_to_ui_tx: &AsyncSender<AppEvent>,
    event: AppEvent,
) -> anyhow::Result<()> {
    match event {
        AppEvent::TextInput(text) => {
            tracing::debug!("TextInput received: {} chars", text.len());

            handle_text_input(text, state, engine, translator, app_to_ui_tx).await?;
        }
        AppEvent::HistoryRequest => {
            handle_history_request(state, app_to_ui_tx).await?;
        }
        AppEvent::ToggleFavorite(id) => {
            handle_toggle_favorite(state, &id, app_to_ui_tx).await?;
        }
        AppEvent::RemoveRecord(id) => {
            handle_remove_record(state, &id, app_to_ui_tx).await?;
        }
        AppEvent::ClearHistory => {
            handle_clear_history(state, app_to_ui_tx).await?;
        }
        AppEvent::ShowTranslation(_)
        | AppEvent::ShowHistory(_)
        | AppEvent::StatusUpdate { .. }
        | AppEvent::BackendReady => {
            // UI-bound events, ignore in backend
        }
    }

    Ok(())
}
