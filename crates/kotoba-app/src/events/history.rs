use std::sync::Arc;

use kanal::AsyncSender;
use kotoba_types::AppEvent;

use crate::state::AppState;

pub async fn handle_history_request(
    state: Arc<AppState>,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let records = {
        let history = state.history.lock().await;
        history.records().to_vec()
    };

    app_to_ui_tx.send(AppEvent::ShowHistory(records)).await?;
    Ok(())
}

pub async fn handle_toggle_favorite(
    state: Arc<AppState>,
    id: &str,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let toggled = {
        let mut history = state.history.lock().await;
        history.toggle_favorite(id)
    };

    let message = match toggled {
        Some(true) => "Added to favorites".to_string(),
        Some(false) => "Removed from favorites".to_string(),
        None => format!("No record with id {id}"),
    };

    app_to_ui_tx
        .send(AppEvent::StatusUpdate { message })
        .await?;
    Ok(())
}

pub async fn handle_remove_record(
    state: Arc<AppState>,
    id: &str,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let removed = {
        let mut history = state.history.lock().await;
        history.remove(id)
    };

    let message = if removed {
        "Removed from history".to_string()
    } else {
        format!("No record with id {id}")
    };

    app_to_ui_tx
        .send(AppEvent::StatusUpdate { message })
        .await?;
    Ok(())
}

pub async fn handle_clear_history(
    state: Arc<AppState>,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let remaining = {
        let mut history = state.history.lock().await;
        history.clear();
        history.len()
    };

    let message = if remaining > 0 {
        format!("History cleared ({remaining} favorites kept)")
    } else {
        "History cleared".to_string()
    };

    app_to_ui_tx
        .send(AppEvent::StatusUpdate { message })
        .await?;
    Ok(())
}
