use kanal::{AsyncReceiver, AsyncSender};
use kotoba_core::language::FuriganaToken;
use kotoba_types::{AppEvent, TranslationRecord};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio_util::sync::CancellationToken;

/// Console REPL: lines go to the backend as events, results come back on
/// the app-to-ui channel
pub async fn ui_loop(
    app_to_ui_rx: AsyncReceiver<AppEvent>,
    ui_to_app_tx: AsyncSender<AppEvent>,
    cancel: CancellationToken,
) -> anyhow::Result<()> {
    let stdin = BufReader::new(tokio::io::stdin());
    let mut lines = stdin.lines();

    // indices shown by the last :history, for :fav/:rm by number
    let mut last_shown: Vec<TranslationRecord> = Vec::new();

    loop {
        tokio::select! {
            event = app_to_ui_rx.recv() => {
                render_event(event?, &mut last_shown);
            }
            line = lines.next_line() => {
                match line? {
                    Some(line) => {
                        if !handle_line(line.trim(), &ui_to_app_tx, &last_shown).await? {
                            break;
                        }
                    }
                    // stdin closed
                    None => break,
                }
            }
            _ = cancel.cancelled() => break,
        }
    }

    tracing::debug!("UI loop stopping");
    Ok(())
}

/// Returns false when the session should end
async fn handle_line(
    line: &str,
    ui_to_app_tx: &AsyncSender<AppEvent>,
    last_shown: &[TranslationRecord],
) -> anyhow::Result<bool> {
    match line {
        "" => {}
        ":quit" | ":q" => return Ok(false),
        ":history" | ":h" => {
            ui_to_app_tx.send(AppEvent::HistoryRequest).await?;
        }
        ":clear" => {
            ui_to_app_tx.send(AppEvent::ClearHistory).await?;
        }
        _ => {
            if let Some(arg) = line.strip_prefix(":fav ") {
                match record_id(arg, last_shown) {
                    Some(id) => {
                        ui_to_app_tx.send(AppEvent::ToggleFavorite(id)).await?;
                    }
                    None => println!("no such entry; run :history first"),
                }
            } else if let Some(arg) = line.strip_prefix(":rm ") {
                match record_id(arg, last_shown) {
                    Some(id) => {
                        ui_to_app_tx.send(AppEvent::RemoveRecord(id)).await?;
                    }
                    None => println!("no such entry; run :history first"),
                }
            } else if line.starts_with(':') {
                println!("commands: :history  :fav <n>  :rm <n>  :clear  :quit");
            } else {
                ui_to_app_tx
                    .send(AppEvent::TextInput(line.to_string()))
                    .await?;
            }
        }
    }

    Ok(true)
}

/// Map a 1-based :history index to a record id
fn record_id(arg: &str, last_shown: &[TranslationRecord]) -> Option<String> {
    let index: usize = arg.trim().parse().ok()?;
    last_shown
        .get(index.checked_sub(1)?)
        .map(|r| r.id.clone())
}

fn render_event(event: AppEvent, last_shown: &mut Vec<TranslationRecord>) {
    match event {
        AppEvent::BackendReady => {
            println!("kotoba: type an English phrase, :history, :fav <n>, :rm <n>, :clear, :quit");
        }
        AppEvent::ShowTranslation(record) => {
            println!("{}", record.japanese);
            println!("  {}", format_furigana(&record.furigana));
        }
        AppEvent::ShowHistory(records) => {
            if records.is_empty() {
                println!("history is empty");
            } else {
                for (i, record) in records.iter().enumerate() {
                    let star = if record.is_favorite { "★" } else { " " };
                    println!(
                        "{:>3}. {} {} → {}",
                        i + 1,
                        star,
                        record.english,
                        format_furigana(&record.furigana)
                    );
                }
            }
            *last_shown = records;
        }
        AppEvent::StatusUpdate { message } => {
            println!("{message}");
        }
        _ => {}
    }
}

/// Inline reading notation: annotated runs as base(reading), plain runs
/// verbatim
pub fn format_furigana(tokens: &[FuriganaToken]) -> String {
    let mut out = String::new();
    for token in tokens {
        match token {
            FuriganaToken::Plain(text) => out.push_str(text),
            FuriganaToken::Annotated(base, reading) => {
                out.push_str(base);
                out.push('(');
                out.push_str(reading);
                out.push(')');
            }
        }
    }
    out
}
