use std::sync::Arc;

use clap::{Parser, Subcommand};
use kotoba_config::Config;
use kotoba_core::language::LanguageEngine;
use kotoba_lang_japanese::{JapaneseEngine, WebTranslator};
use kotoba_storage::{FileStorage, HistoryStore, MemoryStorage, Storage};
use kotoba_types::TranslationRecord;
use tokio::signal;

pub mod controller;
pub mod events;
pub mod profile;
pub mod state;
pub mod ui;

#[cfg(test)]
mod tests;

use self::controller::AppController;
use self::state::AppState;

#[derive(Parser)]
#[command(name = "kotoba", about = "English→Japanese phrasebook with furigana")]
struct Cli {
    /// Config profile name
    #[arg(long, default_value = "main")]
    profile: String,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Translate a phrase and record it in history
    Translate { text: Vec<String> },
    /// Annotate Japanese text with readings
    Segment { text: Vec<String> },
    /// Show stored history
    History {
        /// Only favorited records
        #[arg(long)]
        favorites: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let cli = Cli::parse();

    if let Err(e) = profile::init_user_config() {
        tracing::warn!("Could not initialize user config: {}", e);
    }
    let config = profile::load_user_profile(&cli.profile).unwrap_or_else(|e| {
        tracing::warn!("Could not load profile '{}': {}", cli.profile, e);
        Config::new()
    });

    let engine = Arc::new(build_engine(&config));
    let history = open_history(&config);

    match cli.command {
        Some(Command::Translate { text }) => {
            translate_once(&config, &engine, history, &text.join(" ")).await
        }
        Some(Command::Segment { text }) => {
            let text = engine.normalize(&text.join(" "));
            let tokens = engine.segment(&text);
            println!("{}", ui::format_furigana(&tokens));
            Ok(())
        }
        Some(Command::History { favorites }) => {
            let records = if favorites {
                history.favorites()
            } else {
                history.records().to_vec()
            };
            for record in &records {
                let star = if record.is_favorite { "★" } else { " " };
                println!(
                    "{} {} → {}",
                    star,
                    record.english,
                    ui::format_furigana(&record.furigana)
                );
            }
            Ok(())
        }
        None => run(config, engine, history).await,
    }
}

/// Interactive session: controller spawns the event and UI loops
async fn run(
    config: Config,
    engine: Arc<JapaneseEngine>,
    history: HistoryStore,
) -> anyhow::Result<()> {
    let translator = Arc::new(build_translator(&config));
    let state = Arc::new(AppState::new(config, history));

    let controller = AppController::new(Arc::clone(&state));
    let mut tasks = controller.spawn_tasks(engine, translator);

    tokio::select! {
        _ = signal::ctrl_c() => {
            tracing::info!("Shutdown requested");
            controller.shutdown();
        }
        result = tasks.join_next() => {
            match result {
                Some(Ok(Ok(()))) => tracing::debug!("task finished"),
                Some(Ok(Err(e))) => tracing::error!("task exited: {e}"),
                Some(Err(e)) => tracing::error!("task panicked: {e}"),
                None => {}
            }
            controller.shutdown();
        }
    }

    Ok(())
}

/// One-shot translate: same resolution path as the event loop, then exit
async fn translate_once(
    config: &Config,
    engine: &JapaneseEngine,
    mut history: HistoryStore,
    text: &str,
) -> anyhow::Result<()> {
    let translator = build_translator(config);

    let result = events::translate::translate_text(
        engine,
        translator.as_ref(),
        &config.translator.from_lang,
        &config.translator.to_lang,
        text,
    )
    .await?;

    let record = TranslationRecord::new(text.trim(), result);
    println!("{}", record.japanese);
    println!("{}", ui::format_furigana(&record.furigana));

    history.add(record);
    Ok(())
}

fn build_engine(config: &Config) -> JapaneseEngine {
    if config.dictionary.enabled {
        JapaneseEngine::with_additional_dicts(
            &config.dictionary.phrase_paths,
            &config.dictionary.word_paths,
            &config.dictionary.reading_paths,
        )
    } else {
        tracing::warn!("Additional dictionaries disabled, embedded lexicon only");
        JapaneseEngine::new()
    }
}

fn build_translator(config: &Config) -> Option<WebTranslator> {
    if config.translator.enabled {
        Some(WebTranslator::new(config.translator.api_url.clone()))
    } else {
        None
    }
}

fn open_history(config: &Config) -> HistoryStore {
    let storage: Box<dyn Storage> = if config.storage.enabled {
        let dir = config
            .storage
            .data_dir
            .clone()
            .map(std::path::PathBuf::from)
            .unwrap_or_else(profile::storage_dir);

        match FileStorage::new(&dir) {
            Ok(storage) => Box::new(storage),
            Err(e) => {
                tracing::warn!("Falling back to in-memory history ({e})");
                Box::new(MemoryStorage::new())
            }
        }
    } else {
        Box::new(MemoryStorage::new())
    };

    HistoryStore::new(storage, config.storage.history_limit)
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    // human-readable on a terminal, JSON when piped
    if atty::is(atty::Stream::Stdout) {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    } else {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    }
}
