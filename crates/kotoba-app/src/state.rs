use kotoba_config::Config;
use kotoba_storage::HistoryStore;
use tokio::sync::{Mutex, RwLock};

pub struct AppState {
    pub config: RwLock<Config>,
    pub history: Mutex<HistoryStore>,
}

impl AppState {
    pub fn new(config: Config, history: HistoryStore) -> Self {
        Self {
            config: RwLock::new(config),
            history: Mutex::new(history),
        }
    }
}
