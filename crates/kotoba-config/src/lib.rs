use serde::{Deserialize, Serialize};

use self::dictionary::DictionaryConfig;
use self::storage::StorageConfig;
use self::translator::TranslatorConfig;

pub mod dictionary;
pub mod storage;
pub mod translator;

#[derive(Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct Config {
    pub dictionary: DictionaryConfig,
    pub storage: StorageConfig,
    pub translator: TranslatorConfig,
}

impl Config {
    pub fn new() -> Self {
        Config {
            dictionary: DictionaryConfig::default(),
            storage: StorageConfig::new(),
            translator: TranslatorConfig::default(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
