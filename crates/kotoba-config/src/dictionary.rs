use serde::{Deserialize, Serialize};

fn default_enabled() -> bool {
    true
}

#[derive(Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct DictionaryConfig {
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    /// Extra phrase files (JSON) merged over the embedded phrasebook
    #[serde(default)]
    pub phrase_paths: Vec<String>,
    /// Extra word files (TSV) merged over the embedded wordbook
    #[serde(default)]
    pub word_paths: Vec<String>,
    /// Extra reading files (TSV) merged over the embedded readings
    #[serde(default)]
    pub reading_paths: Vec<String>,
}

impl Default for DictionaryConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            phrase_paths: vec![],
            word_paths: vec![],
            reading_paths: vec![],
        }
    }
}
