use std::fs::{self, File};
use std::io::BufReader;
use std::path::PathBuf;

use kotoba_config::Config;
use serde::{Deserialize, Serialize};

/// Load the default config shipped in the repo
fn load_repo_default_config() -> anyhow::Result<Config> {
    tracing::info!("Loading repo default config...");
    let file = File::open("config.json")?;
    let reader = BufReader::new(file);
    let config = serde_json::from_reader(reader)?;
    Ok(config)
}

/// Per-user data root: $KOTOBA_HOME, else ~/.kotoba, else ./.kotoba
pub fn data_root() -> PathBuf {
    if let Ok(home) = std::env::var("KOTOBA_HOME") {
        return PathBuf::from(home);
    }
    match std::env::var("HOME") {
        Ok(home) => PathBuf::from(home).join(".kotoba"),
        Err(_) => PathBuf::from(".kotoba"),
    }
}

fn profiles_dir() -> PathBuf {
    data_root().join("profiles")
}

/// Directory the history store writes into
pub fn storage_dir() -> PathBuf {
    data_root().join("storage")
}

/// Represents a user profile
#[derive(Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub value: Config,
}

/// Initialize user config folders and main profile if missing
pub fn init_user_config() -> anyhow::Result<()> {
    fs::create_dir_all(profiles_dir())?;

    let main_profile = profiles_dir().join("main.json");

    if !main_profile.exists() {
        // Use repo default as the initial main profile
        let default_config = load_repo_default_config().unwrap_or_else(|e| {
            tracing::warn!("No repo default config ({e}), using built-in defaults");
            Config::new()
        });
        let profile = Profile {
            name: "main".into(),
            value: default_config,
        };
        fs::write(&main_profile, serde_json::to_string_pretty(&profile)?)?;
        tracing::info!("Created main profile in {}", profiles_dir().display());
    }

    Ok(())
}

/// Load a user profile by name, defaulting to main if name not found
pub fn load_user_profile(name: &str) -> anyhow::Result<Config> {
    let profile_file = profiles_dir().join(format!("{name}.json"));

    if profile_file.exists() {
        let data = fs::read_to_string(profile_file)?;
        let profile: Profile = serde_json::from_str(&data)?;
        Ok(profile.value)
    } else {
        tracing::warn!("Profile {name} not found, falling back to main profile or repo default");
        let main_file = profiles_dir().join("main.json");
        if main_file.exists() {
            let data = fs::read_to_string(main_file)?;
            let profile: Profile = serde_json::from_str(&data)?;
            Ok(profile.value)
        } else {
            // First-run fallback to repo default
            load_repo_default_config()
        }
    }
}
