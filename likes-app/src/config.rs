use std::path::PathBuf;
use thiserror::Error;
use tracing::info;

/// Path to a JSON file with liked songs and playlists (overrides embedded data)
pub const FIXTURE_PATH_VAR: &str = "LIKES_FIXTURE_PATH";
/// Desktop window title
pub const WINDOW_TITLE_VAR: &str = "LIKES_WINDOW_TITLE";

const DEFAULT_WINDOW_TITLE: &str = "Liked Content";

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Fixture file not found: {}", .0.display())]
    MissingFixture(PathBuf),
}

/// Application configuration
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    /// None = use the data compiled into the binary
    pub fixture_path: Option<PathBuf>,
    pub window_title: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            fixture_path: None,
            window_title: DEFAULT_WINDOW_TITLE.to_string(),
        }
    }
}

impl Config {
    /// Load from the process environment, reading `.env` first when present.
    pub fn load() -> Result<Self, ConfigError> {
        #[cfg(not(target_arch = "wasm32"))]
        {
            if dotenvy::dotenv().is_ok() {
                info!("Dev mode activated - loaded .env");
            }
        }
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from a variable lookup. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|s| !s.is_empty());

        let fixture_path = get(FIXTURE_PATH_VAR).map(PathBuf::from);
        if let Some(path) = &fixture_path {
            if !path.exists() {
                return Err(ConfigError::MissingFixture(path.clone()));
            }
            info!("Using fixture file {}", path.display());
        }

        let window_title =
            get(WINDOW_TITLE_VAR).unwrap_or_else(|| DEFAULT_WINDOW_TITLE.to_string());

        Ok(Self {
            fixture_path,
            window_title,
        })
    }
}
