use anyhow::{Context, Result};
use std::env;

pub const DEFAULT_OPENAI_MODEL: &str = "gpt-3.5-turbo";
pub const DEFAULT_OPENAI_API_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_TWITTER_API_URL: &str = "https://api.twitter.com";

const SETUP_HINT: &str = "To fix this, create ~/.config/tldreth/.env with:\n  \
    TWITTER_API_KEY=...\n  \
    TWITTER_API_SECRET_KEY=...\n  \
    TWITTER_ACCESS_TOKEN=...\n  \
    TWITTER_ACCESS_TOKEN_SECRET=...\n  \
    OPENAI_API_KEY=...";

/// OAuth 1.0a user-context credentials for the Twitter v1.1 API.
#[derive(Debug, Clone)]
pub struct TwitterCredentials {
    pub consumer_key: String,
    pub consumer_secret: String,
    pub access_token: String,
    pub access_token_secret: String,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub twitter: TwitterCredentials,
    pub twitter_api_url: String,
    pub openai_api_key: String,
    pub openai_api_url: String,
    pub openai_model: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        // Try to load .env from multiple locations
        Self::try_load_dotenv();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from an arbitrary variable source.
    ///
    /// Every credential is checked here so a missing value fails the run before
    /// any request goes out.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &str| -> Result<String> {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .with_context(|| format!("{} not found.\n\n{}", key, SETUP_HINT))
        };
        let optional = |key: &str, default: &str| -> String {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| default.to_string())
        };

        let twitter = TwitterCredentials {
            consumer_key: required("TWITTER_API_KEY")?,
            consumer_secret: required("TWITTER_API_SECRET_KEY")?,
            access_token: required("TWITTER_ACCESS_TOKEN")?,
            access_token_secret: required("TWITTER_ACCESS_TOKEN_SECRET")?,
        };

        Ok(Self {
            twitter,
            twitter_api_url: optional("TWITTER_API_URL", DEFAULT_TWITTER_API_URL),
            openai_api_key: required("OPENAI_API_KEY")?,
            openai_api_url: optional("OPENAI_API_URL", DEFAULT_OPENAI_API_URL),
            openai_model: optional("OPENAI_MODEL", DEFAULT_OPENAI_MODEL),
        })
    }

    fn try_load_dotenv() {
        // 1. Current directory (for development)
        if dotenvy::dotenv().is_ok() {
            return;
        }

        // 2. ~/.config/tldreth/.env (standard config location)
        if let Some(config_dir) = dirs::config_dir() {
            let config_path = config_dir.join("tldreth").join(".env");
            if config_path.exists() && dotenvy::from_path(&config_path).is_ok() {
                return;
            }
        }

        // 3. ~/.env (home directory)
        if let Some(home_dir) = dirs::home_dir() {
            let home_path = home_dir.join(".env");
            if home_path.exists() {
                let _ = dotenvy::from_path(&home_path);
            }
        }

        // If none found, that's okay - environment variables might be set system-wide
    }
}
