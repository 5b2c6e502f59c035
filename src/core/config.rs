use std::env;
use std::time::Duration;

use url::Url;

pub const DEFAULT_API_URL: &str = "https://api.openai.com/v1/chat/completions";
pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";
pub const DEFAULT_TEMPERATURE: f64 = 0.7;
pub const DEFAULT_TIMEOUT_SECS: u64 = 120;
pub const LISTEN_PORT: u16 = 3001;

/// Number of key characters shown by the health probe.
pub const API_KEY_PREFIX_LEN: usize = 7;
pub const API_KEY_PLACEHOLDER: &str = "not found";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub api_key: Option<String>,
    pub api_url: Url,
    pub model: String,
    pub temperature: f64,
    pub request_timeout: Duration,
}

impl AppConfig {
    /// Defaults for everything except the key.
    ///
    /// # Errors
    ///
    /// Only fails if the built-in endpoint is not a valid URL.
    pub fn new(api_key: Option<String>) -> Result<Self, String> {
        Ok(Self {
            api_key: api_key.filter(|k| !k.is_empty()),
            api_url: Url::parse(DEFAULT_API_URL).map_err(|e| format!("{DEFAULT_API_URL}: {e}"))?,
            model: DEFAULT_MODEL.to_string(),
            temperature: DEFAULT_TEMPERATURE,
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        })
    }

    /// # Errors
    ///
    /// Returns an error if `GPT_API_TIMEOUT_SECS` is set but is not a positive integer.
    pub fn from_env() -> Result<Self, String> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup instead of the process environment.
    ///
    /// # Errors
    ///
    /// Returns an error if `GPT_API_TIMEOUT_SECS` is set but is not a positive integer.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, String>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::new(lookup("GPT_API_KEY"))?;

        if let Some(raw) = lookup("GPT_API_TIMEOUT_SECS") {
            let secs = raw
                .trim()
                .parse::<u64>()
                .ok()
                .filter(|s| *s > 0)
                .ok_or_else(|| {
                    format!("GPT_API_TIMEOUT_SECS: expected a positive integer, got {raw:?}")
                })?;
            config.request_timeout = Duration::from_secs(secs);
        }

        Ok(config)
    }

    #[must_use]
    pub fn with_api_url(mut self, api_url: Url) -> Self {
        self.api_url = api_url;
        self
    }

    #[must_use]
    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    #[must_use]
    pub fn api_key_present(&self) -> bool {
        self.api_key.is_some()
    }

    /// First characters of the key for operator diagnostics, never the whole secret.
    #[must_use]
    pub fn api_key_prefix(&self) -> String {
        self.api_key.as_deref().map_or_else(
            || API_KEY_PLACEHOLDER.to_string(),
            |key| key.chars().take(API_KEY_PREFIX_LEN).collect(),
        )
    }
}
