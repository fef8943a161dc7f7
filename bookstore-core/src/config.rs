//! Client configuration

use crate::error::ConfigError;
use std::str::FromStr;
use std::time::Duration;

/// Default REST backend, matching the backend's development address
pub const DEFAULT_API_URL: &str = "http://localhost:8080/api";

/// How long a toast stays visible
pub const TOAST_DURATION: Duration = Duration::from_millis(3500);

/// How long the inline message keeps its style class
pub const MESSAGE_DURATION: Duration = Duration::from_secs(5);

/// Length of the card removal animation
pub const REMOVAL_DELAY: Duration = Duration::from_millis(300);

/// Presentation behavior
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Variant {
    /// Toasts, animations, scroll lock, escape/backdrop dismissal
    #[default]
    Rich,
    /// Inline message only, no animations, modal closes via its buttons
    Plain,
}

impl Variant {
    pub fn is_rich(self) -> bool {
        self == Variant::Rich
    }
}

impl FromStr for Variant {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "rich" => Ok(Variant::Rich),
            "plain" => Ok(Variant::Plain),
            other => Err(ConfigError::UnknownVariant(other.to_string())),
        }
    }
}

/// Settings for a [`CatalogClient`](crate::client::CatalogClient) session
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the REST API; books live under `{api_url}/books`
    pub api_url: String,
    pub variant: Variant,
    pub toast_duration: Duration,
    pub message_duration: Duration,
    pub removal_delay: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            variant: Variant::default(),
            toast_duration: TOAST_DURATION,
            message_duration: MESSAGE_DURATION,
            removal_delay: REMOVAL_DELAY,
        }
    }
}

impl ClientConfig {
    /// Read `BOOKSTORE_API_URL` and `BOOKSTORE_UI_VARIANT`, falling back to defaults
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();
        if let Ok(url) = std::env::var("BOOKSTORE_API_URL") {
            config = config.with_api_url(url)?;
        }
        if let Ok(variant) = std::env::var("BOOKSTORE_UI_VARIANT") {
            config.variant = variant.parse()?;
        }
        Ok(config)
    }

    /// Replace the API URL, rejecting anything that is not http(s)
    pub fn with_api_url(mut self, url: impl Into<String>) -> Result<Self, ConfigError> {
        let url = url.into();
        let trimmed = url.trim().trim_end_matches('/');
        if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
            return Err(ConfigError::InvalidApiUrl(url));
        }
        self.api_url = trimmed.to_string();
        Ok(self)
    }

    pub fn with_variant(mut self, variant: Variant) -> Self {
        self.variant = variant;
        self
    }
}
