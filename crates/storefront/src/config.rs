//! Quotation page configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All optional:
//! - `QUOTE_RECIPIENT` - Deep-link recipient, digits only (default: 60147592229)
//! - `QUOTE_MESSAGING_URL` - Deep-link base URL (default: <https://wa.me>)
//! - `QUOTE_STORAGE_KEY` - Slot key holding the cart (default: `ppv_quote_cart`)
//! - `QUOTE_DATA_DIR` - Directory for durable slots (default: platform data dir + `quotecart`)
//! - `QUOTE_CONFIRM_DELAY_MS` - "Added!" confirmation duration (default: 1500)

use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;
use url::Url;

use crate::checkout::DeepLink;
use crate::quote_page::PageSettings;

const DEFAULT_RECIPIENT: &str = "60147592229";
const DEFAULT_MESSAGING_URL: &str = "https://wa.me";
const DEFAULT_STORAGE_KEY: &str = "ppv_quote_cart";
const DEFAULT_CONFIRM_DELAY_MS: &str = "1500";
const DATA_DIR_NAME: &str = "quotecart";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Quotation page configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// Deep-link recipient identifier
    pub recipient: String,
    /// Deep-link base URL
    pub messaging_url: Url,
    /// Slot key holding the cart
    pub storage_key: String,
    /// Directory for durable slots
    pub data_dir: PathBuf,
    /// How long the add confirmation stays visible
    pub confirm_delay: Duration,
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an invalid value or no
    /// data directory can be determined.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Same as [`Self::from_env`].
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get_or_default =
            |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let recipient = get_or_default("QUOTE_RECIPIENT", DEFAULT_RECIPIENT);
        validate_recipient(&recipient)?;

        let messaging_url = Url::parse(&get_or_default("QUOTE_MESSAGING_URL", DEFAULT_MESSAGING_URL))
            .map_err(|e| {
                ConfigError::InvalidEnvVar("QUOTE_MESSAGING_URL".to_string(), e.to_string())
            })?;

        let storage_key = get_or_default("QUOTE_STORAGE_KEY", DEFAULT_STORAGE_KEY);
        if storage_key.trim().is_empty() {
            return Err(ConfigError::InvalidEnvVar(
                "QUOTE_STORAGE_KEY".to_string(),
                "must not be empty".to_string(),
            ));
        }

        let data_dir = match lookup("QUOTE_DATA_DIR") {
            Some(dir) => PathBuf::from(dir),
            None => default_data_dir()?,
        };

        let confirm_delay = get_or_default("QUOTE_CONFIRM_DELAY_MS", DEFAULT_CONFIRM_DELAY_MS)
            .parse::<u64>()
            .map(Duration::from_millis)
            .map_err(|e| {
                ConfigError::InvalidEnvVar("QUOTE_CONFIRM_DELAY_MS".to_string(), e.to_string())
            })?;

        Ok(Self {
            recipient,
            messaging_url,
            storage_key,
            data_dir,
            confirm_delay,
        })
    }

    /// Deep link builder for checkout messages.
    #[must_use]
    pub fn deep_link(&self) -> DeepLink {
        DeepLink::new(self.messaging_url.clone(), self.recipient.clone())
    }

    /// Settings for a [`crate::QuotePage`].
    #[must_use]
    pub fn page_settings(&self) -> PageSettings {
        PageSettings {
            deep_link: self.deep_link(),
            confirm_delay: self.confirm_delay,
        }
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Platform data directory for durable slots.
fn default_data_dir() -> Result<PathBuf, ConfigError> {
    dirs::data_dir()
        .or_else(|| dirs::home_dir().map(|p| p.join(".local/share")))
        .map(|dir| dir.join(DATA_DIR_NAME))
        .ok_or_else(|| ConfigError::MissingEnvVar("QUOTE_DATA_DIR".to_string()))
}

/// Recipients are phone numbers in international format, digits only.
fn validate_recipient(recipient: &str) -> Result<(), ConfigError> {
    if recipient.is_empty() || !recipient.chars().all(|c| c.is_ascii_digit()) {
        return Err(ConfigError::InvalidEnvVar(
            "QUOTE_RECIPIENT".to_string(),
            "must be digits only".to_string(),
        ));
    }
    Ok(())
}
