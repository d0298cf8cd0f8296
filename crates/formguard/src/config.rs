//! Configuration management for FormGuard.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

use formguard_common::constants::{
    DEFAULT_LISTEN_ADDR, DEFAULT_SECRET, DEFAULT_SITE_KEY, DEFAULT_STATIC_DIR,
    DEFAULT_VERIFY_TIMEOUT_MS, DEFAULT_VERIFY_URL,
};

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// HTTP listen address
    #[serde(default = "default_listen_addr")]
    pub listen_addr: String,

    /// Directory served under `/static`
    #[serde(default = "default_static_dir")]
    pub static_dir: String,

    /// reCAPTCHA configuration
    #[serde(default)]
    pub recaptcha: RecaptchaConfig,
}

/// reCAPTCHA credentials and verifier endpoint
#[derive(Clone, Deserialize)]
pub struct RecaptchaConfig {
    /// Public key embedded in the form page
    #[serde(default = "default_site_key")]
    pub site_key: String,

    /// Shared secret sent to the verifier
    #[serde(default = "default_secret")]
    pub secret: String,

    /// siteverify endpoint
    #[serde(default = "default_verify_url")]
    pub verify_url: String,

    /// Upper bound for one verifier call, in milliseconds
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

impl RecaptchaConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

// Keeps the secret out of logs
impl std::fmt::Debug for RecaptchaConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RecaptchaConfig")
            .field("site_key", &self.site_key)
            .field("secret", &"<redacted>")
            .field("verify_url", &self.verify_url)
            .field("timeout_ms", &self.timeout_ms)
            .finish()
    }
}

impl Default for RecaptchaConfig {
    fn default() -> Self {
        Self {
            site_key: default_site_key(),
            secret: default_secret(),
            verify_url: default_verify_url(),
            timeout_ms: default_timeout_ms(),
        }
    }
}

// Default value functions
fn default_listen_addr() -> String { DEFAULT_LISTEN_ADDR.to_string() }
fn default_static_dir() -> String { DEFAULT_STATIC_DIR.to_string() }
fn default_site_key() -> String { DEFAULT_SITE_KEY.to_string() }
fn default_secret() -> String { DEFAULT_SECRET.to_string() }
fn default_verify_url() -> String { DEFAULT_VERIFY_URL.to_string() }
fn default_timeout_ms() -> u64 { DEFAULT_VERIFY_TIMEOUT_MS } // 10 seconds

impl AppConfig {
    /// Load configuration from file, with CLI/env overrides
    pub fn load(config_path: &str, args: &super::Args) -> Result<Self> {
        let mut config = Self::from_file(config_path)?;

        // Apply CLI overrides
        if let Some(ref listen) = args.listen {
            config.listen_addr = listen.clone();
        }
        if let Some(ref static_dir) = args.static_dir {
            config.static_dir = static_dir.clone();
        }
        if let Some(ref site_key) = args.site_key {
            config.recaptcha.site_key = site_key.clone();
        }
        if let Some(ref secret) = args.secret {
            config.recaptcha.secret = secret.clone();
        }
        if let Some(ref verify_url) = args.verify_url {
            config.recaptcha.verify_url = verify_url.clone();
        }

        config.validate()?;
        Ok(config)
    }

    fn from_file(config_path: &str) -> Result<Self> {
        if !Path::new(config_path).exists() {
            // Use defaults if config file doesn't exist
            tracing::warn!(path = %config_path, "Config file not found, using defaults");
            return Ok(Self::default());
        }

        let settings = config::Config::builder()
            .add_source(config::File::with_name(config_path))
            .build()
            .context("Failed to load config file")?;

        settings
            .try_deserialize()
            .context("Failed to parse config")
    }

    fn validate(&self) -> Result<()> {
        if self.recaptcha.timeout_ms == 0 {
            return Err(formguard_common::FormError::Config(
                "recaptcha.timeout_ms must be greater than zero".to_string(),
            )
            .into());
        }
        reqwest::Url::parse(&self.recaptcha.verify_url)
            .map_err(|e| formguard_common::FormError::Config(format!("invalid verify_url: {e}")))?;
        Ok(())
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            listen_addr: default_listen_addr(),
            static_dir: default_static_dir(),
            recaptcha: RecaptchaConfig::default(),
        }
    }
}
