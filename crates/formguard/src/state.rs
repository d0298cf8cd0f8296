//! Application state and shared resources.

use anyhow::Result;
use std::sync::Arc;

use crate::captcha::CaptchaVerifier;
use crate::config::AppConfig;
use crate::routes::form;

/// Shared application state
///
/// Everything here is read-only after startup, so handlers never lock.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration
    pub config: AppConfig,

    /// reCAPTCHA verifier
    pub captcha_verifier: Arc<CaptchaVerifier>,

    /// Form page with the site key already injected
    pub index_page: Arc<str>,
}

impl AppState {
    /// Create new application state
    pub fn new(config: AppConfig) -> Result<Self> {
        let captcha_verifier = Arc::new(CaptchaVerifier::new(config.recaptcha.clone())?);
        let index_page = Arc::from(form::render_index(&config.recaptcha.site_key));

        Ok(Self {
            config,
            captcha_verifier,
            index_page,
        })
    }
}
