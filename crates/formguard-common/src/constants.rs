//! Shared constants for FormGuard components.

/// Default HTTP listen address
pub const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:8000";

/// Google's public reCAPTCHA v2 test site key (always passes)
pub const DEFAULT_SITE_KEY: &str = "6LeIxAcTAAAAAJcZVRqyHh71UMIEGNQ_MXjiZKhI";

/// Google's public reCAPTCHA v2 test secret (always passes)
pub const DEFAULT_SECRET: &str = "6LeIxAcTAAAAAGG-vFI1TnRWxMZNFuojJ4WifJWe";

/// Google siteverify endpoint
pub const DEFAULT_VERIFY_URL: &str = "https://www.google.com/recaptcha/api/siteverify";

/// Upper bound for one siteverify call (10 seconds)
pub const DEFAULT_VERIFY_TIMEOUT_MS: u64 = 10_000;

/// Directory served under `/static`
pub const DEFAULT_STATIC_DIR: &str = "static";

/// Form fields sent to the siteverify endpoint
pub mod siteverify_fields {
    pub const SECRET: &str = "secret";
    pub const RESPONSE: &str = "response";
}

/// User-facing messages returned in response bodies
pub mod messages {
    pub const MISSING_FIELDS: &str = "Champs requis manquants";
    pub const MISSING_RECAPTCHA: &str = "reCAPTCHA manquant";
    pub const RECAPTCHA_FAILED: &str = "Échec reCAPTCHA";
    pub const FORM_ACCEPTED: &str = "Formulaire validé";
}
