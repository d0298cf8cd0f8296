//! reCAPTCHA token verification.
//!
//! Tokens produced by the browser widget are checked against Google's
//! `siteverify` endpoint (or any service speaking the same protocol).

mod verifier;

pub use verifier::CaptchaVerifier;
