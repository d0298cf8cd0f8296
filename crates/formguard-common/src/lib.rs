//! # FormGuard Common
//!
//! Shared types, errors, and constants used by the FormGuard service.
//!
//! ## Modules
//! - `types` - Submission and verifier payloads, response bodies
//! - `error` - Verification flow error taxonomy
//! - `constants` - Defaults and user-facing messages

pub mod constants;
pub mod error;
pub mod types;

pub use error::FormError;
pub use types::*;
