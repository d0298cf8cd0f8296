//! # FormGuard - contact form backend
//!
//! Serves a contact form with a Google reCAPTCHA v2 widget and checks every
//! submission server-side before accepting it.
//!
//! ## Flow
//! ```text
//! Browser → POST /verify → FormGuard → siteverify
//!                              ↓
//!                     200 / 400 / 502
//! ```

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

mod captcha;
mod config;
mod error;
mod routes;
mod state;
#[cfg(test)]
mod testing;

use crate::config::AppConfig;
use crate::state::AppState;

/// FormGuard - contact form with reCAPTCHA verification
#[derive(Parser, Debug)]
#[command(name = "formguard")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Configuration file path
    #[arg(short, long, default_value = "config/formguard.toml")]
    config: String,

    /// Listen address (overrides config)
    #[arg(short, long, env = "LISTEN_ADDR")]
    listen: Option<String>,

    /// reCAPTCHA site key (overrides config)
    #[arg(long, env = "RECAPTCHA_SITEKEY")]
    site_key: Option<String>,

    /// reCAPTCHA secret (overrides config)
    #[arg(long, env = "RECAPTCHA_SECRET", hide_env_values = true)]
    secret: Option<String>,

    /// siteverify endpoint (overrides config)
    #[arg(long, env = "GOOGLE_VERIFY_URL")]
    verify_url: Option<String>,

    /// Static assets directory (overrides config)
    #[arg(long, env = "STATIC_DIR")]
    static_dir: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info", env = "LOG_LEVEL")]
    log_level: String,

    /// Enable JSON logging output
    #[arg(long, default_value = "false")]
    json_logs: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    // .env must be loaded before clap reads env-backed arguments
    let dotenv_path = dotenvy::dotenv().ok();

    // Parse CLI arguments
    let args = Args::parse();

    // Initialize logging
    init_logging(&args.log_level, args.json_logs)?;

    info!(
        "Starting FormGuard v{}",
        env!("CARGO_PKG_VERSION")
    );
    if let Some(path) = dotenv_path {
        info!(path = %path.display(), "Loaded environment from .env");
    }

    // Load configuration
    let config = AppConfig::load(&args.config, &args)?;
    info!(recaptcha = ?config.recaptcha, "Configuration loaded from {}", args.config);

    // Initialize application state
    let state = AppState::new(config.clone())?;

    // Build router
    let app = routes::create_router(state);

    // Start server
    let listener = tokio::net::TcpListener::bind(&config.listen_addr)
        .await
        .with_context(|| format!("Failed to bind {}", config.listen_addr))?;
    info!("FormGuard listening on {}", config.listen_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("FormGuard shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(error = %e, "Failed to install Ctrl+C handler");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}

/// Initialize structured logging with tracing
fn init_logging(level: &str, json: bool) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    if json {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json())
            .try_init()
            .context("Failed to initialize logging")?;
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_target(true).with_thread_ids(true))
            .try_init()
            .context("Failed to initialize logging")?;
    }

    Ok(())
}
