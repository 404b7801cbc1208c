//! Application Configuration
//!
//! Everything the process reads from its environment, collected once at
//! startup into one immutable struct. Components receive what they need
//! from here; nothing else touches `std::env`.

use anyhow::{Context, bail};
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use std::env;

/// Immutable process configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Postgres connection URL
    pub database_url: String,
    /// Generative model API key
    pub gemini_api_key: String,
    /// Payment gateway secret key
    pub paystack_secret_key: String,
    /// 32-byte session-signing secret
    pub session_secret: [u8; 32],
    /// Absolute base URL of this deployment (payment callback)
    pub public_base_url: String,
    /// Whether session cookies require HTTPS
    pub cookie_secure: bool,
    /// Listen port
    pub port: u16,
}

impl AppConfig {
    /// Build from the process environment
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url = database_url_from_env()?;

        let gemini_api_key = env::var("GEMINI_API_KEY").unwrap_or_else(|_| {
            tracing::warn!("GEMINI_API_KEY not set; AI explanations will fail");
            String::new()
        });

        let paystack_secret_key = env::var("PAYSTACK_SECRET_KEY").unwrap_or_else(|_| {
            tracing::warn!("PAYSTACK_SECRET_KEY not set; payments will fail");
            String::new()
        });

        let session_secret = session_secret_from_env()?;

        let public_base_url =
            env::var("PUBLIC_BASE_URL").unwrap_or_else(|_| "http://127.0.0.1:8080".to_string());

        let cookie_secure = env::var("COOKIE_SECURE")
            .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
            .unwrap_or(false);

        let port = match env::var("PORT") {
            Ok(raw) => raw.parse().context("PORT must be a number")?,
            Err(_) => 8080,
        };

        Ok(Self {
            database_url,
            gemini_api_key,
            paystack_secret_key,
            session_secret,
            public_base_url,
            cookie_secure,
            port,
        })
    }
}

/// `DATABASE_URL` wins; otherwise assemble from the discrete parts
fn database_url_from_env() -> anyhow::Result<String> {
    if let Ok(url) = env::var("DATABASE_URL") {
        return Ok(url);
    }

    let host = env::var("DB_HOST").unwrap_or_else(|_| "localhost".to_string());
    let port = env::var("DB_PORT").unwrap_or_else(|_| "5432".to_string());
    let user = env::var("DB_USER").context(
        "set DATABASE_URL, or DB_USER/DB_PASSWORD/DB_NAME for the local configuration",
    )?;
    let password = env::var("DB_PASSWORD").unwrap_or_default();
    let name = env::var("DB_NAME").context("DB_NAME must be set when DATABASE_URL is not")?;

    Ok(format!(
        "postgres://{}:{}@{}:{}/{}",
        user, password, host, port, name
    ))
}

/// `SECRET_KEY` is base64 for 32 bytes; a random secret (with a warning)
/// keeps development bootable, at the cost of sessions not surviving a
/// restart
fn session_secret_from_env() -> anyhow::Result<[u8; 32]> {
    match env::var("SECRET_KEY") {
        Ok(raw) => {
            let bytes = STANDARD
                .decode(raw.trim())
                .context("SECRET_KEY must be base64")?;
            if bytes.len() != 32 {
                bail!("SECRET_KEY must decode to exactly 32 bytes, got {}", bytes.len());
            }
            let mut secret = [0u8; 32];
            secret.copy_from_slice(&bytes);
            Ok(secret)
        }
        Err(_) => {
            tracing::warn!(
                "SECRET_KEY not set; using a random session secret, sessions will not survive restarts"
            );
            use rand::RngCore;
            let mut secret = [0u8; 32];
            rand::rngs::OsRng.fill_bytes(&mut secret);
            Ok(secret)
        }
    }
}
