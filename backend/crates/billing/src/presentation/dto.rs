//! Query DTOs

use serde::Deserialize;

/// GET /paystack/callback query string
#[derive(Debug, Clone, Deserialize)]
pub struct CallbackParams {
    /// Gateway correlation token; absent when the redirect was mangled
    pub reference: Option<String>,
}
