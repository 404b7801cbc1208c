//! API DTOs

use serde::{Deserialize, Serialize};

/// POST /ai-explain form body
#[derive(Debug, Clone, Deserialize)]
pub struct ExplainForm {
    #[serde(default)]
    pub question: String,
}

/// Successful explanation response
#[derive(Debug, Clone, Serialize)]
pub struct ExplainResponse {
    pub explanation: String,
}
