//! Form DTOs
//!
//! Browser form payloads. Missing fields default to empty strings so the
//! handlers can answer with a validation flash instead of a 422.

use serde::Deserialize;

/// POST /login form body
#[derive(Debug, Clone, Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

/// POST /register form body
#[derive(Debug, Clone, Deserialize)]
pub struct RegisterForm {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}
