//! One-shot Flash Messages
//!
//! Page routes never render raw errors: every outcome becomes a flash
//! message plus a redirect. The message rides in a short-lived cookie,
//! set alongside the redirect and consumed (cleared) by the next page
//! render.
//!
//! The payload is JSON, base64url-encoded so arbitrary text survives the
//! cookie value grammar.

use axum::http::{HeaderMap, HeaderValue, StatusCode, header};
use axum::response::{IntoResponse, Response};
use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use serde::{Deserialize, Serialize};

use crate::cookie::extract_cookie;

/// Cookie carrying the pending flash message
pub const FLASH_COOKIE_NAME: &str = "flash";

/// Flash severity, mirrored into the page as a CSS class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlashLevel {
    Success,
    Error,
}

impl FlashLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            FlashLevel::Success => "success",
            FlashLevel::Error => "error",
        }
    }
}

/// A single pending flash message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlashMessage {
    pub level: FlashLevel,
    pub text: String,
}

impl FlashMessage {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            level: FlashLevel::Success,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            level: FlashLevel::Error,
            text: text.into(),
        }
    }

    /// Encode for the cookie value
    fn encode(&self) -> String {
        let json = serde_json::to_vec(self).unwrap_or_default();
        URL_SAFE_NO_PAD.encode(json)
    }

    /// Decode from a cookie value; malformed values are dropped silently
    fn decode(value: &str) -> Option<Self> {
        let bytes = URL_SAFE_NO_PAD.decode(value).ok()?;
        serde_json::from_slice(&bytes).ok()
    }
}

/// Set-Cookie value that stores a flash message for the next page view
///
/// Not HttpOnly-sensitive data, but marked HttpOnly anyway: only the
/// server renders it.
pub fn set_flash_cookie(message: &FlashMessage) -> HeaderValue {
    let cookie = format!(
        "{}={}; HttpOnly; Path=/; Max-Age=300",
        FLASH_COOKIE_NAME,
        message.encode()
    );
    HeaderValue::from_str(&cookie).unwrap_or_else(|_| HeaderValue::from_static(""))
}

/// Set-Cookie value that clears the flash cookie
pub fn clear_flash_cookie() -> HeaderValue {
    HeaderValue::from_static("flash=; HttpOnly; Path=/; Max-Age=0")
}

/// Read the pending flash message, if any
///
/// The caller is expected to also emit [`clear_flash_cookie`] so the
/// message shows exactly once.
pub fn take_flash(headers: &HeaderMap) -> Option<FlashMessage> {
    let value = extract_cookie(headers, FLASH_COOKIE_NAME)?;
    FlashMessage::decode(&value)
}

/// Append flash set/clear cookies to a response header map
pub fn append_flash(headers: &mut HeaderMap, message: &FlashMessage) {
    headers.append(header::SET_COOKIE, set_flash_cookie(message));
}

/// 302 redirect carrying a flash message
///
/// Flask-style navigation: the browser lands on `location`, whose handler
/// consumes the flash on render.
pub fn redirect_with_flash(location: &str, message: &FlashMessage) -> Response {
    let mut response = redirect(location);
    response
        .headers_mut()
        .append(header::SET_COOKIE, set_flash_cookie(message));
    response
}

/// Plain 302 redirect
pub fn redirect(location: &str) -> Response {
    let mut response = StatusCode::FOUND.into_response();
    if let Ok(value) = HeaderValue::from_str(location) {
        response.headers_mut().insert(header::LOCATION, value);
    }
    response
}
