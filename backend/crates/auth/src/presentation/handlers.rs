//! HTTP Handlers

use axum::Form;
use axum::extract::State;
use axum::http::{HeaderMap, HeaderValue, header};
use axum::response::{Html, IntoResponse, Response};
use std::sync::Arc;

use platform::cookie::{CookieConfig, set_cookie_header};
use platform::flash::{FlashMessage, clear_flash_cookie, redirect_with_flash, take_flash};

use crate::application::config::AuthConfig;
use crate::application::{
    LoginInput, LoginUseCase, LogoutUseCase, RegisterInput, RegisterUseCase,
};
use crate::domain::repository::{SessionRepository, UserRepository};
use crate::error::AuthError;
use crate::presentation::dto::{LoginForm, RegisterForm};
use crate::presentation::gate::require_page_session;
use crate::presentation::pages;

/// Shared state for auth handlers
#[derive(Clone)]
pub struct AuthAppState<R>
where
    R: UserRepository + SessionRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub config: Arc<AuthConfig>,
}

// ============================================================================
// Login
// ============================================================================

/// GET /login
pub async fn login_form(headers: HeaderMap) -> Response {
    consume_flash_page(&headers, pages::login_page)
}

/// POST /login
pub async fn login_submit<R>(
    State(state): State<AuthAppState<R>>,
    headers: HeaderMap,
    Form(form): Form<LoginForm>,
) -> Response
where
    R: UserRepository + SessionRepository + Clone + Send + Sync + 'static,
{
    let username = form.username.trim().to_string();

    if username.is_empty() || form.password.is_empty() {
        return inline_page(
            pages::login_page,
            FlashMessage::error("Please provide both username and password."),
        );
    }

    let presented_token =
        platform::cookie::extract_cookie(&headers, &state.config.session_cookie_name);

    let use_case = LoginUseCase::new(state.repo.clone(), state.repo.clone(), state.config.clone());

    let input = LoginInput {
        username,
        password: form.password,
        presented_token,
    };

    match use_case.execute(input).await {
        Ok(output) => {
            let mut response = redirect_with_flash(
                "/dashboard",
                &FlashMessage::success("Logged in successfully."),
            );
            response.headers_mut().append(
                header::SET_COOKIE,
                session_cookie(&state.config, &output.session_token),
            );
            response
        }
        Err(AuthError::InvalidCredentials) => inline_page(
            pages::login_page,
            FlashMessage::error("Invalid username or password."),
        ),
        Err(e) => {
            tracing::error!(error = %e, "Login failed");
            inline_page(
                pages::login_page,
                FlashMessage::error("Database error. Please try again later."),
            )
        }
    }
}

// ============================================================================
// Register
// ============================================================================

/// GET /register
pub async fn register_form(headers: HeaderMap) -> Response {
    consume_flash_page(&headers, pages::register_page)
}

/// POST /register
pub async fn register_submit<R>(
    State(state): State<AuthAppState<R>>,
    Form(form): Form<RegisterForm>,
) -> Response
where
    R: UserRepository + SessionRepository + Clone + Send + Sync + 'static,
{
    if form.username.trim().is_empty() || form.email.trim().is_empty() || form.password.is_empty()
    {
        return inline_page(
            pages::register_page,
            FlashMessage::error("Please provide username, email, and password."),
        );
    }

    let use_case = RegisterUseCase::new(state.repo.clone(), state.config.clone());

    let input = RegisterInput {
        username: form.username,
        email: form.email,
        password: form.password,
    };

    match use_case.execute(input).await {
        Ok(_) => redirect_with_flash(
            "/login",
            &FlashMessage::success("Registration successful! Please log in."),
        ),
        Err(AuthError::DuplicateUser) => inline_page(
            pages::register_page,
            FlashMessage::error("Username or email already exists. Please choose another."),
        ),
        Err(AuthError::Validation(message)) => {
            inline_page(pages::register_page, FlashMessage::error(message))
        }
        Err(e) => {
            tracing::error!(error = %e, "Registration failed");
            inline_page(
                pages::register_page,
                FlashMessage::error("An error occurred while registering. Please try again."),
            )
        }
    }
}

// ============================================================================
// Dashboard
// ============================================================================

/// GET /dashboard
pub async fn dashboard<R>(State(state): State<AuthAppState<R>>, headers: HeaderMap) -> Response
where
    R: UserRepository + SessionRepository + Clone + Send + Sync + 'static,
{
    let identity = match require_page_session(
        &headers,
        state.repo.clone(),
        state.config.clone(),
        None,
    )
    .await
    {
        Ok(identity) => identity,
        Err(response) => return response,
    };

    consume_flash_page(&headers, |flash| {
        pages::dashboard_page(&identity.username, flash)
    })
}

// ============================================================================
// Logout
// ============================================================================

/// GET /logout
pub async fn logout<R>(State(state): State<AuthAppState<R>>, headers: HeaderMap) -> Response
where
    R: UserRepository + SessionRepository + Clone + Send + Sync + 'static,
{
    if let Some(token) =
        platform::cookie::extract_cookie(&headers, &state.config.session_cookie_name)
    {
        let use_case = LogoutUseCase::new(state.repo.clone(), state.config.clone());
        // Ignore errors - just clear the cookie
        let _ = use_case.execute(&token).await;
    }

    let mut response = redirect_with_flash("/", &FlashMessage::success("Logged out."));
    response
        .headers_mut()
        .append(header::SET_COOKIE, clear_session_cookie(&state.config));
    response
}

// ============================================================================
// Helper Functions
// ============================================================================

fn session_cookie_config(config: &AuthConfig) -> CookieConfig {
    CookieConfig {
        name: config.session_cookie_name.clone(),
        secure: config.cookie_secure,
        http_only: true,
        same_site: config.cookie_same_site,
        path: "/".to_string(),
        max_age_secs: Some(config.session_ttl.as_secs() as i64),
    }
}

pub(crate) fn session_cookie(config: &AuthConfig, token: &str) -> HeaderValue {
    set_cookie_header(&session_cookie_config(config), token)
}

pub(crate) fn clear_session_cookie(config: &AuthConfig) -> HeaderValue {
    HeaderValue::from_str(&session_cookie_config(config).build_delete_cookie())
        .unwrap_or_else(|_| HeaderValue::from_static(""))
}

/// Render a page, consuming any pending flash cookie
pub fn consume_flash_page<F>(headers: &HeaderMap, page: F) -> Response
where
    F: FnOnce(Option<&FlashMessage>) -> String,
{
    let flash = take_flash(headers);
    let mut response = Html(page(flash.as_ref())).into_response();
    if flash.is_some() {
        response
            .headers_mut()
            .append(header::SET_COOKIE, clear_flash_cookie());
    }
    response
}

/// Re-render a form page with a flash raised by this same request
fn inline_page<F>(page: F, flash: FlashMessage) -> Response
where
    F: FnOnce(Option<&FlashMessage>) -> String,
{
    Html(page(Some(&flash))).into_response()
}
