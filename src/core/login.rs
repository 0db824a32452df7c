//! Login endpoint contract
//!
//! Builds the `POST /auth/login?email=..&password=..` request URL and turns the
//! endpoint's reply into either a `Teacher` or a `LoginError`. The HTTP call
//! itself sits behind `LoginTransport` so the browser fetch can be swapped for
//! a scripted transport in tests.

use serde::Deserialize;
use serde_json::Value;
use url::form_urlencoded;

use super::store::StoreError;
use super::teacher::Teacher;

/// Shown when the endpoint rejects the credentials without a `detail`
pub const REJECTED_MESSAGE: &str = "Login failed";

/// Shown for transport, parse and storage failures
pub const RETRY_MESSAGE: &str = "Login failed. Please try again.";

/// Credentials captured from the login form at submission time
#[derive(Debug, Clone, PartialEq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    /// URL-encoded query string carrying both fields
    pub fn to_query(&self) -> String {
        form_urlencoded::Serializer::new(String::new())
            .append_pair("email", &self.email)
            .append_pair("password", &self.password)
            .finish()
    }

    /// Full request URL for `endpoint`
    pub fn login_url(&self, endpoint: &str) -> String {
        let separator = if endpoint.contains('?') { '&' } else { '?' };
        format!("{}{}{}", endpoint, separator, self.to_query())
    }
}

/// Raw reply from the login endpoint
#[derive(Debug, Clone, PartialEq)]
pub struct LoginReply {
    pub status: u16,
    pub body: String,
}

impl LoginReply {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Same range as `Response.ok` in the Fetch API
    pub fn is_ok(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Login errors
#[derive(Debug, thiserror::Error)]
pub enum LoginError {
    /// The endpoint answered with a non-OK status
    #[error("Login rejected: {0}")]
    Rejected(String),

    #[error("Login request failed: {0}")]
    Transport(String),

    #[error("Malformed login response: {0}")]
    MalformedResponse(String),

    #[error("Failed to persist session: {0}")]
    Storage(#[from] StoreError),

    /// A second submit while one is in flight; dropped without a notice
    #[error("A login request is already in flight")]
    Busy,
}

impl LoginError {
    /// Message presented to the user
    pub fn user_message(&self) -> String {
        match self {
            LoginError::Rejected(message) => message.clone(),
            _ => RETRY_MESSAGE.to_string(),
        }
    }

    /// Failures that only make sense to a developer get logged
    pub fn is_diagnostic(&self) -> bool {
        matches!(
            self,
            LoginError::Transport(_) | LoginError::MalformedResponse(_) | LoginError::Storage(_)
        )
    }
}

/// Performs the login HTTP request
#[allow(async_fn_in_trait)]
pub trait LoginTransport {
    /// POST to `url` with an empty body
    async fn post(&self, url: &str) -> Result<LoginReply, LoginError>;
}

/// Success body: `{"message": "...", "teacher": {...}}`
#[derive(Debug, Deserialize)]
struct LoginSuccess {
    teacher: Teacher,
}

/// Failure body: `{"detail": ...}`
#[derive(Debug, Deserialize)]
struct LoginFailure {
    #[serde(default)]
    detail: Option<Value>,
}

/// Interpret an endpoint reply.
///
/// The body must be JSON whatever the status. On failure a string `detail`
/// becomes the rejection message; anything else falls back to
/// `REJECTED_MESSAGE`.
pub fn interpret_reply(reply: &LoginReply) -> Result<Teacher, LoginError> {
    let body: Value = serde_json::from_str(&reply.body)
        .map_err(|e| LoginError::MalformedResponse(e.to_string()))?;

    if reply.is_ok() {
        let success: LoginSuccess = serde_json::from_value(body)
            .map_err(|e| LoginError::MalformedResponse(e.to_string()))?;
        return Ok(success.teacher);
    }

    let message = serde_json::from_value::<LoginFailure>(body)
        .ok()
        .and_then(|failure| failure.detail)
        .and_then(|detail| match detail {
            Value::String(s) if !s.is_empty() => Some(s),
            _ => None,
        })
        .unwrap_or_else(|| REJECTED_MESSAGE.to_string());

    Err(LoginError::Rejected(message))
}
