/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use std::error::Error;
use std::fmt;

/// Errors returned by the Zoho CRM client
///
/// Validation errors (`InvalidEntity`, `InvalidData`) are raised before any
/// network call. Transport failures are propagated unchanged. A non JSON
/// response body is never an error.
#[derive(Debug)]
pub enum AppError {
    /// Transport level failure reported by the HTTP client
    Network(reqwest::Error),
    /// JSON encoding or decoding failure
    Json(serde_json::Error),
    /// Entity name outside the supported set of CRM modules
    InvalidEntity(String),
    /// Request data that is not a key/value mapping
    InvalidData(String),
    /// Verb name that the session does not expose
    UnsupportedMethod(String),
    /// The token endpoint did not return a usable access token
    Auth(String),
    /// Invalid configuration or input value
    InvalidInput(String),
}

impl AppError {
    /// Whether this error was raised by input validation, before any request
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(self, AppError::InvalidEntity(_) | AppError::InvalidData(_))
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Network(e) => write!(f, "network error: {e}"),
            AppError::Json(e) => write!(f, "json error: {e}"),
            AppError::InvalidEntity(name) => write!(f, "invalid zohocrm entity - {name}"),
            AppError::InvalidData(kind) => write!(f, "data must be a mapping, got {kind}"),
            AppError::UnsupportedMethod(name) => write!(f, "unsupported method: {name}"),
            AppError::Auth(msg) => write!(f, "authentication error: {msg}"),
            AppError::InvalidInput(msg) => write!(f, "invalid input: {msg}"),
        }
    }
}

impl Error for AppError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            AppError::Network(e) => Some(e),
            AppError::Json(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for AppError {
    fn from(e: reqwest::Error) -> Self {
        AppError::Network(e)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(e: serde_json::Error) -> Self {
        AppError::Json(e)
    }
}
