/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use crate::error::AppError;
use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};

/// Response from the OAuth token endpoint
///
/// Zoho answers `200 OK` with an `error` field when the refresh token or the
/// client credentials are rejected, so every field is optional.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TokenResponse {
    /// Newly minted access token
    pub access_token: Option<String>,
    /// API domain of the account's data center
    pub api_domain: Option<String>,
    /// Token type (typically "Bearer")
    pub token_type: Option<String>,
    /// Token lifetime in seconds
    pub expires_in: Option<u64>,
    /// Error code reported by the accounts server
    pub error: Option<String>,
}

impl TokenResponse {
    /// Extracts a usable access token
    ///
    /// # Returns
    /// * `Ok(AccessToken)` - If the response carries a non empty `access_token`
    /// * `Err(AppError::Auth)` - Otherwise, with the server `error` code when present
    pub fn into_access_token(self) -> Result<AccessToken, AppError> {
        match self.access_token {
            Some(token) if !token.is_empty() => Ok(AccessToken {
                token,
                expires_in: self.expires_in,
                created_at: Utc::now(),
            }),
            _ => {
                let reason = self
                    .error
                    .unwrap_or_else(|| "access_token missing from token response".to_string());
                Err(AppError::Auth(reason))
            }
        }
    }
}

/// Short lived bearer credential used on every API call
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AccessToken {
    /// Token value sent in the `Authorization` header
    pub token: String,
    /// Lifetime in seconds, unknown for tokens supplied by the caller
    pub expires_in: Option<u64>,
    /// Timestamp when this token was obtained (for expiry calculation)
    #[serde(skip, default = "chrono::Utc::now")]
    pub created_at: DateTime<Utc>,
}

impl AccessToken {
    /// Wraps a caller supplied token with unknown expiry
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            expires_in: None,
            created_at: Utc::now(),
        }
    }

    /// Instant at which the token expires, if its lifetime is known
    ///
    /// A lifetime too large to represent yields `None`.
    #[must_use]
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        let secs = i64::try_from(self.expires_in?).ok()?;
        self.created_at
            .checked_add_signed(TimeDelta::try_seconds(secs)?)
    }

    /// Checks if the token is expired or will expire within `margin_seconds`
    ///
    /// Tokens with unknown or unrepresentable lifetime are never reported as
    /// expired. A margin reaching past the representable range always does.
    #[must_use]
    pub fn is_expired(&self, margin_seconds: u64) -> bool {
        let Some(expiry) = self.expires_at() else {
            return false;
        };
        let deadline = i64::try_from(margin_seconds)
            .ok()
            .and_then(TimeDelta::try_seconds)
            .and_then(|margin| expiry.checked_sub_signed(margin));
        match deadline {
            Some(deadline) => deadline <= Utc::now(),
            None => true,
        }
    }
}
