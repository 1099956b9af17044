/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use crate::constants::{DEFAULT_ACCOUNTS_URL, DEFAULT_API_DOMAIN};
use crate::utils::config::{get_env_or_default, get_env_or_none};
use dotenv::dotenv;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// OAuth credentials for the Zoho CRM API
///
/// Secrets are accepted on deserialization but never serialized, so they do
/// not show up in the `Debug`/`Display` output of a configuration.
pub struct Credentials {
    /// Short lived access token, replaced on refresh
    #[serde(skip_serializing, default)]
    pub access_token: String,
    /// Long lived token used to mint new access tokens
    #[serde(skip_serializing, default)]
    pub refresh_token: String,
    /// OAuth client identifier
    pub client_id: String,
    /// OAuth client secret
    #[serde(skip_serializing, default)]
    pub client_secret: String,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Configuration for the REST API
pub struct RestApiConfig {
    /// Regional API domain, e.g. `https://www.zohoapis.eu`
    pub api_domain: String,
    /// Accounts server hosting the OAuth token endpoint
    pub accounts_url: String,
    /// Request timeout in seconds, `None` keeps the transport default
    pub timeout: Option<u64>,
    /// Send parameters as a form body on GET requests too
    pub form_body_on_get: bool,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Main configuration for the Zoho CRM client
pub struct Config {
    /// OAuth credentials
    pub credentials: Credentials,
    /// REST API configuration
    pub rest_api: RestApiConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    /// Creates a configuration from the environment
    ///
    /// Loads a `.env` file when present, then reads `ZOHO_ACCESS_TOKEN`,
    /// `ZOHO_REFRESH_TOKEN`, `ZOHO_CLIENT_ID`, `ZOHO_CLIENT_SECRET`,
    /// `ZOHO_API_DOMAIN`, `ZOHO_ACCOUNTS_URL`, `ZOHO_REST_TIMEOUT` and
    /// `ZOHO_FORM_BODY_ON_GET`.
    pub fn new() -> Self {
        match dotenv() {
            Ok(_) => debug!("Successfully loaded .env file"),
            Err(e) => debug!("Failed to load .env file: {e}"),
        }

        let access_token = get_env_or_default("ZOHO_ACCESS_TOKEN", String::new());
        let refresh_token = get_env_or_default("ZOHO_REFRESH_TOKEN", String::new());

        if access_token.is_empty() {
            warn!("ZOHO_ACCESS_TOKEN not found in environment variables or .env file");
        }
        if refresh_token.is_empty() {
            warn!("ZOHO_REFRESH_TOKEN not found, expired access tokens cannot be refreshed");
        }

        Config {
            credentials: Credentials {
                access_token,
                refresh_token,
                client_id: get_env_or_default("ZOHO_CLIENT_ID", String::new()),
                client_secret: get_env_or_default("ZOHO_CLIENT_SECRET", String::new()),
            },
            rest_api: RestApiConfig {
                api_domain: get_env_or_default("ZOHO_API_DOMAIN", DEFAULT_API_DOMAIN.to_string()),
                accounts_url: get_env_or_default(
                    "ZOHO_ACCOUNTS_URL",
                    DEFAULT_ACCOUNTS_URL.to_string(),
                ),
                timeout: get_env_or_none("ZOHO_REST_TIMEOUT"),
                form_body_on_get: get_env_or_default("ZOHO_FORM_BODY_ON_GET", true),
            },
        }
    }

    /// Creates a configuration from explicit credentials
    ///
    /// Every other setting takes its default value, the environment is not read.
    pub fn with_credentials(
        access_token: impl Into<String>,
        refresh_token: impl Into<String>,
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
        api_domain: impl Into<String>,
    ) -> Self {
        Config {
            credentials: Credentials {
                access_token: access_token.into(),
                refresh_token: refresh_token.into(),
                client_id: client_id.into(),
                client_secret: client_secret.into(),
            },
            rest_api: RestApiConfig {
                api_domain: api_domain.into(),
                accounts_url: DEFAULT_ACCOUNTS_URL.to_string(),
                timeout: None,
                form_body_on_get: true,
            },
        }
    }

    /// Overrides the accounts server used for token refresh
    #[must_use]
    pub fn accounts_url(mut self, accounts_url: impl Into<String>) -> Self {
        self.rest_api.accounts_url = accounts_url.into();
        self
    }
}
