/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Authenticated session for the Zoho CRM API
//!
//! The session owns the credentials and the HTTP client. Every request is
//! authenticated with `Authorization: Zoho-oauthtoken <access_token>`. When
//! the API answers `401 Unauthorized` the access token is refreshed once and
//! the identical request is reissued once; a second `401` is handed back to
//! the caller as a regular response body.

use crate::application::config::Config;
use crate::application::interfaces::entity::EntityService;
use crate::constants::{AUTH_SCHEME, REFRESH_GRANT_TYPE, TOKEN_PATH, USER_AGENT};
use crate::error::AppError;
use crate::model::auth::{AccessToken, TokenResponse};
use crate::model::entity::{Entity, Verb};
use crate::model::http::{Params, api_url};
use crate::model::requests::RequestDescriptor;
use crate::model::responses::ApiResponse;
use async_trait::async_trait;
use reqwest::header::{AUTHORIZATION, HeaderValue};
use reqwest::{Client as HttpClient, Method, Response, StatusCode};
use std::time::Duration;
use tokio::sync::{Mutex, RwLock};
use tracing::{debug, error, info, warn};
use url::form_urlencoded;

/// Credentials and HTTP state shared by every request
///
/// The access token is the only mutable state. Refreshes are serialized: a
/// caller that saw a `401` only mints a new token if nobody replaced the one
/// it used in the meantime.
pub struct Session {
    api_url: String,
    token_url: String,
    refresh_token: String,
    client_id: String,
    client_secret: String,
    form_body_on_get: bool,
    http_client: HttpClient,
    access_token: RwLock<AccessToken>,
    refresh_lock: Mutex<()>,
}

impl Session {
    /// Creates a new session
    ///
    /// # Arguments
    /// * `config` - Configuration containing credentials and API settings
    ///
    /// # Returns
    /// * `Ok(Session)` - Session ready to issue requests
    /// * `Err(AppError)` - If the HTTP client cannot be built
    pub fn new(config: &Config) -> Result<Self, AppError> {
        let mut builder = HttpClient::builder().user_agent(USER_AGENT);
        if let Some(secs) = config.rest_api.timeout {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let http_client = builder.build()?;

        let credentials = &config.credentials;
        Ok(Self {
            api_url: api_url(&config.rest_api.api_domain),
            token_url: format!(
                "{}{}",
                config.rest_api.accounts_url.trim_end_matches('/'),
                TOKEN_PATH
            ),
            refresh_token: credentials.refresh_token.clone(),
            client_id: credentials.client_id.clone(),
            client_secret: credentials.client_secret.clone(),
            form_body_on_get: config.rest_api.form_body_on_get,
            http_client,
            access_token: RwLock::new(AccessToken::new(credentials.access_token.clone())),
            refresh_lock: Mutex::new(()),
        })
    }

    /// Base API url (`<domain>/crm/v2/`)
    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    /// Current access token
    pub async fn access_token(&self) -> String {
        self.access_token.read().await.token.clone()
    }

    /// Refresh token used to mint new access tokens
    pub fn refresh_token(&self) -> &str {
        &self.refresh_token
    }

    /// Checks if the current access token is known to expire within `margin_seconds`
    pub async fn access_token_expired(&self, margin_seconds: u64) -> bool {
        self.access_token.read().await.is_expired(margin_seconds)
    }

    /// Mints a new access token from the refresh token
    ///
    /// # Returns
    /// * `Ok(String)` - The new access token, already stored in the session
    /// * `Err(AppError::Auth)` - If the token endpoint did not return a usable token
    pub async fn refresh_access_token(&self) -> Result<String, AppError> {
        let _guard = self.refresh_lock.lock().await;
        self.exchange_refresh_token().await
    }

    /// Refreshes the access token unless `stale` was already replaced
    async fn refresh_after(&self, stale: &str) -> Result<String, AppError> {
        let _guard = self.refresh_lock.lock().await;
        {
            let current = self.access_token.read().await;
            if current.token != stale {
                debug!("Access token already refreshed by a concurrent request");
                return Ok(current.token.clone());
            }
        }
        self.exchange_refresh_token().await
    }

    /// Calls the token endpoint; the caller must hold `refresh_lock`
    async fn exchange_refresh_token(&self) -> Result<String, AppError> {
        let query = form_urlencoded::Serializer::new(String::new())
            .append_pair("refresh_token", &self.refresh_token)
            .append_pair("client_id", &self.client_id)
            .append_pair("client_secret", &self.client_secret)
            .append_pair("grant_type", REFRESH_GRANT_TYPE)
            .finish();
        let url = format!("{}?{}", self.token_url, query);

        info!("Refreshing access token");
        debug!("POST {}", self.token_url);

        let response = self.http_client.post(&url).send().await?;
        let status = response.status();
        debug!("Token endpoint status: {}", status);

        let body = response.text().await?;
        let token_response: TokenResponse = serde_json::from_str(&body)?;
        if let Some(domain) = &token_response.api_domain {
            debug!("Token issued for API domain {}", domain);
        }

        let token = match token_response.into_access_token() {
            Ok(token) => token,
            Err(e) => {
                error!("Token refresh failed with status {}: {}", status, e);
                return Err(e);
            }
        };

        let value = token.token.clone();
        *self.access_token.write().await = token;

        info!("✓ Access token refreshed");
        Ok(value)
    }

    /// Issues a request, refreshing the token and retrying once on `401`
    ///
    /// # Returns
    /// * `Ok(ApiResponse)` - Parsed JSON body, or the raw text when the body is not JSON
    /// * `Err(AppError)` - On transport failure or if the token refresh fails
    pub async fn dispatch(&self, request: &RequestDescriptor) -> Result<ApiResponse, AppError> {
        let method = request.method();
        let url = request.url(&self.api_url);
        let body = request.form_body(self.form_body_on_get);

        let token = self.access_token().await;
        let response = self
            .send(method.clone(), &url, body.as_deref(), &token)
            .await?;

        if response.status() != StatusCode::UNAUTHORIZED {
            return ApiResponse::from_response(response).await;
        }

        warn!(
            "Unauthorized response for {} {}, refreshing access token and retrying",
            method, url
        );
        let token = self.refresh_after(&token).await?;
        let response = self.send(method, &url, body.as_deref(), &token).await?;

        if response.status() == StatusCode::UNAUTHORIZED {
            warn!("Still unauthorized after token refresh, returning response body as is");
        }
        ApiResponse::from_response(response).await
    }

    async fn send(
        &self,
        method: Method,
        url: &str,
        body: Option<&[(String, String)]>,
        token: &str,
    ) -> Result<Response, AppError> {
        debug!("{} {}", method, url);

        let mut request = self
            .http_client
            .request(method, url)
            .header(AUTHORIZATION, auth_header(token)?);

        if let Some(pairs) = body {
            request = request.form(pairs);
        }

        let response = request.send().await?;
        debug!("Response status: {}", response.status());
        Ok(response)
    }
}

/// Builds the `Authorization` header value for `token`
///
/// Fails with [`AppError::InvalidInput`] when the token holds characters not
/// allowed in an HTTP header (control characters, line breaks).
fn auth_header(token: &str) -> Result<HeaderValue, AppError> {
    let mut value = HeaderValue::from_str(&format!("{AUTH_SCHEME} {token}")).map_err(|_| {
        AppError::InvalidInput("access token is not a valid header value".to_string())
    })?;
    value.set_sensitive(true);
    Ok(value)
}

#[async_trait]
impl EntityService for Session {
    async fn list(&self, entity: Entity, params: Params) -> Result<ApiResponse, AppError> {
        self.dispatch(&RequestDescriptor::new(entity, Verb::List, None, params))
            .await
    }

    async fn get(
        &self,
        entity: Entity,
        object_id: Option<&str>,
        params: Params,
    ) -> Result<ApiResponse, AppError> {
        self.dispatch(&RequestDescriptor::new(entity, Verb::Get, object_id, params))
            .await
    }

    async fn create(&self, entity: Entity, params: Params) -> Result<ApiResponse, AppError> {
        self.dispatch(&RequestDescriptor::new(entity, Verb::Create, None, params))
            .await
    }

    async fn update(
        &self,
        entity: Entity,
        object_id: Option<&str>,
        params: Params,
    ) -> Result<ApiResponse, AppError> {
        self.dispatch(&RequestDescriptor::new(entity, Verb::Update, object_id, params))
            .await
    }

    async fn delete(
        &self,
        entity: Entity,
        object_id: Option<&str>,
        params: Params,
    ) -> Result<ApiResponse, AppError> {
        self.dispatch(&RequestDescriptor::new(entity, Verb::Delete, object_id, params))
            .await
    }
}
