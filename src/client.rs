/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Client for the Zoho CRM API
//!
//! This module provides the public facade:
//! - Entity dispatch (`client.entity(Entity::Leads).get(..)`)
//! - Entity resolution by name (`client.resolve("leads")?`)
//! - Transparent access token refresh on `401 Unauthorized`
//!
//! # Example
//! ```ignore
//! use zohocrm::prelude::*;
//!
//! let client = Client::from_config(Config::new())?;
//!
//! let lead = client.entity(Entity::Leads).get("123", None).await?;
//! let created = client
//!     .resolve("contacts")?
//!     .call(Verb::Create, None, Some(serde_json::json!({"Last_Name": "Doe"})))
//!     .await?;
//! ```

use crate::application::config::Config;
use crate::application::interfaces::entity::EntityService;
use crate::application::session::Session;
use crate::error::AppError;
use crate::model::entity::{Entity, Verb};
use crate::model::http::{Params, params_from_value};
use crate::model::responses::ApiResponse;
use serde_json::Value;
use std::sync::Arc;
use tracing::debug;

/// Client for the Zoho CRM API with automatic token refresh
///
/// Cloning is cheap: clones share the same session and credentials.
#[derive(Clone)]
pub struct Client {
    session: Arc<Session>,
}

impl Client {
    /// Creates a new client from explicit credentials
    ///
    /// # Arguments
    /// * `access_token` - Current access token
    /// * `refresh_token` - Refresh token used to mint new access tokens
    /// * `client_id` - OAuth client identifier
    /// * `client_secret` - OAuth client secret
    /// * `api_domain` - Regional API domain, e.g. `https://www.zohoapis.eu`
    ///
    /// # Returns
    /// * `Ok(Client)` - Client ready to use, no request is made
    /// * `Err(AppError)` - If the HTTP client cannot be built
    pub fn new(
        access_token: impl Into<String>,
        refresh_token: impl Into<String>,
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
        api_domain: impl Into<String>,
    ) -> Result<Self, AppError> {
        Self::from_config(Config::with_credentials(
            access_token,
            refresh_token,
            client_id,
            client_secret,
            api_domain,
        ))
    }

    /// Creates a new client from a configuration
    pub fn from_config(config: Config) -> Result<Self, AppError> {
        let session = Session::new(&config)?;
        Ok(Self {
            session: Arc::new(session),
        })
    }

    /// Returns the dispatcher of a typed entity
    pub fn entity(&self, entity: Entity) -> EntityRequest<'_> {
        EntityRequest {
            session: &self.session,
            entity,
        }
    }

    /// Resolves an entity by name
    ///
    /// # Returns
    /// * `Ok(EntityRequest)` - Dispatcher bound to the entity
    /// * `Err(AppError::InvalidEntity)` - If the name is not a supported entity
    pub fn resolve(&self, name: &str) -> Result<EntityRequest<'_>, AppError> {
        let entity: Entity = name.parse()?;
        Ok(self.entity(entity))
    }

    /// Calls `method` on the entity `entity`, both given by name
    ///
    /// Validation happens in call order: entity name, then `data`, then the
    /// method name. Nothing is sent unless all three are valid.
    pub async fn call(
        &self,
        entity: &str,
        method: &str,
        object_id: Option<&str>,
        data: Option<Value>,
    ) -> Result<ApiResponse, AppError> {
        self.resolve(entity)?.method(method).call(object_id, data).await
    }

    /// Current access token
    pub async fn access_token(&self) -> String {
        self.session.access_token().await
    }

    /// Refresh token
    pub fn refresh_token(&self) -> &str {
        self.session.refresh_token()
    }

    /// Mints and stores a new access token, returning it
    pub async fn refresh_access_token(&self) -> Result<String, AppError> {
        self.session.refresh_access_token().await
    }

    /// Checks if the access token is known to be expired
    ///
    /// # Arguments
    /// * `margin_seconds` - Safety margin in seconds (default: 60 = 1 minute)
    ///
    /// Tokens supplied by the caller have an unknown lifetime and are never
    /// reported as expired; the API's `401` remains the refresh trigger.
    pub async fn access_token_expired(&self, margin_seconds: Option<u64>) -> bool {
        self.session
            .access_token_expired(margin_seconds.unwrap_or(60))
            .await
    }

    /// Gets a reference to the underlying session
    pub fn session(&self) -> &Session {
        &self.session
    }
}

/// Dispatcher bound to one entity
///
/// Cheap to build and meant to be discarded after the call.
#[derive(Clone, Copy)]
pub struct EntityRequest<'a> {
    session: &'a Session,
    entity: Entity,
}

impl<'a> EntityRequest<'a> {
    /// Entity this dispatcher targets
    pub fn entity(&self) -> Entity {
        self.entity
    }

    /// Lists the entity collection (`GET entity?params`)
    pub async fn list(&self, params: Option<Params>) -> Result<ApiResponse, AppError> {
        self.session
            .list(self.entity, params.unwrap_or_default())
            .await
    }

    /// Gets a single record (`GET entity/id?params`)
    pub async fn get(
        &self,
        object_id: &str,
        params: Option<Params>,
    ) -> Result<ApiResponse, AppError> {
        self.session
            .get(self.entity, Some(object_id), params.unwrap_or_default())
            .await
    }

    /// Creates a record (`POST entity`)
    pub async fn create(&self, params: Params) -> Result<ApiResponse, AppError> {
        self.session.create(self.entity, params).await
    }

    /// Updates a record (`PUT entity/id`)
    pub async fn update(&self, object_id: &str, params: Params) -> Result<ApiResponse, AppError> {
        self.session
            .update(self.entity, Some(object_id), params)
            .await
    }

    /// Deletes a record (`DELETE entity/id`)
    pub async fn delete(
        &self,
        object_id: &str,
        params: Option<Params>,
    ) -> Result<ApiResponse, AppError> {
        self.session
            .delete(self.entity, Some(object_id), params.unwrap_or_default())
            .await
    }

    /// Performs `verb` with untyped data
    ///
    /// # Arguments
    /// * `verb` - Operation to perform
    /// * `object_id` - Record identifier, ignored by `list` and `create`
    /// * `data` - Parameters; must be a JSON object when present
    ///
    /// # Returns
    /// * `Err(AppError::InvalidData)` - If `data` is not an object, before any request
    pub async fn call(
        &self,
        verb: Verb,
        object_id: Option<&str>,
        data: Option<Value>,
    ) -> Result<ApiResponse, AppError> {
        let params = params_from_value(data)?;
        self.dispatch(verb, object_id, params).await
    }

    /// Records a verb by name; it is validated when the call is made
    pub fn method(&self, name: &str) -> MethodCall<'a> {
        MethodCall {
            request: *self,
            method: name.to_string(),
        }
    }

    async fn dispatch(
        &self,
        verb: Verb,
        object_id: Option<&str>,
        params: Params,
    ) -> Result<ApiResponse, AppError> {
        debug!("Dispatching {}.{}", self.entity, verb);
        match verb {
            Verb::List => self.session.list(self.entity, params).await,
            Verb::Get => self.session.get(self.entity, object_id, params).await,
            Verb::Create => self.session.create(self.entity, params).await,
            Verb::Update => self.session.update(self.entity, object_id, params).await,
            Verb::Delete => self.session.delete(self.entity, object_id, params).await,
        }
    }
}

/// Entity and verb name captured for a single call
pub struct MethodCall<'a> {
    request: EntityRequest<'a>,
    method: String,
}

impl MethodCall<'_> {
    /// Name of the recorded verb
    pub fn method(&self) -> &str {
        &self.method
    }

    /// Performs the call
    ///
    /// # Returns
    /// * `Err(AppError::InvalidData)` - If `data` is not an object
    /// * `Err(AppError::UnsupportedMethod)` - If the recorded verb does not exist
    pub async fn call(
        &self,
        object_id: Option<&str>,
        data: Option<Value>,
    ) -> Result<ApiResponse, AppError> {
        let params = params_from_value(data)?;
        let verb: Verb = self.method.parse()?;
        self.request.dispatch(verb, object_id, params).await
    }
}
