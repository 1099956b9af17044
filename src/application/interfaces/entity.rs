/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use crate::error::AppError;
use crate::model::entity::Entity;
use crate::model::http::Params;
use crate::model::responses::ApiResponse;
use async_trait::async_trait;

/// Interface for the CRUD operations available on every CRM entity
///
/// GET verbs send `params` as a query string; every verb also sends them as
/// a form body unless the implementation is configured otherwise.
#[async_trait]
pub trait EntityService: Send + Sync {
    /// Lists the records of an entity collection
    ///
    /// # Arguments
    /// * `entity` - Target entity
    /// * `params` - Query parameters (e.g. `page`, `per_page`, `fields`)
    async fn list(&self, entity: Entity, params: Params) -> Result<ApiResponse, AppError>;

    /// Gets a single record
    ///
    /// # Arguments
    /// * `entity` - Target entity
    /// * `object_id` - Record identifier, the collection is addressed when absent
    /// * `params` - Query parameters
    async fn get(
        &self,
        entity: Entity,
        object_id: Option<&str>,
        params: Params,
    ) -> Result<ApiResponse, AppError>;

    /// Creates a record in the entity collection
    async fn create(&self, entity: Entity, params: Params) -> Result<ApiResponse, AppError>;

    /// Updates a single record
    async fn update(
        &self,
        entity: Entity,
        object_id: Option<&str>,
        params: Params,
    ) -> Result<ApiResponse, AppError>;

    /// Deletes a single record
    async fn delete(
        &self,
        entity: Entity,
        object_id: Option<&str>,
        params: Params,
    ) -> Result<ApiResponse, AppError>;
}
