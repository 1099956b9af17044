/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! # Zoho CRM Client Prelude
//!
//! Brings the commonly used types into scope.
//!
//! ```rust
//! use zohocrm::prelude::*;
//!
//! let entity: Entity = "leads".parse().unwrap();
//! assert_eq!(entity, Entity::Leads);
//! ```

// ============================================================================
// CORE CONFIGURATION AND SETUP
// ============================================================================

/// Configuration for the Zoho CRM client
pub use crate::application::config::{Config, Credentials, RestApiConfig};

/// Library version information
pub use crate::{VERSION, version};

// ============================================================================
// ERROR HANDLING
// ============================================================================

/// Main error type for the library
pub use crate::error::AppError;

// ============================================================================
// CLIENT AND SESSION
// ============================================================================

/// Client facade and entity dispatchers
pub use crate::client::{Client, EntityRequest, MethodCall};

/// Authenticated session
pub use crate::application::session::Session;

/// Entity CRUD interface
pub use crate::application::interfaces::EntityService;

// ============================================================================
// DATA MODEL
// ============================================================================

/// Entities and verbs
pub use crate::model::entity::{Entity, Verb};

/// Request parameters and descriptors
pub use crate::model::http::Params;
pub use crate::model::requests::RequestDescriptor;

/// Response bodies
pub use crate::model::responses::ApiResponse;

/// OAuth tokens
pub use crate::model::auth::{AccessToken, TokenResponse};

// ============================================================================
// UTILITIES
// ============================================================================

/// Logging setup
pub use crate::utils::logger::setup_logger;
