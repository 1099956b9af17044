/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! # Zoho CRM Client
//!
//! A lightweight asynchronous client for the Zoho CRM REST API (v2).
//!
//! The client authenticates every request with a Zoho OAuth access token,
//! builds entity URLs, dispatches the five CRUD verbs against a fixed set of
//! CRM modules and transparently refreshes the access token once when the
//! API answers `401 Unauthorized`.
//!
//! Responses are returned untouched: a parsed JSON value when the body is
//! valid JSON, the raw text otherwise.
//!
//! ## Usage
//!
//! ```ignore
//! use zohocrm::prelude::*;
//!
//! let client = Client::new("T1", "R1", "client-id", "client-secret", "https://www.zohoapis.eu")?;
//!
//! // GET https://www.zohoapis.eu/crm/v2/leads/123
//! let lead = client.entity(Entity::Leads).get("123", None).await?;
//!
//! // Entities can also be resolved by name
//! let deals = client.resolve("deals")?.list(None).await?;
//! ```

/// Application layer: configuration, session and service interfaces
pub mod application;
/// Entity dispatcher and public client facade
pub mod client;
/// Library wide constants
pub mod constants;
/// Error type shared by the whole crate
pub mod error;
/// Data model: entities, verbs, requests, responses and tokens
pub mod model;
/// Commonly used re-exports
pub mod prelude;
/// Environment and logging helpers
pub mod utils;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the library version
#[must_use]
pub fn version() -> &'static str {
    VERSION
}
