/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use crate::error::AppError;
use reqwest::Method;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// CRM module exposed as a REST resource collection
///
/// The set is closed: any other name is rejected with
/// [`AppError::InvalidEntity`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Entity {
    /// Leads module
    Leads,
    /// Contacts module
    Contacts,
    /// Accounts module
    Accounts,
    /// Deals module
    Deals,
    /// Campaigns module
    Campaigns,
    /// Tasks module
    Tasks,
    /// Cases module
    Cases,
    /// Events module
    Events,
    /// Calls module
    Calls,
    /// Solutions module
    Solutions,
    /// Products module
    Products,
    /// Vendors module
    Vendors,
    /// Sales orders module
    SalesOrders,
    /// Purchase orders module
    PurchaseOrders,
    /// Invoices module
    Invoices,
    /// Price books module
    PriceBooks,
}

impl Entity {
    /// Every supported entity, in API documentation order
    pub const ALL: [Entity; 16] = [
        Entity::Leads,
        Entity::Contacts,
        Entity::Accounts,
        Entity::Deals,
        Entity::Campaigns,
        Entity::Tasks,
        Entity::Cases,
        Entity::Events,
        Entity::Calls,
        Entity::Solutions,
        Entity::Products,
        Entity::Vendors,
        Entity::SalesOrders,
        Entity::PurchaseOrders,
        Entity::Invoices,
        Entity::PriceBooks,
    ];

    /// Path segment used by the API for this entity
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Entity::Leads => "leads",
            Entity::Contacts => "contacts",
            Entity::Accounts => "accounts",
            Entity::Deals => "deals",
            Entity::Campaigns => "campaigns",
            Entity::Tasks => "tasks",
            Entity::Cases => "cases",
            Entity::Events => "events",
            Entity::Calls => "calls",
            Entity::Solutions => "solutions",
            Entity::Products => "products",
            Entity::Vendors => "vendors",
            Entity::SalesOrders => "sales_orders",
            Entity::PurchaseOrders => "purchase_orders",
            Entity::Invoices => "invoices",
            Entity::PriceBooks => "price_books",
        }
    }
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Entity {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Entity::ALL
            .iter()
            .find(|entity| entity.as_str() == s)
            .copied()
            .ok_or_else(|| AppError::InvalidEntity(s.to_string()))
    }
}

/// Operation that can be performed on an entity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Verb {
    /// Fetch the entity collection
    List,
    /// Fetch a single record
    Get,
    /// Create a record in the collection
    Create,
    /// Update a single record
    Update,
    /// Delete a single record
    Delete,
}

impl Verb {
    /// Every supported verb
    pub const ALL: [Verb; 5] = [Verb::List, Verb::Get, Verb::Create, Verb::Update, Verb::Delete];

    /// Name of the verb as exposed by the dispatcher
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Verb::List => "list",
            Verb::Get => "get",
            Verb::Create => "create",
            Verb::Update => "update",
            Verb::Delete => "delete",
        }
    }

    /// HTTP method issued for this verb
    #[must_use]
    pub fn method(&self) -> Method {
        match self {
            Verb::List | Verb::Get => Method::GET,
            Verb::Create => Method::POST,
            Verb::Update => Method::PUT,
            Verb::Delete => Method::DELETE,
        }
    }

    /// Whether the verb addresses a single record (`entity/id`)
    ///
    /// `list` and `create` always target the collection endpoint.
    #[must_use]
    pub fn targets_record(&self) -> bool {
        matches!(self, Verb::Get | Verb::Update | Verb::Delete)
    }
}

impl fmt::Display for Verb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Verb {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Verb::ALL
            .iter()
            .find(|verb| verb.as_str() == s)
            .copied()
            .ok_or_else(|| AppError::UnsupportedMethod(s.to_string()))
    }
}
