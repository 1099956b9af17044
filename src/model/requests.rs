/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use crate::model::entity::{Entity, Verb};
use crate::model::http::{Params, append_query, entity_url, form_pairs};
use reqwest::Method;

/// A single CRM call: entity, verb, optional record id and parameters
///
/// Built per call and never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestDescriptor {
    /// Target entity
    pub entity: Entity,
    /// Operation to perform
    pub verb: Verb,
    /// Record identifier, only kept for verbs addressing a single record
    pub object_id: Option<String>,
    /// Request parameters
    pub params: Params,
}

impl RequestDescriptor {
    /// Creates a descriptor, discarding `object_id` for collection verbs
    pub fn new(entity: Entity, verb: Verb, object_id: Option<&str>, params: Params) -> Self {
        let object_id = if verb.targets_record() {
            object_id.map(String::from)
        } else {
            None
        };
        Self {
            entity,
            verb,
            object_id,
            params,
        }
    }

    /// HTTP method of the request
    #[must_use]
    pub fn method(&self) -> Method {
        self.verb.method()
    }

    /// Full request url under `api_url`
    ///
    /// GET requests carry their params as a query string.
    pub fn url(&self, api_url: &str) -> String {
        let url = entity_url(api_url, self.entity, self.object_id.as_deref());
        if self.method() == Method::GET {
            append_query(&url, &self.params)
        } else {
            url
        }
    }

    /// Form body of the request, `None` when there are no params
    ///
    /// When `include_on_get` is false, GET requests never carry a body.
    pub fn form_body(&self, include_on_get: bool) -> Option<Vec<(String, String)>> {
        if self.params.is_empty() || (!include_on_get && self.method() == Method::GET) {
            return None;
        }
        Some(form_pairs(&self.params))
    }
}
