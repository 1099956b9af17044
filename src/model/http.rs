/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! URL and body encoding for CRM requests
//!
//! Parameters are a JSON object. String values are encoded verbatim, any
//! other value is encoded as its JSON text (`true`, `12`, `null`, ...).
//! Insertion order is preserved.

use crate::constants::API_PATH;
use crate::error::AppError;
use crate::model::entity::Entity;
use serde_json::{Map, Value};
use url::form_urlencoded;

/// Key/value parameters sent with a request
pub type Params = Map<String, Value>;

/// Builds the base API url (`<domain>/crm/v2/`) from an API domain
pub fn api_url(api_domain: &str) -> String {
    format!("{}{}", api_domain.trim_end_matches('/'), API_PATH)
}

/// Builds the url of an entity collection, or of a record when `object_id` is present
///
/// An empty identifier addresses the collection.
pub fn entity_url(api_url: &str, entity: Entity, object_id: Option<&str>) -> String {
    match object_id.filter(|id| !id.is_empty()) {
        Some(id) => format!("{api_url}{entity}/{id}"),
        None => format!("{api_url}{entity}"),
    }
}

/// Appends `params` to `url` as a url-encoded query string
///
/// Uses `&` when the url already carries a query, `?` otherwise. Empty
/// params leave the url untouched.
pub fn append_query(url: &str, params: &Params) -> String {
    if params.is_empty() {
        return url.to_string();
    }
    let separator = if url.contains('?') { '&' } else { '?' };
    format!("{url}{separator}{}", encode_params(params))
}

/// Url-encodes `params` (`application/x-www-form-urlencoded`)
pub fn encode_params(params: &Params) -> String {
    let mut serializer = form_urlencoded::Serializer::new(String::new());
    for (key, value) in params {
        serializer.append_pair(key, &param_value(value));
    }
    serializer.finish()
}

/// Flattens `params` into the key/value pairs of a form body
pub fn form_pairs(params: &Params) -> Vec<(String, String)> {
    params
        .iter()
        .map(|(key, value)| (key.clone(), param_value(value)))
        .collect()
}

fn param_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Validates caller supplied request data
///
/// `None` means no parameters. Anything other than a JSON object fails with
/// [`AppError::InvalidData`].
pub fn params_from_value(data: Option<Value>) -> Result<Params, AppError> {
    match data {
        None => Ok(Params::new()),
        Some(Value::Object(map)) => Ok(map),
        Some(other) => Err(AppError::InvalidData(value_kind(&other).to_string())),
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
