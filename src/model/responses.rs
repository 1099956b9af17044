/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use crate::error::AppError;
use reqwest::Response;
use serde_json::Value;
use std::fmt;

/// Body returned by the CRM API
///
/// No schema is imposed: a body that parses as JSON is returned as
/// [`ApiResponse::Json`], anything else (including an empty body) as
/// [`ApiResponse::Text`].
#[derive(Debug, Clone, PartialEq)]
pub enum ApiResponse {
    /// Parsed JSON body
    Json(Value),
    /// Raw body that is not valid JSON
    Text(String),
}

impl ApiResponse {
    /// Classifies a raw body
    pub fn parse(body: String) -> Self {
        match serde_json::from_str(&body) {
            Ok(value) => ApiResponse::Json(value),
            Err(_) => ApiResponse::Text(body),
        }
    }

    /// Reads and classifies the body of an HTTP response
    pub async fn from_response(response: Response) -> Result<Self, AppError> {
        let body = response.text().await?;
        Ok(Self::parse(body))
    }

    /// Whether the body was valid JSON
    #[must_use]
    pub fn is_json(&self) -> bool {
        matches!(self, ApiResponse::Json(_))
    }

    /// The parsed JSON body, if any
    #[must_use]
    pub fn as_json(&self) -> Option<&Value> {
        match self {
            ApiResponse::Json(value) => Some(value),
            ApiResponse::Text(_) => None,
        }
    }

    /// The raw text body, if the body was not JSON
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            ApiResponse::Json(_) => None,
            ApiResponse::Text(text) => Some(text),
        }
    }

    /// Consumes the response, returning the JSON body if any
    #[must_use]
    pub fn into_json(self) -> Option<Value> {
        match self {
            ApiResponse::Json(value) => Some(value),
            ApiResponse::Text(_) => None,
        }
    }
}

impl fmt::Display for ApiResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiResponse::Json(value) => write!(f, "{value}"),
            ApiResponse::Text(text) => f.write_str(text),
        }
    }
}
