//
//  postman-client
//  api/common/error.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Remote error normalization.
//!
//! The Postman API reports failures with a JSON body nested under an `error`
//! key. Two shapes are emitted by different endpoint families:
//!
//! ```json
//! {"error": {"name": "AuthenticationError", "message": "Invalid API Key."}}
//! ```
//!
//! ```json
//! {"error": {"name": {"name": "Invalid schema", "reason": "Provided schema type is not supported."}}}
//! ```
//!
//! The second shape comes from the API security validation endpoint. Both are
//! normalized into a single [`ApiError`]. The JSON type of `name` decides which
//! shape is being read; the decoder never tries one shape and falls back to the
//! other.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

/// A domain-level failure reported by the remote API.
///
/// `name` is the symbolic identifier (for example `AuthenticationError` or
/// `instanceNotFoundError`) and is what callers should branch on. The textual
/// form is always `"<name>: <message>"`.
///
/// # Example
///
/// ```rust
/// use postman_client::api::common::ApiError;
///
/// let error = ApiError::new("instanceNotFoundError", "We could not find the collection you are looking for");
/// assert_eq!(
///     error.to_string(),
///     "instanceNotFoundError: We could not find the collection you are looking for"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Error)]
#[error("{name}: {message}")]
pub struct ApiError {
    /// Symbolic error name.
    pub name: String,

    /// Human-readable message.
    pub message: String,

    /// Extra key/value details, when the API sent any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Map<String, Value>>,
}

impl ApiError {
    pub fn new(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Returns `true` when the API rejected the API key.
    pub fn is_authentication_error(&self) -> bool {
        self.name == "AuthenticationError"
    }

    /// Normalizes an error object (the value under the `error` key).
    pub fn from_object(mut object: Map<String, Value>) -> Result<Self, MalformedErrorBody> {
        match object.remove("name") {
            None => Err(MalformedErrorBody::MissingName),
            Some(Value::String(name)) => {
                let message = match object.remove("message") {
                    None => return Err(MalformedErrorBody::MissingMessage),
                    Some(Value::String(message)) => message,
                    Some(_) => return Err(MalformedErrorBody::MessageNotString),
                };
                let details = match object.remove("details") {
                    Some(Value::Object(details)) => Some(details),
                    _ => None,
                };
                Ok(Self {
                    name,
                    message,
                    details,
                })
            }
            Some(Value::Object(mut nested)) => {
                let name = match nested.remove("name") {
                    None => return Err(MalformedErrorBody::MissingNestedName),
                    Some(Value::String(name)) => name,
                    Some(_) => return Err(MalformedErrorBody::NestedNameNotString),
                };
                let message = match nested.remove("reason") {
                    None => return Err(MalformedErrorBody::MissingReason),
                    Some(Value::String(reason)) => reason,
                    Some(_) => return Err(MalformedErrorBody::ReasonNotString),
                };
                Ok(Self {
                    name,
                    message,
                    details: None,
                })
            }
            Some(_) => Err(MalformedErrorBody::InvalidName),
        }
    }
}

impl<'de> Deserialize<'de> for ApiError {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let object = Map::<String, Value>::deserialize(deserializer)?;
        Self::from_object(object).map_err(serde::de::Error::custom)
    }
}

/// Why an error response body could not be normalized.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MalformedErrorBody {
    #[error("error body is not valid JSON: {0}")]
    InvalidJson(String),

    #[error("error body is not a JSON object")]
    NotAnObject,

    #[error("invalid postman error response: missing name")]
    MissingName,

    #[error("error.name is neither a string nor an object")]
    InvalidName,

    #[error("missing postman error message")]
    MissingMessage,

    #[error("error.message is not of type string")]
    MessageNotString,

    #[error("missing api security error name")]
    MissingNestedName,

    #[error("error.name.name is not of type string")]
    NestedNameNotString,

    #[error("missing api security error reason")]
    MissingReason,

    #[error("error.name.reason is not of type string")]
    ReasonNotString,
}

/// Decodes a raw error response body into an [`ApiError`].
///
/// The body is first parsed as untyped JSON. When it is an object carrying an
/// `error` key the value under that key is normalized, otherwise the body
/// itself is treated as the error object.
pub fn decode_error_body(body: &[u8]) -> Result<ApiError, MalformedErrorBody> {
    let value: Value = serde_json::from_slice(body)
        .map_err(|e| MalformedErrorBody::InvalidJson(e.to_string()))?;

    let object = match value {
        Value::Object(mut map) => match map.remove("error") {
            Some(Value::Object(inner)) => inner,
            Some(_) => return Err(MalformedErrorBody::NotAnObject),
            None => map,
        },
        _ => return Err(MalformedErrorBody::NotAnObject),
    };

    ApiError::from_object(object)
}
