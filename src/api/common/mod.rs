//
//  postman-client
//  api/common/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Common API Types for the Postman client
//!
//! This module provides the types shared by the transport and every resource
//! client: the error taxonomy, per-call request options, and small record
//! types that several resources embed.
//!
//! # Overview
//!
//! - [`PostmanError`] - Unified error type for all API operations
//! - [`ApiError`] - The normalized error reported by the remote API
//! - [`RequestOptions`] - Per-call workspace scope and content type
//! - [`ResourceRef`] - Lightweight `{id, name, uid}` reference
//!
//! # Example
//!
//! ```rust
//! use postman_client::api::common::PostmanError;
//!
//! fn describe(result: Result<(), PostmanError>) -> String {
//!     match result {
//!         Ok(()) => "ok".to_string(),
//!         Err(e) if e.is_transport() => format!("network problem, retry later: {e}"),
//!         Err(e) => match e.api_error() {
//!             Some(api) if api.is_authentication_error() => "check your API key".to_string(),
//!             _ => e.to_string(),
//!         },
//!     }
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

mod error;

pub use error::*;

/// Content type sent when a call does not override it.
pub const DEFAULT_CONTENT_TYPE: &str = "application/json";

/// Convenience alias used throughout the library.
pub type Result<T> = std::result::Result<T, PostmanError>;

/// Unified error type for all Postman API operations.
///
/// Every variant renders as `"<name>: <message>"` where `<name>` is the value
/// returned by [`PostmanError::name`].
///
/// | Variant | Name | When |
/// |---------|------|------|
/// | `Encoding`, `InvalidUrl`, `InvalidHeader` | `EncodingError` | The request could not be built locally |
/// | `Transport`, `Cancelled` | `TransportError` | No response was received |
/// | `Decoding` | `DecodingError` | A 2xx body did not match the expected shape |
/// | `MalformedError` | `MalformedErrorError` | An error body matched neither known shape |
/// | `Api` | remote symbolic name | The API reported a domain failure |
///
/// Nothing is retried by this crate. Transport failures are the only kind a
/// caller may reasonably retry.
#[derive(Error, Debug)]
pub enum PostmanError {
    /// The request payload could not be serialized to JSON.
    #[error("EncodingError: {0}")]
    Encoding(#[source] serde_json::Error),

    /// The request URL could not be parsed.
    #[error("EncodingError: invalid URL `{url}`: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    /// A header value (API key or content type) contains invalid characters.
    #[error("EncodingError: invalid header value: {0}")]
    InvalidHeader(#[source] reqwest::header::InvalidHeaderValue),

    /// A network-level failure before a response was received.
    #[error("TransportError: {0}")]
    Transport(#[source] reqwest::Error),

    /// The caller cancelled the request before a response was received.
    #[error("TransportError: request cancelled")]
    Cancelled,

    /// A successful response body could not be decoded.
    #[error("DecodingError: {0}")]
    Decoding(#[source] serde_json::Error),

    /// An error response body matched neither known error shape.
    #[error("MalformedErrorError: {reason} (HTTP {status})")]
    MalformedError {
        status: u16,
        #[source]
        reason: MalformedErrorBody,
    },

    /// The API reported a domain-level failure.
    #[error("{error}")]
    Api { status: u16, error: ApiError },
}

impl PostmanError {
    /// Symbolic name of this error, suitable for programmatic dispatch.
    pub fn name(&self) -> &str {
        match self {
            Self::Encoding(_) | Self::InvalidUrl { .. } | Self::InvalidHeader(_) => "EncodingError",
            Self::Transport(_) | Self::Cancelled => "TransportError",
            Self::Decoding(_) => "DecodingError",
            Self::MalformedError { .. } => "MalformedErrorError",
            Self::Api { error, .. } => &error.name,
        }
    }

    /// Returns `true` for failures that happened before any response arrived.
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_) | Self::Cancelled)
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }

    /// The normalized remote error, if the API reported one.
    pub fn api_error(&self) -> Option<&ApiError> {
        match self {
            Self::Api { error, .. } => Some(error),
            _ => None,
        }
    }

    /// HTTP status of the response that produced this error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } | Self::MalformedError { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Per-call request configuration.
///
/// Constructed fresh for each call. The default sends no workspace scope and
/// a `Content-Type` of `application/json`.
///
/// # Example
///
/// ```rust
/// use postman_client::api::common::RequestOptions;
///
/// let options = RequestOptions::new().with_workspace("1f0df51a-8658-4ee8-a2a1-d2567dfa09a9");
/// assert_eq!(options.workspace(), Some("1f0df51a-8658-4ee8-a2a1-d2567dfa09a9"));
/// assert_eq!(options.content_type(), "application/json");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestOptions {
    /// Workspace the operation is scoped to, sent as `?workspace=<id>`.
    pub workspace: Option<String>,

    /// Overrides the `Content-Type` header.
    pub content_type: Option<String>,
}

impl RequestOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_workspace(mut self, workspace: impl Into<String>) -> Self {
        self.workspace = Some(workspace.into());
        self
    }

    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }

    /// The workspace scope; empty strings count as unset.
    pub fn workspace(&self) -> Option<&str> {
        self.workspace.as_deref().filter(|w| !w.is_empty())
    }

    pub fn content_type(&self) -> &str {
        self.content_type.as_deref().unwrap_or(DEFAULT_CONTENT_TYPE)
    }
}

/// A lightweight reference to another resource.
///
/// Embedded in workspace listings and import results.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ResourceRef {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub uid: Option<String>,
}
