//
//  postman-client
//  api/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # API Client Layer
//!
//! This module provides the typed client for the Postman REST API.
//!
//! ## Architecture
//!
//! - [`client`]: The transport. Builds requests, injects the API key, scopes
//!   calls to a workspace, classifies status codes and normalizes errors.
//! - [`common`]: Shared types (errors, request options, resource references).
//! - [`resources`]: One client per resource family, each a thin mapping from
//!   a path and an envelope to the transport.
//! - [`client_set`]: A bundle of every resource client over one transport.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use postman_client::api::{ClientSet, RequestOptions, RestClient};
//! use std::time::Duration;
//!
//! # async fn example() -> postman_client::api::Result<()> {
//! let rest = RestClient::builder("PMAK-your-key")
//!     .timeout(Duration::from_secs(30))
//!     .build()?;
//! let clients = ClientSet::from_rest(rest);
//!
//! let options = RequestOptions::new().with_workspace("1f0df51a-8658-4ee8-a2a1-d2567dfa09a9");
//! for environment in clients.environments().list(&options).await? {
//!     println!("{}", environment.name.unwrap_or_default());
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Error Handling
//!
//! Every operation returns [`Result`], whose error is [`PostmanError`]:
//!
//! - `EncodingError`: the request could not be built
//! - `TransportError`: no response (network failure or cancellation)
//! - `DecodingError`: a 2xx body did not match the expected type
//! - `MalformedErrorError`: a non-2xx body matched no known error shape
//! - anything else: the remote [`ApiError`] name, e.g. `AuthenticationError`

pub mod client;

pub mod client_set;

pub mod common;

pub mod resources;

pub use client::{
    multipart_content_type, raw_body, ApiRequest, RestClient, RestClientBuilder, API_KEY_HEADER,
    DEFAULT_BASE_URL, NO_BODY,
};
pub use client_set::ClientSet;
pub use common::{ApiError, PostmanError, RequestOptions, ResourceRef, Result};
pub use resources::api_security::{ApiSchema, ApiSecurityClient, SchemaLanguage, SchemaType};
pub use resources::audit_logs::{AuditLogQuery, AuditLogsClient, SortOrder};
pub use resources::collections::{CollectionsClient, MergeForkRequest, MergeStrategy};
pub use resources::environments::EnvironmentsClient;
pub use resources::imports::{ImportResult, ImportsClient};
pub use resources::monitors::MonitorsClient;
pub use resources::users::UsersClient;
pub use resources::webhooks::WebhooksClient;
pub use resources::workspaces::{WorkspaceType, WorkspacesClient};
