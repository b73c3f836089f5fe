//
//  postman-client
//  api/resources/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Per-resource clients.
//!
//! Every client wraps a clone of the shared [`RestClient`](crate::api::RestClient),
//! builds the URL from a fixed path plus identifiers, wraps payloads in the
//! resource's envelope, and unwraps the response envelope. Each method is
//! exactly one HTTP round trip.
//!
//! | Module | Path | Client |
//! |--------|------|--------|
//! | [`collections`] | `/collections` | [`CollectionsClient`](collections::CollectionsClient) |
//! | [`environments`] | `/environments` | [`EnvironmentsClient`](environments::EnvironmentsClient) |
//! | [`workspaces`] | `/workspaces` | [`WorkspacesClient`](workspaces::WorkspacesClient) |
//! | [`monitors`] | `/monitors` | [`MonitorsClient`](monitors::MonitorsClient) |
//! | [`webhooks`] | `/webhooks` | [`WebhooksClient`](webhooks::WebhooksClient) |
//! | [`users`] | `/me` | [`UsersClient`](users::UsersClient) |
//! | [`audit_logs`] | `/audit/logs` | [`AuditLogsClient`](audit_logs::AuditLogsClient) |
//! | [`api_security`] | `/security/api-validation` | [`ApiSecurityClient`](api_security::ApiSecurityClient) |
//! | [`imports`] | `/import` | [`ImportsClient`](imports::ImportsClient) |

pub mod api_security;
pub mod audit_logs;
pub mod collections;
pub mod environments;
pub mod imports;
pub mod monitors;
pub mod users;
pub mod webhooks;
pub mod workspaces;
