//
//  postman-client
//  api/client_set.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! One transport, every resource client.

use super::client::RestClient;
use super::common::Result;
use super::resources::api_security::ApiSecurityClient;
use super::resources::audit_logs::AuditLogsClient;
use super::resources::collections::CollectionsClient;
use super::resources::environments::EnvironmentsClient;
use super::resources::imports::ImportsClient;
use super::resources::monitors::MonitorsClient;
use super::resources::users::UsersClient;
use super::resources::webhooks::WebhooksClient;
use super::resources::workspaces::WorkspacesClient;

/// Holds one [`RestClient`] and a handle to each resource client built on it.
///
/// All handles share the same connection pool, API key and diagnostic sink.
///
/// # Example
///
/// ```rust,no_run
/// use postman_client::api::{ClientSet, RequestOptions};
///
/// # async fn example() -> postman_client::api::Result<()> {
/// let clients = ClientSet::new("PMAK-your-key")?;
/// let me = clients.users().me(&RequestOptions::new()).await?;
/// println!("{}", me.user.username.unwrap_or_default());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ClientSet {
    rest: RestClient,
    collections: CollectionsClient,
    environments: EnvironmentsClient,
    workspaces: WorkspacesClient,
    monitors: MonitorsClient,
    webhooks: WebhooksClient,
    users: UsersClient,
    audit_logs: AuditLogsClient,
    api_security: ApiSecurityClient,
    imports: ImportsClient,
}

impl ClientSet {
    /// Builds a set against the public API with default settings.
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Ok(Self::from_rest(RestClient::new(api_key)?))
    }

    pub fn from_rest(rest: RestClient) -> Self {
        Self {
            collections: CollectionsClient::new(rest.clone()),
            environments: EnvironmentsClient::new(rest.clone()),
            workspaces: WorkspacesClient::new(rest.clone()),
            monitors: MonitorsClient::new(rest.clone()),
            webhooks: WebhooksClient::new(rest.clone()),
            users: UsersClient::new(rest.clone()),
            audit_logs: AuditLogsClient::new(rest.clone()),
            api_security: ApiSecurityClient::new(rest.clone()),
            imports: ImportsClient::new(rest.clone()),
            rest,
        }
    }

    pub fn rest(&self) -> &RestClient {
        &self.rest
    }

    pub fn collections(&self) -> &CollectionsClient {
        &self.collections
    }

    pub fn environments(&self) -> &EnvironmentsClient {
        &self.environments
    }

    pub fn workspaces(&self) -> &WorkspacesClient {
        &self.workspaces
    }

    pub fn monitors(&self) -> &MonitorsClient {
        &self.monitors
    }

    pub fn webhooks(&self) -> &WebhooksClient {
        &self.webhooks
    }

    pub fn users(&self) -> &UsersClient {
        &self.users
    }

    pub fn audit_logs(&self) -> &AuditLogsClient {
        &self.audit_logs
    }

    pub fn api_security(&self) -> &ApiSecurityClient {
        &self.api_security
    }

    pub fn imports(&self) -> &ImportsClient {
        &self.imports
    }
}
