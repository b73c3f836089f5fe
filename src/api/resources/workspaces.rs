//
//  postman-client
//  api/resources/workspaces.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Workspace API types and client.
//!
//! Workspaces own collections, environments, mocks, monitors and APIs. The
//! listing endpoint accepts a `type` filter; a single workspace carries
//! [`ResourceRef`]s to everything it contains.
//!
//! # Example
//!
//! ```rust,no_run
//! use postman_client::api::{RequestOptions, RestClient, WorkspaceType, WorkspacesClient};
//!
//! # async fn example() -> postman_client::api::Result<()> {
//! let workspaces = WorkspacesClient::new(RestClient::new("PMAK-your-key")?);
//! let team = workspaces
//!     .list(Some(WorkspaceType::Team), &RequestOptions::new())
//!     .await?;
//! println!("{} team workspaces", team.len());
//! # Ok(())
//! # }
//! ```

use std::fmt;

use chrono::{DateTime, Utc};
use reqwest::Method;
use serde::{Deserialize, Serialize};
use serde_json::value::RawValue;

use crate::api::client::{raw_body, RestClient, NO_BODY};
use crate::api::common::{RequestOptions, ResourceRef, Result};

const PATH: &str = "/workspaces";

/// A workspace.
///
/// Fields other than `name`, `workspace_type` and `description` are output
/// only and are ignored by the API on create/update.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Workspace {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub workspace_type: Option<WorkspaceType>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub visibility: Option<WorkspaceVisibility>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_by: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_by: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub collections: Vec<ResourceRef>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub environments: Vec<ResourceRef>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub mocks: Vec<ResourceRef>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub monitors: Vec<ResourceRef>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub apis: Vec<ResourceRef>,
}

/// Workspace type. Values this crate does not know decode to `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum WorkspaceType {
    Personal,
    Team,
    Other(String),
}

impl WorkspaceType {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Personal => "personal",
            Self::Team => "team",
            Self::Other(other) => other,
        }
    }
}

impl From<String> for WorkspaceType {
    fn from(value: String) -> Self {
        match value.as_str() {
            "personal" => Self::Personal,
            "team" => Self::Team,
            _ => Self::Other(value),
        }
    }
}

impl From<WorkspaceType> for String {
    fn from(value: WorkspaceType) -> Self {
        match value {
            WorkspaceType::Other(other) => other,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for WorkspaceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parses a `--type` argument; only the documented types are accepted.
impl std::str::FromStr for WorkspaceType {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "personal" => Ok(Self::Personal),
            "team" => Ok(Self::Team),
            other => Err(format!("unknown workspace type '{other}' (expected personal or team)")),
        }
    }
}

/// Who can see a workspace. Unknown values decode to `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum WorkspaceVisibility {
    OnlyMe,
    Personal,
    Team,
    PrivateTeam,
    Public,
    Other(String),
}

impl WorkspaceVisibility {
    pub fn as_str(&self) -> &str {
        match self {
            Self::OnlyMe => "only-me",
            Self::Personal => "personal",
            Self::Team => "team",
            Self::PrivateTeam => "private-team",
            Self::Public => "public",
            Self::Other(other) => other,
        }
    }
}

impl From<String> for WorkspaceVisibility {
    fn from(value: String) -> Self {
        match value.as_str() {
            "only-me" => Self::OnlyMe,
            "personal" => Self::Personal,
            "team" => Self::Team,
            "private-team" => Self::PrivateTeam,
            "public" => Self::Public,
            _ => Self::Other(value),
        }
    }
}

impl From<WorkspaceVisibility> for String {
    fn from(value: WorkspaceVisibility) -> Self {
        match value {
            WorkspaceVisibility::Other(other) => other,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for WorkspaceVisibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Serialize)]
struct WorkspaceBody<'a> {
    workspace: &'a Workspace,
}

#[derive(Deserialize)]
struct WorkspaceEnvelope {
    workspace: Workspace,
}

#[derive(Deserialize)]
struct WorkspacesEnvelope {
    #[serde(default)]
    workspaces: Vec<Workspace>,
}

/// Client for `/workspaces`.
#[derive(Debug, Clone)]
pub struct WorkspacesClient {
    rest: RestClient,
}

impl WorkspacesClient {
    pub fn new(rest: RestClient) -> Self {
        Self { rest }
    }

    pub async fn create(&self, workspace: &Workspace, options: &RequestOptions) -> Result<Workspace> {
        let body = raw_body(&WorkspaceBody { workspace })?;
        self.create_json(&body, options).await
    }

    /// Like [`create`](Self::create), with a pre-encoded `{"workspace": {...}}` body.
    pub async fn create_json(&self, body: &RawValue, options: &RequestOptions) -> Result<Workspace> {
        let request = self
            .rest
            .new_request(Method::POST, &self.rest.url(PATH), Some(body))?;
        let response: WorkspaceEnvelope = self.rest.execute(request, options).await?;
        Ok(response.workspace)
    }

    pub async fn get(&self, id: &str, options: &RequestOptions) -> Result<Workspace> {
        let request = self
            .rest
            .new_request(Method::GET, &self.rest.url(&format!("{PATH}/{id}")), NO_BODY)?;
        let response: WorkspaceEnvelope = self.rest.execute(request, options).await?;
        Ok(response.workspace)
    }

    /// Lists workspaces, optionally only those of one type.
    pub async fn list(
        &self,
        workspace_type: Option<WorkspaceType>,
        options: &RequestOptions,
    ) -> Result<Vec<Workspace>> {
        let request = self
            .rest
            .new_request(Method::GET, &self.rest.url(PATH), NO_BODY)?
            .query_opt("type", workspace_type);
        let response: WorkspacesEnvelope = self.rest.execute(request, options).await?;
        Ok(response.workspaces)
    }

    pub async fn update(
        &self,
        id: &str,
        workspace: &Workspace,
        options: &RequestOptions,
    ) -> Result<Workspace> {
        let body = raw_body(&WorkspaceBody { workspace })?;
        self.update_json(id, &body, options).await
    }

    /// Like [`update`](Self::update), with a pre-encoded body.
    pub async fn update_json(
        &self,
        id: &str,
        body: &RawValue,
        options: &RequestOptions,
    ) -> Result<Workspace> {
        let request = self.rest.new_request(
            Method::PUT,
            &self.rest.url(&format!("{PATH}/{id}")),
            Some(body),
        )?;
        let response: WorkspaceEnvelope = self.rest.execute(request, options).await?;
        Ok(response.workspace)
    }

    pub async fn delete(&self, id: &str, options: &RequestOptions) -> Result<Workspace> {
        let request = self
            .rest
            .new_request(Method::DELETE, &self.rest.url(&format!("{PATH}/{id}")), NO_BODY)?;
        let response: WorkspaceEnvelope = self.rest.execute(request, options).await?;
        Ok(response.workspace)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Matcher;
    use serde_json::json;

    fn client(server: &mockito::ServerGuard) -> WorkspacesClient {
        WorkspacesClient::new(
            RestClient::builder("api-key")
                .base_url(server.url())
                .build()
                .unwrap(),
        )
    }

    #[test]
    fn test_workspace_type_parse() {
        assert_eq!("Team".parse::<WorkspaceType>(), Ok(WorkspaceType::Team));
        assert_eq!("personal".parse::<WorkspaceType>(), Ok(WorkspaceType::Personal));
        assert!("public".parse::<WorkspaceType>().is_err());
    }

    #[test]
    fn test_visibility_wire_names() {
        assert_eq!(
            serde_json::to_value(WorkspaceVisibility::OnlyMe).unwrap(),
            json!("only-me")
        );
        assert_eq!(
            serde_json::to_value(WorkspaceVisibility::PrivateTeam).unwrap(),
            json!("private-team")
        );
    }

    #[test]
    fn test_unknown_values_kept_verbatim() {
        let workspace: Workspace =
            serde_json::from_value(json!({"type": "partner", "visibility": "partner-only"})).unwrap();
        assert_eq!(workspace.workspace_type, Some(WorkspaceType::Other("partner".into())));
        assert_eq!(
            workspace.visibility,
            Some(WorkspaceVisibility::Other("partner-only".into()))
        );
        assert_eq!(
            serde_json::to_value(&workspace).unwrap(),
            json!({"type": "partner", "visibility": "partner-only"})
        );
    }

    #[tokio::test]
    async fn test_update_echo_decodes_to_same_workspace() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("PUT", "/workspaces/ws-1")
            .match_body(Matcher::PartialJson(json!({"workspace": {"id": "ws-1"}})))
            .with_body_from_request(|request| request.body().unwrap().clone())
            .create_async()
            .await;

        let sent = Workspace {
            id: Some("ws-1".into()),
            name: Some("Team Workspace".into()),
            workspace_type: Some(WorkspaceType::Team),
            description: Some("Shared".into()),
            visibility: Some(WorkspaceVisibility::Other("partner".into())),
            created_by: Some("5852".into()),
            created_at: Some("2022-07-06T16:18:32Z".parse().unwrap()),
            collections: vec![ResourceRef {
                id: Some("c1".into()),
                name: Some("Petstore".into()),
                uid: Some("5852-c1".into()),
            }],
            ..Default::default()
        };
        let returned = client(&server)
            .update("ws-1", &sent, &RequestOptions::new())
            .await
            .unwrap();
        assert_eq!(returned, sent);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_create_json_sends_body_unchanged() {
        let body = r#"{"workspace":{"name":"Raw","type":"personal","extra":true}}"#;
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/workspaces")
            .match_body(Matcher::Exact(body.into()))
            .with_status(200)
            .with_body(r#"{"workspace":{"id":"ws-7","name":"Raw"}}"#)
            .create_async()
            .await;

        let raw = RawValue::from_string(body.into()).unwrap();
        let created = client(&server)
            .create_json(&raw, &RequestOptions::new())
            .await
            .unwrap();
        assert_eq!(created.id.as_deref(), Some("ws-7"));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_list_tolerates_unknown_type() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/workspaces")
            .with_status(200)
            .with_body(
                r#"{"workspaces":[
                    {"id":"ws-1","name":"Mine","type":"personal"},
                    {"id":"ws-2","name":"Shared","type":"partner","visibility":"partner"}
                ]}"#,
            )
            .create_async()
            .await;

        let workspaces = client(&server)
            .list(None, &RequestOptions::new())
            .await
            .unwrap();
        assert_eq!(workspaces.len(), 2);
        assert_eq!(workspaces[0].workspace_type, Some(WorkspaceType::Personal));
        assert_eq!(workspaces[1].workspace_type, Some(WorkspaceType::Other("partner".into())));
        assert_eq!(
            workspaces[1].workspace_type.as_ref().map(WorkspaceType::as_str),
            Some("partner")
        );
    }

    #[tokio::test]
    async fn test_create() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/workspaces")
            .match_body(Matcher::Json(json!({
                "workspace": {"name": "Team Workspace", "type": "team", "description": "Shared"}
            })))
            .with_status(200)
            .with_body(r#"{"workspace":{"id":"ws-1","name":"Team Workspace"}}"#)
            .create_async()
            .await;

        let workspace = Workspace {
            name: Some("Team Workspace".into()),
            workspace_type: Some(WorkspaceType::Team),
            description: Some("Shared".into()),
            ..Default::default()
        };
        let created = client(&server)
            .create(&workspace, &RequestOptions::new())
            .await
            .unwrap();
        assert_eq!(created.id.as_deref(), Some("ws-1"));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_get_with_contents() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/workspaces/ws-1")
            .with_status(200)
            .with_body(
                r#"{"workspace":{
                    "id":"ws-1","name":"Team Workspace","type":"team","visibility":"private-team",
                    "createdBy":"5852","createdAt":"2022-07-06T16:18:32.000Z",
                    "collections":[{"id":"c1","name":"Petstore","uid":"5852-c1"}],
                    "environments":[{"id":"e1","name":"Staging","uid":"5852-e1"}]
                }}"#,
            )
            .create_async()
            .await;

        let workspace = client(&server)
            .get("ws-1", &RequestOptions::new())
            .await
            .unwrap();
        assert_eq!(workspace.visibility, Some(WorkspaceVisibility::PrivateTeam));
        assert_eq!(workspace.collections[0].uid.as_deref(), Some("5852-c1"));
        assert_eq!(workspace.environments.len(), 1);
        assert!(workspace.mocks.is_empty());
    }

    #[tokio::test]
    async fn test_list_with_type_filter() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/workspaces")
            .match_query(Matcher::UrlEncoded("type".into(), "team".into()))
            .with_status(200)
            .with_body(r#"{"workspaces":[{"id":"ws-1","name":"Team Workspace","type":"team"}]}"#)
            .create_async()
            .await;

        let workspaces = client(&server)
            .list(Some(WorkspaceType::Team), &RequestOptions::new())
            .await
            .unwrap();
        assert_eq!(workspaces[0].workspace_type, Some(WorkspaceType::Team));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_update_and_delete() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("PUT", "/workspaces/ws-1")
            .match_body(Matcher::Json(json!({"workspace": {"name": "Renamed"}})))
            .with_status(200)
            .with_body(r#"{"workspace":{"id":"ws-1","name":"Renamed"}}"#)
            .create_async()
            .await;
        server
            .mock("DELETE", "/workspaces/ws-1")
            .with_status(200)
            .with_body(r#"{"workspace":{"id":"ws-1"}}"#)
            .create_async()
            .await;

        let client = client(&server);
        let workspace = Workspace {
            name: Some("Renamed".into()),
            ..Default::default()
        };
        let updated = client
            .update("ws-1", &workspace, &RequestOptions::new())
            .await
            .unwrap();
        assert_eq!(updated.name.as_deref(), Some("Renamed"));

        let deleted = client.delete("ws-1", &RequestOptions::new()).await.unwrap();
        assert_eq!(deleted.id.as_deref(), Some("ws-1"));
    }
}
