//
//  postman-client
//  api/resources/audit_logs.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Team audit log API types and client.
//!
//! Audit logs are only available to team admins. Filters travel as query
//! parameters:
//!
//! | Parameter | Type | Notes |
//! |-----------|------|-------|
//! | `since` | `YYYY-MM-DD` | Logs created after this date |
//! | `until` | `YYYY-MM-DD` | Logs created before this date |
//! | `limit` | integer | At most 300 |
//! | `cursor` | opaque | Passed through unchanged |
//! | `order_by` | `asc` / `desc` | Defaults to `desc` upstream |

use std::fmt;

use chrono::{DateTime, NaiveDate, Utc};
use reqwest::Method;
use serde::{Deserialize, Serialize};

use crate::api::client::{RestClient, NO_BODY};
use crate::api::common::{RequestOptions, Result};

const PATH: &str = "/audit/logs";

/// Query filters for [`AuditLogsClient::list`]. Unset fields are not sent.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AuditLogQuery {
    pub since: Option<NaiveDate>,
    pub until: Option<NaiveDate>,
    pub limit: Option<u32>,
    pub cursor: Option<String>,
    pub order_by: Option<SortOrder>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    Desc,
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Asc => f.write_str("asc"),
            Self::Desc => f.write_str("desc"),
        }
    }
}

impl std::str::FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "asc" => Ok(Self::Asc),
            "desc" => Ok(Self::Desc),
            other => Err(format!("unknown sort order '{other}' (expected asc or desc)")),
        }
    }
}

/// Response of `GET /audit/logs`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AuditLogs {
    #[serde(default)]
    pub trails: Vec<Trail>,
}

/// A single audit event.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Trail {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<String>,

    /// Machine-readable action, for example `user.login_google_success`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<TrailData>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TrailData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actor: Option<Actor>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<TrailUser>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub team: Option<Team>,
}

/// The user who performed the action.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Actor {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
}

/// The user the action was performed on.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TrailUser {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Team {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
}

/// Client for `/audit/logs`.
#[derive(Debug, Clone)]
pub struct AuditLogsClient {
    rest: RestClient,
}

impl AuditLogsClient {
    pub fn new(rest: RestClient) -> Self {
        Self { rest }
    }

    pub async fn list(&self, query: &AuditLogQuery, options: &RequestOptions) -> Result<AuditLogs> {
        let request = self
            .rest
            .new_request(Method::GET, &self.rest.url(PATH), NO_BODY)?
            .query_opt("since", query.since)
            .query_opt("until", query.until)
            .query_opt("limit", query.limit)
            .query_opt("cursor", query.cursor.as_deref())
            .query_opt("order_by", query.order_by);
        self.rest.execute(request, options).await
    }
}
