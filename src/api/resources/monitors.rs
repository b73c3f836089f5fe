//
//  postman-client
//  api/resources/monitors.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Monitor API types and client.
//!
//! A monitor runs a collection on a cron schedule. Besides CRUD, a monitor can
//! be triggered on demand with [`MonitorsClient::run`], which blocks until the
//! run finishes and returns the run under a `run` key.

use chrono::{DateTime, Utc};
use reqwest::Method;
use serde::{Deserialize, Serialize};
use serde_json::value::RawValue;
use serde_json::Value;

use crate::api::client::{raw_body, RestClient, NO_BODY};
use crate::api::common::{RequestOptions, Result};

const PATH: &str = "/monitors";

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Monitor {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub uid: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner: Option<u64>,

    /// Collection ID or UID to run.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collection: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub environment: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub collection_uid: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub environment_uid: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<MonitorOptions>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub notifications: Option<Notifications>,

    /// Regions the monitor runs from, kept as raw JSON.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub distribution: Vec<Value>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub schedule: Option<Schedule>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_run: Option<MonitorRun>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub stats: Option<MonitorStats>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonitorOptions {
    #[serde(rename = "strictSSL", skip_serializing_if = "Option::is_none")]
    pub strict_ssl: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub follow_redirects: Option<bool>,

    /// Milliseconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_timeout: Option<u64>,

    /// Milliseconds between requests.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_delay: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notifications {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub on_error: Vec<Notification>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub on_failure: Vec<Notification>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Notification {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Schedule {
    /// Cron expression, for example `0 0 * * *`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cron: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_run: Option<DateTime<Utc>>,
}

/// Outcome of a single monitor run.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonitorRun {
    /// `success`, `failed`, ...
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub started_at: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub finished_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MonitorStats {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assertions: Option<AssertionStats>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub requests: Option<RequestStats>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AssertionStats {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub failed: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RequestStats {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<u64>,
}

#[derive(Serialize)]
struct MonitorBody<'a> {
    monitor: &'a Monitor,
}

#[derive(Deserialize)]
struct MonitorEnvelope {
    monitor: Monitor,
}

#[derive(Deserialize)]
struct MonitorsEnvelope {
    #[serde(default)]
    monitors: Vec<Monitor>,
}

#[derive(Deserialize)]
struct RunEnvelope {
    run: MonitorRun,
}

/// Client for `/monitors`.
#[derive(Debug, Clone)]
pub struct MonitorsClient {
    rest: RestClient,
}

impl MonitorsClient {
    pub fn new(rest: RestClient) -> Self {
        Self { rest }
    }

    pub async fn create(&self, monitor: &Monitor, options: &RequestOptions) -> Result<Monitor> {
        let body = raw_body(&MonitorBody { monitor })?;
        self.create_json(&body, options).await
    }

    /// Like [`create`](Self::create), with a pre-encoded `{"monitor": {...}}` body.
    pub async fn create_json(&self, body: &RawValue, options: &RequestOptions) -> Result<Monitor> {
        let request = self
            .rest
            .new_request(Method::POST, &self.rest.url(PATH), Some(body))?;
        let response: MonitorEnvelope = self.rest.execute(request, options).await?;
        Ok(response.monitor)
    }

    pub async fn get(&self, id: &str, options: &RequestOptions) -> Result<Monitor> {
        let request = self
            .rest
            .new_request(Method::GET, &self.rest.url(&format!("{PATH}/{id}")), NO_BODY)?;
        let response: MonitorEnvelope = self.rest.execute(request, options).await?;
        Ok(response.monitor)
    }

    pub async fn list(&self, options: &RequestOptions) -> Result<Vec<Monitor>> {
        let request = self
            .rest
            .new_request(Method::GET, &self.rest.url(PATH), NO_BODY)?;
        let response: MonitorsEnvelope = self.rest.execute(request, options).await?;
        Ok(response.monitors)
    }

    pub async fn update(
        &self,
        id: &str,
        monitor: &Monitor,
        options: &RequestOptions,
    ) -> Result<Monitor> {
        let body = raw_body(&MonitorBody { monitor })?;
        self.update_json(id, &body, options).await
    }

    /// Like [`update`](Self::update), with a pre-encoded body.
    pub async fn update_json(
        &self,
        id: &str,
        body: &RawValue,
        options: &RequestOptions,
    ) -> Result<Monitor> {
        let request = self.rest.new_request(
            Method::PUT,
            &self.rest.url(&format!("{PATH}/{id}")),
            Some(body),
        )?;
        let response: MonitorEnvelope = self.rest.execute(request, options).await?;
        Ok(response.monitor)
    }

    pub async fn delete(&self, id: &str, options: &RequestOptions) -> Result<Monitor> {
        let request = self
            .rest
            .new_request(Method::DELETE, &self.rest.url(&format!("{PATH}/{id}")), NO_BODY)?;
        let response: MonitorEnvelope = self.rest.execute(request, options).await?;
        Ok(response.monitor)
    }

    /// Runs a monitor immediately and waits for the result.
    pub async fn run(&self, id: &str, options: &RequestOptions) -> Result<MonitorRun> {
        let request = self
            .rest
            .new_request(Method::POST, &self.rest.url(&format!("{PATH}/{id}/run")), NO_BODY)?;
        let response: RunEnvelope = self.rest.execute(request, options).await?;
        Ok(response.run)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Matcher;
    use serde_json::json;

    fn client(server: &mockito::ServerGuard) -> MonitorsClient {
        MonitorsClient::new(
            RestClient::builder("api-key")
                .base_url(server.url())
                .build()
                .unwrap(),
        )
    }

    #[tokio::test]
    async fn test_create() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/monitors")
            .match_body(Matcher::Json(json!({
                "monitor": {
                    "name": "Nightly",
                    "collection": "5852-c1",
                    "options": {"strictSSL": true, "requestTimeout": 3000},
                    "notifications": {"onFailure": [{"email": "ops@example.com"}]},
                    "schedule": {"cron": "0 0 * * *", "timezone": "UTC"}
                }
            })))
            .with_status(200)
            .with_body(r#"{"monitor":{"id":"m1","name":"Nightly","uid":"5852-m1"}}"#)
            .create_async()
            .await;

        let monitor = Monitor {
            name: Some("Nightly".into()),
            collection: Some("5852-c1".into()),
            options: Some(MonitorOptions {
                strict_ssl: Some(true),
                request_timeout: Some(3000),
                ..Default::default()
            }),
            notifications: Some(Notifications {
                on_failure: vec![Notification {
                    email: Some("ops@example.com".into()),
                }],
                ..Default::default()
            }),
            schedule: Some(Schedule {
                cron: Some("0 0 * * *".into()),
                timezone: Some("UTC".into()),
                ..Default::default()
            }),
            ..Default::default()
        };
        let created = client(&server)
            .create(&monitor, &RequestOptions::new())
            .await
            .unwrap();
        assert_eq!(created.uid.as_deref(), Some("5852-m1"));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_create_echo_decodes_to_same_monitor() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/monitors")
            .match_body(Matcher::PartialJson(json!({"monitor": {"name": "Nightly"}})))
            .with_body_from_request(|request| request.body().unwrap().clone())
            .create_async()
            .await;

        let sent = Monitor {
            id: Some("m1".into()),
            name: Some("Nightly".into()),
            uid: Some("5852-m1".into()),
            owner: Some(5852),
            collection_uid: Some("5852-c1".into()),
            environment_uid: Some("5852-e1".into()),
            options: Some(MonitorOptions {
                strict_ssl: Some(true),
                follow_redirects: Some(false),
                request_timeout: Some(3000),
                request_delay: Some(10),
            }),
            notifications: Some(Notifications {
                on_error: vec![Notification {
                    email: Some("ops@example.com".into()),
                }],
                ..Default::default()
            }),
            distribution: vec![json!({"region": "us-east"}), Value::Null],
            schedule: Some(Schedule {
                cron: Some("0 0 * * *".into()),
                timezone: Some("UTC".into()),
                next_run: Some("2022-06-18T05:00:00Z".parse().unwrap()),
            }),
            last_run: Some(MonitorRun {
                status: Some("failed".into()),
                started_at: Some("2022-06-17T18:39:52Z".parse().unwrap()),
                finished_at: Some("2022-06-17T18:39:53Z".parse().unwrap()),
            }),
            stats: Some(MonitorStats {
                assertions: Some(AssertionStats {
                    total: Some(8),
                    failed: Some(1),
                }),
                requests: Some(RequestStats { total: Some(4) }),
            }),
            ..Default::default()
        };
        let returned = client(&server)
            .create(&sent, &RequestOptions::new())
            .await
            .unwrap();
        assert_eq!(returned, sent);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_update_json_sends_body_unchanged() {
        let body = r#"{"monitor":{"name":"Hourly","schedule":{"cron":"0 * * * *","timezone":"Africa/Harare"}}}"#;
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("PUT", "/monitors/m1")
            .match_body(Matcher::Exact(body.into()))
            .with_status(200)
            .with_body(r#"{"monitor":{"id":"m1","name":"Hourly"}}"#)
            .create_async()
            .await;

        let raw = RawValue::from_string(body.into()).unwrap();
        let updated = client(&server)
            .update_json("m1", &raw, &RequestOptions::new())
            .await
            .unwrap();
        assert_eq!(updated.name.as_deref(), Some("Hourly"));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_get() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/monitors/m1")
            .with_status(200)
            .with_body(
                r#"{"monitor":{
                    "id":"m1","name":"Nightly","owner":5852,
                    "collectionUid":"5852-c1","environmentUid":"5852-e1",
                    "distribution":[{"region":"us-east"}],
                    "schedule":{"cron":"0 0 * * *","timezone":"UTC","nextRun":"2022-06-18T05:00:00.000Z"},
                    "lastRun":{"status":"failed","startedAt":"2022-06-17T18:39:52.000Z","finishedAt":"2022-06-17T18:39:53.000Z"},
                    "stats":{"assertions":{"total":8,"failed":1},"requests":{"total":4}}
                }}"#,
            )
            .create_async()
            .await;

        let monitor = client(&server)
            .get("m1", &RequestOptions::new())
            .await
            .unwrap();
        assert_eq!(monitor.owner, Some(5852));
        assert_eq!(monitor.distribution.len(), 1);
        assert_eq!(monitor.last_run.unwrap().status.as_deref(), Some("failed"));
        let stats = monitor.stats.unwrap();
        assert_eq!(stats.assertions.unwrap().failed, Some(1));
        assert_eq!(stats.requests.unwrap().total, Some(4));
    }

    #[tokio::test]
    async fn test_list_update_delete() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/monitors")
            .with_status(200)
            .with_body(r#"{"monitors":[{"id":"m1","name":"Nightly"}]}"#)
            .create_async()
            .await;
        server
            .mock("PUT", "/monitors/m1")
            .match_body(Matcher::Json(json!({"monitor": {"name": "Hourly", "schedule": {"cron": "0 * * * *"}}})))
            .with_status(200)
            .with_body(r#"{"monitor":{"id":"m1","name":"Hourly"}}"#)
            .create_async()
            .await;
        server
            .mock("DELETE", "/monitors/m1")
            .with_status(200)
            .with_body(r#"{"monitor":{"id":"m1","uid":"5852-m1"}}"#)
            .create_async()
            .await;

        let client = client(&server);
        let monitors = client.list(&RequestOptions::new()).await.unwrap();
        assert_eq!(monitors.len(), 1);

        let update = Monitor {
            name: Some("Hourly".into()),
            schedule: Some(Schedule {
                cron: Some("0 * * * *".into()),
                ..Default::default()
            }),
            ..Default::default()
        };
        let updated = client
            .update("m1", &update, &RequestOptions::new())
            .await
            .unwrap();
        assert_eq!(updated.name.as_deref(), Some("Hourly"));

        let deleted = client.delete("m1", &RequestOptions::new()).await.unwrap();
        assert_eq!(deleted.uid.as_deref(), Some("5852-m1"));
    }

    #[tokio::test]
    async fn test_run_forwards_options() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/monitors/m1/run")
            .match_query(Matcher::UrlEncoded("workspace".into(), "ws-1".into()))
            .with_status(200)
            .with_body(r#"{"run":{"status":"success","startedAt":"2022-06-17T18:39:52.000Z","finishedAt":"2022-06-17T18:39:53.000Z"}}"#)
            .create_async()
            .await;

        let run = client(&server)
            .run("m1", &RequestOptions::new().with_workspace("ws-1"))
            .await
            .unwrap();
        assert_eq!(run.status.as_deref(), Some("success"));
        assert!(run.finished_at > run.started_at);
        mock.assert_async().await;
    }
}
