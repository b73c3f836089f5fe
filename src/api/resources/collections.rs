//
//  postman-client
//  api/resources/collections.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Collection API types and client.
//!
//! Collections group saved requests, folders, and scripts. The API exchanges
//! two different views of a collection:
//!
//! - [`Collection`]: the summary returned by list, create, update, delete,
//!   fork and merge operations.
//! - [`CollectionDetails`]: the full document (info block plus items) sent on
//!   create/update and returned by [`CollectionsClient::get`].
//!
//! Both travel under a `collection` key on the wire:
//!
//! ```json
//! {"collection": {"info": {"name": "Petstore"}, "item": []}}
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! use postman_client::api::{CollectionsClient, RequestOptions, RestClient};
//!
//! # async fn example() -> postman_client::api::Result<()> {
//! let collections = CollectionsClient::new(RestClient::new("PMAK-your-key")?);
//! let options = RequestOptions::new().with_workspace("1f0df51a-8658-4ee8-a2a1-d2567dfa09a9");
//!
//! for collection in collections.list(&options).await? {
//!     println!("{} {}", collection.uid.unwrap_or_default(), collection.name.unwrap_or_default());
//! }
//! # Ok(())
//! # }
//! ```

use chrono::{DateTime, Utc};
use reqwest::Method;
use serde::{Deserialize, Serialize};
use serde_json::value::RawValue;
use serde_json::Value;

use crate::api::client::{raw_body, RestClient, NO_BODY};
use crate::api::common::{RequestOptions, Result};

const PATH: &str = "/collections";

/// Summary of a collection.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Collection {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Owner user ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,

    /// Globally unique ID in the form `<owner>-<id>`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uid: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_public: Option<bool>,

    /// Present when this collection is a fork.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fork: Option<Fork>,
}

/// The full collection document.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CollectionDetails {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub info: Option<Info>,

    /// Top-level requests and folders.
    #[serde(rename = "item", default, skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<Item>,
}

/// The `info` block of a collection document.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Info {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(rename = "_postman_id", skip_serializing_if = "Option::is_none")]
    pub postman_id: Option<String>,

    /// Collection format schema URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub fork: Option<Fork>,
}

/// Fork metadata.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Fork {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    /// UID of the collection this one was forked from.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<String>,
}

/// A request or folder inside a collection.
///
/// Folders carry nested `items` and no `request`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Item {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(rename = "event", default, skip_serializing_if = "Vec::is_empty")]
    pub events: Vec<Event>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub request: Option<ItemRequest>,

    /// Saved example responses, kept as raw JSON. `Null` when absent.
    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub response: Value,

    #[serde(rename = "item", default, skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<Item>,
}

/// A script hook (`prerequest` or `test`).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Event {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub listen: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub script: Option<Script>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Script {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Script source, one element per line.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub exec: Vec<String>,

    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub script_type: Option<String>,
}

/// The request saved in an [`Item`].
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ItemRequest {
    /// Either a plain string or a structured URL object.
    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub url: Value,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,

    #[serde(rename = "header", default, skip_serializing_if = "Vec::is_empty")]
    pub headers: Vec<Header>,

    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub body: Value,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Header {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

/// How a fork is merged back into its source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MergeStrategy {
    /// Merge, then delete the fork.
    DeleteSource,
    /// Merge, keeping the fork.
    UpdateSourceWithDestination,
}

/// Body of `POST /collections/merge`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MergeForkRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strategy: Option<MergeStrategy>,

    /// UID of the fork.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,

    /// UID of the collection receiving the changes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination: Option<String>,
}

#[derive(Serialize)]
struct DetailsBody<'a> {
    collection: &'a CollectionDetails,
}

#[derive(Deserialize)]
struct DetailsEnvelope {
    collection: CollectionDetails,
}

#[derive(Deserialize)]
struct CollectionEnvelope {
    collection: Collection,
}

#[derive(Deserialize)]
struct CollectionsEnvelope {
    #[serde(default)]
    collections: Vec<Collection>,
}

#[derive(Serialize)]
struct ForkBody<'a> {
    label: &'a str,
}

/// Client for `/collections`.
#[derive(Debug, Clone)]
pub struct CollectionsClient {
    rest: RestClient,
}

impl CollectionsClient {
    pub fn new(rest: RestClient) -> Self {
        Self { rest }
    }

    /// Creates a collection from a full document. `POST /collections`
    pub async fn create(
        &self,
        details: &CollectionDetails,
        options: &RequestOptions,
    ) -> Result<Collection> {
        let body = raw_body(&DetailsBody {
            collection: details,
        })?;
        self.create_json(&body, options).await
    }

    /// Like [`create`](Self::create), with a pre-encoded
    /// `{"collection": {...}}` body, for documents exported elsewhere.
    pub async fn create_json(&self, body: &RawValue, options: &RequestOptions) -> Result<Collection> {
        let request = self
            .rest
            .new_request(Method::POST, &self.rest.url(PATH), Some(body))?;
        let response: CollectionEnvelope = self.rest.execute(request, options).await?;
        Ok(response.collection)
    }

    /// Fetches the full document of one collection. `GET /collections/{id}`
    pub async fn get(&self, id: &str, options: &RequestOptions) -> Result<CollectionDetails> {
        let request = self
            .rest
            .new_request(Method::GET, &self.rest.url(&format!("{PATH}/{id}")), NO_BODY)?;
        let response: DetailsEnvelope = self.rest.execute(request, options).await?;
        Ok(response.collection)
    }

    /// Lists collections, scoped to a workspace when `options` carries one.
    pub async fn list(&self, options: &RequestOptions) -> Result<Vec<Collection>> {
        let request = self
            .rest
            .new_request(Method::GET, &self.rest.url(PATH), NO_BODY)?;
        let response: CollectionsEnvelope = self.rest.execute(request, options).await?;
        Ok(response.collections)
    }

    /// Replaces a collection's document. `PUT /collections/{id}`
    pub async fn update(
        &self,
        id: &str,
        details: &CollectionDetails,
        options: &RequestOptions,
    ) -> Result<Collection> {
        let body = raw_body(&DetailsBody {
            collection: details,
        })?;
        self.update_json(id, &body, options).await
    }

    /// Like [`update`](Self::update), with a pre-encoded body.
    pub async fn update_json(
        &self,
        id: &str,
        body: &RawValue,
        options: &RequestOptions,
    ) -> Result<Collection> {
        let request = self.rest.new_request(
            Method::PUT,
            &self.rest.url(&format!("{PATH}/{id}")),
            Some(body),
        )?;
        let response: CollectionEnvelope = self.rest.execute(request, options).await?;
        Ok(response.collection)
    }

    /// Deletes a collection and returns its `id`/`uid`.
    pub async fn delete(&self, id: &str, options: &RequestOptions) -> Result<Collection> {
        let request = self
            .rest
            .new_request(Method::DELETE, &self.rest.url(&format!("{PATH}/{id}")), NO_BODY)?;
        let response: CollectionEnvelope = self.rest.execute(request, options).await?;
        Ok(response.collection)
    }

    /// Forks a collection into the workspace named by `options`.
    ///
    /// The API requires a workspace for this call.
    pub async fn create_fork(
        &self,
        id: &str,
        label: &str,
        options: &RequestOptions,
    ) -> Result<Collection> {
        let request = self.rest.new_request(
            Method::POST,
            &self.rest.url(&format!("{PATH}/fork/{id}")),
            Some(&ForkBody { label }),
        )?;
        let response: CollectionEnvelope = self.rest.execute(request, options).await?;
        Ok(response.collection)
    }

    /// Merges a fork into its destination. `POST /collections/merge`
    pub async fn merge_fork(
        &self,
        merge: &MergeForkRequest,
        options: &RequestOptions,
    ) -> Result<Collection> {
        let request = self
            .rest
            .new_request(Method::POST, &self.rest.url(&format!("{PATH}/merge")), Some(merge))?;
        let response: CollectionEnvelope = self.rest.execute(request, options).await?;
        Ok(response.collection)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    use mockito::Matcher;
    use serde_json::json;

    fn client(server: &mockito::ServerGuard) -> CollectionsClient {
        CollectionsClient::new(
            RestClient::builder("api-key")
                .base_url(server.url())
                .build()
                .unwrap(),
        )
    }

    #[test]
    fn test_empty_details_serialize_to_empty_object() {
        let details = CollectionDetails::default();
        assert_eq!(serde_json::to_value(&details).unwrap(), json!({}));
    }

    #[test]
    fn test_absent_raw_fields_stay_absent() {
        let item = Item {
            name: Some("List pets".into()),
            request: Some(ItemRequest::default()),
            ..Default::default()
        };
        let encoded = serde_json::to_value(&item).unwrap();
        assert_eq!(encoded, json!({"name": "List pets", "request": {}}));
        let decoded: Item = serde_json::from_value(encoded).unwrap();
        assert_eq!(decoded, item);

        let explicit_null: Item = serde_json::from_value(json!({"response": null})).unwrap();
        assert_eq!(explicit_null.response, Value::Null);
    }

    #[test]
    fn test_merge_strategy_wire_names() {
        assert_eq!(
            serde_json::to_value(MergeStrategy::DeleteSource).unwrap(),
            json!("deleteSource")
        );
        assert_eq!(
            serde_json::to_value(MergeStrategy::UpdateSourceWithDestination).unwrap(),
            json!("updateSourceWithDestination")
        );
    }

    #[tokio::test]
    async fn test_create() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/collections")
            .match_header("x-api-key", "api-key")
            .match_query(Matcher::UrlEncoded("workspace".into(), "ws-1".into()))
            .match_body(Matcher::Json(json!({
                "collection": {
                    "info": {
                        "name": "Petstore",
                        "schema": "https://schema.getpostman.com/json/collection/v2.1.0/collection.json"
                    },
                    "item": [{
                        "name": "List pets",
                        "request": {"url": "https://petstore.test/pets", "method": "GET"}
                    }]
                }
            })))
            .with_status(200)
            .with_body(r#"{"collection":{"id":"2412a72c","name":"Petstore","uid":"5852-2412a72c"}}"#)
            .create_async()
            .await;

        let details = CollectionDetails {
            info: Some(Info {
                name: Some("Petstore".into()),
                schema: Some(
                    "https://schema.getpostman.com/json/collection/v2.1.0/collection.json".into(),
                ),
                ..Default::default()
            }),
            items: vec![Item {
                name: Some("List pets".into()),
                request: Some(ItemRequest {
                    url: json!("https://petstore.test/pets"),
                    method: Some("GET".into()),
                    ..Default::default()
                }),
                ..Default::default()
            }],
        };

        let created = client(&server)
            .create(&details, &RequestOptions::new().with_workspace("ws-1"))
            .await
            .unwrap();

        assert_eq!(created.uid.as_deref(), Some("5852-2412a72c"));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_created_document_reads_back_unchanged() {
        let stored = Arc::new(Mutex::new(Vec::new()));
        let mut server = mockito::Server::new_async().await;
        let sink = Arc::clone(&stored);
        let create = server
            .mock("POST", "/collections")
            .match_body(Matcher::PartialJson(json!({"collection": {"info": {"name": "Petstore"}}})))
            .with_body_from_request(move |request| {
                *sink.lock().unwrap() = request.body().unwrap().clone();
                br#"{"collection":{"id":"2412a72c","uid":"5852-2412a72c"}}"#.to_vec()
            })
            .create_async()
            .await;
        let source = Arc::clone(&stored);
        server
            .mock("GET", "/collections/5852-2412a72c")
            .with_body_from_request(move |_| source.lock().unwrap().clone())
            .create_async()
            .await;

        let sent = CollectionDetails {
            info: Some(Info {
                name: Some("Petstore".into()),
                description: Some("Pets and owners".into()),
                postman_id: Some("2412a72c".into()),
                schema: Some(
                    "https://schema.getpostman.com/json/collection/v2.1.0/collection.json".into(),
                ),
                updated_at: Some("2022-05-30T21:52:04Z".parse().unwrap()),
                fork: None,
            }),
            items: vec![Item {
                name: Some("Pets".into()),
                items: vec![
                    Item {
                        name: Some("List pets".into()),
                        id: Some("r1".into()),
                        events: vec![Event {
                            listen: Some("test".into()),
                            script: Some(Script {
                                exec: vec!["pm.test('ok', () => {});".into()],
                                script_type: Some("text/javascript".into()),
                                ..Default::default()
                            }),
                        }],
                        request: Some(ItemRequest {
                            url: json!({"raw": "https://petstore.test/pets", "host": ["petstore", "test"]}),
                            method: Some("GET".into()),
                            headers: vec![Header {
                                key: Some("Accept".into()),
                                value: Some("application/json".into()),
                            }],
                            ..Default::default()
                        }),
                        response: json!([]),
                        ..Default::default()
                    },
                    Item {
                        name: Some("Add pet".into()),
                        request: Some(ItemRequest {
                            url: json!("https://petstore.test/pets"),
                            method: Some("POST".into()),
                            body: json!({"mode": "raw", "raw": "{}"}),
                            ..Default::default()
                        }),
                        ..Default::default()
                    },
                ],
                ..Default::default()
            }],
        };

        let client = client(&server);
        let created = client.create(&sent, &RequestOptions::new()).await.unwrap();
        let uid = created.uid.unwrap();
        let returned = client.get(&uid, &RequestOptions::new()).await.unwrap();
        assert_eq!(returned, sent);
        create.assert_async().await;
    }

    #[tokio::test]
    async fn test_json_variants_send_body_unchanged() {
        let body = r#"{"collection": {"info": {"name": "Exported", "schema": "https://schema.getpostman.com/json/collection/v2.1.0/collection.json"}, "item": [], "variable": []}}"#;
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/collections")
            .match_body(Matcher::Exact(body.into()))
            .with_status(200)
            .with_body(r#"{"collection":{"id":"e1","name":"Exported","uid":"5852-e1"}}"#)
            .create_async()
            .await;
        server
            .mock("PUT", "/collections/5852-e1")
            .match_body(Matcher::Exact(body.into()))
            .with_status(200)
            .with_body(r#"{"collection":{"id":"e1","name":"Exported","uid":"5852-e1"}}"#)
            .create_async()
            .await;

        let raw = RawValue::from_string(body.into()).unwrap();
        let client = client(&server);
        let created = client.create_json(&raw, &RequestOptions::new()).await.unwrap();
        assert_eq!(created.uid.as_deref(), Some("5852-e1"));
        let updated = client
            .update_json("5852-e1", &raw, &RequestOptions::new())
            .await
            .unwrap();
        assert_eq!(updated.name.as_deref(), Some("Exported"));
    }

    #[tokio::test]
    async fn test_get_details() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/collections/5852-2412a72c")
            .with_status(200)
            .with_body(
                r#"{"collection":{
                    "info":{"_postman_id":"2412a72c","name":"Petstore","updatedAt":"2022-05-30T21:52:04.000Z"},
                    "item":[{"name":"Pets","item":[{"name":"List pets","event":[{"listen":"test","script":{"exec":["pm.test()"],"type":"text/javascript"}}]}]}]
                }}"#,
            )
            .create_async()
            .await;

        let details = client(&server)
            .get("5852-2412a72c", &RequestOptions::new())
            .await
            .unwrap();

        let info = details.info.unwrap();
        assert_eq!(info.postman_id.as_deref(), Some("2412a72c"));
        assert!(info.updated_at.is_some());
        let folder = &details.items[0];
        assert_eq!(folder.items[0].name.as_deref(), Some("List pets"));
        let script = folder.items[0].events[0].script.as_ref().unwrap();
        assert_eq!(script.script_type.as_deref(), Some("text/javascript"));
    }

    #[tokio::test]
    async fn test_list() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/collections")
            .with_status(200)
            .with_body(
                r#"{"collections":[
                    {"id":"a","name":"One","owner":"5852","createdAt":"2022-01-01T00:00:00.000Z","uid":"5852-a","isPublic":false},
                    {"id":"b","name":"Two","uid":"5852-b","fork":{"label":"mine","from":"5852-a"}}
                ]}"#,
            )
            .create_async()
            .await;

        let collections = client(&server).list(&RequestOptions::new()).await.unwrap();
        assert_eq!(collections.len(), 2);
        assert_eq!(collections[0].is_public, Some(false));
        assert_eq!(
            collections[1].fork.as_ref().and_then(|f| f.from.as_deref()),
            Some("5852-a")
        );
    }

    #[tokio::test]
    async fn test_list_missing_key_is_empty() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/collections")
            .with_status(200)
            .with_body("{}")
            .create_async()
            .await;

        let collections = client(&server).list(&RequestOptions::new()).await.unwrap();
        assert!(collections.is_empty());
    }

    #[tokio::test]
    async fn test_update() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("PUT", "/collections/5852-a")
            .match_body(Matcher::Json(json!({"collection": {"info": {"name": "Renamed"}}})))
            .with_status(200)
            .with_body(r#"{"collection":{"id":"a","name":"Renamed","uid":"5852-a"}}"#)
            .create_async()
            .await;

        let details = CollectionDetails {
            info: Some(Info {
                name: Some("Renamed".into()),
                ..Default::default()
            }),
            ..Default::default()
        };
        let updated = client(&server)
            .update("5852-a", &details, &RequestOptions::new())
            .await
            .unwrap();
        assert_eq!(updated.name.as_deref(), Some("Renamed"));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_delete_propagates_not_found() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("DELETE", "/collections/missing")
            .with_status(404)
            .with_body(r#"{"error":{"name":"instanceNotFoundError","message":"We could not find the collection you are looking for"}}"#)
            .create_async()
            .await;

        let err = client(&server)
            .delete("missing", &RequestOptions::new())
            .await
            .unwrap_err();
        assert_eq!(err.name(), "instanceNotFoundError");
        assert_eq!(err.status(), Some(404));
    }

    #[tokio::test]
    async fn test_delete() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("DELETE", "/collections/5852-a")
            .with_status(200)
            .with_body(r#"{"collection":{"id":"a","uid":"5852-a"}}"#)
            .create_async()
            .await;

        let deleted = client(&server)
            .delete("5852-a", &RequestOptions::new())
            .await
            .unwrap();
        assert_eq!(deleted.id.as_deref(), Some("a"));
        assert_eq!(deleted.name, None);
    }

    #[tokio::test]
    async fn test_create_fork() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/collections/fork/5852-a")
            .match_query(Matcher::UrlEncoded("workspace".into(), "ws-2".into()))
            .match_body(Matcher::Json(json!({"label": "my fork"})))
            .with_status(200)
            .with_body(r#"{"collection":{"id":"c","name":"One","uid":"5852-c","fork":{"label":"my fork","createdAt":"2022-06-16T19:51:44.000Z","from":"5852-a"}}}"#)
            .create_async()
            .await;

        let fork = client(&server)
            .create_fork("5852-a", "my fork", &RequestOptions::new().with_workspace("ws-2"))
            .await
            .unwrap();
        assert_eq!(fork.fork.unwrap().label.as_deref(), Some("my fork"));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_merge_fork() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/collections/merge")
            .match_body(Matcher::Json(json!({
                "strategy": "deleteSource",
                "source": "5852-c",
                "destination": "5852-a"
            })))
            .with_status(200)
            .with_body(r#"{"collection":{"id":"a","uid":"5852-a"}}"#)
            .create_async()
            .await;

        let merge = MergeForkRequest {
            strategy: Some(MergeStrategy::DeleteSource),
            source: Some("5852-c".into()),
            destination: Some("5852-a".into()),
        };
        let merged = client(&server)
            .merge_fork(&merge, &RequestOptions::new())
            .await
            .unwrap();
        assert_eq!(merged.uid.as_deref(), Some("5852-a"));
        mock.assert_async().await;
    }
}
