//
//  postman-client
//  api/resources/imports.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Import API client.
//!
//! Imports turn an OpenAPI document, or a previously exported Postman dump,
//! into collections and environments. The document can be sent three ways:
//!
//! | Method | Body | `type` |
//! |--------|------|--------|
//! | [`openapi_json`](ImportsClient::openapi_json) | JSON object under `input` | `json` |
//! | [`openapi_string`](ImportsClient::openapi_string) | stringified document under `input` | `string` |
//! | [`openapi_file`](ImportsClient::openapi_file) | multipart file field `input` | `file` |
//!
//! Multipart uploads go through [`RestClient::new_multipart_request`] with the
//! form's boundary passed as the `Content-Type` override.

use reqwest::multipart::{Form, Part};
use reqwest::Method;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::api::client::{multipart_content_type, RestClient};
use crate::api::common::{RequestOptions, ResourceRef, Result};

const PATH: &str = "/import";

/// Resources created by an import.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ImportResult {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub collections: Vec<ResourceRef>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub environments: Vec<ResourceRef>,
}

#[derive(Serialize)]
struct ImportBody<'a, T: Serialize + ?Sized> {
    #[serde(rename = "type")]
    kind: &'static str,
    input: &'a T,
}

/// Client for `/import`.
#[derive(Debug, Clone)]
pub struct ImportsClient {
    rest: RestClient,
}

impl ImportsClient {
    pub fn new(rest: RestClient) -> Self {
        Self { rest }
    }

    /// Imports an OpenAPI document given as a JSON value.
    pub async fn openapi_json(&self, input: &Value, options: &RequestOptions) -> Result<ImportResult> {
        let request = self.rest.new_request(
            Method::POST,
            &self.rest.url(&format!("{PATH}/openapi")),
            Some(&ImportBody { kind: "json", input }),
        )?;
        self.rest.execute(request, options).await
    }

    /// Imports an OpenAPI document given as text (JSON or YAML).
    pub async fn openapi_string(&self, input: &str, options: &RequestOptions) -> Result<ImportResult> {
        let request = self.rest.new_request(
            Method::POST,
            &self.rest.url(&format!("{PATH}/openapi")),
            Some(&ImportBody {
                kind: "string",
                input,
            }),
        )?;
        self.rest.execute(request, options).await
    }

    /// Uploads an OpenAPI file as multipart form data.
    pub async fn openapi_file(
        &self,
        file_name: &str,
        contents: Vec<u8>,
        options: &RequestOptions,
    ) -> Result<ImportResult> {
        self.upload("openapi", file_name, contents, options).await
    }

    /// Uploads a Postman data dump as multipart form data.
    pub async fn exported_file(
        &self,
        file_name: &str,
        contents: Vec<u8>,
        options: &RequestOptions,
    ) -> Result<ImportResult> {
        self.upload("exported", file_name, contents, options).await
    }

    async fn upload(
        &self,
        kind: &str,
        file_name: &str,
        contents: Vec<u8>,
        options: &RequestOptions,
    ) -> Result<ImportResult> {
        let form = Form::new()
            .part("input", Part::bytes(contents).file_name(file_name.to_string()))
            .text("type", "file");
        let options = options
            .clone()
            .with_content_type(multipart_content_type(&form));

        let request = self.rest.new_multipart_request(
            Method::POST,
            &self.rest.url(&format!("{PATH}/{kind}")),
            form,
        )?;
        self.rest.execute(request, &options).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Matcher;
    use serde_json::json;

    fn client(server: &mockito::ServerGuard) -> ImportsClient {
        ImportsClient::new(
            RestClient::builder("api-key")
                .base_url(server.url())
                .build()
                .unwrap(),
        )
    }

    const RESPONSE: &str = r#"{"collections":[{"id":"b31be584","name":"Swagger Petstore","uid":"5852-b31be584"}],"environments":[]}"#;

    #[tokio::test]
    async fn test_openapi_json() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/import/openapi")
            .match_header("content-type", "application/json")
            .match_body(Matcher::Json(json!({
                "type": "json",
                "input": {"openapi": "3.0.0", "info": {"title": "Swagger Petstore"}}
            })))
            .with_status(200)
            .with_body(RESPONSE)
            .create_async()
            .await;

        let input = json!({"openapi": "3.0.0", "info": {"title": "Swagger Petstore"}});
        let result = client(&server)
            .openapi_json(&input, &RequestOptions::new())
            .await
            .unwrap();
        assert_eq!(result.collections[0].uid.as_deref(), Some("5852-b31be584"));
        assert!(result.environments.is_empty());
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_openapi_string() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/import/openapi")
            .match_body(Matcher::Json(json!({
                "type": "string",
                "input": "openapi: 3.0.0\ninfo:\n  title: Swagger Petstore\n"
            })))
            .with_status(200)
            .with_body(RESPONSE)
            .create_async()
            .await;

        let result = client(&server)
            .openapi_string(
                "openapi: 3.0.0\ninfo:\n  title: Swagger Petstore\n",
                &RequestOptions::new(),
            )
            .await
            .unwrap();
        assert_eq!(result.collections.len(), 1);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_openapi_file_is_multipart() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/import/openapi")
            .match_query(Matcher::UrlEncoded("workspace".into(), "ws-1".into()))
            .match_header(
                "content-type",
                Matcher::Regex("^multipart/form-data; boundary=.+".into()),
            )
            .match_header("x-api-key", "api-key")
            .match_body(Matcher::AllOf(vec![
                Matcher::Regex(r#"name="input"; filename="petstore.yaml""#.into()),
                Matcher::Regex(r#"name="type""#.into()),
                Matcher::Regex("openapi: 3.0.0".into()),
            ]))
            .with_status(200)
            .with_body(RESPONSE)
            .create_async()
            .await;

        let result = client(&server)
            .openapi_file(
                "petstore.yaml",
                b"openapi: 3.0.0\n".to_vec(),
                &RequestOptions::new().with_workspace("ws-1"),
            )
            .await
            .unwrap();
        assert_eq!(result.collections[0].name.as_deref(), Some("Swagger Petstore"));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_exported_file() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/import/exported")
            .match_body(Matcher::Regex(r#"filename="backup.json""#.into()))
            .with_status(200)
            .with_body(r#"{"collections":[{"id":"c1","name":"Restored","uid":"5852-c1"}]}"#)
            .create_async()
            .await;

        let result = client(&server)
            .exported_file("backup.json", b"{}".to_vec(), &RequestOptions::new())
            .await
            .unwrap();
        assert_eq!(result.collections[0].name.as_deref(), Some("Restored"));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_import_error() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/import/openapi")
            .with_status(400)
            .with_body(r#"{"error":{"name":"invalidParamsError","message":"The request body has invalid values for the type parameter."}}"#)
            .create_async()
            .await;

        let err = client(&server)
            .openapi_string("nonsense", &RequestOptions::new())
            .await
            .unwrap_err();
        assert_eq!(err.name(), "invalidParamsError");
        assert_eq!(err.status(), Some(400));
    }
}
