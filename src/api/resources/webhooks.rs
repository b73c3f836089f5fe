//
//  postman-client
//  api/resources/webhooks.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Webhook API types and client.
//!
//! A webhook triggers a collection run when its URL is called. Only creation
//! is exposed by the API.

use reqwest::Method;
use serde::{Deserialize, Serialize};
use serde_json::value::RawValue;

use crate::api::client::{raw_body, RestClient};
use crate::api::common::{RequestOptions, Result};

const PATH: &str = "/webhooks";

/// A collection webhook. `id`, `webhook_url` and `uid` are output only.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Webhook {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// UID of the collection to run.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collection: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub webhook_url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub uid: Option<String>,
}

#[derive(Serialize)]
struct WebhookBody<'a> {
    webhook: &'a Webhook,
}

#[derive(Deserialize)]
struct WebhookEnvelope {
    webhook: Webhook,
}

/// Client for `/webhooks`.
#[derive(Debug, Clone)]
pub struct WebhooksClient {
    rest: RestClient,
}

impl WebhooksClient {
    pub fn new(rest: RestClient) -> Self {
        Self { rest }
    }

    /// Creates a webhook, in the workspace named by `options` if any.
    pub async fn create(&self, webhook: &Webhook, options: &RequestOptions) -> Result<Webhook> {
        let body = raw_body(&WebhookBody { webhook })?;
        self.create_json(&body, options).await
    }

    /// Like [`create`](Self::create), with a pre-encoded `{"webhook": {...}}` body.
    pub async fn create_json(&self, body: &RawValue, options: &RequestOptions) -> Result<Webhook> {
        let request = self
            .rest
            .new_request(Method::POST, &self.rest.url(PATH), Some(body))?;
        let response: WebhookEnvelope = self.rest.execute(request, options).await?;
        Ok(response.webhook)
    }
}
