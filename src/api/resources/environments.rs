//
//  postman-client
//  api/resources/environments.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Environment API types and client.
//!
//! An environment is a named set of variables. Requests and responses wrap a
//! single environment under `environment` and lists under `environments`.

use chrono::{DateTime, Utc};
use reqwest::Method;
use serde::{Deserialize, Serialize};
use serde_json::value::RawValue;

use crate::api::client::{raw_body, RestClient, NO_BODY};
use crate::api::common::{RequestOptions, Result};

const PATH: &str = "/environments";

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Environment {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub values: Vec<EnvironmentValue>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_public: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub uid: Option<String>,
}

/// A single environment variable.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct EnvironmentValue {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,

    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub value_type: Option<ValueType>,
}

impl EnvironmentValue {
    /// An enabled variable of the default type.
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: Some(key.into()),
            value: Some(value.into()),
            enabled: Some(true),
            value_type: Some(ValueType::Default),
        }
    }
}

/// How the value of a variable is displayed.
///
/// Types this crate does not know decode to `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ValueType {
    /// Masked in the UI.
    Secret,
    Default,
    Any,
    Other(String),
}

impl ValueType {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Secret => "secret",
            Self::Default => "default",
            Self::Any => "any",
            Self::Other(other) => other,
        }
    }
}

impl From<String> for ValueType {
    fn from(value: String) -> Self {
        match value.as_str() {
            "secret" => Self::Secret,
            "default" => Self::Default,
            "any" => Self::Any,
            _ => Self::Other(value),
        }
    }
}

impl From<ValueType> for String {
    fn from(value: ValueType) -> Self {
        match value {
            ValueType::Other(other) => other,
            known => known.as_str().to_string(),
        }
    }
}

#[derive(Serialize)]
struct EnvironmentBody<'a> {
    environment: &'a Environment,
}

#[derive(Deserialize)]
struct EnvironmentEnvelope {
    environment: Environment,
}

#[derive(Deserialize)]
struct EnvironmentsEnvelope {
    #[serde(default)]
    environments: Vec<Environment>,
}

/// Client for `/environments`.
#[derive(Debug, Clone)]
pub struct EnvironmentsClient {
    rest: RestClient,
}

impl EnvironmentsClient {
    pub fn new(rest: RestClient) -> Self {
        Self { rest }
    }

    pub async fn create(
        &self,
        environment: &Environment,
        options: &RequestOptions,
    ) -> Result<Environment> {
        let body = raw_body(&EnvironmentBody { environment })?;
        self.create_json(&body, options).await
    }

    /// Like [`create`](Self::create), with a pre-encoded body such as
    /// `{"environment": {...}}`. The body is sent unchanged.
    pub async fn create_json(&self, body: &RawValue, options: &RequestOptions) -> Result<Environment> {
        let request = self
            .rest
            .new_request(Method::POST, &self.rest.url(PATH), Some(body))?;
        let response: EnvironmentEnvelope = self.rest.execute(request, options).await?;
        Ok(response.environment)
    }

    pub async fn get(&self, id: &str, options: &RequestOptions) -> Result<Environment> {
        let request = self
            .rest
            .new_request(Method::GET, &self.rest.url(&format!("{PATH}/{id}")), NO_BODY)?;
        let response: EnvironmentEnvelope = self.rest.execute(request, options).await?;
        Ok(response.environment)
    }

    pub async fn list(&self, options: &RequestOptions) -> Result<Vec<Environment>> {
        let request = self
            .rest
            .new_request(Method::GET, &self.rest.url(PATH), NO_BODY)?;
        let response: EnvironmentsEnvelope = self.rest.execute(request, options).await?;
        Ok(response.environments)
    }

    pub async fn update(
        &self,
        id: &str,
        environment: &Environment,
        options: &RequestOptions,
    ) -> Result<Environment> {
        let body = raw_body(&EnvironmentBody { environment })?;
        self.update_json(id, &body, options).await
    }

    /// Like [`update`](Self::update), with a pre-encoded body.
    pub async fn update_json(
        &self,
        id: &str,
        body: &RawValue,
        options: &RequestOptions,
    ) -> Result<Environment> {
        let request = self.rest.new_request(
            Method::PUT,
            &self.rest.url(&format!("{PATH}/{id}")),
            Some(body),
        )?;
        let response: EnvironmentEnvelope = self.rest.execute(request, options).await?;
        Ok(response.environment)
    }

    pub async fn delete(&self, id: &str, options: &RequestOptions) -> Result<Environment> {
        let request = self
            .rest
            .new_request(Method::DELETE, &self.rest.url(&format!("{PATH}/{id}")), NO_BODY)?;
        let response: EnvironmentEnvelope = self.rest.execute(request, options).await?;
        Ok(response.environment)
    }
}
