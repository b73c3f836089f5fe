//
//  postman-client
//  api/resources/api_security.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! API definition security validation (`POST /security/api-validation`).
//!
//! The endpoint runs an OpenAPI document through Postman's security rules and
//! returns a list of warnings. It is also the endpoint family that reports
//! errors with a nested `name` object; see [`crate::api::common::ApiError`].

use std::fmt;

use reqwest::Method;
use serde::{Deserialize, Serialize};
use serde_json::value::RawValue;

use crate::api::client::{raw_body, RestClient};
use crate::api::common::{RequestOptions, Result};

const PATH: &str = "/security/api-validation";

/// The document to validate.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ApiSchema {
    #[serde(rename = "type")]
    pub schema_type: SchemaType,

    pub language: SchemaLanguage,

    /// The document itself, as text.
    pub schema: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SchemaType {
    #[default]
    #[serde(rename = "openapi3")]
    OpenApi3,
    #[serde(rename = "openapi2")]
    OpenApi2,
}

impl std::str::FromStr for SchemaType {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "openapi3" | "3" => Ok(Self::OpenApi3),
            "openapi2" | "2" | "swagger" => Ok(Self::OpenApi2),
            other => Err(format!("unknown schema type '{other}' (expected openapi3 or openapi2)")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SchemaLanguage {
    #[default]
    Json,
    Yaml,
}

impl SchemaLanguage {
    /// Guesses the language from a file name, defaulting to JSON.
    pub fn from_file_name(name: &str) -> Self {
        let lower = name.to_lowercase();
        if lower.ends_with(".yaml") || lower.ends_with(".yml") {
            Self::Yaml
        } else {
            Self::Json
        }
    }
}

impl fmt::Display for SchemaLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json => f.write_str("json"),
            Self::Yaml => f.write_str("yaml"),
        }
    }
}

impl std::str::FromStr for SchemaLanguage {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "yaml" | "yml" => Ok(Self::Yaml),
            other => Err(format!("unknown schema language '{other}' (expected json or yaml)")),
        }
    }
}

/// A single rule violation.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Warning {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub severity: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<WarningLocations>,

    /// JSON path to the offending node.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub data_path: Vec<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub possible_fix_url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<WarningCategory>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct WarningCategory {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct WarningLocations {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start: Option<WarningLocation>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub end: Option<WarningLocation>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct WarningLocation {
    pub line: u32,
    pub column: u32,
}

#[derive(Serialize)]
struct SchemaBody<'a> {
    schema: &'a ApiSchema,
}

#[derive(Deserialize)]
struct WarningsEnvelope {
    #[serde(default)]
    warnings: Vec<Warning>,
}

/// Client for `/security/api-validation`.
#[derive(Debug, Clone)]
pub struct ApiSecurityClient {
    rest: RestClient,
}

impl ApiSecurityClient {
    pub fn new(rest: RestClient) -> Self {
        Self { rest }
    }

    /// Validates a schema. An empty vector means no rule was violated.
    pub async fn validate_schema(
        &self,
        schema: &ApiSchema,
        options: &RequestOptions,
    ) -> Result<Vec<Warning>> {
        let body = raw_body(&SchemaBody { schema })?;
        self.validate_schema_json(&body, options).await
    }

    /// Like [`validate_schema`](Self::validate_schema), with a pre-encoded
    /// `{"schema": {...}}` body.
    pub async fn validate_schema_json(
        &self,
        body: &RawValue,
        options: &RequestOptions,
    ) -> Result<Vec<Warning>> {
        let request = self
            .rest
            .new_request(Method::POST, &self.rest.url(PATH), Some(body))?;
        let response: WarningsEnvelope = self.rest.execute(request, options).await?;
        Ok(response.warnings)
    }
}
