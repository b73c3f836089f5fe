//
//  postman-client
//  api/resources/users.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Current-user API types and client (`GET /me`).

use reqwest::Method;
use serde::{Deserialize, Serialize};

use crate::api::client::{RestClient, NO_BODY};
use crate::api::common::{RequestOptions, Result};

/// The user owning the API key.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,

    /// Avatar image URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_public: Option<bool>,
}

/// A metered operation and the user's quota for it.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Operation {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub usage: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub overage: Option<i64>,
}

/// Response of `GET /me`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AuthenticatedUser {
    pub user: User,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub operations: Vec<Operation>,
}

/// Client for `/me`.
#[derive(Debug, Clone)]
pub struct UsersClient {
    rest: RestClient,
}

impl UsersClient {
    pub fn new(rest: RestClient) -> Self {
        Self { rest }
    }

    /// Returns the user the API key belongs to, with usage quotas.
    pub async fn me(&self, options: &RequestOptions) -> Result<AuthenticatedUser> {
        let request = self
            .rest
            .new_request(Method::GET, &self.rest.url("/me"), NO_BODY)?;
        self.rest.execute(request, options).await
    }
}
