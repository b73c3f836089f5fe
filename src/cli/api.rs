//
//  postman-client
//  cli/api.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Direct API access command
//!
//! Sends an authenticated request to any Postman API path and prints the raw
//! response body. JSON bodies are pretty-printed; anything else is written
//! unchanged.
//!
//! ## Examples
//!
//! ```bash
//! # Fetch the authenticated user
//! pm api /me
//!
//! # Create a mock from a JSON file
//! pm api -X POST /mocks --input mock.json
//!
//! # Build a body from fields
//! pm api -X POST /webhooks -F webhook.name=deploy -F webhook.collection=12-c1
//! ```

use std::io::Write;
use std::str::FromStr;

use anyhow::{bail, Context, Result};
use clap::Args;
use reqwest::Method;
use serde_json::{Map, Value};

use crate::api::NO_BODY;

use super::GlobalOptions;

/// Make direct API requests
#[derive(Args, Debug)]
pub struct ApiCommand {
    /// API path (e.g., /collections)
    pub path: String,

    /// HTTP method (GET, POST, PUT, PATCH, DELETE)
    #[arg(long, short = 'X', default_value = "GET")]
    pub method: String,

    /// Read the JSON request body from a file (- for stdin)
    #[arg(long, short = 'i', conflicts_with = "field")]
    pub input: Option<String>,

    /// Body field as key=value; dots in the key nest objects
    #[arg(long, short = 'F', action = clap::ArgAction::Append)]
    pub field: Vec<String>,
}

impl ApiCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        let method = parse_method(&self.method)?;
        let body = self.build_body()?;

        let session = global.connect()?;
        let rest = session.clients.rest();
        let path = if self.path.starts_with('/') {
            self.path.clone()
        } else {
            format!("/{}", self.path)
        };
        let url = rest.url(&path);

        let request = match &body {
            Some(body) => rest.new_request(method, &url, Some(body))?,
            None => rest.new_request(method, &url, NO_BODY)?,
        };
        let bytes = rest.execute_raw(request, &session.options).await?;

        match serde_json::from_slice::<Value>(&bytes) {
            Ok(value) => println!("{}", serde_json::to_string_pretty(&value)?),
            Err(_) => {
                let mut stdout = std::io::stdout().lock();
                stdout.write_all(&bytes)?;
                stdout.flush()?;
            }
        }
        Ok(())
    }

    fn build_body(&self) -> Result<Option<Value>> {
        if let Some(input) = &self.input {
            let content = if input == "-" {
                std::io::read_to_string(std::io::stdin())?
            } else {
                std::fs::read_to_string(input).with_context(|| format!("Failed to read {input}"))?
            };
            let value = serde_json::from_str(&content).context("Request body is not valid JSON")?;
            return Ok(Some(value));
        }

        if self.field.is_empty() {
            return Ok(None);
        }

        let mut body = Map::new();
        for field in &self.field {
            let Some((key, raw)) = field.split_once('=') else {
                bail!("Invalid field '{field}'; expected key=value");
            };
            insert_nested(&mut body, key, parse_field_value(raw));
        }
        Ok(Some(Value::Object(body)))
    }
}

fn parse_method(method: &str) -> Result<Method> {
    let supported = [
        Method::GET,
        Method::POST,
        Method::PUT,
        Method::PATCH,
        Method::DELETE,
        Method::HEAD,
    ];
    match Method::from_str(&method.to_uppercase()) {
        Ok(m) if supported.contains(&m) => Ok(m),
        _ => bail!("Unsupported HTTP method: {method}"),
    }
}

/// Literals, numbers and JSON containers are typed; everything else is a string.
fn parse_field_value(raw: &str) -> Value {
    match raw {
        "true" => Value::Bool(true),
        "false" => Value::Bool(false),
        "null" => Value::Null,
        _ if raw.starts_with('[') || raw.starts_with('{') => {
            serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()))
        }
        _ => match raw.parse::<i64>() {
            Ok(n) => Value::from(n),
            Err(_) => Value::String(raw.to_string()),
        },
    }
}

fn insert_nested(object: &mut Map<String, Value>, key: &str, value: Value) {
    match key.split_once('.') {
        None => {
            object.insert(key.to_string(), value);
        }
        Some((head, rest)) => {
            let child = object
                .entry(head.to_string())
                .or_insert_with(|| Value::Object(Map::new()));
            if !child.is_object() {
                *child = Value::Object(Map::new());
            }
            if let Value::Object(nested) = child {
                insert_nested(nested, rest, value);
            }
        }
    }
}
