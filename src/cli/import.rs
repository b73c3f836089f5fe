//
//  postman-client
//  cli/import.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! `pm import`: create collections from OpenAPI documents or Postman dumps.
//!
//! | Input | Endpoint | Encoding |
//! |-------|----------|----------|
//! | `*.json` | `/import/openapi` | JSON value |
//! | anything else | `/import/openapi` | text |
//! | `--upload` | `/import/openapi` | multipart file |
//! | `--exported` | `/import/exported` | multipart file |

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use serde_json::Value;

use crate::api::{ImportResult, ResourceRef, SchemaLanguage};
use crate::output::{opt, TableBuilder};

use super::GlobalOptions;

/// Import an OpenAPI definition or exported data
#[derive(Args, Debug)]
pub struct ImportCommand {
    /// File to import
    pub file: PathBuf,

    /// The file is a Postman data dump rather than an OpenAPI document
    #[arg(long, conflicts_with = "upload")]
    pub exported: bool,

    /// Send the OpenAPI document as a file upload
    #[arg(long)]
    pub upload: bool,
}

impl ImportCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        let contents = std::fs::read(&self.file)
            .with_context(|| format!("Failed to read {}", self.file.display()))?;
        let file_name = self
            .file
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "import".to_string());

        let session = global.connect()?;
        let imports = session.clients.imports();
        let options = &session.options;

        let result = if self.exported {
            imports.exported_file(&file_name, contents, options).await?
        } else if self.upload {
            imports.openapi_file(&file_name, contents, options).await?
        } else if SchemaLanguage::from_file_name(&file_name) == SchemaLanguage::Json {
            let document: Value = serde_json::from_slice(&contents)
                .with_context(|| format!("{} is not valid JSON", self.file.display()))?;
            imports.openapi_json(&document, options).await?
        } else {
            let document = String::from_utf8(contents)
                .with_context(|| format!("{} is not UTF-8 text", self.file.display()))?;
            imports.openapi_string(&document, options).await?
        };

        let output = global.output();
        if output.is_json() {
            return output.write_json(&result);
        }
        let count = result.collections.len() + result.environments.len();
        if count == 0 {
            output.write_warning("The import did not create anything");
            return Ok(());
        }
        TableBuilder::new()
            .color(output.color_enabled())
            .headers(["KIND", "ID", "NAME"])
            .rows(import_rows(&result))
            .print();
        output.write_success(&format!("Imported {} item(s)", count));
        Ok(())
    }
}

fn import_rows(result: &ImportResult) -> Vec<Vec<String>> {
    let row = |kind: &str, r: &ResourceRef| {
        vec![
            kind.to_string(),
            opt(r.uid.as_deref().or(r.id.as_deref())),
            opt(r.name.as_deref()),
        ]
    };
    result
        .collections
        .iter()
        .map(|r| row("collection", r))
        .chain(result.environments.iter().map(|r| row("environment", r)))
        .collect()
}
