//
//  postman-client
//  cli/validate.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! `pm validate`: security rule checks for an OpenAPI document.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use crate::api::resources::api_security::Warning;
use crate::api::{ApiSchema, SchemaLanguage, SchemaType};
use crate::output::{format_status, opt, truncate, TableOutput};

use super::GlobalOptions;

/// Validate an API schema for security issues
#[derive(Args, Debug)]
pub struct ValidateCommand {
    /// OpenAPI document to validate
    pub file: PathBuf,

    /// Schema type (openapi3, openapi2)
    #[arg(long = "type", short = 't', default_value = "openapi3")]
    pub schema_type: SchemaType,

    /// Document language (json, yaml); guessed from the file extension when omitted
    #[arg(long)]
    pub language: Option<SchemaLanguage>,
}

impl ValidateCommand {
    fn schema(&self) -> Result<ApiSchema> {
        let schema = std::fs::read_to_string(&self.file)
            .with_context(|| format!("Failed to read {}", self.file.display()))?;
        let language = self
            .language
            .unwrap_or_else(|| SchemaLanguage::from_file_name(&self.file.to_string_lossy()));
        Ok(ApiSchema {
            schema_type: self.schema_type,
            language,
            schema,
        })
    }

    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        let schema = self.schema()?;
        let session = global.connect()?;
        let warnings = session
            .clients
            .api_security()
            .validate_schema(&schema, &session.options)
            .await?;

        let output = global.output();
        if warnings.is_empty() && !output.is_json() {
            output.write_success(&format!("No issues found in {}", self.file.display()));
            return Ok(());
        }
        output.write_list(&warnings, "")?;
        if !output.is_json() {
            output.write_warning(&format!("{} issue(s) found", warnings.len()));
        }
        Ok(())
    }
}

impl TableOutput for Warning {
    fn headers() -> Vec<&'static str> {
        vec!["SEVERITY", "LINE", "CATEGORY", "MESSAGE"]
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.severity
                .as_deref()
                .map_or_else(|| opt::<&str>(None), |s| format_status(s, console::colors_enabled())),
            opt(self.location.as_ref().and_then(|l| l.start).map(|start| start.line)),
            opt(self.category.as_ref().and_then(|c| c.name.as_deref())),
            truncate(self.message.as_deref().unwrap_or_default(), 70),
        ]
    }

    fn fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Severity", opt(self.severity.as_deref())),
            ("Category", opt(self.category.as_ref().and_then(|c| c.name.as_deref()))),
            ("Message", opt(self.message.as_deref())),
            ("Path", self.data_path.join(".")),
            ("Fix", opt(self.possible_fix_url.as_deref())),
        ]
    }
}
