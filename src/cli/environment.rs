//
//  postman-client
//  cli/environment.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Environment commands

use anyhow::{bail, Result};
use clap::{Args, Subcommand};

use crate::api::resources::environments::{Environment, EnvironmentValue, ValueType};
use crate::interactive::{is_interactive, prompt_confirm_with_default};
use crate::output::{format_time, opt, print_header, truncate, TableBuilder, TableOutput};

use super::GlobalOptions;

/// Manage environments
#[derive(Args, Debug)]
pub struct EnvironmentCommand {
    #[command(subcommand)]
    pub command: EnvironmentSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum EnvironmentSubcommand {
    /// List environments
    #[command(visible_alias = "ls")]
    List,

    /// View an environment and its variables
    View(ViewArgs),

    /// Delete an environment
    Delete(DeleteArgs),
}

#[derive(Args, Debug)]
pub struct ViewArgs {
    /// Environment ID or UID
    pub id: String,

    /// Print secret values instead of masking them
    #[arg(long)]
    pub show_secrets: bool,
}

#[derive(Args, Debug)]
pub struct DeleteArgs {
    /// Environment ID or UID
    pub id: String,

    /// Skip the confirmation prompt
    #[arg(long, short = 'y')]
    pub yes: bool,
}

impl EnvironmentCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        let session = global.connect()?;
        let environments = session.clients.environments();
        let options = &session.options;
        let output = global.output();

        match &self.command {
            EnvironmentSubcommand::List => {
                let list = environments.list(options).await?;
                output.write_list(&list, "No environments found")
            }
            EnvironmentSubcommand::View(args) => {
                let environment = environments.get(&args.id, options).await?;
                output.write(&environment)?;
                if !output.is_json() && !environment.values.is_empty() {
                    println!();
                    print_header("Variables");
                    TableBuilder::new()
                        .color(output.color_enabled())
                        .headers(["KEY", "VALUE", "TYPE", "ENABLED"])
                        .rows(
                            environment
                                .values
                                .iter()
                                .map(|value| variable_row(value, args.show_secrets)),
                        )
                        .print();
                }
                Ok(())
            }
            EnvironmentSubcommand::Delete(args) => {
                if !args.yes {
                    if !is_interactive() {
                        bail!("Refusing to delete without confirmation; pass --yes");
                    }
                    let question = format!("Delete environment {}?", args.id);
                    if !prompt_confirm_with_default(&question, false)? {
                        return Ok(());
                    }
                }
                let deleted = environments.delete(&args.id, options).await?;
                if output.is_json() {
                    output.write_json(&deleted)
                } else {
                    output.write_success(&format!("Deleted environment {}", args.id));
                    Ok(())
                }
            }
        }
    }
}

fn variable_row(value: &EnvironmentValue, show_secrets: bool) -> Vec<String> {
    let secret = value.value_type == Some(ValueType::Secret);
    let shown = match value.value.as_deref() {
        Some(_) if secret && !show_secrets => "********".to_string(),
        Some(v) => truncate(v, 60),
        None => opt::<&str>(None),
    };
    let kind = value.value_type.as_ref().map_or("-", ValueType::as_str);
    vec![
        opt(value.key.as_deref()),
        shown,
        kind.to_string(),
        opt(value.enabled),
    ]
}

impl TableOutput for Environment {
    fn headers() -> Vec<&'static str> {
        vec!["ID", "NAME", "OWNER", "UPDATED"]
    }

    fn row(&self) -> Vec<String> {
        vec![
            opt(self.uid.as_deref().or(self.id.as_deref())),
            truncate(self.name.as_deref().unwrap_or_default(), 40),
            opt(self.owner.as_deref()),
            format_time(self.updated_at.as_ref()),
        ]
    }

    fn fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("ID", opt(self.id.as_deref())),
            ("Name", opt(self.name.as_deref())),
            ("Owner", opt(self.owner.as_deref())),
            ("Public", opt(self.is_public)),
            ("Created", format_time(self.created_at.as_ref())),
            ("Updated", format_time(self.updated_at.as_ref())),
            ("Variables", self.values.len().to_string()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_secret_values_are_masked() {
        let value = EnvironmentValue {
            value_type: Some(ValueType::Secret),
            ..EnvironmentValue::new("token", "s3cr3t")
        };
        let row = variable_row(&value, false);
        assert_eq!(row[0], "token");
        assert_eq!(row[1], "********");
        assert_eq!(row[2], "secret");

        let row = variable_row(&value, true);
        assert_eq!(row[1], "s3cr3t");
    }

    #[test]
    fn test_plain_values_are_shown() {
        let row = variable_row(&EnvironmentValue::new("baseUrl", "https://example.com"), false);
        assert_eq!(row[1], "https://example.com");
    }
}
