//
//  postman-client
//  cli/workspace.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Workspace commands
//!
//! Workspaces group collections, environments, monitors and APIs. Requests
//! for workspaces themselves are never scoped by `--workspace`.

use anyhow::{bail, Result};
use clap::{Args, Subcommand};

use crate::api::resources::workspaces::Workspace;
use crate::api::{RequestOptions, WorkspaceType};
use crate::interactive::{is_interactive, prompt_confirm_with_default};
use crate::output::{format_time, opt, truncate, TableOutput};

use super::GlobalOptions;

/// Manage workspaces
#[derive(Args, Debug)]
pub struct WorkspaceCommand {
    #[command(subcommand)]
    pub command: WorkspaceSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum WorkspaceSubcommand {
    /// List workspaces
    #[command(visible_alias = "ls")]
    List(ListArgs),

    /// View workspace details
    View(ViewArgs),

    /// Create a workspace
    Create(CreateArgs),

    /// Delete a workspace
    Delete(DeleteArgs),
}

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Only list workspaces of this type (personal, team)
    #[arg(long = "type", short = 't')]
    pub workspace_type: Option<WorkspaceType>,
}

#[derive(Args, Debug)]
pub struct ViewArgs {
    /// Workspace ID
    pub id: String,
}

#[derive(Args, Debug)]
pub struct CreateArgs {
    /// Workspace name
    #[arg(long, short = 'n')]
    pub name: String,

    /// Workspace type (personal, team)
    #[arg(long = "type", short = 't', default_value = "personal")]
    pub workspace_type: WorkspaceType,

    /// Workspace description
    #[arg(long, short = 'd')]
    pub description: Option<String>,
}

#[derive(Args, Debug)]
pub struct DeleteArgs {
    /// Workspace ID
    pub id: String,

    /// Skip the confirmation prompt
    #[arg(long, short = 'y')]
    pub yes: bool,
}

impl WorkspaceCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        let session = global.connect()?;
        let workspaces = session.clients.workspaces();
        let options = RequestOptions::new();
        let output = global.output();

        match &self.command {
            WorkspaceSubcommand::List(args) => {
                let list = workspaces.list(args.workspace_type.clone(), &options).await?;
                output.write_list(&list, "No workspaces found")
            }
            WorkspaceSubcommand::View(args) => {
                let workspace = workspaces.get(&args.id, &options).await?;
                output.write(&workspace)
            }
            WorkspaceSubcommand::Create(args) => {
                let request = Workspace {
                    name: Some(args.name.clone()),
                    workspace_type: Some(args.workspace_type.clone()),
                    description: args.description.clone(),
                    ..Default::default()
                };
                let created = workspaces.create(&request, &options).await?;
                if output.is_json() {
                    output.write_json(&created)
                } else {
                    output.write_success(&format!(
                        "Created workspace {} ({})",
                        args.name,
                        opt(created.id.as_deref())
                    ));
                    Ok(())
                }
            }
            WorkspaceSubcommand::Delete(args) => {
                if !args.yes {
                    if !is_interactive() {
                        bail!("Refusing to delete without confirmation; pass --yes");
                    }
                    let question = format!("Delete workspace {}?", args.id);
                    if !prompt_confirm_with_default(&question, false)? {
                        return Ok(());
                    }
                }
                let deleted = workspaces.delete(&args.id, &options).await?;
                if output.is_json() {
                    output.write_json(&deleted)
                } else {
                    output.write_success(&format!("Deleted workspace {}", args.id));
                    Ok(())
                }
            }
        }
    }
}

impl TableOutput for Workspace {
    fn headers() -> Vec<&'static str> {
        vec!["ID", "NAME", "TYPE", "VISIBILITY"]
    }

    fn row(&self) -> Vec<String> {
        vec![
            opt(self.id.as_deref()),
            truncate(self.name.as_deref().unwrap_or_default(), 40),
            opt(self.workspace_type.as_ref()),
            opt(self.visibility.as_ref()),
        ]
    }

    fn fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("ID", opt(self.id.as_deref())),
            ("Name", opt(self.name.as_deref())),
            ("Type", opt(self.workspace_type.as_ref())),
            ("Visibility", opt(self.visibility.as_ref())),
            ("Description", opt(self.description.as_deref())),
            ("Created", format_time(self.created_at.as_ref())),
            ("Updated", format_time(self.updated_at.as_ref())),
            ("Collections", self.collections.len().to_string()),
            ("Environments", self.environments.len().to_string()),
            ("Monitors", self.monitors.len().to_string()),
            ("Mocks", self.mocks.len().to_string()),
            ("APIs", self.apis.len().to_string()),
        ]
    }
}
