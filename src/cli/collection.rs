//
//  postman-client
//  cli/collection.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Collection commands

use anyhow::{bail, Result};
use clap::{Args, Subcommand, ValueEnum};
use console::style;

use crate::api::resources::collections::{Collection, CollectionDetails, Item};
use crate::api::{MergeForkRequest, MergeStrategy};
use crate::interactive::{is_interactive, prompt_confirm_with_default};
use crate::output::{format_time, opt, print_header, truncate, TableOutput};

use super::GlobalOptions;

/// Manage collections
#[derive(Args, Debug)]
pub struct CollectionCommand {
    #[command(subcommand)]
    pub command: CollectionSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum CollectionSubcommand {
    /// List collections
    #[command(visible_alias = "ls")]
    List,

    /// View a collection and its requests
    View(ViewArgs),

    /// Delete a collection
    Delete(DeleteArgs),

    /// Fork a collection into the workspace given by --workspace
    Fork(ForkArgs),

    /// Merge a fork back into its source
    Merge(MergeArgs),
}

#[derive(Args, Debug)]
pub struct ViewArgs {
    /// Collection ID or UID
    pub id: String,
}

#[derive(Args, Debug)]
pub struct DeleteArgs {
    /// Collection ID or UID
    pub id: String,

    /// Skip the confirmation prompt
    #[arg(long, short = 'y')]
    pub yes: bool,
}

#[derive(Args, Debug)]
pub struct ForkArgs {
    /// Collection ID or UID
    pub id: String,

    /// Label for the fork
    #[arg(long, short = 'l')]
    pub label: String,
}

#[derive(Args, Debug)]
pub struct MergeArgs {
    /// UID of the fork
    #[arg(long, short = 's')]
    pub source: String,

    /// UID of the collection receiving the changes
    #[arg(long, short = 'd')]
    pub destination: String,

    /// What happens to the fork after merging
    #[arg(long, value_enum, default_value_t = StrategyArg::Keep)]
    pub strategy: StrategyArg,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StrategyArg {
    /// Keep the fork
    Keep,
    /// Delete the fork
    Delete,
}

impl From<StrategyArg> for MergeStrategy {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::Keep => MergeStrategy::UpdateSourceWithDestination,
            StrategyArg::Delete => MergeStrategy::DeleteSource,
        }
    }
}

impl CollectionCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        let session = global.connect()?;
        let collections = session.clients.collections();
        let options = &session.options;
        let output = global.output();

        match &self.command {
            CollectionSubcommand::List => {
                let list = collections.list(options).await?;
                output.write_list(&list, "No collections found")
            }
            CollectionSubcommand::View(args) => {
                let details = collections.get(&args.id, options).await?;
                output.write(&details)?;
                if !output.is_json() && !details.items.is_empty() {
                    println!();
                    print_header("Requests");
                    print_items(&details.items, 0, output.color_enabled());
                }
                Ok(())
            }
            CollectionSubcommand::Delete(args) => {
                if !args.yes {
                    if !is_interactive() {
                        bail!("Refusing to delete without confirmation; pass --yes");
                    }
                    let question = format!("Delete collection {}?", args.id);
                    if !prompt_confirm_with_default(&question, false)? {
                        return Ok(());
                    }
                }
                let deleted = collections.delete(&args.id, options).await?;
                if output.is_json() {
                    output.write_json(&deleted)
                } else {
                    output.write_success(&format!("Deleted collection {}", args.id));
                    Ok(())
                }
            }
            CollectionSubcommand::Fork(args) => {
                if options.workspace().is_none() {
                    bail!("Forking needs a destination workspace; pass --workspace");
                }
                let fork = collections.create_fork(&args.id, &args.label, options).await?;
                if output.is_json() {
                    output.write_json(&fork)
                } else {
                    output.write_success(&format!(
                        "Forked {} as '{}' ({})",
                        args.id,
                        args.label,
                        opt(fork.uid.as_deref())
                    ));
                    Ok(())
                }
            }
            CollectionSubcommand::Merge(args) => {
                let merge = MergeForkRequest {
                    strategy: Some(args.strategy.into()),
                    source: Some(args.source.clone()),
                    destination: Some(args.destination.clone()),
                };
                let merged = collections.merge_fork(&merge, options).await?;
                if output.is_json() {
                    output.write_json(&merged)
                } else {
                    output.write_success(&format!(
                        "Merged {} into {}",
                        args.source, args.destination
                    ));
                    Ok(())
                }
            }
        }
    }
}

/// Prints folders and requests as an indented tree.
fn print_items(items: &[Item], depth: usize, color: bool) {
    let indent = "  ".repeat(depth);
    for item in items {
        let name = item.name.as_deref().unwrap_or("(unnamed)");
        match &item.request {
            Some(request) => {
                let method = request.method.as_deref().unwrap_or("GET");
                let method = if color {
                    style(format!("{method:<7}")).cyan().to_string()
                } else {
                    format!("{method:<7}")
                };
                println!("{indent}{method}{name}");
            }
            None => {
                let folder = if color {
                    style(name).bold().to_string()
                } else {
                    name.to_string()
                };
                println!("{indent}{folder}/");
            }
        }
        print_items(&item.items, depth + 1, color);
    }
}

impl TableOutput for Collection {
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
        let mut fields = vec![
            ("ID", opt(self.id.as_deref())),
            ("UID", opt(self.uid.as_deref())),
            ("Name", opt(self.name.as_deref())),
            ("Owner", opt(self.owner.as_deref())),
            ("Created", format_time(self.created_at.as_ref())),
            ("Updated", format_time(self.updated_at.as_ref())),
        ];
        if let Some(fork) = &self.fork {
            fields.push(("Fork label", opt(fork.label.as_deref())));
            fields.push(("Forked from", opt(fork.from.as_deref())));
        }
        fields
    }
}

impl TableOutput for CollectionDetails {
    fn headers() -> Vec<&'static str> {
        vec!["ID", "NAME", "REQUESTS"]
    }

    fn row(&self) -> Vec<String> {
        let info = self.info.as_ref();
        vec![
            opt(info.and_then(|i| i.postman_id.as_deref())),
            opt(info.and_then(|i| i.name.as_deref())),
            count_requests(&self.items).to_string(),
        ]
    }

    fn fields(&self) -> Vec<(&'static str, String)> {
        let info = self.info.as_ref();
        vec![
            ("ID", opt(info.and_then(|i| i.postman_id.as_deref()))),
            ("Name", opt(info.and_then(|i| i.name.as_deref()))),
            ("Description", opt(info.and_then(|i| i.description.as_deref()))),
            ("Updated", format_time(info.and_then(|i| i.updated_at.as_ref()))),
            ("Requests", count_requests(&self.items).to_string()),
        ]
    }
}

fn count_requests(items: &[Item]) -> usize {
    items
        .iter()
        .map(|item| usize::from(item.request.is_some()) + count_requests(&item.items))
        .sum()
}
