//
//  postman-client
//  cli/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! CLI command definitions using clap derive macros

mod api;
mod audit;
mod auth;
mod collection;
mod completion;
mod config;
mod environment;
mod import;
mod me;
mod monitor;
mod validate;
mod workspace;

pub use api::ApiCommand;
pub use audit::AuditCommand;
pub use auth::AuthCommand;
pub use collection::CollectionCommand;
pub use completion::CompletionCommand;
pub use config::ConfigCommand;
pub use environment::EnvironmentCommand;
pub use import::ImportCommand;
pub use me::MeCommand;
pub use monitor::MonitorCommand;
pub use validate::ValidateCommand;
pub use workspace::WorkspaceCommand;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use crate::api::{ClientSet, RequestOptions};
use crate::auth::{host_key, resolve_api_key, KeyringStore};
use crate::config::Config;
use crate::output::OutputWriter;

/// Postman CLI - Work with the Postman API from the command line
#[derive(Parser, Debug)]
#[command(
    name = "pm",
    version,
    about = "Work with the Postman API from the command line",
    long_about = "pm is a CLI for the Postman public API.\n\n\
                  It manages collections, environments, workspaces and monitors, \
                  validates API schemas and imports OpenAPI definitions.",
    propagate_version = true,
    after_help = "Use 'pm <command> --help' for more information about a command."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[command(flatten)]
    pub global: GlobalOptions,
}

/// Global options available to all commands
#[derive(Parser, Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Output format as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Workspace to scope requests to
    #[arg(long, short = 'w', global = true, env = "PM_WORKSPACE")]
    pub workspace: Option<String>,

    /// Postman API key (overrides POSTMAN_API_KEY and the keychain)
    #[arg(long, global = true)]
    pub api_key: Option<String>,

    /// API base URL
    #[arg(long, global = true, env = "POSTMAN_API_URL")]
    pub base_url: Option<String>,

    /// Print every HTTP request and response to stderr
    #[arg(long, global = true)]
    pub debug_http: bool,
}

impl GlobalOptions {
    pub fn output(&self) -> OutputWriter {
        OutputWriter::from_flag(self.json)
    }

    /// `--base-url`, then the configured URL, then the public API.
    pub fn base_url(&self, config: &Config) -> String {
        self.base_url
            .as_deref()
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| config.base_url())
            .trim_end_matches('/')
            .to_string()
    }

    /// `--workspace`, then the configured default workspace.
    pub fn request_options(&self, config: &Config) -> RequestOptions {
        let workspace = self
            .workspace
            .as_ref()
            .or(config.default_workspace.as_ref())
            .filter(|ws| !ws.is_empty());
        match workspace {
            Some(ws) => RequestOptions::new().with_workspace(ws.clone()),
            None => RequestOptions::new(),
        }
    }

    /// Loads the configuration and builds an authenticated client set.
    pub fn connect(&self) -> Result<Session> {
        let config = Config::load()?;
        let base_url = self.base_url(&config);
        let (api_key, source) =
            resolve_api_key(self.api_key.as_deref(), &KeyringStore::new(), &host_key(&base_url))?;
        tracing::debug!("using API key from {source}");

        let mut builder = config.client_builder(&api_key).base_url(base_url);
        if self.debug_http || config.debug_http {
            builder = builder.debug_log(std::io::stderr());
        }
        let rest = builder.build().context("Failed to create API client")?;

        Ok(Session {
            options: self.request_options(&config),
            clients: ClientSet::from_rest(rest),
            config,
        })
    }
}

/// Everything a command needs to talk to the API.
pub struct Session {
    pub config: Config,
    pub clients: ClientSet,
    pub options: RequestOptions,
}

/// Top-level commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Authenticate with the Postman API
    #[command(visible_alias = "login")]
    Auth(AuthCommand),

    /// Show the authenticated user
    #[command(visible_alias = "whoami")]
    Me(MeCommand),

    /// Manage workspaces
    #[command(visible_alias = "ws")]
    Workspace(WorkspaceCommand),

    /// Manage collections
    #[command(visible_alias = "col")]
    Collection(CollectionCommand),

    /// Manage environments
    #[command(visible_alias = "env")]
    Environment(EnvironmentCommand),

    /// Manage monitors
    Monitor(MonitorCommand),

    /// List team audit logs
    Audit(AuditCommand),

    /// Validate an API schema for security issues
    Validate(ValidateCommand),

    /// Import an OpenAPI definition or exported data
    Import(ImportCommand),

    /// Make API requests
    Api(ApiCommand),

    /// Manage CLI configuration
    Config(ConfigCommand),

    /// Generate shell completion scripts
    Completion(CompletionCommand),

    /// Print version information
    Version,
}
