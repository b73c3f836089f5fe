//
//  postman-client
//  cli/auth.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Authentication commands.
//!
//! `pm auth login` checks a key against `/me` before storing it in the system
//! keychain under the API host, so one machine can hold keys for several
//! Postman API hosts.

use anyhow::{bail, Context, Result};
use clap::{Args, Subcommand};

use crate::api::{RequestOptions, RestClient, UsersClient};
use crate::auth::{
    host_key, mask_api_key, read_api_key_from_stdin, resolve_api_key, validate_api_key_format,
    KeyringStore,
};
use crate::config::Config;
use crate::interactive::{is_interactive, prompt_confirm_with_default, prompt_password};

use super::GlobalOptions;

/// Authenticate with the Postman API.
#[derive(Args, Debug)]
pub struct AuthCommand {
    #[command(subcommand)]
    pub command: AuthSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum AuthSubcommand {
    /// Store an API key in the system keychain
    Login(LoginArgs),

    /// Remove the stored API key
    Logout,

    /// View authentication status
    Status(StatusArgs),
}

#[derive(Args, Debug)]
pub struct LoginArgs {
    /// Read the API key from standard input
    #[arg(long)]
    pub with_key: bool,
}

#[derive(Args, Debug)]
pub struct StatusArgs {
    /// Show the masked API key
    #[arg(long, short = 't')]
    pub show_key: bool,
}

impl AuthCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        match &self.command {
            AuthSubcommand::Login(args) => login(args, global).await,
            AuthSubcommand::Logout => logout(global),
            AuthSubcommand::Status(args) => status(args, global).await,
        }
    }
}

async fn login(args: &LoginArgs, global: &GlobalOptions) -> Result<()> {
    let config = Config::load()?;
    let base_url = global.base_url(&config);
    let host = host_key(&base_url);
    let keyring = KeyringStore::new();

    if !args.with_key && keyring.get(&host).ok().flatten().is_some() && is_interactive() {
        println!("An API key for {} is already stored", host);
        if !prompt_confirm_with_default("Replace it?", false)? {
            return Ok(());
        }
    }

    let api_key = if args.with_key {
        read_api_key_from_stdin()?
    } else if is_interactive() {
        println!("Generate an API key at https://go.postman.co/settings/me/api-keys");
        prompt_password("Paste your API key")?
    } else {
        bail!("No terminal available; pipe the key with `pm auth login --with-key`");
    };

    if !validate_api_key_format(&api_key) {
        bail!("Invalid API key format");
    }

    let rest = config
        .client_builder(&api_key)
        .base_url(base_url.as_str())
        .build()?;
    let me = UsersClient::new(rest)
        .me(&RequestOptions::new())
        .await
        .context("API key was rejected")?;

    keyring
        .store(&host, &api_key)
        .context("Failed to store API key in the system keychain")?;

    match me.user.username {
        Some(username) => println!("Logged in to {} as {}", host, username),
        None => println!("Logged in to {}", host),
    }
    Ok(())
}

fn logout(global: &GlobalOptions) -> Result<()> {
    let config = Config::load()?;
    let host = host_key(&global.base_url(&config));
    KeyringStore::new().delete(&host)?;
    println!("Logged out of {}", host);
    Ok(())
}

async fn status(args: &StatusArgs, global: &GlobalOptions) -> Result<()> {
    let config = Config::load()?;
    let base_url = global.base_url(&config);
    let host = host_key(&base_url);
    let (api_key, source) = resolve_api_key(global.api_key.as_deref(), &KeyringStore::new(), &host)?;

    println!("{}", host);
    println!("  API key from {}", source);
    if args.show_key {
        println!("  API key: {}", mask_api_key(&api_key));
    }

    let rest: RestClient = config.client_builder(&api_key).base_url(base_url).build()?;
    let me = UsersClient::new(rest).me(&RequestOptions::new()).await?;
    match (me.user.username, me.user.email) {
        (Some(username), Some(email)) => println!("  Logged in as {} ({})", username, email),
        (Some(username), None) => println!("  Logged in as {}", username),
        _ => println!("  Logged in"),
    }
    Ok(())
}
