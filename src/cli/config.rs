//
//  postman-client
//  cli/config.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! CLI configuration commands
//!
//! Reads and writes `config.toml`. API keys live in the keychain and are
//! managed with `pm auth` instead.

use anyhow::Result;
use clap::{Args, Subcommand};
use console::style;

use crate::config::{Config, KEYS};

use super::GlobalOptions;

/// Manage CLI configuration
#[derive(Args, Debug)]
pub struct ConfigCommand {
    #[command(subcommand)]
    pub command: ConfigSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum ConfigSubcommand {
    /// Get a configuration value
    Get(GetArgs),

    /// Set a configuration value
    Set(SetArgs),

    /// List all configuration values
    #[command(visible_alias = "ls")]
    List,

    /// Show configuration file path
    Path,
}

#[derive(Args, Debug)]
pub struct GetArgs {
    /// Configuration key
    pub key: String,
}

#[derive(Args, Debug)]
pub struct SetArgs {
    /// Configuration key
    pub key: String,

    /// Configuration value
    pub value: String,
}

impl ConfigCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        match &self.command {
            ConfigSubcommand::Get(args) => get(args, global),
            ConfigSubcommand::Set(args) => set(args, global),
            ConfigSubcommand::List => list(global),
            ConfigSubcommand::Path => {
                println!("{}", Config::config_path()?.display());
                Ok(())
            }
        }
    }
}

fn unknown_key(key: &str) -> anyhow::Error {
    anyhow::anyhow!("Unknown configuration key '{}'. Valid keys: {}", key, KEYS.join(", "))
}

fn get(args: &GetArgs, global: &GlobalOptions) -> Result<()> {
    if !KEYS.contains(&args.key.as_str()) {
        return Err(unknown_key(&args.key));
    }
    let value = Config::load()?.get(&args.key);

    if global.json {
        let result = serde_json::json!({ "key": args.key, "value": value });
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else if let Some(value) = value {
        println!("{}", value);
    }
    Ok(())
}

fn set(args: &SetArgs, global: &GlobalOptions) -> Result<()> {
    let mut config = Config::load()?;
    if !config.set(&args.key, args.value.clone())? {
        return Err(unknown_key(&args.key));
    }
    config.save()?;

    global
        .output()
        .write_success(&format!("Set {} to {}", args.key, args.value));
    Ok(())
}

fn list(global: &GlobalOptions) -> Result<()> {
    let entries = Config::load()?.entries();

    if global.json {
        let map: serde_json::Map<String, serde_json::Value> = entries
            .into_iter()
            .map(|(key, value)| (key.to_string(), value.into()))
            .collect();
        println!("{}", serde_json::to_string_pretty(&map)?);
        return Ok(());
    }

    let width = KEYS.iter().map(|k| k.len()).max().unwrap_or(0);
    for (key, value) in entries {
        match value {
            Some(value) => println!("{:<width$}  {}", key, value),
            None => println!("{:<width$}  {}", key, style("(unset)").dim()),
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_key_lists_valid_keys() {
        let message = unknown_key("editor").to_string();
        assert!(message.contains("'editor'"));
        assert!(message.contains("base_url"));
        assert!(message.contains("debug_http"));
    }

    #[test]
    fn test_get_rejects_unknown_key() {
        let args = GetArgs { key: "editor".into() };
        assert!(get(&args, &GlobalOptions::default()).is_err());
    }
}
