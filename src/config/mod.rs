//
//  postman-client
//  config/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Configuration
//!
//! Settings for the `pm` binary, stored as TOML:
//!
//! | Platform | Location |
//! |----------|----------|
//! | Linux | `~/.config/pm/config.toml` |
//! | macOS | `~/Library/Application Support/pm/config.toml` |
//! | Windows | `%APPDATA%\pm\config\config.toml` |
//!
//! `PM_CONFIG_DIR` replaces the directory on every platform.
//!
//! ```toml
//! base_url = "https://api.getpostman.com"
//! default_workspace = "1f0df51a-8658-4ee8-a2a1-d2567dfa09a9"
//! timeout_secs = 30
//! debug_http = false
//! ```
//!
//! API keys are never stored here; see [`crate::auth`].

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::api::{RestClient, RestClientBuilder, DEFAULT_BASE_URL};

/// Environment variable replacing the configuration directory.
pub const CONFIG_DIR_ENV: &str = "PM_CONFIG_DIR";

/// Keys accepted by [`Config::get`] and [`Config::set`].
pub const KEYS: &[&str] = &["base_url", "default_workspace", "timeout_secs", "debug_http"];

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Config {
    /// API base URL; the public API when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,

    /// Workspace applied to commands that accept one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_workspace: Option<String>,

    /// Whole-request timeout in seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,

    /// Dump every HTTP exchange to stderr.
    #[serde(default)]
    pub debug_http: bool,
}

impl Config {
    /// Loads the configuration, or the defaults when no file exists.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        toml::from_str(&content).with_context(|| format!("Invalid configuration in {}", path.display()))
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            if !dir.is_empty() {
                return Ok(PathBuf::from(dir).join("config.toml"));
            }
        }
        let dirs = ProjectDirs::from("", "", "pm")
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;
        Ok(dirs.config_dir().join("config.toml"))
    }

    /// The configured base URL, or the public API.
    pub fn base_url(&self) -> &str {
        self.base_url
            .as_deref()
            .filter(|url| !url.is_empty())
            .unwrap_or(DEFAULT_BASE_URL)
    }

    /// Turns these settings into a transport builder for `api_key`.
    pub fn client_builder(&self, api_key: &str) -> RestClientBuilder {
        let mut builder = RestClient::builder(api_key).base_url(self.base_url());
        if let Some(secs) = self.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        builder
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "base_url" => self.base_url.clone(),
            "default_workspace" => self.default_workspace.clone(),
            "timeout_secs" => self.timeout_secs.map(|secs| secs.to_string()),
            "debug_http" => Some(self.debug_http.to_string()),
            _ => None,
        }
    }

    /// Sets a key. Returns `Ok(false)` for unknown keys and an error when the
    /// value does not parse for that key.
    pub fn set(&mut self, key: &str, value: String) -> Result<bool> {
        match key {
            "base_url" => {
                url::Url::parse(&value).with_context(|| format!("'{value}' is not a valid URL"))?;
                self.base_url = Some(value.trim_end_matches('/').to_string());
            }
            "default_workspace" => self.default_workspace = Some(value),
            "timeout_secs" => {
                let secs = value
                    .parse()
                    .with_context(|| format!("'{value}' is not a number of seconds"))?;
                self.timeout_secs = Some(secs);
            }
            "debug_http" => {
                self.debug_http = value
                    .parse()
                    .with_context(|| format!("'{value}' is not true or false"))?;
            }
            _ => return Ok(false),
        }
        Ok(true)
    }

    /// Every known key with its current value, unset keys included.
    pub fn entries(&self) -> Vec<(&'static str, Option<String>)> {
        KEYS.iter().map(|key| (*key, self.get(key))).collect()
    }
}
