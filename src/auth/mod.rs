//
//  postman-client
//  auth/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Authentication
//!
//! The Postman API authenticates every call with an API key sent in the
//! `x-api-key` header. This module decides which key the binary uses and
//! keeps it in the system keychain between runs.
//!
//! ## Resolution Order
//!
//! | Priority | Source |
//! |----------|--------|
//! | 1 | `--api-key` flag |
//! | 2 | `POSTMAN_API_KEY` environment variable |
//! | 3 | System keychain entry for the API host |
//!
//! Keys are never written to the configuration file.

mod keyring;
mod token;

pub use keyring::*;
pub use token::*;

/// Environment variable holding an API key.
pub const API_KEY_ENV: &str = "POSTMAN_API_KEY";

/// Where a resolved API key came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeySource {
    Flag,
    Environment,
    Keychain,
}

impl std::fmt::Display for KeySource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Flag => f.write_str("--api-key flag"),
            Self::Environment => write!(f, "{API_KEY_ENV} environment variable"),
            Self::Keychain => f.write_str("system keychain"),
        }
    }
}

/// No API key could be found in any source.
#[derive(Debug, thiserror::Error)]
#[error("no API key found for {host}; run `pm auth login` or set {API_KEY_ENV}")]
pub struct MissingApiKey {
    pub host: String,
}

/// Resolves the API key for `host`.
///
/// Empty values are skipped so that an exported-but-empty variable falls
/// through to the keychain. An unreadable keychain is logged and treated as
/// empty. Fails with [`MissingApiKey`] when every source is empty.
pub fn resolve_api_key(
    flag: Option<&str>,
    store: &KeyringStore,
    host: &str,
) -> anyhow::Result<(String, KeySource)> {
    let env = std::env::var(API_KEY_ENV).ok();
    resolve_from(flag, env.as_deref(), store, host)
}

fn resolve_from(
    flag: Option<&str>,
    env: Option<&str>,
    store: &KeyringStore,
    host: &str,
) -> anyhow::Result<(String, KeySource)> {
    if let Some(key) = flag.filter(|k| !k.is_empty()) {
        return Ok((key.to_string(), KeySource::Flag));
    }

    if let Some(key) = env.filter(|k| !k.is_empty()) {
        return Ok((key.to_string(), KeySource::Environment));
    }

    match store.get(host) {
        Ok(Some(key)) if !key.is_empty() => return Ok((key, KeySource::Keychain)),
        Ok(_) => {}
        Err(e) => tracing::warn!("keychain unavailable: {e:#}"),
    }

    Err(MissingApiKey {
        host: host.to_string(),
    }
    .into())
}
