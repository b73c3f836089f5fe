//
//  postman-client
//  auth/keyring.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Secure API Key Storage
//!
//! Stores Postman API keys in the platform keychain:
//!
//! - **macOS**: Keychain Services
//! - **Linux**: Secret Service API (GNOME Keyring, KWallet)
//! - **Windows**: Windows Credential Manager
//!
//! ## Storage Model
//!
//! - **Service**: `postman-client`
//! - **Account**: the API host (`api.getpostman.com` unless overridden)
//! - **Secret**: the API key
//!
//! ## Example
//!
//! ```rust,no_run
//! use postman_client::auth::KeyringStore;
//!
//! fn manage_keys() -> anyhow::Result<()> {
//!     let store = KeyringStore::new();
//!     store.store("api.getpostman.com", "PMAK-your-key")?;
//!
//!     if store.get("api.getpostman.com")?.is_some() {
//!         println!("key stored");
//!     }
//!
//!     store.delete("api.getpostman.com")?;
//!     Ok(())
//! }
//! ```

use anyhow::Result;
use keyring::Entry;

/// Keychain service name shared by every stored key.
pub const SERVICE_NAME: &str = "postman-client";

/// API key storage backed by the system keychain.
///
/// Construction never touches the keychain; each call opens its own entry.
#[derive(Debug, Clone)]
pub struct KeyringStore {
    service: String,
}

impl Default for KeyringStore {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyringStore {
    pub fn new() -> Self {
        Self {
            service: SERVICE_NAME.to_string(),
        }
    }

    /// Stores (or replaces) the key for `host`.
    pub fn store(&self, host: &str, api_key: &str) -> Result<()> {
        let entry = Entry::new(&self.service, host)?;
        entry.set_password(api_key)?;
        Ok(())
    }

    /// Returns the key for `host`, or `None` when nothing is stored.
    pub fn get(&self, host: &str) -> Result<Option<String>> {
        let entry = Entry::new(&self.service, host)?;
        match entry.get_password() {
            Ok(api_key) => Ok(Some(api_key)),
            Err(keyring::Error::NoEntry) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Removes the key for `host`. Succeeds when nothing was stored.
    pub fn delete(&self, host: &str) -> Result<()> {
        let entry = Entry::new(&self.service, host)?;
        match entry.delete_credential() {
            Ok(()) => Ok(()),
            Err(keyring::Error::NoEntry) => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// Keychain account for a base URL: its host, or the URL itself when it has none.
pub fn host_key(base_url: &str) -> String {
    url::Url::parse(base_url)
        .ok()
        .and_then(|url| {
            url.host_str().map(|host| match url.port() {
                Some(port) => format!("{host}:{port}"),
                None => host.to_string(),
            })
        })
        .unwrap_or_else(|| base_url.trim_end_matches('/').to_string())
}
