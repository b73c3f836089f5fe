//
//  postman-client
//  lib.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Postman API Client
//!
//! A typed client for the Postman public REST API, plus the `pm` command-line
//! tool built on top of it.
//!
//! ## Overview
//!
//! Every API call goes through one transport, [`api::RestClient`], which
//! attaches the `x-api-key` header, scopes requests to a workspace when asked,
//! and turns non-2xx responses into a single error type,
//! [`api::PostmanError`]. Resource clients (collections, environments,
//! workspaces, monitors, webhooks, users, audit logs, API security and
//! imports) are thin wrappers that map one method to one round trip.
//!
//! ## Module Structure
//!
//! - [`api`]: Transport, error normalization and resource clients
//! - [`auth`]: API key resolution and keychain storage
//! - [`config`]: Configuration file management
//! - [`output`]: Table and JSON output for the binary
//! - [`interactive`]: Terminal prompts
//! - [`cli`]: Command-line interface definitions using clap
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use postman_client::api::{ClientSet, RequestOptions};
//!
//! # async fn run() -> postman_client::api::Result<()> {
//! let clients = ClientSet::new("PMAK-...")?;
//! let opts = RequestOptions::new().with_workspace("1f0df51a-8658-4ee8-a2a1-d2567dfa09a9");
//!
//! for collection in clients.collections().list(&opts).await? {
//!     println!("{}", collection.name.unwrap_or_default());
//! }
//! # Ok(())
//! # }
//! ```

/// HTTP transport and resource clients for the Postman API.
///
/// Handles authentication headers, workspace scoping, content negotiation,
/// cancellation and error normalization.
pub mod api;

/// API key resolution and secure storage via the system keychain.
pub mod auth;

/// Command-line interface definitions.
///
/// Contains all `pm` commands, arguments, and subcommands defined using the
/// clap derive API.
pub mod cli;

/// Configuration file management.
///
/// Stored in platform-specific locations:
/// - Linux: `~/.config/pm/config.toml`
/// - macOS: `~/Library/Application Support/pm/config.toml`
/// - Windows: `%APPDATA%\pm\config\config.toml`
pub mod config;

/// Interactive terminal prompts.
pub mod interactive;

/// Output formatting: tables for people, JSON for scripts.
pub mod output;

/// Re-export of the root command.
///
/// ```rust,no_run
/// use clap::Parser;
/// use postman_client::Cli;
///
/// let cli = Cli::parse();
/// ```
pub use cli::Cli;

/// Re-export of the configuration struct.
pub use config::Config;

/// Name of the binary, used for display and configuration paths.
pub const APP_NAME: &str = "pm";

/// Crate version, sent in the `User-Agent` header.
///
/// ```rust
/// use postman_client::VERSION;
///
/// println!("pm version {}", VERSION);
/// ```
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Exit codes for the `pm` binary.
///
/// - `0`: Success
/// - `1-3`: General errors and usage issues
/// - `4-7`: Authentication-related issues
/// - `8-15`: Resource-related issues
pub mod exit_codes {
    use crate::api::PostmanError;
    use crate::auth::MissingApiKey;

    /// Successful execution.
    pub const SUCCESS: i32 = 0;

    /// General error. Check stderr for details.
    pub const ERROR: i32 = 1;

    /// Invalid usage or arguments, as reported by clap.
    pub const USAGE: i32 = 2;

    /// The API rejected the key, or no key was configured.
    pub const AUTH_ERROR: i32 = 4;

    /// The requested resource does not exist (HTTP 404).
    pub const NOT_FOUND: i32 = 8;

    /// Maps a command failure to its exit code.
    ///
    /// Looks through the whole `anyhow` context chain, so wrapping a
    /// [`PostmanError`] with `.context(..)` keeps its code.
    pub fn for_error(err: &anyhow::Error) -> i32 {
        for cause in err.chain() {
            if cause.downcast_ref::<MissingApiKey>().is_some() {
                return AUTH_ERROR;
            }
            if let Some(err) = cause.downcast_ref::<PostmanError>() {
                let rejected = err.api_error().is_some_and(|e| e.is_authentication_error());
                if rejected || err.status() == Some(401) {
                    return AUTH_ERROR;
                }
                if err.status() == Some(404) {
                    return NOT_FOUND;
                }
                return ERROR;
            }
        }
        ERROR
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use crate::api::ApiError;

        fn api(status: u16, name: &str) -> anyhow::Error {
            PostmanError::Api {
                status,
                error: ApiError::new(name, "boom"),
            }
            .into()
        }

        #[test]
        fn test_authentication_error() {
            assert_eq!(for_error(&api(401, "AuthenticationError")), AUTH_ERROR);
            assert_eq!(for_error(&api(403, "AuthenticationError")), AUTH_ERROR);
        }

        #[test]
        fn test_not_found() {
            assert_eq!(for_error(&api(404, "instanceNotFoundError")), NOT_FOUND);
        }

        #[test]
        fn test_context_is_followed() {
            let err = api(404, "instanceNotFoundError").context("Failed to fetch collection");
            assert_eq!(for_error(&err), NOT_FOUND);
        }

        #[test]
        fn test_missing_key() {
            let err: anyhow::Error = MissingApiKey {
                host: "api.getpostman.com".into(),
            }
            .into();
            assert_eq!(for_error(&err), AUTH_ERROR);
        }

        #[test]
        fn test_other_errors() {
            assert_eq!(for_error(&api(500, "serverError")), ERROR);
            assert_eq!(for_error(&anyhow::anyhow!("disk full")), ERROR);
        }
    }
}
