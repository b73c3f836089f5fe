//
//  postman-client
//  auth/token.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! API key helpers: reading, format checks and masking for display.

use anyhow::Result;

/// Reads a single API key from standard input.
///
/// Only the first line is read; surrounding whitespace is trimmed. Supports
/// piped input: `echo "$POSTMAN_API_KEY" | pm auth login --with-key`
pub fn read_api_key_from_stdin() -> Result<String> {
    use std::io::{self, BufRead};

    let stdin = io::stdin();
    let mut line = String::new();
    stdin.lock().read_line(&mut line)?;

    Ok(line.trim().to_string())
}

/// Checks the format of an API key: non-empty and free of whitespace.
///
/// This does not contact the API; use `pm auth status` for that.
///
/// ```rust
/// use postman_client::auth::validate_api_key_format;
///
/// assert!(validate_api_key_format("PMAK-62a9d1c2e7a0f0001c2e3a4b-1234"));
/// assert!(!validate_api_key_format(""));
/// assert!(!validate_api_key_format("PMAK 123"));
/// ```
pub fn validate_api_key_format(api_key: &str) -> bool {
    !api_key.is_empty() && !api_key.chars().any(char::is_whitespace)
}

/// Masks a key for display, keeping the first and last four characters.
///
/// Keys of eight characters or fewer are fully masked.
pub fn mask_api_key(api_key: &str) -> String {
    let chars: Vec<char> = api_key.chars().collect();
    if chars.len() <= 8 {
        "*".repeat(chars.len())
    } else {
        let head: String = chars[..4].iter().collect();
        let tail: String = chars[chars.len() - 4..].iter().collect();
        format!("{head}...{tail}")
    }
}
