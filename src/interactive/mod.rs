//
//  postman-client
//  interactive/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Terminal prompts used by `pm auth login` and destructive commands.
//!
//! Both prompts need a TTY. Commands check [`is_interactive`] first and fall
//! back to flags (`--with-key`, `--yes`) when stdin is piped.

use std::io::IsTerminal;

use anyhow::Result;
use dialoguer::{Confirm, Password};

/// True when stdin and stderr are attached to a terminal.
pub fn is_interactive() -> bool {
    std::io::stdin().is_terminal() && console::user_attended_stderr()
}

/// Prompts for a secret without echoing it.
///
/// Empty input is rejected and the prompt repeats.
pub fn prompt_password(message: &str) -> Result<String> {
    let password = Password::new().with_prompt(message).interact()?;
    Ok(password)
}

/// Asks a yes/no question, returning `default` on a bare Enter.
pub fn prompt_confirm_with_default(message: &str, default: bool) -> Result<bool> {
    let confirmed = Confirm::new()
        .with_prompt(message)
        .default(default)
        .interact()?;
    Ok(confirmed)
}
