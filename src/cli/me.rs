//
//  postman-client
//  cli/me.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! `pm me`: the authenticated user and their usage limits.

use anyhow::Result;
use clap::Args;

use crate::api::resources::users::{AuthenticatedUser, Operation};
use crate::output::{opt, print_header, TableBuilder, TableOutput};

use super::GlobalOptions;

/// Show the authenticated user
#[derive(Args, Debug)]
pub struct MeCommand {}

impl MeCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        let session = global.connect()?;
        let me = session.clients.users().me(&session.options).await?;

        let output = global.output();
        output.write(&me)?;
        if !output.is_json() && !me.operations.is_empty() {
            println!();
            print_header("Usage");
            TableBuilder::new()
                .color(output.color_enabled())
                .headers(Operation::headers())
                .rows(me.operations.iter().map(Operation::row))
                .print();
        }
        Ok(())
    }
}

impl TableOutput for AuthenticatedUser {
    fn headers() -> Vec<&'static str> {
        vec!["ID", "USERNAME", "NAME", "EMAIL"]
    }

    fn row(&self) -> Vec<String> {
        vec![
            opt(self.user.id),
            opt(self.user.username.as_deref()),
            opt(self.user.full_name.as_deref()),
            opt(self.user.email.as_deref()),
        ]
    }

    fn fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("ID", opt(self.user.id)),
            ("Username", opt(self.user.username.as_deref())),
            ("Name", opt(self.user.full_name.as_deref())),
            ("Email", opt(self.user.email.as_deref())),
            ("Public", opt(self.user.is_public)),
        ]
    }
}

impl TableOutput for Operation {
    fn headers() -> Vec<&'static str> {
        vec!["OPERATION", "USAGE", "LIMIT", "OVERAGE"]
    }

    fn row(&self) -> Vec<String> {
        vec![
            opt(self.name.as_deref()),
            opt(self.usage),
            opt(self.limit),
            opt(self.overage),
        ]
    }

    fn fields(&self) -> Vec<(&'static str, String)> {
        let headers = ["Operation", "Usage", "Limit", "Overage"];
        headers.into_iter().zip(self.row()).collect()
    }
}
