//
//  postman-client
//  cli/audit.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! `pm audit`: team audit logs (Enterprise plans only).

use anyhow::{bail, Result};
use chrono::NaiveDate;
use clap::Args;

use crate::api::resources::audit_logs::Trail;
use crate::api::{AuditLogQuery, SortOrder};
use crate::output::{format_time, opt, truncate, TableOutput};

use super::GlobalOptions;

/// List team audit logs
#[derive(Args, Debug)]
pub struct AuditCommand {
    /// Only events on or after this date (YYYY-MM-DD)
    #[arg(long)]
    pub since: Option<NaiveDate>,

    /// Only events on or before this date (YYYY-MM-DD)
    #[arg(long)]
    pub until: Option<NaiveDate>,

    /// Maximum number of events to return
    #[arg(long, short = 'l')]
    pub limit: Option<u32>,

    /// Cursor returned by a previous page
    #[arg(long)]
    pub cursor: Option<String>,

    /// Sort by timestamp (asc, desc)
    #[arg(long)]
    pub order: Option<SortOrder>,
}

impl AuditCommand {
    fn query(&self) -> Result<AuditLogQuery> {
        if let (Some(since), Some(until)) = (self.since, self.until) {
            if since > until {
                bail!("--since ({since}) is after --until ({until})");
            }
        }
        Ok(AuditLogQuery {
            since: self.since,
            until: self.until,
            limit: self.limit,
            cursor: self.cursor.clone(),
            order_by: self.order,
        })
    }

    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        let query = self.query()?;
        let session = global.connect()?;
        let logs = session
            .clients
            .audit_logs()
            .list(&query, &session.options)
            .await?;
        global.output().write_list(&logs.trails, "No audit events found")
    }
}

impl TableOutput for Trail {
    fn headers() -> Vec<&'static str> {
        vec!["TIME", "ACTION", "ACTOR", "MESSAGE"]
    }

    fn row(&self) -> Vec<String> {
        let actor = self.data.as_ref().and_then(|d| d.actor.as_ref());
        vec![
            format_time(self.timestamp.as_ref()),
            opt(self.action.as_deref()),
            opt(actor.and_then(|a| a.username.as_deref().or(a.name.as_deref()))),
            truncate(self.message.as_deref().unwrap_or_default(), 60),
        ]
    }

    fn fields(&self) -> Vec<(&'static str, String)> {
        let team = self.data.as_ref().and_then(|d| d.team.as_ref());
        vec![
            ("ID", opt(self.id)),
            ("Time", format_time(self.timestamp.as_ref())),
            ("Action", opt(self.action.as_deref())),
            ("IP", opt(self.ip.as_deref())),
            ("User agent", opt(self.user_agent.as_deref())),
            ("Team", opt(team.and_then(|t| t.name.as_deref()))),
            ("Message", opt(self.message.as_deref())),
        ]
    }
}
