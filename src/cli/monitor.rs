//
//  postman-client
//  cli/monitor.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Monitor commands
//!
//! `pm monitor run` blocks until the API reports the run finished, showing a
//! spinner in the meantime.

use std::time::Duration;

use anyhow::Result;
use clap::{Args, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};

use crate::api::resources::monitors::{Monitor, MonitorRun};
use crate::output::{format_status, format_time, opt, truncate, TableOutput, NONE};

use super::GlobalOptions;

/// Manage monitors
#[derive(Args, Debug)]
pub struct MonitorCommand {
    #[command(subcommand)]
    pub command: MonitorSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum MonitorSubcommand {
    /// List monitors
    #[command(visible_alias = "ls")]
    List,

    /// View monitor details
    View(MonitorArgs),

    /// Run a monitor and wait for the result
    Run(MonitorArgs),
}

#[derive(Args, Debug)]
pub struct MonitorArgs {
    /// Monitor ID or UID
    pub id: String,
}

impl MonitorCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        let session = global.connect()?;
        let monitors = session.clients.monitors();
        let options = &session.options;
        let output = global.output();

        match &self.command {
            MonitorSubcommand::List => {
                let list = monitors.list(options).await?;
                output.write_list(&list, "No monitors found")
            }
            MonitorSubcommand::View(args) => {
                let monitor = monitors.get(&args.id, options).await?;
                output.write(&monitor)
            }
            MonitorSubcommand::Run(args) => {
                let spinner = if output.is_json() {
                    ProgressBar::hidden()
                } else {
                    let pb = ProgressBar::new_spinner();
                    pb.set_style(ProgressStyle::default_spinner().template("{spinner:.green} {msg}")?);
                    pb.enable_steady_tick(Duration::from_millis(100));
                    pb
                };
                spinner.set_message(format!("Running monitor {}...", args.id));

                let result = monitors.run(&args.id, options).await;
                spinner.finish_and_clear();
                let run = result?;

                output.write(&run)
            }
        }
    }
}

impl TableOutput for Monitor {
    fn headers() -> Vec<&'static str> {
        vec!["ID", "NAME", "SCHEDULE", "LAST RUN"]
    }

    fn row(&self) -> Vec<String> {
        vec![
            opt(self.uid.as_deref().or(self.id.as_deref())),
            truncate(self.name.as_deref().unwrap_or_default(), 40),
            opt(self.schedule.as_ref().and_then(|s| s.cron.as_deref())),
            opt(self.last_run.as_ref().and_then(|r| r.status.as_deref())),
        ]
    }

    fn fields(&self) -> Vec<(&'static str, String)> {
        let schedule = self.schedule.as_ref();
        let last_run = self.last_run.as_ref();
        let stats = self.stats.as_ref();
        vec![
            ("ID", opt(self.id.as_deref())),
            ("Name", opt(self.name.as_deref())),
            ("Collection", opt(self.collection_uid.as_deref().or(self.collection.as_deref()))),
            ("Environment", opt(self.environment_uid.as_deref().or(self.environment.as_deref()))),
            ("Schedule", opt(schedule.and_then(|s| s.cron.as_deref()))),
            ("Timezone", opt(schedule.and_then(|s| s.timezone.as_deref()))),
            ("Next run", format_time(schedule.and_then(|s| s.next_run.as_ref()))),
            ("Last run", opt(last_run.and_then(|r| r.status.as_deref()))),
            (
                "Assertions",
                match stats.and_then(|s| s.assertions.as_ref()) {
                    Some(a) => format!("{} failed of {}", opt(a.failed), opt(a.total)),
                    None => NONE.to_string(),
                },
            ),
            (
                "Requests",
                opt(stats.and_then(|s| s.requests.as_ref()).and_then(|r| r.total)),
            ),
        ]
    }
}

impl TableOutput for MonitorRun {
    fn headers() -> Vec<&'static str> {
        vec!["STATUS", "STARTED", "FINISHED"]
    }

    fn row(&self) -> Vec<String> {
        vec![
            opt(self.status.as_deref()),
            format_time(self.started_at.as_ref()),
            format_time(self.finished_at.as_ref()),
        ]
    }

    fn fields(&self) -> Vec<(&'static str, String)> {
        let color = console::colors_enabled();
        vec![
            (
                "Status",
                self.status
                    .as_deref()
                    .map_or_else(|| NONE.to_string(), |s| format_status(s, color)),
            ),
            ("Started", format_time(self.started_at.as_ref())),
            ("Finished", format_time(self.finished_at.as_ref())),
        ]
    }
}
