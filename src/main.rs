//
//  postman-client
//  main.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use postman_client::cli::{Cli, Commands};
use postman_client::exit_codes;

#[tokio::main]
async fn main() {
    init_logging();

    let cli = Cli::parse();
    let output = cli.global.output();

    match run(cli).await {
        Ok(()) => std::process::exit(exit_codes::SUCCESS),
        Err(e) => {
            output.write_error(&format!("{e:#}"));
            std::process::exit(exit_codes::for_error(&e));
        }
    }
}

/// Logs go to stderr; `PM_DEBUG` takes an `EnvFilter` directive.
fn init_logging() {
    let filter = EnvFilter::try_from_env("PM_DEBUG").unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

async fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Auth(cmd) => cmd.run(&cli.global).await,
        Commands::Me(cmd) => cmd.run(&cli.global).await,
        Commands::Workspace(cmd) => cmd.run(&cli.global).await,
        Commands::Collection(cmd) => cmd.run(&cli.global).await,
        Commands::Environment(cmd) => cmd.run(&cli.global).await,
        Commands::Monitor(cmd) => cmd.run(&cli.global).await,
        Commands::Audit(cmd) => cmd.run(&cli.global).await,
        Commands::Validate(cmd) => cmd.run(&cli.global).await,
        Commands::Import(cmd) => cmd.run(&cli.global).await,
        Commands::Api(cmd) => cmd.run(&cli.global).await,
        Commands::Config(cmd) => cmd.run(&cli.global).await,
        Commands::Completion(cmd) => cmd.run(&cli.global).await,
        Commands::Version => {
            println!("pm version {}", postman_client::VERSION);
            Ok(())
        }
    }
}
