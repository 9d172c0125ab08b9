//! `shoreline` — admin CLI for the lifeguard operations portal.

mod cli;
mod commands;
mod config;
mod error;
mod output;

use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, Command, GlobalOpts};
use crate::error::CliError;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_tracing(&cli.global);

    if let Err(err) = run(cli).await {
        let code = err.exit_code();
        eprintln!("{:?}", miette::Report::new(err));
        std::process::exit(code);
    }
}

/// Tracing goes to stderr so stdout stays parseable. `-q` clamps to
/// errors regardless of `-v`.
fn init_tracing(global: &GlobalOpts) {
    let level = if global.quiet {
        "error"
    } else {
        match global.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

async fn run(cli: Cli) -> Result<(), CliError> {
    let Cli { global, command } = cli;

    match command {
        // Runs entirely locally, no portal needed.
        Command::Config(args) => commands::config_cmd::handle(args, &global),

        Command::Completions(args) => {
            let mut tree = Cli::command();
            clap_complete::generate(args.shell, &mut tree, "shoreline", &mut std::io::stdout());
            Ok(())
        }

        // Everything else talks to the portal.
        portal_command => {
            let client = config::build_client(&global)?;
            tracing::debug!(portal = %client.base_url(), "portal client ready");
            commands::dispatch(portal_command, &client, &global).await
        }
    }
}
