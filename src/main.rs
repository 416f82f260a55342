//! domain-companion CLI
//!
//! Usage: domain-companion [--json] [-v...] [--settings FILE] <COMMAND>
//!
//! Commands:
//!   compile  Compile the domain map and write the plan
//!   check    Validate the domain map and summarize it
//!   diff     Compare a fresh compile with a written plan
//!   route    Evaluate the compiled tables for a host or recipient

mod cli;
mod commands;
mod logging;
mod output;

use anyhow::Result;
use clap::Parser;

use cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let json = cli.json;
    let result = run(cli);

    if json {
        if let Err(err) = &result {
            if let Err(write_err) = output::emit_event(&output::ErrorEvent::from_error(err)) {
                tracing::error!(error = %write_err, "failed to write error event");
            }
            std::process::exit(1);
        }
    }
    result
}

fn run(cli: Cli) -> Result<()> {
    let settings = cli.settings.as_deref();
    match cli.command {
        Commands::Compile { source, output } => {
            commands::cmd_compile(&source, output.as_deref(), settings, cli.json)
        }
        Commands::Check { source } => commands::cmd_check(&source, settings, cli.json),
        Commands::Diff { source, plan } => commands::cmd_diff(&source, &plan, settings, cli.json),
        Commands::Route {
            source,
            host,
            path,
            recipient,
        } => commands::cmd_route(
            &source,
            host.as_deref(),
            &path,
            recipient.as_deref(),
            settings,
            cli.json,
        ),
    }
}
