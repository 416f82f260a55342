use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// domain-companion - compile a domain map into edge and mail routing tables
#[derive(Parser, Debug)]
#[command(name = "domain-companion")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output NDJSON events for CI
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Compiler settings file (defaults to companion.toml next to the domain map)
    #[arg(long, global = true)]
    pub settings: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compile the domain map and write the plan
    Compile {
        /// Path to the domain map (JSON or YAML)
        #[arg(short, long, default_value = "domain-map.json")]
        source: PathBuf,

        /// Write the plan here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Validate the domain map and summarize what it compiles to
    Check {
        /// Path to the domain map (JSON or YAML)
        #[arg(short, long, default_value = "domain-map.json")]
        source: PathBuf,
    },

    /// Compare a fresh compile with a previously written plan
    Diff {
        /// Path to the domain map (JSON or YAML)
        #[arg(short, long, default_value = "domain-map.json")]
        source: PathBuf,

        /// Previously written plan
        #[arg(short, long)]
        plan: PathBuf,
    },

    /// Evaluate the compiled tables for one host or recipient
    Route {
        /// Path to the domain map (JSON or YAML)
        #[arg(short, long, default_value = "domain-map.json")]
        source: PathBuf,

        /// Request host to resolve at the edge
        #[arg(long, conflicts_with = "recipient", required_unless_present = "recipient")]
        host: Option<String>,

        /// Request path (with --host)
        #[arg(long, default_value = "/", requires = "host")]
        path: String,

        /// Recipient address or `To` header to route
        #[arg(long)]
        recipient: Option<String>,
    },
}
