use crate::commands::Commands;

use clap::Parser;

#[derive(Parser)]
#[command(name = "ua")]
#[command(about = "Log in to or register with the remote user store")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// User store URL (overrides api.base_url / UA_API_BASE_URL)
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,

    /// Log diagnostics to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,
}
