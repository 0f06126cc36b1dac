//! ua - user store CLI
//!
//! Runs login and registration through the same form validation the web
//! client uses, then against the remote user store.
//!
//! # Examples
//!
//! ```bash
//! # Log in
//! ua --api-url http://127.0.0.1:3001 login --email a@x.com --password secret1
//!
//! # Register (blocked locally if the passwords differ)
//! ua register --name A --email a@x.com --password secret1 --confirm-password secret1 --pretty
//! ```

use ua_cli::{Cli, Client, logger};
use ua_config::{ConfigErrorResult, Config};
use ua_forms::Submission;

use std::process::ExitCode;

use clap::Parser;
use log::LevelFilter;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    if cli.verbose
        && let Err(e) = logger::initialize(LevelFilter::Debug, true)
    {
        eprintln!("Error initializing logger: {}", e);
    }

    let client = match build_client(cli.api_url.clone()) {
        Ok(client) => client,
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!();
            eprintln!("Set the user store URL:");
            eprintln!("  ua --api-url http://127.0.0.1:3001 <command>");
            eprintln!("  or UA_API_BASE_URL / [api] base_url in .ua/config.toml");
            return ExitCode::FAILURE;
        }
    };

    let submission = match cli.command.run(&client).await {
        Ok(submission) => submission,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    print_submission(&submission, cli.pretty)
}

/// Resolve the API config: explicit flag > env var > config file
fn build_client(api_url: Option<String>) -> ConfigErrorResult<Client> {
    let config = Config::load()?;
    let mut api = config.api;
    if api_url.is_some() {
        api.base_url = api_url;
    }
    api.validate()?;
    Client::from_config(&api)
}

fn print_submission(submission: &Submission, pretty: bool) -> ExitCode {
    let output = if pretty {
        serde_json::to_string_pretty(submission)
    } else {
        serde_json::to_string(submission)
    };

    match output {
        Ok(json) => {
            println!("{}", json);
            if submission.is_success() {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            }
        }
        Err(e) => {
            eprintln!("Error serializing response: {}", e);
            ExitCode::FAILURE
        }
    }
}
