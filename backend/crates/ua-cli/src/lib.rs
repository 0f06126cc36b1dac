//! ua-cli library
//!
//! Exports the HTTP client for the remote user store and the command layer
//! that drives it through the form validators.

pub mod cli;
pub mod client;
pub mod commands;
pub mod logger;

#[cfg(test)]
mod tests;

pub use cli::Cli;
pub use client::{CliClientResult, Client, ClientError};
pub use commands::Commands;
