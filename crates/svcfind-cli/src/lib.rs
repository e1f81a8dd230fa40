//! # svcfind-cli
//!
//! Command line front end: argument and environment parsing, logging setup
//! and dispatch to the server or one of the inspection commands.

#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

#[cfg(test)]
use tokio_test as _;

// Used by the main.rs binary
use dotenvy as _;
use tokio as _;
use tracing_subscriber as _;

pub mod commands;
pub mod config;
pub mod error;
pub mod handlers;
pub mod parser;

pub use commands::Commands;
pub use error::CliError;
pub use parser::Cli;
