//! Sleep calculator CLI library.
//!
//! This crate adapts the `sc-core` time engine to the terminal: argument
//! parsing, configuration, rendering and the interactive session.

mod cli;
pub mod commands;
mod config;
pub mod session;

pub use cli::{Cli, Commands};
pub use config::Config;
