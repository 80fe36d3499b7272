//! CLI subcommand implementations.

pub mod calc;
pub mod chat;
pub mod info;
pub mod now;
pub mod plan;
pub mod util;
