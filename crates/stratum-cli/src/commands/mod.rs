//! Command handlers, one module per subcommand.

pub mod completions;
pub mod config;
pub mod graph;
pub mod init;
pub mod new;
