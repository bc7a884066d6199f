//! CLI module
//!
//! Command-line interface for querying the service.
//!
//! # Commands
//!
//! - `check` - Verify the host and API key
//! - `count` - Count items matching a query
//! - `fetch` - Stream matching items to stdout as JSON lines

mod commands;
mod runner;

pub use commands::{Cli, Commands, QueryArgs};
pub use runner::Runner;
