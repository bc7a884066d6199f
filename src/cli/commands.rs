//! CLI commands and argument parsing

use crate::resource::ResourceKind;
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// EventWire command-line client
#[derive(Parser, Debug)]
#[command(name = "eventwire")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Client configuration file (YAML)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Service host (overrides the config file)
    #[arg(long, global = true)]
    pub host: Option<String>,

    /// API key (overrides the config file)
    #[arg(long, global = true, env = "EVENTWIRE_API_KEY")]
    pub api_key: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Verify the host and API key with one cheap request
    Check,

    /// Count the items matching a query
    Count {
        #[command(flatten)]
        query: QueryArgs,
    },

    /// Fetch matching items and print them as JSON lines
    Fetch {
        #[command(flatten)]
        query: QueryArgs,

        /// Stop after this many items
        #[arg(long)]
        max_items: Option<usize>,

        /// Sort key (date, rel, socialScore, sourceImportance)
        #[arg(long, default_value = "date")]
        sort_by: String,

        /// Sort ascending instead of descending
        #[arg(long)]
        ascending: bool,

        /// Fields the server should populate (repeatable), e.g. --include body
        #[arg(long = "include")]
        include: Vec<String>,
    },
}

/// Query filters shared by `count` and `fetch`
#[derive(Args, Debug)]
pub struct QueryArgs {
    /// Resource kind: articles, events or mentions
    #[arg(default_value = "articles")]
    pub resource: ResourceKind,

    /// Keyword filter (repeatable)
    #[arg(short, long)]
    pub keyword: Vec<String>,

    /// Concept URI filter (repeatable)
    #[arg(long)]
    pub concept: Vec<String>,

    /// Source URI filter (repeatable)
    #[arg(long)]
    pub source: Vec<String>,

    /// Category URI filter (repeatable)
    #[arg(long)]
    pub category: Vec<String>,

    /// Language filter, ISO 639-3 (repeatable)
    #[arg(long)]
    pub lang: Vec<String>,

    /// Earliest date to match (YYYY-MM-DD)
    #[arg(long)]
    pub date_start: Option<NaiveDate>,

    /// Latest date to match (YYYY-MM-DD)
    #[arg(long)]
    pub date_end: Option<NaiveDate>,
}
