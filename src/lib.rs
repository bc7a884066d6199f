//! # EventWire client
//!
//! A Rust client for the EventWire news and event analytics API: build a
//! query, then pull matching articles, events or mentions one item at a
//! time while the client pages through the remote result set for you.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use eventwire::{ApiClient, Query, Result};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let client = ApiClient::new("https://eventwire.example.com", "my-key")?;
//!
//!     // How many articles match?
//!     let query = Query::articles().keyword("fusion").lang("eng");
//!     println!("{} matching articles", client.count(&query).await?);
//!
//!     // Pull the first 500, newest first
//!     let mut articles = client.iter(query).max_items(500);
//!     while let Some(article) = articles.next().await {
//!         println!("{}", article["title"]);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        ApiClient                            │
//! │  count(query) → u64    fetch_page(query, page) → ResultPage │
//! │  iter(query) → ResultIter                                   │
//! └─────────────────────────────────────────────────────────────┘
//!                │
//! ┌──────────────┼──────────────┬────────────────┬─────────────┐
//! │    Query     │   ResultIter │    Resource    │    HTTP     │
//! ├──────────────┼──────────────┼────────────────┼─────────────┤
//! │ Keywords     │ Page buffer  │ Articles (100) │ POST JSON   │
//! │ Concepts     │ Item cap     │ Events (50)    │ Retry       │
//! │ Sources      │ Lazy fetch   │ Mentions (100) │ Rate limit  │
//! │ Date range   │ Fail-soft    │ Descriptors    │ Backoff     │
//! └──────────────┴──────────────┴────────────────┴─────────────┘
//! ```
//!
//! Items are yielded in exactly the order the server returns them; pages
//! are fetched in increasing page order at a fixed per-resource batch
//! size. A mid-scan failure truncates the sequence instead of raising,
//! and stays inspectable on the iterator.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types for the client
pub mod error;

/// Common types and type aliases
pub mod types;

/// HTTP transport with retry and rate limiting
pub mod http;

/// Resource adapters (articles, events, mentions)
pub mod resource;

/// Query documents
pub mod query;

/// Service client and the transport seam
pub mod client;

/// Lazy result iterator
pub mod iter;

/// Client configuration
pub mod config;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use client::{ApiClient, Transport};
pub use config::ClientConfig;
pub use error::{Error, Result};
pub use iter::ResultIter;
pub use query::Query;
pub use resource::{FieldSelector, PageRequest, ResourceKind, ResultPage};
pub use types::{SortBy, SortOrder};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
