//! Resource adapters
//!
//! One adapter per remotely paginated resource kind (articles, events,
//! mentions). The generic iterator is written once against the
//! [`ResourceAdapter`] trait; each kind supplies only its endpoint, result
//! key, and page-size constants.

mod adapters;
mod types;

pub use adapters::{Articles, Events, Mentions};
pub use types::{FieldSelector, PageRequest, ResourceAdapter, ResultPage};

use std::fmt;
use std::str::FromStr;

/// The category of entity being paginated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResourceKind {
    /// News articles
    #[default]
    Articles,
    /// Clustered events
    Events,
    /// Individual event mentions
    Mentions,
}

impl ResourceKind {
    /// The adapter for this resource kind
    pub fn adapter(&self) -> &'static dyn ResourceAdapter {
        match self {
            ResourceKind::Articles => &Articles,
            ResourceKind::Events => &Events,
            ResourceKind::Mentions => &Mentions,
        }
    }

    /// Stable name, matching the response result key
    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceKind::Articles => "articles",
            ResourceKind::Events => "events",
            ResourceKind::Mentions => "mentions",
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ResourceKind {
    type Err = crate::error::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "articles" | "article" => Ok(ResourceKind::Articles),
            "events" | "event" => Ok(ResourceKind::Events),
            "mentions" | "mention" => Ok(ResourceKind::Mentions),
            other => Err(crate::error::Error::config(format!(
                "unknown resource kind '{other}' (expected articles, events or mentions)"
            ))),
        }
    }
}
