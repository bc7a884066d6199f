//! Per-resource adapter implementations
//!
//! Each adapter supplies the constants for one resource kind; all request
//! shaping and response reading is shared in the trait's provided methods.
//!
//! Batch sizes are fixed per resource and match the server ceilings, so an
//! unbounded scan spends the fewest possible requests per token.

use super::types::ResourceAdapter;

// ============================================================================
// Articles
// ============================================================================

/// News articles matching a query
#[derive(Debug, Clone, Copy, Default)]
pub struct Articles;

impl ResourceAdapter for Articles {
    fn endpoint(&self) -> &'static str {
        "/api/v1/article/getArticles"
    }

    fn result_key(&self) -> &'static str {
        "articles"
    }

    fn item_name(&self) -> &'static str {
        "Article"
    }

    fn batch_size(&self) -> u32 {
        100
    }

    fn max_page_size(&self) -> u32 {
        100
    }
}

// ============================================================================
// Events
// ============================================================================

/// Clustered events matching a query
#[derive(Debug, Clone, Copy, Default)]
pub struct Events;

impl ResourceAdapter for Events {
    fn endpoint(&self) -> &'static str {
        "/api/v1/event/getEvents"
    }

    fn result_key(&self) -> &'static str {
        "events"
    }

    fn item_name(&self) -> &'static str {
        "Event"
    }

    fn batch_size(&self) -> u32 {
        50
    }

    fn max_page_size(&self) -> u32 {
        50
    }
}

// ============================================================================
// Mentions
// ============================================================================

/// Individual event mentions matching a query
#[derive(Debug, Clone, Copy, Default)]
pub struct Mentions;

impl ResourceAdapter for Mentions {
    fn endpoint(&self) -> &'static str {
        "/api/v1/mention/getMentions"
    }

    fn result_key(&self) -> &'static str {
        "mentions"
    }

    fn item_name(&self) -> &'static str {
        "Mention"
    }

    fn batch_size(&self) -> u32 {
        100
    }

    fn max_page_size(&self) -> u32 {
        100
    }
}
