//! Query documents
//!
//! A [`Query`] is the filter/criteria half of a request: what to match,
//! independent of pagination. The requested-result half (page, size, sort,
//! fields) is merged in freshly for every fetch by
//! [`Query::request_payload`], so no query object is ever mutated between
//! page requests.

use crate::resource::ResourceKind;
use crate::types::{JsonObject, JsonValue};
use chrono::NaiveDate;

/// Filter criteria for one resource kind
///
/// Cheap to clone; owned by the caller. Repeated calls to a filter method
/// accumulate: two `keyword` calls match either keyword, following the
/// service's scalar-or-array parameter convention.
#[derive(Debug, Clone, Default)]
pub struct Query {
    kind: ResourceKind,
    params: JsonObject,
}

impl Query {
    /// Create an empty query for a resource kind
    pub fn new(kind: ResourceKind) -> Self {
        Self {
            kind,
            params: JsonObject::new(),
        }
    }

    /// Query over news articles
    pub fn articles() -> Self {
        Self::new(ResourceKind::Articles)
    }

    /// Query over clustered events
    pub fn events() -> Self {
        Self::new(ResourceKind::Events)
    }

    /// Query over event mentions
    pub fn mentions() -> Self {
        Self::new(ResourceKind::Mentions)
    }

    /// The resource kind this query targets
    pub fn kind(&self) -> ResourceKind {
        self.kind
    }

    // ========================================================================
    // Filters
    // ========================================================================

    /// Match items containing a keyword
    #[must_use]
    pub fn keyword(mut self, keyword: impl Into<String>) -> Self {
        append(&mut self.params, "keyword", keyword.into());
        self
    }

    /// Match items annotated with a concept URI
    #[must_use]
    pub fn concept(mut self, uri: impl Into<String>) -> Self {
        append(&mut self.params, "conceptUri", uri.into());
        self
    }

    /// Match items published by a source URI
    #[must_use]
    pub fn source(mut self, uri: impl Into<String>) -> Self {
        append(&mut self.params, "sourceUri", uri.into());
        self
    }

    /// Match items in a category URI
    #[must_use]
    pub fn category(mut self, uri: impl Into<String>) -> Self {
        append(&mut self.params, "categoryUri", uri.into());
        self
    }

    /// Match items written in a language (ISO 639-3 code)
    #[must_use]
    pub fn lang(mut self, lang: impl Into<String>) -> Self {
        append(&mut self.params, "lang", lang.into());
        self
    }

    /// Match items dated on or after a date
    #[must_use]
    pub fn date_start(mut self, date: NaiveDate) -> Self {
        self.params.insert(
            "dateStart".to_string(),
            JsonValue::from(date.format("%Y-%m-%d").to_string()),
        );
        self
    }

    /// Match items dated on or before a date
    #[must_use]
    pub fn date_end(mut self, date: NaiveDate) -> Self {
        self.params.insert(
            "dateEnd".to_string(),
            JsonValue::from(date.format("%Y-%m-%d").to_string()),
        );
        self
    }

    /// Set a raw filter parameter the typed methods don't cover
    ///
    /// Replaces any existing value for the key.
    #[must_use]
    pub fn param(mut self, key: impl Into<String>, value: impl Into<JsonValue>) -> Self {
        self.params.insert(key.into(), value.into());
        self
    }

    /// The accumulated filter parameters
    pub fn params(&self) -> &JsonObject {
        &self.params
    }

    // ========================================================================
    // Payload assembly
    // ========================================================================

    /// Combine the filters with a freshly built requested-result descriptor
    /// into a new request payload
    ///
    /// Each fetch gets its own snapshot; the query itself is never mutated,
    /// so two iterators can share one query without aliasing each other's
    /// page state.
    pub fn request_payload(&self, descriptor: JsonObject) -> JsonObject {
        let mut payload = self.params.clone();
        payload.extend(descriptor);
        payload
    }
}

/// Insert a value under a key, promoting an existing scalar to an array
fn append(params: &mut JsonObject, key: &str, value: String) {
    let value = JsonValue::from(value);
    match params.entry(key.to_string()) {
        serde_json::map::Entry::Vacant(slot) => {
            slot.insert(value);
        }
        serde_json::map::Entry::Occupied(mut slot) => match slot.get_mut() {
            JsonValue::Array(list) => list.push(value),
            existing => {
                let previous = existing.take();
                *existing = JsonValue::Array(vec![previous, value]);
            }
        },
    }
}
