//! Resource types and the adapter trait
//!
//! Defines what the generic result iterator needs from each resource kind:
//! how to shape the requested-result portion of a payload, and how to read
//! a page back out of a response.

use crate::error::{Error, Result};
use crate::types::{JsonObject, JsonValue, SortBy, SortOrder};
use serde::Deserialize;
use std::collections::BTreeMap;

/// One page of server results, as returned under a resource's result key
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultPage {
    /// Items in server order
    #[serde(default)]
    pub results: Vec<JsonValue>,
    /// Total pages for this query at the requested page size
    #[serde(default)]
    pub pages: u64,
    /// Total matching items
    #[serde(default)]
    pub total_results: u64,
}

/// Which optional fields the server should populate on returned items
///
/// Rendered to `include<Item><Field>` wire parameters by the adapter.
/// An empty selector leaves the server defaults in place; `minimal()` is
/// what count-only requests use.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldSelector {
    flags: BTreeMap<String, bool>,
}

impl FieldSelector {
    /// Selector with no flags set (server defaults)
    pub fn new() -> Self {
        Self::default()
    }

    /// The cheapest legal selector, for requests that only need counts
    pub fn minimal() -> Self {
        let mut flags = BTreeMap::new();
        flags.insert("title".to_string(), false);
        flags.insert("basic_info".to_string(), false);
        Self { flags }
    }

    /// Ask the server to populate a field
    #[must_use]
    pub fn include(mut self, field: impl Into<String>) -> Self {
        self.flags.insert(field.into(), true);
        self
    }

    /// Ask the server to omit a field
    #[must_use]
    pub fn exclude(mut self, field: impl Into<String>) -> Self {
        self.flags.insert(field.into(), false);
        self
    }

    /// Iterate over (field, enabled) pairs in stable order
    pub fn flags(&self) -> impl Iterator<Item = (&str, bool)> {
        self.flags.iter().map(|(k, v)| (k.as_str(), *v))
    }

    /// Check if no flags are set
    pub fn is_empty(&self) -> bool {
        self.flags.is_empty()
    }
}

/// The page/sort/field-selection portion of a request, specific to one fetch
#[derive(Debug, Clone)]
pub struct PageRequest {
    /// 1-based page number
    pub page: u32,
    /// Items per page (validated against the resource ceiling)
    pub size: u32,
    /// Sort key
    pub sort_by: SortBy,
    /// Sort direction
    pub sort_order: SortOrder,
    /// Fields the server should populate
    pub fields: FieldSelector,
}

impl PageRequest {
    /// Create a page request with default sorting and fields
    pub fn new(page: u32, size: u32) -> Self {
        Self {
            page,
            size,
            sort_by: SortBy::default(),
            sort_order: SortOrder::default(),
            fields: FieldSelector::default(),
        }
    }

    /// Set the sort key
    #[must_use]
    pub fn sort_by(mut self, sort_by: SortBy) -> Self {
        self.sort_by = sort_by;
        self
    }

    /// Set the sort direction
    #[must_use]
    pub fn sort_order(mut self, order: SortOrder) -> Self {
        self.sort_order = order;
        self
    }

    /// Set the field selector
    #[must_use]
    pub fn fields(mut self, fields: FieldSelector) -> Self {
        self.fields = fields;
        self
    }
}

/// What the generic iterator needs from each resource kind
///
/// Implementations supply only constants; the descriptor and page-reading
/// logic lives here once, in the provided methods.
pub trait ResourceAdapter: Send + Sync {
    /// Endpoint path for paged requests, e.g. `/api/v1/article/getArticles`
    fn endpoint(&self) -> &'static str;

    /// Result key in the response and parameter prefix, e.g. `articles`
    fn result_key(&self) -> &'static str;

    /// Item name used in include-flag parameters, e.g. `Article`
    fn item_name(&self) -> &'static str;

    /// Fixed page size the iterator fetches with
    fn batch_size(&self) -> u32;

    /// Server-enforced page size ceiling
    fn max_page_size(&self) -> u32;

    /// Build the requested-result parameters for one fetch
    ///
    /// Rejects caller-fixable mistakes eagerly: pages are 1-based and the
    /// size must stay within the resource ceiling.
    fn descriptor(&self, request: &PageRequest) -> Result<JsonObject> {
        if request.page == 0 {
            return Err(Error::InvalidPage { page: request.page });
        }
        if request.size == 0 || request.size > self.max_page_size() {
            return Err(Error::InvalidPageSize {
                resource: self.result_key(),
                requested: request.size,
                max: self.max_page_size(),
            });
        }

        let key = self.result_key();
        let mut params = JsonObject::new();
        params.insert("resultType".to_string(), JsonValue::from(key));
        params.insert(format!("{key}Page"), JsonValue::from(request.page));
        params.insert(format!("{key}Count"), JsonValue::from(request.size));
        params.insert(
            format!("{key}SortBy"),
            JsonValue::from(request.sort_by.as_str()),
        );
        params.insert(
            format!("{key}SortByAsc"),
            JsonValue::from(request.sort_order.is_ascending()),
        );
        for (field, enabled) in request.fields.flags() {
            params.insert(
                format!("include{}{}", self.item_name(), camel(field)),
                JsonValue::from(enabled),
            );
        }
        Ok(params)
    }

    /// Read one page out of a raw response body
    fn read_page(&self, body: &JsonValue) -> Result<ResultPage> {
        let key = self.result_key();
        let inner = body
            .get(key)
            .ok_or(Error::MissingResultKey { key: self.result_key() })?;
        serde_json::from_value(inner.clone())
            .map_err(|e| Error::malformed_page(self.result_key(), e.to_string()))
    }

    /// The descriptor for a count-only request: page 1, smallest legal
    /// size, minimal fields
    fn count_descriptor(&self) -> JsonObject {
        let request = PageRequest::new(1, 1).fields(FieldSelector::minimal());
        self.descriptor(&request)
            .expect("count descriptor is always valid")
    }
}

/// Convert a snake_case field name to the service's CamelCase form
fn camel(field: &str) -> String {
    field
        .split('_')
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect()
}

#[cfg(test)]
mod camel_tests {
    use super::camel;

    #[test]
    fn test_camel() {
        assert_eq!(camel("body"), "Body");
        assert_eq!(camel("social_score"), "SocialScore");
        assert_eq!(camel("basic_info"), "BasicInfo");
    }
}
