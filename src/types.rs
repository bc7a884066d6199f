//! Common types used throughout the EventWire client
//!
//! This module contains shared type definitions, type aliases,
//! and utility types used across multiple modules.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// ============================================================================
// Type Aliases
// ============================================================================

/// JSON value type (re-exported from serde_json)
pub type JsonValue = serde_json::Value;

/// JSON object type
pub type JsonObject = serde_json::Map<String, JsonValue>;

/// Generic key-value map with string keys and values
pub type StringMap = HashMap<String, String>;

// ============================================================================
// Sorting
// ============================================================================

/// Server-side sort key for paged results
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortBy {
    /// Publication / occurrence date
    #[default]
    Date,
    /// Relevance to the query
    Rel,
    /// Social media engagement
    SocialScore,
    /// Importance of the reporting source
    SourceImportance,
    /// Any other sort key the service accepts
    #[serde(untagged)]
    Custom(String),
}

impl SortBy {
    /// Wire form of the sort key
    pub fn as_str(&self) -> &str {
        match self {
            SortBy::Date => "date",
            SortBy::Rel => "rel",
            SortBy::SocialScore => "socialScore",
            SortBy::SourceImportance => "sourceImportance",
            SortBy::Custom(key) => key,
        }
    }
}

/// Sort direction for paged results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    /// Newest / highest first
    #[default]
    Descending,
    /// Oldest / lowest first
    Ascending,
}

impl SortOrder {
    /// Whether this order is ascending (the service's boolean wire form)
    pub fn is_ascending(&self) -> bool {
        matches!(self, SortOrder::Ascending)
    }
}

// ============================================================================
// Backoff Type
// ============================================================================

/// Type of backoff for retries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BackoffType {
    /// Constant delay between retries
    Constant,
    /// Linear increase in delay
    Linear,
    /// Exponential increase in delay
    #[default]
    Exponential,
}

// ============================================================================
// Utilities
// ============================================================================

/// Extension trait for Option<String> to handle empty strings
pub trait OptionStringExt {
    /// Returns None if the string is empty
    fn none_if_empty(self) -> Option<String>;
}

impl OptionStringExt for Option<String> {
    fn none_if_empty(self) -> Option<String> {
        self.filter(|s| !s.is_empty())
    }
}

impl OptionStringExt for String {
    fn none_if_empty(self) -> Option<String> {
        if self.is_empty() {
            None
        } else {
            Some(self)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_by_wire_forms() {
        assert_eq!(SortBy::Date.as_str(), "date");
        assert_eq!(SortBy::Rel.as_str(), "rel");
        assert_eq!(SortBy::SocialScore.as_str(), "socialScore");
        assert_eq!(SortBy::SourceImportance.as_str(), "sourceImportance");
        assert_eq!(SortBy::Custom("fooBar".to_string()).as_str(), "fooBar");
    }

    #[test]
    fn test_sort_by_serde() {
        let key: SortBy = serde_json::from_str("\"socialScore\"").unwrap();
        assert_eq!(key, SortBy::SocialScore);

        let json = serde_json::to_string(&SortBy::Rel).unwrap();
        assert_eq!(json, "\"rel\"");
    }

    #[test]
    fn test_sort_order_default_descending() {
        assert_eq!(SortOrder::default(), SortOrder::Descending);
        assert!(!SortOrder::Descending.is_ascending());
        assert!(SortOrder::Ascending.is_ascending());
    }

    #[test]
    fn test_backoff_type_serde() {
        let backoff: BackoffType = serde_json::from_str("\"linear\"").unwrap();
        assert_eq!(backoff, BackoffType::Linear);
        assert_eq!(BackoffType::default(), BackoffType::Exponential);
    }

    #[test]
    fn test_option_string_none_if_empty() {
        assert_eq!(
            Some("test".to_string()).none_if_empty(),
            Some("test".to_string())
        );
        assert_eq!(Some(String::new()).none_if_empty(), None);
        assert_eq!(None::<String>.none_if_empty(), None);
        assert_eq!("test".to_string().none_if_empty(), Some("test".to_string()));
        assert_eq!(String::new().none_if_empty(), None);
    }
}
