//! Common types used throughout streamgraph
//!
//! Shared enums and small utilities used across multiple modules.

use serde::{Deserialize, Serialize};
use std::fmt;

/// JSON value type (re-exported from serde_json)
pub type JsonValue = serde_json::Value;

/// JSON object type
pub type JsonObject = serde_json::Map<String, JsonValue>;

// ============================================================================
// Data Mode
// ============================================================================

/// Where the client is allowed to read protocol data from.
///
/// Indexed listing operations require the subgraph; in [`DataMode::LedgerOnly`]
/// every listing operation fails with `UnsupportedMode` before validation or
/// any network call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DataMode {
    /// Subgraph only
    Indexed,
    /// Subgraph plus direct ledger reads
    #[default]
    Hybrid,
    /// Direct ledger reads only, no indexed queries
    LedgerOnly,
}

impl DataMode {
    /// Whether indexed (subgraph) queries are available in this mode
    pub fn supports_indexed_queries(self) -> bool {
        !matches!(self, DataMode::LedgerOnly)
    }
}

impl fmt::Display for DataMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DataMode::Indexed => "indexed",
            DataMode::Hybrid => "hybrid",
            DataMode::LedgerOnly => "ledger-only",
        };
        f.write_str(name)
    }
}

// ============================================================================
// Ordering
// ============================================================================

/// Sort direction for a listing request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderDirection {
    /// Ascending
    Asc,
    /// Descending
    #[default]
    Desc,
}

/// Ordering requested of a listing operation.
///
/// Last-id paging is only safe when the combination of `order_by` and
/// `direction` yields a strictly monotonic, collision-free ordering of entity
/// ids; see [`crate::pagination::Paging`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ordering {
    /// Field name the remote service sorts by
    pub order_by: String,
    /// Sort direction
    pub direction: OrderDirection,
}

impl Ordering {
    /// Order ascending by the given field
    pub fn asc(order_by: impl Into<String>) -> Self {
        Self {
            order_by: order_by.into(),
            direction: OrderDirection::Asc,
        }
    }

    /// Order descending by the given field
    pub fn desc(order_by: impl Into<String>) -> Self {
        Self {
            order_by: order_by.into(),
            direction: OrderDirection::Desc,
        }
    }
}

// ============================================================================
// Utilities
// ============================================================================

/// Lowercase an address-like filter value.
///
/// The subgraph stores addresses lowercased; filters must match.
pub fn lowercase_address(value: &str) -> String {
    value.to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_mode_serde() {
        let mode: DataMode = serde_json::from_str("\"ledger_only\"").unwrap();
        assert_eq!(mode, DataMode::LedgerOnly);

        let json = serde_json::to_string(&DataMode::Hybrid).unwrap();
        assert_eq!(json, "\"hybrid\"");
    }

    #[test]
    fn test_data_mode_gate() {
        assert!(DataMode::Indexed.supports_indexed_queries());
        assert!(DataMode::Hybrid.supports_indexed_queries());
        assert!(!DataMode::LedgerOnly.supports_indexed_queries());
    }

    #[test]
    fn test_order_direction_serde() {
        let json = serde_json::to_string(&OrderDirection::Asc).unwrap();
        assert_eq!(json, "\"asc\"");
        let json = serde_json::to_string(&OrderDirection::Desc).unwrap();
        assert_eq!(json, "\"desc\"");
    }

    #[test]
    fn test_ordering_constructors() {
        let ordering = Ordering::asc("timestamp");
        assert_eq!(ordering.order_by, "timestamp");
        assert_eq!(ordering.direction, OrderDirection::Asc);

        let ordering = Ordering::desc("createdAtBlockNumber");
        assert_eq!(ordering.direction, OrderDirection::Desc);
    }

    #[test]
    fn test_lowercase_address() {
        assert_eq!(
            lowercase_address("0xABCDEF0123456789abcdef0123456789ABCDEF01"),
            "0xabcdef0123456789abcdef0123456789abcdef01"
        );
    }
}
