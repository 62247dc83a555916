//! Error types for catalog construction and traversal.
//!
//! Lookups never fail: an unknown id is an absent value. Errors are reserved
//! for data-integrity faults (duplicate ids, cyclic workflow chains) and for
//! failures while reading a catalog from disk.

use thiserror::Error;

// ============================================================================
// Error Types
// ============================================================================

/// Custom error type for catalog operations.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Two entities of the same kind share an id.
    #[error("Duplicate {entity} id '{id}'")]
    DuplicateId {
        /// The kind of entity ("category" or "exhibit").
        entity: &'static str,
        /// The repeated identifier.
        id: String,
    },

    /// A workflow walk came back to an exhibit it had already visited.
    #[error("Workflow of category '{category}' loops back to exhibit '{exhibit}'")]
    CycleDetected {
        /// The category whose chain was walked.
        category: String,
        /// The exhibit that was reached a second time.
        exhibit: String,
        /// Ids visited before the loop closed, in walk order.
        path: Vec<String>,
    },

    /// Catalog JSON could not be parsed.
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Catalog file could not be read.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl CatalogError {
    /// Create a new duplicate id error.
    #[must_use]
    pub fn duplicate(entity: &'static str, id: impl Into<String>) -> Self {
        Self::DuplicateId {
            entity,
            id: id.into(),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_error_display() {
        let duplicate = CatalogError::duplicate("exhibit", "foo-bar");
        assert_eq!(duplicate.to_string(), "Duplicate exhibit id 'foo-bar'");

        let cycle = CatalogError::CycleDetected {
            category: "loops".to_string(),
            exhibit: "a".to_string(),
            path: vec!["a".to_string(), "b".to_string()],
        };
        assert_eq!(
            cycle.to_string(),
            "Workflow of category 'loops' loops back to exhibit 'a'"
        );
    }
}
