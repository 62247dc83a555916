//! Traversal strategy: how previous/next exhibits are resolved.
//!
//! A catalog carries exactly one [`TraversalStrategy`], fixed when the
//! catalog is built. The user-facing [`TraversalSetting`] may ask for
//! automatic detection, which inspects the data once at build time.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{Category, Exhibit};

// ============================================================================
// Traversal Setting
// ============================================================================

/// Requested traversal policy, as written in config or on the command line.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum TraversalSetting {
    /// Use workflow order when the data carries workflow links.
    #[default]
    Auto,
    /// Follow `firstExhibitId` / `next` chains.
    Workflow,
    /// Use declaration order within each category.
    Catalog,
}

impl TraversalSetting {
    /// Resolves this setting against catalog data.
    ///
    /// `Auto` becomes [`TraversalStrategy::Workflow`] when any category has
    /// an entry point or any exhibit has a `next` link, and
    /// [`TraversalStrategy::CatalogOrder`] otherwise.
    #[must_use]
    pub fn resolve(self, categories: &[Category], exhibits: &[Exhibit]) -> TraversalStrategy {
        match self {
            Self::Workflow => TraversalStrategy::Workflow,
            Self::Catalog => TraversalStrategy::CatalogOrder,
            Self::Auto => {
                let has_links = categories.iter().any(|c| c.first_exhibit_id.is_some())
                    || exhibits.iter().any(|e| e.next.is_some());
                if has_links {
                    TraversalStrategy::Workflow
                } else {
                    TraversalStrategy::CatalogOrder
                }
            }
        }
    }
}

impl fmt::Display for TraversalSetting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Auto => write!(f, "auto"),
            Self::Workflow => write!(f, "workflow"),
            Self::Catalog => write!(f, "catalog"),
        }
    }
}

// ============================================================================
// Traversal Strategy
// ============================================================================

/// Adjacency policy in effect for a built catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraversalStrategy {
    /// Neighbours along the category's workflow path.
    Workflow,
    /// Neighbours in catalog declaration order.
    CatalogOrder,
}

impl TraversalStrategy {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Workflow => "workflow",
            Self::CatalogOrder => "catalog order",
        }
    }
}

impl fmt::Display for TraversalStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ============================================================================
// Adjacency
// ============================================================================

/// The exhibits on either side of another exhibit.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Adjacent<'a> {
    pub previous: Option<&'a Exhibit>,
    pub next: Option<&'a Exhibit>,
}

impl<'a> Adjacent<'a> {
    /// Finds the neighbours of `exhibit_id` within `sequence`.
    ///
    /// An id that does not occur in `sequence` has no neighbours.
    #[must_use]
    pub fn within(sequence: &[&'a Exhibit], exhibit_id: &str) -> Self {
        let Some(index) = sequence.iter().position(|e| e.id == exhibit_id) else {
            return Self::default();
        };

        Self {
            previous: index.checked_sub(1).map(|i| sequence[i]),
            next: sequence.get(index + 1).copied(),
        }
    }

    /// Returns `true` if neither neighbour exists.
    #[must_use]
    pub const fn is_isolated(&self) -> bool {
        self.previous.is_none() && self.next.is_none()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Position;
    use rstest::rstest;

    fn linked_category() -> Category {
        Category::new("c", "C", "", Position::default()).with_first_exhibit("a")
    }

    fn plain_category() -> Category {
        Category::new("c", "C", "", Position::default())
    }

    #[rstest]
    #[case::auto_with_entry_point(TraversalSetting::Auto, linked_category(), None, TraversalStrategy::Workflow)]
    #[case::auto_with_next_only(TraversalSetting::Auto, plain_category(), Some("b"), TraversalStrategy::Workflow)]
    #[case::auto_without_links(TraversalSetting::Auto, plain_category(), None, TraversalStrategy::CatalogOrder)]
    #[case::forced_workflow(TraversalSetting::Workflow, plain_category(), None, TraversalStrategy::Workflow)]
    #[case::forced_catalog(TraversalSetting::Catalog, linked_category(), Some("b"), TraversalStrategy::CatalogOrder)]
    fn test_setting_resolution(
        #[case] setting: TraversalSetting,
        #[case] category: Category,
        #[case] next: Option<&str>,
        #[case] expected: TraversalStrategy,
    ) {
        let mut exhibit = Exhibit::new("a", "A", "c");
        exhibit.next = next.map(str::to_string);

        assert_eq!(setting.resolve(&[category], &[exhibit]), expected);
    }

    #[test]
    fn test_adjacent_within_sequence() {
        let a = Exhibit::new("a", "A", "c");
        let b = Exhibit::new("b", "B", "c");
        let c = Exhibit::new("c", "C", "c");
        let sequence = [&a, &b, &c];

        let middle = Adjacent::within(&sequence, "b");
        assert_eq!(middle.previous.map(|e| e.id.as_str()), Some("a"));
        assert_eq!(middle.next.map(|e| e.id.as_str()), Some("c"));

        let first = Adjacent::within(&sequence, "a");
        assert!(first.previous.is_none());
        assert_eq!(first.next.map(|e| e.id.as_str()), Some("b"));

        let last = Adjacent::within(&sequence, "c");
        assert_eq!(last.previous.map(|e| e.id.as_str()), Some("b"));
        assert!(last.next.is_none());

        assert!(Adjacent::within(&sequence, "missing").is_isolated());
    }

    #[test]
    fn test_setting_serde_names() {
        let setting: TraversalSetting = serde_json::from_str("\"catalog\"").unwrap();
        assert_eq!(setting, TraversalSetting::Catalog);
        assert_eq!(TraversalSetting::Workflow.to_string(), "workflow");
    }
}
