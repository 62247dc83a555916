//! The content graph: an immutable catalog of categories and exhibits.
//!
//! A [`Catalog`] is built once, validated for duplicate ids, and then only
//! read. Every query is a pure read. Unknown ids produce `None` or an empty
//! sequence; the only fault a query can raise is a cyclic workflow chain.
//!
//! # Example
//!
//! ```ignore
//! use crate::domain::{Catalog, TraversalSetting};
//!
//! let catalog = Catalog::from_json_file("museum.json", TraversalSetting::Auto)?;
//! for exhibit in catalog.workflow_path("creative-algorithms")? {
//!     println!("{}", exhibit.title);
//! }
//! ```

use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{Adjacent, CatalogError, Category, Exhibit, TraversalSetting, TraversalStrategy};

// ============================================================================
// Catalog Document
// ============================================================================

/// On-disk shape of a catalog.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogDocument {
    #[serde(default)]
    pub categories: Vec<Category>,
    #[serde(default)]
    pub exhibits: Vec<Exhibit>,
}

// ============================================================================
// Workflow Walk
// ============================================================================

/// Why a workflow walk stopped before running out of `next` links.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WalkFault {
    /// A link pointed at an id that does not exist.
    Dangling {
        /// Exhibit holding the link, or `None` for the category entry point.
        from: Option<String>,
        /// The id that failed to resolve.
        missing: String,
    },
    /// A link pointed back at an exhibit already on the path.
    Cycle {
        /// Exhibit holding the link.
        from: String,
        /// The revisited exhibit.
        revisited: String,
    },
}

/// Outcome of following a category's workflow chain.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkflowWalk<'a> {
    /// Resolved exhibits, first to last, without repeats.
    pub path: Vec<&'a Exhibit>,
    /// Set when the walk stopped on malformed data.
    pub fault: Option<WalkFault>,
}

// ============================================================================
// Catalog
// ============================================================================

/// Read-only registry of categories and exhibits.
#[derive(Debug, Clone)]
pub struct Catalog {
    categories: Vec<Category>,
    exhibits: Vec<Exhibit>,
    category_index: HashMap<String, usize>,
    exhibit_index: HashMap<String, usize>,
    strategy: TraversalStrategy,
    /// Exhibit indexes in traversal order, per category id.
    routes: HashMap<String, Vec<usize>>,
}

impl Catalog {
    /// Builds a catalog, resolving `setting` into the traversal strategy.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::DuplicateId`] if two categories or two
    /// exhibits share an id.
    pub fn new(
        categories: Vec<Category>,
        exhibits: Vec<Exhibit>,
        setting: TraversalSetting,
    ) -> Result<Self, CatalogError> {
        let category_index = index_ids("category", categories.iter().map(|c| c.id.as_str()))?;
        let exhibit_index = index_ids("exhibit", exhibits.iter().map(|e| e.id.as_str()))?;
        let strategy = setting.resolve(&categories, &exhibits);

        tracing::debug!(
            categories = categories.len(),
            exhibits = exhibits.len(),
            %strategy,
            "catalog built"
        );

        let mut catalog = Self {
            categories,
            exhibits,
            category_index,
            exhibit_index,
            strategy,
            routes: HashMap::new(),
        };
        catalog.routes = catalog.build_routes();
        Ok(catalog)
    }

    /// Resolves the traversal order of every category, including ids only
    /// exhibits mention. Malformed chains are logged here, once.
    fn build_routes(&self) -> HashMap<String, Vec<usize>> {
        let category_ids = self
            .categories
            .iter()
            .map(|c| c.id.as_str())
            .chain(self.exhibits.iter().map(|e| e.category.as_str()));

        let mut routes = HashMap::new();
        for category_id in category_ids {
            if routes.contains_key(category_id) {
                continue;
            }
            let sequence = match self.strategy {
                TraversalStrategy::Workflow => self.workflow_path_truncated(category_id),
                TraversalStrategy::CatalogOrder => self.exhibits_in_category(category_id),
            };
            let indexes = sequence
                .iter()
                .filter_map(|e| self.exhibit_index.get(&e.id).copied())
                .collect();
            routes.insert(category_id.to_string(), indexes);
        }
        routes
    }

    /// Builds a catalog from a parsed document.
    ///
    /// # Errors
    ///
    /// See [`Catalog::new`].
    pub fn from_document(
        document: CatalogDocument,
        setting: TraversalSetting,
    ) -> Result<Self, CatalogError> {
        Self::new(document.categories, document.exhibits, setting)
    }

    /// Parses and builds a catalog from JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Parse`] for malformed JSON, or any error from
    /// [`Catalog::new`].
    pub fn from_json_str(json: &str, setting: TraversalSetting) -> Result<Self, CatalogError> {
        let document: CatalogDocument = serde_json::from_str(json)?;
        Self::from_document(document, setting)
    }

    /// Reads, parses and builds a catalog from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Io`] if the file cannot be read, or any error
    /// from [`Catalog::from_json_str`].
    pub fn from_json_file(
        path: impl AsRef<Path>,
        setting: TraversalSetting,
    ) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        tracing::info!(path = %path.display(), "loading catalog");
        let content = fs::read_to_string(path)?;
        Self::from_json_str(&content, setting)
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// All categories in declaration order.
    #[must_use]
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// All exhibits in declaration order.
    #[must_use]
    pub fn exhibits(&self) -> &[Exhibit] {
        &self.exhibits
    }

    /// The traversal strategy fixed at build time.
    #[must_use]
    pub const fn strategy(&self) -> TraversalStrategy {
        self.strategy
    }

    // ========================================================================
    // Queries
    // ========================================================================

    #[must_use]
    pub fn exhibit_by_id(&self, id: &str) -> Option<&Exhibit> {
        self.exhibit_index.get(id).map(|&i| &self.exhibits[i])
    }

    #[must_use]
    pub fn category_by_id(&self, id: &str) -> Option<&Category> {
        self.category_index.get(id).map(|&i| &self.categories[i])
    }

    /// Every exhibit of `category_id`, in declaration order.
    #[must_use]
    pub fn exhibits_in_category(&self, category_id: &str) -> Vec<&Exhibit> {
        self.exhibits
            .iter()
            .filter(|e| e.category == category_id)
            .collect()
    }

    /// The exhibit directly linked from `exhibit_id`, if the link resolves.
    #[must_use]
    pub fn next_exhibit(&self, exhibit_id: &str) -> Option<&Exhibit> {
        let next = self.exhibit_by_id(exhibit_id)?.next.as_deref()?;
        self.exhibit_by_id(next)
    }

    /// Follows the workflow chain of `category_id` and reports how it ended.
    ///
    /// The walk starts at the category's entry point and follows `next`
    /// links. It stops when an exhibit has no link, when a link does not
    /// resolve, or when a link revisits an exhibit already on the path. Link
    /// targets are not checked for category membership.
    #[must_use]
    pub fn walk_workflow(&self, category_id: &str) -> WorkflowWalk<'_> {
        let mut path = Vec::new();
        let Some(first) = self
            .category_by_id(category_id)
            .and_then(|c| c.first_exhibit_id.as_deref())
        else {
            return WorkflowWalk { path, fault: None };
        };

        let mut visited: HashSet<&str> = HashSet::with_capacity(self.exhibits.len());
        let mut from: Option<&str> = None;
        let mut current = Some(first);

        while let Some(id) = current {
            let Some(exhibit) = self.exhibit_by_id(id) else {
                let fault = WalkFault::Dangling {
                    from: from.map(str::to_string),
                    missing: id.to_string(),
                };
                return WorkflowWalk {
                    path,
                    fault: Some(fault),
                };
            };

            if !visited.insert(exhibit.id.as_str()) {
                let fault = WalkFault::Cycle {
                    from: from.unwrap_or_default().to_string(),
                    revisited: exhibit.id.clone(),
                };
                return WorkflowWalk {
                    path,
                    fault: Some(fault),
                };
            }

            path.push(exhibit);
            from = Some(exhibit.id.as_str());
            current = exhibit.next.as_deref();
        }

        WorkflowWalk { path, fault: None }
    }

    /// The ordered workflow chain of `category_id`.
    ///
    /// Unknown categories and categories without an entry point yield an
    /// empty path. A link that does not resolve truncates the path at the
    /// last resolved exhibit.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::CycleDetected`] if the chain loops.
    pub fn workflow_path(&self, category_id: &str) -> Result<Vec<&Exhibit>, CatalogError> {
        let walk = self.walk_workflow(category_id);
        match walk.fault {
            Some(WalkFault::Cycle { revisited, .. }) => Err(CatalogError::CycleDetected {
                category: category_id.to_string(),
                exhibit: revisited,
                path: walk.path.iter().map(|e| e.id.clone()).collect(),
            }),
            Some(WalkFault::Dangling { from, missing }) => {
                tracing::warn!(
                    category = category_id,
                    from = from.as_deref().unwrap_or("<entry point>"),
                    missing = %missing,
                    "workflow link does not resolve, truncating path"
                );
                Ok(walk.path)
            }
            None => Ok(walk.path),
        }
    }

    /// Like [`Catalog::workflow_path`], but a cycle is logged and the
    /// acyclic prefix returned instead.
    #[must_use]
    pub fn workflow_path_truncated(&self, category_id: &str) -> Vec<&Exhibit> {
        match self.workflow_path(category_id) {
            Ok(path) => path,
            Err(err) => {
                tracing::warn!(error = %err, "workflow cycle, truncating path");
                self.walk_workflow(category_id).path
            }
        }
    }

    /// The exhibits before and after `exhibit_id` within its category.
    ///
    /// Under [`TraversalStrategy::Workflow`] the neighbours come from the
    /// category's workflow path; an exhibit that is not on that path has
    /// none. Under [`TraversalStrategy::CatalogOrder`] they come from
    /// [`Catalog::exhibits_in_category`].
    #[must_use]
    pub fn adjacent_in_category(&self, exhibit_id: &str) -> Adjacent<'_> {
        let Some(exhibit) = self.exhibit_by_id(exhibit_id) else {
            return Adjacent::default();
        };

        let sequence: Vec<&Exhibit> = self
            .routes
            .get(&exhibit.category)
            .map(|route| route.iter().map(|&i| &self.exhibits[i]).collect())
            .unwrap_or_default();
        Adjacent::within(&sequence, exhibit_id)
    }
}

/// Maps each id to its declaration index, rejecting repeats.
fn index_ids<'a>(
    entity: &'static str,
    ids: impl Iterator<Item = &'a str>,
) -> Result<HashMap<String, usize>, CatalogError> {
    let mut index = HashMap::new();
    for (position, id) in ids.enumerate() {
        if index.insert(id.to_string(), position).is_some() {
            return Err(CatalogError::duplicate(entity, id));
        }
    }
    Ok(index)
}

// ============================================================================
// Tests
// ============================================================================
