//! Domain types for the code museum.
//!
//! This module holds the content graph: the immutable catalog of categories
//! and exhibits, and the queries the views run against it.
//!
//! # Module Organization
//!
//! - [`exhibit`] - Category, exhibit and map position records
//! - [`catalog`] - The catalog registry and its queries
//! - [`traversal`] - Traversal setting/strategy and adjacency
//! - [`validation`] - Integrity report for catalog authors
//! - [`seed`] - The built-in collection
//! - [`error`] - Catalog error type

// ============================================================================
// Module Declarations
// ============================================================================

pub mod catalog;
pub mod error;
pub mod exhibit;
pub mod seed;
pub mod traversal;
pub mod validation;

// ============================================================================
// Re-exports
// ============================================================================

pub use catalog::{Catalog, CatalogDocument, WalkFault, WorkflowWalk};
pub use error::CatalogError;
pub use exhibit::{Category, Exhibit, Position};
pub use seed::builtin_catalog;
pub use traversal::{Adjacent, TraversalSetting, TraversalStrategy};
pub use validation::{ValidationIssue, ValidationReport, validate_catalog};
