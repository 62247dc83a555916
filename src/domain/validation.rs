//! Catalog integrity checks.
//!
//! Queries tolerate malformed data (dangling links truncate walks, cycles
//! are caught). This module reports the same problems up front so a catalog
//! author can fix them: unknown categories, dangling or looping workflow
//! links, links that leave their category, and similar.

use serde::Serialize;

use super::{Catalog, WalkFault};

// ============================================================================
// Issue Codes
// ============================================================================

pub const UNKNOWN_CATEGORY: &str = "unknown-category";
pub const DANGLING_FIRST_EXHIBIT: &str = "dangling-first-exhibit";
pub const DANGLING_NEXT: &str = "dangling-next";
pub const WORKFLOW_CYCLE: &str = "workflow-cycle";
pub const CROSS_CATEGORY_NEXT: &str = "cross-category-next";
pub const SELF_NEXT: &str = "self-next";
pub const EMPTY_CATEGORY: &str = "empty-category";
pub const OFF_PATH_EXHIBIT: &str = "off-path-exhibit";
pub const POSITION_OUT_OF_RANGE: &str = "position-out-of-range";

// ============================================================================
// Types
// ============================================================================

/// A single finding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationIssue {
    /// Stable issue code.
    pub code: &'static str,
    /// Human-readable message.
    pub message: String,
    /// Ids of the entities involved.
    pub ids: Vec<String>,
}

impl ValidationIssue {
    fn new(code: &'static str, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            ids: Vec::new(),
        }
    }

    fn with_ids<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ids = ids.into_iter().map(Into::into).collect();
        self
    }
}

/// Result of validating a catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    /// Problems that make queries truncate or misbehave.
    pub errors: Vec<ValidationIssue>,
    /// Suspicious data that queries handle but probably isn't intended.
    pub warnings: Vec<ValidationIssue>,
}

impl ValidationReport {
    /// `true` when there are no errors. Warnings do not count.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    #[must_use]
    pub fn total_issues(&self) -> usize {
        self.errors.len() + self.warnings.len()
    }

    /// Every issue code, errors first.
    #[must_use]
    pub fn codes(&self) -> Vec<&'static str> {
        self.errors
            .iter()
            .chain(&self.warnings)
            .map(|issue| issue.code)
            .collect()
    }
}

// ============================================================================
// Validation
// ============================================================================

/// Validates a catalog for broken references and suspicious structure.
#[must_use]
pub fn validate_catalog(catalog: &Catalog) -> ValidationReport {
    let mut report = ValidationReport::default();

    check_exhibit_references(catalog, &mut report);
    check_workflows(catalog, &mut report);
    check_positions(catalog, &mut report);

    tracing::debug!(
        errors = report.errors.len(),
        warnings = report.warnings.len(),
        "catalog validated"
    );
    report
}

fn check_exhibit_references(catalog: &Catalog, report: &mut ValidationReport) {
    for exhibit in catalog.exhibits() {
        if catalog.category_by_id(&exhibit.category).is_none() {
            report.errors.push(
                ValidationIssue::new(
                    UNKNOWN_CATEGORY,
                    format!(
                        "Exhibit '{}' belongs to unknown category '{}'",
                        exhibit.id, exhibit.category
                    ),
                )
                .with_ids([exhibit.id.as_str(), exhibit.category.as_str()]),
            );
        }

        let Some(next) = exhibit.next.as_deref() else {
            continue;
        };

        if next == exhibit.id {
            report.warnings.push(
                ValidationIssue::new(SELF_NEXT, format!("Exhibit '{}' links to itself", next))
                    .with_ids([next]),
            );
            continue;
        }

        match catalog.next_exhibit(&exhibit.id) {
            None => report.errors.push(
                ValidationIssue::new(
                    DANGLING_NEXT,
                    format!("Exhibit '{}' links to unknown exhibit '{}'", exhibit.id, next),
                )
                .with_ids([exhibit.id.as_str(), next]),
            ),
            Some(target) if target.category != exhibit.category => report.warnings.push(
                ValidationIssue::new(
                    CROSS_CATEGORY_NEXT,
                    format!(
                        "Exhibit '{}' ({}) links to '{}' in category '{}'",
                        exhibit.id, exhibit.category, target.id, target.category
                    ),
                )
                .with_ids([exhibit.id.as_str(), target.id.as_str()]),
            ),
            Some(_) => {}
        }
    }
}

fn check_workflows(catalog: &Catalog, report: &mut ValidationReport) {
    for category in catalog.categories() {
        let members = catalog.exhibits_in_category(&category.id);
        if members.is_empty() {
            report.warnings.push(
                ValidationIssue::new(
                    EMPTY_CATEGORY,
                    format!("Category '{}' has no exhibits", category.id),
                )
                .with_ids([category.id.as_str()]),
            );
        }

        let Some(first) = category.first_exhibit_id.as_deref() else {
            continue;
        };

        let walk = catalog.walk_workflow(&category.id);
        match &walk.fault {
            Some(WalkFault::Dangling { from: None, missing }) => report.errors.push(
                ValidationIssue::new(
                    DANGLING_FIRST_EXHIBIT,
                    format!(
                        "Category '{}' starts at unknown exhibit '{}'",
                        category.id, missing
                    ),
                )
                .with_ids([category.id.as_str(), first]),
            ),
            Some(WalkFault::Cycle { from, revisited }) => report.errors.push(
                ValidationIssue::new(
                    WORKFLOW_CYCLE,
                    format!(
                        "Workflow of '{}' loops from '{}' back to '{}'",
                        category.id, from, revisited
                    ),
                )
                .with_ids(walk.path.iter().map(|e| e.id.as_str())),
            ),
            // Dangling links further down are reported per exhibit.
            Some(WalkFault::Dangling { from: Some(_), .. }) | None => {}
        }

        for member in members {
            if !walk.path.iter().any(|e| e.id == member.id) {
                report.warnings.push(
                    ValidationIssue::new(
                        OFF_PATH_EXHIBIT,
                        format!(
                            "Exhibit '{}' is not on the workflow of '{}'",
                            member.id, category.id
                        ),
                    )
                    .with_ids([member.id.as_str(), category.id.as_str()]),
                );
            }
        }
    }
}

fn check_positions(catalog: &Catalog, report: &mut ValidationReport) {
    let category_positions = catalog
        .categories()
        .iter()
        .map(|c| (c.id.as_str(), Some(c.position)));
    let exhibit_positions = catalog
        .exhibits()
        .iter()
        .map(|e| (e.id.as_str(), e.position));

    for (id, position) in category_positions.chain(exhibit_positions) {
        if let Some(position) = position
            && !position.is_in_bounds()
        {
            report.warnings.push(
                ValidationIssue::new(
                    POSITION_OUT_OF_RANGE,
                    format!(
                        "'{}' is placed at ({}, {}), outside the 0-100 map",
                        id, position.x, position.y
                    ),
                )
                .with_ids([id]),
            );
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
