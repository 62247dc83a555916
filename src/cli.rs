//! Command-line interface.
//!
//! Without a subcommand the museum opens in the terminal. The subcommands
//! are for catalog authors and print plain text.

use std::fmt::Write as _;
use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::domain::{Catalog, CatalogError, TraversalSetting, ValidationIssue, ValidationReport};

// ============================================================================
// Arguments
// ============================================================================

/// A terminal museum of beautiful code.
#[derive(Debug, Parser)]
#[command(name = "codemuseum", version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Catalog JSON file to load instead of the built-in collection
    #[arg(long, global = true, value_name = "FILE")]
    pub catalog: Option<PathBuf>,

    /// How previous/next navigation picks neighbours
    #[arg(long, global = true, value_enum)]
    pub traversal: Option<TraversalSetting>,

    /// Start on the museum map, skipping the entrance
    #[arg(long)]
    pub skip_entry: bool,
}

#[derive(Debug, Subcommand, PartialEq, Eq)]
pub enum Command {
    /// Check a catalog for broken links and suspicious structure
    Validate,
    /// Print the workflow path of a category
    Path {
        /// Category id
        category: String,
    },
    /// Display version information
    Version,
}

// ============================================================================
// Output
// ============================================================================

/// Renders a validation report, one issue per line, then a summary.
#[must_use]
pub fn format_report(report: &ValidationReport) -> String {
    let mut out = String::new();
    for issue in &report.errors {
        push_issue(&mut out, "error", issue);
    }
    for issue in &report.warnings {
        push_issue(&mut out, "warning", issue);
    }

    if report.total_issues() == 0 {
        out.push_str("catalog is valid\n");
    } else {
        let _ = writeln!(
            out,
            "{} error(s), {} warning(s)",
            report.errors.len(),
            report.warnings.len()
        );
    }
    out
}

fn push_issue(out: &mut String, severity: &str, issue: &ValidationIssue) {
    let _ = writeln!(out, "{severity:<7} [{}] {}", issue.code, issue.message);
}

/// Renders the workflow path of `category_id`, one numbered exhibit per
/// line.
///
/// # Errors
///
/// Returns [`CatalogError::CycleDetected`] if the chain loops.
pub fn format_path(catalog: &Catalog, category_id: &str) -> Result<String, CatalogError> {
    let path = catalog.workflow_path(category_id)?;
    if path.is_empty() {
        return Ok(format!("{category_id}: no workflow path\n"));
    }

    let mut out = String::new();
    for (step, exhibit) in path.iter().enumerate() {
        let _ = writeln!(out, "{:>2}. {}  {}", step + 1, exhibit.id, exhibit.title);
    }
    Ok(out)
}

// ============================================================================
// Tests
// ============================================================================
