//! Shared test utilities and Mother pattern factories.
//!
//! Use these helpers to avoid copy-pasting catalog and app setup across
//! tests.
#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use ratatui::{Terminal, backend::TestBackend, buffer::Buffer};
use rstest::fixture;

use crate::domain::{
    Catalog, Category, Exhibit, Position, TraversalSetting, builtin_catalog,
};
use crate::state::platform::clipboard::{Clipboard, ClipboardError, ClipboardResult};
use crate::state::{App, StartupOptions};

// ============================================================================
// Mother Pattern Factories
// ============================================================================

pub struct CatalogMother;

impl CatalogMother {
    /// A category named after its id, placed at the origin.
    #[must_use]
    pub fn category(id: &str) -> Category {
        Category::new(id, id, format!("About {id}"), Position::default())
    }

    /// An exhibit titled after its id with a one-line snippet.
    #[must_use]
    pub fn exhibit(id: &str, category: &str) -> Exhibit {
        Exhibit::new(id, id, category)
            .with_code(format!("fn {}() {{}}", id.replace('-', "_")), "rust")
            .with_description(format!("Exhibit {id}"))
    }

    /// One category whose exhibits form a workflow chain in the given order.
    #[must_use]
    pub fn chain(category: &str, exhibit_ids: &[&str]) -> Catalog {
        let mut first = Self::category(category);
        if let Some(head) = exhibit_ids.first() {
            first = first.with_first_exhibit(*head);
        }

        let exhibits = exhibit_ids
            .iter()
            .enumerate()
            .map(|(i, id)| {
                let exhibit = Self::exhibit(id, category);
                match exhibit_ids.get(i + 1) {
                    Some(next) => exhibit.with_next(*next),
                    None => exhibit,
                }
            })
            .collect();

        Catalog::new(vec![first], exhibits, TraversalSetting::Auto)
            .expect("chain ids should be unique")
    }

    /// The built-in collection with automatic traversal.
    #[must_use]
    pub fn builtin() -> Catalog {
        builtin_catalog(TraversalSetting::Auto).expect("built-in catalog should build")
    }
}

/// Collects exhibit ids for compact assertions.
#[must_use]
pub fn ids<'a>(exhibits: &[&'a Exhibit]) -> Vec<&'a str> {
    exhibits.iter().map(|e| e.id.as_str()).collect()
}

// ============================================================================
// Clipboard Double
// ============================================================================

/// Records copied text instead of touching the system clipboard.
#[derive(Debug, Clone, Default)]
pub struct RecordingClipboard {
    copied: Arc<Mutex<Vec<String>>>,
    fail: bool,
}

impl RecordingClipboard {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A clipboard that rejects every copy.
    #[must_use]
    pub fn unavailable() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn copied(&self) -> Vec<String> {
        self.copied.lock().expect("clipboard lock").clone()
    }
}

impl Clipboard for RecordingClipboard {
    fn copy_text(&self, text: &str) -> ClipboardResult<()> {
        if self.fail {
            return Err(ClipboardError::NotAvailable);
        }
        self.copied.lock().expect("clipboard lock").push(text.to_string());
        Ok(())
    }
}

// ============================================================================
// App Builders
// ============================================================================

/// An app over `catalog` whose clipboard is recorded.
#[must_use]
pub fn app_with(catalog: Catalog, skip_entry: bool) -> (App, RecordingClipboard) {
    let clipboard = RecordingClipboard::new();
    let mut app = App::new(Arc::new(catalog), StartupOptions { skip_entry });
    app.clipboard = Box::new(clipboard.clone());
    (app, clipboard)
}

// ============================================================================
// rstest Fixtures
// ============================================================================

#[fixture]
pub fn test_terminal() -> Terminal<TestBackend> {
    Terminal::new(TestBackend::new(100, 40)).expect("terminal creation should succeed")
}

#[fixture]
pub fn test_terminal_80x24() -> Terminal<TestBackend> {
    Terminal::new(TestBackend::new(80, 24)).expect("terminal creation should succeed")
}

/// The built-in collection, starting on the entry screen.
#[fixture]
pub fn museum_app() -> App {
    app_with(CatalogMother::builtin(), false).0
}

/// The built-in collection, starting on the map.
#[fixture]
pub fn map_app() -> App {
    app_with(CatalogMother::builtin(), true).0
}

/// Flattens a buffer into newline-separated rows.
#[must_use]
pub fn buffer_to_string(buffer: &Buffer) -> String {
    let area = buffer.area();
    let mut result = String::new();
    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            result.push_str(buffer[(x, y)].symbol());
        }
        result.push('\n');
    }
    result
}
