//! Catalog entity types: categories, exhibits and map positions.
//!
//! These are plain data records. They are deserialized from catalog JSON
//! (camelCase field names) or built by the seed table, and never mutated
//! once a [`Catalog`](super::Catalog) owns them.

use serde::{Deserialize, Serialize};

// ============================================================================
// Position
// ============================================================================

/// Lower bound of the normalized map plane.
pub const PLANE_MIN: f32 = 0.0;

/// Upper bound of the normalized map plane.
pub const PLANE_MAX: f32 = 100.0;

/// A point on the museum map, in a normalized 0–100 plane.
///
/// `x` grows to the right and `y` grows downwards, like screen coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: f32,
    pub y: f32,
}

impl Position {
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Returns `true` if both coordinates lie inside the normalized plane.
    #[must_use]
    pub fn is_in_bounds(&self) -> bool {
        let range = PLANE_MIN..=PLANE_MAX;
        range.contains(&self.x) && range.contains(&self.y)
    }
}

// ============================================================================
// Category
// ============================================================================

/// A named grouping of exhibits, placed somewhere on the museum map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    /// Unique key.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Display blurb.
    pub description: String,
    /// Marker location on the map.
    pub position: Position,
    /// Entry point into this category's workflow chain.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_exhibit_id: Option<String>,
}

impl Category {
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
        position: Position,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            position,
            first_exhibit_id: None,
        }
    }

    /// Sets the first exhibit of the workflow chain.
    #[must_use]
    pub fn with_first_exhibit(mut self, exhibit_id: impl Into<String>) -> Self {
        self.first_exhibit_id = Some(exhibit_id.into());
        self
    }
}

// ============================================================================
// Exhibit
// ============================================================================

/// A displayed code snippet.
///
/// `code` is shown verbatim; it is never parsed or executed, and `language`
/// is only a label used for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Exhibit {
    /// Unique key.
    pub id: String,
    /// Display title.
    pub title: String,
    /// Literal source text.
    pub code: String,
    /// Free-text language label.
    pub language: String,
    /// Display blurb.
    pub description: String,
    /// Id of the owning category.
    pub category: String,
    /// Id of the following exhibit in the workflow chain.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next: Option<String>,
    /// Marker location on a category map.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
}

impl Exhibit {
    /// Creates an exhibit with empty code, language and description.
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            code: String::new(),
            language: String::new(),
            description: String::new(),
            category: category.into(),
            next: None,
            position: None,
        }
    }

    #[must_use]
    pub fn with_code(mut self, code: impl Into<String>, language: impl Into<String>) -> Self {
        self.code = code.into();
        self.language = language.into();
        self
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    #[must_use]
    pub fn with_next(mut self, next: impl Into<String>) -> Self {
        self.next = Some(next.into());
        self
    }

    #[must_use]
    pub fn with_position(mut self, position: Position) -> Self {
        self.position = Some(position);
        self
    }
}

// ============================================================================
// Tests
// ============================================================================
