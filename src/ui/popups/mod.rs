//! Popup UI components for the museum TUI.
//!
//! Popups are modal overlays drawn on top of the current view.

pub mod payment;
