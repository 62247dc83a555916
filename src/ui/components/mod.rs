//! Reusable UI components for the museum TUI.
//!
//! Components are stateless: they take what they draw as arguments.

pub mod toast;

pub use toast::render_toast;
