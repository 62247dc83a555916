//! State management module for the museum TUI.
//!
//! The state is split by concern:
//!
//! - [`NavigationState`] - current view and highlighted items
//! - [`PaymentState`] - the simulated entry payment dialog
//! - [`UiState`] - transient presentation state (toasts)
//! - [`AppConfig`] - configuration read at startup
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────┐
//! │                        App                           │
//! ├────────────────┬──────────────┬──────────────────────┤
//! │ NavigationState │ PaymentState │       UiState        │
//! │  - view         │  - stage     │  - toast             │
//! │  - highlights   │  - attempt   │                      │
//! ├────────────────┴──────────────┴──────────────────────┤
//! │           Arc<Catalog> (read-only content graph)     │
//! └──────────────────────────────────────────────────────┘
//! ```

use std::sync::Arc;

use tokio::sync::mpsc;

use crate::domain::Catalog;

// ============================================================================
// Module Declarations
// ============================================================================

mod app_lifecycle;

pub mod config;
pub mod navigation;
pub mod payment;
pub mod platform;
pub mod ui_state;

// ============================================================================
// Re-exports
// ============================================================================

pub use config::AppConfig;
pub use navigation::{NavigationState, View};
pub use payment::{PaymentOutcome, PaymentStage, PaymentState, PaymentStep};
pub use platform::{Clipboard, ClipboardManager};
pub use ui_state::UiState;

// ============================================================================
// App Message Types
// ============================================================================

/// Messages sent from background tasks to the main app loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMessage {
    /// A payment timer fired for the given dialog attempt.
    PaymentStep { attempt: u64, step: PaymentStep },
}

// ============================================================================
// Startup Options
// ============================================================================

/// Options that can be passed when starting the application.
#[derive(Debug, Clone, Default)]
pub struct StartupOptions {
    /// Start on the map, skipping the entry screen and payment.
    pub skip_entry: bool,
}

// ============================================================================
// Main App State
// ============================================================================

/// The main application state container.
#[derive(Debug)]
pub struct App {
    /// The content graph, shared read-only.
    pub catalog: Arc<Catalog>,

    /// Navigation state - current view and highlights.
    pub nav: NavigationState,

    /// Payment dialog state.
    pub payment: PaymentState,

    /// UI state - toasts.
    pub ui: UiState,

    /// Whether the application should exit.
    pub exit: bool,

    /// Animation tick counter for UI animations.
    pub animation_tick: u64,

    // NOTE: sends use `let _ = tx.send(...)`; the receiver lives as long as
    // the App, so a failed send only happens during shutdown.
    /// Sender for app messages (cloned into timer tasks).
    pub(crate) message_tx: mpsc::UnboundedSender<AppMessage>,

    /// Receiver for app messages.
    pub(crate) message_rx: mpsc::UnboundedReceiver<AppMessage>,

    /// Where copied code goes.
    pub(crate) clipboard: Box<dyn Clipboard>,
}

// ============================================================================
// Implementation Modules
// ============================================================================

// Key handling and command execution
mod app_commands;

// Moving between views and exhibits
mod app_navigation;

// Payment timers, clipboard
mod app_actions;

// ============================================================================
// Tests
// ============================================================================
